//! Responder Event Plugin
//!
//! Maps host events onto responder phases. Installed once per process.

use std::sync::OnceLock;

static RESPONDER_PLUGIN: OnceLock<ResponderEventPlugin> = OnceLock::new();

/// Responder lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponderPhase {
    Start,
    Move,
    End,
}

/// Host event dependencies of the responder system
#[derive(Debug)]
pub struct ResponderEventPlugin {
    start: &'static [&'static str],
    moves: &'static [&'static str],
    end: &'static [&'static str],
}

impl ResponderEventPlugin {
    fn new() -> Self {
        Self {
            start: &["touchstart", "mousedown"],
            moves: &["touchmove", "mousemove", "scroll"],
            end: &["touchend", "touchcancel", "mouseup", "dragstart"],
        }
    }

    /// Host event types that feed a phase
    pub fn dependencies(&self, phase: ResponderPhase) -> &'static [&'static str] {
        match phase {
            ResponderPhase::Start => self.start,
            ResponderPhase::Move => self.moves,
            ResponderPhase::End => self.end,
        }
    }

    /// Phase a host event type belongs to
    pub fn phase_for(&self, event_type: &str) -> Option<ResponderPhase> {
        [ResponderPhase::Start, ResponderPhase::Move, ResponderPhase::End]
            .into_iter()
            .find(|&phase| self.dependencies(phase).contains(&event_type))
    }
}

/// Register the responder plugin
///
/// Idempotent: every call returns the instance created by the first one.
pub fn inject_responder_event_plugin() -> &'static ResponderEventPlugin {
    RESPONDER_PLUGIN.get_or_init(|| {
        tracing::debug!("Registering responder event plugin");
        ResponderEventPlugin::new()
    })
}

/// Whether registration has happened in this process
pub fn is_registered() -> bool {
    RESPONDER_PLUGIN.get().is_some()
}
