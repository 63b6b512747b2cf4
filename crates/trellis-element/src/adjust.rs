//! Prop Adjustment
//!
//! Ensures handlers receive events of the expected shape. The `button` role
//! must also be activated from the keyboard like a native button, and must
//! drop its interaction handlers while disabled.

use std::collections::BTreeMap;

use trellis_a11y::is_disabled;
use trellis_dom::{AttrValue, EventHandler, HandlerSlot, Handlers, HostProps, NativeEvent};
use trellis_events::normalize_native_event;

use crate::Config;

/// Host props after adjustment
///
/// Only `adjust_props` produces this, and it cannot be fed back in, so every
/// bag is adjusted exactly once.
#[derive(Debug, Clone)]
pub struct AdjustedProps {
    attrs: BTreeMap<String, AttrValue>,
    handlers: Handlers,
}

impl AdjustedProps {
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    pub fn role(&self) -> Option<&str> {
        self.attr("role").and_then(AttrValue::as_str)
    }

    pub fn handler(&self, slot: HandlerSlot) -> Option<&EventHandler> {
        self.handlers.get(slot)
    }

    pub fn handlers(&self) -> &Handlers {
        &self.handlers
    }

    pub fn into_parts(self) -> (BTreeMap<String, AttrValue>, Handlers) {
        (self.attrs, self.handlers)
    }
}

/// Cancel the host's default follow-up before the release handler runs
///
/// Hosts fire compatibility mouse events after a touch sequence, which would
/// run release handlers a second time.
fn suppress_release_follow_up(handler: EventHandler) -> EventHandler {
    EventHandler::new(move |event| {
        if event.cancelable && !event.is_default_prevented() {
            event.prevent_default();
        }
        handler.call(event)
    })
}

fn with_normalized_event(handler: EventHandler) -> EventHandler {
    EventHandler::new(move |event| {
        let normalized = normalize_native_event(&event.native_event);
        event.native_event = NativeEvent::Normalized(normalized);
        handler.call(event)
    })
}

/// Enter/Space on a button role runs its click handler
fn keyboard_activation(click: Option<EventHandler>, config: Config) -> EventHandler {
    EventHandler::new(move |event| {
        let which = event.which.or_else(|| event.native_event.which());
        let activates = which.is_some_and(|key| config.is_activation_key(key));
        if event.is_default_prevented() || !activates {
            return false;
        }
        event.prevent_default();
        match &click {
            Some(click) => click.call(event),
            None => false,
        }
    })
}

/// Adjust a translated bag
pub fn adjust_props(props: HostProps, config: &Config) -> AdjustedProps {
    let is_button_role = props.role() == Some("button");
    let is_disabled = is_disabled(&props);

    let mut handlers = Handlers::new();
    for (slot, handler) in props.handlers().iter() {
        if !slot.is_interaction() {
            handlers.set(slot, handler.clone());
            continue;
        }

        if is_button_role && is_disabled {
            tracing::trace!("Removing {} from disabled button", slot.prop_name());
            continue;
        }

        let adjusted = match slot {
            HandlerSlot::ResponderRelease => suppress_release_follow_up(handler.clone()),
            _ => with_normalized_event(handler.clone()),
        };
        handlers.set(slot, adjusted);
    }

    if is_button_role && !is_disabled {
        let click = handlers.get(HandlerSlot::Click).cloned();
        let activation = keyboard_activation(click, config.clone());
        let replaced = handlers.set(HandlerSlot::KeyPress, activation);
        if replaced.is_some() {
            tracing::trace!("Replaced onKeyPress with keyboard activation");
        }
    }

    let (attrs, _) = props.into_parts();
    AdjustedProps { attrs, handlers }
}
