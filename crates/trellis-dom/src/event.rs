//! Synthetic Events
//!
//! The event object handlers receive. Wraps the host's native payload.

use trellis_events::{NativeEvent, RawNativeEvent};

/// Synthetic event
#[derive(Debug, Clone)]
pub struct SyntheticEvent {
    /// Event type, e.g. `"click"`
    pub event_type: String,
    /// Native payload; replaced wholesale on normalization
    pub native_event: NativeEvent,
    pub cancelable: bool,
    /// Legacy key code for keyboard events
    pub which: Option<u32>,
    default_prevented: bool,
}

impl SyntheticEvent {
    /// Wrap a raw host payload
    pub fn from_native(raw: RawNativeEvent) -> Self {
        Self {
            event_type: raw.event_type.clone(),
            which: raw.which,
            native_event: NativeEvent::Raw(raw),
            cancelable: true,
            default_prevented: false,
        }
    }

    /// Keyboard event carrying a key code
    pub fn key_press(which: u32) -> Self {
        Self::from_native(RawNativeEvent::key("keypress", which))
    }

    /// Mouse click at a page position
    pub fn click(page_x: f64, page_y: f64) -> Self {
        Self::from_native(RawNativeEvent::mouse("click", page_x, page_y))
    }

    pub fn with_cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }

    /// Prevent default action
    ///
    /// No effect on non-cancelable events.
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_native_copies_type_and_key() {
        let event = SyntheticEvent::key_press(13);
        assert_eq!(event.event_type, "keypress");
        assert_eq!(event.which, Some(13));
        assert!(!event.native_event.is_normalized());
    }

    #[test]
    fn test_prevent_default_respects_cancelable() {
        let mut event = SyntheticEvent::click(0.0, 0.0);
        event.prevent_default();
        assert!(event.is_default_prevented());

        let mut fixed = SyntheticEvent::click(0.0, 0.0).with_cancelable(false);
        fixed.prevent_default();
        assert!(!fixed.is_default_prevented());
    }
}
