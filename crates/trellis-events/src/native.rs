//! Native Events
//!
//! Payloads carried in `SyntheticEvent::native_event`.

/// Host node identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// Bounding client rect of an event target
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
}

/// A single touch point as reported by the host
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTouch {
    pub identifier: u32,
    pub page_x: f64,
    pub page_y: f64,
    pub screen_x: f64,
    pub screen_y: f64,
    pub force: f64,
    pub target: Option<NodeId>,
    /// Rect of `target` at dispatch time
    pub target_rect: Option<Rect>,
}

impl RawTouch {
    pub fn new(identifier: u32, page_x: f64, page_y: f64) -> Self {
        Self {
            identifier,
            page_x,
            page_y,
            ..Default::default()
        }
    }

    pub fn with_target(mut self, target: NodeId, rect: Rect) -> Self {
        self.target = Some(target);
        self.target_rect = Some(rect);
        self
    }
}

/// Host payload before normalization
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawNativeEvent {
    /// Host event type, e.g. `"touchend"` or `"mousedown"`
    pub event_type: String,
    pub timestamp: f64,
    pub target: Option<NodeId>,
    pub target_rect: Option<Rect>,

    // Mouse position
    pub page_x: f64,
    pub page_y: f64,

    // Touch lists
    pub touches: Vec<RawTouch>,
    pub changed_touches: Vec<RawTouch>,

    /// Legacy key code (`which`) for keyboard events
    pub which: Option<u32>,
}

impl RawNativeEvent {
    pub fn new(event_type: &str) -> Self {
        Self {
            event_type: event_type.to_string(),
            ..Default::default()
        }
    }

    /// Create a mouse event at a page position
    pub fn mouse(event_type: &str, page_x: f64, page_y: f64) -> Self {
        Self {
            event_type: event_type.to_string(),
            page_x,
            page_y,
            ..Default::default()
        }
    }

    /// Create a touch event
    pub fn touch(event_type: &str, touches: Vec<RawTouch>, changed_touches: Vec<RawTouch>) -> Self {
        Self {
            event_type: event_type.to_string(),
            touches,
            changed_touches,
            ..Default::default()
        }
    }

    /// Create a keyboard event carrying a key code
    pub fn key(event_type: &str, which: u32) -> Self {
        Self {
            event_type: event_type.to_string(),
            which: Some(which),
            ..Default::default()
        }
    }

    pub fn with_target(mut self, target: NodeId, rect: Rect) -> Self {
        self.target = Some(target);
        self.target_rect = Some(rect);
        self
    }

    pub fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Mouse payloads are normalized into a single synthetic touch
    pub fn is_mouse(&self) -> bool {
        self.event_type.contains("mouse")
    }
}

/// Touch point after normalization
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedTouch {
    pub identifier: u32,
    pub location_x: f64,
    pub location_y: f64,
    pub page_x: f64,
    pub page_y: f64,
    pub screen_x: f64,
    pub screen_y: f64,
    pub force: f64,
    pub target: Option<NodeId>,
    pub timestamp: f64,
}

/// Payload every consumer-visible handler observes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedNativeEvent {
    pub event_type: String,
    pub changed_touches: Vec<NormalizedTouch>,
    pub touches: Vec<NormalizedTouch>,
    pub identifier: u32,
    pub location_x: f64,
    pub location_y: f64,
    pub page_x: f64,
    pub page_y: f64,
    pub target: Option<NodeId>,
    pub timestamp: f64,
    pub which: Option<u32>,
}

/// Native payload slot of a synthetic event
///
/// Normalization swaps the whole value from `Raw` to `Normalized`.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeEvent {
    Raw(RawNativeEvent),
    Normalized(NormalizedNativeEvent),
}

impl NativeEvent {
    pub fn is_normalized(&self) -> bool {
        matches!(self, Self::Normalized(_))
    }

    pub fn as_raw(&self) -> Option<&RawNativeEvent> {
        match self {
            Self::Raw(raw) => Some(raw),
            Self::Normalized(_) => None,
        }
    }

    pub fn as_normalized(&self) -> Option<&NormalizedNativeEvent> {
        match self {
            Self::Normalized(n) => Some(n),
            Self::Raw(_) => None,
        }
    }

    /// Host event type of either shape
    pub fn event_type(&self) -> &str {
        match self {
            Self::Raw(raw) => &raw.event_type,
            Self::Normalized(n) => &n.event_type,
        }
    }

    /// Key code of either shape
    pub fn which(&self) -> Option<u32> {
        match self {
            Self::Raw(raw) => raw.which,
            Self::Normalized(n) => n.which,
        }
    }
}

impl From<RawNativeEvent> for NativeEvent {
    fn from(raw: RawNativeEvent) -> Self {
        Self::Raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_detection() {
        assert!(RawNativeEvent::mouse("mouseup", 1.0, 2.0).is_mouse());
        assert!(!RawNativeEvent::new("touchend").is_mouse());
        assert!(!RawNativeEvent::key("keypress", 13).is_mouse());
    }

    #[test]
    fn test_native_event_accessors() {
        let native = NativeEvent::from(RawNativeEvent::key("keypress", 32));
        assert!(!native.is_normalized());
        assert_eq!(native.event_type(), "keypress");
        assert_eq!(native.which(), Some(32));
        assert!(native.as_normalized().is_none());
    }
}
