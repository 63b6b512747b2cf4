//! Event Handlers
//!
//! Typed handler slots. Handlers are looked up by slot, never by inspecting
//! prop values at runtime.

use std::fmt;
use std::rc::Rc;

use crate::event::SyntheticEvent;

/// Event consumer
///
/// Returns whether the event was handled. Wrappers forward this value.
#[derive(Clone)]
pub struct EventHandler(Rc<dyn Fn(&mut SyntheticEvent) -> bool>);

impl EventHandler {
    pub fn new(f: impl Fn(&mut SyntheticEvent) -> bool + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the handler
    #[inline]
    pub fn call(&self, event: &mut SyntheticEvent) -> bool {
        (self.0)(event)
    }

    /// Identity comparison
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventHandler({:p})", Rc::as_ptr(&self.0))
    }
}

/// Host handler slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HandlerSlot {
    // Interaction handlers
    Focus,
    Blur,
    Click,
    ClickCapture,
    ContextMenu,
    TouchStart,
    TouchStartCapture,
    TouchMove,
    TouchMoveCapture,
    TouchEnd,
    TouchEndCapture,
    TouchCancel,
    TouchCancelCapture,
    ResponderRelease,

    // Keyboard
    KeyPress,
    KeyDown,
    KeyUp,

    // Mouse
    MouseDown,
    MouseUp,
    MouseMove,
    MouseEnter,
    MouseLeave,

    // Responder lifecycle
    ResponderGrant,
    ResponderMove,
    ResponderTerminate,
}

impl HandlerSlot {
    pub const COUNT: usize = 25;

    pub const ALL: [HandlerSlot; Self::COUNT] = [
        Self::Focus,
        Self::Blur,
        Self::Click,
        Self::ClickCapture,
        Self::ContextMenu,
        Self::TouchStart,
        Self::TouchStartCapture,
        Self::TouchMove,
        Self::TouchMoveCapture,
        Self::TouchEnd,
        Self::TouchEndCapture,
        Self::TouchCancel,
        Self::TouchCancelCapture,
        Self::ResponderRelease,
        Self::KeyPress,
        Self::KeyDown,
        Self::KeyUp,
        Self::MouseDown,
        Self::MouseUp,
        Self::MouseMove,
        Self::MouseEnter,
        Self::MouseLeave,
        Self::ResponderGrant,
        Self::ResponderMove,
        Self::ResponderTerminate,
    ];

    /// Host prop name of this slot
    pub fn prop_name(self) -> &'static str {
        match self {
            Self::Focus => "onFocus",
            Self::Blur => "onBlur",
            Self::Click => "onClick",
            Self::ClickCapture => "onClickCapture",
            Self::ContextMenu => "onContextMenu",
            Self::TouchStart => "onTouchStart",
            Self::TouchStartCapture => "onTouchStartCapture",
            Self::TouchMove => "onTouchMove",
            Self::TouchMoveCapture => "onTouchMoveCapture",
            Self::TouchEnd => "onTouchEnd",
            Self::TouchEndCapture => "onTouchEndCapture",
            Self::TouchCancel => "onTouchCancel",
            Self::TouchCancelCapture => "onTouchCancelCapture",
            Self::ResponderRelease => "onResponderRelease",
            Self::KeyPress => "onKeyPress",
            Self::KeyDown => "onKeyDown",
            Self::KeyUp => "onKeyUp",
            Self::MouseDown => "onMouseDown",
            Self::MouseUp => "onMouseUp",
            Self::MouseMove => "onMouseMove",
            Self::MouseEnter => "onMouseEnter",
            Self::MouseLeave => "onMouseLeave",
            Self::ResponderGrant => "onResponderGrant",
            Self::ResponderMove => "onResponderMove",
            Self::ResponderTerminate => "onResponderTerminate",
        }
    }

    /// Parse from a host prop name
    pub fn from_prop_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.prop_name() == name)
    }

    /// Interaction handlers subject to disabling and event rewriting
    pub fn is_interaction(self) -> bool {
        matches!(self,
            Self::Focus | Self::Blur | Self::Click | Self::ClickCapture |
            Self::ContextMenu | Self::TouchStart | Self::TouchStartCapture |
            Self::TouchMove | Self::TouchMoveCapture | Self::TouchEnd |
            Self::TouchEndCapture | Self::TouchCancel | Self::TouchCancelCapture |
            Self::ResponderRelease
        )
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// One optional handler per slot
#[derive(Clone)]
pub struct Handlers {
    slots: [Option<EventHandler>; HandlerSlot::COUNT],
}

impl Handlers {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    pub fn get(&self, slot: HandlerSlot) -> Option<&EventHandler> {
        self.slots[slot.index()].as_ref()
    }

    /// Install a handler, returning the one it replaces
    pub fn set(&mut self, slot: HandlerSlot, handler: EventHandler) -> Option<EventHandler> {
        self.slots[slot.index()].replace(handler)
    }

    pub fn contains(&self, slot: HandlerSlot) -> bool {
        self.slots[slot.index()].is_some()
    }

    /// Occupied slots in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (HandlerSlot, &EventHandler)> {
        HandlerSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|h| (slot, h)))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Handlers {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(slot, h)| (slot.prop_name(), h)))
            .finish()
    }
}
