//! Trellis DOM
//!
//! Host-side element model: property bags, typed handler slots, synthetic
//! events and the elements instantiation produces.

mod element;
mod event;
mod handler;
mod props;

pub use element::{Component, Composite, Element, Node};
pub use event::SyntheticEvent;
pub use handler::{EventHandler, HandlerSlot, Handlers};
pub use props::{AttrValue, HostProps, PropValue, Props};

// Native payloads travel inside `SyntheticEvent`
pub use trellis_events::{NativeEvent, NormalizedNativeEvent, RawNativeEvent};
