//! Trellis Events
//!
//! Host-side event plumbing shared by the element pipeline.
//!
//! Features:
//! - Raw native payloads as delivered by the host surface
//! - Normalization into the touch-shaped payload handlers expect
//! - Process-wide responder plugin registration

pub mod native;
pub mod normalize;
pub mod responder;

pub use native::{
    NativeEvent, NodeId, NormalizedNativeEvent, NormalizedTouch, RawNativeEvent, RawTouch, Rect,
};
pub use normalize::normalize_native_event;
pub use responder::{
    inject_responder_event_plugin, is_registered, ResponderEventPlugin, ResponderPhase,
};
