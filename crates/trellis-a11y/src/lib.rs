//! Trellis Accessibility
//!
//! Accessibility helpers consumed by the element pipeline.
//!
//! Features:
//! - ARIA role parsing
//! - Disabled-state detection
//! - Role-equivalent host tags

pub mod aria;
pub mod component;
pub mod state;

pub use aria::AriaRole;
pub use component::{props_to_accessibility_component, resolve_component, parse_level};
pub use state::is_disabled;

/// Accessibility error
#[derive(Debug, thiserror::Error)]
pub enum A11yError {
    #[error("Invalid ARIA role: {0}")]
    InvalidRole(String),

    #[error("Invalid heading level: {0}")]
    InvalidLevel(String),
}
