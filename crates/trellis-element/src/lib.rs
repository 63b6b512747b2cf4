//! Trellis Element
//!
//! Creates host elements from platform-neutral component descriptions.
//!
//! Each call runs four stages in order:
//! 1. component resolution: swap plain tags for role-equivalent ones
//! 2. prop translation into host attribute names
//! 3. prop adjustment: disabled buttons, event normalization, release
//!    de-duplication and keyboard activation
//! 4. element instantiation
//!
//! # Example
//! ```rust
//! use trellis_element::{create_element, HandlerSlot, Props, SyntheticEvent};
//!
//! let button = create_element(
//!     "div",
//!     Props::new().with("role", "button").with_handler("onClick", |_| true),
//!     vec!["Save".into()],
//! );
//!
//! let mut space = SyntheticEvent::key_press(32);
//! assert!(button.dispatch(HandlerSlot::KeyPress, &mut space));
//! assert!(space.is_default_prevented());
//! ```

mod adjust;
mod config;
mod dom_props;
mod factory;

pub use adjust::{adjust_props, AdjustedProps};
pub use config::{Config, KEY_ENTER, KEY_SPACE};
pub use dom_props::{DomPropTranslator, PropTranslator};
pub use factory::{DomElementFactory, ElementFactory};

pub use trellis_dom::{Component, Element, EventHandler, HandlerSlot, Node, Props, SyntheticEvent};

use trellis_a11y::resolve_component;
use trellis_events::inject_responder_event_plugin;

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("At least one activation key is required")]
    EmptyActivationKeys,

    #[error("Activation key {0} listed more than once")]
    DuplicateActivationKey(u32),
}

/// Element creation pipeline
#[derive(Debug, Clone)]
pub struct ElementAdapter<T = DomPropTranslator, F = DomElementFactory> {
    config: Config,
    translator: T,
    factory: F,
}

impl ElementAdapter {
    /// Adapter with the DOM translator and factory
    pub fn new() -> Self {
        Self::with_parts(DomPropTranslator, DomElementFactory)
    }
}

impl Default for ElementAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PropTranslator, F: ElementFactory> ElementAdapter<T, F> {
    /// Adapter with custom translation and instantiation stages
    pub fn with_parts(translator: T, factory: F) -> Self {
        inject_responder_event_plugin();
        Self {
            config: Config::default(),
            translator,
            factory,
        }
    }

    /// Replace the configuration
    pub fn with_config(self, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, ..self })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Create an element
    pub fn create_element(
        &self,
        component: impl Into<Component>,
        props: Props,
        children: Vec<Node>,
    ) -> F::Element {
        let component = resolve_component(component.into(), &props);
        let host_props = self.translator.translate(&component, props);
        let adjusted = adjust_props(host_props, &self.config);
        tracing::debug!(
            "Creating <{}> ({} handlers)",
            component.name(),
            adjusted.handlers().len()
        );
        self.factory.instantiate(component, adjusted, children)
    }
}

/// Create an element with the default pipeline
pub fn create_element(
    component: impl Into<Component>,
    props: Props,
    children: Vec<Node>,
) -> Element {
    ElementAdapter::new().create_element(component, props, children)
}
