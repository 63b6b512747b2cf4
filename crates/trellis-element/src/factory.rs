//! Element Instantiation

use trellis_dom::{Component, Element, Node};

use crate::adjust::AdjustedProps;

/// Builds host elements from adjusted props
pub trait ElementFactory {
    /// Opaque element handle
    type Element;

    fn instantiate(
        &self,
        component: Component,
        props: AdjustedProps,
        children: Vec<Node>,
    ) -> Self::Element;
}

/// Builds `trellis_dom::Element` values
#[derive(Debug, Clone, Copy, Default)]
pub struct DomElementFactory;

impl ElementFactory for DomElementFactory {
    type Element = Element;

    fn instantiate(
        &self,
        component: Component,
        props: AdjustedProps,
        children: Vec<Node>,
    ) -> Element {
        let (attrs, handlers) = props.into_parts();
        tracing::trace!(
            "Instantiating <{}> with {} attributes, {} handlers, {} children",
            component.name(),
            attrs.len(),
            handlers.len(),
            children.len()
        );
        Element::new(component, attrs, handlers, children)
    }
}
