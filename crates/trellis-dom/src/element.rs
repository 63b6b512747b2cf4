//! Host Elements
//!
//! What element instantiation produces: a component, its final attributes
//! and handlers, and children. No rendering happens here.

use std::collections::BTreeMap;

use crate::event::SyntheticEvent;
use crate::handler::{EventHandler, HandlerSlot, Handlers};
use crate::props::AttrValue;

/// User-defined component type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite {
    pub name: String,
}

/// Component descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    /// Plain host tag, e.g. `div`
    Tag(String),
    /// Named user component
    Composite(Composite),
}

impl Component {
    pub fn tag(name: &str) -> Self {
        Self::Tag(name.to_string())
    }

    pub fn composite(name: &str) -> Self {
        Self::Composite(Composite { name: name.to_string() })
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, Self::Tag(_))
    }

    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::Tag(name) => Some(name),
            Self::Composite(_) => None,
        }
    }

    /// Display name for logging
    pub fn name(&self) -> &str {
        match self {
            Self::Tag(name) => name,
            Self::Composite(c) => &c.name,
        }
    }
}

impl From<&str> for Component {
    fn from(name: &str) -> Self {
        Self::tag(name)
    }
}

/// Child of an element
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(e) => Some(e),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            Self::Element(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Self::Element(e)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Host element
#[derive(Debug, Clone)]
pub struct Element {
    pub component: Component,
    attrs: BTreeMap<String, AttrValue>,
    handlers: Handlers,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(
        component: Component,
        attrs: BTreeMap<String, AttrValue>,
        handlers: Handlers,
        children: Vec<Node>,
    ) -> Self {
        Self { component, attrs, handlers, children }
    }

    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn handler(&self, slot: HandlerSlot) -> Option<&EventHandler> {
        self.handlers.get(slot)
    }

    pub fn has_handler(&self, slot: HandlerSlot) -> bool {
        self.handlers.contains(slot)
    }

    pub fn handlers(&self) -> &Handlers {
        &self.handlers
    }

    /// Fire the handler in `slot`
    ///
    /// Returns the handler's result, or `false` if the slot is empty.
    pub fn dispatch(&self, slot: HandlerSlot, event: &mut SyntheticEvent) -> bool {
        match self.handlers.get(slot) {
            Some(handler) => {
                tracing::trace!("Dispatching {} on <{}>", slot.prop_name(), self.component.name());
                handler.call(event)
            }
            None => false,
        }
    }
}
