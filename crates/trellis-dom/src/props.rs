//! Property Bags
//!
//! `Props` is the platform-neutral bag a component is described with.
//! `HostProps` is the translated bag: host attributes plus typed handlers.

use std::collections::BTreeMap;

use crate::event::SyntheticEvent;
use crate::handler::{EventHandler, HandlerSlot, Handlers};

/// Platform-neutral prop value
#[derive(Debug, Clone)]
pub enum PropValue {
    String(String),
    Bool(bool),
    Number(f64),
    Handler(EventHandler),
}

impl PropValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    pub fn as_handler(&self) -> Option<&EventHandler> {
        match self {
            Self::Handler(h) => Some(h),
            _ => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<EventHandler> for PropValue {
    fn from(h: EventHandler) -> Self {
        Self::Handler(h)
    }
}

/// Platform-neutral property bag
#[derive(Debug, Clone, Default)]
pub struct Props {
    values: BTreeMap<String, PropValue>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: &str, value: impl Into<PropValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Builder-style handler insert
    pub fn with_handler(
        self,
        name: &str,
        f: impl Fn(&mut SyntheticEvent) -> bool + 'static,
    ) -> Self {
        self.with(name, EventHandler::new(f))
    }

    pub fn insert(&mut self, name: &str, value: impl Into<PropValue>) -> Option<PropValue> {
        self.values.insert(name.to_string(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.values.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(PropValue::as_str)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(PropValue::as_bool)
    }

    pub fn get_number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(PropValue::as_number)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl IntoIterator for Props {
    type Item = (String, PropValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

/// Host attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    String(String),
    Bool(bool),
    Number(f64),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Truthiness as the host reads boolean attributes
    pub fn is_true(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::String(s) => s == "true",
            Self::Number(_) => false,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// Translated, host-ready property bag
#[derive(Debug, Clone, Default)]
pub struct HostProps {
    attrs: BTreeMap<String, AttrValue>,
    handlers: Handlers,
}

impl HostProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style attribute insert
    pub fn with_attr(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder-style handler insert
    pub fn with_handler(mut self, slot: HandlerSlot, handler: EventHandler) -> Self {
        self.handlers.set(slot, handler);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<AttrValue>) {
        self.attrs.insert(name.to_string(), value.into());
    }

    /// The `role` attribute, if set
    pub fn role(&self) -> Option<&str> {
        self.attr("role").and_then(AttrValue::as_str)
    }

    pub fn handlers(&self) -> &Handlers {
        &self.handlers
    }

    pub fn handlers_mut(&mut self) -> &mut Handlers {
        &mut self.handlers
    }

    pub fn handler(&self, slot: HandlerSlot) -> Option<&EventHandler> {
        self.handlers.get(slot)
    }

    /// Split into attributes and handlers
    pub fn into_parts(self) -> (BTreeMap<String, AttrValue>, Handlers) {
        (self.attrs, self.handlers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_builder() {
        let props = Props::new()
            .with("role", "button")
            .with("disabled", true)
            .with("accessibilityLevel", 2)
            .with_handler("onClick", |_| true);

        assert_eq!(props.get_str("role"), Some("button"));
        assert_eq!(props.get_bool("disabled"), Some(true));
        assert_eq!(props.get_number("accessibilityLevel"), Some(2.0));
        assert!(props.get("onClick").and_then(PropValue::as_handler).is_some());
        assert_eq!(props.len(), 4);
    }

    #[test]
    fn test_attr_truthiness() {
        assert!(AttrValue::from(true).is_true());
        assert!(AttrValue::from("true").is_true());
        assert!(!AttrValue::from("false").is_true());
        assert!(!AttrValue::from(1.0).is_true());
    }

    #[test]
    fn test_host_props_role() {
        let props = HostProps::new().with_attr("role", "button");
        assert_eq!(props.role(), Some("button"));
        assert_eq!(HostProps::new().role(), None);
    }
}
