//! Integration tests - full creation pipeline
//!
//! Component resolution → translation → adjustment → instantiation

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use trellis_dom::{AttrValue, HostProps, NativeEvent, RawNativeEvent};
use trellis_element::{
    create_element, AdjustedProps, Component, Config, ConfigError, DomElementFactory,
    ElementAdapter, ElementFactory, EventHandler, HandlerSlot, Node, PropTranslator, Props,
    SyntheticEvent,
};
use trellis_events::{is_registered, normalize_native_event};

fn counting_handler() -> (Rc<Cell<u32>>, EventHandler) {
    let hits = Rc::new(Cell::new(0));
    let inner = hits.clone();
    let handler = EventHandler::new(move |_| {
        inner.set(inner.get() + 1);
        true
    });
    (hits, handler)
}

// ============================================================================
// BUTTON ROLE
// ============================================================================

#[test]
fn test_disabled_button_has_no_click() {
    let (hits, click) = counting_handler();
    let element = create_element(
        "div",
        Props::new().with("role", "button").with("onClick", click).with("disabled", true),
        vec![],
    );

    assert!(!element.has_handler(HandlerSlot::Click));
    assert!(!element.has_handler(HandlerSlot::KeyPress));

    let mut event = SyntheticEvent::click(1.0, 1.0);
    assert!(!element.dispatch(HandlerSlot::Click, &mut event));
    assert_eq!(hits.get(), 0);
}

#[test]
fn test_button_activates_on_space_and_enter() {
    let (hits, click) = counting_handler();
    let element = create_element(
        "div",
        Props::new().with("role", "button").with("onClick", click),
        vec!["Save".into()],
    );

    let mut space = SyntheticEvent::key_press(32);
    assert!(element.dispatch(HandlerSlot::KeyPress, &mut space));
    assert!(space.is_default_prevented());
    assert_eq!(hits.get(), 1);

    let mut enter = SyntheticEvent::key_press(13);
    assert!(element.dispatch(HandlerSlot::KeyPress, &mut enter));
    assert_eq!(hits.get(), 2);

    assert_eq!(element.component, Component::tag("div"));
    assert_eq!(element.attr("tabIndex"), Some(&AttrValue::from("0")));
    assert_eq!(element.children[0].as_text(), Some("Save"));
}

#[test]
fn test_button_without_click_prevents_default_only() {
    let element = create_element("div", Props::new().with("accessibilityRole", "button"), vec![]);

    let mut enter = SyntheticEvent::key_press(13);
    assert!(!element.dispatch(HandlerSlot::KeyPress, &mut enter));
    assert!(enter.is_default_prevented());
}

#[test]
fn test_click_receives_normalized_payload() {
    let seen = Rc::new(RefCell::new(None));
    let sink = seen.clone();
    let element = create_element(
        "div",
        Props::new().with_handler("onClick", move |event| {
            *sink.borrow_mut() = Some(event.native_event.clone());
            true
        }),
        vec![],
    );

    let raw = RawNativeEvent::mouse("click", 10.0, 20.0).with_timestamp(3.0);
    let mut event = SyntheticEvent::from_native(raw.clone());
    element.dispatch(HandlerSlot::Click, &mut event);

    let expected = NativeEvent::Normalized(normalize_native_event(&NativeEvent::Raw(raw)));
    assert_eq!(seen.borrow().as_ref(), Some(&expected));
}

#[test]
fn test_touchable_release_suppresses_mouse_follow_up() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let log = order.clone();
    let element = create_element(
        Component::composite("Touchable"),
        Props::new().with_handler("onResponderRelease", move |event| {
            log.borrow_mut().push(event.is_default_prevented());
            true
        }),
        vec![],
    );

    let mut event = SyntheticEvent::from_native(RawNativeEvent::new("touchend"));
    assert!(element.dispatch(HandlerSlot::ResponderRelease, &mut event));
    assert_eq!(*order.borrow(), vec![true]);
    assert_eq!(element.component, Component::composite("Touchable"));
}

// ============================================================================
// COMPONENT RESOLUTION
// ============================================================================

#[test]
fn test_role_equivalent_tags() {
    let nav = create_element("div", Props::new().with("accessibilityRole", "navigation"), vec![]);
    assert_eq!(nav.component, Component::tag("nav"));
    assert_eq!(nav.attr("role"), Some(&AttrValue::from("navigation")));

    let heading = create_element(
        "div",
        Props::new().with("accessibilityRole", "heading").with("accessibilityLevel", 2),
        vec![],
    );
    assert_eq!(heading.component, Component::tag("h2"));
    assert_eq!(heading.attr("aria-level"), Some(&AttrValue::Number(2.0)));

    // Anchors are natively focusable
    let link = create_element("div", Props::new().with("role", "link"), vec![]);
    assert_eq!(link.component, Component::tag("a"));
    assert!(link.attr("tabIndex").is_none());
}

#[test]
fn test_nested_children() {
    let item = create_element("div", Props::new().with("role", "listitem"), vec!["one".into()]);
    let list = create_element("div", Props::new().with("role", "list"), vec![Node::from(item)]);

    assert_eq!(list.component, Component::tag("ul"));
    let child = list.children[0].as_element();
    assert_eq!(child.map(|e| &e.component), Some(&Component::tag("li")));
}

// ============================================================================
// ADAPTER
// ============================================================================

#[test]
fn test_adapter_registers_responder_plugin() {
    let _adapter = ElementAdapter::new();
    assert!(is_registered());
}

#[test]
fn test_adapter_rejects_invalid_config() {
    let config = Config {
        activation_keys: vec![],
    };
    let err = ElementAdapter::new().with_config(config).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyActivationKeys));
}

#[test]
fn test_adapter_with_custom_activation_keys() {
    let (hits, click) = counting_handler();
    let config = Config {
        activation_keys: vec![13],
    };
    let adapter = ElementAdapter::new().with_config(config).unwrap();
    let element = adapter.create_element(
        "div",
        Props::new().with("role", "button").with("onClick", click),
        vec![],
    );

    let mut space = SyntheticEvent::key_press(32);
    assert!(!element.dispatch(HandlerSlot::KeyPress, &mut space));
    assert_eq!(hits.get(), 0);
}

/// Translator that tags every bag as a button
struct ButtonTranslator;

impl PropTranslator for ButtonTranslator {
    fn translate(&self, _component: &Component, props: Props) -> HostProps {
        let mut host = HostProps::new().with_attr("role", "button");
        for (name, value) in props {
            let slot = HandlerSlot::from_prop_name(&name);
            if let (Some(slot), Some(handler)) = (slot, value.as_handler()) {
                host.handlers_mut().set(slot, handler.clone());
            }
        }
        host
    }
}

/// Factory that records the adjusted props it receives
struct RecordingFactory;

impl ElementFactory for RecordingFactory {
    type Element = AdjustedProps;

    fn instantiate(
        &self,
        _component: Component,
        props: AdjustedProps,
        _children: Vec<Node>,
    ) -> AdjustedProps {
        props
    }
}

#[test]
fn test_adapter_with_custom_stages() {
    let adapter = ElementAdapter::with_parts(ButtonTranslator, RecordingFactory);
    let props = Props::new().with_handler("onClick", |_| true);
    let adjusted = adapter.create_element("span", props, vec![]);

    assert_eq!(adjusted.role(), Some("button"));
    assert!(adjusted.handler(HandlerSlot::KeyPress).is_some());

    let element = ElementAdapter::with_parts(ButtonTranslator, DomElementFactory)
        .create_element("span", Props::new(), vec![]);
    assert!(element.has_handler(HandlerSlot::KeyPress));
}
