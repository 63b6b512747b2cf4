//! DOM Prop Translation
//!
//! Maps platform-neutral props onto host attribute names. Handlers move into
//! their typed slots untouched.

use trellis_a11y::AriaRole;
use trellis_dom::{AttrValue, Component, HandlerSlot, HostProps, PropValue, Props};

/// Tags whose native `disabled` attribute the host understands
const NATIVE_FORM_TAGS: &[&str] = &[
    "button", "fieldset", "input", "optgroup", "option", "select", "textarea",
];

/// Prop translation stage
pub trait PropTranslator {
    /// Translate a bag for `component`
    ///
    /// Handler values must reach the output unchanged.
    fn translate(&self, component: &Component, props: Props) -> HostProps;
}

/// Default translator for DOM-like hosts
#[derive(Debug, Clone, Copy, Default)]
pub struct DomPropTranslator;

fn scalar(value: PropValue) -> Option<AttrValue> {
    match value {
        PropValue::String(s) => Some(AttrValue::String(s)),
        PropValue::Bool(b) => Some(AttrValue::Bool(b)),
        PropValue::Number(n) => Some(AttrValue::Number(n)),
        PropValue::Handler(_) => None,
    }
}

/// Reads `name` with the host's boolean attribute rules
fn is_truthy(props: &Props, name: &str) -> bool {
    props
        .get(name)
        .cloned()
        .and_then(scalar)
        .is_some_and(|value| value.is_true())
}

impl PropTranslator for DomPropTranslator {
    fn translate(&self, component: &Component, props: Props) -> HostProps {
        let role = props
            .get_str("accessibilityRole")
            .or_else(|| props.get_str("role"))
            .map(str::to_string);
        let disabled = is_truthy(&props, "disabled") || is_truthy(&props, "aria-disabled");
        let accessible = props.get_bool("accessible");
        let tag = component.tag_name().unwrap_or_default().to_string();

        let mut host = HostProps::new();
        for (name, value) in props {
            if let PropValue::Handler(handler) = value {
                match HandlerSlot::from_prop_name(&name) {
                    Some(slot) => {
                        host.handlers_mut().set(slot, handler);
                    }
                    None => tracing::debug!("Dropping unsupported handler {}", name),
                }
                continue;
            }

            let host_name = match name.as_str() {
                // Resolved below
                "accessibilityRole" | "role" | "disabled" | "accessible" => continue,
                // Style computation is not handled here
                "style" => continue,
                "accessibilityLabel" => "aria-label",
                "accessibilityLevel" => "aria-level",
                "nativeID" => "id",
                "testID" => "data-testid",
                "accessibilityLiveRegion" => {
                    let live = match value.as_str() {
                        Some("none") => "off".to_string(),
                        Some(other) => other.to_string(),
                        None => continue,
                    };
                    host.set_attr("aria-live", live);
                    continue;
                }
                "importantForAccessibility" => {
                    if value.as_str() == Some("no-hide-descendants") {
                        host.set_attr("aria-hidden", true);
                    }
                    continue;
                }
                other => other,
            };
            if let Some(attr) = scalar(value) {
                host.set_attr(host_name, attr);
            }
        }

        if let Some(role) = &role {
            host.set_attr("role", role.as_str());
        }

        if disabled {
            host.set_attr("aria-disabled", true);
            if NATIVE_FORM_TAGS.contains(&tag.as_str()) {
                host.set_attr("disabled", true);
            }
        }

        if host.attr("tabIndex").is_none() {
            let focusable_role = role
                .as_deref()
                .and_then(AriaRole::parse)
                .is_some_and(|r| r.is_button_like() && !(r == AriaRole::Link && tag == "a"));

            if accessible == Some(false) {
                host.set_attr("tabIndex", "-1");
            } else if focusable_role && !disabled {
                host.set_attr("tabIndex", "0");
            }
        }

        host
    }
}
