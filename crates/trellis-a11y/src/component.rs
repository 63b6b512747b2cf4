//! Role-Equivalent Host Tags
//!
//! Picks a semantic host tag for a role so the host exposes native
//! accessibility without ARIA. `button` has no entry: native buttons carry
//! host styling, so button roles keep their tag and get keyboard activation
//! from prop adjustment instead.

use trellis_dom::{Component, PropValue, Props};

use crate::aria::AriaRole;
use crate::A11yError;

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Parse an `aria-level` value
pub fn parse_level(value: &str) -> Result<u8, A11yError> {
    value
        .trim()
        .parse::<u8>()
        .map_err(|_| A11yError::InvalidLevel(value.to_string()))
}

fn heading_level(props: &Props) -> usize {
    let raw = props.get("accessibilityLevel").or_else(|| props.get("aria-level"));
    let level = match raw {
        Some(PropValue::Number(n)) => *n as usize,
        Some(PropValue::String(s)) => match parse_level(s) {
            Ok(level) => level as usize,
            Err(e) => {
                tracing::debug!("{}, using h1", e);
                1
            }
        },
        _ => 1,
    };
    level.clamp(1, HEADING_TAGS.len())
}

/// Host tag equivalent to the role carried by `props`
pub fn props_to_accessibility_component(props: &Props) -> Option<Component> {
    let role = props
        .get_str("accessibilityRole")
        .or_else(|| props.get_str("role"))
        .and_then(AriaRole::parse)?;

    let tag = match role {
        AriaRole::Article => "article",
        AriaRole::Banner => "header",
        AriaRole::Complementary => "aside",
        AriaRole::ContentInfo => "footer",
        AriaRole::Form => "form",
        AriaRole::Heading => HEADING_TAGS[heading_level(props) - 1],
        AriaRole::Link => "a",
        AriaRole::List => "ul",
        AriaRole::ListItem => "li",
        AriaRole::Main => "main",
        AriaRole::Navigation => "nav",
        AriaRole::Region => "section",
        _ => return None,
    };
    Some(Component::tag(tag))
}

/// Substitute a role-equivalent tag for plain tags
///
/// Composite components pass through untouched.
pub fn resolve_component(component: Component, props: &Props) -> Component {
    match component {
        Component::Tag(_) => props_to_accessibility_component(props).unwrap_or(component),
        Component::Composite(_) => component,
    }
}
