//! Disabled State

use trellis_dom::HostProps;

/// Whether a translated bag describes a disabled element
///
/// Covers both the native `disabled` attribute and `aria-disabled`.
pub fn is_disabled(props: &HostProps) -> bool {
    ["disabled", "aria-disabled"]
        .iter()
        .any(|name| props.attr(name).is_some_and(|v| v.is_true()))
}
