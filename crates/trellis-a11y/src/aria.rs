//! ARIA Roles

use std::str::FromStr;

use crate::A11yError;

/// ARIA role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaRole {
    // Landmark roles
    Banner,
    Complementary,
    ContentInfo,
    Form,
    Main,
    Navigation,
    Region,
    Search,

    // Widget roles
    Button,
    Checkbox,
    Link,
    MenuItem,
    Radio,
    Switch,
    Tab,
    TextBox,

    // Document structure
    Article,
    Heading,
    Img,
    List,
    ListItem,
    Presentation,
}

impl AriaRole {
    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_lowercase().as_str() {
            "banner" => Self::Banner,
            "complementary" => Self::Complementary,
            "contentinfo" => Self::ContentInfo,
            "form" => Self::Form,
            "main" => Self::Main,
            "navigation" => Self::Navigation,
            "region" => Self::Region,
            "search" => Self::Search,
            "button" => Self::Button,
            "checkbox" => Self::Checkbox,
            "link" => Self::Link,
            "menuitem" => Self::MenuItem,
            "radio" => Self::Radio,
            "switch" => Self::Switch,
            "tab" => Self::Tab,
            "textbox" => Self::TextBox,
            "article" => Self::Article,
            "heading" => Self::Heading,
            "img" => Self::Img,
            "list" => Self::List,
            "listitem" => Self::ListItem,
            "none" | "presentation" => Self::Presentation,
            _ => return None,
        })
    }

    /// Roles activated like a button: focusable, click on Enter/Space
    pub fn is_button_like(&self) -> bool {
        matches!(self,
            Self::Button | Self::Checkbox | Self::Link | Self::MenuItem |
            Self::Radio | Self::Switch | Self::Tab
        )
    }

    /// Check if role is landmark
    pub fn is_landmark(&self) -> bool {
        matches!(self,
            Self::Banner | Self::Complementary | Self::ContentInfo |
            Self::Form | Self::Main | Self::Navigation | Self::Region | Self::Search
        )
    }
}

impl FromStr for AriaRole {
    type Err = A11yError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| A11yError::InvalidRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role() {
        assert_eq!(AriaRole::parse("button"), Some(AriaRole::Button));
        assert_eq!(AriaRole::parse("Navigation"), Some(AriaRole::Navigation));
        assert_eq!(AriaRole::parse("none"), Some(AriaRole::Presentation));
        assert!(AriaRole::Button.is_button_like());
        assert!(AriaRole::Navigation.is_landmark());
        assert!(!AriaRole::Heading.is_button_like());
    }

    #[test]
    fn test_strict_parse_reports_role() {
        let err = "bogus".parse::<AriaRole>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid ARIA role: bogus");
    }
}
