//! Button, input and card components plus their typed variant axes.

use leptos::*;

use crate::attrs::{forward, static_attr, ExtraAttributes};
use crate::render_as::{RenderAs, Slot};

mod button;
mod card;
mod input;

pub use button::{button_class, Button, BUTTON_VARIANTS};
pub use card::{
    card_class, card_content_class, card_description_class, card_footer_class, card_header_class,
    card_title_class, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    CARD_CONTENT_STYLE, CARD_DESCRIPTION_STYLE, CARD_FOOTER_STYLE, CARD_HEADER_STYLE,
    CARD_TITLE_STYLE, CARD_VARIANTS,
};
pub use input::{input_class, Input, INPUT_STYLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Button colour treatments.
pub enum ButtonVariant {
    /// Filled system blue.
    Default,
    /// Filled system red for destructive actions.
    Destructive,
    /// Hairline border on a transparent background.
    Outline,
    /// Tinted fill.
    Secondary,
    /// No chrome until hovered.
    Ghost,
    /// Inline text link.
    Link,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl ButtonVariant {
    /// Every variant in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Destructive,
        Self::Outline,
        Self::Secondary,
        Self::Ghost,
        Self::Link,
    ];

    /// Schema option name.
    pub fn option(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }

    /// Parses a schema option name.
    pub fn from_option(option: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.option() == option)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Button sizing tokens. Every size keeps the 44pt minimum touch target.
pub enum ButtonSize {
    /// 44pt tall.
    Default,
    /// 36pt tall with body text.
    Sm,
    /// 52pt tall with title text.
    Lg,
    /// 44pt square.
    Icon,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Default
    }
}

impl ButtonSize {
    /// Every size in declaration order.
    pub const ALL: [Self; 4] = [Self::Default, Self::Sm, Self::Lg, Self::Icon];

    /// Schema option name.
    pub fn option(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }

    /// Parses a schema option name.
    pub fn from_option(option: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.option() == option)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Card surface treatments.
pub enum CardVariant {
    /// Hairline border.
    Default,
    /// Drop shadow instead of a border.
    Elevated,
    /// Grouped-background fill.
    Filled,
    /// Translucent material with backdrop blur.
    Blurred,
}

impl Default for CardVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl CardVariant {
    /// Every variant in declaration order.
    pub const ALL: [Self; 4] = [Self::Default, Self::Elevated, Self::Filled, Self::Blurred];

    /// Schema option name.
    pub fn option(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Elevated => "elevated",
            Self::Filled => "filled",
            Self::Blurred => "blurred",
        }
    }

    /// Parses a schema option name.
    pub fn from_option(option: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.option() == option)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Native `<input type>` values the kit styles.
pub enum InputType {
    /// Plain text.
    Text,
    /// Email address.
    Email,
    /// Masked password.
    Password,
    /// Numeric.
    Number,
    /// Telephone number.
    Tel,
    /// URL.
    Url,
    /// Search field.
    Search,
}

impl Default for InputType {
    fn default() -> Self {
        Self::Text
    }
}

impl InputType {
    /// Every type in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Text,
        Self::Email,
        Self::Password,
        Self::Number,
        Self::Tel,
        Self::Url,
        Self::Search,
    ];

    /// Value of the `type` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Search => "search",
        }
    }

    /// Parses a `type` attribute value.
    pub fn from_option(option: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == option)
    }
}

/// Merges the caller's `class` prop with any static class pulled from passthrough attributes.
pub(crate) fn override_classes(class: Option<String>, forwarded: Option<String>) -> Option<String> {
    match (class, forwarded) {
        (Some(class), Some(forwarded)) => Some(format!("{forwarded} {class}")),
        (class, forwarded) => class.or(forwarded),
    }
}
