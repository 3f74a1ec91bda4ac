//! Passthrough attributes forwarded verbatim to rendered elements.

use leptos::{Attribute, Oco};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// Value of a forwarded attribute.
pub enum AttrValue {
    /// Rendered as-is.
    Text(String),
    /// Present when `true`, omitted when `false`.
    Bool(bool),
    /// Rendered in its shortest decimal form.
    Number(f64),
}

impl AttrValue {
    pub(crate) fn into_attribute(self) -> Attribute {
        match self {
            Self::Text(text) => Attribute::String(Oco::from(text)),
            Self::Bool(value) => Attribute::Bool(value),
            Self::Number(value) => Attribute::String(Oco::from(value.to_string())),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// Ordered attribute map forwarded to the rendered element without validation.
///
/// Re-inserting a name replaces its value but keeps its original position. A `class` entry is
/// never forwarded as an attribute; components merge it into their override classes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtraAttributes(Vec<(&'static str, AttrValue)>);

impl ExtraAttributes {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the map with `name` set to `value`.
    pub fn with(mut self, name: &'static str, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets `name` to `value`.
    pub fn insert(&mut self, name: &'static str, value: impl Into<AttrValue>) {
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((name, value)),
        }
    }

    /// Value for `name`, if set.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, value)| value)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V: Into<AttrValue>> FromIterator<(&'static str, V)> for ExtraAttributes {
    fn from_iter<T: IntoIterator<Item = (&'static str, V)>>(iter: T) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

impl<V: Into<AttrValue>> From<Vec<(&'static str, V)>> for ExtraAttributes {
    fn from(entries: Vec<(&'static str, V)>) -> Self {
        entries.into_iter().collect()
    }
}

/// Attributes ready for spreading plus the static class fragments pulled out of them.
pub(crate) struct Forwarded {
    pub(crate) class: Option<String>,
    pub(crate) attributes: Vec<(&'static str, Attribute)>,
}

/// Combines the explicit map with leptos `attr:*` attributes, `attr:*` last so it wins on
/// conflicting names in the DOM.
///
/// Static `class` values from either source are returned separately so they can be merged with
/// the component classes; reactive `attr:class` values are forwarded untouched.
pub(crate) fn forward(
    leading: Vec<(&'static str, Attribute)>,
    extra: ExtraAttributes,
    attrs: Vec<(&'static str, Attribute)>,
) -> Forwarded {
    let mut class_parts = Vec::new();
    let mut attributes = leading;

    for (name, value) in extra.0 {
        if name == "class" {
            if let AttrValue::Text(text) = value {
                class_parts.push(text);
            }
            continue;
        }
        attributes.push((name, value.into_attribute()));
    }

    for (name, value) in attrs {
        if name == "class" {
            match value {
                Attribute::String(text) => {
                    class_parts.push(text.to_string());
                    continue;
                }
                Attribute::Option(Some(text)) => {
                    class_parts.push(text.to_string());
                    continue;
                }
                Attribute::Option(None) => continue,
                other => {
                    attributes.push((name, other));
                    continue;
                }
            }
        }
        attributes.push((name, value));
    }

    Forwarded {
        class: (!class_parts.is_empty()).then(|| class_parts.join(" ")),
        attributes,
    }
}

/// Static string attribute, used for the `data-ui-*` contract entries.
pub(crate) fn static_attr(name: &'static str, value: &'static str) -> (&'static str, Attribute) {
    (name, Attribute::String(Oco::Borrowed(value)))
}
