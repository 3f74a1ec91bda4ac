use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Catalog chrome appearance.
pub enum CatalogTheme {
    /// Light chrome.
    Light,
    /// Dark chrome; adds the `dark` class to the catalog root.
    Dark,
}

impl Default for CatalogTheme {
    fn default() -> Self {
        Self::Light
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// How a story is placed on the canvas.
pub enum StoryLayout {
    /// Centered in the canvas.
    Centered,
    /// Top-left with canvas padding.
    Padded,
    /// Edge to edge.
    Fullscreen,
}

impl Default for StoryLayout {
    fn default() -> Self {
        Self::Padded
    }
}

impl StoryLayout {
    /// Canvas classes for the layout.
    pub fn canvas_class(self) -> &'static str {
        match self {
            Self::Centered => "flex min-h-[320px] items-center justify-center p-ios-lg",
            Self::Padded => "p-ios-lg",
            Self::Fullscreen => "p-0",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Catalog branding and defaults. Missing fields keep their defaults.
pub struct StorybookConfig {
    /// Title shown above the story list.
    pub brand_title: String,
    /// Link target for the title.
    pub brand_url: String,
    /// Chrome appearance.
    pub theme: CatalogTheme,
    /// Layout for stories that do not declare one.
    pub layout: StoryLayout,
}

impl Default for StorybookConfig {
    fn default() -> Self {
        Self {
            brand_title: "iOS26 Components".to_string(),
            brand_url: "https://github.com/your-username/ios26-react-shadcn".to_string(),
            theme: CatalogTheme::Light,
            layout: StoryLayout::Padded,
        }
    }
}

impl StorybookConfig {
    /// Parses host-supplied configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] when `raw` is not a JSON object of the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = StorybookConfig::from_json(r#"{"theme":"dark"}"#).expect("config");
        assert_eq!(config.theme, CatalogTheme::Dark);
        assert_eq!(config.brand_title, "iOS26 Components");
        assert_eq!(config.layout, StoryLayout::Padded);
    }

    #[test]
    fn malformed_config_is_reported() {
        let err = StorybookConfig::from_json(r#"{"layout":"sideways"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
        assert!(err.to_string().starts_with("invalid storybook config"));
    }
}
