//! Story metadata, arg decoding and persisted catalog state.

use std::collections::BTreeMap;

use ios_ui::{
    ButtonSize, ButtonVariant, CardVariant, InputType, Selection, VariantSchema, BUTTON_VARIANTS,
    CARD_VARIANTS,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::config::StoryLayout;
use crate::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "control", rename_all = "kebab-case")]
/// Editor shown for one story arg.
pub enum ArgControl {
    /// One of a fixed list of options.
    Select {
        /// Allowed values, in display order.
        options: Vec<&'static str>,
    },
    /// Checkbox.
    Boolean,
    /// Free text.
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// One editable arg of a component's primary story.
pub struct ArgSpec {
    /// Arg name, also the key in the args object.
    pub name: &'static str,
    /// Editor.
    pub control: ArgControl,
    /// Initial value.
    pub default: Value,
}

impl ArgSpec {
    fn select(name: &'static str, options: Vec<&'static str>, default: &'static str) -> Self {
        Self {
            name,
            control: ArgControl::Select { options },
            default: Value::from(default),
        }
    }

    fn boolean(name: &'static str) -> Self {
        Self {
            name,
            control: ArgControl::Boolean,
            default: Value::Bool(false),
        }
    }

    fn text(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            control: ArgControl::Text,
            default: Value::from(default),
        }
    }

    /// Select arg listing the options `schema` declares for `axis`.
    fn axis(name: &'static str, schema: &VariantSchema, axis: &str) -> Self {
        let default = schema
            .axis(axis)
            .map(|axis| axis.default_option())
            .unwrap_or_default();
        Self::select(name, schema.option_names(axis), default)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// A documented component and its stories.
pub struct StoryMeta {
    /// Sidebar path, for example `Components/Button`.
    pub title: &'static str,
    /// Component under documentation.
    pub component: &'static str,
    /// Free-form tags.
    pub tags: &'static [&'static str],
    /// Canvas placement; `None` uses the configured default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<StoryLayout>,
    /// Args of the primary story.
    pub args: Vec<ArgSpec>,
    /// Story names in sidebar order; the first is the primary story.
    pub stories: &'static [&'static str],
}

impl StoryMeta {
    /// Stable id of `story`, e.g. `components-button--with-icons`.
    pub fn story_id(&self, story: &str) -> String {
        format!("{}--{}", kebab(self.title), kebab(story))
    }

    /// Canvas placement, falling back to `default`.
    pub fn layout_or(&self, default: StoryLayout) -> StoryLayout {
        self.layout.unwrap_or(default)
    }

    /// Ids of every story in sidebar order.
    pub fn story_ids(&self) -> Vec<String> {
        self.stories.iter().map(|story| self.story_id(story)).collect()
    }

    /// Initial args object for the primary story.
    pub fn default_args(&self) -> Value {
        let args: Map<String, Value> = self
            .args
            .iter()
            .map(|spec| (spec.name.to_string(), spec.default.clone()))
            .collect();
        Value::Object(args)
    }
}

/// Lowercases and hyphenates `raw`, turning `/`, spaces and camel-case boundaries into `-`.
fn kebab(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 4);
    let mut prev_lower = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if ch.is_ascii_uppercase() && prev_lower {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
            prev_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        } else {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            prev_lower = false;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Every documented component, in sidebar order.
pub fn story_catalog() -> Vec<StoryMeta> {
    vec![
        StoryMeta {
            title: "Components/Button",
            component: "Button",
            tags: &["autodocs"],
            layout: Some(StoryLayout::Centered),
            args: vec![
                ArgSpec::axis("variant", &BUTTON_VARIANTS, "variant"),
                ArgSpec::axis("size", &BUTTON_VARIANTS, "size"),
                ArgSpec::boolean("disabled"),
                ArgSpec::boolean("as_child"),
                ArgSpec::text("children", "Button"),
            ],
            stories: &["Default", "Variants", "Sizes", "States", "WithIcons"],
        },
        StoryMeta {
            title: "Components/Input",
            component: "Input",
            tags: &["autodocs"],
            layout: Some(StoryLayout::Centered),
            args: vec![
                ArgSpec::select(
                    "type",
                    InputType::ALL.iter().map(|kind| kind.as_str()).collect(),
                    InputType::default().as_str(),
                ),
                ArgSpec::boolean("disabled"),
                ArgSpec::text("placeholder", "Enter text..."),
            ],
            stories: &["Default", "Types", "States", "WithLabels"],
        },
        StoryMeta {
            title: "Components/Card",
            component: "Card",
            tags: &["autodocs"],
            layout: Some(StoryLayout::Centered),
            args: vec![ArgSpec::axis("variant", &CARD_VARIANTS, "variant")],
            stories: &["Default", "Variants", "Simple", "WithActions"],
        },
        StoryMeta {
            title: "Foundations/Theme",
            component: "Theme",
            tags: &[],
            layout: None,
            args: Vec::new(),
            stories: &["Colors", "Typography", "Spacing", "Effects"],
        },
    ]
}

/// Catalog metadata as JSON for external documentation tooling.
pub fn catalog_json() -> Value {
    json!(story_catalog())
}

/// Looks up the component and story name behind `id`.
pub fn find_story(catalog: &[StoryMeta], id: &str) -> Option<(usize, &'static str)> {
    catalog.iter().enumerate().find_map(|(idx, meta)| {
        meta.stories
            .iter()
            .find(|story| meta.story_id(story) == id)
            .map(|story| (idx, *story))
    })
}

/// Decoded args paired with the fallbacks taken while decoding them.
#[derive(Debug)]
pub struct Decoded<T> {
    /// Usable args.
    pub value: T,
    /// Fallbacks applied, one per offending arg.
    pub warnings: Vec<CatalogError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Args of the primary Button story.
pub struct ButtonArgs {
    /// Colour treatment.
    pub variant: ButtonVariant,
    /// Size.
    pub size: ButtonSize,
    /// Forwarded as the native `disabled` attribute.
    pub disabled: bool,
    /// Render through a substitute `<a>` element.
    pub as_child: bool,
    /// Button label.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Args of the primary Input story.
pub struct InputArgs {
    /// Native input type.
    pub input_type: InputType,
    /// Forwarded as the native `disabled` attribute.
    pub disabled: bool,
    /// Placeholder text.
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Args of the primary Card story.
pub struct CardArgs {
    /// Surface treatment.
    pub variant: CardVariant,
}

struct ArgReader<'a> {
    args: Option<&'a Map<String, Value>>,
    warnings: Vec<CatalogError>,
}

impl<'a> ArgReader<'a> {
    fn new(args: &'a Value) -> Self {
        let mut warnings = Vec::new();
        let args = match args {
            Value::Object(map) => Some(map),
            Value::Null => None,
            _ => {
                warnings.push(CatalogError::ArgType {
                    arg: "args",
                    expected: "object",
                });
                None
            }
        };
        Self { args, warnings }
    }

    fn raw(&self, name: &str) -> Option<&'a Value> {
        self.args.and_then(|args| args.get(name))
    }

    fn string(&mut self, name: &'static str) -> Option<&'a str> {
        match self.raw(name)? {
            Value::String(text) => Some(text.as_str()),
            Value::Null => None,
            _ => {
                self.warnings.push(CatalogError::ArgType {
                    arg: name,
                    expected: "string",
                });
                None
            }
        }
    }

    fn flag(&mut self, name: &'static str) -> bool {
        match self.raw(name) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(value)) => *value,
            Some(_) => {
                self.warnings.push(CatalogError::ArgType {
                    arg: name,
                    expected: "boolean",
                });
                false
            }
        }
    }

    fn text(&mut self, name: &'static str, default: &str) -> String {
        self.string(name).unwrap_or(default).to_string()
    }

    /// Resolves a select arg through `schema`, so unknown options fall back to the axis default.
    fn axis(&mut self, name: &'static str, schema: &VariantSchema, axis: &str) -> &'static str {
        let mut selection = Selection::new();
        let requested = self.string(name);
        if let Some(requested) = requested {
            selection.set(axis, requested);
        }
        let effective = schema
            .effective_option(&selection, axis)
            .unwrap_or_default();
        if let Some(requested) = requested {
            if requested != effective {
                self.warnings.push(CatalogError::UnknownOption {
                    arg: name,
                    value: requested.to_string(),
                    fallback: effective,
                });
            }
        }
        effective
    }

    fn finish<T>(self, value: T) -> Decoded<T> {
        Decoded {
            value,
            warnings: self.warnings,
        }
    }
}

/// Decodes the Button story args.
pub fn decode_button_args(args: &Value) -> Decoded<ButtonArgs> {
    let mut reader = ArgReader::new(args);
    let variant = reader.axis("variant", &BUTTON_VARIANTS, "variant");
    let size = reader.axis("size", &BUTTON_VARIANTS, "size");
    let value = ButtonArgs {
        variant: ButtonVariant::from_option(variant).unwrap_or_default(),
        size: ButtonSize::from_option(size).unwrap_or_default(),
        disabled: reader.flag("disabled"),
        as_child: reader.flag("as_child"),
        label: reader.text("children", "Button"),
    };
    reader.finish(value)
}

/// Decodes the Input story args.
pub fn decode_input_args(args: &Value) -> Decoded<InputArgs> {
    let mut reader = ArgReader::new(args);
    let requested = reader.string("type");
    let input_type = match requested {
        None => InputType::default(),
        Some(raw) => InputType::from_option(raw).unwrap_or_else(|| {
            reader.warnings.push(CatalogError::UnknownOption {
                arg: "type",
                value: raw.to_string(),
                fallback: InputType::default().as_str(),
            });
            InputType::default()
        }),
    };
    let value = InputArgs {
        input_type,
        disabled: reader.flag("disabled"),
        placeholder: reader.text("placeholder", "Enter text..."),
    };
    reader.finish(value)
}

/// Decodes the Card story args.
pub fn decode_card_args(args: &Value) -> Decoded<CardArgs> {
    let mut reader = ArgReader::new(args);
    let variant = reader.axis("variant", &CARD_VARIANTS, "variant");
    let value = CardArgs {
        variant: CardVariant::from_option(variant).unwrap_or_default(),
    };
    reader.finish(value)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Serializable catalog state: the open story and each component's primary-story args.
pub struct CatalogState {
    /// Id of the open story.
    pub selected: String,
    /// Primary-story args keyed by component title.
    pub args: BTreeMap<String, Value>,
}

impl CatalogState {
    /// Fresh state opening the first story with default args everywhere.
    pub fn initial(catalog: &[StoryMeta]) -> Self {
        let selected = catalog
            .first()
            .and_then(|meta| meta.story_ids().into_iter().next())
            .unwrap_or_default();
        let args = catalog
            .iter()
            .map(|meta| (meta.title.to_string(), meta.default_args()))
            .collect();
        Self { selected, args }
    }

    /// Restores persisted state, repairing what no longer matches the catalog.
    ///
    /// Missing arg entries are filled with defaults, entries for unknown components are dropped
    /// and an unknown selected story reopens the first story. Each repair is reported.
    pub fn restore(catalog: &[StoryMeta], persisted: Option<Value>) -> Decoded<Self> {
        let initial = Self::initial(catalog);
        let Some(persisted) = persisted else {
            return Decoded {
                value: initial,
                warnings: Vec::new(),
            };
        };

        let mut state = match serde_json::from_value::<Self>(persisted) {
            Ok(state) => state,
            Err(err) => {
                return Decoded {
                    value: initial,
                    warnings: vec![CatalogError::State(err.to_string())],
                }
            }
        };

        let mut warnings = Vec::new();
        if find_story(catalog, &state.selected).is_none() {
            warnings.push(CatalogError::UnknownStory(state.selected.clone()));
            state.selected = initial.selected.clone();
        }
        state
            .args
            .retain(|title, _| catalog.iter().any(|meta| meta.title == title));
        for (title, defaults) in initial.args {
            state.args.entry(title).or_insert(defaults);
        }

        Decoded {
            value: state,
            warnings,
        }
    }

    /// Args of the component titled `title`, `Null` when absent.
    pub fn args_for(&self, title: &str) -> Value {
        self.args.get(title).cloned().unwrap_or(Value::Null)
    }

    /// Sets one arg of the component titled `title`.
    pub fn set_arg(&mut self, title: &str, name: &str, value: Value) {
        let entry = self
            .args
            .entry(title.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(map) = entry {
            map.insert(name.to_string(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn story_ids_are_kebab_cased() {
        let catalog = story_catalog();
        assert_eq!(
            catalog[0].story_ids(),
            vec![
                "components-button--default",
                "components-button--variants",
                "components-button--sizes",
                "components-button--states",
                "components-button--with-icons",
            ]
        );
        assert_eq!(kebab("Foundations/Theme"), "foundations-theme");
        assert_eq!(kebab("WithLabels"), "with-labels");
    }

    #[test]
    fn theme_stories_use_configured_layout() {
        let catalog = story_catalog();
        assert_eq!(catalog[0].layout_or(StoryLayout::Padded), StoryLayout::Centered);
        assert_eq!(
            catalog[3].layout_or(StoryLayout::Fullscreen),
            StoryLayout::Fullscreen
        );
    }

    #[test]
    fn find_story_resolves_ids() {
        let catalog = story_catalog();
        assert_eq!(
            find_story(&catalog, "components-card--with-actions"),
            Some((2, "WithActions"))
        );
        assert_eq!(find_story(&catalog, "components-card--missing"), None);
    }

    #[test]
    fn select_controls_follow_schemas() {
        let catalog = story_catalog();
        let variant = &catalog[0].args[0];
        assert_eq!(
            variant.control,
            ArgControl::Select {
                options: vec!["default", "destructive", "outline", "secondary", "ghost", "link"],
            }
        );
        assert_eq!(variant.default, json!("default"));
        assert_eq!(
            catalog[2].default_args(),
            json!({ "variant": "default" })
        );
    }

    #[test]
    fn input_type_control_lists_every_type() {
        let catalog = story_catalog();
        assert_eq!(
            catalog[1].args[0].control,
            ArgControl::Select {
                options: vec!["text", "email", "password", "number", "tel", "url", "search"],
            }
        );
        assert_eq!(
            decode_input_args(&json!({ "type": "search" })).value.input_type,
            InputType::Search
        );
    }

    #[test]
    fn button_args_decode_with_defaults() {
        let decoded = decode_button_args(&json!({ "variant": "outline", "size": "sm" }));
        assert!(decoded.warnings.is_empty());
        assert_eq!(
            decoded.value,
            ButtonArgs {
                variant: ButtonVariant::Outline,
                size: ButtonSize::Sm,
                disabled: false,
                as_child: false,
                label: "Button".to_string(),
            }
        );
    }

    #[test]
    fn unknown_option_falls_back_and_warns() {
        let decoded = decode_button_args(&json!({ "variant": "primary", "disabled": "yes" }));
        assert_eq!(decoded.value.variant, ButtonVariant::Default);
        assert!(!decoded.value.disabled);
        let messages: Vec<String> = decoded.warnings.iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            vec![
                "arg `variant` has no option `primary`, using `default`",
                "arg `disabled` expects a boolean",
            ]
        );
    }

    #[test]
    fn input_and_card_args() {
        let input = decode_input_args(&json!({ "type": "email", "placeholder": "name@example.com" }));
        assert_eq!(input.value.input_type, InputType::Email);
        assert_eq!(input.value.placeholder, "name@example.com");

        let bad_type = decode_input_args(&json!({ "type": "color" }));
        assert_eq!(bad_type.value.input_type, InputType::Text);
        assert_eq!(bad_type.warnings.len(), 1);

        let card = decode_card_args(&json!({ "variant": "blurred" }));
        assert_eq!(card.value.variant, CardVariant::Blurred);
        assert!(decode_card_args(&Value::Null).warnings.is_empty());
    }

    #[test]
    fn restore_repairs_stale_state() {
        let catalog = story_catalog();
        let persisted = json!({
            "selected": "components-switch--default",
            "args": {
                "Components/Button": { "variant": "ghost" },
                "Components/Switch": { "on": true }
            }
        });
        let restored = CatalogState::restore(&catalog, Some(persisted));
        assert_eq!(restored.value.selected, "components-button--default");
        assert_eq!(
            restored.value.args_for("Components/Button"),
            json!({ "variant": "ghost" })
        );
        assert_eq!(restored.value.args_for("Components/Switch"), Value::Null);
        assert_eq!(
            restored.value.args_for("Components/Card"),
            json!({ "variant": "default" })
        );
        assert_eq!(restored.warnings.len(), 1);
    }

    #[test]
    fn restore_rejects_malformed_state() {
        let catalog = story_catalog();
        let restored = CatalogState::restore(&catalog, Some(json!({ "selected": 7 })));
        assert_eq!(restored.value, CatalogState::initial(&catalog));
        assert!(matches!(restored.warnings[0], CatalogError::State(_)));
    }

    #[test]
    fn set_arg_creates_missing_entries() {
        let mut state = CatalogState::initial(&story_catalog());
        state.set_arg("Components/Input", "disabled", Value::Bool(true));
        assert_eq!(
            state.args_for("Components/Input")["disabled"],
            Value::Bool(true)
        );
        state.set_arg("Custom", "flag", Value::Bool(true));
        assert_eq!(state.args_for("Custom"), json!({ "flag": true }));
    }

    #[test]
    fn catalog_serializes_for_tooling() {
        let json = catalog_json();
        assert_eq!(json[0]["title"], "Components/Button");
        assert_eq!(json[0]["args"][2]["control"]["control"], "boolean");
    }
}
