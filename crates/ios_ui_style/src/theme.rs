//! iOS design tokens shared by the component schemas and the story catalog.
//!
//! Values mirror the Tailwind theme the generated stylesheet is built from, so class names such as
//! `bg-ios-blue`, `text-headline` or `px-ios-md` resolve against these entries.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// A named colour with light and dark appearances.
pub struct SystemColor {
    /// Utility suffix, for example `ios-blue` in `bg-ios-blue`.
    pub name: &'static str,
    /// Light appearance.
    pub light: &'static str,
    /// Dark appearance.
    pub dark: &'static str,
}

impl SystemColor {
    const fn new(name: &'static str, light: &'static str, dark: &'static str) -> Self {
        Self { name, light, dark }
    }
}

/// iOS system tint colours.
pub const SYSTEM_COLORS: &[SystemColor] = &[
    SystemColor::new("ios-blue", "#007AFF", "#0A84FF"),
    SystemColor::new("ios-green", "#34C759", "#30D158"),
    SystemColor::new("ios-orange", "#FF9500", "#FF9F0A"),
    SystemColor::new("ios-red", "#FF3B30", "#FF453A"),
    SystemColor::new("ios-purple", "#AF52DE", "#BF5AF2"),
    SystemColor::new("ios-pink", "#FF2D55", "#FF375F"),
    SystemColor::new("ios-teal", "#5AC8FA", "#64D2FF"),
    SystemColor::new("ios-indigo", "#5856D6", "#5E5CE6"),
];

/// Backgrounds, fills, labels and separators.
pub const SEMANTIC_COLORS: &[SystemColor] = &[
    SystemColor::new("background", "hsl(0, 0%, 100%)", "hsl(0, 0%, 0%)"),
    SystemColor::new("background-secondary", "hsl(220, 13%, 95%)", "hsl(0, 0%, 11%)"),
    SystemColor::new("background-tertiary", "hsl(0, 0%, 100%)", "hsl(0, 0%, 17%)"),
    SystemColor::new("fill", "rgba(120, 120, 128, 0.2)", "rgba(120, 120, 128, 0.36)"),
    SystemColor::new(
        "fill-secondary",
        "rgba(120, 120, 128, 0.16)",
        "rgba(120, 120, 128, 0.32)",
    ),
    SystemColor::new(
        "fill-tertiary",
        "rgba(118, 118, 128, 0.12)",
        "rgba(118, 118, 128, 0.24)",
    ),
    SystemColor::new(
        "fill-quaternary",
        "rgba(116, 116, 128, 0.08)",
        "rgba(116, 116, 128, 0.16)",
    ),
    SystemColor::new("label", "hsl(0, 0%, 0%)", "hsl(0, 0%, 100%)"),
    SystemColor::new(
        "label-secondary",
        "rgba(60, 60, 67, 0.6)",
        "rgba(235, 235, 245, 0.6)",
    ),
    SystemColor::new(
        "label-tertiary",
        "rgba(60, 60, 67, 0.3)",
        "rgba(235, 235, 245, 0.3)",
    ),
    SystemColor::new(
        "label-quaternary",
        "rgba(60, 60, 67, 0.16)",
        "rgba(235, 235, 245, 0.16)",
    ),
    SystemColor::new("separator", "rgba(60, 60, 67, 0.29)", "rgba(84, 84, 88, 0.6)"),
    SystemColor::new("separator-opaque", "hsl(0, 0%, 78%)", "hsl(0, 0%, 22%)"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// One step of the iOS type ramp (`text-<name>`).
pub struct TypeStyle {
    /// Utility suffix, for example `headline`.
    pub name: &'static str,
    /// Font size in pixels.
    pub size_px: u16,
    /// Line height in pixels.
    pub line_height_px: u16,
    /// CSS font weight.
    pub weight: u16,
}

impl TypeStyle {
    const fn new(name: &'static str, size_px: u16, line_height_px: u16, weight: u16) -> Self {
        Self {
            name,
            size_px,
            line_height_px,
            weight,
        }
    }
}

/// iOS dynamic type ramp at the default content size.
pub const TYPE_SCALE: &[TypeStyle] = &[
    TypeStyle::new("large-title", 34, 41, 700),
    TypeStyle::new("title-1", 28, 34, 700),
    TypeStyle::new("title-2", 22, 28, 700),
    TypeStyle::new("title-3", 20, 25, 600),
    TypeStyle::new("headline", 17, 22, 600),
    TypeStyle::new("body", 17, 22, 400),
    TypeStyle::new("callout", 16, 21, 400),
    TypeStyle::new("subheadline", 15, 20, 400),
    TypeStyle::new("footnote", 13, 18, 400),
    TypeStyle::new("caption-1", 12, 16, 400),
    TypeStyle::new("caption-2", 11, 13, 400),
];

/// Spacing scale used as `p-ios-*`, `gap-ios-*` and friends, in pixels.
pub const SPACING: &[(&str, u16)] = &[
    ("ios-xs", 4),
    ("ios-sm", 8),
    ("ios-md", 16),
    ("ios-lg", 24),
    ("ios-xl", 32),
    ("ios-2xl", 40),
    ("ios-3xl", 48),
    ("ios-4xl", 64),
];

/// Corner radii used as `rounded-*`. The unprefixed steps follow the `--radius` custom property.
pub const RADII: &[(&str, &str)] = &[
    ("ios-xs", "4px"),
    ("ios-sm", "8px"),
    ("ios-md", "10px"),
    ("ios-lg", "12px"),
    ("ios-xl", "16px"),
    ("ios-2xl", "20px"),
    ("lg", "var(--radius)"),
    ("md", "calc(var(--radius) - 2px)"),
    ("sm", "calc(var(--radius) - 4px)"),
];

/// Elevation shadows used as `shadow-ios-*`.
pub const SHADOWS: &[(&str, &str)] = &[
    ("ios-sm", "0 1px 2px 0 rgba(0, 0, 0, 0.05)"),
    (
        "ios-md",
        "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)",
    ),
    (
        "ios-lg",
        "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)",
    ),
    (
        "ios-xl",
        "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)",
    ),
];

/// Material blurs used as `backdrop-blur-*`, in pixels.
pub const BLURS: &[(&str, u16)] = &[("ios", 20)];

/// Font stacks used as `font-*`.
pub const FONT_FAMILIES: &[(&str, &[&str])] = &[(
    "sans",
    &[
        "-apple-system",
        "BlinkMacSystemFont",
        "'SF Pro Display'",
        "'SF Pro Text'",
        "'Helvetica Neue'",
        "Helvetica",
        "Arial",
        "sans-serif",
    ],
)];

/// Transition durations used as `duration-ios-*`, in milliseconds.
pub const DURATIONS: &[(&str, u16)] = &[("ios-fast", 150), ("ios-normal", 250), ("ios-slow", 350)];

/// Easing curves used as `ease-ios-*`.
pub const EASINGS: &[(&str, &str)] = &[
    ("ios-spring", "cubic-bezier(0.4, 0.0, 0.2, 1)"),
    ("ios-ease-in", "cubic-bezier(0.4, 0.0, 1, 1)"),
    ("ios-ease-out", "cubic-bezier(0.0, 0.0, 0.2, 1)"),
    ("ios-ease-in-out", "cubic-bezier(0.4, 0.0, 0.2, 1)"),
];

/// Looks up a type ramp step by utility suffix.
pub fn type_style(name: &str) -> Option<&'static TypeStyle> {
    TYPE_SCALE.iter().find(|style| style.name == name)
}

/// Returns `true` when `name` is a step of the type ramp.
pub fn is_type_scale(name: &str) -> bool {
    type_style(name).is_some()
}

/// Returns `true` when `name` is one of the elevation shadows.
pub fn is_shadow(name: &str) -> bool {
    SHADOWS.iter().any(|(shadow, _)| *shadow == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_scale_lookup() {
        let headline = type_style("headline").expect("headline step");
        assert_eq!(headline.size_px, 17);
        assert_eq!(headline.weight, 600);
        assert!(is_type_scale("caption-2"));
        assert!(!is_type_scale("ios-blue"));
    }

    #[test]
    fn shadow_lookup() {
        assert!(is_shadow("ios-lg"));
        assert!(!is_shadow("ios-2xl"));
        assert!(!is_shadow("lg"));
    }

    #[test]
    fn token_names_are_unique() {
        for table in [RADII, SHADOWS, EASINGS] {
            for (idx, (name, _)) in table.iter().enumerate() {
                assert!(
                    table[idx + 1..].iter().all(|(other, _)| other != name),
                    "duplicate token {name}"
                );
            }
        }
        for table in [SYSTEM_COLORS, SEMANTIC_COLORS] {
            for (idx, color) in table.iter().enumerate() {
                assert!(
                    table[idx + 1..].iter().all(|other| other.name != color.name),
                    "duplicate colour {}",
                    color.name
                );
            }
        }
    }
}
