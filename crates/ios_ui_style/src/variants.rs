//! Static variant schemas and their resolution into class strings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::merge::ClassMerger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One selectable option along an axis.
pub struct VariantOption {
    name: &'static str,
    classes: &'static str,
}

impl VariantOption {
    /// Declares option `name` contributing the whitespace-delimited `classes`.
    pub const fn new(name: &'static str, classes: &'static str) -> Self {
        Self { name, classes }
    }

    /// Option name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Class tokens contributed when the option is selected.
    pub fn classes(&self) -> &'static str {
        self.classes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A named styling dimension with its options and default.
pub struct VariantAxis {
    name: &'static str,
    default: &'static str,
    options: &'static [VariantOption],
}

impl VariantAxis {
    /// Declares axis `name` selecting `default` when a selection leaves it unset.
    pub const fn new(
        name: &'static str,
        default: &'static str,
        options: &'static [VariantOption],
    ) -> Self {
        Self {
            name,
            default,
            options,
        }
    }

    /// Axis name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Default option name.
    pub fn default_option(&self) -> &'static str {
        self.default
    }

    /// Declared options in declaration order.
    pub fn options(&self) -> &'static [VariantOption] {
        self.options
    }

    fn option(&self, name: &str) -> Option<&'static VariantOption> {
        let options: &'static [VariantOption] = self.options;
        options.iter().find(|option| option.name == name)
    }

    /// The option this axis resolves to: the selected one if declared, else the default.
    fn effective(&self, selection: &Selection) -> Option<&'static VariantOption> {
        selection
            .get(self.name)
            .and_then(|name| self.option(name))
            .or_else(|| self.option(self.default))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Extra classes applied when several axes hold specific options at once.
pub struct CompoundVariant {
    conditions: &'static [(&'static str, &'static str)],
    classes: &'static str,
}

impl CompoundVariant {
    /// Applies `classes` when every `(axis, option)` pair matches the effective selection.
    pub const fn new(
        conditions: &'static [(&'static str, &'static str)],
        classes: &'static str,
    ) -> Self {
        Self {
            conditions,
            classes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Static declaration of a component's base classes, axes and compound variants.
///
/// Schemas are plain `'static` data meant to live in a `static` next to the component:
///
/// ```
/// use ios_ui_style::{resolve, Selection, VariantAxis, VariantOption, VariantSchema};
///
/// static BADGE: VariantSchema = VariantSchema::new(
///     "inline-flex rounded-ios-sm",
///     &[VariantAxis::new(
///         "tone",
///         "neutral",
///         &[
///             VariantOption::new("neutral", "bg-fill text-label"),
///             VariantOption::new("alert", "bg-ios-red text-white"),
///         ],
///     )],
/// );
///
/// let selection = Selection::new().with("tone", "alert");
/// assert_eq!(
///     resolve(&BADGE, &selection, Some("px-2")),
///     "inline-flex rounded-ios-sm bg-ios-red text-white px-2"
/// );
/// ```
pub struct VariantSchema {
    base: &'static str,
    axes: &'static [VariantAxis],
    compounds: &'static [CompoundVariant],
}

impl VariantSchema {
    /// Declares a schema without compound variants.
    pub const fn new(base: &'static str, axes: &'static [VariantAxis]) -> Self {
        Self {
            base,
            axes,
            compounds: &[],
        }
    }

    /// Attaches compound variants, applied after all axis classes in declaration order.
    pub const fn with_compounds(mut self, compounds: &'static [CompoundVariant]) -> Self {
        self.compounds = compounds;
        self
    }

    /// Classes applied regardless of selection.
    pub fn base(&self) -> &'static str {
        self.base
    }

    /// Axes in declaration order.
    pub fn axes(&self) -> &'static [VariantAxis] {
        self.axes
    }

    /// Looks up an axis by name.
    pub fn axis(&self, name: &str) -> Option<&'static VariantAxis> {
        let axes: &'static [VariantAxis] = self.axes;
        axes.iter().find(|axis| axis.name == name)
    }

    /// Option names declared for `axis`, empty when the axis is unknown.
    pub fn option_names(&self, axis: &str) -> Vec<&'static str> {
        self.axis(axis)
            .map(|axis| axis.options.iter().map(|option| option.name).collect())
            .unwrap_or_default()
    }

    /// Option `axis` resolves to under `selection`, or `None` for an undeclared axis.
    pub fn effective_option(&self, selection: &Selection, axis: &str) -> Option<&'static str> {
        self.axis(axis)?
            .effective(selection)
            .map(|option| option.name)
    }

    /// Checks that every axis has a declared, non-empty default and that names are unique.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaError`] found, in declaration order.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for (idx, axis) in self.axes.iter().enumerate() {
            if self.axes[..idx].iter().any(|prior| prior.name == axis.name) {
                return Err(SchemaError::DuplicateAxis { axis: axis.name });
            }
            if axis.default.is_empty() {
                return Err(SchemaError::EmptyDefault { axis: axis.name });
            }
            for (opt_idx, option) in axis.options.iter().enumerate() {
                if axis.options[..opt_idx]
                    .iter()
                    .any(|prior| prior.name == option.name)
                {
                    return Err(SchemaError::DuplicateOption {
                        axis: axis.name,
                        option: option.name,
                    });
                }
            }
            if axis.option(axis.default).is_none() {
                return Err(SchemaError::UnknownDefault {
                    axis: axis.name,
                    default: axis.default,
                });
            }
        }

        for compound in self.compounds {
            for &(axis_name, option) in compound.conditions {
                let axis = self
                    .axis(axis_name)
                    .ok_or(SchemaError::UnknownCompoundAxis { axis: axis_name })?;
                if axis.option(option).is_none() {
                    return Err(SchemaError::UnknownCompoundOption {
                        axis: axis_name,
                        option,
                    });
                }
            }
        }
        Ok(())
    }

    /// Resolves `selection` into the merged class string, with `caller_classes` merged last.
    pub fn resolve(&self, selection: &Selection, caller_classes: Option<&str>) -> String {
        let mut merger = ClassMerger::new();
        merger.push(self.base);
        for axis in self.axes {
            merger.push(axis.effective(selection).map(VariantOption::classes));
        }
        for compound in self.compounds {
            let matches = compound.conditions.iter().all(|&(axis, option)| {
                self.effective_option(selection, axis) == Some(option)
            });
            if matches {
                merger.push(compound.classes);
            }
        }
        merger.push(caller_classes);
        merger.finish()
    }
}

/// Resolves `selection` against `schema` and merges `caller_classes` last.
///
/// Unknown axes in `selection` are ignored and unknown options fall back to the axis default;
/// resolution never fails.
pub fn resolve(schema: &VariantSchema, selection: &Selection, caller_classes: Option<&str>) -> String {
    schema.resolve(selection, caller_classes)
}

/// Per-call-site choice of option for each axis. Unset axes use the schema default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeMap<String, String>);

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selection with `axis` set to `option`.
    pub fn with(mut self, axis: impl Into<String>, option: impl Into<String>) -> Self {
        self.set(axis, option);
        self
    }

    /// Sets `axis` to `option`, replacing any earlier choice.
    pub fn set(&mut self, axis: impl Into<String>, option: impl Into<String>) {
        self.0.insert(axis.into(), option.into());
    }

    /// Selected option for `axis`, if any.
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.0.get(axis).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Selection
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(axis, option)| (axis.into(), option.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    static CHIP: VariantSchema = VariantSchema::new(
        "inline-flex items-center",
        &[
            VariantAxis::new(
                "tone",
                "plain",
                &[
                    VariantOption::new("plain", "bg-fill text-label"),
                    VariantOption::new("tinted", "bg-ios-blue text-white"),
                ],
            ),
            VariantAxis::new(
                "size",
                "md",
                &[
                    VariantOption::new("sm", "h-6 px-2"),
                    VariantOption::new("md", "h-8 px-3"),
                ],
            ),
        ],
    )
    .with_compounds(&[CompoundVariant::new(
        &[("tone", "tinted"), ("size", "sm")],
        "font-semibold",
    )]);

    #[test]
    fn declared_selection_concatenates_in_axis_order() {
        let selection = Selection::new().with("size", "sm").with("tone", "plain");
        assert_eq!(
            resolve(&CHIP, &selection, None),
            "inline-flex items-center bg-fill text-label h-6 px-2"
        );
    }

    #[test]
    fn unset_axis_uses_default() {
        assert_eq!(
            resolve(&CHIP, &Selection::new(), None),
            "inline-flex items-center bg-fill text-label h-8 px-3"
        );
        assert_eq!(CHIP.effective_option(&Selection::new(), "size"), Some("md"));
    }

    #[test]
    fn unknown_option_falls_back_to_default() {
        let selection = Selection::new().with("tone", "neon");
        assert_eq!(
            resolve(&CHIP, &selection, None),
            resolve(&CHIP, &Selection::new(), None)
        );
        assert_eq!(CHIP.effective_option(&selection, "tone"), Some("plain"));
    }

    #[test]
    fn unknown_axis_is_ignored() {
        let selection = Selection::new().with("elevation", "high");
        assert_eq!(
            resolve(&CHIP, &selection, None),
            resolve(&CHIP, &Selection::new(), None)
        );
        assert_eq!(CHIP.effective_option(&selection, "elevation"), None);
    }

    #[test]
    fn caller_classes_merge_last() {
        let selection = Selection::new().with("tone", "tinted");
        assert_eq!(
            resolve(&CHIP, &selection, Some("bg-ios-green mt-4")),
            "inline-flex items-center bg-ios-green text-white h-8 px-3 mt-4"
        );
    }

    #[test]
    fn compound_variant_requires_every_condition() {
        let both = Selection::new().with("tone", "tinted").with("size", "sm");
        assert_eq!(
            resolve(&CHIP, &both, None),
            "inline-flex items-center bg-ios-blue text-white h-6 px-2 font-semibold"
        );
        let one = Selection::new().with("tone", "tinted");
        assert!(!resolve(&CHIP, &one, None).contains("font-semibold"));
    }

    #[test]
    fn option_names_follow_declaration_order() {
        assert_eq!(CHIP.option_names("tone"), vec!["plain", "tinted"]);
        assert!(CHIP.option_names("missing").is_empty());
    }

    #[test]
    fn validate_accepts_well_formed_schema() {
        assert_eq!(CHIP.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_missing_default() {
        static BROKEN: VariantSchema = VariantSchema::new(
            "",
            &[VariantAxis::new(
                "tone",
                "loud",
                &[VariantOption::new("plain", "bg-fill")],
            )],
        );
        assert_eq!(
            BROKEN.validate(),
            Err(SchemaError::UnknownDefault {
                axis: "tone",
                default: "loud",
            })
        );
        // A broken axis contributes nothing instead of failing.
        assert_eq!(resolve(&BROKEN, &Selection::new(), Some("mt-2")), "mt-2");
        assert_eq!(
            resolve(&BROKEN, &Selection::new().with("tone", "plain"), None),
            "bg-fill"
        );
    }

    #[test]
    fn validate_rejects_duplicates_and_bad_compounds() {
        static DUPLICATE_AXIS: VariantSchema = VariantSchema::new(
            "",
            &[
                VariantAxis::new("size", "sm", &[VariantOption::new("sm", "h-6")]),
                VariantAxis::new("size", "sm", &[VariantOption::new("sm", "h-6")]),
            ],
        );
        assert_eq!(
            DUPLICATE_AXIS.validate(),
            Err(SchemaError::DuplicateAxis { axis: "size" })
        );

        static EMPTY_DEFAULT: VariantSchema = VariantSchema::new(
            "",
            &[VariantAxis::new("size", "", &[VariantOption::new("sm", "h-6")])],
        );
        assert_eq!(
            EMPTY_DEFAULT.validate(),
            Err(SchemaError::EmptyDefault { axis: "size" })
        );

        static DUPLICATE_OPTION: VariantSchema = VariantSchema::new(
            "",
            &[VariantAxis::new(
                "size",
                "sm",
                &[VariantOption::new("sm", "h-6"), VariantOption::new("sm", "h-7")],
            )],
        );
        assert_eq!(
            DUPLICATE_OPTION.validate(),
            Err(SchemaError::DuplicateOption {
                axis: "size",
                option: "sm",
            })
        );

        static BAD_COMPOUND: VariantSchema = VariantSchema::new(
            "",
            &[VariantAxis::new("size", "sm", &[VariantOption::new("sm", "h-6")])],
        )
        .with_compounds(&[CompoundVariant::new(&[("size", "xl")], "text-lg")]);
        assert_eq!(
            BAD_COMPOUND.validate(),
            Err(SchemaError::UnknownCompoundOption {
                axis: "size",
                option: "xl",
            })
        );
    }

    #[test]
    fn selection_round_trips_through_json() {
        let selection: Selection =
            serde_json::from_str(r#"{"variant":"outline","size":"sm"}"#).expect("selection json");
        assert_eq!(selection.get("variant"), Some("outline"));
        assert_eq!(selection.get("size"), Some("sm"));

        let collected: Selection = [("variant", "ghost"), ("variant", "link")].into_iter().collect();
        assert_eq!(collected.get("variant"), Some("link"));
    }

    #[test]
    fn resolve_is_deterministic() {
        let selection = Selection::new().with("tone", "tinted");
        let first = resolve(&CHIP, &selection, Some("mt-4"));
        for _ in 0..3 {
            assert_eq!(resolve(&CHIP, &selection, Some("mt-4")), first);
        }
    }
}
