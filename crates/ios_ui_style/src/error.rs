use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Structural problems in a [`VariantSchema`](crate::VariantSchema) declaration.
///
/// Only [`VariantSchema::validate`](crate::VariantSchema::validate) reports these; resolution
/// itself never fails.
pub enum SchemaError {
    /// An axis declares an empty default option name.
    #[error("axis `{axis}` has no default option")]
    EmptyDefault {
        /// Offending axis.
        axis: &'static str,
    },
    /// An axis defaults to an option it does not declare.
    #[error("axis `{axis}` defaults to undeclared option `{default}`")]
    UnknownDefault {
        /// Offending axis.
        axis: &'static str,
        /// Declared default.
        default: &'static str,
    },
    /// Two axes share a name.
    #[error("axis `{axis}` is declared more than once")]
    DuplicateAxis {
        /// Repeated axis name.
        axis: &'static str,
    },
    /// An axis declares the same option twice.
    #[error("axis `{axis}` declares option `{option}` more than once")]
    DuplicateOption {
        /// Axis holding the duplicate.
        axis: &'static str,
        /// Repeated option name.
        option: &'static str,
    },
    /// A compound variant names an axis the schema does not declare.
    #[error("compound variant references unknown axis `{axis}`")]
    UnknownCompoundAxis {
        /// Unknown axis name.
        axis: &'static str,
    },
    /// A compound variant names an option its axis does not declare.
    #[error("compound variant references unknown option `{option}` on axis `{axis}`")]
    UnknownCompoundOption {
        /// Axis of the condition.
        axis: &'static str,
        /// Unknown option name.
        option: &'static str,
    },
}
