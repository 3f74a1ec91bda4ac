use thiserror::Error;

#[derive(Debug, Error)]
/// Recoverable catalog problems. Each one is logged and replaced by a default.
pub enum CatalogError {
    /// Host-supplied configuration JSON did not parse.
    #[error("invalid storybook config: {0}")]
    Config(#[from] serde_json::Error),
    /// Persisted catalog state did not match the expected shape.
    #[error("persisted catalog state is malformed: {0}")]
    State(String),
    /// A story id that the catalog does not list.
    #[error("unknown story `{0}`")]
    UnknownStory(String),
    /// A select arg named an option its axis does not declare.
    #[error("arg `{arg}` has no option `{value}`, using `{fallback}`")]
    UnknownOption {
        /// Arg name.
        arg: &'static str,
        /// Rejected value.
        value: String,
        /// Option rendered instead.
        fallback: &'static str,
    },
    /// An arg held a JSON value of the wrong type.
    #[error("arg `{arg}` expects a {expected}")]
    ArgType {
        /// Arg name.
        arg: &'static str,
        /// Expected JSON type.
        expected: &'static str,
    },
}
