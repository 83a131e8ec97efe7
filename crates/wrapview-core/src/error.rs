use thiserror::Error;

/// Rejected input from the presentation layer. State is never touched when
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown configuration field `{0}`")]
    UnknownField(String),
    #[error("unknown {field} option `{value}`")]
    UnknownOption { field: &'static str, value: String },
    #[error("invalid color `{0}` (expected #rrggbb or #rgb)")]
    InvalidColor(String),
}
