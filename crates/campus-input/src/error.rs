//! Error types for the input layer.

/// Errors that can occur while classifying input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// A key name that maps to no binding.
    #[error("unknown key: {0}")]
    UnknownKey(String),
}
