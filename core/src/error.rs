//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// A type admitted for generation carries no object type (identity facet).
    #[from(ignore)]
    #[display("Precondition violated: type '{class_name}' has no object type")]
    MissingObjectType {
        /// Runtime class name of the offending type.
        class_name: String,
    },

    /// A visibility level outside `public`, `private`, `private-with-prototyping`.
    #[from(ignore)]
    #[display("Unknown visibility: {_0}")]
    UnknownVisibility(String),

    /// An output format other than JSON or YAML.
    #[from(ignore)]
    #[display("Unknown format: {_0}")]
    UnknownFormat(String),

    /// The metamodel graph is malformed (dangling type references, duplicates).
    #[from(ignore)]
    #[display("Metamodel Error: {_0}")]
    Metamodel(String),

    /// JSON / YAML serialization or parsing failures.
    #[from(ignore)]
    #[display("Serialization Error: {_0}")]
    Serialization(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::Other, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        // String defaults to General, never one of the typed variants
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_missing_object_type_display() {
        let app_err = AppError::MissingObjectType {
            class_name: "dom.Customer".into(),
        };
        assert_eq!(
            app_err.to_string(),
            "Precondition violated: type 'dom.Customer' has no object type"
        );
    }
}
