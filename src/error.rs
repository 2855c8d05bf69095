//! Error types for configuration of the storefront auth layer.
//!
//! This module contains error types used for configuration and validation
//! errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use storefront_auth::{CookieName, ConfigError};
//!
//! let result = CookieName::new("");
//! assert!(matches!(result, Err(ConfigError::InvalidCookieName { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://shop.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Cookie name is invalid.
    #[error("Invalid cookie name '{name}'. Cookie names must be non-empty and contain only RFC 6265 token characters.")]
    InvalidCookieName {
        /// The invalid cookie name that was provided.
        name: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A path does not start with a slash.
    #[error("Invalid path '{path}'. Paths must start with '/'.")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },
}
