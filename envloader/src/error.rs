//! Error types for loading configuration

/// Boxed error returned by a [`SecretStore`](crate::SecretStore).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while loading a configuration record.
///
/// Every variant aborts the load. Fields bound before the failing one keep
/// the values written into them, so a record that produced an error must not
/// be trusted.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// The remote secret could not be retrieved.
    ///
    /// Raised before any field is bound.
    #[error("Failed to fetch secret '{secret_name}': {source}")]
    SecretFetch {
        /// Value of `SECRET_NAME` at load time
        secret_name: String,
        /// Error reported by the secret store
        source: BoxError,
    },

    /// The remote secret is not a flat JSON object of string values.
    ///
    /// Raised before any field is bound.
    #[error("Secret '{secret_name}' is not a JSON object of string values: {source}")]
    SecretParse {
        /// Value of `SECRET_NAME` at load time
        secret_name: String,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// A resolved value is not a valid literal of the field's type.
    #[error("env \"{key}\", fieldname \"{field}\": cannot parse as {type_name}: {message}")]
    Format {
        /// Lookup key of the field
        key: String,
        /// Field name as declared in the struct
        field: String,
        /// Type the value was parsed into
        type_name: String,
        /// Message from the parser
        message: String,
    },

    /// A resolved numeric value does not fit the field's width.
    #[error("env \"{key}\", fieldname \"{field}\": value out of range for {type_name}: {message}")]
    Range {
        /// Lookup key of the field
        key: String,
        /// Field name as declared in the struct
        field: String,
        /// Type the value was parsed into
        type_name: String,
        /// Message from the parser
        message: String,
    },

    /// A required field resolved to nothing.
    #[error("env \"{key}\", fieldname \"{field}\" must be defined")]
    Missing {
        /// Lookup key of the field
        key: String,
        /// Field name as declared in the struct
        field: String,
    },
}

impl EnvError {
    /// Create a format error for a value parsed as `T`
    #[doc(hidden)]
    pub fn format_error<T>(
        key: impl Into<String>,
        field: impl Into<String>,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::Format {
            key: key.into(),
            field: field.into(),
            type_name: std::any::type_name::<T>().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a range error for a value parsed as `T`
    #[doc(hidden)]
    pub fn range_error<T>(
        key: impl Into<String>,
        field: impl Into<String>,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::Range {
            key: key.into(),
            field: field.into(),
            type_name: std::any::type_name::<T>().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a missing required field error
    #[doc(hidden)]
    pub fn missing(key: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Missing {
            key: key.into(),
            field: field.into(),
        }
    }

    /// Lookup key of the field that failed, if the error is field-specific.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Format { key, .. } | Self::Range { key, .. } | Self::Missing { key, .. } => {
                Some(key)
            }
            Self::SecretFetch { .. } | Self::SecretParse { .. } => None,
        }
    }
}
