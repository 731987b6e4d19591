use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid identity source: {value} {location}")]
    InvalidIdentitySource {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates Validation error at caller location.
    #[track_caller]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates InvalidIdentitySource error at caller location.
    #[track_caller]
    pub fn invalid_identity_source(value: impl Into<String>) -> Self {
        Self::InvalidIdentitySource {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
