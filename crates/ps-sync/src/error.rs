use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Cloud API error: {message} (status: {status}, code: {code}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid cloud URL '{url}': {message} {location}")]
    InvalidUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Store IO error at {path}: {source} {location}")]
    StoreIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Store file corrupted at {path}: {message} {location}")]
    StoreCorrupted {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cloud store unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl SyncError {
    /// Whether a later attempt could succeed without any change on our side.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http { .. } | Self::Unavailable { .. } | Self::StoreIo { .. } => true,
            Self::Api { status, .. } => *status >= 500 || *status == 429,
            Self::InvalidUrl { .. } | Self::Json { .. } | Self::StoreCorrupted { .. } => false,
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        SyncError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        SyncError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Creates Api error at caller location.
    #[track_caller]
    pub fn api(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        SyncError::Api {
            status,
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates InvalidUrl error at caller location.
    #[track_caller]
    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        SyncError::InvalidUrl {
            url: url.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates StoreIo error at caller location.
    #[track_caller]
    pub fn store_io(path: PathBuf, source: std::io::Error) -> Self {
        SyncError::StoreIo {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates StoreCorrupted error at caller location.
    #[track_caller]
    pub fn store_corrupted(path: PathBuf, message: impl Into<String>) -> Self {
        SyncError::StoreCorrupted {
            path,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Unavailable error at caller location.
    #[track_caller]
    pub fn unavailable(message: impl Into<String>) -> Self {
        SyncError::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for SyncError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        SyncError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for SyncError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        SyncError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
