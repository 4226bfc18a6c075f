//! Error handling for the ATS scorer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Corrupt document: {0}")]
    CorruptDocument(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Scoring engine unavailable: {0}")]
    EngineUnavailable(String),

    #[error("Analysis service error: {0}")]
    Api(#[from] ApiError),
}

pub type Result<T> = std::result::Result<T, AtsError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for AtsError {
    fn from(err: anyhow::Error) -> Self {
        AtsError::EngineUnavailable(err.to_string())
    }
}

/// Failures reported by a remote analysis service (hosted or local model).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("401 unauthorized")]
    Unauthorized,

    #[error("403 forbidden")]
    Forbidden,

    #[error("404 not found")]
    NotFound,

    #[error("429 rate limited")]
    RateLimited,

    #[error("{0} server error")]
    ServerError(u16),

    #[error("unexpected status {0}")]
    Other(u16),
}

/// User-facing help for an [`ApiError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorGuidance {
    pub title: &'static str,
    pub description: &'static str,
    pub solutions: Vec<&'static str>,
}

impl ApiError {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            429 => ApiError::RateLimited,
            500..=599 => ApiError::ServerError(status),
            other => ApiError::Other(other),
        }
    }

    /// Whether retrying the same request later may succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, ApiError::RateLimited | ApiError::ServerError(_))
    }

    pub fn guidance(&self) -> ApiErrorGuidance {
        match self {
            ApiError::Unauthorized => ApiErrorGuidance {
                title: "Unauthorized",
                description: "The analysis service rejected the configured credentials.",
                solutions: vec![
                    "Use the built-in heuristic analysis instead",
                    "Check the token format expected by the provider",
                    "Generate a new token and try again",
                    "Make sure the account is active",
                ],
            },
            ApiError::Forbidden => ApiErrorGuidance {
                title: "Forbidden",
                description: "The credentials do not grant access to the requested model.",
                solutions: vec![
                    "Grant the token inference (read) access",
                    "Check whether the model requires special access",
                    "Verify the usage limits of the account",
                ],
            },
            ApiError::NotFound => ApiErrorGuidance {
                title: "Not found",
                description: "The requested model or endpoint does not exist.",
                solutions: vec![
                    "Try a different model",
                    "Use a local model runtime instead",
                    "Check the provider status page",
                ],
            },
            ApiError::RateLimited => ApiErrorGuidance {
                title: "Rate limited",
                description: "Too many requests were sent to the analysis service.",
                solutions: vec![
                    "Wait and retry, rate limits reset automatically",
                    "Reduce the request frequency",
                    "Upgrade the account for higher limits",
                ],
            },
            ApiError::ServerError(_) => ApiErrorGuidance {
                title: "Server error",
                description: "The analysis service is temporarily unavailable.",
                solutions: vec![
                    "Try again later",
                    "Check the provider status page",
                    "Use a different model",
                ],
            },
            ApiError::Other(_) => ApiErrorGuidance {
                title: "Unknown error",
                description: "An unexpected error occurred.",
                solutions: vec!["Please try again later", "Check your internet connection"],
            },
        }
    }
}
