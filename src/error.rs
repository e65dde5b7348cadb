use axum::http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No file selected")]
    NoFileSelected,

    #[error("Unsupported file format: {file_name}")]
    UnsupportedFormat { file_name: String },

    #[error("Request blocked by safety system: {reason}")]
    SafetyBlocked { reason: String },

    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("FSM error: {0}")]
    Fsm(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// The failure classes a user can tell apart on the result page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NoFileSelected,
    UnsupportedFormat,
    SafetyBlocked,
    Processing,
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }

    pub fn fsm(msg: impl Into<String>) -> Self {
        Self::Fsm(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoFileSelected => ErrorKind::NoFileSelected,
            Self::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Self::SafetyBlocked { .. } => ErrorKind::SafetyBlocked,
            _ => ErrorKind::Processing,
        }
    }

    /// Message shown in the error block of the page.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::NoFileSelected => "No file selected.".to_string(),
            ErrorKind::UnsupportedFormat => {
                "Unsupported file format. Use PNG, JPG, JPEG, GIF, or WEBP.".to_string()
            }
            ErrorKind::SafetyBlocked => {
                "The analysis request was blocked by the safety system. Try another image."
                    .to_string()
            }
            ErrorKind::Processing => {
                format!("An error occurred while processing the image: {}", self)
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NoFileSelected | Self::UnsupportedFormat { .. } => StatusCode::BAD_REQUEST,
            Self::SafetyBlocked { .. } | Self::Image(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Inference(_) | Self::Network(_) | Self::Serialization(_) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
