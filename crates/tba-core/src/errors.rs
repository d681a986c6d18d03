use std::path::PathBuf;

/// Core error type for the Bot API client.
///
/// The HTTP adapter maps its transport failures into this type so callers see
/// one shape for every failed call: a non-accepted status code, a body that is
/// not JSON, or an envelope that reports `ok: false`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid path: {path}: {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("too many arguments for {operation}: expected at most {expected}, got {got}")]
    TooManyArguments {
        operation: String,
        expected: usize,
        got: usize,
    },

    #[error("invalid field {field}: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("http status {status} ({})", reason.unwrap_or("unknown status code"))]
    Transport {
        status: u16,
        reason: Option<&'static str>,
    },

    #[error("malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error(
        "telegram api error {}: {}",
        error_code.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string()),
        description.as_deref().unwrap_or("no description")
    )]
    Api {
        error_code: Option<i64>,
        description: Option<String>,
    },

    #[error("response envelope has ok=true but no result")]
    MissingResult,

    #[error("inbound payload error: {0}")]
    Inbound(String),

    #[error("external error: {0}")]
    External(String),
}

impl Error {
    /// Numeric code carried by the error, if any.
    ///
    /// Transport errors carry the HTTP status, API errors the envelope's
    /// `error_code`, and malformed responses the parser's error category.
    pub fn code(&self) -> Option<i64> {
        match self {
            Error::Transport { status, .. } => Some(i64::from(*status)),
            Error::Api { error_code, .. } => *error_code,
            Error::MalformedResponse(e) => Some(match e.classify() {
                serde_json::error::Category::Io => 1,
                serde_json::error::Category::Syntax => 2,
                serde_json::error::Category::Data => 3,
                serde_json::error::Category::Eof => 4,
            }),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
