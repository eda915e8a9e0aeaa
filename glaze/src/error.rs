use thiserror::Error;

pub type Result<T> = std::result::Result<T, GlazeError>;

#[derive(Debug, Error)]
pub enum GlazeError {
    #[error("invalid theme at `{path}`: {reason}")]
    InvalidTheme { path: String, reason: String },

    #[error("invalid theme path `{0}`")]
    InvalidPath(String),

    #[error("unknown theme path `{0}`")]
    UnknownPath(String),

    #[error("unknown layer `@tailwind {0}`")]
    UnknownLayer(String),

    #[error("stylesheet engine unavailable: {0}")]
    EngineUnavailable(String),

    #[error("stylesheet engine exited with {status}: {stderr}")]
    Process { status: String, stderr: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl GlazeError {
    pub(crate) fn invalid_theme(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTheme {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
