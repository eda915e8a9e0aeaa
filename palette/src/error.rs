use glaze::GlazeError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EditorError>;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Theme(#[from] GlazeError),

    #[error("no editable field at `{0}`")]
    UnknownField(String),

    #[error("invalid value `{value}` for `{path}`: {reason}")]
    InvalidInput {
        path: String,
        value: String,
        reason: String,
    },

    #[error("nothing staged for `{0}`")]
    NothingStaged(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("rendering service responded {status}: {body}")]
    Status { status: u16, body: String },

    #[error("document error: {0}")]
    Document(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
