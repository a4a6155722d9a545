use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Unknown cell symbol {0:?}")]
    UnknownSymbol(char),
    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, ProtocolError>;
