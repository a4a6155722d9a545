use sweepview_protocol::ProtocolError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Board needs at least one row and one column")]
    InvalidDimensions,
    #[error("Surface of {width}x{height} pixels cannot fit the board")]
    InvalidSurface { width: f64, height: f64 },
    #[error("Snapshot has {actual} cells, board has {expected}")]
    BoardShape { expected: usize, actual: usize },
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

pub type Result<T> = core::result::Result<T, ViewError>;
