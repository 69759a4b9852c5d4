use std::fmt;

use crate::shape::ShapeError;

/// Failure of one engine invocation. Always fatal to that invocation.
#[derive(Debug)]
pub enum EngineError {
    /// Raised on the calling thread (pipelined execution).
    Shape(ShapeError),
    /// Raised inside parallel worker `chunk`; the lowest failing chunk wins.
    WorkerFailure { chunk: usize, source: ShapeError },
    /// The per-invocation worker pool could not be built.
    Pool(String),
}

impl EngineError {
    /// Underlying shape error, if any.
    pub fn shape_error(&self) -> Option<&ShapeError> {
        match self {
            Self::Shape(e) | Self::WorkerFailure { source: e, .. } => Some(e),
            Self::Pool(_) => None,
        }
    }
}

impl From<ShapeError> for EngineError {
    fn from(e: ShapeError) -> Self {
        Self::Shape(e)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape(e) => write!(f, "{e}"),
            Self::WorkerFailure { chunk, source } => write!(f, "worker {chunk} failed: {source}"),
            Self::Pool(reason) => write!(f, "could not start worker pool: {reason}"),
        }
    }
}

impl std::error::Error for EngineError {}
