//! Error types shared by layout and rendering.

use std::error::Error as ErrorTrait;

use plotters_backend::DrawingErrorKind;
use thiserror::Error;

use crate::bar::Orientation;

/// Errors produced while laying out or drawing a graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// An axis was configured in a way the scale math cannot handle,
    /// e.g. zero steps.
    #[error("invalid axis config: {0}")]
    InvalidAxisConfig(String),
    /// The graph orientation has no renderer.
    #[error("{0:?} bar graphs are not supported")]
    UnsupportedOrientation(Orientation),
    /// The drawing surface rejected an operation.
    #[error("drawing surface error: {0}")]
    Surface(String),
}

impl<E: ErrorTrait + Send + Sync> From<DrawingErrorKind<E>> for GraphError {
    #[inline]
    fn from(value: DrawingErrorKind<E>) -> Self {
        Self::Surface(value.to_string())
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
