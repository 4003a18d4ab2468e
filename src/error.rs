//! Error types for the cart tracker.

use thiserror::Error;

/// Rejected tracker configuration. Raised at construction, never mid-stream.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("iou_threshold must be in (0, 1], got {0}")]
    IouThreshold(f32),

    #[error("count_threshold must be at least 1, got {0}")]
    CountThreshold(u32),

    #[error("min_area_norm must be in [0, 1], got {0}")]
    MinAreaNorm(f32),
}

/// Errors surfaced by [`TrackerPipeline`](crate::integration::TrackerPipeline).
#[derive(Error, Debug)]
pub enum PipelineError<E> {
    #[error("detection failed: {0}")]
    Detection(E),
}
