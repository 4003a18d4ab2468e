//! IoU multi-object tracker for a shopping-cart camera.
//!
//! Detections from an external object detector are filtered by size,
//! associated with live tracks by optimal IoU assignment, and every track
//! that stays matched for `count_threshold` frames is reported once as
//! added to the cart.

pub mod error;
pub mod integration;
pub mod tracker;

pub use error::{ConfigError, PipelineError};
pub use integration::{
    ChannelSink, DetectionSource, NotificationSink, RawFrameBuilder, TrackerPipeline,
};
pub use tracker::{Detection, ProductTracker, RawFrame, Rect, Track, TrackerConfig};
