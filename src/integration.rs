//! Integration module for connecting the tracker to its collaborators.
//!
//! This module provides traits and utilities for plugging an object
//! detection backend in front of the tracker and a notification sender
//! behind it.

mod builder;
mod detector;
mod notifier;
mod pipeline;

pub use builder::RawFrameBuilder;
pub use detector::DetectionSource;
pub use notifier::{ChannelSink, NotificationSink};
pub use pipeline::TrackerPipeline;
