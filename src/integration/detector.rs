//! Trait for object detection inference backends.

use crate::tracker::RawFrame;

/// Trait for object detection inference backends.
///
/// Implement this trait to connect any product detector to the tracker.
///
/// # Example
///
/// ```ignore
/// use cart_tracker::{DetectionSource, RawFrame};
///
/// struct MyDetector {
///     // Your model here
/// }
///
/// impl DetectionSource for MyDetector {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, input: &[u8], width: u32, height: u32) -> Result<RawFrame, Self::Error> {
///         // Run inference and return labelled pixel boxes
///         Ok(RawFrame::empty(width, height))
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for detection failures.
    type Error;

    /// Run inference on raw image data and return the frame's detections.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    fn detect(&mut self, input: &[u8], width: u32, height: u32) -> Result<RawFrame, Self::Error>;
}

