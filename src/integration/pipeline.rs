//! TrackerPipeline for combining detection, tracking and notification.

use std::fmt::Display;

use log::warn;

use crate::error::{ConfigError, PipelineError};
use crate::tracker::{ProductTracker, TrackerConfig};

use super::{DetectionSource, NotificationSink};

/// End-to-end frame loop: detector, then tracker, then notification sink.
///
/// One call to [`process_frame`](Self::process_frame) per captured frame.
pub struct TrackerPipeline<D: DetectionSource, S: NotificationSink> {
    detector: D,
    tracker: ProductTracker,
    sink: S,
}

impl<D, S> TrackerPipeline<D, S>
where
    D: DetectionSource,
    S: NotificationSink,
    S::Error: Display,
{
    /// Create a new pipeline with the given detector, tracker config and sink.
    pub fn new(detector: D, config: TrackerConfig, sink: S) -> Result<Self, ConfigError> {
        Ok(Self {
            detector,
            tracker: ProductTracker::new(config)?,
            sink,
        })
    }

    /// Create a new pipeline with default tracker configuration.
    pub fn with_default_config(detector: D, sink: S) -> Self {
        Self {
            detector,
            tracker: ProductTracker::with_default_config(),
            sink,
        }
    }

    /// Process a single frame and return the labels confirmed on it.
    ///
    /// Confirmed labels are also handed to the sink. A sink failure is
    /// logged and does not affect tracking; only a detector failure is
    /// returned, in which case the tracker state is left untouched.
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<String>, PipelineError<D::Error>> {
        let frame = self
            .detector
            .detect(input, width, height)
            .map_err(PipelineError::Detection)?;
        let added = self.tracker.track_products(&frame);

        if !added.is_empty() {
            if let Err(err) = self.sink.notify(&added) {
                warn!("failed to hand off {} add event(s): {err}", added.len());
            }
        }

        Ok(added)
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &ProductTracker {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut ProductTracker {
        &mut self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::{ChannelSink, RawFrameBuilder};
    use crate::tracker::RawFrame;

    struct MockDetector {
        frame: RawFrame,
        fail: bool,
    }

    impl DetectionSource for MockDetector {
        type Error = &'static str;

        fn detect(
            &mut self,
            _input: &[u8],
            _width: u32,
            _height: u32,
        ) -> Result<RawFrame, Self::Error> {
            if self.fail {
                return Err("camera unplugged");
            }
            Ok(self.frame.clone())
        }
    }

    fn milk_detector() -> MockDetector {
        MockDetector {
            frame: RawFrameBuilder::new(640, 480)
                .tlbr(100.0, 50.0, 500.0, 450.0, "milk")
                .build(),
            fail: false,
        }
    }

    #[test]
    fn test_tracker_pipeline() {
        let (sink, receiver) = ChannelSink::channel();
        let config = TrackerConfig {
            count_threshold: 3,
            ..Default::default()
        };
        let mut pipeline = TrackerPipeline::new(milk_detector(), config, sink).unwrap();

        assert!(pipeline.process_frame(&[], 640, 480).unwrap().is_empty());
        assert!(pipeline.process_frame(&[], 640, 480).unwrap().is_empty());
        assert_eq!(pipeline.process_frame(&[], 640, 480).unwrap(), vec!["milk"]);
        assert!(pipeline.process_frame(&[], 640, 480).unwrap().is_empty());

        assert_eq!(receiver.try_recv().unwrap(), vec!["milk"]);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_detector_error_leaves_tracker_untouched() {
        let (sink, _receiver) = ChannelSink::channel();
        let mut pipeline = TrackerPipeline::with_default_config(milk_detector(), sink);
        pipeline.process_frame(&[], 640, 480).unwrap();

        pipeline.detector_mut().fail = true;
        let err = pipeline.process_frame(&[], 640, 480).unwrap_err();
        assert!(matches!(err, PipelineError::Detection("camera unplugged")));
        assert_eq!(pipeline.tracker().frame_count(), 1);
        assert_eq!(pipeline.tracker().tracks()[0].miss_count, 0);
    }

    #[test]
    fn test_closed_sink_does_not_stop_tracking() {
        let (sink, receiver) = ChannelSink::channel();
        drop(receiver);
        let config = TrackerConfig {
            count_threshold: 2,
            ..Default::default()
        };
        let mut pipeline = TrackerPipeline::new(milk_detector(), config, sink).unwrap();
        pipeline.process_frame(&[], 640, 480).unwrap();
        assert_eq!(pipeline.process_frame(&[], 640, 480).unwrap(), vec!["milk"]);
        assert_eq!(pipeline.tracker().tracks()[0].match_count, 2);
    }
}
