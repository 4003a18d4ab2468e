//! Frame-to-frame product tracker that reports items added to the cart.

use log::{debug, info, log_enabled, trace, Level};

use crate::error::ConfigError;
use crate::tracker::config::TrackerConfig;
use crate::tracker::filter::{RawFrame, filter_detections};
use crate::tracker::matching::{self, AssignmentResult, Detection};
use crate::tracker::rect::{Rect, iou_batch};
use crate::tracker::track::Track;

/// Result of advancing the track set by one frame.
struct FrameOutcome {
    tracks: Vec<Track>,
    added: Vec<String>,
    next_track_id: u64,
}

pub struct ProductTracker {
    tracks: Vec<Track>,
    frame_count: u64,
    next_track_id: u64,
    config: TrackerConfig,
}

impl ProductTracker {
    pub fn new(config: TrackerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            tracks: Vec::new(),
            frame_count: 0,
            next_track_id: 1,
            config,
        })
    }

    pub fn with_default_config() -> Self {
        Self {
            tracks: Vec::new(),
            frame_count: 0,
            next_track_id: 1,
            config: TrackerConfig::default(),
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Live tracks after the last processed frame.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Drop every live track. Configuration and the id counter are kept, so
    /// identities are never reused.
    pub fn reset(&mut self) {
        self.tracks.clear();
    }

    /// Frame driver: filter the raw detector output, then update the tracks.
    ///
    /// Returns the labels of products confirmed on this frame, one entry per
    /// confirmed track (duplicates are kept).
    pub fn track_products(&mut self, frame: &RawFrame) -> Vec<String> {
        let detections = filter_detections(frame, self.config.min_area_norm);
        self.update(detections)
    }

    /// Advance the tracks by one frame of already filtered detections.
    pub fn update(&mut self, detections: Vec<Detection>) -> Vec<String> {
        self.frame_count += 1;

        let FrameOutcome {
            tracks,
            added,
            next_track_id,
        } = self.advance(&detections);

        self.tracks = tracks;
        self.next_track_id = next_track_id;

        if log_enabled!(Level::Debug) && !self.tracks.is_empty() {
            let summary = self
                .tracks
                .iter()
                .map(|t| format!("{}#{}({}/{})", t.label, t.track_id, t.match_count, t.miss_count))
                .collect::<Vec<_>>()
                .join(", ");
            debug!("frame {}: tracks [{summary}]", self.frame_count);
        }

        added
    }

    /// Build the next generation of tracks from the current one. `self` is
    /// not touched; the caller swaps the result in.
    fn advance(&self, detections: &[Detection]) -> FrameOutcome {
        let track_rects: Vec<Rect> = self.tracks.iter().map(|t| t.bbox).collect();
        let det_rects: Vec<Rect> = detections.iter().map(|d| d.bbox).collect();
        let ious = iou_batch(&track_rects, &det_rects);
        trace!("frame {}: iou matrix {:?}", self.frame_count, ious);

        let AssignmentResult {
            matches,
            unmatched_detections,
            ..
        } = matching::linear_assignment(&ious, self.config.iou_threshold);

        let mut matched_det: Vec<Option<usize>> = vec![None; self.tracks.len()];
        for (itrack, idet) in matches {
            matched_det[itrack] = Some(idet);
        }

        let mut tracks = Vec::with_capacity(self.tracks.len() + unmatched_detections.len());
        let mut added = Vec::new();

        for (track, matched) in self.tracks.iter().zip(matched_det) {
            let mut track = track.clone();
            match matched {
                Some(idet) => {
                    track.mark_matched(&detections[idet]);
                    if track.just_confirmed(self.config.count_threshold) {
                        info!("{} added to cart (track {})", track.label, track.track_id);
                        added.push(track.label.clone());
                    }
                }
                None => {
                    track.mark_missed();
                    if track.is_expired(self.config.miss_threshold) {
                        debug!(
                            "evicting {}#{} after {} misses",
                            track.label, track.track_id, track.miss_count
                        );
                        continue;
                    }
                }
            }
            tracks.push(track);
        }

        let mut next_track_id = self.next_track_id;
        for idet in unmatched_detections {
            let track = Track::new(next_track_id, &detections[idet]);
            next_track_id += 1;
            debug!("new track {}#{}", track.label, track.track_id);
            tracks.push(track);
        }

        FrameOutcome {
            tracks,
            added,
            next_track_id,
        }
    }
}
