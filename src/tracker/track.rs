//! A single product track.

use crate::tracker::matching::Detection;
use crate::tracker::rect::Rect;

/// Persistent hypothesis that one product stays in view across frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Identifier unique within the owning tracker
    pub track_id: u64,
    /// Product label, fixed at creation
    pub label: String,
    /// Box of the most recent matched detection
    pub bbox: Rect,
    /// Frames matched so far, starting at 1 on creation
    pub match_count: u32,
    /// Consecutive frames without a match
    pub miss_count: u32,
}

impl Track {
    /// Start a track from an unmatched detection.
    pub fn new(track_id: u64, detection: &Detection) -> Self {
        Self {
            track_id,
            label: detection.label.clone(),
            bbox: detection.bbox,
            match_count: 1,
            miss_count: 0,
        }
    }

    pub fn mark_matched(&mut self, detection: &Detection) {
        self.bbox = detection.bbox;
        self.match_count += 1;
        self.miss_count = 0;
    }

    pub fn mark_missed(&mut self) {
        self.miss_count += 1;
    }

    /// True once the track has gone unmatched more than `miss_threshold` frames in a row.
    pub fn is_expired(&self, miss_threshold: u32) -> bool {
        self.miss_count > miss_threshold
    }

    /// True only on the frame whose match brought `match_count` to `count_threshold`.
    pub fn just_confirmed(&self, count_threshold: u32) -> bool {
        self.match_count == count_threshold
    }
}
