//! Builder for creating RawFrame objects from various detector output formats.

use crate::tracker::{RawFrame, Rect};

/// Builder for creating a `RawFrame` from per-box detector output.
#[derive(Debug, Clone, Default)]
pub struct RawFrameBuilder {
    frame: RawFrame,
}

impl RawFrameBuilder {
    /// Create a new builder for a frame of the given pixel size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            frame: RawFrame::new(width, height),
        }
    }

    /// Add a box in TLBR pixel format (x1, y1, x2, y2).
    pub fn tlbr(mut self, x1: f32, y1: f32, x2: f32, y2: f32, label: impl Into<String>) -> Self {
        self.frame.push(Rect::from_tlbr(x1, y1, x2, y2), label);
        self
    }

    /// Add a box in TLWH pixel format (left, top, width, height).
    pub fn tlwh(mut self, x: f32, y: f32, w: f32, h: f32, label: impl Into<String>) -> Self {
        self.frame.push(Rect::from_tlwh(x, y, w, h), label);
        self
    }

    /// Add a box in normalized XYWH format (center x, center y, width, height
    /// as fractions of the frame size).
    pub fn xywhn(mut self, cx: f32, cy: f32, w: f32, h: f32, label: impl Into<String>) -> Self {
        let fw = self.frame.width as f32;
        let fh = self.frame.height as f32;
        let rect = Rect::from_tlbr(
            (cx - w / 2.0) * fw,
            (cy - h / 2.0) * fh,
            (cx + w / 2.0) * fw,
            (cy + h / 2.0) * fh,
        );
        self.frame.push(rect, label);
        self
    }

    /// Build the final `RawFrame`.
    pub fn build(self) -> RawFrame {
        self.frame
    }
}
