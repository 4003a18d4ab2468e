//! Conversion of raw detector output into tracker detections.

use log::trace;

use crate::tracker::matching::Detection;
use crate::tracker::rect::Rect;

/// Raw detector output for one frame.
///
/// `boxes[i]` and `labels[i]` describe the same object. Boxes are TLBR in
/// pixels of a `width` x `height` frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFrame {
    pub boxes: Vec<Rect>,
    pub labels: Vec<String>,
    pub width: u32,
    pub height: u32,
}

impl RawFrame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            boxes: Vec::new(),
            labels: Vec::new(),
            width,
            height,
        }
    }

    /// An empty frame, meaning "no detections this frame".
    pub fn empty(width: u32, height: u32) -> Self {
        Self::new(width, height)
    }

    pub fn push(&mut self, bbox: Rect, label: impl Into<String>) {
        self.boxes.push(bbox);
        self.labels.push(label.into());
    }

    pub fn len(&self) -> usize {
        self.boxes.len().min(self.labels.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pixel area of the whole frame.
    pub fn area(&self) -> f32 {
        self.width as f32 * self.height as f32
    }
}

/// Keep the detections whose area covers at least `min_area_norm` of the
/// frame.
///
/// Never fails: a frame without boxes, a zero-sized frame, or boxes with
/// inverted, empty or non-finite coordinates simply produce fewer (or no)
/// detections. Mismatched box/label counts are truncated to the shorter list.
pub fn filter_detections(frame: &RawFrame, min_area_norm: f32) -> Vec<Detection> {
    let frame_area = frame.area();
    if frame_area <= 0.0 {
        return Vec::new();
    }

    frame
        .boxes
        .iter()
        .zip(&frame.labels)
        .filter(|(bbox, label)| {
            if !bbox.is_valid() {
                trace!("dropping malformed box for {label}: {:?}", bbox.to_tlbr());
                return false;
            }
            let area_norm = bbox.area() / frame_area;
            if area_norm < min_area_norm {
                trace!("dropping {label}: area {area_norm:.3} < {min_area_norm}");
                return false;
            }
            true
        })
        .map(|(bbox, label)| Detection::from_rect(*bbox, label.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with(boxes: &[[f32; 4]]) -> RawFrame {
        let mut frame = RawFrame::new(100, 100);
        for (i, b) in boxes.iter().enumerate() {
            frame.push(Rect::from(*b), format!("item{i}"));
        }
        frame
    }

    #[test]
    fn test_empty_frame() {
        assert!(filter_detections(&RawFrame::empty(640, 480), 0.3).is_empty());
    }

    #[test]
    fn test_area_threshold_inclusive() {
        // 60x50 = 0.30 of a 100x100 frame
        let frame = frame_with(&[[0.0, 0.0, 60.0, 50.0], [0.0, 0.0, 50.0, 50.0]]);
        let dets = filter_detections(&frame, 0.3);
        assert_eq!(dets.len(), 1);
        assert_eq!(dets[0].label, "item0");
        assert_eq!(dets[0].bbox, Rect::from_tlbr(0.0, 0.0, 60.0, 50.0));
    }

    #[test]
    fn test_keeps_order() {
        let frame = frame_with(&[
            [0.0, 0.0, 80.0, 80.0],
            [5.0, 5.0, 10.0, 10.0],
            [10.0, 10.0, 90.0, 90.0],
        ]);
        let labels: Vec<_> = filter_detections(&frame, 0.4)
            .into_iter()
            .map(|d| d.label)
            .collect();
        assert_eq!(labels, vec!["item0", "item2"]);
    }

    #[test]
    fn test_malformed_boxes_dropped() {
        let frame = frame_with(&[
            [90.0, 90.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 100.0],
            [0.0, 0.0, f32::INFINITY, 100.0],
        ]);
        assert!(filter_detections(&frame, 0.0).is_empty());
    }

    #[test]
    fn test_zero_sized_frame() {
        let mut frame = RawFrame::new(0, 480);
        frame.push(Rect::from_tlbr(0.0, 0.0, 10.0, 10.0), "milk");
        assert!(filter_detections(&frame, 0.0).is_empty());
    }

    #[test]
    fn test_label_count_mismatch_truncates() {
        let mut frame = frame_with(&[[0.0, 0.0, 90.0, 90.0]]);
        frame.boxes.push(Rect::from_tlbr(0.0, 0.0, 95.0, 95.0));
        assert_eq!(frame.len(), 1);
        assert_eq!(filter_detections(&frame, 0.3).len(), 1);
    }
}
