//! Matching utilities for associating live tracks with per-frame detections.

use log::{trace, warn};
use ndarray::Array2;

use crate::tracker::rect::Rect;

/// Cost given to padding cells so the solver only picks them when a row or
/// column has nothing real left.
const PADDING_COST: f64 = 1e6;

/// Detection input for the tracker, one per product box in a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Bounding box in TLBR pixel format (x1, y1, x2, y2)
    pub bbox: Rect,
    /// Class label reported by the detector
    pub label: String,
}

impl Detection {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, label: impl Into<String>) -> Self {
        Self {
            bbox: Rect::from_tlbr(x1, y1, x2, y2),
            label: label.into(),
        }
    }

    pub fn from_rect(bbox: Rect, label: impl Into<String>) -> Self {
        Self {
            bbox,
            label: label.into(),
        }
    }
}

/// Convert an IoU affinity matrix into an assignment cost matrix (`1 - IoU`).
pub fn iou_distance(ious: &Array2<f32>) -> Array2<f32> {
    ious.mapv(|iou| 1.0 - iou)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentResult {
    /// Accepted `(track_index, detection_index)` pairs.
    pub matches: Vec<(usize, usize)>,
    pub unmatched_tracks: Vec<usize>,
    pub unmatched_detections: Vec<usize>,
}

/// Solve the minimum-cost one-to-one assignment between tracks (rows) and
/// detections (columns) of an IoU matrix.
///
/// The solver minimises the total `1 - IoU` cost over the square, padded
/// problem. Pairs whose IoU falls below `iou_threshold` are then rejected,
/// leaving both sides unmatched. The bound is inclusive.
pub fn linear_assignment(ious: &Array2<f32>, iou_threshold: f32) -> AssignmentResult {
    let (num_rows, num_cols) = ious.dim();

    if num_rows == 0 {
        return AssignmentResult {
            matches: vec![],
            unmatched_tracks: vec![],
            unmatched_detections: (0..num_cols).collect(),
        };
    }

    if num_cols == 0 {
        return AssignmentResult {
            matches: vec![],
            unmatched_tracks: (0..num_rows).collect(),
            unmatched_detections: vec![],
        };
    }

    let cost_matrix = iou_distance(ious);
    let size = num_rows.max(num_cols);
    let mut padded = Array2::<f64>::from_elem((size, size), PADDING_COST);

    for ((i, j), &cost) in cost_matrix.indexed_iter() {
        padded[[i, j]] = cost as f64;
    }

    let mut matches = vec![];
    let mut unmatched_tracks = vec![];
    let mut unmatched_detections_mask: Vec<bool> = vec![true; num_cols];

    match lapjv::lapjv(&padded) {
        Ok((row_to_col, _)) => {
            for (row_idx, &col_idx) in row_to_col.iter().enumerate().take(num_rows) {
                if col_idx >= num_cols {
                    unmatched_tracks.push(row_idx);
                } else if ious[[row_idx, col_idx]] >= iou_threshold {
                    trace!(
                        "accepted track {row_idx} -> detection {col_idx} (iou {:.3})",
                        ious[[row_idx, col_idx]]
                    );
                    matches.push((row_idx, col_idx));
                    unmatched_detections_mask[col_idx] = false;
                } else {
                    trace!(
                        "rejected track {row_idx} -> detection {col_idx} (iou {:.3} < {iou_threshold})",
                        ious[[row_idx, col_idx]]
                    );
                    unmatched_tracks.push(row_idx);
                }
            }
        }
        Err(err) => {
            warn!("assignment solver failed, treating frame as unmatched: {err:?}");
            unmatched_tracks = (0..num_rows).collect();
        }
    }

    let unmatched_detections: Vec<usize> = unmatched_detections_mask
        .iter()
        .enumerate()
        .filter_map(|(i, &u)| if u { Some(i) } else { None })
        .collect();

    AssignmentResult {
        matches,
        unmatched_tracks,
        unmatched_detections,
    }
}
