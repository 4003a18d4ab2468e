mod config;
mod filter;
mod matching;
mod product_tracker;
mod rect;
mod track;

pub use config::TrackerConfig;
pub use filter::{RawFrame, filter_detections};
pub use matching::{AssignmentResult, Detection, iou_distance, linear_assignment};
pub use product_tracker::ProductTracker;
pub use rect::{Rect, iou_batch};
pub use track::Track;
