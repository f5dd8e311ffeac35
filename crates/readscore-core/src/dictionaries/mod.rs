//! Word lists used by sentence segmentation.

pub mod abbreviations;
