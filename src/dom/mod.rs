//! Page side of the pipeline: raw-markup scanning, page classification,
//! rating location per layout, and annotation splicing.

pub mod adapter;
pub mod annotator;
pub mod classifier;
pub mod html;
