//! Numeric side of the pipeline: the regression dataset and the converter
//! that projects native ratings through it.

pub mod constants;
pub mod convert;
pub mod store;
pub mod structures;

pub use convert::convert;
