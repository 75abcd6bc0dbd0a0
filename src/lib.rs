pub mod args;
pub mod dom;
pub mod model;
pub mod pipeline;
