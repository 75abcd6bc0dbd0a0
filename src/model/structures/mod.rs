pub mod page_context;
pub mod regression_model;
pub mod time_control;
