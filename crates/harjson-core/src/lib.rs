pub mod config;
pub mod error;
pub mod logging;

pub mod batch;
pub mod catalog;
pub mod har;
pub mod pipeline;

pub use error::PipelineError;
