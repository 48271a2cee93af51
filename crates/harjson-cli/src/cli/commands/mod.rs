//! CLI command handlers, one file per command.

mod batch;
mod catalog;
mod extract;

pub use batch::run_batch;
pub use catalog::run_catalog;
pub use extract::run_extract;
