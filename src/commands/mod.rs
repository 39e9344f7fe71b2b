//! CLI command implementations.
//!
//! Each submodule handles one subcommand:
//! - **scan**: run the full database → analyze → summarize pipeline
//! - **summarize**: re-summarize an existing result file
//! - **init**: write a default configuration file

pub mod init;
pub mod scan;
pub mod summarize;

pub use init::init_config;
pub use scan::{handle_scan, ScanOptions};
pub use summarize::handle_summarize;
