//! CLI command implementations.
//!
//! Available commands:
//! - **interactive**: Open the entry form (default)
//! - **score**: Score entries from a JSON file
//! - **export**: Export entries from a JSON file to a workbook
//! - **catalog**: List the indicator catalog
//! - **init**: Initialize a new `.ecoscore.toml`

pub mod catalog;
pub mod entries_file;
pub mod export;
pub mod init;
pub mod interactive;
pub mod score;

pub use catalog::list_catalog;
pub use entries_file::{parse_entries, read_entries};
pub use export::export_entries;
pub use init::init_config;
pub use interactive::run_interactive;
pub use score::score_entries;
