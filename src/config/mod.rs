//! Configuration for ecoscore.
//!
//! Looked up from `.ecoscore.toml` in the current directory and its ancestors,
//! then the per-user config file, then defaults. Category weights and grade
//! thresholds are fixed and not configurable.

mod settings;
mod display;
mod loader;

pub use settings::{EcoscoreConfig, ExportConfig};
pub use display::{DisplayConfig, TuiConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, user_config_path, CONFIG_FILE_NAME,
};
