use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::settings::EcoscoreConfig;
use crate::errors::{Error, Result};

/// Name of the per-project configuration file
pub const CONFIG_FILE_NAME: &str = ".ecoscore.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string, resetting invalid sections to defaults
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<EcoscoreConfig, String> {
    let mut config = toml::from_str::<EcoscoreConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    for problem in config.sanitize() {
        warn!("Invalid configuration: {}. Using defaults for that section.", problem);
    }

    Ok(config)
}

/// Try loading config from a specific path, `None` if missing or unparsable
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<EcoscoreConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Per-user configuration file (`$CONFIG_DIR/ecoscore/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ecoscore").join("config.toml"))
}

/// Search `start` and its ancestors for a project config, then the user config
pub fn load_config_from(start: PathBuf) -> EcoscoreConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            EcoscoreConfig::default()
        })
}

/// Load configuration starting from the current directory
pub fn load_config() -> EcoscoreConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            EcoscoreConfig::default()
        }
    }
}

/// Load an explicitly requested config file. Unlike discovery, failures are errors.
pub fn load_config_from_path(path: &Path) -> Result<EcoscoreConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::file_system("Failed to read config file", path, e))?;
    let mut config: EcoscoreConfig = toml::from_str(&contents)?;

    let problems = config.sanitize();
    if !problems.is_empty() {
        return Err(Error::Configuration(problems.join("; ")));
    }

    debug!("Loaded config from {}", path.display());
    Ok(config)
}
