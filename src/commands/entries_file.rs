//! Reading entries for the non-interactive commands.

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::entry::Entry;
use crate::errors::{Error, Result};
use crate::observability::{set_current_file, set_operation, Operation};

/// Parse a JSON array of entries
pub fn parse_entries(contents: &str) -> Result<Vec<Entry>> {
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(contents)?)
}

/// Read entries from a file, or stdin when `path` is `-`
pub fn read_entries(path: &Path) -> Result<Vec<Entry>> {
    let _op = set_operation(Operation::LoadingEntries);
    let _file = set_current_file(path);

    let contents = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| Error::file_system("Failed to read entries", path, e))?
    };

    let entries = parse_entries(&contents)?;
    debug!(path = %path.display(), count = entries.len(), "Loaded entries");
    Ok(entries)
}
