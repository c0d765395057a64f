use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::config::EcoscoreConfig;
use crate::export::export_path;
use crate::observability::{set_operation, set_session_entries, Operation};
use crate::tui::SessionExplorer;

/// Workbook path used by the session's export key
pub fn session_export_path(config: &EcoscoreConfig, output_dir: Option<PathBuf>) -> PathBuf {
    match output_dir {
        Some(dir) => dir.join(&config.export.file_name),
        None => export_path(&config.export, None),
    }
}

/// Open the entry form and block until the user leaves it
pub fn run_interactive(config: &EcoscoreConfig, output_dir: Option<PathBuf>) -> Result<()> {
    let _op = set_operation(Operation::InteractiveSession);
    let path = session_export_path(config, output_dir);
    set_session_entries(0);

    info!(export_path = %path.display(), "Interactive session started");
    let mut explorer = SessionExplorer::new(path, config.tui.tick_rate())?;
    let session = explorer.run()?;
    drop(explorer);

    let elapsed = chrono::Utc::now() - session.started_at();
    info!(
        entries = session.len(),
        seconds = elapsed.num_seconds(),
        "Interactive session ended"
    );
    Ok(())
}
