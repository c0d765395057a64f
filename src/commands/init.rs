use anyhow::Result;
use std::path::Path;

use crate::config::CONFIG_FILE_NAME;

pub const DEFAULT_CONFIG: &str = r#"# Ecoscore Configuration

[export]
file_name = "Validation_Sustainability.xlsx"
directory = "."

[display]
use_color = true

[tui]
tick_rate_ms = 100
"#;

/// Write the default configuration into `dir`
pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
