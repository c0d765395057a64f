use anyhow::Result;
use ecoscore::cli::{parse_args, Cli, Commands};
use ecoscore::commands::score::ScoreConfig;
use ecoscore::config::{load_config, load_config_from_path, EcoscoreConfig};
use ecoscore::observability::{
    init_logging, install_panic_hook, set_operation, LogTarget, Operation,
};

// Main orchestrator function
fn main() -> Result<()> {
    install_panic_hook();
    let cli = parse_args();
    let command = cli
        .command
        .clone()
        .unwrap_or_else(Commands::default_interactive);

    let target = log_target(&command);
    init_logging(cli.verbosity, target)?;

    let config = load_configuration(&cli)?;
    let use_color = color_enabled(cli.plain, &config);
    if !use_color {
        colored::control::set_override(false);
    }

    match command {
        Commands::Interactive { output_dir, .. } => {
            ecoscore::commands::run_interactive(&config, output_dir)
        }
        Commands::Score {
            entries,
            format,
            export,
        } => ecoscore::commands::score_entries(ScoreConfig {
            entries: &entries,
            format,
            export: export.as_deref(),
            use_color,
        }),
        Commands::Export { entries, output } => {
            ecoscore::commands::export_entries(&entries, output.as_deref(), &config.export)
                .map(|_| ())
        }
        Commands::Catalog { category, format } => {
            ecoscore::commands::list_catalog(category.as_deref(), format, use_color)
        }
        Commands::Init { force } => {
            let dir = std::env::current_dir()?;
            ecoscore::commands::init_config(&dir, force)
        }
    }
}

// Pure function to pick where logs go: the TUI owns the terminal
fn log_target(command: &Commands) -> LogTarget<'_> {
    match command {
        Commands::Interactive {
            log_file: Some(path),
            ..
        } => LogTarget::File(path),
        Commands::Interactive { log_file: None, .. } => LogTarget::Discard,
        _ => LogTarget::Stderr,
    }
}

fn load_configuration(cli: &Cli) -> Result<EcoscoreConfig> {
    let _op = set_operation(Operation::LoadingConfig);
    match &cli.config {
        Some(path) => Ok(load_config_from_path(path)?),
        None => Ok(load_config()),
    }
}

// Pure function to decide on colored output
fn color_enabled(plain: bool, config: &EcoscoreConfig) -> bool {
    !plain && config.display.use_color && std::env::var_os("NO_COLOR").is_none()
}
