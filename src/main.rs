use clap::Parser;
use rosterdesk::cli::Cli;
use rosterdesk::config::{Config, ConfigError};
use rosterdesk::logging::init_tracing;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    tracing::info!(base_url = %config.api.base_url, "Starting rosterdesk");

    if let Err(err) = rosterdesk::ui::run(&config) {
        tracing::error!(error = %err, "UI exited with error");
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

/// Read the config file, apply command-line overrides, then validate.
fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::read_from(&path)?;

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }

    config.validate()?;
    Ok(config)
}
