//! Command handlers

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::menu::Menu;
use tracing::debug;
use vreg_domain::VehicleRegistry;
use vreg_types::{OutputFormat, Result};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        None | Some(Commands::Menu) => {
            let config = load_config()?;
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_menu(&config, output_format)
        }

        // Reset never reads the old file, so it can repair a broken one
        Some(Commands::Config { reset: true, .. }) => cmd_config_reset(),

        Some(Commands::Config {
            show,
            set_output,
            set_separator,
            ..
        }) => cmd_config(load_config()?, show, set_output, set_separator),
    }
}

fn load_config() -> Result<Config> {
    let config = Config::load()?;
    debug!(output_format = %config.output_format, "configuration loaded");
    Ok(config)
}

fn cmd_menu(config: &Config, output_format: OutputFormat) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let registry = VehicleRegistry::with_separator(config.separator.as_str());

    let registry = Menu::new(stdin.lock(), stdout.lock(), registry, output_format).run()?;
    debug!(vehicles = registry.count(), "session finished");
    Ok(())
}

fn cmd_config_reset() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults");
    println!("\n{}", config);
    Ok(())
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_output: Option<OutputFormat>,
    set_separator: Option<String>,
) -> Result<()> {
    let mut modified = false;

    if let Some(format) = set_output {
        config.output_format = format;
        modified = true;
    }

    if let Some(separator) = set_separator {
        config.separator = separator;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
