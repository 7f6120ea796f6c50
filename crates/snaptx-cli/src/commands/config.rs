//! Config command - inspect and initialize configuration.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use snaptx_core::SnapTxConfig;

use super::load_config;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the active configuration as JSON
    Show,

    /// Write a default configuration file
    Init {
        /// Destination path
        #[arg(short, long, default_value = "snaptx.json")]
        output: PathBuf,
    },
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    match args.action {
        ConfigAction::Show => {
            let config = load_config(config_path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Init { output } => {
            let config = SnapTxConfig::default();
            config.save(&output)?;
            println!(
                "{} Wrote default configuration to {}",
                style("✓").green(),
                output.display()
            );
        }
    }

    Ok(())
}
