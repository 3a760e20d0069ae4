use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tirescan")]
#[command(about = "Identify a vehicle's tire size from two photos", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: <config dir>/tirescan/config.toml)")]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send a tire close-up and a full vehicle photo for recognition
    Analyze {
        #[arg(long, help = "Close-up photo of the tire sidewall (jpg/jpeg/png)")]
        tire: Option<PathBuf>,

        #[arg(long, help = "Photo of the whole vehicle (jpg/jpeg/png)")]
        car: Option<PathBuf>,

        #[arg(long, help = "Write the rendering to this file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Render a saved API reply without sending anything
    Inspect {
        response: PathBuf,

        #[arg(long, help = "Write the rendering to this file instead of stdout")]
        output: Option<PathBuf>,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a config file with default settings
    Init {
        #[arg(long)]
        force: bool,
    },
}
