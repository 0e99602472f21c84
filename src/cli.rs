//! Command-line interface for termlayer.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// termlayer - inspect layered terminal settings
#[derive(Parser, Debug)]
#[command(name = "termlayer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// User settings file (default: the platform settings path)
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Replace the built-in defaults with this file
    #[arg(long, value_name = "PATH")]
    pub defaults: Option<PathBuf>,

    /// Set log level (overrides RUST_LOG)
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Print the effective global settings as JSON
    Show,
    /// List key bindings
    Keys,
    /// List commands, including nested ones
    Commands,
    /// List color schemes
    Schemes,
    /// List problems found while loading
    Warnings,
}
