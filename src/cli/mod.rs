//! Command-line interface for `kubeadm-upgrade`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::logging;

/// `kubeadm-upgrade` - show the configuration an upgrade will use.
#[derive(Parser, Debug)]
#[command(name = "kubeadm-upgrade")]
#[command(
    author,
    version,
    about = "Print the kubeadm configuration used for a cluster upgrade",
    long_about = None
)]
pub struct Cli {
    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs as JSON lines to this file instead of stderr
    #[arg(long, global = true, env = "KUBEADM_UPGRADE_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the configuration used for the upgrade
    #[command(alias = "print-config")]
    Config(ConfigArgs),

    /// Show version information
    Version(VersionArgs),
}

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// MasterConfiguration YAML file, or `-` for stdin
    #[arg(long, env = "KUBEADM_UPGRADE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct VersionArgs {
    /// Print only the version number
    #[arg(long)]
    pub short: bool,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if logging cannot be set up or the command fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())
        .context("Failed to initialize logging")?;

    match cli.command {
        Some(Commands::Config(args)) => commands::config::execute(&args),
        Some(Commands::Version(args)) => {
            commands::version::execute(&args);
            Ok(())
        }
        None => {
            println!("kubeadm-upgrade - Use --help for usage.");
            Ok(())
        }
    }
}
