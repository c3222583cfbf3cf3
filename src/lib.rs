//! `kubeadm_upgrade` - print the configuration used for a cluster upgrade.
//!
//! This crate provides the `kubeadm-upgrade` CLI on top of the
//! [`kubeadm_config`] library.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`logging`] - tracing subscriber setup
//!
//! The configuration model, canonical YAML renderer, and printer live in the
//! `kubeadm-config` workspace crate and are re-exported here.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod logging;

pub use kubeadm_config::{ConfigError, MasterConfiguration, Result, print_configuration};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
