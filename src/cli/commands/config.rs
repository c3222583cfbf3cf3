//! Config command implementation.

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use kubeadm_config::{MasterConfiguration, from_yaml_str, load_file, print_configuration};

use crate::cli::ConfigArgs;

/// Execute the config command.
///
/// Without `--config` there is no configuration, and nothing is printed.
///
/// # Errors
///
/// Returns an error if the configuration cannot be read or printed.
pub fn execute(args: &ConfigArgs) -> Result<()> {
    let cfg = args.config.as_deref().map(read_config).transpose()?;
    if cfg.is_none() {
        tracing::info!("No configuration given, nothing to print");
    }

    let mut out = io::stdout().lock();
    print_configuration(cfg.as_ref(), &mut out).context("Failed to print configuration")?;
    out.flush()?;
    Ok(())
}

fn read_config(path: &Path) -> Result<MasterConfiguration> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read configuration from stdin")?;
        return from_yaml_str(&text).context("Invalid configuration on stdin");
    }
    load_file(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}
