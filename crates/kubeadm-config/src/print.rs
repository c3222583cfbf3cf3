//! Labeled configuration dump shown before an upgrade.

use std::io::Write;

use crate::error::Result;
use crate::model::MasterConfiguration;
use crate::yaml;

/// First line of every printed configuration.
pub const BANNER: &str = "[upgrade/config] Configuration used:\n";

/// Render the banner and the tab-indented YAML body for `cfg`.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized.
pub fn render_configuration(cfg: &MasterConfiguration) -> Result<String> {
    tracing::debug!(
        kubernetes_version = %cfg.kubernetes_version,
        "Rendering configuration"
    );
    let body = yaml::to_string(&cfg.versioned())?;

    let mut text = String::with_capacity(BANNER.len() + body.len() + body.lines().count());
    text.push_str(BANNER);
    for line in body.lines() {
        text.push('\t');
        text.push_str(line);
        text.push('\n');
    }
    Ok(text)
}

/// Print `cfg` to `out`. Prints nothing at all when there is no configuration.
///
/// The whole text is rendered before anything is written, so a serialization
/// failure leaves `out` untouched.
///
/// # Errors
///
/// Returns `Yaml`/`UnsupportedValue` if the configuration cannot be
/// serialized, or `Io` if writing to `out` fails.
pub fn print_configuration<W: Write + ?Sized>(
    cfg: Option<&MasterConfiguration>,
    out: &mut W,
) -> Result<()> {
    let Some(cfg) = cfg else {
        return Ok(());
    };
    let text = render_configuration(cfg)?;
    out.write_all(text.as_bytes())?;
    Ok(())
}
