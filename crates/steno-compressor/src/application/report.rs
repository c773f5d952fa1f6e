//! Compression report use case.

use steno_core::{CompressionReport, Keymap, KeylistError};
use tracing::info;

use crate::infrastructure::storage::config::OutputFormat;

/// Builds one report per keymap, in input order.
///
/// # Errors
///
/// Stops at the first keymap whose encoding fails or does not round trip.
pub fn build_reports<'a, I>(keymaps: I) -> Result<Vec<CompressionReport>, KeylistError>
where
    I: IntoIterator<Item = (&'a str, &'a Keymap)>,
{
    keymaps
        .into_iter()
        .map(|(name, keymap)| {
            let report = CompressionReport::for_keymap(name, keymap)?;
            info!(
                keymap = name,
                entries = report.entries,
                keylist_bytes = report.keylist_bytes,
                plain_bytes = report.plain_bytes,
                "compressed keymap"
            );
            Ok(report)
        })
        .collect()
}

/// Renders reports for the terminal.
///
/// # Errors
///
/// Returns a `serde_json` error only for [`OutputFormat::Json`].
pub fn render_reports(
    reports: &[CompressionReport],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(reports),
    }
}
