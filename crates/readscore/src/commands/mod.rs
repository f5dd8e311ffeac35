//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod info;
pub mod metrics;
pub mod score;
pub mod stats;
pub mod syllables;

/// Label used in messages when text comes from standard input.
pub const STDIN_LABEL: &str = "<stdin>";

/// Default decimal places for text output.
pub const DEFAULT_PRECISION: usize = 2;

/// Read the text to analyze from `path`, or from standard input when `path`
/// is absent or `-`, and validate its size against the configured limit.
///
/// Returns the content and a label for messages.
pub fn read_input(
    path: Option<&Utf8Path>,
    max_bytes: Option<usize>,
) -> anyhow::Result<(String, String)> {
    match path {
        Some(path) if path.as_str() != "-" => {
            Ok((read_input_file(path, max_bytes)?, path.to_string()))
        }
        _ => Ok((
            read_limited(std::io::stdin().lock(), STDIN_LABEL, max_bytes)?,
            STDIN_LABEL.to_string(),
        )),
    }
}

/// Read a file and validate its size against the configured limit.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let bytes =
        std::fs::read(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    Ok(decode_lossy(bytes))
}

/// Read a stream, failing once it exceeds `max_bytes`.
fn read_limited<R: Read>(reader: R, label: &str, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    match max_bytes {
        Some(max) => {
            let limit = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            reader
                .take(limit)
                .read_to_end(&mut bytes)
                .with_context(|| format!("failed to read {label}"))?;
            if bytes.len() > max {
                anyhow::bail!("input too large: {label} exceeds {max} bytes");
            }
        }
        None => {
            let mut reader = reader;
            reader
                .read_to_end(&mut bytes)
                .with_context(|| format!("failed to read {label}"))?;
        }
    }
    Ok(decode_lossy(bytes))
}

fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(
                valid_up_to = err.utf8_error().valid_up_to(),
                "input is not valid UTF-8, replacing invalid bytes"
            );
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}
