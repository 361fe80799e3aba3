use anyhow::{Context, Result, bail};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Upper bound on text sent in a single request.
pub const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Reads the text to translate from a file or a non-interactive stdin.
pub struct InputReader;

impl InputReader {
    pub fn from_file(path: &Path) -> Result<String> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to access file: {}", path.display()))?;

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            bail!(too_large(size));
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(strip_trailing_newline(text))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<String> {
        let mut buffer = Vec::new();
        // Read one byte past the limit so oversize input is detected without
        // buffering all of it.
        reader
            .take(MAX_INPUT_SIZE as u64 + 1)
            .read_to_end(&mut buffer)
            .context("Failed to read input")?;

        if buffer.len() > MAX_INPUT_SIZE {
            bail!(too_large(buffer.len()));
        }

        let text = String::from_utf8(buffer).context("Input is not valid UTF-8")?;
        Ok(strip_trailing_newline(text))
    }
}

fn too_large(size: usize) -> String {
    format!(
        "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).",
        size as f64 / 1024.0 / 1024.0
    )
}

fn strip_trailing_newline(mut text: String) -> String {
    let trimmed_len = text.trim_end_matches(['\r', '\n']).len();
    text.truncate(trimmed_len);
    text
}
