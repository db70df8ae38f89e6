//! # Source Loader
//!
//! Reads every manifest entry from disk into a [`ContentMap`]. Each file is
//! read exactly once, as UTF-8 text; contents are normalized (line endings to
//! `\n`, trailing whitespace stripped, exactly one trailing newline) before
//! being stored. A missing or unreadable file is a hard error — the setup
//! script would be incomplete without it, so there is no silent skip.

use std::fs;
use std::path::Path;

use stitch_core::{ContentMap, SourceFile, StitchError, StitchResult};

// ============================================================================
// Public API
// ============================================================================

/// Load every source file under `root` into a fresh [`ContentMap`].
///
/// Iteration follows the manifest order, though the returned map itself is
/// unordered — assembly order is re-derived from the manifest later.
///
/// # Errors
///
/// Returns [`StitchError::FileRead`] naming the offending path if any entry
/// cannot be read.
pub fn load_sources(root: &Path, files: &[SourceFile]) -> StitchResult<ContentMap> {
    let mut content = ContentMap::new();

    for file in files {
        let path = root.join(file.rel_path);
        let raw = fs::read_to_string(&path)
            .map_err(|e| StitchError::file_read(&path, e.to_string()))?;

        content.insert(file.key, normalize(&raw));
        tracing::debug!(key = file.key, path = %path.display(), "source loaded");
    }

    tracing::info!(files = content.len(), "all sources loaded");
    Ok(content)
}

/// Normalize raw file text: `\r\n` and bare `\r` become `\n`, trailing
/// whitespace is stripped, and the content ends with exactly one newline.
pub fn normalize(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");
    format!("{}\n", unified.trim_end())
}

// ============================================================================
// Tests
// ============================================================================
