//! # Output Assembly
//!
//! Concatenates the patched contents in manifest order into the final setup
//! script. Every section is wrapped in a BEGIN/END banner pair so the origin
//! of each statement stays visible in the single-file output, and runs of
//! blank lines are collapsed at the end so the joins never leave gaps.

use stitch_core::{ContentMap, SourceFile, StitchResult};

// ============================================================================
// Banner constants
// ============================================================================

/// Decorative marker opening each section
const BEGIN_RULE: &str = "-- >>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>";

/// Decorative marker closing each section
const END_RULE: &str = "-- <<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<";

/// Header comment block describing the generated file's origin and the
/// patches applied to it.
const HEADER: [&str; 5] = [
    "-- ============================================",
    "-- Converzia: Supabase Full Setup (single file)",
    "-- Generated from converzia-core/migrations + seed",
    "-- Fixes: integration enums consolidated; tenant_integrations de-duplicated",
    "-- ============================================\n",
];

// ============================================================================
// Public API
// ============================================================================

/// Assemble the patched contents into the final setup-script text.
///
/// For each manifest entry, in order: a begin banner pair
/// (`BEGIN: <key>`), the entry's content trimmed of trailing whitespace plus
/// one newline, then an end banner pair (`END: <key>`). The whole thing is
/// prefixed with the fixed header block and blank-line runs are collapsed so
/// the output never contains three consecutive newlines.
///
/// # Errors
///
/// Returns [`stitch_core::StitchError::ContentMissing`] if any manifest key
/// was never loaded.
pub fn assemble(content: &ContentMap, files: &[SourceFile]) -> StitchResult<String> {
    let mut out: Vec<String> = Vec::with_capacity(5 + files.len() * 7);

    for line in HEADER {
        out.push(line.to_string());
    }

    for file in files {
        let body = content.get(file.key)?;

        out.push(format!("\n{BEGIN_RULE}"));
        out.push(format!("-- BEGIN: {}", file.key));
        out.push(format!("{BEGIN_RULE}\n"));
        out.push(format!("{}\n", body.trim_end()));
        out.push(END_RULE.to_string());
        out.push(format!("-- END: {}", file.key));
        out.push(format!("{END_RULE}\n"));
    }

    let text = collapse_blank_lines(&out.join("\n"));
    tracing::info!(sections = files.len(), bytes = text.len(), "output assembled");
    Ok(text)
}

/// Collapse every run of three-or-more consecutive newlines down to two,
/// repeating until no run remains.
pub fn collapse_blank_lines(text: &str) -> String {
    let mut out = text.to_string();
    while out.contains("\n\n\n") {
        out = out.replace("\n\n\n", "\n\n");
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
