//! # Stitch Assembler
//!
//! The load-patch-assemble-write pipeline for SQL Stitcher.
//!
//! This crate turns the fixed set of migration and seed SQL files into one
//! consolidated setup script:
//!
//! ```text
//! AssemblerConfig (root dir, output path)
//!         │
//!         ▼
//!   loader::load_sources()        → ContentMap
//!         │
//!   patches::apply_patches()      → ContentMap (patched in place)
//!         │
//!   assemble::assemble()          → String
//!         │
//!         ▼
//!   AssembledSetup { text } ── write_to_disk() ──► supabase_full_setup.sql
//! ```
//!
//! The whole run is synchronous and single-shot: any fatal condition (missing
//! input, mandatory pattern miss) propagates before anything is written.

// ============================================================================
// Modules
// ============================================================================

pub mod assemble;
pub mod loader;
pub mod manifest;
pub mod patches;

// ============================================================================
// Re-exports
// ============================================================================

pub use assemble::{assemble, collapse_blank_lines};
pub use loader::load_sources;
pub use manifest::{OUTPUT_REL_PATH, SOURCE_FILES};
pub use patches::{PatchRule, apply_patches, default_patches};

use std::path::{Path, PathBuf};

use stitch_core::{StitchError, StitchResult};

// ============================================================================
// AssemblerConfig
// ============================================================================

/// Configuration for the setup assembler
#[derive(Debug, Clone)]
pub struct AssemblerConfig {
    /// Root directory the manifest's relative paths are resolved against
    pub root_dir: PathBuf,

    /// Where the assembled script is written, relative to the root
    pub output_rel_path: PathBuf,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            output_rel_path: PathBuf::from(OUTPUT_REL_PATH),
        }
    }
}

impl AssemblerConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root directory
    pub fn with_root_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.root_dir = dir.into();
        self
    }

    /// Set the output path (relative to the root directory)
    pub fn with_output_rel_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_rel_path = path.into();
        self
    }
}

// ============================================================================
// AssembledSetup
// ============================================================================

/// The assembled setup script, ready to be written to disk
#[derive(Debug, Clone)]
pub struct AssembledSetup {
    /// Full text of the consolidated SQL script
    pub text: String,

    /// Output path relative to the root directory
    pub rel_path: PathBuf,
}

impl AssembledSetup {
    /// Size of the assembled text in bytes
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }

    /// Write the script under `base_dir`, creating parent directories and
    /// overwriting any existing file unconditionally.
    ///
    /// Returns the absolute path of the written file.
    pub fn write_to_disk(&self, base_dir: impl AsRef<Path>) -> StitchResult<PathBuf> {
        let full_path = base_dir.as_ref().join(&self.rel_path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StitchError::DirectoryCreate {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }

        std::fs::write(&full_path, &self.text)
            .map_err(|e| StitchError::file_write(&full_path, e.to_string()))?;

        let absolute = full_path
            .canonicalize()
            .map_err(|e| StitchError::with_context("Resolving output path", e.to_string()))?;
        tracing::info!(path = %absolute.display(), bytes = self.byte_len(), "setup script written");
        Ok(absolute)
    }
}

// ============================================================================
// SetupAssembler
// ============================================================================

/// Top-level orchestrator running the full load-patch-assemble pipeline.
///
/// Stateless aside from its configuration; call [`run`](SetupAssembler::run)
/// to produce an [`AssembledSetup`] in memory, or
/// [`run_and_write`](SetupAssembler::run_and_write) to also put it on disk.
#[derive(Debug, Clone, Default)]
pub struct SetupAssembler {
    /// Configuration controlling input root and output location
    config: AssemblerConfig,
}

impl SetupAssembler {
    /// Create a new assembler with the given configuration
    pub fn new(config: AssemblerConfig) -> Self {
        Self { config }
    }

    /// Create an assembler with default configuration
    pub fn with_defaults() -> Self {
        Self::new(AssemblerConfig::default())
    }

    /// Get the current configuration
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Run the full pipeline: load every manifest source, apply the fixed
    /// patch sequence, assemble the banner-delimited output.
    ///
    /// # Errors
    ///
    /// Propagates the loader's missing-file errors and the patch engine's
    /// mandatory-pattern failures. Nothing is written to disk by this method.
    pub fn run(&self) -> StitchResult<AssembledSetup> {
        let mut content = loader::load_sources(&self.config.root_dir, &SOURCE_FILES)?;
        patches::apply_patches(&mut content, &patches::default_patches())?;
        let text = assemble::assemble(&content, &SOURCE_FILES)?;

        Ok(AssembledSetup {
            text,
            rel_path: self.config.output_rel_path.clone(),
        })
    }

    /// Run the pipeline and write the result under the configured root.
    ///
    /// Returns the absolute path of the written setup script.
    pub fn run_and_write(&self) -> StitchResult<PathBuf> {
        let setup = self.run()?;
        setup.write_to_disk(&self.config.root_dir)
    }
}

// ============================================================================
// Tests
// ============================================================================
