//! # Stitch Core
//!
//! Core types and error handling for SQL Stitcher.
//!
//! This crate provides the foundational building blocks used throughout
//! the stitcher pipeline:
//!
//! - **Types**: the source manifest entry ([`SourceFile`]) and the keyed
//!   in-memory content map ([`ContentMap`]) that patch rules mutate
//! - **Errors**: unified error handling with [`StitchError`] and
//!   [`StitchResult`]
//!

pub mod error;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{StitchError, StitchResult};
pub use types::{ContentMap, SourceFile};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
