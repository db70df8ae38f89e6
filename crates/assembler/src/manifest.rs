//! # Source Manifest
//!
//! The fixed, ordered list of SQL source files the setup script is built
//! from: twelve numbered migrations plus one seed file. The list order is
//! the assembly order, and each entry's key is both its content-map key and
//! its section label in the output banners.

use stitch_core::SourceFile;

// ============================================================================
// Manifest
// ============================================================================

/// Ordered manifest of every source file, migrations first, seed last.
pub const SOURCE_FILES: [SourceFile; 13] = [
    SourceFile::new("converzia-core/migrations/001_extensions.sql", "001_extensions"),
    SourceFile::new("converzia-core/migrations/002_enums.sql", "002_enums"),
    SourceFile::new("converzia-core/migrations/003_core_tables.sql", "003_core_tables"),
    SourceFile::new("converzia-core/migrations/004_leads_tables.sql", "004_leads_tables"),
    SourceFile::new("converzia-core/migrations/005_billing_tables.sql", "005_billing_tables"),
    SourceFile::new("converzia-core/migrations/006_rag_tables.sql", "006_rag_tables"),
    SourceFile::new("converzia-core/migrations/007_scoring_tables.sql", "007_scoring_tables"),
    SourceFile::new("converzia-core/migrations/008_functions.sql", "008_functions"),
    SourceFile::new("converzia-core/migrations/009_rls_policies.sql", "009_rls_policies"),
    SourceFile::new("converzia-core/migrations/010_views.sql", "010_views"),
    SourceFile::new("converzia-core/migrations/011_app_settings.sql", "011_app_settings"),
    SourceFile::new("converzia-core/migrations/012_integrations_tables.sql", "012_integrations_tables"),
    SourceFile::new("converzia-core/seed/001_initial_seed.sql", "seed_001_initial_seed"),
];

/// Where the assembled setup script is written, relative to the root directory.
pub const OUTPUT_REL_PATH: &str = "supabase/supabase_full_setup.sql";

// ============================================================================
// Tests
// ============================================================================
