//! # Patch Rules
//!
//! The fixed, ordered textual patches applied to the loaded contents before
//! assembly. Four rule shapes cover everything the setup script needs:
//!
//! - [`PatchRule::ExtractAppend`] — relocate a region from one entry into
//!   another, guarded by a marker so re-running cannot duplicate it. A miss
//!   on the extraction pattern is fatal.
//! - [`PatchRule::StripLines`] — delete every line exactly matching a fixed
//!   directive. Zero matches is fine.
//! - [`PatchRule::ReplaceSpan`] — collapse a marker-to-marker span down to
//!   its closing marker. A miss is a tolerated no-op (logged as a warning)
//!   so wording drift in the underlying SQL does not break the build.
//! - [`PatchRule::AppendIfMissing`] — append a fixed block unless a marker
//!   is already present.
//!
//! [`default_patches`] returns the production sequence. Order matters: the
//! enum consolidation (rule 1) reads the region out of
//! `012_integrations_tables` that the final rule later strips from it.

use regex::{NoExpand, Regex};
use stitch_core::{ContentMap, StitchError, StitchResult};

// ============================================================================
// PatchRule
// ============================================================================

/// One ordered textual transformation of the content map.
#[derive(Debug, Clone)]
pub enum PatchRule {
    /// Extract a region matching `pattern` from `source` and append it,
    /// trimmed and under a `header` comment, to `target`. Skipped when
    /// `target` already contains `guard`; fails with
    /// [`StitchError::PatternNotFound`] when the pattern misses.
    ExtractAppend {
        /// Entry the extracted region is appended to
        target: &'static str,
        /// Entry the region is extracted from
        source: &'static str,
        /// Relative path of the source file, named in the failure message
        source_path: &'static str,
        /// Marker whose presence in `target` makes this rule a no-op
        guard: &'static str,
        /// Non-greedy pattern locating the region in `source`
        pattern: &'static str,
        /// Comment line placed above the appended region
        header: &'static str,
        /// Human description of the region, used in the failure message
        what: &'static str,
    },

    /// Remove every line of `key` exactly equal to `line`.
    StripLines {
        key: &'static str,
        line: &'static str,
    },

    /// Replace the span matching `pattern` in `key` with `replacement`.
    /// When the pattern misses, the entry is left unchanged and a warning
    /// is logged.
    ReplaceSpan {
        key: &'static str,
        pattern: &'static str,
        replacement: &'static str,
        /// Short description used in log output
        label: &'static str,
    },

    /// Append `block` to `key` unless `marker` is already present.
    AppendIfMissing {
        key: &'static str,
        marker: &'static str,
        block: &'static str,
    },
}

impl PatchRule {
    /// Apply this rule to the content map, mutating the targeted entries
    /// in place.
    pub fn apply(&self, content: &mut ContentMap) -> StitchResult<()> {
        match self {
            PatchRule::ExtractAppend {
                target,
                source,
                source_path,
                guard,
                pattern,
                header,
                what,
            } => {
                if content.get(target)?.contains(guard) {
                    tracing::debug!(key = target, "extraction already applied, skipping");
                    return Ok(());
                }

                let re = Regex::new(pattern)?;
                let extracted = re
                    .find(content.get(source)?)
                    .ok_or_else(|| StitchError::pattern_not_found(*what, *source_path))?
                    .as_str()
                    .trim()
                    .to_string();

                let patched = format!(
                    "{}\n\n{}\n{}\n",
                    content.get(target)?.trim_end(),
                    header,
                    extracted,
                );
                content.set(target, patched)?;
                tracing::info!(from = source, to = target, "region relocated");
                Ok(())
            }

            PatchRule::StripLines { key, line } => {
                let re = Regex::new(&format!("(?m)^{}\n", regex::escape(line)))?;
                let stripped = re.replace_all(content.get(key)?, "").into_owned();
                content.set(key, stripped)
            }

            PatchRule::ReplaceSpan {
                key,
                pattern,
                replacement,
                label,
            } => {
                let re = Regex::new(pattern)?;
                let text = content.get(key)?;
                if !re.is_match(text) {
                    tracing::warn!(key, label, "span markers not found, entry left unchanged");
                    return Ok(());
                }
                let replaced = re.replace_all(text, NoExpand(replacement)).into_owned();
                content.set(key, replaced)
            }

            PatchRule::AppendIfMissing { key, marker, block } => {
                if content.get(key)?.contains(marker) {
                    tracing::debug!(key, "block already present, skipping");
                    return Ok(());
                }
                let patched = format!("{}\n\n{}", content.get(key)?.trim_end(), block);
                content.set(key, patched)
            }
        }
    }
}

/// Apply a rule sequence in order, stopping at the first fatal failure.
pub fn apply_patches(content: &mut ContentMap, rules: &[PatchRule]) -> StitchResult<()> {
    for rule in rules {
        rule.apply(content)?;
    }
    tracing::info!(rules = rules.len(), "patch sequence applied");
    Ok(())
}

// ============================================================================
// Production rule sequence
// ============================================================================

const SECTION_RULE: &str = "-- ============================================";

/// The fixed patch sequence for the Converzia setup script.
///
/// 1. Consolidate the integration enums into `002_enums` (read from
///    `012_integrations_tables` while the block is still there).
/// 2. Drop the duplicate RLS enable for `tenant_integrations` from
///    `009_rls_policies` (the table does not exist yet at that point, and
///    `012` enables RLS itself).
/// 3. Remove the duplicate `tenant_integrations` table block and its policy
///    comment run from `011_app_settings` (two passes).
/// 4. Add the `updated_at` triggers for the tables created after
///    `008_functions`, unless already present.
/// 5. Strip the now-relocated enum block out of `012_integrations_tables`.
pub fn default_patches() -> Vec<PatchRule> {
    vec![
        PatchRule::ExtractAppend {
            target: "002_enums",
            source: "012_integrations_tables",
            source_path: "converzia-core/migrations/012_integrations_tables.sql",
            guard: "CREATE TYPE integration_type",
            pattern: r"CREATE TYPE integration_type[\s\S]*?;\n\nCREATE TYPE integration_status[\s\S]*?;",
            header: "-- Integrations",
            what: "integration enums",
        },
        PatchRule::StripLines {
            key: "009_rls_policies",
            line: "ALTER TABLE tenant_integrations ENABLE ROW LEVEL SECURITY;",
        },
        PatchRule::ReplaceSpan {
            key: "011_app_settings",
            pattern: r"-- ============================================\n-- TENANT INTEGRATIONS[\s\S]*?-- ============================================\n-- WHATSAPP MESSAGE TEMPLATES",
            replacement: "-- ============================================\n-- WHATSAPP MESSAGE TEMPLATES",
            label: "duplicate tenant_integrations table block",
        },
        PatchRule::ReplaceSpan {
            key: "011_app_settings",
            pattern: r"\n-- Tenant Integrations:[\s\S]*?\n-- Activity Logs:",
            replacement: "\n-- Activity Logs:",
            label: "duplicate tenant_integrations policy comments",
        },
        PatchRule::AppendIfMissing {
            key: "011_app_settings",
            marker: "trg_app_settings_updated_at",
            block: concat!(
                "-- ============================================\n",
                "-- TRIGGERS: updated_at maintenance\n",
                "-- ============================================\n",
                "CREATE TRIGGER trg_app_settings_updated_at BEFORE UPDATE ON app_settings FOR EACH ROW EXECUTE FUNCTION update_updated_at();\n",
                "CREATE TRIGGER trg_whatsapp_templates_updated_at BEFORE UPDATE ON whatsapp_templates FOR EACH ROW EXECUTE FUNCTION update_updated_at();\n",
            ),
        },
        PatchRule::ReplaceSpan {
            key: "012_integrations_tables",
            pattern: r"-- ============================================\n-- INTEGRATION TYPE ENUM[\s\S]*?-- ============================================\n-- TENANT INTEGRATIONS",
            replacement: "-- ============================================\n-- TENANT INTEGRATIONS",
            label: "relocated integration enum block",
        },
    ]
}

// ============================================================================
// Tests
// ============================================================================
