//! End-to-end tests for the `sqlstitch` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const RULE: &str = "-- ============================================";

/// Write the thirteen fixture sources under `root`.
fn seed_fixture(root: &Path) {
    let migrations = root.join("converzia-core/migrations");
    let seed = root.join("converzia-core/seed");
    fs::create_dir_all(&migrations).unwrap();
    fs::create_dir_all(&seed).unwrap();

    let write = |name: &str, body: &str| {
        fs::write(migrations.join(name), body).unwrap();
    };

    write("001_extensions.sql", "CREATE EXTENSION IF NOT EXISTS \"uuid-ossp\";\n");
    write("002_enums.sql", "-- enums\n");
    write("003_core_tables.sql", "CREATE TABLE tenants (id uuid PRIMARY KEY);\n");
    write("004_leads_tables.sql", "CREATE TABLE leads (id uuid PRIMARY KEY);\n");
    write("005_billing_tables.sql", "CREATE TABLE invoices (id uuid PRIMARY KEY);\n");
    write("006_rag_tables.sql", "CREATE TABLE documents (id uuid PRIMARY KEY);\n");
    write("007_scoring_tables.sql", "CREATE TABLE scores (id uuid PRIMARY KEY);\n");
    write("008_functions.sql", "CREATE OR REPLACE FUNCTION update_updated_at() RETURNS trigger AS $$ BEGIN RETURN NEW; END; $$ LANGUAGE plpgsql;\n");
    write("009_rls_policies.sql", "ALTER TABLE tenants ENABLE ROW LEVEL SECURITY;\n");
    write("010_views.sql", "CREATE VIEW lead_summary AS SELECT id FROM leads;\n");
    write("011_app_settings.sql", "CREATE TABLE app_settings (id uuid PRIMARY KEY);\n");
    write(
        "012_integrations_tables.sql",
        &format!(
            "{RULE}\n-- INTEGRATION TYPE ENUM\n{RULE}\nCREATE TYPE integration_type AS ENUM ('a');\n\nCREATE TYPE integration_status AS ENUM ('b');\n\n{RULE}\n-- TENANT INTEGRATIONS\n{RULE}\nCREATE TABLE tenant_integrations (id uuid PRIMARY KEY);\n",
        ),
    );
    fs::write(seed.join("001_initial_seed.sql"), "INSERT INTO tenants DEFAULT VALUES;\n").unwrap();
}

#[test]
fn prints_output_path_and_writes_setup_script() {
    let dir = tempfile::tempdir().unwrap();
    seed_fixture(dir.path());

    Command::cargo_bin("sqlstitch")
        .unwrap()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("supabase_full_setup.sql"));

    let out = fs::read_to_string(dir.path().join("supabase/supabase_full_setup.sql")).unwrap();

    // Enums relocated into the 002 section, stripped from the 012 section
    assert!(out.contains("-- Integrations\nCREATE TYPE integration_type AS ENUM ('a');"));
    let begin_012 = out.find("-- BEGIN: 012_integrations_tables").unwrap();
    assert!(!out[begin_012..].contains("CREATE TYPE integration_type"));

    // Blank-line runs are collapsed everywhere
    assert!(!out.contains("\n\n\n"));

    // One banner pair per section
    for key in ["001_extensions", "002_enums", "seed_001_initial_seed"] {
        assert_eq!(out.matches(&format!("-- BEGIN: {key}")).count(), 1);
        assert_eq!(out.matches(&format!("-- END: {key}")).count(), 1);
    }
}

#[test]
fn missing_source_fails_without_partial_output() {
    let dir = tempfile::tempdir().unwrap();
    seed_fixture(dir.path());
    fs::remove_file(dir.path().join("converzia-core/migrations/005_billing_tables.sql")).unwrap();

    Command::cargo_bin("sqlstitch")
        .unwrap()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("005_billing_tables.sql"));

    assert!(!dir.path().join("supabase/supabase_full_setup.sql").exists());
}

#[test]
fn missing_enum_pattern_fails_loudly() {
    let dir = tempfile::tempdir().unwrap();
    seed_fixture(dir.path());
    fs::write(
        dir.path().join("converzia-core/migrations/012_integrations_tables.sql"),
        "CREATE TABLE tenant_integrations (id uuid PRIMARY KEY);\n",
    )
    .unwrap();

    Command::cargo_bin("sqlstitch")
        .unwrap()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Could not find integration enums in converzia-core/migrations/012_integrations_tables.sql",
        ));

    assert!(!dir.path().join("supabase/supabase_full_setup.sql").exists());
}
