//! CLI integration tests for rolecast.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the rolecast binary command, isolated from any user configuration.
fn rolecast(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rolecast").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("ROLECAST_CONFIG");
    cmd
}

fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

// ============================================================================
// rolecast demo
// ============================================================================

#[test]
fn test_demo_prints_ten_effects() {
    let tmp = temp_dir();
    let output = rolecast(&tmp).arg("demo").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "Filled up with Diesel");
    assert_eq!(lines[1], "Charged with Electricity");
}

// ============================================================================
// rolecast run
// ============================================================================

#[test]
fn test_run_dual_product() {
    let tmp = temp_dir();
    rolecast(&tmp)
        .args(["run", "hybrid", "diesel", "electric"])
        .assert()
        .success()
        .stdout(predicate::str::contains("diesel (1): Filled up with Diesel"))
        .stdout(predicate::str::contains("electric (4): Charged with Electricity"))
        .stdout(predicate::str::contains("1 fill(s), 1 charge(s)"));
}

#[test]
fn test_run_unsupported_role_fails() {
    let tmp = temp_dir();
    rolecast(&tmp)
        .args(["run", "3", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no extension with id 1 found"));
}

#[test]
fn test_run_unknown_product_fails() {
    let tmp = temp_dir();
    rolecast(&tmp)
        .args(["run", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no factory registered for product id 99"));
}

#[test]
fn test_run_rejects_bad_role_name() {
    let tmp = temp_dir();
    rolecast(&tmp)
        .args(["run", "1", "petrol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid role id 'petrol'"));
}

// ============================================================================
// rolecast products / roles
// ============================================================================

#[test]
fn test_products_lists_installed_factories() {
    let tmp = temp_dir();
    rolecast(&tmp)
        .arg("products")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 - hybrid"))
        .stdout(predicate::str::contains("root (0), hybridic (3)"));
}

#[test]
fn test_products_json() {
    let tmp = temp_dir();
    rolecast(&tmp)
        .args(["products", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"hybridic\""));
}

#[test]
fn test_roles_lists_defined_ids() {
    let tmp = temp_dir();
    rolecast(&tmp)
        .arg("roles")
        .assert()
        .success()
        .stdout(predicate::str::contains("electric"))
        .stdout(predicate::str::contains("root"));
}

// ============================================================================
// configuration
// ============================================================================

#[test]
fn test_project_config_adds_binding() {
    let tmp = temp_dir();
    fs::write(
        tmp.path().join("rolecast.toml"),
        "[[install.bindings]]\nid = 42\nproduct = \"hybridic\"\n",
    )
    .unwrap();

    rolecast(&tmp)
        .args(["run", "42", "hybridic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hybridic (3): Charged with Electricity"));
}

#[test]
fn test_config_without_defaults() {
    let tmp = temp_dir();
    let path = tmp.path().join("custom.toml");
    fs::write(&path, "[install]\ndefaults = false\n").unwrap();

    rolecast(&tmp)
        .arg("products")
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No products registered."));
}

#[test]
fn test_malformed_project_config_is_reported() {
    let tmp = temp_dir();
    fs::write(
        tmp.path().join("rolecast.toml"),
        "[[install.bindings]]\nid = 1\nproduct = \"steam\"\n",
    )
    .unwrap();

    rolecast(&tmp)
        .args(["-v", "products"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: Failed to load config from"))
        .stderr(predicate::str::contains("rolecast.toml"))
        .stdout(predicate::str::contains("2 - hybrid"));
}

#[test]
fn test_project_config_overrides_global_defaults() {
    let tmp = temp_dir();
    fs::create_dir(tmp.path().join(".rolecast")).unwrap();
    fs::write(
        tmp.path().join(".rolecast").join("config.toml"),
        "[install]\ndefaults = false\n",
    )
    .unwrap();
    fs::write(tmp.path().join("rolecast.toml"), "[install]\ndefaults = true\n").unwrap();

    rolecast(&tmp)
        .arg("products")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 - diesel"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let tmp = temp_dir();
    rolecast(&tmp)
        .args(["demo", "--config", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn test_completions() {
    let tmp = temp_dir();
    rolecast(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rolecast"));
}
