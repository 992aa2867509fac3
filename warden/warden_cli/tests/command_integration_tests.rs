use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const CATALOG: &str = r#"
[[roles]]
id = "11111111-1111-4111-8111-000000000001"
name = "Member"
scope = "tenant"
permissions = ["tenant:scenario-view"]

[[roles]]
id = "11111111-1111-4111-8111-000000000002"
name = "Operator"
scope = "scenario"
permissions = ["scenario:device-edit", "scenario:spot-view"]

[[assignments]]
principal = "22222222-2222-4222-8222-000000000001"
tenant = "33333333-3333-4333-8333-000000000001"
tenant_role = "11111111-1111-4111-8111-000000000001"

[assignments.scenario_roles]
"44444444-4444-4444-8444-000000000001" = "11111111-1111-4111-8111-000000000002"
"#;

const PRINCIPAL: &str = "22222222-2222-4222-8222-000000000001";
const TENANT: &str = "33333333-3333-4333-8333-000000000001";
const SCENARIO: &str = "44444444-4444-4444-8444-000000000001";

fn warden() -> Command {
    Command::cargo_bin("warden").unwrap()
}

fn write_catalog(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write catalog");
    path
}

#[test]
fn test_parse_valid_permission() {
    warden()
        .args(["parse", "tenant:user-edit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scope:    tenant"))
        .stdout(predicate::str::contains("resource: user"))
        .stdout(predicate::str::contains("implies:  edit, view, none"));
}

#[test]
fn test_parse_malformed_permission() {
    warden()
        .args(["parse", "tenant:device-view"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("malformed"));

    warden()
        .args(["parse", "scenario:sensor-rule-edit"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("found 2"));
}

#[test]
fn test_list_permissions() {
    let output = warden().arg("list").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 44);
    assert!(stdout.lines().any(|l| l == "scenario:sensor_rule-edit"));

    warden()
        .args(["list", "--scope", "system"])
        .assert()
        .success()
        .stdout("system:admin-none\nsystem:admin-view\nsystem:admin-edit\nsystem:admin-all\n");
}

#[test]
fn test_list_rejects_unknown_scope() {
    warden()
        .args(["list", "--scope", "galaxy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("galaxy"));
}

#[test]
fn test_check_allowed_and_denied() {
    warden()
        .args(["check", "--granted", "scenario:device-edit", "--require", "scenario:device-view"])
        .assert()
        .success()
        .stdout("allowed\n");

    warden()
        .args(["check", "--granted", "scenario:device-edit", "--require", "scenario:device-all"])
        .assert()
        .code(1)
        .stdout("denied\n");
}

#[test]
fn test_check_modes() {
    let args = [
        "check",
        "--granted",
        "tenant:user-view",
        "--require",
        "tenant:user-view",
        "tenant:role-view",
    ];

    warden().args(args).assert().code(1).stdout("denied\n");
    warden()
        .args(args)
        .args(["--mode", "any"])
        .assert()
        .success()
        .stdout("allowed\n");
}

#[test]
fn test_check_empty_requirement() {
    warden()
        .args(["check", "--granted", "tenant:user-view"])
        .assert()
        .success()
        .stdout("allowed\n");

    warden()
        .args(["check", "--granted", "tenant:user-view", "--mode", "any"])
        .assert()
        .code(1)
        .stdout("denied\n");
}

#[test]
fn test_verbose_flag_enables_logging() {
    warden()
        .args(["-vv", "check", "--granted", "tenant:user", "--require", "tenant:user-view"])
        .assert()
        .code(1)
        .stdout("denied\n")
        .stderr(predicate::str::contains("Granted permission is malformed"))
        .stderr(predicate::str::contains("Checked requirement"));

    warden()
        .args(["check", "--granted", "tenant:user-view", "--require", "tenant:user-view"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_check_with_malformed_grant() {
    warden()
        .args(["check", "--granted", "tenant:user", "--require", "tenant:user-none"])
        .assert()
        .code(1)
        .stdout("denied\n");
}

#[test]
fn test_validate_clean_catalog() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "roles.toml", CATALOG);

    warden()
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("ok"));
}

#[test]
fn test_validate_malformed_catalog() {
    let dir = TempDir::new().unwrap();
    let broken = CATALOG.replace("scenario:spot-view", "scenario:spot");
    let path = write_catalog(&dir, "roles.toml", &broken);

    warden()
        .arg("validate")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("error: 'scenario:spot' is malformed"))
        .stdout(predicate::str::contains("failed"));

    warden()
        .arg("validate")
        .arg(&path)
        .arg("--lenient")
        .assert()
        .success();
}

#[test]
fn test_validate_warnings_do_not_fail() {
    let dir = TempDir::new().unwrap();
    let mixed = CATALOG.replace("\"tenant:scenario-view\"", "\"scenario:device-view\"");
    let path = write_catalog(&dir, "roles.toml", &mixed);

    warden()
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("warning:"));
}

#[test]
fn test_validate_missing_or_unsupported_file() {
    let dir = TempDir::new().unwrap();

    warden()
        .arg("validate")
        .arg(dir.path().join("missing.toml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to load catalog"));

    let path = write_catalog(&dir, "roles.yaml", CATALOG);
    warden()
        .arg("validate")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported configuration format"));
}

#[test]
fn test_resolve_tenant_and_scenario() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "roles.toml", CATALOG);

    warden()
        .arg("resolve")
        .arg(&path)
        .args(["--principal", PRINCIPAL, "--tenant", TENANT])
        .assert()
        .success()
        .stdout("tenant:scenario-view\n");

    warden()
        .arg("resolve")
        .arg(&path)
        .args(["--principal", PRINCIPAL, "--tenant", TENANT, "--scenario", SCENARIO])
        .assert()
        .success()
        .stdout("tenant:scenario-view\nscenario:device-edit\nscenario:spot-view\n");
}

#[test]
fn test_resolve_json() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "roles.toml", CATALOG);

    let output = warden()
        .arg("resolve")
        .arg(&path)
        .args(["--principal", PRINCIPAL, "--tenant", TENANT, "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let granted: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(granted, vec!["tenant:scenario-view"]);
}

#[test]
fn test_resolve_rejects_bad_id() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "roles.toml", CATALOG);

    warden()
        .arg("resolve")
        .arg(&path)
        .args(["--principal", "not-a-uuid", "--tenant", TENANT])
        .assert()
        .failure();
}
