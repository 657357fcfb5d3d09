mod common;

use std::process::Command;

use common::{fixture, temp_dir};

#[test]
fn check_config_accepts_fixture() {
    let output = Command::new(env!("CARGO_BIN_EXE_tokengate-auth"))
        .arg("--log-level")
        .arg("error")
        .arg("check-config")
        .arg("--config")
        .arg(fixture("service.yaml"))
        .output()
        .expect("Failed to start tokengate-auth binary");

    assert!(
        output.status.success(),
        "Process exited with non-zero status: {}\nStderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["strategy"], "JWT");
    assert_eq!(summary["second_factor"], true);
    assert_eq!(summary["token_gate_rules"], 2);
}

#[test]
fn check_config_rejects_invalid_file() {
    let dir = temp_dir();
    let config_path = dir.join("broken.yaml");
    let content = std::fs::read_to_string(fixture("service.yaml"))
        .unwrap()
        .replace("strategy: JWT", "strategy: MEMCACHED");
    std::fs::write(&config_path, content).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_tokengate-auth"))
        .arg("check-config")
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("Failed to start tokengate-auth binary");

    assert!(!output.status.success());
    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn resolve_roles_prints_granted_roles() {
    let output = Command::new(env!("CARGO_BIN_EXE_tokengate-auth"))
        .arg("--log-level")
        .arg("error")
        .arg("resolve-roles")
        .arg("--config")
        .arg(fixture("service.yaml"))
        .arg("--wallet")
        .arg(fixture("wallet.json"))
        .arg("--plan")
        .arg("enterprise")
        .output()
        .expect("Failed to start tokengate-auth binary");

    assert!(output.status.success());
    let roles: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(roles, vec!["admin".to_string()]);
}
