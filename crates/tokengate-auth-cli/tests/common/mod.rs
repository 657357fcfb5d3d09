//! Shared fixtures for CLI integration tests

#![allow(dead_code)]

use std::path::PathBuf;

/// Path to a file under the crate's `fixtures/` directory
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Fresh, uniquely named scratch directory
pub fn temp_dir() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("tokengate-auth-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&path).unwrap();
    path
}
