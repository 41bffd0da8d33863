use std::{path::PathBuf, process::Command};

fn empty_home(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("playurmood-cli-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_create_reports_invalid_size_before_auth() {
    let home = empty_home("invalid-size");

    // No token cache exists under this home
    let output = Command::new(env!("CARGO_BIN_EXE_playurmood"))
        .args(["create", "--mood", "happy", "--size", "abc"])
        .env("HOME", &home)
        .env("XDG_DATA_HOME", home.join("data"))
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stdout: {}", stdout);
    assert!(stdout.contains("Invalid playlist size: \"abc\""), "stdout: {}", stdout);
    assert!(!stdout.contains("playurmood auth"), "stdout: {}", stdout);

    let _ = std::fs::remove_dir_all(home);
}

#[test]
fn test_create_without_token_asks_for_auth() {
    let home = empty_home("no-token");

    let output = Command::new(env!("CARGO_BIN_EXE_playurmood"))
        .args(["create", "--mood", "happy", "--size", "5"])
        .env("HOME", &home)
        .env("XDG_DATA_HOME", home.join("data"))
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!output.status.success());
    assert!(stdout.contains("playurmood auth"), "stdout: {}", stdout);

    let _ = std::fs::remove_dir_all(home);
}
