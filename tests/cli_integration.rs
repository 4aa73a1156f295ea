//! CLI integration tests
//!
//! These run the built binary and check exit codes, the written settings
//! document, and the diagnostics printed on stderr.

mod support;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use httpmock::Method::GET;
use httpmock::MockServer;
use support::closed_port_url;
use tempfile::TempDir;

fn mirrorshim(args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_mirrorshim"));
    for key in [
        "MIRRORSHIM_MIRRORS",
        "MIRRORSHIM_ALLOW_FALLBACK",
        "MIRRORSHIM_CONTEXT_DIR",
        "MIRRORSHIM_BUILD_OPTIONS",
        "MIRRORSHIM_SETTINGS_PATH",
        "MIRRORSHIM_PROBE_TIMEOUT",
        "MIRRORSHIM_LOG_LEVEL",
        "MIRRORSHIM_LOG_JSON",
        "RUST_LOG",
    ] {
        command.env_remove(key);
    }
    command
        .args(args)
        .output()
        .expect("Failed to execute mirrorshim")
}

/// Starts a server answering GET on each path with the given status
fn mirror_server(routes: &[(&str, u16)]) -> MockServer {
    let server = MockServer::start();
    for (path, code) in routes {
        server.mock(|when, then| {
            when.method(GET).path(*path);
            then.status(*code);
        });
    }
    server
}

fn settings_path(dir: &TempDir) -> PathBuf {
    dir.path().join(".m2/settings.xml")
}

fn mirror_urls(path: &Path) -> Vec<String> {
    let xml = fs::read_to_string(path).expect("Settings document missing");
    let doc = roxmltree::Document::parse(&xml).expect("Settings document is not XML");
    doc.descendants()
        .filter(|n| n.has_tag_name("url"))
        .filter_map(|n| n.text())
        .map(str::to_string)
        .collect()
}

#[test]
fn test_cli_help() {
    let output = mirrorshim(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("compile"));
    assert!(stdout.contains("probe"));
}

#[test]
fn test_cli_version() {
    let output = mirrorshim(&["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_compile_without_spec_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let path = settings_path(&temp_dir);

    let output = mirrorshim(&["compile", "-o", path.to_str().unwrap()]);

    assert!(output.status.success());
    assert!(!path.exists());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("default repository resolution"));
}

#[test]
fn test_compile_writes_settings() {
    let server = mirror_server(&[("/central", 200), ("/jboss", 200)]);
    let temp_dir = TempDir::new().unwrap();
    let path = settings_path(&temp_dir);
    let spec = format!(
        "central|{};jboss|{}",
        server.url("/central"),
        server.url("/jboss")
    );

    let output = mirrorshim(&["compile", "-m", &spec, "-o", path.to_str().unwrap()]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        mirror_urls(&path),
        vec![server.url("/central"), server.url("/jboss")]
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("-s {}", path.display())));
}

#[test]
fn test_compile_malformed_spec_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = settings_path(&temp_dir);

    let output = mirrorshim(&[
        "compile",
        "-m",
        "central|http://127.0.0.1:1;jboss",
        "-o",
        path.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!path.exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Malformed mirror descriptor 'jboss'"));
}

#[test]
fn test_compile_unreachable_without_fallback_fails() {
    let server = mirror_server(&[("/good", 200), ("/bad", 503)]);
    let temp_dir = TempDir::new().unwrap();
    let path = settings_path(&temp_dir);
    let spec = format!("central|{};jboss|{}", server.url("/good"), server.url("/bad"));

    let output = mirrorshim(&["compile", "-m", &spec, "-o", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!path.exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(&server.url("/bad")));
    assert!(stderr.contains("503"));
}

#[test]
fn test_compile_fallback_drops_unreachable_with_warning() {
    let server = mirror_server(&[("/good", 200), ("/bad", 503)]);
    let temp_dir = TempDir::new().unwrap();
    let path = settings_path(&temp_dir);
    let spec = format!("central|{};jboss|{}", server.url("/good"), server.url("/bad"));

    let output = mirrorshim(&[
        "compile",
        "-m",
        &spec,
        "--allow-fallback",
        "-o",
        path.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(mirror_urls(&path), vec![server.url("/good")]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("WARN"));
    assert!(stderr.contains(&server.url("/bad")));
    assert!(stderr.contains("jboss"));
}

#[test]
fn test_compile_reads_environment() {
    let server = mirror_server(&[("/m2", 200)]);
    let temp_dir = TempDir::new().unwrap();
    let path = settings_path(&temp_dir);

    let output = Command::new(env!("CARGO_BIN_EXE_mirrorshim"))
        .env_remove("RUST_LOG")
        .env("MIRRORSHIM_MIRRORS", format!("*|{}", server.url("/m2")))
        .env("MIRRORSHIM_SETTINGS_PATH", &path)
        .env("MIRRORSHIM_CONTEXT_DIR", "/workspace")
        .env("MIRRORSHIM_BUILD_OPTIONS", "-DskipTests")
        .args(["compile", "--format", "json"])
        .output()
        .expect("Failed to execute mirrorshim");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output is not JSON");
    assert_eq!(report["mirrors"][0]["mirror_of"], "*");
    assert_eq!(
        report["maven_args"],
        serde_json::json!([
            "-s",
            path.display().to_string(),
            "-f",
            "/workspace/pom.xml",
            "-DskipTests"
        ])
    );
    assert_eq!(mirror_urls(&path), vec![server.url("/m2")]);
}

#[test]
fn test_compile_rejects_zero_timeout() {
    let output = mirrorshim(&["compile", "--timeout", "0"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Probe timeout"));
}

#[test]
fn test_probe_command() {
    let server = mirror_server(&[("/up", 200)]);

    let up = mirrorshim(&["probe", &server.url("/up")]);
    assert!(up.status.success());
    assert!(String::from_utf8_lossy(&up.stdout).contains("reachable (HTTP 200)"));

    let down = mirrorshim(&["probe", &closed_port_url(), "--timeout", "2"]);
    assert_eq!(down.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&down.stdout).contains("unreachable"));
}

#[test]
fn test_log_level_flag_overrides_environment() {
    let temp_dir = TempDir::new().unwrap();
    let path = settings_path(&temp_dir);

    let output = Command::new(env!("CARGO_BIN_EXE_mirrorshim"))
        .env_remove("RUST_LOG")
        .env_remove("MIRRORSHIM_MIRRORS")
        .env("MIRRORSHIM_LOG_LEVEL", "loud")
        .args(["--log-level", "debug", "compile", "-o", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute mirrorshim");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Invalid log level"));
}
