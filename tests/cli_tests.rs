//! End-to-end tests of the mekkapack binary.


use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use test_utils::{shader_zip_bytes, zip_entries, StubModrinth, Workspace};

fn mekkapack_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mekkapack"))
}

/// Small pack definition written next to the config dir
fn write_pack_toml(ws: &Workspace) -> std::path::PathBuf {
    let path = ws.path().join("pack.toml");
    fs::write(
        &path,
        r#"
[pack]
name = "Test Pack"

[catalogs]
shared = [{ name = "Bar", id = "ID2" }]
client_only = [{ name = "Foo", id = "ID1" }]
server_only = [{ name = "Chunky", id = "ID3" }]
resource_packs = []
shaders = [{ name = "Complementary Shaders - Unbound", id = "SH2" }]
"#,
    )
    .expect("Failed to write pack.toml");
    path
}

#[test]
fn test_help() {
    mekkapack_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--client"))
        .stdout(predicate::str::contains("--server"))
        .stdout(predicate::str::contains("--memory"));
}

#[test]
fn test_no_flags_no_side_effects() {
    let ws = Workspace::new();

    mekkapack_cmd()
        .current_dir(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(ws.top_level().is_empty());
}

#[test]
fn test_no_flags_ignores_missing_config_file() {
    let ws = Workspace::new();

    mekkapack_cmd()
        .current_dir(ws.path())
        .args(["--config", "does-not-exist.toml", "--memory", "8G"])
        .assert()
        .success();

    assert!(ws.top_level().is_empty());
}

#[test]
fn test_missing_config_file_fails() {
    let ws = Workspace::new();

    mekkapack_cmd()
        .current_dir(ws.path())
        .args(["--client", "--config", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_client_and_server_end_to_end() {
    let ws = Workspace::with_config_dir();
    let pack_toml = write_pack_toml(&ws);

    let mut stub = StubModrinth::new();
    let _foo = stub.add_version("ID1", "foo.jar", b"foo");
    let _bar = stub.add_version("ID2", "bar.jar", b"bar");
    let _chunky = stub.add_version("ID3", "chunky.jar", b"chunky");
    let _unbound = stub.add_version("SH2", "unbound.zip", &shader_zip_bytes());
    let _installer = stub.add_installer(b"installer-jar");

    mekkapack_cmd()
        .current_dir(ws.path())
        .env("MEKKAPACK_API_URL", stub.url())
        .env("MEKKAPACK_MAVEN_URL", stub.url())
        .arg("--client")
        .arg("--server")
        .arg("--config")
        .arg(&pack_toml)
        .args(["--memory", "2G", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Client modpack created successfully!"))
        .stdout(predicate::str::contains("Server files created successfully!"));

    let archive = ws.path().join("test_pack_MC1.21.1_v0.1.0_client.mrpack");
    let entries = zip_entries(&archive);
    let index: serde_json::Value =
        serde_json::from_slice(&entries["modrinth.index.json"]).unwrap();
    assert_eq!(index["name"], "Test Pack");
    assert_eq!(index["files"].as_array().unwrap().len(), 2);
    assert!(entries.contains_key("overrides/shaderpacks/unbound.zip"));

    let server = ws.path().join("server");
    assert_eq!(
        fs::read_to_string(server.join("run.sh")).unwrap(),
        "java -Xmx2G -jar server.jar\n"
    );
    assert!(server.join("mods/chunky.jar").exists());
    assert!(server.join("mods/bar.jar").exists());
    assert!(!server.join("mods/foo.jar").exists());
    assert!(server.join("config/sodium-options.json").exists());
}

#[test]
fn test_api_failure_exits_nonzero() {
    let ws = Workspace::with_config_dir();
    let pack_toml = write_pack_toml(&ws);
    let stub = StubModrinth::new();

    mekkapack_cmd()
        .current_dir(ws.path())
        .env("MEKKAPACK_API_URL", stub.url())
        .arg("--client")
        .arg("--config")
        .arg(&pack_toml)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to build the client modpack"));

    assert!(!ws
        .path()
        .join("test_pack_MC1.21.1_v0.1.0_client.mrpack")
        .exists());
}
