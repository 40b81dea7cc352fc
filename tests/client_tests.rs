//! Client modpack packaging against a stub Modrinth API.


use mekkapack::config::CatalogConfig;
use mekkapack::{Catalog, ClientPackager, ModrinthClient, ModrinthIndex};
use serde_json::json;
use test_utils::{
    shader_zip_bytes, small_catalogs, zip_entries, zip_entries_from, StubModrinth, Workspace,
};

const BSL_BYTES: &[u8] = b"not really a zip";

/// Stub every id in `small_catalogs()`; mod jars must never be downloaded.
fn stub_small_pack(stub: &mut StubModrinth) -> Vec<test_utils::StubVersion> {
    vec![
        stub.add_version_with("ID1", "foo.jar", b"foo-jar", Some(1), Some(0)),
        stub.add_version_with("ID2", "bar.jar", b"bar-jar", Some(1), Some(0)),
        stub.add_version_with("RP1", "fast_better_grass.zip", b"grass", Some(1), Some(1)),
        stub.add_version_with("SH1", "bsl.zip", BSL_BYTES, Some(1), Some(1)),
        stub.add_version_with("SH2", "unbound.zip", &shader_zip_bytes(), Some(1), Some(1)),
    ]
}

#[test]
fn test_client_pack_layout() {
    let ws = Workspace::with_config_dir();
    let mut stub = StubModrinth::new();
    let mocks = stub_small_pack(&mut stub);

    let config = stub.config(small_catalogs());
    let modrinth = ModrinthClient::new(config.api.base_url.clone());

    let output = ClientPackager::new(&config, &modrinth, ws.config_dir(), ws.out_dir())
        .run()
        .unwrap();

    assert_eq!(
        output.archive_path,
        ws.out_dir().join("mekka_MC1.21.1_v0.1.0_client.mrpack")
    );

    let entries = zip_entries(&output.archive_path);
    let names: Vec<&str> = entries.keys().map(|k| k.as_str()).collect();
    assert_eq!(
        names,
        [
            "modrinth.index.json",
            "overrides/config/jade/plugins.json",
            "overrides/config/sodium-options.json",
            "overrides/options.txt",
            "overrides/resourcepacks/fast_better_grass.zip",
            "overrides/shaderpacks/bsl.zip",
            "overrides/shaderpacks/unbound.zip",
        ]
    );

    assert_eq!(entries["overrides/resourcepacks/fast_better_grass.zip"], b"grass");
    assert_eq!(entries["overrides/config/jade/plugins.json"], b"{\"enabled\":true}");

    let options = String::from_utf8(entries["overrides/options.txt"].clone()).unwrap();
    assert!(options.starts_with("fullscreen:true\nguiScale:2\n"));
    assert!(options.ends_with("\"file/Fast Better Grass.zip\"]\n"));

    for mock in &mocks {
        mock.api.assert();
        mock.file.assert();
    }
}

#[test]
fn test_index_lists_only_client_mods() {
    let ws = Workspace::with_config_dir();
    let mut stub = StubModrinth::new();
    let _mocks = stub_small_pack(&mut stub);

    let config = stub.config(small_catalogs());
    let modrinth = ModrinthClient::new(config.api.base_url.clone());

    let output = ClientPackager::new(&config, &modrinth, ws.config_dir(), ws.out_dir())
        .run()
        .unwrap();

    assert_eq!(output.index.files.len(), config.client_mods().len());

    let entries = zip_entries(&output.archive_path);
    let index: ModrinthIndex = serde_json::from_slice(&entries["modrinth.index.json"]).unwrap();
    assert_eq!(index, output.index);

    let paths: Vec<&str> = index.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, ["mods/foo.jar", "mods/bar.jar"]);

    assert_eq!(
        serde_json::to_value(&index.files[0]).unwrap(),
        json!({
            "path": "mods/foo.jar",
            "hashes": {"sha1": "0".repeat(40), "sha512": test_utils::sha512_hex(b"foo-jar")},
            "env": {"client": "required", "server": "required"},
            "downloads": [stub.file_url("foo.jar")],
            "fileSize": 7
        })
    );

    let raw: serde_json::Value = serde_json::from_slice(&entries["modrinth.index.json"]).unwrap();
    assert_eq!(raw["formatVersion"], 1);
    assert_eq!(raw["game"], "minecraft");
    assert_eq!(raw["versionId"], "0.1.0");
    assert_eq!(raw["name"], "Mekka");
    assert_eq!(raw["dependencies"], json!({"minecraft": "1.21.1", "neoforge": "21.1.218"}));
}

#[test]
fn test_only_sentinel_shader_is_patched() {
    let ws = Workspace::with_config_dir();
    let mut stub = StubModrinth::new();
    let _mocks = stub_small_pack(&mut stub);

    let config = stub.config(small_catalogs());
    let modrinth = ModrinthClient::new(config.api.base_url.clone());

    let output = ClientPackager::new(&config, &modrinth, ws.config_dir(), ws.out_dir())
        .run()
        .unwrap();

    let entries = zip_entries(&output.archive_path);

    // Not a ZIP at all: the editor would have failed on it
    assert_eq!(entries["overrides/shaderpacks/bsl.zip"], BSL_BYTES);

    let unbound = zip_entries_from(std::io::Cursor::new(
        entries["overrides/shaderpacks/unbound.zip"].clone(),
    ));
    let properties = String::from_utf8(unbound["shaders/block.properties"].clone()).unwrap();
    assert!(properties.contains(
        "\nblock.10024=mekanism:lead_ore mekanism:deepslate_lead_ore mekanism:fluorite_ore"
    ));
    assert!(properties.contains("block.10028=minecraft:gold_ore"));
    assert_eq!(unbound["shaders/final.fsh"], b"void main() {}\n");
}

#[test]
fn test_renamed_sentinel_is_not_patched() {
    let ws = Workspace::with_config_dir();
    let mut stub = StubModrinth::new();
    let shader = shader_zip_bytes();
    let _unbound = stub.add_version("SH2", "unbound.zip", &shader);

    let mut catalogs = CatalogConfig {
        shared: Catalog::new(),
        client_only: Catalog::new(),
        server_only: Catalog::new(),
        resource_packs: Catalog::new(),
        shaders: Catalog::new(),
    };
    catalogs.shaders.insert("Complementary Shaders - Unbound (copy)", "SH2");

    let config = stub.config(catalogs);
    let modrinth = ModrinthClient::new(config.api.base_url.clone());

    let output = ClientPackager::new(&config, &modrinth, ws.config_dir(), ws.out_dir())
        .run()
        .unwrap();

    let entries = zip_entries(&output.archive_path);
    assert_eq!(entries["overrides/shaderpacks/unbound.zip"], shader);
    assert!(output.index.files.is_empty());
}

#[test]
fn test_missing_config_dir_fails_without_archive() {
    let ws = Workspace::new();
    let mut stub = StubModrinth::new();
    let _mocks = stub_small_pack(&mut stub);

    let config = stub.config(small_catalogs());
    let modrinth = ModrinthClient::new(config.api.base_url.clone());
    let packager = ClientPackager::new(&config, &modrinth, ws.config_dir(), ws.out_dir());

    assert!(packager.run().is_err());
    assert!(!packager.archive_path().exists());
}

#[test]
fn test_api_failure_aborts() {
    let ws = Workspace::with_config_dir();
    let mut stub = StubModrinth::new();
    let _foo = stub.add_version("ID1", "foo.jar", b"foo");
    // ID2 is not stubbed: mockito answers 501

    let config = stub.config(small_catalogs());
    let modrinth = ModrinthClient::new(config.api.base_url.clone());
    let packager = ClientPackager::new(&config, &modrinth, ws.config_dir(), ws.out_dir());

    assert!(packager.run().is_err());
    assert!(!packager.archive_path().exists());
    assert!(!ws.out_dir().exists());
}
