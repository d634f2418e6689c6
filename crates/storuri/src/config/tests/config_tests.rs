use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use crate::config::error::ConfigError;
use crate::config::{ConfigFormat, StorageSection, load_store_config};
use crate::resolver::ParamValue;
use crate::storage::{ClientStorage, DemoStorage, MemoryStorage, ServerLocator};

#[test]
fn test_format_from_extension() {
    assert_eq!(
        ConfigFormat::from_path(Path::new("store.json")),
        Some(ConfigFormat::Json)
    );
    assert_eq!(
        ConfigFormat::from_path(Path::new("STORE.JSON")),
        Some(ConfigFormat::Json)
    );
    assert_eq!(ConfigFormat::from_path(Path::new("store.ini")), None);
    assert_eq!(ConfigFormat::from_path(Path::new("store")), None);

    #[cfg(feature = "yaml-config")]
    {
        assert_eq!(
            ConfigFormat::from_path(Path::new("store.yml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("store.yaml")),
            Some(ConfigFormat::Yaml)
        );
    }
    #[cfg(feature = "toml-config")]
    assert_eq!(
        ConfigFormat::from_path(Path::new("store.toml")),
        Some(ConfigFormat::Toml)
    );
}

#[test]
fn test_load_json_resource() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("store.json");
    fs::write(
        &path,
        r#"{
          "databases": [
            {"name": "db", "cache_size": 4000, "storage": {"type": "memory"}}
          ],
          "storages": [
            {"name": "s1", "storage": {"type": "memory", "name": "one"}}
          ]
        }"#,
    )
    .unwrap();

    let config = load_store_config(&path).unwrap();
    assert_eq!(config.databases.len(), 1);
    assert_eq!(config.storages.len(), 1);

    let names: Vec<&str> = config.entries().map(|entry| entry.name()).collect();
    assert_eq!(names, vec!["db", "s1"]);
}

#[cfg(feature = "yaml-config")]
#[test]
fn test_load_yaml_resource() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("store.yaml");
    fs::write(
        &path,
        "storages:\n  - name: main\n    storage:\n      type: memory\n      name: y1\n",
    )
    .unwrap();

    let config = load_store_config(&path).unwrap();
    assert_eq!(config.storages.len(), 1);
    assert_eq!(config.storages[0].name, "main");
}

#[test]
fn test_entry_names_borrow_from_config() {
    // names must stay usable after the transient entry values are gone
    let config: crate::config::StoreConfig = serde_json::from_str(
        r#"{
          "storages": [
            {"name": "first", "storage": {"type": "memory"}},
            {"name": "second", "storage": {"type": "memory"}}
          ]
        }"#,
    )
    .unwrap();

    let names: Vec<&str> = config.entries().map(|entry| entry.name()).collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_store_config(Path::new("/no/such/store.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }), "got {err}");
}

#[test]
fn test_invalid_payload_is_deserialization_error() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("store.json");
    fs::write(&path, "{not json").unwrap();
    let err = load_store_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Deserialization { .. }));
}

#[test]
fn test_database_section_skips_unset_fields() {
    let config: crate::config::StoreConfig = serde_json::from_str(
        r#"{
          "databases": [
            {"name": "db", "pool_size": 3, "database_name": "main",
             "storage": {"type": "memory"}}
          ]
        }"#,
    )
    .unwrap();

    let params = config.databases[0].connection_params();
    assert_eq!(params["connection_pool_size"], ParamValue::Int(3));
    assert_eq!(params["database_name"], ParamValue::Text("main".to_string()));
    assert!(!params.contains_key("connection_cache_size"));
    assert!(!params.contains_key("connection_pool_timeout"));
}

#[test]
fn test_memory_section_open() {
    let section = StorageSection::Memory {
        name: Some("m1".to_string()),
    };
    let storage = section.open().unwrap();
    let memory = storage.as_any().downcast_ref::<MemoryStorage>().unwrap();
    assert_eq!(memory.name(), "m1");
}

#[test]
fn test_zeo_section_open_variants() {
    let tcp = StorageSection::Zeo {
        host: Some("db.internal".to_string()),
        port: None,
        path: None,
    };
    let storage = tcp.open().unwrap();
    let client = storage.as_any().downcast_ref::<ClientStorage>().unwrap();
    assert_eq!(
        client.locator(),
        &ServerLocator::Tcp {
            host: "db.internal".to_string(),
            port: 9991,
        }
    );

    let unix = StorageSection::Zeo {
        host: None,
        port: None,
        path: Some(PathBuf::from("/var/run/zeo.sock")),
    };
    let storage = unix.open().unwrap();
    let client = storage.as_any().downcast_ref::<ClientStorage>().unwrap();
    assert!(matches!(client.locator(), ServerLocator::Unix(_)));

    let invalid = StorageSection::Zeo {
        host: None,
        port: None,
        path: None,
    };
    assert!(invalid.open().is_err());
}

#[test]
fn test_demo_section_composes_layers() {
    let section = StorageSection::Demo {
        base: Box::new(StorageSection::Memory {
            name: Some("base".to_string()),
        }),
        changes: Box::new(StorageSection::Memory {
            name: Some("changes".to_string()),
        }),
    };
    let storage = section.open().unwrap();
    let demo = storage.as_any().downcast_ref::<DemoStorage>().unwrap();
    assert_eq!(demo.base().kind(), "memory");
    assert_eq!(demo.changes().kind(), "memory");
}

#[test]
fn test_section_factory_is_repeatable() {
    let section = StorageSection::Memory {
        name: Some("again".to_string()),
    };
    let factory = section.factory();
    assert_eq!(factory.build().unwrap().kind(), "memory");
    assert_eq!(factory.build().unwrap().kind(), "memory");
}
