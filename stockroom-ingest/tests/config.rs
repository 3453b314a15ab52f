use std::fs;
use std::path::PathBuf;

use stockroom_ingest::{PathOverrides, PipelineConfig};
use tempfile::TempDir;

#[test]
fn defaults_apply_without_config_file() {
    let config = PipelineConfig::resolve(None, PathOverrides::default()).unwrap();
    assert_eq!(config.sheet, PathBuf::from("products.csv"));
    assert_eq!(config.images_src, PathBuf::from("images"));
    assert_eq!(config.public_root, PathBuf::from("public"));
    assert_eq!(config.catalog, PathBuf::from("data/products.json"));
    assert_eq!(config.assets_dest(), PathBuf::from("public/images/products"));
}

#[test]
fn config_file_overrides_defaults() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("stockroom.toml");
    fs::write(
        &file,
        r#"
[paths]
sheet = "exports/catalog.csv"
catalog = "site/data/products.json"
"#,
    )
    .unwrap();

    let config = PipelineConfig::resolve(Some(&file), PathOverrides::default()).unwrap();
    assert_eq!(config.sheet, PathBuf::from("exports/catalog.csv"));
    assert_eq!(config.catalog, PathBuf::from("site/data/products.json"));
    // Fields the file doesn't set keep their defaults.
    assert_eq!(config.images_src, PathBuf::from("images"));
}

#[test]
fn cli_override_beats_config_file() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("stockroom.toml");
    fs::write(&file, "[paths]\nsheet = \"from-file.csv\"\n").unwrap();

    let overrides = PathOverrides {
        sheet: Some(PathBuf::from("from-flag.csv")),
        ..Default::default()
    };
    let config = PipelineConfig::resolve(Some(&file), overrides).unwrap();
    assert_eq!(config.sheet, PathBuf::from("from-flag.csv"));
}

#[test]
fn explicit_missing_config_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("absent.toml");
    assert!(PipelineConfig::resolve(Some(&missing), PathOverrides::default()).is_err());
}

#[test]
fn unparsable_config_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("stockroom.toml");
    fs::write(&file, "[paths\nsheet = ").unwrap();
    assert!(PipelineConfig::resolve(Some(&file), PathOverrides::default()).is_err());
}

#[test]
fn empty_config_file_is_fine() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("stockroom.toml");
    fs::write(&file, "").unwrap();

    let config = PipelineConfig::resolve(Some(&file), PathOverrides::default()).unwrap();
    assert_eq!(config.sheet, PathBuf::from("products.csv"));
}
