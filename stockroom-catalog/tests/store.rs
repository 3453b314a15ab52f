use std::fs;

use stockroom_catalog::types::ProductRecord;
use stockroom_catalog::{backup_path, backup_then_save, load_catalog, save_catalog};
use tempfile::TempDir;

fn record(id: u32, skuid: &str) -> ProductRecord {
    ProductRecord {
        id,
        name: format!("Frame {skuid}"),
        brand: "Multifolks".to_string(),
        style: "Aviator".to_string(),
        size: "M".to_string(),
        price: Some(1299.0),
        colors: vec!["#000000".to_string()],
        color_names: vec!["Black".to_string()],
        image: format!("/images/products/{skuid}_1.jpg"),
        images: vec![format!("/images/products/{skuid}_1.jpg")],
        skuid: skuid.to_string(),
        category: "Eyeglasses".to_string(),
        material: "Metal".to_string(),
        collections: Vec::new(),
        comfort: Vec::new(),
        gender: "Men".to_string(),
        ..Default::default()
    }
}

#[test]
fn save_then_load_round_trips() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("products.json");
    let records = vec![record(1, "MFAVCL1001"), record(2, "MFAVCL2003")];

    save_catalog(&path, &records).unwrap();
    let loaded = load_catalog(&path).unwrap();
    assert_eq!(loaded, records);
}

#[test]
fn emitted_json_is_stable() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("products.json");
    let mut one = record(7, "MF1001");
    one.name = "Aviator Classic".to_string();
    one.price = None;

    save_catalog(&path, &[one]).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    let expected = r##"[
  {
    "id": 7,
    "name": "Aviator Classic",
    "brand": "Multifolks",
    "style": "Aviator",
    "size": "M",
    "price": null,
    "colors": [
      "#000000"
    ],
    "color_names": [
      "Black"
    ],
    "image": "/images/products/MF1001_1.jpg",
    "images": [
      "/images/products/MF1001_1.jpg"
    ],
    "skuid": "MF1001",
    "category": "Eyeglasses",
    "material": "Metal",
    "collections": [],
    "comfort": [],
    "gender": "Men"
  }
]
"##;
    assert_eq!(written, expected);
}

#[test]
fn non_ascii_survives_unescaped() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("products.json");
    let mut one = record(1, "MF1001");
    one.name = "サングラス Premium".to_string();

    save_catalog(&path, &[one]).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("サングラス Premium"));
    assert!(!written.contains("\\u"));
}

#[test]
fn optional_fields_omitted_until_set() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("products.json");

    save_catalog(&path, &[record(1, "MF1001")]).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert!(!written.contains("\"shape\""));
    assert!(!written.contains("\"clicks\""));
    assert!(!written.contains("\"adds_to_cart\""));
    assert!(!written.contains("\"popularity\""));

    let mut shaped = record(1, "MF1001");
    shaped.shape = Some("Round".to_string());
    shaped.clicks = Some(250);
    shaped.adds_to_cart = Some(30);
    save_catalog(&path, &[shaped]).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("\"shape\": \"Round\""));
    assert!(written.contains("\"clicks\": 250"));
}

#[test]
fn legacy_catalogs_still_load() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("products.json");
    fs::write(
        &path,
        r#"[
  {
    "id": 3,
    "name": "Old Frame",
    "skuid": "MF9001",
    "popularity": 5
  }
]"#,
    )
    .unwrap();

    let loaded = load_catalog(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].popularity, Some(5));
    assert_eq!(loaded[0].brand, "");
    assert!(loaded[0].images.is_empty());
    assert!(loaded[0].shape.is_none());
}

#[test]
fn load_missing_catalog_is_an_error() {
    let tmp = TempDir::new().unwrap();
    assert!(load_catalog(&tmp.path().join("absent.json")).is_err());
}

#[test]
fn first_save_writes_no_backup() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("products.json");

    let backup = backup_then_save(&path, &[record(1, "MF1001")]).unwrap();
    assert!(backup.is_none());
    assert!(path.exists());
    assert!(!backup_path(&path).exists());
}

#[test]
fn backup_holds_pre_call_contents() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("products.json");

    save_catalog(&path, &[record(1, "MF1001")]).unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let backup = backup_then_save(&path, &[record(1, "MF1001"), record(2, "MF2003")])
        .unwrap()
        .unwrap();
    assert_eq!(backup, tmp.path().join("products_backup.json"));
    assert_eq!(fs::read_to_string(&backup).unwrap(), before);
    assert_eq!(load_catalog(&path).unwrap().len(), 2);
}

#[test]
fn backup_is_single_generation() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("products.json");

    save_catalog(&path, &[record(1, "MF1001")]).unwrap();
    backup_then_save(&path, &[record(1, "MF1001"), record(2, "MF2003")]).unwrap();
    let second_state = fs::read_to_string(&path).unwrap();
    backup_then_save(&path, &[record(3, "MF3000")]).unwrap();

    // Only ever one backup file, holding the immediately-previous state.
    let backup = fs::read_to_string(backup_path(&path)).unwrap();
    assert_eq!(backup, second_state);
}

#[test]
fn save_creates_parent_dirs_and_leaves_no_temp_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("data").join("products.json");

    save_catalog(&path, &[record(1, "MF1001")]).unwrap();
    assert!(path.exists());

    let leftovers: Vec<_> = fs::read_dir(path.parent().unwrap())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
        .collect();
    assert!(leftovers.is_empty());
}
