use std::fs;

use minishelf_catalog::{Entry, GalleryStore, load_entry, render_entry, write_entry};
use tempfile::TempDir;

fn full_entry() -> Entry {
    Entry {
        title: "Space Marine".to_string(),
        photos: vec![
            "photos/space-marine.png".to_string(),
            "photos/space-marine-2.png".to_string(),
        ],
        manufacturer: "Games Workshop".to_string(),
        date: "2024-01-01".to_string(),
        scale: "28mm".to_string(),
        game: Some("Warhammer 40,000".to_string()),
        faction: Some("Ultramarines".to_string()),
        order: Some(3),
    }
}

#[test]
fn renders_fixed_field_order() {
    let expected = "\
title: \"Space Marine\"
photos:
  - \"photos/space-marine.png\"
  - \"photos/space-marine-2.png\"
manufacturer: \"Games Workshop\"
date: 2024-01-01
scale: \"28mm\"
game: \"Warhammer 40,000\"
faction: \"Ultramarines\"
order: 3
";
    assert_eq!(render_entry(&full_entry()), expected);
}

#[test]
fn absent_optionals_are_omitted() {
    let entry = Entry {
        game: None,
        faction: None,
        order: None,
        ..full_entry()
    };
    let yaml = render_entry(&entry);
    assert!(!yaml.contains("game:"));
    assert!(!yaml.contains("faction:"));
    assert!(!yaml.contains("order:"));
}

#[test]
fn quotes_and_backslashes_escape() {
    let entry = Entry {
        title: "8\" Howitzer \\ Crew".to_string(),
        ..full_entry()
    };
    let yaml = render_entry(&entry);
    assert!(yaml.starts_with("title: \"8\\\" Howitzer \\\\ Crew\"\n"));
}

#[test]
fn rendered_record_parses_back() {
    let tmp = TempDir::new().unwrap();
    let store = GalleryStore::new(tmp.path());
    let entry = full_entry();

    let path = write_entry(&store, "space-marine", &entry).unwrap();
    assert_eq!(path, store.entry_path("space-marine"));
    assert_eq!(load_entry(&path).unwrap(), entry);
}

#[test]
fn parses_record_with_unquoted_strings() {
    // Hand-edited records are not always quoted the way we write them.
    let tmp = TempDir::new().unwrap();
    let store = GalleryStore::new(tmp.path());
    fs::create_dir_all(store.entries_dir()).unwrap();
    let path = store.entry_path("grot");
    fs::write(
        &path,
        "title: Grot\nphotos:\n  - photos/grot.png\nmanufacturer: Games Workshop\ndate: 2022-07-19\nscale: 28mm\n",
    )
    .unwrap();

    let entry = load_entry(&path).unwrap();
    assert_eq!(entry.title, "Grot");
    assert_eq!(entry.photos, vec!["photos/grot.png"]);
    assert_eq!(entry.date, "2022-07-19");
    assert!(entry.game.is_none());
    assert!(entry.order.is_none());
}
