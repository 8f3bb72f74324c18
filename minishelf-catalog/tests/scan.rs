use std::fs;
use std::path::Path;

use minishelf_catalog::{GalleryStore, scan};
use tempfile::TempDir;

fn write_record(root: &Path, name: &str, content: &str) {
    let entries = root.join("entries");
    fs::create_dir_all(&entries).unwrap();
    fs::write(entries.join(name), content).unwrap();
}

#[test]
fn empty_store_scans_empty() {
    let tmp = TempDir::new().unwrap();
    let meta = scan(&GalleryStore::new(tmp.path()));

    assert!(meta.manufacturers.is_empty());
    assert!(meta.games.is_empty());
    assert!(meta.factions.is_empty());
    assert!(meta.scales.is_empty());
    assert!(meta.slugs.is_empty());
}

#[test]
fn single_record_contributes_values_and_slug() {
    let tmp = TempDir::new().unwrap();
    write_record(
        tmp.path(),
        "imperial-knight.yaml",
        r#"title: "Imperial Knight"
photos:
  - "photos/imperial-knight.png"
manufacturer: "Foo"
date: 2023-11-02
scale: "28mm"
"#,
    );

    let meta = scan(&GalleryStore::new(tmp.path()));
    assert_eq!(meta.manufacturers, vec!["Foo"]);
    assert_eq!(meta.scales, vec!["28mm"]);
    assert!(meta.games.is_empty());
    assert!(meta.factions.is_empty());
    assert_eq!(meta.slugs, vec!["imperial-knight"]);
}

#[test]
fn duplicates_collapse_and_values_sort() {
    let tmp = TempDir::new().unwrap();
    write_record(
        tmp.path(),
        "a.yaml",
        r#"title: "A"
photos:
  - "photos/a.png"
manufacturer: "Games Workshop"
date: 2024-01-01
scale: "28mm"
game: "Warhammer 40,000"
"#,
    );
    write_record(
        tmp.path(),
        "b.yaml",
        r#"title: "B"
photos:
  - "photos/b.png"
manufacturer: "Games Workshop"
date: 2024-02-01
scale: "32mm"
game: "Adeptus Titanicus"
"#,
    );

    let meta = scan(&GalleryStore::new(tmp.path()));
    assert_eq!(meta.manufacturers, vec!["Games Workshop"]);
    assert_eq!(meta.games, vec!["Adeptus Titanicus", "Warhammer 40,000"]);
    assert_eq!(meta.scales, vec!["28mm", "32mm"]);
    assert_eq!(meta.slugs, vec!["a", "b"]);
}

#[test]
fn case_sensitive_distinct_values() {
    let tmp = TempDir::new().unwrap();
    write_record(
        tmp.path(),
        "a.yaml",
        "title: \"A\"\nmanufacturer: \"foo\"\ndate: 2024-01-01\nscale: \"28mm\"\n",
    );
    write_record(
        tmp.path(),
        "b.yaml",
        "title: \"B\"\nmanufacturer: \"Foo\"\ndate: 2024-01-01\nscale: \"28mm\"\n",
    );

    let meta = scan(&GalleryStore::new(tmp.path()));
    assert_eq!(meta.manufacturers, vec!["Foo", "foo"]);
}

#[test]
fn malformed_record_keeps_slug_but_no_values() {
    let tmp = TempDir::new().unwrap();
    write_record(tmp.path(), "broken.yaml", "manufacturer: [unterminated\n");

    let meta = scan(&GalleryStore::new(tmp.path()));
    assert_eq!(meta.slugs, vec!["broken"]);
    assert!(meta.manufacturers.is_empty());
}

#[test]
fn incomplete_record_still_contributes() {
    // A record missing required fields elsewhere still feeds the scan.
    let tmp = TempDir::new().unwrap();
    write_record(tmp.path(), "partial.yaml", "faction: \"Orks\"\n");

    let meta = scan(&GalleryStore::new(tmp.path()));
    assert_eq!(meta.factions, vec!["Orks"]);
    assert_eq!(meta.slugs, vec!["partial"]);
}

#[test]
fn yml_extension_is_scanned_too() {
    let tmp = TempDir::new().unwrap();
    write_record(
        tmp.path(),
        "old-entry.yml",
        "title: \"Old\"\nmanufacturer: \"Mantic\"\ndate: 2020-05-05\nscale: \"28mm\"\n",
    );
    write_record(tmp.path(), "notes.txt", "not a record");

    let meta = scan(&GalleryStore::new(tmp.path()));
    assert_eq!(meta.manufacturers, vec!["Mantic"]);
    assert_eq!(meta.slugs, vec!["old-entry"]);
}
