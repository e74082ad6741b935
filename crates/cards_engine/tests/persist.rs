use std::fs;

use cards_engine::{ensure_output_dir, PageWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("site");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn page_is_replaced_on_every_write() {
    let temp = TempDir::new().unwrap();
    let writer = PageWriter::new(temp.path().join("site").join("contributors.html")).unwrap();

    let first = writer.write("<p>first</p>").unwrap().to_path_buf();
    assert_eq!(first.file_name().unwrap(), "contributors.html");
    assert_eq!(fs::read_to_string(&first).unwrap(), "<p>first</p>");

    let second = writer.write("<p>second</p>").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(second).unwrap(), "<p>second</p>");

    // Only the page itself remains; temp files were renamed away.
    let entries = fs::read_dir(temp.path().join("site")).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn bare_file_name_targets_current_dir() {
    let writer = PageWriter::new("contributors.html").unwrap();
    assert_eq!(writer.target().to_str(), Some("contributors.html"));
}

#[test]
fn path_without_file_name_is_rejected() {
    assert!(PageWriter::new("/").is_err());
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = PageWriter::new(file_path.join("page.html")).unwrap();
    let result = writer.write("data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("page.html").exists());
}
