use std::fs;

use talkbook_engine::{ensure_output_dir, AtomicFileWriter, PersistError};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("graydon_talks");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());

    // Idempotent on an existing directory.
    ensure_output_dir(&new_dir).unwrap();
}

#[test]
fn output_dir_that_is_a_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let err = ensure_output_dir(&file_path).unwrap_err();
    assert!(matches!(err, PersistError::OutputDir { .. }));
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("mkp00001.md", "hello").unwrap();
    assert_eq!(first.file_name().unwrap(), "mkp00001.md");
    assert_eq!(fs::read_to_string(&first).unwrap(), "hello");

    let second = writer.write("mkp00001.md", "world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "world");

    // No temp files are left behind.
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
}

#[test]
fn binary_content_is_written_verbatim() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());
    let bytes = vec![0x25, 0x50, 0x44, 0x46, 0x00, 0xff];

    let path = writer.write("out.pdf", &bytes).unwrap();
    assert_eq!(fs::read(path).unwrap(), bytes);
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write("doc.md", "data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("doc.md").exists());
}
