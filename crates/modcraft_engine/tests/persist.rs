use std::fs;

use modcraft_engine::{ensure_output_dir, AtomicFileWriter, PersistError};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn repeated_writes_never_overwrite() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write_unique("magic.jar", b"one").unwrap();
    let second = writer.write_unique("magic.jar", b"two").unwrap();
    let third = writer.write_unique("magic.jar", b"three").unwrap();

    assert_eq!(first.file_name().unwrap(), "magic.jar");
    assert_eq!(second.file_name().unwrap(), "magic (1).jar");
    assert_eq!(third.file_name().unwrap(), "magic (2).jar");
    assert_eq!(fs::read_to_string(&first).unwrap(), "one");
    assert_eq!(fs::read_to_string(&second).unwrap(), "two");
    assert_eq!(fs::read_to_string(&third).unwrap(), "three");
}

#[test]
fn rejects_names_with_path_separators() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let result = writer.write_unique("../escape.jar", b"data");
    assert!(matches!(result, Err(PersistError::InvalidName(_))));
    assert!(!temp.path().join("..").join("escape.jar").exists());
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write_unique("mod.jar", b"data");
    assert!(matches!(result, Err(PersistError::OutputDir(_))));
    assert!(!file_path.with_file_name("mod.jar").exists());
}
