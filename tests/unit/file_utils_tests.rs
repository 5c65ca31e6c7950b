/*!
 * Tests for file utilities and backup rename behavior
 */

use std::path::PathBuf;
use subshift::file_utils::FileManager;
use crate::common;

#[test]
fn test_has_extension_withMatchingExtension_shouldBeCaseInsensitive() {
    assert!(FileManager::has_extension("movie.srt", "srt"));
    assert!(FileManager::has_extension("movie.SRT", "srt"));
    assert!(!FileManager::has_extension("movie.txt", "srt"));
    assert!(!FileManager::has_extension("movie", "srt"));
}

#[test]
fn test_backup_path_withExtension_shouldInsertSuffixBeforeExtension() {
    let backup = FileManager::backup_path("sub/movie.srt", "_old");
    assert_eq!(backup, PathBuf::from("sub/movie_old.srt"));
}

#[test]
fn test_backup_path_withoutExtension_shouldAppendSuffix() {
    let backup = FileManager::backup_path("movie", "_old");
    assert_eq!(backup, PathBuf::from("movie_old"));
}

#[test]
fn test_backup_original_withFreshTarget_shouldRenameFile() {
    let (_dir, path) = common::write_temp_srt("movie.srt", common::SAMPLE_SRT);

    let backup = FileManager::backup_original(&path, "_old").unwrap();

    assert!(!path.exists());
    assert!(backup.exists());
    assert_eq!(backup.file_name().unwrap(), "movie_old.srt");
    assert_eq!(
        FileManager::read_to_string(&backup).unwrap(),
        common::SAMPLE_SRT
    );
}

#[test]
fn test_backup_original_withExistingBackup_shouldFailWithoutOverwriting() {
    let (dir, path) = common::write_temp_srt("movie.srt", common::SAMPLE_SRT);
    let existing_backup = dir.path().join("movie_old.srt");
    std::fs::write(&existing_backup, "precious earlier backup").unwrap();

    let result = FileManager::backup_original(&path, "_old");

    assert!(result.is_err());
    // Neither file was touched
    assert!(path.exists());
    assert_eq!(
        FileManager::read_to_string(&existing_backup).unwrap(),
        "precious earlier backup"
    );
}

#[test]
fn test_write_to_file_withMissingParent_shouldCreateDirectories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b").join("out.srt");

    FileManager::write_to_file(&nested, "content").unwrap();

    assert_eq!(FileManager::read_to_string(&nested).unwrap(), "content");
}
