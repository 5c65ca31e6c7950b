use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Extension match, case-insensitive
    pub fn has_extension<P: AsRef<Path>>(path: P, extension: &str) -> bool {
        path.as_ref()
            .extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
            .unwrap_or(false)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Build the backup path for a file by inserting a suffix before the
    /// extension, e.g. "movie.srt" with "_old" becomes "movie_old.srt"
    pub fn backup_path<P: AsRef<Path>>(path: P, suffix: &str) -> PathBuf {
        let path = path.as_ref();
        let stem = path.file_stem().unwrap_or_default().to_string_lossy();

        let file_name = match path.extension() {
            Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
            None => format!("{}{}", stem, suffix),
        };

        match path.parent() {
            Some(parent) => parent.join(file_name),
            None => PathBuf::from(file_name),
        }
    }

    /// Rename the original file to its backup path and return that path.
    ///
    /// An existing backup is never overwritten; the run fails instead so
    /// a previous original cannot be silently lost.
    pub fn backup_original<P: AsRef<Path>>(path: P, suffix: &str) -> Result<PathBuf> {
        let path = path.as_ref();
        let backup = Self::backup_path(path, suffix);

        if backup.exists() {
            return Err(anyhow::anyhow!(
                "Backup file already exists, refusing to overwrite: {:?}",
                backup
            ));
        }

        fs::rename(path, &backup)
            .with_context(|| format!("Failed to rename {:?} to {:?}", path, backup))?;

        Ok(backup)
    }
}
