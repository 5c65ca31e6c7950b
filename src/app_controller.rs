use anyhow::{Result, Context};
use log::{info, debug};
use std::path::Path;

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::subtitle_processor::SubtitleCollection;

// @module: Application controller for subtitle shifting

/// Main application controller driving the shift pipeline
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Shift subtitle content without touching the filesystem.
    ///
    /// Runs split -> parse -> transform -> render over in-memory text and
    /// returns the full rendered output. Any malformed chunk fails the
    /// whole run before any output is produced.
    pub fn shift_content(&self, content: &str, shift_ms: i64, renumber: bool) -> Result<String> {
        let collection = SubtitleCollection::parse_srt_string(content)?;
        debug!(
            "Shifting {} entries by {}ms (renumber: {})",
            collection.entries.len(),
            shift_ms,
            renumber
        );

        let shifted = collection.shift(shift_ms, renumber);
        let rendered = shifted.render()?;

        Ok(rendered)
    }

    /// Run the main workflow against a subtitle file on disk.
    ///
    /// The output text is fully rendered in memory before the original is
    /// renamed to its backup path, so any parse or encode failure aborts
    /// with the filesystem untouched.
    pub fn run(&self, input_file: &Path, shift_ms: i64, renumber: bool) -> Result<()> {
        let start_time = std::time::Instant::now();

        if !FileManager::file_exists(input_file) {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        info!(
            "Shifting {:?} by {}s",
            input_file,
            format_shift_seconds(shift_ms)
        );

        let content = FileManager::read_to_string(input_file)?;
        let rendered = self.shift_content(&content, shift_ms, renumber)?;

        // Destructive steps only after the whole pipeline has succeeded
        let backup = FileManager::backup_original(input_file, &self.config.backup_suffix)?;
        info!("Original preserved as {:?}", backup);

        FileManager::write_to_file(input_file, &rendered)?;

        info!(
            "Wrote shifted subtitles to {:?} in {}ms",
            input_file,
            start_time.elapsed().as_millis()
        );

        Ok(())
    }
}

/// Format a millisecond shift as decimal seconds for log output
fn format_shift_seconds(shift_ms: i64) -> String {
    let sign = if shift_ms < 0 { "-" } else { "" };
    let abs = shift_ms.abs();
    format!("{}{}.{:03}", sign, abs / 1000, abs % 1000)
}
