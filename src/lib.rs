/*!
 * # subshift - SRT Subtitle Shifter
 *
 * A Rust library for shifting the timestamps of SRT subtitle files by a
 * fixed offset, with optional renumbering of entries.
 *
 * ## Features
 *
 * - Parse SRT files into structured subtitle entries
 * - Shift every start/end timestamp by a signed fractional-second offset
 * - Exact millisecond arithmetic, no floating-point drift
 * - Optional sequential renumbering of entry indices
 * - All-or-nothing parsing: a malformed entry aborts before anything is written
 * - Original file preserved under a backup name before the output is written
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `timecode`: SRT timecode encoding/decoding and shift-amount parsing
 * - `subtitle_processor`: Chunk splitting, entry parsing, shifting and serialization
 * - `file_utils`: File system operations, including the backup rename
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod timecode;
pub mod subtitle_processor;
pub mod app_controller;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use subtitle_processor::{EntryIndex, SubtitleCollection, SubtitleEntry};
pub use app_controller::Controller;
pub use errors::{AppError, SubtitleError};
