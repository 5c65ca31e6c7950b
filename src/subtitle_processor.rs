use std::fmt;

use log::debug;

use crate::errors::SubtitleError;
use crate::timecode;

// @module: Subtitle parsing, shifting and serialization

// @const: Separator between start and end timecodes on a time-range line
const TIME_RANGE_SEPARATOR: &str = " --> ";

/// Index of a subtitle entry.
///
/// The index line is kept as opaque text so that well-formed-but-unusual
/// input (a non-numeric index) survives a plain shift verbatim. Only the
/// renumber path replaces it with an assigned counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryIndex {
    /// Index text exactly as it appeared in the source file
    Original(String),

    /// Sequential index assigned by renumbering, 1-based
    Assigned(usize),
}

impl fmt::Display for EntryIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EntryIndex::Original(text) => write!(f, "{}", text),
            EntryIndex::Assigned(n) => write!(f, "{}", n),
        }
    }
}

// @struct: Single subtitle entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    // @field: Index line, opaque unless renumbered
    pub index: EntryIndex,

    // @field: Start time in ms
    pub start_ms: i64,

    // @field: End time in ms
    pub end_ms: i64,

    // @field: Content lines, trimmed, original order
    pub content: Vec<String>,
}

impl SubtitleEntry {
    /// Creates a new subtitle entry - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(index: EntryIndex, start_ms: i64, end_ms: i64, content: Vec<String>) -> Self {
        SubtitleEntry {
            index,
            start_ms,
            end_ms,
            content,
        }
    }

    // @parses: One blank-line-delimited chunk into an entry
    // @validates: Minimal structural shape only
    pub fn parse_chunk(chunk: &[String]) -> Result<Self, SubtitleError> {
        // Index line, time-range line, at least one content line
        if chunk.len() < 3 {
            return Err(SubtitleError::MalformedEntry {
                reason: format!("chunk has {} line(s), expected at least 3", chunk.len()),
            });
        }

        let index = chunk[0].trim().to_string();
        let time_range = chunk[1].trim();

        let parts: Vec<&str> = time_range.split(TIME_RANGE_SEPARATOR).collect();
        if parts.len() != 2 {
            return Err(SubtitleError::MalformedEntry {
                reason: format!(
                    "time-range line '{}' must contain exactly one '{}' separator",
                    time_range, TIME_RANGE_SEPARATOR
                ),
            });
        }

        let start_ms = timecode::parse_timestamp(parts[0])?;
        let end_ms = timecode::parse_timestamp(parts[1])?;

        let content: Vec<String> = chunk[2..]
            .iter()
            .map(|line| line.trim().to_string())
            .collect();

        Ok(SubtitleEntry {
            index: EntryIndex::Original(index),
            start_ms,
            end_ms,
            content,
        })
    }

    /// Convert start time to a formatted SRT timecode
    pub fn format_start_time(&self) -> Result<String, SubtitleError> {
        timecode::format_timestamp(self.start_ms)
    }

    /// Convert end time to a formatted SRT timecode
    pub fn format_end_time(&self) -> Result<String, SubtitleError> {
        timecode::format_timestamp(self.end_ms)
    }
}

/// Ordered collection of subtitle entries for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleCollection {
    /// List of subtitle entries, file order = presentation order
    pub entries: Vec<SubtitleEntry>,
}

impl SubtitleCollection {
    /// Create a collection from already-parsed entries
    pub fn new(entries: Vec<SubtitleEntry>) -> Self {
        SubtitleCollection { entries }
    }

    /// Split raw SRT content into blank-line-delimited chunks.
    ///
    /// Whitespace-only lines count as blank. Leading, trailing and
    /// repeated blank runs produce no empty chunks. Purely structural;
    /// chunk content is not interpreted here.
    pub fn split_into_chunks(content: &str) -> Vec<Vec<String>> {
        let mut chunks = Vec::new();
        let mut current: Vec<String> = Vec::new();

        for line in content.lines() {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    chunks.push(std::mem::take(&mut current));
                }
            } else {
                current.push(line.to_string());
            }
        }

        if !current.is_empty() {
            chunks.push(current);
        }

        chunks
    }

    /// Parse SRT content into a collection, all-or-nothing.
    ///
    /// Any malformed chunk fails the whole parse so no partially parsed
    /// collection can reach the transform or the output file. An input
    /// with no chunks at all fails with [`SubtitleError::EmptyInput`].
    pub fn parse_srt_string(content: &str) -> Result<Self, SubtitleError> {
        let chunks = Self::split_into_chunks(content);
        if chunks.is_empty() {
            return Err(SubtitleError::EmptyInput);
        }

        let entries = chunks
            .iter()
            .map(|chunk| SubtitleEntry::parse_chunk(chunk))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Parsed {} subtitle entries", entries.len());

        Ok(SubtitleCollection { entries })
    }

    /// Shift every entry by `shift_ms` and optionally renumber.
    ///
    /// Pure over the collection: same length, same order, content lines
    /// untouched. Times are not clamped at zero; a negative result is
    /// carried through and rejected later by the serializer.
    pub fn shift(&self, shift_ms: i64, renumber: bool) -> Self {
        let entries = self
            .entries
            .iter()
            .enumerate()
            .map(|(position, entry)| SubtitleEntry {
                index: if renumber {
                    EntryIndex::Assigned(position + 1)
                } else {
                    entry.index.clone()
                },
                start_ms: entry.start_ms + shift_ms,
                end_ms: entry.end_ms + shift_ms,
                content: entry.content.clone(),
            })
            .collect();

        SubtitleCollection { entries }
    }

    /// Render the collection back to SRT text.
    ///
    /// Each entry ends with exactly one blank line, including the last,
    /// matching the chunk-delimited input format. The only failure modes
    /// are an empty collection and negative times surfaced by the
    /// timecode encoder.
    pub fn render(&self) -> Result<String, SubtitleError> {
        if self.entries.is_empty() {
            return Err(SubtitleError::EmptyInput);
        }

        let mut output = String::new();
        for entry in &self.entries {
            let start = entry.format_start_time()?;
            let end = entry.format_end_time()?;

            output.push_str(&entry.index.to_string());
            output.push('\n');
            output.push_str(&start);
            output.push_str(TIME_RANGE_SEPARATOR);
            output.push_str(&end);
            output.push('\n');
            for line in &entry.content {
                output.push_str(line);
                output.push('\n');
            }
            output.push('\n');
        }

        Ok(output)
    }
}

impl fmt::Display for SubtitleCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Collection")?;
        writeln!(f, "Entries: {}", self.entries.len())?;
        Ok(())
    }
}
