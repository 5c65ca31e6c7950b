/*!
 * Tests for subtitle parsing, shifting and serialization
 */

use subshift::errors::SubtitleError;
use subshift::subtitle_processor::{EntryIndex, SubtitleCollection, SubtitleEntry};
use crate::common;

fn chunk(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

#[test]
fn test_split_into_chunks_withBlankSeparators_shouldSplitCorrectly() {
    let chunks = SubtitleCollection::split_into_chunks(common::SAMPLE_SRT);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0], vec!["1", "00:00:01,000 --> 00:00:02,500", "Hi"]);
    assert_eq!(
        chunks[1],
        vec![
            "2",
            "00:00:03,000 --> 00:00:04,000",
            "Second line",
            "with a continuation"
        ]
    );
}

#[test]
fn test_split_into_chunks_withNoSeparators_shouldYieldOneChunk() {
    let chunks = SubtitleCollection::split_into_chunks("a\nb\nc");
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0], vec!["a", "b", "c"]);
}

#[test]
fn test_split_into_chunks_withOnlyBlankLines_shouldYieldNoChunks() {
    assert!(SubtitleCollection::split_into_chunks("").is_empty());
    assert!(SubtitleCollection::split_into_chunks("\n\n  \n\t\n").is_empty());
}

#[test]
fn test_split_into_chunks_withLeadingTrailingAndRepeatedBlanks_shouldYieldNoEmptyChunks() {
    let chunks = SubtitleCollection::split_into_chunks("\n\nfirst\n\n\n\nsecond\n\n\n");
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0], vec!["first"]);
    assert_eq!(chunks[1], vec!["second"]);
}

#[test]
fn test_parse_chunk_withValidChunk_shouldProduceEntry() {
    let entry = SubtitleEntry::parse_chunk(&chunk(&[
        "42",
        "00:00:01,000 --> 00:00:02,500",
        "  Hi  ",
    ]))
    .unwrap();

    assert_eq!(entry.index, EntryIndex::Original("42".to_string()));
    assert_eq!(entry.start_ms, 1000);
    assert_eq!(entry.end_ms, 2500);
    // Content lines are trimmed of leading/trailing whitespace
    assert_eq!(entry.content, vec!["Hi"]);
}

#[test]
fn test_parse_chunk_withNonNumericIndex_shouldKeepIndexVerbatim() {
    let entry = SubtitleEntry::parse_chunk(&chunk(&[
        "42a",
        "00:00:01,000 --> 00:00:02,500",
        "Hi",
    ]))
    .unwrap();

    assert_eq!(entry.index, EntryIndex::Original("42a".to_string()));
}

#[test]
fn test_parse_chunk_withTooFewLines_shouldFailAsMalformedEntry() {
    let err = SubtitleEntry::parse_chunk(&chunk(&["1", "00:00:01,000 --> 00:00:02,500"]))
        .unwrap_err();
    assert!(matches!(err, SubtitleError::MalformedEntry { .. }));
}

#[test]
fn test_parse_chunk_withMissingSeparator_shouldFailAsMalformedEntry() {
    let err = SubtitleEntry::parse_chunk(&chunk(&[
        "1",
        "00:00:01,000 -> 00:00:02,500",
        "Hi",
    ]))
    .unwrap_err();
    assert!(matches!(err, SubtitleError::MalformedEntry { .. }));
}

#[test]
fn test_parse_chunk_withBadTimecode_shouldFailAsMalformedTimecode() {
    let err = SubtitleEntry::parse_chunk(&chunk(&[
        "1",
        "00:00:01.000 --> 00:00:02,500",
        "Hi",
    ]))
    .unwrap_err();
    assert!(matches!(err, SubtitleError::MalformedTimecode { .. }));
}

#[test]
fn test_parse_srt_string_withValidContent_shouldParseAllEntries() {
    let collection = SubtitleCollection::parse_srt_string(common::SAMPLE_SRT).unwrap();

    assert_eq!(collection.entries.len(), 2);
    assert_eq!(collection.entries[0].start_ms, 1000);
    assert_eq!(collection.entries[0].end_ms, 2500);
    assert_eq!(collection.entries[1].content.len(), 2);
}

#[test]
fn test_parse_srt_string_withEmptyInput_shouldFailAsEmptyInput() {
    let err = SubtitleCollection::parse_srt_string("\n\n\n").unwrap_err();
    assert_eq!(err, SubtitleError::EmptyInput);
}

/// Parsing is all-or-nothing: one bad chunk fails the whole collection
#[test]
fn test_parse_srt_string_withOneMalformedChunk_shouldFailWholeParse() {
    let content = "1\n00:00:01,000 --> 00:00:02,500\nHi\n\n2\n00:00:03,000 --> 00:00:04,000\n\n";
    let err = SubtitleCollection::parse_srt_string(content).unwrap_err();
    assert!(matches!(err, SubtitleError::MalformedEntry { .. }));
}

#[test]
fn test_shift_withPositiveOffset_shouldMoveAllTimes() {
    let collection = SubtitleCollection::parse_srt_string(common::SAMPLE_SRT).unwrap();
    let shifted = collection.shift(1500, false);

    assert_eq!(shifted.entries.len(), 2);
    assert_eq!(shifted.entries[0].start_ms, 2500);
    assert_eq!(shifted.entries[0].end_ms, 4000);
    assert_eq!(shifted.entries[1].start_ms, 4500);
    // Content and indices untouched
    assert_eq!(shifted.entries[0].content, collection.entries[0].content);
    assert_eq!(shifted.entries[0].index, collection.entries[0].index);
}

#[test]
fn test_shift_withNegativeOffset_shouldPassNegativeTimesThrough() {
    let collection = SubtitleCollection::parse_srt_string(common::SAMPLE_SRT).unwrap();
    let shifted = collection.shift(-2000, false);

    // No clamping at zero
    assert_eq!(shifted.entries[0].start_ms, -1000);
    assert_eq!(shifted.entries[0].end_ms, 500);
}

/// Shift idempotence under inverse: apply(apply(e, x), -x) == e
#[test]
fn test_shift_withInverseOffset_shouldRestoreOriginal() {
    let collection = SubtitleCollection::parse_srt_string(&common::generate_srt(10)).unwrap();
    let round_tripped = collection.shift(12_345, false).shift(-12_345, false);
    assert_eq!(round_tripped, collection);
}

#[test]
fn test_shift_withRenumber_shouldAssignSequentialIndices() {
    let content = "5\n00:00:01,000 --> 00:00:02,000\nFirst\n\n9\n00:00:03,000 --> 00:00:04,000\nSecond\n\n";
    let collection = SubtitleCollection::parse_srt_string(content).unwrap();
    let renumbered = collection.shift(0, true);

    assert_eq!(renumbered.entries[0].index, EntryIndex::Assigned(1));
    assert_eq!(renumbered.entries[1].index, EntryIndex::Assigned(2));
    // Timing and content unchanged
    assert_eq!(renumbered.entries[0].start_ms, collection.entries[0].start_ms);
    assert_eq!(renumbered.entries[1].end_ms, collection.entries[1].end_ms);
    assert_eq!(renumbered.entries[0].content, collection.entries[0].content);
}

#[test]
fn test_render_withValidCollection_shouldEmitChunkDelimitedFormat() {
    let collection = SubtitleCollection::parse_srt_string(common::SAMPLE_SRT).unwrap();
    let rendered = collection.render().unwrap();

    assert_eq!(rendered, common::SAMPLE_SRT);
    // One blank line after every entry, including the last
    assert!(rendered.ends_with("\n\n"));
}

#[test]
fn test_render_withEmptyCollection_shouldFailAsEmptyInput() {
    let collection = SubtitleCollection::new(Vec::new());
    assert_eq!(collection.render().unwrap_err(), SubtitleError::EmptyInput);
}

#[test]
fn test_render_withNegativeTime_shouldFailAsNegativeDuration() {
    let collection = SubtitleCollection::parse_srt_string(common::SAMPLE_SRT).unwrap();
    let shifted = collection.shift(-10_000, false);

    let err = shifted.render().unwrap_err();
    assert!(matches!(err, SubtitleError::NegativeDuration { .. }));
}

/// Order preservation: render -> split -> parse reproduces the collection
#[test]
fn test_render_thenReparse_shouldReproduceCollection() {
    let collection = SubtitleCollection::parse_srt_string(&common::generate_srt(25)).unwrap();
    let shifted = collection.shift(750, true);

    let rendered = shifted.render().unwrap();
    let reparsed = SubtitleCollection::parse_srt_string(&rendered).unwrap();

    assert_eq!(reparsed.entries.len(), shifted.entries.len());
    for (reparsed_entry, shifted_entry) in reparsed.entries.iter().zip(shifted.entries.iter()) {
        // Renumbered indices come back as original text of the same number
        assert_eq!(
            reparsed_entry.index.to_string(),
            shifted_entry.index.to_string()
        );
        assert_eq!(reparsed_entry.start_ms, shifted_entry.start_ms);
        assert_eq!(reparsed_entry.end_ms, shifted_entry.end_ms);
        assert_eq!(reparsed_entry.content, shifted_entry.content);
    }
}

/// Scenario from the format contract: +1.5s over a single entry
#[test]
fn test_shift_withBasicScenario_shouldMatchExpectedOutput() {
    let content = "1\n00:00:01,000 --> 00:00:02,500\nHi\n\n";
    let collection = SubtitleCollection::parse_srt_string(content).unwrap();
    let rendered = collection.shift(1500, false).render().unwrap();

    assert_eq!(rendered, "1\n00:00:02,500 --> 00:00:04,000\nHi\n\n");
}

#[test]
fn test_parse_srt_string_withOutOfOrderTimings_shouldNotReject() {
    // start > end is an input validity concern, not enforced here
    let content = "1\n00:00:05,000 --> 00:00:02,000\nBackwards\n\n";
    let collection = SubtitleCollection::parse_srt_string(content).unwrap();

    assert_eq!(collection.entries[0].start_ms, 5000);
    assert_eq!(collection.entries[0].end_ms, 2000);
}
