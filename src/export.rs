//! # Chord Sheet Export
//!
//! Flattens a document into monospace text: for every line, a chord line
//! built from spaces and chord names, then the lyric line.
//!
//! ## Algorithm
//! For each line, placements are walked left to right with a cursor column
//! starting at 0. Each chord gets `max(0, target - cursor)` spaces of padding
//! and is then written verbatim; the cursor advances past it. A chord whose
//! target column lies inside or before the previous chord is written directly
//! after it with no space.
//!
//! ## Example
//! ```rust
//! use chordsheet::{flatten, Document, PlacementEngine};
//!
//! let mut doc = Document::new();
//! doc.set_lyrics("Hello world");
//! doc.materialize_lines();
//! doc.add_placement(0, "G", 0.0)?;
//! doc.add_placement(0, "C", 60.0)?;
//!
//! let text = flatten(&doc, &PlacementEngine::new(10.0));
//! assert_eq!(text, "G     C\nHello world\n");
//! # Ok::<(), chordsheet::ChordSheetError>(())
//! ```
//!
//! The result is the single export string. Clipboard and print collaborators
//! receive it byte for byte through [`ExportTarget`].

use crate::document::{Document, Line};
use crate::error::ChordSheetError;
use crate::placement::PlacementEngine;

/// Convert a document to chord sheet text.
pub fn flatten(document: &Document, engine: &PlacementEngine) -> String {
    let mut out = String::new();

    for line in document.lines() {
        out.push_str(&chord_line(line, engine));
        out.push('\n');
        out.push_str(&line.text);
        out.push('\n');
    }

    out
}

/// Render one line's placements as a row of spaces and chord names.
pub fn chord_line(line: &Line, engine: &PlacementEngine) -> String {
    let mut row = String::new();
    let mut cursor = 0usize;

    for placement in line.sorted_chords() {
        let target = engine.pixel_to_column(placement.offset);
        let padding = target.saturating_sub(cursor);
        row.extend(std::iter::repeat(' ').take(padding));
        row.push_str(&placement.text);
        cursor += padding + placement.text.chars().count();
    }

    row
}

/// Somewhere the export string can be delivered (clipboard, printer, file).
pub trait ExportTarget {
    /// Short label used in notices and logs.
    fn name(&self) -> &str;

    fn deliver(&mut self, text: &str) -> Result<(), ChordSheetError>;
}

/// Collects deliveries in memory.
#[derive(Debug, Default)]
pub struct BufferTarget {
    pub delivered: Vec<String>,
}

impl ExportTarget for BufferTarget {
    fn name(&self) -> &str {
        "buffer"
    }

    fn deliver(&mut self, text: &str) -> Result<(), ChordSheetError> {
        self.delivered.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with(lyrics: &str, placements: &[(usize, &str, f64)]) -> Document {
        let mut doc = Document::new();
        doc.set_lyrics(lyrics);
        doc.materialize_lines();
        for (line, text, offset) in placements {
            doc.add_placement(*line, text, *offset).unwrap();
        }
        doc
    }

    #[test]
    fn test_hello_world() {
        let doc = doc_with("Hello world", &[(0, "G", 0.0), (0, "C", 60.0)]);
        let text = flatten(&doc, &PlacementEngine::new(10.0));
        assert_eq!(text, "G     C\nHello world\n");
    }

    #[test]
    fn test_leading_padding() {
        let doc = doc_with("Amazing grace", &[(0, "D", 31.0)]);
        let engine = PlacementEngine::new(10.0);
        assert_eq!(chord_line(&doc.lines()[0], &engine), "   D");
    }

    #[test]
    fn test_overlap_is_written_adjacent() {
        // Am ends at column 2; F targets column 1
        let doc = doc_with("la la", &[(0, "Am", 0.0), (0, "F", 10.0)]);
        let engine = PlacementEngine::new(10.0);
        assert_eq!(chord_line(&doc.lines()[0], &engine), "AmF");

        // same column twice
        let doc = doc_with("la", &[(0, "C", 20.0), (0, "G", 20.0)]);
        assert_eq!(chord_line(&doc.lines()[0], &engine), "  CG");
    }

    #[test]
    fn test_chord_directly_after_previous_end() {
        let doc = doc_with("x", &[(0, "Am", 0.0), (0, "G", 20.0)]);
        let engine = PlacementEngine::new(10.0);
        assert_eq!(chord_line(&doc.lines()[0], &engine), "AmG");
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let engine = PlacementEngine::new(9.6);
        let a = doc_with("verse", &[(0, "C", 0.0), (0, "G", 48.0), (0, "Am", 96.0)]);
        let b = doc_with("verse", &[(0, "Am", 96.0), (0, "C", 0.0), (0, "G", 48.0)]);
        assert_eq!(flatten(&a, &engine), flatten(&b, &engine));
    }

    #[test]
    fn test_empty_lines_are_kept() {
        let doc = doc_with("first\n\nthird\n", &[(0, "E", 0.0)]);
        let text = flatten(&doc, &PlacementEngine::new(10.0));
        assert_eq!(text, "E\nfirst\n\n\n\nthird\n\n\n");
    }

    #[test]
    fn test_edited_lyrics_export_after_rematerialize() {
        let mut doc = doc_with("old line", &[(0, "G", 0.0)]);
        doc.join_lines();
        doc.set_lyrics("brand new\nlyrics");
        doc.materialize_lines();
        let text = flatten(&doc, &PlacementEngine::new(10.0));
        assert_eq!(text, "G\nbrand new\n\nlyrics\n");
    }

    #[test]
    fn test_multibyte_chord_width_counts_chars() {
        let doc = doc_with("x", &[(0, "C°", 0.0), (0, "G", 30.0)]);
        let engine = PlacementEngine::new(10.0);
        assert_eq!(chord_line(&doc.lines()[0], &engine), "C° G");
    }

    #[test]
    fn test_buffer_target() {
        let mut target = BufferTarget::default();
        target.deliver("abc").unwrap();
        assert_eq!(target.delivered, ["abc"]);
    }
}
