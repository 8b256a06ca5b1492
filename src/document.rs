//! # Document Model
//!
//! An ordered sequence of lyric lines, each carrying free-floating chord
//! placements anchored at a pixel offset.
//!
//! ## Type Hierarchy
//! ```text
//! Document
//!   ├── lyrics: String            (authoritative in lyrics mode)
//!   ├── next_placement_id         (monotonic, never reused)
//!   └── Vec<Line>                 (authoritative in placement mode)
//!         ├── id: LineId          (index at the last lock)
//!         ├── text: String
//!         └── Vec<ChordPlacement> (unordered)
//!               ├── id: PlacementId
//!               ├── text: String  (chord name, owned copy)
//!               └── offset: f64   (pixels from the line's left edge)
//! ```
//!
//! The document itself does not know which representation is authoritative;
//! [`Session`](crate::Session) tracks the editor mode and calls
//! [`Document::materialize_lines`] / [`Document::join_lines`] on transitions.
//!
//! ## Line identity
//! Lines are matched to lyric segments by index. Re-locking after inserting a
//! line in the middle of the lyrics keeps each placement on the same index,
//! which is now a different lyric.

use crate::error::ChordSheetError;
use crate::tonal::transpose;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub type LineId = usize;
pub type PlacementId = u64;

/// A chord stamped onto a line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordPlacement {
    pub id: PlacementId,
    pub text: String,
    pub offset: f64,
}

impl ChordPlacement {
    /// Export order: by offset, ties by creation order.
    fn export_cmp(&self, other: &ChordPlacement) -> Ordering {
        self.offset
            .total_cmp(&other.offset)
            .then(self.id.cmp(&other.id))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Line {
    pub id: LineId,
    pub text: String,
    pub chords: Vec<ChordPlacement>,
}

impl Line {
    pub fn new(id: LineId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            chords: Vec::new(),
        }
    }

    /// Placements ordered left to right.
    pub fn sorted_chords(&self) -> Vec<&ChordPlacement> {
        let mut sorted: Vec<&ChordPlacement> = self.chords.iter().collect();
        sorted.sort_by(|a, b| a.export_cmp(b));
        sorted
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    lyrics: String,
    lines: Vec<Line>,
    next_placement_id: PlacementId,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a document from stored parts. Placement ids resume above the
    /// largest id found.
    pub fn from_parts(lyrics: String, lines: Vec<Line>) -> Self {
        let next_placement_id = lines
            .iter()
            .flat_map(|line| line.chords.iter())
            .map(|c| c.id + 1)
            .max()
            .unwrap_or(0);
        Self {
            lyrics,
            lines,
            next_placement_id,
        }
    }

    pub fn lyrics(&self) -> &str {
        &self.lyrics
    }

    pub fn set_lyrics(&mut self, text: impl Into<String>) {
        self.lyrics = text.into();
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.iter().find(|l| l.id == id)
    }

    fn line_mut(&mut self, id: LineId) -> Option<&mut Line> {
        self.lines.iter_mut().find(|l| l.id == id)
    }

    pub fn placement_count(&self) -> usize {
        self.lines.iter().map(|l| l.chords.len()).sum()
    }

    /// Split the lyrics into lines, one per `\n`-separated segment.
    ///
    /// Segment `i` reuses line `i` (and its placements) when one exists.
    /// Lines past the new segment count are dropped with their placements.
    /// A trailing newline yields a trailing empty line.
    pub fn materialize_lines(&mut self) {
        let segments: Vec<&str> = self.lyrics.split('\n').collect();
        let mut previous = std::mem::take(&mut self.lines).into_iter();

        self.lines = segments
            .iter()
            .enumerate()
            .map(|(i, segment)| match previous.next() {
                Some(mut line) => {
                    line.id = i;
                    line.text = segment.to_string();
                    line
                }
                None => Line::new(i, *segment),
            })
            .collect();
    }

    /// Join line texts with `\n` back into the lyrics. Lines and their
    /// placements stay in memory.
    pub fn join_lines(&mut self) {
        self.lyrics = self
            .lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
    }

    /// Append a placement with a fresh id. Duplicates are allowed; NaN and
    /// infinite offsets are rejected.
    pub fn add_placement(
        &mut self,
        line_id: LineId,
        text: &str,
        offset: f64,
    ) -> Result<PlacementId, ChordSheetError> {
        if text.is_empty() {
            return Err(ChordSheetError::EmptyChord);
        }
        if !offset.is_finite() {
            return Err(ChordSheetError::InvalidOffset(offset));
        }
        let id = self.next_placement_id;
        let line = self
            .line_mut(line_id)
            .ok_or(ChordSheetError::UnknownLine(line_id))?;
        line.chords.push(ChordPlacement {
            id,
            text: text.to_string(),
            offset,
        });
        self.next_placement_id += 1;
        Ok(id)
    }

    /// Remove a placement. Returns whether anything was removed; a missing
    /// line or placement is not an error.
    pub fn remove_placement(&mut self, line_id: LineId, placement_id: PlacementId) -> bool {
        let Some(line) = self.line_mut(line_id) else {
            return false;
        };
        let before = line.chords.len();
        line.chords.retain(|c| c.id != placement_id);
        line.chords.len() != before
    }

    /// Rewrite every placement's chord text by `semitones`.
    pub fn transpose_placements(&mut self, semitones: i32) {
        for placement in self.lines.iter_mut().flat_map(|l| l.chords.iter_mut()) {
            placement.text = transpose(&placement.text, semitones);
        }
    }
}
