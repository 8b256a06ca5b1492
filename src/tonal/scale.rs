//! Diatonic chord derivation for major and natural minor scales.

use super::note::{Chord, Note, Quality};
use crate::error::ChordSheetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    #[default]
    Major,
    Minor,
}

impl ScaleType {
    /// Semitone offsets of the seven degrees above the root.
    pub fn intervals(self) -> [u8; 7] {
        match self {
            ScaleType::Major => [0, 2, 4, 5, 7, 9, 11],
            ScaleType::Minor => [0, 2, 3, 5, 7, 8, 10],
        }
    }

    /// Triad quality built on each degree.
    pub fn qualities(self) -> [Quality; 7] {
        use Quality::*;
        match self {
            ScaleType::Major => [Major, Minor, Minor, Major, Major, Minor, Diminished],
            ScaleType::Minor => [Minor, Diminished, Major, Minor, Minor, Major, Major],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::Minor => "minor",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleType {
    type Err = ChordSheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" | "maj" => Ok(ScaleType::Major),
            "minor" | "min" => Ok(ScaleType::Minor),
            _ => Err(ChordSheetError::InvalidScaleType(s.to_string())),
        }
    }
}

/// A key: root note plus scale type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scale {
    pub root: Note,
    pub scale_type: ScaleType,
}

impl Scale {
    pub fn new(root: Note, scale_type: ScaleType) -> Self {
        Self { root, scale_type }
    }

    pub fn chords(&self) -> [Chord; 7] {
        diatonic_chords(self.root, self.scale_type)
    }
}

/// The seven chords built on the degrees of a scale, in degree order.
///
/// Chord `i` has root `(root + intervals[i]) mod 12` and the quality the
/// scale type assigns to degree `i`.
///
/// # Example
/// ```
/// use chordsheet::tonal::{diatonic_chords, Note, ScaleType};
///
/// let names: Vec<String> = diatonic_chords(Note::C, ScaleType::Major)
///     .iter()
///     .map(|c| c.name())
///     .collect();
/// assert_eq!(names, ["C", "Dm", "Em", "F", "G", "Am", "Bdim"]);
/// ```
pub fn diatonic_chords(root: Note, scale_type: ScaleType) -> [Chord; 7] {
    let intervals = scale_type.intervals();
    let qualities = scale_type.qualities();
    std::array::from_fn(|i| Chord::new(root.transpose(intervals[i] as i32), qualities[i]))
}

/// The 24-chord palette: every root as a major chord, then every root as a
/// minor chord, in chromatic order from C.
pub fn chromatic_chords() -> Vec<Chord> {
    let majors = Note::all().map(|n| Chord::new(n, Quality::Major));
    let minors = Note::all().map(|n| Chord::new(n, Quality::Minor));
    majors.chain(minors).collect()
}
