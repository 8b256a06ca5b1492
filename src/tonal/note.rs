//! Pitch classes and chord symbols in a fixed 12-tone, sharps-only spelling.

use crate::error::ChordSheetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical spellings, indexed by semitones above C.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// One of the twelve pitch classes, stored as semitones above C (0-11).
///
/// Every constructor reduces modulo 12, so an out-of-range pitch class
/// cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Note(u8);

impl Note {
    pub const C: Note = Note(0);

    /// Build a note from any semitone count, wrapping into 0-11.
    pub fn from_index(index: i32) -> Note {
        Note(index.rem_euclid(12) as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.0 as usize]
    }

    /// Move by a signed number of semitones, wrapping around the octave.
    pub fn transpose(self, semitones: i32) -> Note {
        Note::from_index(self.0 as i32 + semitones.rem_euclid(12))
    }

    /// All twelve notes in chromatic order starting from C.
    pub fn all() -> impl Iterator<Item = Note> {
        (0..12).map(Note)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Note {
    type Err = ChordSheetError;

    /// Parse a canonical sharp spelling such as "C" or "F#".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NOTE_NAMES
            .iter()
            .position(|name| *name == trimmed)
            .map(|i| Note(i as u8))
            .ok_or_else(|| ChordSheetError::InvalidNote(s.to_string()))
    }
}

impl Serialize for Note {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Chord quality for the triads the palette offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Major,
    Minor,
    Diminished,
}

impl Quality {
    /// Suffix appended to the root spelling in a chord name.
    pub fn suffix(self) -> &'static str {
        match self {
            Quality::Major => "",
            Quality::Minor => "m",
            Quality::Diminished => "dim",
        }
    }
}

/// A root note plus quality, e.g. `Dm` or `Bdim`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord {
    pub root: Note,
    pub quality: Quality,
}

impl Chord {
    pub fn new(root: Note, quality: Quality) -> Self {
        Self { root, quality }
    }

    /// Display name: root spelling followed by the quality suffix.
    pub fn name(&self) -> String {
        format!("{}{}", self.root.name(), self.quality.suffix())
    }

    pub fn transpose(self, semitones: i32) -> Chord {
        Chord {
            root: self.root.transpose(semitones),
            quality: self.quality,
        }
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root.name(), self.quality.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(Note::from_index(12), Note::C);
        assert_eq!(Note::from_index(-1).name(), "B");
        assert_eq!(Note::from_index(-13).name(), "B");
        assert_eq!(Note::from_index(26).name(), "D");
    }

    #[test]
    fn test_parse_note_names() {
        assert_eq!("C#".parse::<Note>().unwrap().index(), 1);
        assert_eq!(" A ".parse::<Note>().unwrap().index(), 9);
        assert!("Bb".parse::<Note>().is_err());
        assert!("H".parse::<Note>().is_err());
        assert!("".parse::<Note>().is_err());
    }

    #[test]
    fn test_note_transpose() {
        let g: Note = "G".parse().unwrap();
        assert_eq!(g.transpose(2).name(), "A");
        assert_eq!(g.transpose(5).name(), "C");
        assert_eq!(g.transpose(-8).name(), "B");
        // i32::MIN is 4 above a multiple of 12
        assert_eq!(g.transpose(i32::MIN), g.transpose(4));
    }

    #[test]
    fn test_chord_names() {
        let d: Note = "D".parse().unwrap();
        assert_eq!(Chord::new(d, Quality::Major).name(), "D");
        assert_eq!(Chord::new(d, Quality::Minor).name(), "Dm");
        assert_eq!(Chord::new(d, Quality::Diminished).to_string(), "Ddim");
    }

    #[test]
    fn test_note_serde_as_spelling() {
        let json = serde_json::to_string(&Note::from_index(6)).unwrap();
        assert_eq!(json, "\"F#\"");
        let parsed: Note = serde_json::from_str("\"A#\"").unwrap();
        assert_eq!(parsed.index(), 10);
        assert!(serde_json::from_str::<Note>("\"Q\"").is_err());
    }
}
