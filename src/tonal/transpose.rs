//! Transposition of chord names by a signed semitone offset.
//!
//! A chord name is split into a leading root token and an opaque remainder.
//! Only the root moves; the remainder (`m`, `7sus4`, `/E`, anything) is copied
//! through verbatim. Names without a recognisable root come back unchanged.

use super::note::{Note, NOTE_NAMES};

/// Natural letter to semitones above C
fn letter_to_semitone(letter: char) -> Option<i32> {
    match letter {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' => Some(11),
        _ => None,
    }
}

/// Split a chord name into its root note and the quality remainder.
///
/// The root token is one letter A-G optionally followed by `#`. A sharp that
/// has no canonical spelling (`E#`, `B#`) makes the whole name unparseable.
///
/// ```
/// use chordsheet::tonal::split_root;
///
/// let (root, rest) = split_root("F#m7").unwrap();
/// assert_eq!(root.name(), "F#");
/// assert_eq!(rest, "m7");
/// assert!(split_root("X7sus4").is_none());
/// ```
pub fn split_root(name: &str) -> Option<(Note, &str)> {
    let letter = name.chars().next()?;
    let natural = letter_to_semitone(letter)?;
    // letter is ASCII, so byte 1 is a char boundary
    let after_letter = &name[1..];

    match after_letter.strip_prefix('#') {
        Some(rest) => {
            let token = &name[..2];
            if NOTE_NAMES.contains(&token) {
                Some((Note::from_index(natural + 1), rest))
            } else {
                None
            }
        }
        None => Some((Note::from_index(natural), after_letter)),
    }
}

/// Transpose a chord or note name by `semitones`, wrapping modulo 12.
///
/// ```
/// use chordsheet::tonal::transpose;
///
/// assert_eq!(transpose("G", 2), "A");
/// assert_eq!(transpose("Am7", -3), "F#m7");
/// assert_eq!(transpose("X7sus4", 5), "X7sus4");
/// ```
pub fn transpose(name: &str, semitones: i32) -> String {
    match split_root(name) {
        Some((root, rest)) => {
            let mut out = String::with_capacity(name.len() + 1);
            out.push_str(root.transpose(semitones).name());
            out.push_str(rest);
            out
        }
        None => name.to_string(),
    }
}
