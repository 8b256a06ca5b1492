//! # Tonal Model
//!
//! Fixed 12-note chromatic space spelled with sharps only.
//!
//! ## Sub-modules
//! - `note` - [`Note`], [`Quality`], [`Chord`]
//! - `scale` - [`ScaleType`], [`Scale`], diatonic and chromatic chord sets
//! - `transpose` - semitone transposition of chord names
//!
//! ## Example
//! ```rust
//! use chordsheet::tonal::{diatonic_chords, transpose, Note, ScaleType};
//!
//! let d: Note = "D".parse().unwrap();
//! let chords = diatonic_chords(d, ScaleType::Major);
//! assert_eq!(chords[4].name(), "A");
//! assert_eq!(transpose(&chords[4].name(), -2), "G");
//! ```

mod note;
mod scale;
mod transpose;

pub use note::{Chord, Note, Quality, NOTE_NAMES};
pub use scale::{chromatic_chords, diatonic_chords, Scale, ScaleType};
pub use transpose::{split_root, transpose};
