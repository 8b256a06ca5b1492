//! # Error Types
//!
//! This module defines all error types for the chord sheet core.
//!
//! None of these are fatal to an editing session. Editing operations return
//! them when a caller breaks a contract (wrong mode, unknown line), and the
//! peripheral features (persistence, export, configuration) return them so the
//! session can degrade to a status flag or notice.
//!
//! ## Usage
//! ```rust
//! use chordsheet::{ChordSheetError, EditorMode, Session};
//!
//! let mut session = Session::new();
//! match session.add_placement(0, "G", 12.0) {
//!     Ok(id) => println!("placed {}", id),
//!     Err(ChordSheetError::WrongMode { expected, .. }) => {
//!         assert_eq!(expected, EditorMode::Placement);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use crate::session::EditorMode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChordSheetError {
    /// An operation was attempted in the wrong editor mode.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::{ChordSheetError, EditorMode};
    /// let err = ChordSheetError::WrongMode {
    ///     operation: "set lyrics",
    ///     expected: EditorMode::Lyrics,
    /// };
    /// assert_eq!(err.to_string(), "Cannot set lyrics outside lyrics mode");
    /// ```
    #[error("Cannot {operation} outside {expected} mode")]
    WrongMode {
        operation: &'static str,
        expected: EditorMode,
    },

    #[error("No line with id {0}")]
    UnknownLine(usize),

    #[error("Chord text must not be empty")]
    EmptyChord,

    #[error("Placement offset must be a finite number of pixels, got {0}")]
    InvalidOffset(f64),

    #[error("No chord is armed")]
    NothingArmed,

    /// A note name that is not one of the twelve sharp spellings.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::ChordSheetError;
    /// let err = ChordSheetError::InvalidNote("H".to_string());
    /// assert_eq!(err.to_string(), "Invalid note name: H");
    /// ```
    #[error("Invalid note name: {0}")]
    InvalidNote(String),

    #[error("Invalid scale type: {0} (expected major or minor)")]
    InvalidScaleType(String),

    #[error("Failed to read '{key}' from store: {message}")]
    StoreRead { key: String, message: String },

    #[error("Failed to write '{key}' to store: {message}")]
    StoreWrite { key: String, message: String },

    #[error("Export to {target} failed: {message}")]
    Export { target: String, message: String },

    #[error("Invalid config: {0}")]
    ConfigError(String),
}
