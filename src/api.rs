//! # Public API
//!
//! One-call entry points for embedders and the command-line tool. Interactive
//! editors drive a [`Session`] directly instead.
//!
//! - [`chord_sheet()`] - lyrics plus placements straight to export text
//! - [`session_from_json()`] - parse a stored session record strictly
//! - [`lock_lyrics()`] - start a placement session from a lyrics file
//!
//! ## Typical Usage
//!
//! ```rust
//! use chordsheet::chord_sheet;
//!
//! let text = chord_sheet(
//!     "Amazing grace\nhow sweet the sound",
//!     &[(0, "G", 0.0), (0, "C", 80.0), (1, "D", 40.0)],
//!     10.0,
//! )?;
//! assert_eq!(text, "G       C\nAmazing grace\n    D\nhow sweet the sound\n");
//! # Ok::<(), chordsheet::ChordSheetError>(())
//! ```

use crate::{ChordSheetError, LineId, PlacementEngine, Session, SessionRecord};

/// Lock `lyrics`, place each `(line, chord, offset)` and export.
///
/// # Errors
/// Returns [`ChordSheetError`] if a placement names a missing line, an
/// empty chord or a non-finite offset.
pub fn chord_sheet(
    lyrics: &str,
    placements: &[(LineId, &str, f64)],
    char_width: f64,
) -> Result<String, ChordSheetError> {
    let mut session = lock_lyrics(lyrics, PlacementEngine::new(char_width))?;
    for (line, chord, offset) in placements {
        session.add_placement(*line, chord, *offset)?;
    }
    Ok(session.export())
}

/// A placement session over `lyrics`.
pub fn lock_lyrics(lyrics: &str, engine: PlacementEngine) -> Result<Session, ChordSheetError> {
    let mut session = Session::with_engine(engine);
    session.set_lyrics(lyrics)?;
    session.lock();
    Ok(session)
}

/// Parse a session record, reporting malformed input instead of falling
/// back to an empty session the way [`Session::restore`] does.
///
/// ```rust
/// use chordsheet::{session_from_json, PlacementEngine};
///
/// assert!(session_from_json("{oops", PlacementEngine::default()).is_err());
/// let session = session_from_json(r#"{"scaleRootNote":"E"}"#, PlacementEngine::default())?;
/// assert_eq!(session.root().name(), "E");
/// # Ok::<(), chordsheet::ChordSheetError>(())
/// ```
pub fn session_from_json(json: &str, engine: PlacementEngine) -> Result<Session, ChordSheetError> {
    let record: SessionRecord =
        serde_json::from_str(json).map_err(|e| ChordSheetError::StoreRead {
            key: "session".to_string(),
            message: e.to_string(),
        })?;
    Ok(record.into_session(engine))
}
