//! # Editing Session
//!
//! The single owner of all editor state. Every mutation is a method on
//! [`Session`] and completes synchronously, so observers never see a
//! half-applied change.
//!
//! ## State
//! Two orthogonal fields drive the editor:
//! - [`EditorMode`] - whether the lyrics blob or the line sequence is authoritative
//! - armed chord - the chord the next click will stamp, if any
//!
//! ## Transitions
//! ```text
//!            lock()                       arm_chord(c) / arm_degree(n)
//!   Lyrics ─────────▶ Placement      None ◀──────────────────▶ Some(c)
//!          ◀─────────                     ◀── disarm() / Escape
//!            unlock()
//!
//!   clear(): any ─▶ Lyrics, None, empty document, C major
//! ```
//!
//! ## Example
//! ```rust
//! use chordsheet::{Key, Session};
//!
//! let mut session = Session::new();
//! session.set_lyrics("Hello world")?;
//! session.lock();
//! session.handle_key(Key::Digit(5), false); // arm G in C major
//! session.stamp(0, 0.0)?;
//! session.transpose_all(2);
//! assert_eq!(session.root().name(), "D");
//! assert_eq!(session.document().lines()[0].chords[0].text, "A");
//! # Ok::<(), chordsheet::ChordSheetError>(())
//! ```

use crate::document::{Document, LineId, PlacementId};
use crate::error::ChordSheetError;
use crate::export::{flatten, ExportTarget};
use crate::persist::{SessionRecord, SessionStore, SESSION_KEY};
use crate::placement::PlacementEngine;
use crate::tonal::{diatonic_chords, Chord, Note, Scale, ScaleType};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditorMode {
    /// The lyrics blob is edited as free text.
    #[default]
    #[serde(rename = "lyrics")]
    Lyrics,
    /// Lines are locked and chords are being placed.
    #[serde(rename = "chords")]
    Placement,
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::Lyrics => f.write_str("lyrics"),
            EditorMode::Placement => f.write_str("chords"),
        }
    }
}

/// Outcome of the most recent save.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SaveStatus {
    #[default]
    Unsaved,
    Saved,
    Failed(String),
}

/// A transient message for the user, e.g. a failed clipboard copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
}

/// Keys the editor reacts to outside text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Escape,
    Other,
}

impl Key {
    /// Map a key name as reported by the input layer ("1", "Escape", ...).
    pub fn from_name(name: &str) -> Key {
        match name {
            "Escape" | "Esc" => Key::Escape,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Key::Digit(c as u8 - b'0'),
                    _ => Key::Other,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    document: Document,
    scale: Scale,
    mode: EditorMode,
    armed: Option<Chord>,
    engine: PlacementEngine,
    save_status: SaveStatus,
    notice: Option<Notice>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engine(engine: PlacementEngine) -> Self {
        Self {
            engine,
            ..Self::default()
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn root(&self) -> Note {
        self.scale.root
    }

    pub fn scale_type(&self) -> ScaleType {
        self.scale.scale_type
    }

    pub fn armed(&self) -> Option<Chord> {
        self.armed
    }

    pub fn engine(&self) -> &PlacementEngine {
        &self.engine
    }

    pub fn save_status(&self) -> &SaveStatus {
        &self.save_status
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Take the pending notice, leaving none.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn set_char_width(&mut self, char_width: f64) {
        self.engine.set_char_width(char_width);
    }

    pub fn set_scale(&mut self, root: Note, scale_type: ScaleType) {
        self.scale = Scale::new(root, scale_type);
    }

    /// The seven chords of the current key.
    pub fn diatonic_chords(&self) -> [Chord; 7] {
        diatonic_chords(self.scale.root, self.scale.scale_type)
    }

    fn require(&self, mode: EditorMode, operation: &'static str) -> Result<(), ChordSheetError> {
        if self.mode == mode {
            Ok(())
        } else {
            Err(ChordSheetError::WrongMode {
                operation,
                expected: mode,
            })
        }
    }

    /// Replace the lyrics blob. Lyrics mode only.
    pub fn set_lyrics(&mut self, text: impl Into<String>) -> Result<(), ChordSheetError> {
        self.require(EditorMode::Lyrics, "set lyrics")?;
        self.document.set_lyrics(text);
        Ok(())
    }

    /// Lock the lyrics into lines and switch to placement mode. No-op when
    /// already locked.
    pub fn lock(&mut self) {
        if self.mode == EditorMode::Placement {
            return;
        }
        self.document.materialize_lines();
        self.mode = EditorMode::Placement;
        debug!("Locked {} lines for placement", self.document.lines().len());
    }

    /// Join lines back into the lyrics blob and switch to lyrics mode.
    /// Placements are kept for the next lock. No-op when already unlocked.
    pub fn unlock(&mut self) {
        if self.mode == EditorMode::Lyrics {
            return;
        }
        self.document.join_lines();
        self.mode = EditorMode::Lyrics;
        debug!("Unlocked lyrics ({} bytes)", self.document.lyrics().len());
    }

    /// Place `chord_text` on a line at a pixel offset. Placement mode only.
    pub fn add_placement(
        &mut self,
        line_id: LineId,
        chord_text: &str,
        offset: f64,
    ) -> Result<PlacementId, ChordSheetError> {
        self.require(EditorMode::Placement, "place chords")?;
        self.document.add_placement(line_id, chord_text, offset)
    }

    /// Place the armed chord. The chord stays armed for further stamps.
    pub fn stamp(&mut self, line_id: LineId, offset: f64) -> Result<PlacementId, ChordSheetError> {
        let chord = self.armed.ok_or(ChordSheetError::NothingArmed)?;
        self.add_placement(line_id, &chord.name(), offset)
    }

    /// Remove a placement; absent placements are ignored.
    pub fn remove_placement(&mut self, line_id: LineId, placement_id: PlacementId) -> bool {
        self.document.remove_placement(line_id, placement_id)
    }

    /// Arm `chord`, or disarm it if it is already armed.
    pub fn arm_chord(&mut self, chord: Chord) -> Option<Chord> {
        self.armed = if self.armed == Some(chord) {
            None
        } else {
            Some(chord)
        };
        self.armed
    }

    /// Toggle the diatonic chord at a 1-based degree. Returns false when the
    /// degree does not exist.
    pub fn arm_degree(&mut self, degree: usize) -> bool {
        let chords = self.diatonic_chords();
        match degree.checked_sub(1).and_then(|i| chords.get(i)) {
            Some(chord) => {
                self.arm_chord(*chord);
                true
            }
            None => false,
        }
    }

    pub fn disarm(&mut self) {
        self.armed = None;
    }

    /// Dispatch a key press. Digits are ignored while a text field has focus.
    /// Returns whether the key did anything.
    pub fn handle_key(&mut self, key: Key, text_input_focused: bool) -> bool {
        match key {
            Key::Digit(n) if !text_input_focused => self.arm_degree(n as usize),
            Key::Escape if self.armed.is_some() => {
                self.disarm();
                true
            }
            _ => false,
        }
    }

    /// Move the key, every placement and the armed chord by `semitones`.
    pub fn transpose_all(&mut self, semitones: i32) {
        self.document.transpose_placements(semitones);
        self.scale.root = self.scale.root.transpose(semitones);
        self.armed = self.armed.map(|c| c.transpose(semitones));
        debug!(
            "Transposed {} placements by {} to {}",
            self.document.placement_count(),
            semitones,
            self.scale.root
        );
    }

    /// Discard everything and return to an empty lyrics session in C major.
    pub fn clear(&mut self) {
        self.document = Document::new();
        self.scale = Scale::default();
        self.mode = EditorMode::Lyrics;
        self.armed = None;
        debug!("Cleared session");
    }

    /// The chord sheet text for the current document.
    ///
    /// In lyrics mode the blob is split the way [`Session::lock`] would split
    /// it, so the export shows the current lyrics with index-matched chords.
    pub fn export(&self) -> String {
        match self.mode {
            EditorMode::Placement => flatten(&self.document, &self.engine),
            EditorMode::Lyrics => {
                let mut scratch = self.document.clone();
                scratch.materialize_lines();
                flatten(&scratch, &self.engine)
            }
        }
    }

    /// Deliver the export string to a target. A failure leaves a notice and
    /// does not touch the document.
    pub fn export_to(&mut self, target: &mut dyn ExportTarget) -> Result<(), ChordSheetError> {
        let text = self.export();
        match target.deliver(&text) {
            Ok(()) => {
                self.notice = Some(Notice {
                    message: format!("Sent to {}", target.name()),
                });
                Ok(())
            }
            Err(e) => {
                warn!("Export to {} failed: {}", target.name(), e);
                self.notice = Some(Notice {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Restore from a store. Missing or unreadable data yields a fresh
    /// session using `engine`.
    pub fn restore(store: &dyn SessionStore, engine: PlacementEngine) -> Session {
        let raw = match store.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("No saved session, starting empty");
                return Session::with_engine(engine);
            }
            Err(e) => {
                warn!("{}; starting empty", e);
                return Session::with_engine(engine);
            }
        };
        match SessionRecord::from_json(&raw) {
            Some(record) => {
                info!("Restored session with {} lines", record.lines.len());
                record.into_session(engine)
            }
            None => {
                warn!("Saved session is malformed, starting empty");
                Session::with_engine(engine)
            }
        }
    }

    /// Write the session to a store and record the outcome in
    /// [`Session::save_status`].
    pub fn save(&mut self, store: &mut dyn SessionStore) -> Result<(), ChordSheetError> {
        let result = SessionRecord::from_session(self)
            .to_json()
            .and_then(|json| store.set(SESSION_KEY, &json));
        match &result {
            Ok(()) => self.save_status = SaveStatus::Saved,
            Err(e) => {
                warn!("Save failed: {}", e);
                self.save_status = SaveStatus::Failed(e.to_string());
            }
        }
        result
    }

    pub(crate) fn from_parts(
        document: Document,
        scale: Scale,
        mode: EditorMode,
        engine: PlacementEngine,
    ) -> Session {
        Session {
            document,
            scale,
            mode,
            engine,
            ..Session::default()
        }
    }
}
