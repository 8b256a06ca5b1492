//! # Session Persistence
//!
//! A session is stored as one JSON record under [`SESSION_KEY`] in a
//! key-value store:
//!
//! ```text
//! {
//!   "scaleRootNote": "C",
//!   "scaleType": "major" | "minor",
//!   "lines": [{ "id": 0, "text": "...", "chords": [{ "id": 0, "text": "G", "offset": 12.5 }] }],
//!   "lyricsBlob": "...",
//!   "mode": "lyrics" | "chords"
//! }
//! ```
//!
//! Missing fields take their defaults (C, major, no lines, empty lyrics,
//! lyrics mode). A record that does not parse at all is treated as absent;
//! restoring never fails.

use crate::document::{Document, Line};
use crate::error::ChordSheetError;
use crate::placement::PlacementEngine;
use crate::session::{EditorMode, Session};
use crate::tonal::{Note, Scale, ScaleType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Store key the session record lives under.
pub const SESSION_KEY: &str = "chordsheet-session";

/// Serialized form of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionRecord {
    pub scale_root_note: String,
    pub scale_type: ScaleType,
    pub lines: Vec<Line>,
    pub lyrics_blob: String,
    pub mode: EditorMode,
}

impl Default for SessionRecord {
    fn default() -> Self {
        Self {
            scale_root_note: Note::C.name().to_string(),
            scale_type: ScaleType::Major,
            lines: Vec::new(),
            lyrics_blob: String::new(),
            mode: EditorMode::Lyrics,
        }
    }
}

impl SessionRecord {
    pub fn from_session(session: &Session) -> Self {
        let document = session.document();
        Self {
            scale_root_note: session.root().name().to_string(),
            scale_type: session.scale_type(),
            lines: document.lines().to_vec(),
            lyrics_blob: document.lyrics().to_string(),
            mode: session.mode(),
        }
    }

    /// Parse a stored record; `None` for anything malformed.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn to_json(&self) -> Result<String, ChordSheetError> {
        serde_json::to_string(self).map_err(|e| ChordSheetError::StoreWrite {
            key: SESSION_KEY.to_string(),
            message: e.to_string(),
        })
    }

    /// Build a session. An unknown root spelling falls back to C.
    pub fn into_session(self, engine: PlacementEngine) -> Session {
        let root = self.scale_root_note.parse().unwrap_or(Note::C);
        let document = Document::from_parts(self.lyrics_blob, self.lines);
        Session::from_parts(document, Scale::new(root, self.scale_type), self.mode, engine)
    }
}

/// A string key-value store the session is persisted to.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, ChordSheetError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ChordSheetError>;
}

/// Keeps values in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ChordSheetError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ChordSheetError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<local data dir>/chordsheet`, or `./chordsheet` when the platform
    /// has no data directory.
    pub fn default_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chordsheet")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, ChordSheetError> {
        match fs::read_to_string(self.path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ChordSheetError::StoreRead {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ChordSheetError> {
        let write_error = |e: std::io::Error| ChordSheetError::StoreWrite {
            key: key.to_string(),
            message: e.to_string(),
        };
        fs::create_dir_all(&self.dir).map_err(write_error)?;
        fs::write(self.path(key), value).map_err(write_error)
    }
}
