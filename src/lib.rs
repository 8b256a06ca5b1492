pub mod api;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod persist;
pub mod placement;
pub mod session;
pub mod tonal;

pub use api::{chord_sheet, lock_lyrics, session_from_json};
pub use config::Config;
pub use document::{ChordPlacement, Document, Line, LineId, PlacementId};
pub use error::*;
pub use export::{chord_line, flatten, BufferTarget, ExportTarget};
pub use persist::{FileStore, MemoryStore, SessionRecord, SessionStore, SESSION_KEY};
pub use placement::{PlacementEngine, DEFAULT_CHAR_WIDTH};
pub use session::{EditorMode, Key, Notice, SaveStatus, Session};
pub use tonal::{diatonic_chords, transpose};
