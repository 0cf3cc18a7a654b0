//! Note reconstruction for MIDI-to-text transcription
//!
//! This crate turns one track's worth of timed note messages into completed
//! notes. Starts are paired with releases per note number, elapsed ticks are
//! converted to beats, and each length is snapped to the nearest named
//! duration. It knows nothing about MIDI files; callers adapt their parser's
//! output into [`TrackMessage`] values first.
//!
//! # Examples
//!
//! ```
//! use notes_core::{reconstruct, TicksPerBeat, TrackMessage};
//!
//! let track = [
//!     TrackMessage::note_on(0, 60, 100),
//!     TrackMessage::note_off(480, 60),
//! ];
//! let tpb = TicksPerBeat::new(480).unwrap();
//!
//! let lines: Vec<String> = reconstruct(&track, tpb)
//!     .iter()
//!     .map(|note| note.to_string())
//!     .collect();
//! assert_eq!(lines, ["C 4 q"]);
//! ```

pub mod duration;
pub mod error;
pub mod event;
pub mod message;
pub mod pitch;
pub mod reconstruct;
pub mod ticks;

pub use duration::{quantize, DurationSymbol, DURATION_TABLE};
pub use error::{CoreError, Result};
pub use event::NoteEvent;
pub use message::{MessageKind, TrackMessage};
pub use pitch::{resolve, Pitch, NOTE_NAMES};
pub use reconstruct::{reconstruct, reconstruct_with_summary, Reconstructor, TrackSummary};
pub use ticks::TicksPerBeat;
