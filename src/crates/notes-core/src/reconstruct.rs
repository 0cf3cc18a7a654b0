use std::collections::HashMap;

use crate::duration::quantize;
use crate::event::NoteEvent;
use crate::message::TrackMessage;
use crate::pitch::resolve;
use crate::ticks::TicksPerBeat;

/// Counters describing how a track was consumed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackSummary {
    pub messages: usize,
    pub emitted: usize,
    /// Releases with no open note of that pitch
    pub orphan_releases: usize,
    /// Note-ons that overwrote a still-open note of the same pitch
    pub replaced_starts: usize,
    /// Notes still open when the track ended, dropped without output
    pub unclosed: usize,
}

/// Pairs note starts with releases for a single track.
///
/// One open start time is kept per note number; a second start for the
/// same note overwrites the first. Build a fresh reconstructor for every
/// track.
#[derive(Debug)]
pub struct Reconstructor {
    ticks_per_beat: TicksPerBeat,
    absolute_ticks: u64,
    open_notes: HashMap<u8, u64>,
    summary: TrackSummary,
}

impl Reconstructor {
    pub fn new(ticks_per_beat: TicksPerBeat) -> Self {
        Self {
            ticks_per_beat,
            absolute_ticks: 0,
            open_notes: HashMap::new(),
            summary: TrackSummary::default(),
        }
    }

    /// Absolute time of the last message fed, in ticks
    pub fn absolute_ticks(&self) -> u64 {
        self.absolute_ticks
    }

    /// Advance by one message, returning the note it closes, if any
    pub fn feed(&mut self, message: &TrackMessage) -> Option<NoteEvent> {
        self.summary.messages += 1;
        self.absolute_ticks += u64::from(message.delta_ticks);

        if let Some(note) = message.note_started() {
            if self.open_notes.insert(note, self.absolute_ticks).is_some() {
                self.summary.replaced_starts += 1;
            }
            return None;
        }

        let note = message.note_released()?;
        let Some(start) = self.open_notes.remove(&note) else {
            self.summary.orphan_releases += 1;
            return None;
        };

        let duration_ticks = self.absolute_ticks - start;
        let beats = self.ticks_per_beat.to_beats(duration_ticks);

        self.summary.emitted += 1;
        Some(NoteEvent {
            pitch: resolve(note),
            duration: quantize(beats),
            duration_ticks,
        })
    }

    /// End the track. Notes still open are dropped.
    pub fn finish(self) -> TrackSummary {
        TrackSummary {
            unclosed: self.open_notes.len(),
            ..self.summary
        }
    }
}

/// Reconstruct every completed note of a track, in release order
pub fn reconstruct(track: &[TrackMessage], ticks_per_beat: TicksPerBeat) -> Vec<NoteEvent> {
    reconstruct_with_summary(track, ticks_per_beat).0
}

pub fn reconstruct_with_summary(
    track: &[TrackMessage],
    ticks_per_beat: TicksPerBeat,
) -> (Vec<NoteEvent>, TrackSummary) {
    let mut reconstructor = Reconstructor::new(ticks_per_beat);
    let events: Vec<NoteEvent> = track
        .iter()
        .filter_map(|message| reconstructor.feed(message))
        .collect();

    (events, reconstructor.finish())
}
