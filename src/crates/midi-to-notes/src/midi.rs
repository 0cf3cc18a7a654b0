use anyhow::{Context, Result};
use midly::{MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind};
use notes_core::{MessageKind, TicksPerBeat, TrackMessage};
use std::path::Path;

/// Default tempo: 120 BPM = 500000 microseconds per beat
const DEFAULT_TEMPO: u32 = 500_000;

#[derive(Debug, Clone)]
pub struct TrackData {
    pub index: usize,
    pub name: Option<String>,
    pub messages: Vec<TrackMessage>,
}

#[derive(Debug, Clone)]
pub struct MidiData {
    pub ticks_per_beat: TicksPerBeat,
    /// Tempo of the first Tempo event in the file. Only reported, never
    /// used for timing.
    pub bpm: f64,
    pub tracks: Vec<TrackData>,
}

impl MidiData {
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read MIDI file: {}", path.display()))?;

        Self::from_bytes(&data)
            .with_context(|| format!("Failed to load MIDI file: {}", path.display()))
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let smf = Smf::parse(data).context("Failed to parse MIDI file")?;

        let ticks_per_beat = Self::timing_to_ticks_per_beat(smf.header.timing)?;
        let tempo = Self::extract_tempo(&smf);
        let bpm = 60_000_000.0 / tempo as f64;

        let tracks = smf
            .tracks
            .iter()
            .enumerate()
            .map(|(index, track)| TrackData {
                index,
                name: track_name(track),
                messages: track.iter().map(adapt_event).collect(),
            })
            .collect();

        Ok(MidiData {
            ticks_per_beat,
            bpm,
            tracks,
        })
    }

    /// Tracks to convert, in file order. An empty selection means every
    /// track; indices with no matching track are skipped with a warning,
    /// but a selection that matches nothing at all is an error.
    pub fn select_tracks(&self, indices: &[usize]) -> Result<Vec<&TrackData>> {
        if indices.is_empty() {
            return Ok(self.tracks.iter().collect());
        }

        for &index in indices {
            if index >= self.tracks.len() {
                log::warn!(
                    "Track {} does not exist (file has {} tracks)",
                    index,
                    self.tracks.len()
                );
            }
        }

        let selected: Vec<&TrackData> = self
            .tracks
            .iter()
            .filter(|track| indices.contains(&track.index))
            .collect();

        if selected.is_empty() {
            anyhow::bail!(
                "None of the requested tracks exist (file has {} tracks)",
                self.tracks.len()
            );
        }
        Ok(selected)
    }

    fn timing_to_ticks_per_beat(timing: Timing) -> Result<TicksPerBeat> {
        let ticks = match timing {
            Timing::Metrical(tpb) => u32::from(tpb.as_int()),
            Timing::Timecode(fps, subframe) => {
                // No beat grid in timecode files; assume the default tempo
                let ticks_per_second = fps.as_f32() * subframe as f32;
                let approx = (ticks_per_second * DEFAULT_TEMPO as f32 / 1_000_000.0) as u32;
                log::warn!(
                    "Timecode timing ({} fps, {} ticks/frame); assuming 120 BPM, {} ticks per beat",
                    fps.as_f32(),
                    subframe,
                    approx
                );
                approx
            }
        };

        TicksPerBeat::new(ticks).context("Invalid MIDI header timing")
    }

    fn extract_tempo(smf: &Smf) -> u32 {
        for track in &smf.tracks {
            for event in track {
                if let TrackEventKind::Meta(MetaMessage::Tempo(tempo)) = event.kind {
                    return tempo.as_int();
                }
            }
        }
        DEFAULT_TEMPO
    }
}

/// Narrow a parsed event down to what note reconstruction needs. Channel
/// is discarded: notes are paired per track, by note number only.
fn adapt_event(event: &TrackEvent) -> TrackMessage {
    let kind = match event.kind {
        TrackEventKind::Midi { message, .. } => match message {
            MidiMessage::NoteOn { key, vel } => MessageKind::NoteOn {
                note: key.as_int(),
                velocity: vel.as_int(),
            },
            MidiMessage::NoteOff { key, vel } => MessageKind::NoteOff {
                note: key.as_int(),
                velocity: vel.as_int(),
            },
            _ => MessageKind::Other,
        },
        _ => MessageKind::Other,
    };

    TrackMessage {
        delta_ticks: event.delta.as_int(),
        kind,
    }
}

fn track_name(track: &[TrackEvent]) -> Option<String> {
    track.iter().find_map(|event| match event.kind {
        TrackEventKind::Meta(MetaMessage::TrackName(name)) => {
            let name_str = std::str::from_utf8(name).ok()?;
            // Trim null bytes and padding
            let cleaned = name_str.trim_end_matches('\0').trim();
            (!cleaned.is_empty()).then(|| cleaned.to_string())
        }
        _ => None,
    })
}
