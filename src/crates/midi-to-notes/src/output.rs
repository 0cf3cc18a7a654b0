use anyhow::{Context, Result};
use notes_core::{reconstruct_with_summary, NoteEvent, Reconstructor, TrackSummary};
use serde::Serialize;
use std::io::Write;

use crate::midi::{MidiData, TrackData};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `<pitch> <octave> <duration>` line per note
    Text,
    /// A single JSON document with every track
    Json,
}

pub struct OutputFormatter {
    format: OutputFormat,
    emit_tempo: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, emit_tempo: bool) -> Self {
        Self { format, emit_tempo }
    }

    /// Reconstruct the given tracks and write them to `out`
    pub fn write<'a, W, I>(&self, data: &MidiData, tracks: I, out: &mut W) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = &'a TrackData>,
    {
        match self.format {
            OutputFormat::Text => self.write_text(data, tracks, out),
            OutputFormat::Json => self.write_json(data, tracks, out),
        }
    }

    /// Build the whole output in memory
    pub fn build_output(&self, data: &MidiData) -> Result<String> {
        let mut buf = Vec::new();
        self.write(data, &data.tracks, &mut buf)?;
        String::from_utf8(buf).context("Output was not valid UTF-8")
    }

    /// Lines go out as soon as each note closes
    fn write_text<'a, W, I>(&self, data: &MidiData, tracks: I, out: &mut W) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = &'a TrackData>,
    {
        if self.emit_tempo {
            writeln!(out, "bpm {}", data.bpm.round() as u32).context("Failed to write output")?;
        }

        for track in tracks {
            let mut reconstructor = Reconstructor::new(data.ticks_per_beat);
            for message in &track.messages {
                if let Some(event) = reconstructor.feed(message) {
                    log::trace!("track {}: {}", track.index, event);
                    writeln!(out, "{}", event).context("Failed to write output")?;
                }
            }
            log_summary(track, &reconstructor.finish());
        }

        out.flush().context("Failed to flush output")
    }

    fn write_json<'a, W, I>(&self, data: &MidiData, tracks: I, out: &mut W) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = &'a TrackData>,
    {
        #[derive(Serialize)]
        struct JsonTrack<'t> {
            index: usize,
            name: Option<&'t str>,
            notes: Vec<NoteEvent>,
        }

        #[derive(Serialize)]
        struct JsonOutput<'t> {
            ticks_per_beat: u32,
            bpm: f64,
            tracks: Vec<JsonTrack<'t>>,
        }

        let tracks = tracks
            .into_iter()
            .map(|track| {
                let (notes, summary) = reconstruct_with_summary(&track.messages, data.ticks_per_beat);
                log_summary(track, &summary);
                JsonTrack {
                    index: track.index,
                    name: track.name.as_deref(),
                    notes,
                }
            })
            .collect();

        let output = JsonOutput {
            ticks_per_beat: data.ticks_per_beat.get(),
            bpm: data.bpm,
            tracks,
        };

        serde_json::to_writer_pretty(&mut *out, &output).context("Failed to serialize JSON output")?;
        writeln!(out).context("Failed to write output")?;
        out.flush().context("Failed to flush output")
    }
}

fn log_summary(track: &TrackData, summary: &TrackSummary) {
    log::debug!(
        "track {}{}: {} messages, {} notes, {} orphan releases, {} replaced starts, {} unclosed",
        track.index,
        track.name.as_deref().map(|n| format!(" ({})", n)).unwrap_or_default(),
        summary.messages,
        summary.emitted,
        summary.orphan_releases,
        summary.replaced_starts,
        summary.unclosed,
    );
}
