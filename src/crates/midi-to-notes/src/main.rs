use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufWriter};
use std::path::PathBuf;

use midi_to_notes::{MidiData, OutputFormat, OutputFormatter};

#[derive(Parser, Debug)]
#[command(name = "midi-to-notes")]
#[command(about = "Convert MIDI files to note/duration text", long_about = None)]
struct Args {
    /// Path to the MIDI file (default: read one line from stdin)
    midi: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Prepend a `bpm <N>` line taken from the first tempo event
    #[arg(long)]
    tempo: bool,

    /// Only convert these tracks (0-based, repeatable)
    #[arg(short, long = "track")]
    tracks: Vec<usize>,

    /// Suppress informational messages (only errors)
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.quiet, args.verbose);

    let midi_path = match args.midi {
        Some(path) => path,
        None => read_path_from_stdin()?,
    };

    log::info!("Processing MIDI file: {}", midi_path.display());
    let midi_data = MidiData::from_file(&midi_path)?;
    log::info!(
        "{} tracks, {} ticks per beat",
        midi_data.tracks.len(),
        midi_data.ticks_per_beat.get()
    );

    let tracks = midi_data.select_tracks(&args.tracks)?;
    let formatter = OutputFormatter::new(args.format, args.tempo);

    match args.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            formatter.write(&midi_data, tracks, &mut out)?;
            log::info!("Output saved to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            formatter.write(&midi_data, tracks, &mut out)?;
        }
    }

    Ok(())
}

fn init_logging(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

/// Read the MIDI path as a single line typed on stdin
fn read_path_from_stdin() -> Result<PathBuf> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read MIDI file path from stdin")?;

    path_from_line(&line)
}

/// Only the line terminator is stripped; other whitespace is part of the path
fn path_from_line(line: &str) -> Result<PathBuf> {
    let path = line.trim_end_matches(['\r', '\n']);
    if path.is_empty() {
        anyhow::bail!("No MIDI file path given");
    }
    Ok(PathBuf::from(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_line_keeps_inner_whitespace() {
        assert_eq!(path_from_line(" song.mid\n").unwrap(), PathBuf::from(" song.mid"));
        assert_eq!(path_from_line("my song.mid \r\n").unwrap(), PathBuf::from("my song.mid "));
        assert_eq!(path_from_line("song.mid").unwrap(), PathBuf::from("song.mid"));
    }

    #[test]
    fn test_empty_path_line() {
        assert!(path_from_line("\n").is_err());
        assert!(path_from_line("").is_err());
    }
}
