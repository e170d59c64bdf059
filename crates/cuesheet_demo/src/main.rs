// SPDX-License-Identifier: MIT OR Apache-2.0
//! Headless host for the cuesheet sequencer.
//!
//! Plays one pass of the range while recording a noisy signal, bakes and
//! smooths the take, then steps through the range frame by frame and prints
//! the values the baked events produce as CSV.
//!
//! Usage: `cuesheet [settings.ron]`

use clap::Parser;
use cuesheet_sequencer::{FrameRange, Sequencer, SequencerConfig, Target, TrackId};
use std::f64::consts::TAU;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Host ticks per simulated second
const TICK_RATE: f64 = 60.0;
/// Log directives used when `RUST_LOG` is unset; targets are crate names
const DEFAULT_FILTER: &str = "cuesheet_sequencer=debug,cuesheet=info";

#[derive(Parser, Debug)]
#[command(name = "cuesheet", version, about = "Record, smooth and export one pass of a take")]
struct Cli {
    /// Sequencer settings in RON; plays frames 0..=60 at 30 fps when omitted.
    settings: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting cuesheet v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli.settings) {
        tracing::error!("Demo failed: {e}");
        std::process::exit(1);
    }
}

fn run(settings: Option<PathBuf>) -> cuesheet_sequencer::Result<()> {
    let config = match settings {
        Some(path) => SequencerConfig::load(&path)?,
        None => SequencerConfig {
            range: FrameRange::new(0, 60),
            ..SequencerConfig::default()
        },
    };
    let mut sequencer = Sequencer::with_config(&config)?;

    let gain = Target::new(0.0);
    let offset = [Target::new(0.0), Target::new(0.0)];
    let gain_track = sequencer.add_track("Gain", gain.clone());
    let offset_track = sequencer.add_track("Offset", offset.clone());

    sequencer.record(&gain);
    sequencer.record_track(offset_track);

    capture_pass(&mut sequencer, &gain, &offset);

    for id in [gain_track, offset_track] {
        sequencer.filter_track(id);
        log_events(&sequencer, id);
    }

    println!("frame,gain,offset_x,offset_y");
    for frame in sequencer.frames() {
        println!(
            "{frame},{:.4},{:.4},{:.4}",
            gain.get(),
            offset[0].get(),
            offset[1].get()
        );
    }
    Ok(())
}

/// Play until the loop wraps, writing a signal into the targets every tick
fn capture_pass(sequencer: &mut Sequencer, gain: &Target, offset: &[Target; 2]) {
    let range = sequencer.range();
    let pass_seconds = range.frame_count() as f64 / f64::from(sequencer.fps());
    let max_ticks = (pass_seconds * TICK_RATE * 2.0).ceil() as u32 + 1;

    sequencer.update(0.0);
    sequencer.toggle();
    for tick in 1..=max_ticks {
        let time = f64::from(tick) / TICK_RATE;
        gain.set(signal(time, 0.0, tick));
        offset[0].set(signal(time, TAU / 4.0, tick.wrapping_add(17)));
        offset[1].set(signal(time, TAU / 2.0, tick.wrapping_add(91)));
        sequencer.update(time);

        if !sequencer.is_recording(gain) {
            tracing::info!("Captured one pass in {} ticks", tick);
            break;
        }
    }
    sequencer.toggle();
}

fn log_events(sequencer: &Sequencer, id: TrackId) {
    let Some(track) = sequencer.track(id) else {
        return;
    };
    for (event, name) in track.events().iter().zip(track.arity().component_names()) {
        tracing::info!(
            "{}.{}: frames {}..={}, {} keyframes",
            track.label,
            name,
            event.time(),
            event.end(),
            event.keyframes().len()
        );
    }
}

/// Half-hertz sine with deterministic jitter
fn signal(time: f64, phase: f64, seed: u32) -> f32 {
    let jitter = f64::from((seed.wrapping_mul(2_654_435_761) >> 16) % 1000) / 1000.0 - 0.5;
    ((time * TAU * 0.5 + phase).sin() + jitter * 0.2) as f32
}
