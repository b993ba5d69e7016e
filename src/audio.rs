//! Sound cues, synthesized once at startup and replayed through rodio.

use fundsp::prelude::*;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, warn};

use crate::error::AudioError;
use crate::session::{Crash, Response, TickReport};

const SAMPLE_RATE: u32 = 44_100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Flap,
    Score,
    Crash,
}

impl Cue {
    /// Sounds implied by one input response.
    pub fn for_response(response: Response) -> Option<Cue> {
        match response {
            Response::Flapped => Some(Cue::Flap),
            _ => None,
        }
    }

    /// Sounds implied by one simulated frame, crash last.
    pub fn for_tick(report: &TickReport) -> impl Iterator<Item = Cue> {
        let score = (report.scored > 0).then_some(Cue::Score);
        let crash = report.crash.map(|_: Crash| Cue::Crash);
        score.into_iter().chain(crash)
    }
}

// ── Synthesis ───────────────────────────────────────────────────────────────

fn render(mut unit: Box<dyn AudioUnit>, seconds: f64) -> Vec<f32> {
    unit.set_sample_rate(SAMPLE_RATE as f64);
    let len = (seconds * SAMPLE_RATE as f64) as usize;
    (0..len).map(|_| unit.get_mono()).collect()
}

/// Falling saw sweep, 400Hz to 80Hz.
fn crash_samples() -> Vec<f32> {
    let freq = lfo(|t: f32| lerp(400.0, 80.0, (t / 0.4).min(1.0)));
    let gain = lfo(|t: f32| lerp(0.15, 0.0, (t / 0.5).min(1.0)));
    render(Box::new((freq >> saw()) * gain), 0.5)
}

/// Quick rising chirp.
fn flap_samples() -> Vec<f32> {
    let freq = lfo(|t: f32| lerp(320.0, 640.0, (t / 0.08).min(1.0)));
    let gain = lfo(|t: f32| lerp(0.12, 0.0, (t / 0.1).min(1.0)));
    render(Box::new((freq >> sine::<f32>()) * gain), 0.1)
}

/// Two-note blip.
fn score_samples() -> Vec<f32> {
    let freq = lfo(|t: f32| if t < 0.06 { 880.0 } else { 1320.0 });
    let gain = lfo(|t: f32| lerp(0.1, 0.0, (t / 0.18).min(1.0)));
    render(Box::new((freq >> square()) * gain), 0.18)
}

// ── Output ──────────────────────────────────────────────────────────────────

/// Open output stream plus the pre-rendered cues.
pub struct Sfx {
    stream: OutputStream,
    flap: Vec<f32>,
    score: Vec<f32>,
    crash: Vec<f32>,
}

impl Sfx {
    pub fn open() -> Result<Self, AudioError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        stream.log_on_drop(false);
        debug!("audio output opened");
        Ok(Self {
            stream,
            flap: flap_samples(),
            score: score_samples(),
            crash: crash_samples(),
        })
    }

    /// Fire and forget.
    pub fn play(&self, cue: Cue) {
        let samples = match cue {
            Cue::Flap => &self.flap,
            Cue::Score => &self.score,
            Cue::Crash => &self.crash,
        };
        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples.clone()));
        sink.detach();
    }
}

/// Sound output that may be muted or unavailable.
pub struct Speaker(Option<Sfx>);

impl Speaker {
    pub fn muted() -> Self {
        Self(None)
    }

    /// Try the default device; fall back to silence.
    pub fn open_or_silent() -> Self {
        match Sfx::open() {
            Ok(sfx) => Self(Some(sfx)),
            Err(e) => {
                warn!(error = %e, "continuing without sound");
                Self(None)
            }
        }
    }

    pub fn play(&self, cue: Cue) {
        if let Some(sfx) = &self.0 {
            sfx.play(cue);
        }
    }
}
