//! Audio hosts for the alarm indicator
//!
//! An `AudioHost` hands out a `ToneOutput` on demand. The output is the
//! acquired resource: dropping it releases whatever the host opened.

use std::io::{IsTerminal, Write};

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle};
use weighmaster_types::AudioError;

use crate::config::AudioKind;
use crate::indicator::Tone;

/// Source of audio outputs
pub trait AudioHost {
    /// Acquire an output. Called lazily, again after every release.
    fn open(&mut self) -> Result<Box<dyn ToneOutput>, AudioError>;
}

/// An open audio output
pub trait ToneOutput {
    fn play(&mut self, tone: &Tone) -> Result<(), AudioError>;
}

/// Build the host selected in configuration
pub fn host_for(kind: AudioKind) -> Box<dyn AudioHost> {
    match kind {
        AudioKind::Synth => Box::new(SynthAudio),
        AudioKind::Bell => Box::new(TerminalBell),
        AudioKind::Silent => Box::new(SilentAudio),
    }
}

/// Sine tone source for one ping
pub fn tone_source(tone: &Tone) -> impl Source<Item = f32> + Send + 'static {
    SineWave::new(tone.frequency_hz)
        .take_duration(tone.duration)
        .amplify(tone.gain)
}

/// Synthesizes the ping on the default output device
#[derive(Debug, Default)]
pub struct SynthAudio;

/// Holds the device stream open; dropping it closes the device.
struct SynthOutput {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl AudioHost for SynthAudio {
    fn open(&mut self) -> Result<Box<dyn ToneOutput>, AudioError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| AudioError::Unavailable(e.to_string()))?;
        Ok(Box::new(SynthOutput {
            _stream: stream,
            handle,
        }))
    }
}

impl ToneOutput for SynthOutput {
    fn play(&mut self, tone: &Tone) -> Result<(), AudioError> {
        self.handle
            .play_raw(tone_source(tone))
            .map_err(|e| AudioError::Playback(e.to_string()))
    }
}

/// Rings the terminal bell on stderr. Pitch and length are up to the terminal.
#[derive(Debug, Default)]
pub struct TerminalBell;

struct BellOutput {
    out: std::io::Stderr,
}

impl AudioHost for TerminalBell {
    fn open(&mut self) -> Result<Box<dyn ToneOutput>, AudioError> {
        let out = std::io::stderr();
        if !out.is_terminal() {
            return Err(AudioError::Unavailable("stderr is not a terminal".to_string()));
        }
        Ok(Box::new(BellOutput { out }))
    }
}

impl ToneOutput for BellOutput {
    fn play(&mut self, _tone: &Tone) -> Result<(), AudioError> {
        let mut lock = self.out.lock();
        lock.write_all(b"\x07")?;
        lock.flush()?;
        Ok(())
    }
}

/// Accepts tones and discards them
#[derive(Debug, Default)]
pub struct SilentAudio;

struct SilentOutput;

impl AudioHost for SilentAudio {
    fn open(&mut self) -> Result<Box<dyn ToneOutput>, AudioError> {
        Ok(Box::new(SilentOutput))
    }
}

impl ToneOutput for SilentOutput {
    fn play(&mut self, _tone: &Tone) -> Result<(), AudioError> {
        Ok(())
    }
}
