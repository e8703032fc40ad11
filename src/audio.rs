//! This module handles the audio playback for the game.
//!
//! There are no sound assets: the one sound the game makes, the victory
//! melody, is synthesized as a staggered mix of decaying sine notes and
//! queued to the device in a single push. If the audio device fails to
//! initialize, the audio system is disabled and every call silently does
//! nothing.

use anyhow::{anyhow, Result};
use sdl2::audio::{AudioQueue, AudioSpecDesired};
use sdl2::AudioSubsystem;

use crate::constants::audio::{NOTE_SECS, NOTE_STAGGER_SECS, SAMPLE_RATE, VICTORY_NOTES};

/// Gain each note starts at.
const NOTE_GAIN: f32 = 0.3;
/// Gain each note has decayed to by its end.
const NOTE_FLOOR: f32 = 0.01;

/// The audio system for the game.
pub struct Audio {
    queue: Option<AudioQueue<i16>>,
}

impl Audio {
    /// Creates a new `Audio` instance.
    ///
    /// If the device cannot be opened, the audio system is disabled and all
    /// playback calls become no-ops.
    pub fn new(subsystem: &AudioSubsystem) -> Self {
        match Self::try_new(subsystem) {
            Ok(audio) => audio,
            Err(e) => {
                tracing::warn!("Failed to initialize audio: {}. Audio will be disabled.", e);
                Self { queue: None }
            }
        }
    }

    fn try_new(subsystem: &AudioSubsystem) -> Result<Self> {
        let spec = AudioSpecDesired {
            freq: Some(SAMPLE_RATE),
            channels: Some(1),
            samples: Some(1024),
        };

        let queue = subsystem
            .open_queue::<i16, _>(None, &spec)
            .map_err(|e| anyhow!("Failed to open audio queue: {}", e))?;
        queue.resume();

        Ok(Self { queue: Some(queue) })
    }

    /// Returns `true` if the audio device could not be opened.
    pub fn is_disabled(&self) -> bool {
        self.queue.is_none()
    }

    /// Queues the victory melody, fire-and-forget.
    pub fn play_victory(&mut self) {
        let Some(queue) = &self.queue else { return };

        let samples = render_melody(SAMPLE_RATE);
        if let Err(e) = queue.queue_audio(&samples) {
            tracing::warn!("Could not queue victory melody: {}", e);
        }
    }
}

/// Renders the victory melody into a mono sample buffer.
///
/// Each note is a sine at its fixed frequency, fading exponentially from
/// `NOTE_GAIN` to `NOTE_FLOOR` across its duration; note onsets are staggered
/// so the melody overlaps into an ascending arpeggio.
pub fn render_melody(sample_rate: i32) -> Vec<i16> {
    let sr = sample_rate as f32;
    let total_secs = NOTE_STAGGER_SECS * (VICTORY_NOTES.len() - 1) as f32 + NOTE_SECS;
    let mut mix = vec![0.0f32; (total_secs * sr).ceil() as usize];

    for (index, freq) in VICTORY_NOTES.iter().enumerate() {
        let onset = (index as f32 * NOTE_STAGGER_SECS * sr) as usize;
        let note_samples = (NOTE_SECS * sr) as usize;

        for n in 0..note_samples {
            let t = n as f32 / sr;
            let gain = NOTE_GAIN * (NOTE_FLOOR / NOTE_GAIN).powf(t / NOTE_SECS);
            match mix.get_mut(onset + n) {
                Some(slot) => *slot += (std::f32::consts::TAU * freq * t).sin() * gain,
                None => break,
            }
        }
    }

    mix.into_iter()
        .map(|sample| (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16)
        .collect()
}
