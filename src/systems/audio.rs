//! Audio system for end-of-session sound playback.
//!
//! This module provides an ECS-based audio system that forwards playback
//! events to the SDL2 audio device wrapper. The device lives in a NonSend
//! resource to respect SDL2's main-thread requirements while staying
//! compatible with the Bevy ECS.

use bevy_ecs::{
    event::{Event, EventReader},
    resource::Resource,
    system::{NonSendMut, Res},
};
use tracing::debug;

use crate::audio::Audio;

/// Resource for tracking audio state
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct AudioState {
    /// Whether audio is currently muted
    pub muted: bool,
}

/// Events for triggering audio playback
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    /// Play the four-note ascending victory melody.
    PlayVictory,
}

/// Non-send resource wrapper for the SDL2 audio device.
pub struct AudioResource(pub Audio);

/// System that processes audio events and plays sounds.
pub fn audio_system(mut audio: NonSendMut<AudioResource>, state: Res<AudioState>, mut events: EventReader<AudioEvent>) {
    for event in events.read() {
        match event {
            AudioEvent::PlayVictory => {
                if !audio.0.is_disabled() && !state.muted {
                    debug!("Playing victory melody");
                    audio.0.play_victory();
                } else {
                    debug!(
                        disabled = audio.0.is_disabled(),
                        muted = state.muted,
                        "Skipping victory melody due to audio state"
                    );
                }
            }
        }
    }
}
