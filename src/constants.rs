//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::UVec2;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the game window, in pixels.
pub const WINDOW_SIZE: UVec2 = UVec2::new(960, 720);

/// How many pixels one world unit covers in the top-down view.
pub const VIEW_SCALE: f32 = 14.0;

/// Player movement and camera tuning.
pub mod mechanics {
    use glam::Vec3;

    /// Distance the player covers per frame while a movement key is held, in world units.
    pub const MOVE_SPEED: f32 = 0.15;
    /// Radians of yaw/pitch per pixel of pointer motion.
    pub const MOUSE_SENSITIVITY: f32 = 0.002;
    /// Lower bound on look pitch, in radians.
    pub const PITCH_MIN: f32 = -std::f32::consts::FRAC_PI_3;
    /// Upper bound on look pitch, in radians.
    pub const PITCH_MAX: f32 = std::f32::consts::FRAC_PI_6;
    /// Where the player stands when the session begins.
    pub const PLAYER_START: Vec3 = Vec3::new(0.0, 0.6, 5.0);
}

/// Bug spawning and per-kind motion tuning.
pub mod bugs {
    /// Seconds between spawn waves, polled once per frame.
    pub const SPAWN_INTERVAL_SECS: f32 = 6.0;
    /// Smallest number of bugs in a wave.
    pub const SPAWN_WAVE_MIN: u32 = 1;
    /// Largest number of bugs in a wave.
    pub const SPAWN_WAVE_MAX: u32 = 3;
    /// Half-extent of the square bugs spawn inside, centered on the origin.
    pub const SPAWN_HALF_EXTENT: f32 = 15.0;
    /// Height bugs spawn at.
    pub const SPAWN_HEIGHT: f32 = 0.5;
    /// Per-frame movement speed range, in world units.
    pub const SPEED_MIN: f32 = 0.02;
    pub const SPEED_MAX: f32 = 0.05;

    /// Heading increment per frame for circle-strafing bugs, in radians.
    pub const CIRCLE_TURN_RATE: f32 = 0.1;
    /// Baseline height for bobbing bugs.
    pub const BOB_BASE: f32 = 0.5;
    /// Bob amplitude, in world units.
    pub const BOB_AMPLITUDE: f32 = 0.3;
    /// Bob angular rate, in radians per second of session time.
    pub const BOB_RATE: f32 = 5.0;
    /// Half-width of the uniform heading perturbation for random walkers.
    pub const WALK_TURN_JITTER: f32 = 0.05;
    /// Height gained per frame by drifting bugs. Unbounded.
    pub const DRIFT_RATE: f32 = 0.005;
    /// Half-width of the per-axis positional jitter. Not re-centered.
    pub const JITTER_AMPLITUDE: f32 = 0.05;
    /// Cosmetic rotation applied to every bug per frame, in radians.
    pub const SPIN_RATE: f32 = 0.01;
}

/// Interaction and scoring rules.
pub mod rules {
    /// Euclidean distance within which the interact action resolves against an entity.
    pub const INTERACTION_RADIUS: f32 = 2.5;
    /// Point values by gate tier.
    pub const POINTS_SIMPLE: u32 = 100;
    pub const POINTS_AGENT: u32 = 300;
    pub const POINTS_MCP: u32 = 500;
    /// The agent counter is clamped to this many spheres.
    pub const AGENT_CAP: u8 = 3;
    /// Agent-gated squashes consume this many spheres.
    pub const AGENT_COST: u8 = 3;
    /// Score threshold for the points objective.
    pub const SCORE_TARGET: u32 = 2000;
    /// Thresholds for a perfect-run rating on the final tally.
    pub const PERFECT_SCORE: u32 = 3000;
    pub const PERFECT_SQUASHES: u32 = 15;
}

/// Session-start placement of collectibles and scenery.
pub mod layout {
    pub const AGENT_SPHERE_COUNT: u32 = 6;
    pub const AGENT_SPHERE_HALF_EXTENT: f32 = 15.0;
    pub const AGENT_SPHERE_HEIGHT: f32 = 0.5;
    pub const MCP_COMPONENT_COUNT: u32 = 3;
    pub const MCP_COMPONENT_HALF_EXTENT: f32 = 17.5;
    pub const MCP_COMPONENT_HEIGHT: f32 = 0.4;
    pub const SCENERY_COUNT: u32 = 8;
    pub const SCENERY_HALF_EXTENT: f32 = 20.0;
}

/// Transient presentation timing, in ticks at 60 Hz.
pub mod ui {
    /// How long a transient notification stays on screen.
    pub const NOTIFICATION_TICKS: u32 = 120;
    /// Dramatic pause between completion and the victory screen.
    pub const VICTORY_PAUSE_TICKS: u32 = 120;
    /// Debris sprites spawned per squash.
    pub const PARTICLE_COUNT: u32 = 15;
    /// How long squash debris lingers.
    pub const PARTICLE_TICKS: u32 = 60;
    /// How many records the high-score table retains.
    pub const HIGH_SCORE_CAPACITY: usize = 10;
}

/// Victory melody synthesis parameters.
pub mod audio {
    /// The ascending victory melody: C5, E5, G5, C6.
    pub const VICTORY_NOTES: [f32; 4] = [523.25, 659.25, 783.99, 1046.50];
    /// Duration of each note, in seconds.
    pub const NOTE_SECS: f32 = 0.5;
    /// Offset between consecutive note onsets, in seconds.
    pub const NOTE_STAGGER_SECS: f32 = 0.2;
    /// Playback sample rate.
    pub const SAMPLE_RATE: i32 = 44_100;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_time() {
        // 60 FPS = 16.67ms per frame
        let expected_nanos = (1_000_000_000.0 / 60.0) as u64;
        assert_eq!(LOOP_TIME.as_nanos() as u64, expected_nanos);
    }

    #[test]
    fn test_pitch_clamp_is_a_valid_range() {
        assert!(mechanics::PITCH_MIN < mechanics::PITCH_MAX);
        assert!(mechanics::PITCH_MIN < 0.0);
        assert!(mechanics::PITCH_MAX > 0.0);
    }

    #[test]
    fn test_spawn_wave_bounds() {
        assert!(bugs::SPAWN_WAVE_MIN >= 1);
        assert!(bugs::SPAWN_WAVE_MIN <= bugs::SPAWN_WAVE_MAX);
    }

    #[test]
    fn test_bug_speed_range() {
        assert!(bugs::SPEED_MIN > 0.0);
        assert!(bugs::SPEED_MIN < bugs::SPEED_MAX);
    }

    #[test]
    fn test_point_values_ascend_with_gate_tier() {
        assert!(rules::POINTS_SIMPLE < rules::POINTS_AGENT);
        assert!(rules::POINTS_AGENT < rules::POINTS_MCP);
    }

    #[test]
    fn test_agent_cost_never_exceeds_cap() {
        assert!(rules::AGENT_COST <= rules::AGENT_CAP);
    }

    #[test]
    fn test_player_start_above_ground() {
        assert!(mechanics::PLAYER_START.y > 0.0);
    }

    #[test]
    fn test_victory_melody_ascends() {
        for pair in audio::VICTORY_NOTES.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_note_stagger_shorter_than_note() {
        assert!(audio::NOTE_STAGGER_SECS < audio::NOTE_SECS);
    }
}
