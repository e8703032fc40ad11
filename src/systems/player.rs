use bevy_ecs::{
    event::{EventReader, EventWriter},
    query::With,
    system::{Query, Res, ResMut},
};
use glam::{Quat, Vec2, Vec3};

use crate::{
    constants::mechanics,
    error::GameError,
    events::{GameCommand, GameEvent},
    systems::{
        audio::AudioState,
        components::{DebugState, DeltaTime, GlobalState, LookDelta, MovementKeys, Orientation, PlayerControlled, Position},
    },
};

/// Handles the discrete commands that are not gameplay actions.
pub fn command_system(
    mut events: EventReader<GameEvent>,
    mut state: ResMut<GlobalState>,
    mut debug: ResMut<DebugState>,
    mut audio_state: ResMut<AudioState>,
) {
    for event in events.read() {
        let GameEvent::Command(command) = event;
        match command {
            GameCommand::Exit => state.exit = true,
            GameCommand::ToggleDebug => debug.enabled = !debug.enabled,
            GameCommand::MuteAudio => audio_state.muted = !audio_state.muted,
            GameCommand::Interact => {}
        }
    }
}

/// Applies pointer look and held-key movement to the player avatar.
///
/// Movement is expressed in the avatar's frame and rotated into the world by
/// the current yaw; pitch is clamped so the view cannot flip over.
pub fn player_system(
    delta_time: Res<DeltaTime>,
    keys: Res<MovementKeys>,
    mut look: ResMut<LookDelta>,
    mut players: Query<(&mut Position, &mut Orientation), With<PlayerControlled>>,
    mut errors: EventWriter<GameError>,
) {
    let (mut position, mut orientation) = match players.single_mut() {
        Ok(player) => player,
        Err(e) => {
            errors.write(GameError::InvalidState(format!(
                "No/multiple entities queried for player system: {}",
                e
            )));
            return;
        }
    };

    let delta = look.0;
    look.0 = Vec2::ZERO;
    orientation.yaw -= delta.x * mechanics::MOUSE_SENSITIVITY;
    // Reversed Y-axis
    orientation.pitch = (orientation.pitch + delta.y * mechanics::MOUSE_SENSITIVITY)
        .clamp(mechanics::PITCH_MIN, mechanics::PITCH_MAX);

    let mut movement = Vec3::ZERO;
    if keys.contains(MovementKeys::FORWARD) {
        movement.z -= mechanics::MOVE_SPEED;
    }
    if keys.contains(MovementKeys::BACK) {
        movement.z += mechanics::MOVE_SPEED;
    }
    if keys.contains(MovementKeys::LEFT) {
        movement.x -= mechanics::MOVE_SPEED;
    }
    if keys.contains(MovementKeys::RIGHT) {
        movement.x += mechanics::MOVE_SPEED;
    }

    if movement != Vec3::ZERO {
        let scale = 60.0 * delta_time.seconds;
        position.0 += Quat::from_rotation_y(orientation.yaw) * movement * scale;
    }
}
