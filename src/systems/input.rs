use std::collections::HashMap;

use bevy_ecs::{
    event::EventWriter,
    resource::Resource,
    system::{NonSendMut, Res, ResMut},
};
use glam::Vec2;
use sdl2::{event::Event, keyboard::Keycode, EventPump};

use crate::{
    events::{GameCommand, GameEvent},
    systems::{
        components::{LookDelta, MovementKeys},
        stage::GameStage,
    },
};

#[derive(Debug, Clone, Resource)]
pub struct Bindings {
    key_bindings: HashMap<Keycode, GameCommand>,
    movement_keys: HashMap<Keycode, MovementKeys>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        // Discrete actions
        key_bindings.insert(Keycode::Space, GameCommand::Interact);
        key_bindings.insert(Keycode::F3, GameCommand::ToggleDebug);
        key_bindings.insert(Keycode::M, GameCommand::MuteAudio);
        key_bindings.insert(Keycode::Escape, GameCommand::Exit);
        key_bindings.insert(Keycode::Q, GameCommand::Exit);

        // Held movement keys
        let mut movement_keys = HashMap::new();
        movement_keys.insert(Keycode::W, MovementKeys::FORWARD);
        movement_keys.insert(Keycode::Up, MovementKeys::FORWARD);
        movement_keys.insert(Keycode::S, MovementKeys::BACK);
        movement_keys.insert(Keycode::Down, MovementKeys::BACK);
        movement_keys.insert(Keycode::A, MovementKeys::LEFT);
        movement_keys.insert(Keycode::Left, MovementKeys::LEFT);
        movement_keys.insert(Keycode::D, MovementKeys::RIGHT);
        movement_keys.insert(Keycode::Right, MovementKeys::RIGHT);

        Self {
            key_bindings,
            movement_keys,
        }
    }
}

/// Drains the SDL event pump into held-key state, pointer deltas, and
/// discrete game commands.
///
/// The interact key is edge-triggered: key repeat is suppressed here and the
/// resolver drains its event stream every frame, so holding the key fires
/// exactly once. Gameplay input is discarded entirely once the session is
/// complete; only Exit stays live.
pub fn input_system(
    bindings: Res<Bindings>,
    stage: Res<GameStage>,
    mut keys: ResMut<MovementKeys>,
    mut look: ResMut<LookDelta>,
    mut writer: EventWriter<GameEvent>,
    mut pump: NonSendMut<EventPump>,
) {
    for event in pump.poll_iter() {
        match event {
            Event::Quit { .. } => {
                writer.write(GameEvent::Command(GameCommand::Exit));
            }
            Event::MouseMotion { xrel, yrel, .. } => {
                if !stage.is_complete() {
                    look.0 += Vec2::new(xrel as f32, yrel as f32);
                }
            }
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                if !stage.is_complete() {
                    if let Some(flag) = bindings.movement_keys.get(&key) {
                        keys.insert(*flag);
                    }
                }
                if let Some(command) = bindings.key_bindings.get(&key).copied() {
                    if command == GameCommand::Exit || !stage.is_complete() {
                        writer.write(GameEvent::Command(command));
                    }
                }
            }
            Event::KeyUp {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                if let Some(flag) = bindings.movement_keys.get(&key) {
                    keys.remove(*flag);
                }
            }
            _ => {}
        }
    }
}
