//! The Entity-Component-System (ECS) module.
//!
//! This module contains all the ECS-related logic, including components, systems,
//! and resources.

pub mod audio;
pub mod components;
pub mod hud;
pub mod input;
pub mod interact;
pub mod lifetime;
pub mod motion;
pub mod notification;
pub mod objectives;
pub mod player;
pub mod render;
pub mod spawn;
pub mod stage;

pub use audio::{audio_system, AudioEvent, AudioResource, AudioState};
pub use components::{
    Bug, BugBundle, BugKind, Collected, CollectibleBundle, CollectibleKind, DebugState, DeltaTime, GlobalState,
    Inventory, LookDelta, MotionPattern, MovementKeys, Orientation, Particle, PlayerControlled, Position, Rgb, Scenery,
    ScoreResource, SessionClock, SpawnTimer, Spin, SquashCount, SquashGate,
};
pub use hud::hud_system;
pub use input::{input_system, Bindings};
pub use interact::interact_system;
pub use lifetime::{time_to_live_system, TimeToLive};
pub use motion::motion_system;
pub use notification::{notification_system, Notification, NotificationEvent};
pub use objectives::{objective_system, Objectives};
pub use player::{command_system, player_system};
pub use render::render_system;
pub use spawn::spawn_system;
pub use stage::{stage_system, FinalTally, GameStage, VictorySequence};
