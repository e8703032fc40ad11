#![allow(dead_code)]

use bevy_ecs::{entity::Entity, event::Events, system::RunSystemOnce, world::World};
use bugsquash::{
    error::GameError,
    events::{GameCommand, GameEvent},
    scores::HighScores,
    systems::{
        interact_system, AudioEvent, AudioState, Bug, BugKind, CollectibleKind, DebugState, DeltaTime, GameStage,
        GlobalState, Inventory, LookDelta, MovementKeys, NotificationEvent, Objectives, Orientation, PlayerControlled,
        Position, ScoreResource, SessionClock, SpawnTimer, Spin, SquashCount,
    },
};
use glam::Vec3;

/// Creates a basic test world with the resources the gameplay systems need.
pub fn create_test_world() -> World {
    let mut world = World::new();

    world.insert_resource(Events::<GameEvent>::default());
    world.insert_resource(Events::<GameError>::default());
    world.insert_resource(Events::<AudioEvent>::default());
    world.insert_resource(Events::<NotificationEvent>::default());
    world.insert_resource(GlobalState { exit: false });
    world.insert_resource(ScoreResource::default());
    world.insert_resource(SquashCount::default());
    world.insert_resource(Inventory::default());
    world.insert_resource(Objectives::default());
    world.insert_resource(GameStage::default());
    world.insert_resource(SpawnTimer::default());
    world.insert_resource(SessionClock::default());
    world.insert_resource(DebugState::default());
    world.insert_resource(AudioState::default());
    world.insert_resource(MovementKeys::default());
    world.insert_resource(LookDelta::default());
    world.insert_resource(HighScores::default());
    world.insert_resource(DeltaTime {
        seconds: 1.0 / 60.0,
        ticks: 1,
    }); // 60 FPS

    world
}

/// Spawns a player avatar at the given position.
pub fn spawn_test_player(world: &mut World, position: Vec3) -> Entity {
    world
        .spawn((PlayerControlled, Position(position), Orientation::default()))
        .id()
}

/// Spawns a bug of the given kind at the given position.
pub fn spawn_test_bug(world: &mut World, kind: BugKind, position: Vec3) -> Entity {
    world
        .spawn((
            kind,
            Bug {
                speed: 0.03,
                heading: 0.0,
            },
            Position(position),
            Spin::default(),
        ))
        .id()
}

/// Spawns an uncollected collectible of the given kind.
pub fn spawn_test_collectible(world: &mut World, kind: CollectibleKind, position: Vec3) -> Entity {
    world.spawn((kind, Position(position))).id()
}

/// Sends a game command to the world.
pub fn send_command(world: &mut World, command: GameCommand) {
    let mut events = world.resource_mut::<Events<GameEvent>>();
    events.send(GameEvent::Command(command));
}

/// Fires one interact trigger and resolves it, leaving the trigger consumed.
pub fn resolve_interact(world: &mut World) {
    send_command(world, GameCommand::Interact);
    world
        .run_system_once(interact_system)
        .expect("System should run successfully");
    world.resource_mut::<Events<GameEvent>>().clear();
}

/// Drains every pending notification into its message text.
pub fn drain_notifications(world: &mut World) -> Vec<String> {
    world
        .resource_mut::<Events<NotificationEvent>>()
        .drain()
        .map(|event| event.text)
        .collect()
}

/// Drains every pending audio event.
pub fn drain_audio_events(world: &mut World) -> Vec<AudioEvent> {
    world.resource_mut::<Events<AudioEvent>>().drain().collect()
}

/// Counts the bugs currently alive.
pub fn count_bugs(world: &mut World) -> usize {
    world.query::<&BugKind>().iter(world).count()
}

/// Latches every objective flag.
pub fn complete_all_objectives(world: &mut World) {
    let mut objectives = world.resource_mut::<Objectives>();
    objectives.collect_resources = true;
    objectives.squash_simple_bug = true;
    objectives.collect_three_agents = true;
    objectives.squash_agent_bug = true;
    objectives.find_mcp_component = true;
    objectives.squash_mcp_bug = true;
    objectives.achieve_2000_points = true;
}
