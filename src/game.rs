//! This module contains the main game logic and state.

use bevy_ecs::event::{EventReader, EventRegistry};
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::system::{Res, ResMut};
use bevy_ecs::world::World;
use glam::Vec3;
use rand::Rng;
use sdl2::{render::Canvas, video::Window, AudioSubsystem, EventPump};
use tracing::{debug, info};

use crate::audio::Audio;
use crate::constants::{layout, mechanics};
use crate::error::GameError;
use crate::events::GameEvent;
use crate::scores::HighScores;
use crate::systems::{
    audio_system, command_system, hud_system, input_system, interact_system, motion_system, notification_system,
    objective_system, player_system, render_system, spawn_system, stage_system, time_to_live_system, AudioEvent,
    AudioResource, AudioState, Bindings, CollectibleBundle, CollectibleKind, DebugState, DeltaTime, GameStage,
    GlobalState, Inventory, LookDelta, MovementKeys, NotificationEvent, Objectives, Orientation, PlayerControlled,
    Position, Rgb, Scenery, ScoreResource, SessionClock, SpawnTimer, SquashCount,
};

/// System set for all gameplay systems to ensure they run after input processing
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum GameplaySet {
    /// Gameplay systems that process inputs
    Input,
    /// Gameplay systems that update the game state
    Update,
    /// Gameplay systems that respond to the updated state
    Respond,
}

/// System set for the presentation systems that run after gameplay logic
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum PresentSet {
    Draw,
}

/// Core game state manager built on the Bevy ECS architecture.
///
/// Orchestrates all game systems through a centralized `World` containing
/// entities, components, and resources, while a `Schedule` defines system
/// execution order. SDL2 resources are stored as `NonSend` to respect their
/// main-thread requirements while integrating with the ECS.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Initializes the complete game state: ECS world, events, resources,
    /// the system schedule, and the session-start entities.
    pub fn new(canvas: Canvas<Window>, event_pump: EventPump, audio_subsystem: &AudioSubsystem) -> Game {
        info!("Starting game initialization");

        let mut world = World::default();
        let mut schedule = Schedule::default();

        debug!("Setting up ECS event registry");
        Self::setup_events(&mut world);

        debug!("Inserting resources into ECS world");
        Self::insert_resources(&mut world, canvas, event_pump, audio_subsystem);

        debug!("Configuring system execution schedule");
        Self::configure_schedule(&mut schedule);

        debug!("Spawning player entity");
        world.spawn((PlayerControlled, Position(mechanics::PLAYER_START), Orientation::default()));

        info!("Spawning session entities");
        Self::spawn_collectibles(&mut world);
        Self::spawn_scenery(&mut world);

        info!("Game initialization completed successfully");
        Game { world, schedule }
    }

    fn setup_events(world: &mut World) {
        EventRegistry::register_event::<GameError>(world);
        EventRegistry::register_event::<GameEvent>(world);
        EventRegistry::register_event::<AudioEvent>(world);
        EventRegistry::register_event::<NotificationEvent>(world);
    }

    fn insert_resources(world: &mut World, canvas: Canvas<Window>, event_pump: EventPump, audio_subsystem: &AudioSubsystem) {
        world.insert_resource(GlobalState { exit: false });
        world.insert_resource(ScoreResource::default());
        world.insert_resource(SquashCount::default());
        world.insert_resource(Inventory::default());
        world.insert_resource(Objectives::default());
        world.insert_resource(GameStage::default());
        world.insert_resource(SpawnTimer::default());
        world.insert_resource(SessionClock::default());
        world.insert_resource(DeltaTime { seconds: 0.0, ticks: 0 });
        world.insert_resource(DebugState::default());
        world.insert_resource(AudioState::default());
        world.insert_resource(Bindings::default());
        world.insert_resource(MovementKeys::default());
        world.insert_resource(LookDelta::default());
        world.insert_resource(HighScores::default());

        world.insert_non_send_resource(canvas);
        world.insert_non_send_resource(event_pump);
        world.insert_non_send_resource(AudioResource(Audio::new(audio_subsystem)));
    }

    fn configure_schedule(schedule: &mut Schedule) {
        schedule
            .add_systems((
                (input_system, command_system).chain().in_set(GameplaySet::Input),
                time_to_live_system.before(GameplaySet::Update),
                (
                    (|mut clock: ResMut<SessionClock>, dt: Res<DeltaTime>| {
                        clock.elapsed += dt.seconds as f64;
                        clock.ticks += dt.ticks as u64;
                    }),
                    player_system,
                    motion_system,
                    spawn_system,
                    interact_system,
                    objective_system,
                )
                    .chain()
                    .in_set(GameplaySet::Update),
                (stage_system, notification_system).chain().in_set(GameplaySet::Respond),
                (hud_system, render_system, audio_system).chain().in_set(PresentSet::Draw),
                (|mut errors: EventReader<GameError>| {
                    for error in errors.read() {
                        tracing::error!("{}", error);
                    }
                })
                .after(PresentSet::Draw),
            ))
            .configure_sets(
                (
                    GameplaySet::Input,
                    // The completion gate freezes every gameplay update.
                    GameplaySet::Update.run_if(|stage: Res<GameStage>| !stage.is_complete()),
                    GameplaySet::Respond,
                    PresentSet::Draw,
                )
                    .chain(),
            );
    }

    /// Scatters the fixed set of collectibles across the play field.
    fn spawn_collectibles(world: &mut World) {
        let mut rng = rand::rng();

        for _ in 0..layout::AGENT_SPHERE_COUNT {
            world.spawn(CollectibleBundle {
                kind: CollectibleKind::AgentSphere,
                position: Position(Vec3::new(
                    rng.random_range(-layout::AGENT_SPHERE_HALF_EXTENT..=layout::AGENT_SPHERE_HALF_EXTENT),
                    layout::AGENT_SPHERE_HEIGHT,
                    rng.random_range(-layout::AGENT_SPHERE_HALF_EXTENT..=layout::AGENT_SPHERE_HALF_EXTENT),
                )),
            });
        }

        for _ in 0..layout::MCP_COMPONENT_COUNT {
            world.spawn(CollectibleBundle {
                kind: CollectibleKind::McpComponent,
                position: Position(Vec3::new(
                    rng.random_range(-layout::MCP_COMPONENT_HALF_EXTENT..=layout::MCP_COMPONENT_HALF_EXTENT),
                    layout::MCP_COMPONENT_HEIGHT,
                    rng.random_range(-layout::MCP_COMPONENT_HALF_EXTENT..=layout::MCP_COMPONENT_HALF_EXTENT),
                )),
            });
        }

        info!(
            agent_spheres = layout::AGENT_SPHERE_COUNT,
            mcp_components = layout::MCP_COMPONENT_COUNT,
            "Collectibles placed"
        );
    }

    /// Decorative structures. Nothing collides with these.
    fn spawn_scenery(world: &mut World) {
        const COLORS: [Rgb; 3] = [Rgb(74, 74, 138), Rgb(106, 74, 138), Rgb(138, 74, 106)];

        let mut rng = rand::rng();
        for _ in 0..layout::SCENERY_COUNT {
            let extents = Vec3::new(
                rng.random_range(1.0..3.0),
                rng.random_range(2.0..5.0),
                rng.random_range(1.0..3.0),
            );
            world.spawn((
                Scenery {
                    extents,
                    color: COLORS[rng.random_range(0..COLORS.len())],
                },
                Position(Vec3::new(
                    rng.random_range(-layout::SCENERY_HALF_EXTENT..=layout::SCENERY_HALF_EXTENT),
                    extents.y / 2.0,
                    rng.random_range(-layout::SCENERY_HALF_EXTENT..=layout::SCENERY_HALF_EXTENT),
                )),
            ));
        }
    }

    /// Executes one frame of game logic by running all scheduled ECS systems.
    ///
    /// # Arguments
    ///
    /// * `dt` - Frame delta time in seconds
    ///
    /// # Returns
    ///
    /// `true` if the game should terminate (exit command received), `false` to continue
    pub fn tick(&mut self, dt: f32) -> bool {
        self.world.insert_resource(DeltaTime { seconds: dt, ticks: 1 });
        self.schedule.run(&mut self.world);

        self.world
            .get_resource::<GlobalState>()
            .map(|state| state.exit)
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collectible_placement() {
        let mut world = World::default();
        Game::spawn_collectibles(&mut world);

        let mut agents = 0;
        let mut components = 0;
        for (kind, position) in world.query::<(&CollectibleKind, &Position)>().iter(&world) {
            match kind {
                CollectibleKind::AgentSphere => {
                    agents += 1;
                    assert!(position.0.x.abs() <= layout::AGENT_SPHERE_HALF_EXTENT);
                    assert!(position.0.z.abs() <= layout::AGENT_SPHERE_HALF_EXTENT);
                    assert_eq!(position.0.y, layout::AGENT_SPHERE_HEIGHT);
                }
                CollectibleKind::McpComponent => {
                    components += 1;
                    assert!(position.0.x.abs() <= layout::MCP_COMPONENT_HALF_EXTENT);
                    assert!(position.0.z.abs() <= layout::MCP_COMPONENT_HALF_EXTENT);
                    assert_eq!(position.0.y, layout::MCP_COMPONENT_HEIGHT);
                }
            }
        }

        assert_eq!(agents, layout::AGENT_SPHERE_COUNT);
        assert_eq!(components, layout::MCP_COMPONENT_COUNT);
    }

    #[test]
    fn test_scenery_placement() {
        let mut world = World::default();
        Game::spawn_scenery(&mut world);

        let mut count = 0;
        for (scenery, position) in world.query::<(&Scenery, &Position)>().iter(&world) {
            count += 1;
            assert!(position.0.x.abs() <= layout::SCENERY_HALF_EXTENT);
            assert!(position.0.z.abs() <= layout::SCENERY_HALF_EXTENT);
            // Boxes sit on the ground.
            assert_eq!(position.0.y, scenery.extents.y / 2.0);
        }

        assert_eq!(count, layout::SCENERY_COUNT);
    }
}
