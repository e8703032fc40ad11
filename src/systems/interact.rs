use bevy_ecs::{
    entity::Entity,
    event::{EventReader, EventWriter},
    query::{With, Without},
    system::{Commands, Query, ResMut},
};
use glam::Vec3;
use rand::Rng;
use tracing::{debug, info};

use crate::{
    constants::{rules, ui},
    events::{GameCommand, GameEvent},
    systems::{
        components::{
            BugKind, Collected, CollectibleKind, Inventory, Particle, PlayerControlled, Position, Rgb, ScoreResource,
            SquashCount, SquashGate,
        },
        lifetime::TimeToLive,
        notification::NotificationEvent,
        objectives::Objectives,
    },
};

/// Resolves one interact action against everything in range of the player.
///
/// Bugs are processed before collectibles, and every entity within the
/// interaction radius is resolved in the same trigger - the area squash is
/// deliberate. A bug is squashed only if its gate is affordable from the
/// current inventory; an ineligible bug stays put and raises a rejection
/// notification instead.
#[allow(clippy::too_many_arguments)]
pub fn interact_system(
    mut commands: Commands,
    mut events: EventReader<GameEvent>,
    mut score: ResMut<ScoreResource>,
    mut squash_count: ResMut<SquashCount>,
    mut inventory: ResMut<Inventory>,
    mut objectives: ResMut<Objectives>,
    player: Query<&Position, With<PlayerControlled>>,
    bugs: Query<(Entity, &BugKind, &Position)>,
    collectibles: Query<(Entity, &CollectibleKind, &Position), Without<Collected>>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    // Drain the whole event stream so a held trigger cannot re-fire next frame.
    let mut triggered = false;
    for event in events.read() {
        if matches!(event, GameEvent::Command(GameCommand::Interact)) {
            triggered = true;
        }
    }
    if !triggered {
        return;
    }

    let player_position = match player.single() {
        Ok(position) => position.0,
        Err(_) => return,
    };

    // Bugs first: squashing is resolved against the inventory as it stood
    // when the trigger fired, before any pickups from the same trigger land.
    for (entity, kind, position) in bugs.iter() {
        if player_position.distance(position.0) >= rules::INTERACTION_RADIUS {
            continue;
        }

        let eligible = match kind.gate() {
            SquashGate::None => true,
            SquashGate::Agents => inventory.has_agent_set(),
            SquashGate::Mcp => inventory.mcp,
        };

        if !eligible {
            debug!(kind = kind.label(), "Squash rejected, requirement not met");
            notifications.write(NotificationEvent::new(
                format!("Need {} to squash {}!", kind.requirement(), kind.label()),
                Rgb::ALERT,
            ));
            continue;
        }

        score.0 += kind.points();
        squash_count.0 += 1;

        match kind.gate() {
            SquashGate::None => objectives.squash_simple_bug = true,
            SquashGate::Agents => {
                objectives.squash_agent_bug = true;
                inventory.spend_agent_set();
            }
            SquashGate::Mcp => {
                objectives.squash_mcp_bug = true;
                inventory.mcp = false;
            }
        }

        spawn_squash_burst(&mut commands, position.0, kind.color());
        commands.entity(entity).despawn();

        info!(
            kind = kind.label(),
            points = kind.points(),
            score = score.0,
            squashed = squash_count.0,
            "Bug squashed"
        );
        notifications.write(NotificationEvent::new(
            format!("SQUASHED {}! +{} pts", kind.label(), kind.points()),
            Rgb::SUCCESS,
        ));
    }

    // Then collectibles. Collected items are hidden, never despawned.
    for (entity, kind, position) in collectibles.iter() {
        if player_position.distance(position.0) >= rules::INTERACTION_RADIUS {
            continue;
        }

        commands.entity(entity).insert(Collected);

        match kind {
            CollectibleKind::AgentSphere => {
                let held = inventory.add_agent();
                info!(agents = held, "Agent sphere collected");
                notifications.write(NotificationEvent::new(
                    format!("{} collected! ({}/{})", kind.label(), held, rules::AGENT_CAP),
                    kind.color(),
                ));
            }
            CollectibleKind::McpComponent => {
                inventory.mcp = true;
                info!("MCP component acquired");
                notifications.write(NotificationEvent::new(format!("{} acquired!", kind.label()), kind.color()));
            }
        }
    }
}

/// Scatters a short-lived debris burst around a squashed bug's position.
fn spawn_squash_burst(commands: &mut Commands, origin: Vec3, color: Rgb) {
    let mut rng = rand::rng();
    for _ in 0..ui::PARTICLE_COUNT {
        let offset = Vec3::new(
            rng.random_range(-1.0..=1.0),
            rng.random_range(0.0..=2.0),
            rng.random_range(-1.0..=1.0),
        );
        commands.spawn((Particle { color }, Position(origin + offset), TimeToLive::new(ui::PARTICLE_TICKS)));
    }
}
