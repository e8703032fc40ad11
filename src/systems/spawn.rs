use bevy_ecs::{
    event::EventWriter,
    system::{Commands, Res, ResMut},
};
use glam::Vec3;
use rand::Rng;
use smallvec::SmallVec;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::{
    constants::bugs,
    systems::{
        components::{Bug, BugBundle, BugKind, DeltaTime, Position, Rgb, Spin, SpawnTimer},
        notification::NotificationEvent,
    },
};

/// Spawns a wave of 1-3 bugs every spawn interval.
///
/// The interval is polled once per frame against time accumulated since the
/// previous wave, so a wave can land up to one frame period late. Kind,
/// position, speed, and heading are all uniformly random. Nothing bounds the
/// total bug population.
pub fn spawn_system(
    mut commands: Commands,
    delta_time: Res<DeltaTime>,
    mut timer: ResMut<SpawnTimer>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    timer.since_last += delta_time.seconds;
    if timer.since_last < bugs::SPAWN_INTERVAL_SECS {
        return;
    }
    timer.since_last = 0.0;

    let mut rng = rand::rng();
    let kinds: SmallVec<[BugKind; 6]> = BugKind::iter().collect();
    let wave = rng.random_range(bugs::SPAWN_WAVE_MIN..=bugs::SPAWN_WAVE_MAX);

    for _ in 0..wave {
        let kind = kinds[rng.random_range(0..kinds.len())];
        let position = Vec3::new(
            rng.random_range(-bugs::SPAWN_HALF_EXTENT..=bugs::SPAWN_HALF_EXTENT),
            bugs::SPAWN_HEIGHT,
            rng.random_range(-bugs::SPAWN_HALF_EXTENT..=bugs::SPAWN_HALF_EXTENT),
        );

        let entity = commands
            .spawn(BugBundle {
                kind,
                bug: Bug {
                    speed: rng.random_range(bugs::SPEED_MIN..bugs::SPEED_MAX),
                    heading: rng.random_range(0.0..std::f32::consts::TAU),
                },
                position: Position(position),
                spin: Spin::default(),
            })
            .id();

        debug!(kind = kind.label(), entity = ?entity, x = position.x, z = position.z, "Bug spawned");
    }

    notifications.write(NotificationEvent::new(
        format!("{} new bug{} spawned!", wave, if wave > 1 { "s" } else { "" }),
        Rgb::ALERT,
    ));
}
