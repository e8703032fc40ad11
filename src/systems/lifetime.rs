use bevy_ecs::{
    component::Component,
    entity::Entity,
    system::{Commands, Query, Res},
};

use crate::systems::DeltaTime;

/// Remaining lifetime for transient entities (notifications, squash debris),
/// counted in ticks and decremented once per frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct TimeToLive {
    pub remaining_ticks: u32,
}

impl TimeToLive {
    pub fn new(ticks: u32) -> Self {
        Self { remaining_ticks: ticks }
    }
}

/// Expires transient entities: decrements remaining ticks and despawns at zero.
pub fn time_to_live_system(mut commands: Commands, dt: Res<DeltaTime>, mut query: Query<(Entity, &mut TimeToLive)>) {
    for (entity, mut ttl) in query.iter_mut() {
        if ttl.remaining_ticks <= dt.ticks {
            commands.entity(entity).despawn();
        } else {
            ttl.remaining_ticks = ttl.remaining_ticks.saturating_sub(dt.ticks);
        }
    }
}
