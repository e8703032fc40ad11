use bevy_ecs::system::{Query, Res};
use rand::Rng;

use crate::constants::bugs;
use crate::systems::components::{Bug, BugKind, DeltaTime, MotionPattern, Position, SessionClock, Spin};

/// Advances every active bug by one frame of its kind's motion pattern.
///
/// Per-frame rates are scaled by `dt * 60` so behavior is framerate
/// independent at the nominal 60 Hz tick. There is no collision detection
/// against scenery or other entities; bugs may overlap obstacles or wander
/// out of the play area.
pub fn motion_system(
    clock: Res<SessionClock>,
    delta_time: Res<DeltaTime>,
    mut entities: Query<(&BugKind, &mut Bug, &mut Position, &mut Spin)>,
) {
    let mut rng = rand::rng();
    let scale = 60.0 * delta_time.seconds;

    for (kind, mut bug, mut position, mut spin) in entities.iter_mut() {
        match kind.pattern() {
            MotionPattern::CircleStrafe => {
                bug.heading += bugs::CIRCLE_TURN_RATE * scale;
                position.0.x += bug.heading.cos() * bug.speed * scale;
                position.0.z += bug.heading.sin() * bug.speed * scale;
            }
            MotionPattern::VerticalBob => {
                // A function of session time alone, so the bob survives being
                // pushed around and stays idempotent given the clock.
                position.0.y = bugs::BOB_BASE + (clock.elapsed as f32 * bugs::BOB_RATE).sin() * bugs::BOB_AMPLITUDE;
            }
            MotionPattern::RandomWalk => {
                bug.heading += rng.random_range(-bugs::WALK_TURN_JITTER..=bugs::WALK_TURN_JITTER) * scale;
                position.0.x += bug.heading.cos() * bug.speed * scale;
                position.0.z += bug.heading.sin() * bug.speed * scale;
            }
            MotionPattern::UpwardDrift => {
                position.0.y += bugs::DRIFT_RATE * scale;
            }
            MotionPattern::Jitter => {
                position.0.x += rng.random_range(-bugs::JITTER_AMPLITUDE..=bugs::JITTER_AMPLITUDE) * scale;
                position.0.z += rng.random_range(-bugs::JITTER_AMPLITUDE..=bugs::JITTER_AMPLITUDE) * scale;
            }
            MotionPattern::Stationary => {}
        }

        // Every kind spins for visual interest, independent of its pattern.
        spin.pitch += bugs::SPIN_RATE * scale;
        spin.roll += bugs::SPIN_RATE * scale;
    }
}
