use bevy_ecs::system::RunSystemOnce;
use bugsquash::systems::{spawn_system, Bug, BugKind, Position, SpawnTimer};
use speculoos::prelude::*;

mod common;

fn run_spawn(world: &mut bevy_ecs::world::World) {
    world.run_system_once(spawn_system).expect("System should run successfully");
}

#[test]
fn test_no_wave_before_the_interval() {
    let mut world = common::create_test_world();

    // A handful of frames is nowhere near the six-second interval.
    for _ in 0..30 {
        run_spawn(&mut world);
    }

    assert_that(&common::count_bugs(&mut world)).is_equal_to(0);
    assert_that(&common::drain_notifications(&mut world).len()).is_equal_to(0);
}

#[test]
fn test_wave_spawns_one_to_three_bugs() {
    let mut world = common::create_test_world();
    world.insert_resource(SpawnTimer { since_last: 6.0 });

    run_spawn(&mut world);

    let count = common::count_bugs(&mut world);
    assert_that(&(1..=3).contains(&count)).is_true();

    let notifications = common::drain_notifications(&mut world);
    assert_that(&notifications.iter().any(|text| text.contains("spawned"))).is_true();
}

#[test]
fn test_spawned_bugs_land_inside_the_spawn_square() {
    let mut world = common::create_test_world();
    world.insert_resource(SpawnTimer { since_last: 10.0 });

    run_spawn(&mut world);

    for (bug, position) in world.query::<(&Bug, &Position)>().iter(&world) {
        assert_that(&position.0.x.abs()).is_less_than_or_equal_to(15.0);
        assert_that(&position.0.z.abs()).is_less_than_or_equal_to(15.0);
        assert_that(&position.0.y).is_close_to(0.5, 1e-6);
        assert_that(&bug.speed).is_greater_than_or_equal_to(0.02);
        assert_that(&bug.speed).is_less_than(0.05);
    }
}

#[test]
fn test_timer_resets_after_a_wave() {
    let mut world = common::create_test_world();
    world.insert_resource(SpawnTimer { since_last: 6.0 });

    run_spawn(&mut world);

    let timer = world.resource::<SpawnTimer>();
    assert_that(&timer.since_last).is_less_than(0.1);
}

#[test]
fn test_population_grows_without_bound() {
    let mut world = common::create_test_world();

    // Ten waves in a row; nothing culls the herd.
    let mut floor = 0;
    for _ in 0..10 {
        world.insert_resource(SpawnTimer { since_last: 6.0 });
        run_spawn(&mut world);

        let count = common::count_bugs(&mut world);
        assert_that(&count).is_greater_than(floor);
        floor = count;
    }

    assert_that(&floor).is_greater_than_or_equal_to(10);
}

#[test]
fn test_waves_draw_from_the_full_kind_table() {
    let mut world = common::create_test_world();

    // Enough waves that every kind shows up with overwhelming probability.
    for _ in 0..60 {
        world.insert_resource(SpawnTimer { since_last: 6.0 });
        run_spawn(&mut world);
    }

    let mut kinds: Vec<BugKind> = world.query::<&BugKind>().iter(&world).copied().collect();
    kinds.sort_by_key(|kind| kind.label());
    kinds.dedup();
    assert_that(&kinds.len()).is_greater_than_or_equal_to(4);
}
