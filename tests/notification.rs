use bevy_ecs::{event::Events, system::RunSystemOnce};
use bugsquash::systems::{
    notification_system, time_to_live_system, Notification, NotificationEvent, Rgb, TimeToLive,
};
use speculoos::prelude::*;

mod common;

#[test]
fn test_notification_event_becomes_an_expiring_entity() {
    let mut world = common::create_test_world();
    world
        .resource_mut::<Events<NotificationEvent>>()
        .send(NotificationEvent::new("SQUASHED Race Condition! +100 pts", Rgb::SUCCESS));

    world
        .run_system_once(notification_system)
        .expect("System should run successfully");

    let mut query = world.query::<(&Notification, &TimeToLive)>();
    let (notification, ttl) = query.single(&world).expect("notification entity should exist");
    assert_that(&notification.text.as_str()).is_equal_to("SQUASHED Race Condition! +100 pts");
    assert_that(&notification.color).is_equal_to(Rgb::SUCCESS);
    assert_that(&ttl.remaining_ticks).is_equal_to(120);
}

#[test]
fn test_notification_expires_after_its_lifetime() {
    let mut world = common::create_test_world();
    world
        .resource_mut::<Events<NotificationEvent>>()
        .send(NotificationEvent::new("3 new bugs spawned!", Rgb::ALERT));
    world
        .run_system_once(notification_system)
        .expect("System should run successfully");

    // One tick shy of the display duration: still visible.
    for _ in 0..119 {
        world
            .run_system_once(time_to_live_system)
            .expect("System should run successfully");
    }
    assert_that(&world.query::<&Notification>().iter(&world).count()).is_equal_to(1);

    // The final tick removes it.
    world
        .run_system_once(time_to_live_system)
        .expect("System should run successfully");
    assert_that(&world.query::<&Notification>().iter(&world).count()).is_equal_to(0);
}

#[test]
fn test_notifications_expire_independently() {
    let mut world = common::create_test_world();
    world.spawn((
        Notification {
            text: "older".to_string(),
            color: Rgb::ALERT,
        },
        TimeToLive::new(10),
    ));
    world.spawn((
        Notification {
            text: "newer".to_string(),
            color: Rgb::SUCCESS,
        },
        TimeToLive::new(20),
    ));

    for _ in 0..10 {
        world
            .run_system_once(time_to_live_system)
            .expect("System should run successfully");
    }

    let mut query = world.query::<&Notification>();
    let remaining: Vec<_> = query.iter(&world).map(|n| n.text.clone()).collect();
    assert_that(&remaining).is_equal_to(vec!["newer".to_string()]);
}
