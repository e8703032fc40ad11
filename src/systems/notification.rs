//! Transient event notifications.
//!
//! Gameplay systems announce spawns, squashes, pickups, and rejections by
//! writing `NotificationEvent`s. This system turns each event into a
//! short-lived entity whose remaining lifetime is counted in ticks, so the
//! UI boundary can be exercised in tests without any wall-clock mocking.

use bevy_ecs::{
    component::Component,
    event::{Event, EventReader},
    system::Commands,
};
use tracing::debug;

use crate::{
    constants::ui::NOTIFICATION_TICKS,
    systems::{components::Rgb, lifetime::TimeToLive},
};

/// A transient message for the UI boundary.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    pub text: String,
    pub color: Rgb,
}

impl NotificationEvent {
    pub fn new(text: impl Into<String>, color: Rgb) -> Self {
        Self { text: text.into(), color }
    }
}

/// An on-screen notification entity, expired by the lifetime system.
#[derive(Component, Debug, Clone)]
pub struct Notification {
    pub text: String,
    pub color: Rgb,
}

/// Materializes pending notification events as expiring entities.
pub fn notification_system(mut commands: Commands, mut events: EventReader<NotificationEvent>) {
    for event in events.read() {
        debug!(text = %event.text, "Notification raised");
        commands.spawn((
            Notification {
                text: event.text.clone(),
                color: event.color,
            },
            TimeToLive::new(NOTIFICATION_TICKS),
        ));
    }
}
