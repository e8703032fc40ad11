//! The presentation shell.
//!
//! Draws a top-down projection of the play field into the SDL2 canvas:
//! colored rects for entities, checklist ticks, and notification bars. The
//! gameplay core never depends on anything in this module.

use bevy_ecs::{
    change_detection::DetectChanges,
    query::{With, Without},
    system::{NonSendMut, Query, Res},
};
use glam::Vec3;
use sdl2::{pixels::Color, rect::Rect, render::Canvas, video::Window};

use crate::{
    constants::{VIEW_SCALE, WINDOW_SIZE},
    systems::{
        components::{
            BugKind, Collected, CollectibleKind, Orientation, Particle, PlayerControlled, Position, Rgb, Scenery,
            ScoreResource,
        },
        notification::Notification,
        objectives::Objectives,
        stage::GameStage,
    },
};

/// Scene background, a deep night blue.
const BACKGROUND: Color = Color::RGB(26, 26, 46);
/// The player's avatar color.
const PLAYER_COLOR: Color = Color::RGB(0, 255, 136);
/// Unfinished checklist tick outline.
const TICK_PENDING: Color = Color::RGB(120, 120, 140);

fn to_sdl(rgb: Rgb) -> Color {
    Color::RGB(rgb.0, rgb.1, rgb.2)
}

/// Projects a world position onto the window: X/Z plane, origin centered.
fn to_screen(position: Vec3) -> (i32, i32) {
    let x = WINDOW_SIZE.x as f32 / 2.0 + position.x * VIEW_SCALE;
    let y = WINDOW_SIZE.y as f32 / 2.0 + position.z * VIEW_SCALE;
    (x as i32, y as i32)
}

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut canvas: NonSendMut<Canvas<Window>>,
    score: Res<ScoreResource>,
    stage: Res<GameStage>,
    objectives: Res<Objectives>,
    scenery: Query<(&Scenery, &Position)>,
    bugs: Query<(&BugKind, &Position)>,
    collectibles: Query<(&CollectibleKind, &Position), Without<Collected>>,
    particles: Query<(&Particle, &Position)>,
    notifications: Query<&Notification>,
    player: Query<(&Position, &Orientation), With<PlayerControlled>>,
) {
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();

    for (scenery, position) in scenery.iter() {
        let (x, y) = to_screen(position.0);
        let w = ((scenery.extents.x * VIEW_SCALE) as u32).max(2);
        let d = ((scenery.extents.z * VIEW_SCALE) as u32).max(2);
        canvas.set_draw_color(to_sdl(scenery.color));
        canvas.fill_rect(Rect::from_center((x, y), w, d)).ok();
    }

    for (kind, position) in collectibles.iter() {
        let (x, y) = to_screen(position.0);
        canvas.set_draw_color(to_sdl(kind.color()));
        canvas.fill_rect(Rect::from_center((x, y), 8, 8)).ok();
    }

    for (kind, position) in bugs.iter() {
        let (x, y) = to_screen(position.0);
        canvas.set_draw_color(to_sdl(kind.color()));
        canvas.fill_rect(Rect::from_center((x, y), 10, 10)).ok();
    }

    for (particle, position) in particles.iter() {
        let (x, y) = to_screen(position.0);
        canvas.set_draw_color(to_sdl(particle.color));
        canvas.fill_rect(Rect::from_center((x, y), 3, 3)).ok();
    }

    if let Ok((position, orientation)) = player.single() {
        let (x, y) = to_screen(position.0);
        canvas.set_draw_color(PLAYER_COLOR);
        canvas.fill_rect(Rect::from_center((x, y), 10, 10)).ok();

        // Heading indicator.
        let dx = (-orientation.yaw.sin() * 12.0) as i32;
        let dy = (-orientation.yaw.cos() * 12.0) as i32;
        canvas.draw_line((x, y), (x + dx, y + dy)).ok();
    }

    // Objective checklist ticks, top-left.
    for (index, (_, done)) in objectives.checklist().iter().enumerate() {
        let rect = Rect::new(16, 16 + index as i32 * 18, 12, 12);
        if *done {
            canvas.set_draw_color(to_sdl(Rgb::SUCCESS));
            canvas.fill_rect(rect).ok();
        } else {
            canvas.set_draw_color(TICK_PENDING);
            canvas.draw_rect(rect).ok();
        }
    }

    // Notification bars, top-center, newest underneath.
    for (index, notification) in notifications.iter().enumerate() {
        let rect = Rect::from_center((WINDOW_SIZE.x as i32 / 2, 150 + index as i32 * 12), 220, 6);
        canvas.set_draw_color(to_sdl(notification.color));
        canvas.fill_rect(rect).ok();
    }

    // The textual readout rides on the window title.
    if score.is_changed() || stage.is_changed() {
        let title = crate::systems::hud::status_line(score.0, &stage);
        canvas.window_mut().set_title(&title).ok();
    }

    canvas.present();
}
