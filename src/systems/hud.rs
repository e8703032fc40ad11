//! Text for the UI boundary: the objective checklist, the debug readout,
//! and the window status line.
//!
//! The core only produces strings here; how they are presented is the
//! shell's business.

use bevy_ecs::{
    query::With,
    system::{Local, Query, Res},
};
use thousands::Separable;
use tracing::debug;

use crate::systems::{
    components::{BugKind, DebugState, Inventory, ScoreResource, SessionClock},
    stage::GameStage,
};

/// Formats elapsed session time as `m:ss`.
pub fn format_elapsed(elapsed_secs: f64) -> String {
    let total = elapsed_secs.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Floating-label text for a bug: title line with its price, blurb underneath.
pub fn bug_label(kind: BugKind) -> String {
    format!("{} ({}pts)\n{}", kind.label(), kind.points(), kind.blurb())
}

/// The status half of the window title.
pub fn stage_label(stage: &GameStage) -> &'static str {
    if stage.is_complete() {
        "LEVEL COMPLETE!"
    } else {
        "ARCADE MODE!"
    }
}

/// One-line session summary, suitable for the window title.
pub fn status_line(score: u32, stage: &GameStage) -> String {
    format!("Bug Squasher - Score: {} - {}", score.separate_with_commas(), stage_label(stage))
}

/// The full debug readout, one field per line.
pub fn debug_readout(
    score: u32,
    inventory: &Inventory,
    active_bugs: usize,
    elapsed_secs: f64,
    stage: &GameStage,
) -> String {
    [
        format!("Score: {}", score.separate_with_commas()),
        format!("Agent Spheres: {}/3", inventory.agents),
        format!("MCP Component: {}", if inventory.mcp { "Yes" } else { "No" }),
        format!("Active Bugs: {}", active_bugs),
        format!("Time: {}", format_elapsed(elapsed_secs)),
        format!("Status: {}", stage_label(stage)),
    ]
    .join("\n")
}

/// Emits the debug readout through tracing once a second while enabled.
pub fn hud_system(
    debug_state: Res<DebugState>,
    score: Res<ScoreResource>,
    inventory: Res<Inventory>,
    clock: Res<SessionClock>,
    stage: Res<GameStage>,
    bugs: Query<(), With<BugKind>>,
    mut frames: Local<u32>,
) {
    // One readout per second keeps the log scannable at 60 Hz.
    *frames = frames.wrapping_add(1);
    if !debug_state.enabled || *frames % 60 != 0 {
        return;
    }

    let readout = debug_readout(score.0, &inventory, bugs.iter().count(), clock.elapsed, &stage);
    for line in readout.lines() {
        debug!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0.0), "0:00");
        assert_eq!(format_elapsed(9.9), "0:09");
        assert_eq!(format_elapsed(65.0), "1:05");
        assert_eq!(format_elapsed(600.0), "10:00");
    }

    #[test]
    fn test_debug_readout_contents() {
        let inventory = Inventory { agents: 2, mcp: true };
        let readout = debug_readout(2500, &inventory, 4, 95.0, &GameStage::Playing);

        assert!(readout.contains("Score: 2,500"));
        assert!(readout.contains("Agent Spheres: 2/3"));
        assert!(readout.contains("MCP Component: Yes"));
        assert!(readout.contains("Active Bugs: 4"));
        assert!(readout.contains("Time: 1:35"));
        assert!(readout.contains("Status: ARCADE MODE!"));
    }

    #[test]
    fn test_bug_label_carries_price_and_blurb() {
        assert_eq!(bug_label(BugKind::PortConflict), "Port Conflict (500pts)\nNeed MCP component");
        assert_eq!(bug_label(BugKind::RaceCondition), "Race Condition (100pts)\nRacing in circles");
    }

    #[test]
    fn test_status_line_separates_thousands() {
        assert_eq!(status_line(3200, &GameStage::Playing), "Bug Squasher - Score: 3,200 - ARCADE MODE!");
    }
}
