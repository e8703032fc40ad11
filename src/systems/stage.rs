use bevy_ecs::{
    event::EventWriter,
    resource::Resource,
    system::{Res, ResMut},
};
use tracing::info;

use crate::{
    constants::{rules, ui},
    scores::{HighScores, ScoreRecord},
    systems::{
        audio::AudioEvent,
        components::{Rgb, ScoreResource, SessionClock, SquashCount},
        notification::NotificationEvent,
        objectives::Objectives,
    },
};

/// Snapshot of the session captured the frame all objectives completed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinalTally {
    pub score: u32,
    pub elapsed_secs: f64,
    pub bugs_squashed: u32,
    pub perfect_run: bool,
}

/// A resource to track the overall stage of the game from a high-level perspective.
///
/// The only transition is `Playing -> Complete`, taken exactly once, the
/// first frame every objective flag is true. There is no way back: gameplay
/// sets are gated off for the rest of the session.
#[derive(Resource, Debug, PartialEq, Clone, Copy, Default)]
pub enum GameStage {
    /// The main gameplay loop is active.
    #[default]
    Playing,
    /// All objectives are met and gameplay is frozen.
    Complete(VictorySequence),
}

/// The two-step end-of-session presentation.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum VictorySequence {
    /// Dramatic pause before the victory screen is revealed.
    Pausing { tally: FinalTally, remaining_ticks: u32 },
    /// The victory screen is up; `rank` highlights the new high-score row.
    Presented { tally: FinalTally, rank: Option<usize> },
}

impl GameStage {
    pub fn is_complete(&self) -> bool {
        matches!(self, GameStage::Complete(_))
    }
}

/// The completion gate.
///
/// Fires the `Playing -> Complete` transition, counts down the dramatic
/// pause, then records the high score and hands off to the presentation
/// boundary. Terminal once presented; re-running is a no-op.
pub fn stage_system(
    mut stage: ResMut<GameStage>,
    objectives: Res<Objectives>,
    score: Res<ScoreResource>,
    squash_count: Res<SquashCount>,
    clock: Res<SessionClock>,
    mut high_scores: ResMut<HighScores>,
    mut audio_events: EventWriter<AudioEvent>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    let new_stage = match *stage {
        GameStage::Playing => {
            if !objectives.all_complete() {
                return;
            }

            let tally = FinalTally {
                score: score.0,
                elapsed_secs: clock.elapsed,
                bugs_squashed: squash_count.0,
                perfect_run: score.0 >= rules::PERFECT_SCORE && squash_count.0 >= rules::PERFECT_SQUASHES,
            };
            info!(
                score = tally.score,
                squashed = tally.bugs_squashed,
                elapsed_secs = tally.elapsed_secs,
                perfect_run = tally.perfect_run,
                "All objectives complete, gameplay frozen"
            );

            GameStage::Complete(VictorySequence::Pausing {
                tally,
                remaining_ticks: ui::VICTORY_PAUSE_TICKS,
            })
        }
        GameStage::Complete(VictorySequence::Pausing { tally, remaining_ticks }) => {
            if remaining_ticks > 0 {
                GameStage::Complete(VictorySequence::Pausing {
                    tally,
                    remaining_ticks: remaining_ticks - 1,
                })
            } else {
                let rank = high_scores.push(ScoreRecord {
                    score: tally.score,
                    elapsed_secs: tally.elapsed_secs,
                    bugs_squashed: tally.bugs_squashed,
                    perfect_run: tally.perfect_run,
                });

                audio_events.write(AudioEvent::PlayVictory);
                notifications.write(NotificationEvent::new(
                    "LEVEL COMPLETE! ALL OBJECTIVES ACHIEVED!",
                    Rgb::CELEBRATION,
                ));
                info!(rank = ?rank, "Victory screen presented");

                GameStage::Complete(VictorySequence::Presented { tally, rank })
            }
        }
        // Terminal.
        GameStage::Complete(VictorySequence::Presented { .. }) => return,
    };

    *stage = new_stage;
}
