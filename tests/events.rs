use bugsquash::events::{GameCommand, GameEvent};
use speculoos::prelude::*;

#[test]
fn test_game_command_converts_to_event() {
    let event: GameEvent = GameCommand::Interact.into();
    assert_that(&event).is_equal_to(GameEvent::Command(GameCommand::Interact));
}

#[test]
fn test_commands_are_distinct() {
    assert_that(&(GameCommand::Interact == GameCommand::Exit)).is_false();
    assert_that(&(GameCommand::ToggleDebug == GameCommand::MuteAudio)).is_false();
}
