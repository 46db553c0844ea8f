//! Small stand-ins for exercising game-agnostic code from tests.

mod game_state_test_impl;
mod scripted_agent;

pub use game_state_test_impl::{TestGameState, TestMove, TestMoveError};
pub use scripted_agent::ScriptedAgent;
