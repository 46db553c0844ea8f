use crate::{AgentAction, GameAgent, GameMove, GameResult, GameState, PlayerColor};
use lib_printer::{info, warn};
use std::io::{self, Write};

/// Knobs for [`GeneralGameRunner`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RunnerOptions {
    /// Also end the game when neither player has a legal move left,
    /// not only when the game state reports it is over.
    pub stop_when_blocked: bool,
}

/// How a call to [`GeneralGameRunner::play_to_end`] finished.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GameOutcome {
    /// The game reached its end and was scored.
    Finished(GameResult),
    /// An agent quit before the end; nothing was scored.
    Abandoned,
}

/// A trivial, general-purpose game loop.
///
/// The runner owns the turn toggle: it tells the agent whose turn it is, and
/// only passes the turn on once a move is accepted. Player 1 always starts.
/// Rendering is supplied as a closure over a shared borrow of the state.
pub struct GeneralGameRunner<R> {
    render: R,
    options: RunnerOptions,
}

impl<R> GeneralGameRunner<R> {
    pub fn new(render: R, options: RunnerOptions) -> Self {
        Self { render, options }
    }

    fn is_finished<S: GameState>(&self, state: &S) -> bool {
        if state.is_game_over() {
            return true;
        }

        self.options.stop_when_blocked
            && !state.has_legal_move(PlayerColor::Black)
            && !state.has_legal_move(PlayerColor::White)
    }

    /// Asks the agent for moves until the game ends or the agent quits,
    /// writing the board and announcements to `output`.
    /// The result is computed exactly once, and only when the game ends on its own.
    pub fn play_to_end<S, A, W>(&self, state: &mut S, agent: &mut A, output: &mut W) -> io::Result<GameOutcome>
    where
        S: GameState,
        A: GameAgent<S>,
        W: Write,
        R: Fn(&S) -> String,
    {
        let mut turn = PlayerColor::Black;

        while !self.is_finished(state) {
            writeln!(output, "{}", (self.render)(&*state))?;
            output.flush()?;

            let selected_action = match agent.pick_move(state, turn) {
                AgentAction::Play(selected_action) => selected_action,
                AgentAction::Quit => {
                    writeln!(output, "You have ended the game")?;
                    return Ok(GameOutcome::Abandoned);
                }
            };

            // The move decides who plays; the turn only drives the prompts.
            if selected_action.player() != turn {
                warn!(
                    "Player {} placed a piece for Player {}",
                    turn.number(),
                    selected_action.player().number()
                );
            }

            match state.apply_move(selected_action) {
                Ok(()) => {
                    info!("Player {} played {:?}", turn.number(), selected_action);
                    turn = turn.opponent();
                }
                Err(e) => {
                    warn!("{}", e);
                    writeln!(output, "Invalid Move. Please try again")?;
                }
            }
        }

        writeln!(output, "{}", (self.render)(&*state))?;
        writeln!(output, "Game Over! Calculating Winner...")?;

        let result = state.game_result();
        writeln!(output, "{}", result)?;

        Ok(GameOutcome::Finished(result))
    }
}
