use crate::{AgentAction, GameAgent, GameState, PlayerColor};
use std::collections::VecDeque;

/// Plays back a fixed list of actions, then quits.
/// Records the turn it was told about on every request.
pub struct ScriptedAgent<M> {
    script: VecDeque<AgentAction<M>>,
    turns_seen: Vec<PlayerColor>,
}

impl<M> ScriptedAgent<M> {
    pub fn new(script: impl IntoIterator<Item = AgentAction<M>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            turns_seen: Vec::new(),
        }
    }

    /// Builds a script that plays every move in order and never quits on its own.
    pub fn playing(moves: impl IntoIterator<Item = M>) -> Self {
        Self::new(moves.into_iter().map(AgentAction::Play))
    }

    pub fn turns_seen(&self) -> &[PlayerColor] {
        &self.turns_seen
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl<TState: GameState> GameAgent<TState> for ScriptedAgent<TState::Move> {
    fn pick_move(&mut self, _state: &TState, turn: PlayerColor) -> AgentAction<TState::Move> {
        self.turns_seen.push(turn);
        self.script.pop_front().unwrap_or(AgentAction::Quit)
    }
}
