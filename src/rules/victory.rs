//! Win condition.
//!
//! A player loses the moment their summoner's life reaches 0. The check
//! runs after every damage event; once the game is over the result is
//! frozen until a reset.

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{GameState, PlayerId};

/// Game outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Both summoners fell.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

fn summoner_fallen(state: &GameState, player: PlayerId) -> bool {
    state
        .units
        .iter()
        .any(|u| u.is_summoner && u.owner == player && !u.is_alive())
}

/// Evaluate the win condition without changing anything.
///
/// Positions without summoners never end.
#[must_use]
pub fn evaluate(state: &GameState) -> Option<GameResult> {
    match (
        summoner_fallen(state, PlayerId::A),
        summoner_fallen(state, PlayerId::B),
    ) {
        (false, false) => None,
        (true, false) => Some(GameResult::Winner(PlayerId::B)),
        (false, true) => Some(GameResult::Winner(PlayerId::A)),
        (true, true) => Some(GameResult::Draw),
    }
}

/// Re-check the win condition and enter the game-over state if it holds.
///
/// Returns the result when the game is (or already was) over.
pub fn settle(state: &mut GameState) -> Option<GameResult> {
    if state.game_over {
        return Some(match state.winner {
            Some(player) => GameResult::Winner(player),
            None => GameResult::Draw,
        });
    }

    let result = evaluate(state)?;
    state.game_over = true;
    state.winner = result.winner();
    let line = match state.winner {
        Some(player) => format!("Game Over! {} wins!", player),
        None => "Game Over! Both summoners have fallen.".to_string(),
    };
    info!("{}", line);
    state.log(line);
    Some(result)
}
