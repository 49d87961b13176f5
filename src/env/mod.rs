//! Environment seam. The memory core never touches a rules engine; it
//! consumes board states, engine advice, and move sequencing through this
//! trait. The scripted implementation replays recorded opening lines.

mod openings;
mod scripted;

pub use openings::{french_defense, italian_game, ruy_lopez, sicilian_defense, OpeningLine, Ply};
pub use scripted::ScriptedEnvironment;

/// A recommended move with its evaluation, as produced by the environment's
/// engine oracle.
#[derive(Debug, Clone, PartialEq)]
pub struct Advice {
    pub mv: String,
    pub evaluation: f64,
}

/// External game environment as seen by the agents.
pub trait Environment {
    /// Current board state in a normalizable encoding (FEN for chess).
    fn board_state(&self) -> String;

    /// The engine's recommended move for the current state, or `None` when
    /// the environment has nothing further to play.
    fn best_move(&self) -> Option<Advice>;

    /// Apply a move to the environment. Returns false when the move is not
    /// playable in the current state.
    fn make_move(&mut self, mv: &str) -> bool;

    /// True once no further advice is available.
    fn is_finished(&self) -> bool {
        self.best_move().is_none()
    }
}
