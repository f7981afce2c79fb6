//! Player agents
//!
//! An agent is an identity bound to one mark together with the capability
//! to select a move for the current board. Two variants exist: a human
//! driven by an external input stream, and a uniformly random opponent.

pub mod human;
pub mod random;

pub use human::HumanAgent;
pub use random::RandomAgent;

use crate::{
    Result,
    board::{Board, Mark},
};

/// Agent trait - the single polymorphic seam of the game
///
/// # Contract
///
/// `select_move` must return the coordinates of a currently-empty cell.
/// Both implementations pre-validate against the board, so the turn
/// controller's own placement check never fires during normal play.
pub trait Agent: Send {
    /// The mark this agent plays
    fn mark(&self) -> Mark;

    /// Human-readable name used in announcements
    fn name(&self) -> &str;

    /// Select a move for the given board.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input source fails, or if no
    /// valid moves are available.
    fn select_move(&mut self, board: &Board) -> Result<(usize, usize)>;
}
