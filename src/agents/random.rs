//! Uniformly random opponent

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::Agent;
use crate::{
    Result,
    board::{Board, Mark},
};

/// Agent that selects uniformly at random among the empty cells.
///
/// The generator is owned and seedable, so play is reproducible under a
/// fixed seed together with the board's row-major spot ordering.
pub struct RandomAgent {
    mark: Mark,
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent with a fresh seed
    pub fn new(name: String, mark: Mark) -> Self {
        Self::with_seed(name, mark, rand::random())
    }

    /// Create a random agent with a deterministic seed
    pub fn with_seed(name: String, mark: Mark, seed: u64) -> Self {
        RandomAgent {
            mark,
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// Select a uniformly random empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] if the board is full. The turn
    /// controller never requests a move in that state.
    ///
    /// [`Error::NoValidMoves`]: crate::Error::NoValidMoves
    fn select_move(&mut self, board: &Board) -> Result<(usize, usize)> {
        let spots = board.empty_spots();
        if spots.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..spots.len());
        Ok(spots[index])
    }
}
