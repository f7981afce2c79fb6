//! Game session and turn control

use std::io::Write;

use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    agents::Agent,
    board::{Board, Mark},
};

/// A single applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub mark: Mark,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

/// What a single turn transition produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A move was applied and the game continues
    Placed(Move),
    /// A move was applied and ended the game
    Finished(Move, GameOutcome),
    /// The active agent submitted a coordinate the board rejected; the
    /// same agent retains the turn
    Rejected { row: usize, col: usize },
}

/// Assign marks to the two seats by an unbiased shuffle of {X, O}
pub fn shuffled_marks(rng: &mut impl Rng) -> (Mark, Mark) {
    let mut marks = [Mark::X, Mark::O];
    marks.shuffle(rng);
    (marks[0], marks[1])
}

/// A game in progress: the board, the two agents, and whose turn it is.
///
/// The board is exclusively owned by the session for its entire lifetime.
pub struct Session {
    board: Board,
    agents: [Box<dyn Agent>; 2],
    active: usize,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Session {
    /// Create a session from two agents holding opposite marks.
    ///
    /// The agent holding [`Mark::X`] moves first, regardless of seat order.
    pub fn new(agents: [Box<dyn Agent>; 2]) -> Self {
        debug_assert_ne!(agents[0].mark(), agents[1].mark());
        let active = if agents[0].mark() == Mark::X { 0 } else { 1 };
        Session {
            board: Board::new(),
            agents,
            active,
            moves: Vec::new(),
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The final outcome, once the session has reached a terminal state
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// The moves applied so far, in order
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The agent whose move is awaited
    pub fn active_agent(&self) -> &dyn Agent {
        self.agents[self.active].as_ref()
    }

    /// Perform one turn transition.
    ///
    /// Asks the active agent for a move and applies it. A placement the
    /// board rejects leaves the same agent active; this can only happen if
    /// an agent violates its contract, since both variants pre-validate.
    /// After a successful placement the acting mark is checked for a win,
    /// then the board for fullness; otherwise the other agent becomes
    /// active.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::GameOver`] when called on a finished session,
    /// or with whatever error the active agent's move selection produced.
    ///
    /// [`Error::GameOver`]: crate::Error::GameOver
    pub fn advance(&mut self) -> Result<Step> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let mark = self.agents[self.active].mark();
        let (row, col) = self.agents[self.active].select_move(&self.board)?;

        let (row, col) = match self.board.set_cell(row, col, mark) {
            Ok(coordinate) => coordinate,
            Err(crate::Error::InvalidMove { row, col }) => return Ok(Step::Rejected { row, col }),
            Err(other) => return Err(other),
        };

        let mov = Move { row, col, mark };
        self.moves.push(mov);

        if self.board.has_won(mark) {
            self.outcome = Some(GameOutcome::Win(mark));
            return Ok(Step::Finished(mov, GameOutcome::Win(mark)));
        }
        if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
            return Ok(Step::Finished(mov, GameOutcome::Draw));
        }

        self.active = 1 - self.active;
        Ok(Step::Placed(mov))
    }

    /// Drive the session to a terminal state, reporting progress on `out`.
    ///
    /// Renders the board before the first move and after every applied
    /// move, announces each move with the acting agent's name, and
    /// announces the winning mark or a draw before returning.
    pub fn run(&mut self, out: &mut impl Write) -> Result<GameOutcome> {
        writeln!(out, "{}", self.board)?;
        loop {
            let name = self.active_agent().name().to_string();
            match self.advance()? {
                Step::Placed(mov) => {
                    writeln!(out, "{} places {} at {} {}", name, mov.mark, mov.row, mov.col)?;
                    writeln!(out, "{}", self.board)?;
                }
                Step::Finished(mov, outcome) => {
                    writeln!(out, "{} places {} at {} {}", name, mov.mark, mov.row, mov.col)?;
                    writeln!(out, "{}", self.board)?;
                    match outcome {
                        GameOutcome::Win(mark) => writeln!(out, "Player {mark} wins!")?,
                        GameOutcome::Draw => writeln!(out, "It's a draw!")?,
                    }
                    return Ok(outcome);
                }
                Step::Rejected { .. } => {}
            }
        }
    }
}
