//! Tic-tac-toe against a randomly-moving computer opponent
//!
//! This crate provides:
//! - A 3x3 board with placement validation and win/draw detection
//! - A polymorphic agent seam with human and random implementations
//! - A turn-controller session that alternates agents to a terminal state

pub mod agents;
pub mod board;
pub mod cli;
pub mod error;
pub mod lines;
pub mod session;

pub use agents::{Agent, HumanAgent, RandomAgent};
pub use board::{Board, Cell, Mark};
pub use error::{Error, Result};
pub use session::{GameOutcome, Move, Session, Step, shuffled_marks};
