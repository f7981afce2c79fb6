//! Executable wiring for the interactive game

use std::io::{self, BufReader, Write};

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    Result,
    agents::{Agent, HumanAgent, RandomAgent},
    session::{Session, shuffled_marks},
};

/// Play one interactive game: human on stdin against a random opponent.
///
/// Mark assignment is a fresh unbiased shuffle; whichever seat draws X
/// opens. The winning mark or a draw is announced before returning.
pub fn play() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(rand::random());
    let (human_mark, computer_mark) = shuffled_marks(&mut rng);

    let human = HumanAgent::new(
        "Player".to_string(),
        human_mark,
        BufReader::new(io::stdin()),
        io::stdout(),
    );
    let computer = RandomAgent::new("Computer".to_string(), computer_mark);

    let agents: [Box<dyn Agent>; 2] = [Box::new(human), Box::new(computer)];
    let mut session = Session::new(agents);

    let mut out = io::stdout();
    writeln!(
        out,
        "{} ({}) moves first",
        session.active_agent().name(),
        session.active_agent().mark()
    )?;
    session.run(&mut out)?;
    Ok(())
}
