//! End-to-end session scenarios over the public API

use std::io::Cursor;

use rand::{SeedableRng, rngs::StdRng};
use tictactoe::{
    Agent, Board, GameOutcome, HumanAgent, Mark, RandomAgent, Result, Session, Step,
    shuffled_marks,
};

/// Agent that plays a predetermined move sequence without validation
struct ScriptedAgent {
    mark: Mark,
    name: String,
    moves: std::vec::IntoIter<(usize, usize)>,
}

impl ScriptedAgent {
    fn new(mark: Mark, moves: Vec<(usize, usize)>) -> Self {
        ScriptedAgent {
            mark,
            name: format!("Scripted {mark:?}"),
            moves: moves.into_iter(),
        }
    }
}

impl Agent for ScriptedAgent {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(&mut self, _board: &Board) -> Result<(usize, usize)> {
        self.moves.next().ok_or(tictactoe::Error::NoValidMoves)
    }
}

fn scripted_session(x_moves: Vec<(usize, usize)>, o_moves: Vec<(usize, usize)>) -> Session {
    Session::new([
        Box::new(ScriptedAgent::new(Mark::X, x_moves)),
        Box::new(ScriptedAgent::new(Mark::O, o_moves)),
    ])
}

#[test]
fn scenario_top_row_win() {
    // X places the top row with O answering twice in the middle row
    let mut session = scripted_session(vec![(0, 0), (0, 1), (0, 2)], vec![(1, 0), (1, 1)]);

    for _ in 0..4 {
        assert!(matches!(session.advance().unwrap(), Step::Placed(_)));
        assert_eq!(session.outcome(), None);
    }

    let step = session.advance().unwrap();
    assert!(matches!(step, Step::Finished(_, GameOutcome::Win(Mark::X))));
    assert_eq!(session.outcome(), Some(GameOutcome::Win(Mark::X)));
    assert_eq!(session.moves().len(), 5);
}

#[test]
fn scenario_nine_moves_without_a_line_is_a_draw() {
    // X O X / X O X / O X O
    let mut session = scripted_session(
        vec![(0, 0), (0, 2), (1, 0), (1, 2), (2, 1)],
        vec![(0, 1), (1, 1), (2, 0), (2, 2)],
    );

    let mut out = Vec::new();
    let outcome = session.run(&mut out).unwrap();
    assert_eq!(outcome, GameOutcome::Draw);
    assert_eq!(session.moves().len(), 9);
    assert!(session.board().is_full());
    assert!(String::from_utf8(out).unwrap().contains("It's a draw!"));
}

#[test]
fn scenario_placement_into_occupied_center_is_rejected() {
    // O violates its contract and targets the center X already holds
    let mut session = scripted_session(vec![(1, 1)], vec![(1, 1), (0, 0)]);

    assert!(matches!(session.advance().unwrap(), Step::Placed(_)));
    let before = *session.board();

    let step = session.advance().unwrap();
    assert_eq!(step, Step::Rejected { row: 1, col: 1 });
    assert_eq!(*session.board(), before, "rejected move must not mutate the board");
    assert_eq!(session.active_agent().mark(), Mark::O);
}

#[test]
fn mark_shuffle_is_statistically_fair() {
    let mut rng = StdRng::seed_from_u64(42);
    let trials = 1000;

    let first_seat_x = (0..trials)
        .filter(|_| shuffled_marks(&mut rng).0 == Mark::X)
        .count();

    // Unbiased shuffle: expect roughly half, with a generous tolerance
    assert!(
        (400..=600).contains(&first_seat_x),
        "first seat drew X {first_seat_x} times out of {trials}"
    );
}

#[test]
fn random_agent_always_plays_into_an_empty_spot() {
    let board = Board::from_string("XO.XO....").unwrap();
    let empty = board.empty_spots();

    for seed in 0..100 {
        let mut agent = RandomAgent::with_seed("Computer".to_string(), Mark::X, seed);
        let spot = agent.select_move(&board).unwrap();
        assert!(empty.contains(&spot), "seed {seed} picked {spot:?}");
    }
}

#[test]
fn random_versus_random_always_terminates_consistently() {
    for seed in 0..20 {
        let agents: [Box<dyn Agent>; 2] = [
            Box::new(RandomAgent::with_seed("P1".to_string(), Mark::X, seed)),
            Box::new(RandomAgent::with_seed("P2".to_string(), Mark::O, seed + 1000)),
        ];
        let mut session = Session::new(agents);

        let outcome = loop {
            match session.advance().unwrap() {
                Step::Placed(_) => {}
                Step::Finished(_, outcome) => break outcome,
                Step::Rejected { row, col } => {
                    panic!("random agent submitted occupied ({row}, {col}) with seed {seed}")
                }
            }
        };

        let moves = session.moves();
        assert!((5..=9).contains(&moves.len()), "seed {seed}: {} moves", moves.len());
        assert_eq!(session.board().occupied_count(), moves.len());
        match outcome {
            GameOutcome::Win(mark) => {
                assert!(session.board().has_won(mark));
                assert_eq!(moves.last().unwrap().mark, mark, "winner moved last");
            }
            GameOutcome::Draw => {
                assert!(session.board().is_full());
                assert!(!session.board().has_won(Mark::X));
                assert!(!session.board().has_won(Mark::O));
            }
        }
    }
}

#[test]
fn human_driven_game_reprompts_and_completes() {
    // The human holds X and wins the top row; the second line is malformed
    // and must be re-prompted without affecting the game
    let script = "0 0\nbanana\n0 1\n0 2\n";
    let human = HumanAgent::new(
        "Player".to_string(),
        Mark::X,
        Cursor::new(script.to_string()),
        Vec::new(),
    );
    let opponent = ScriptedAgent::new(Mark::O, vec![(2, 0), (2, 1)]);

    let agents: [Box<dyn Agent>; 2] = [Box::new(human), Box::new(opponent)];
    let mut session = Session::new(agents);

    let mut out = Vec::new();
    let outcome = session.run(&mut out).unwrap();
    assert_eq!(outcome, GameOutcome::Win(Mark::X));

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Player places X at 0 1"));
    assert!(output.contains("Player X wins!"));
}

#[test]
fn closed_input_stream_surfaces_as_an_error() {
    let human = HumanAgent::new(
        "Player".to_string(),
        Mark::X,
        Cursor::new(String::new()),
        Vec::new(),
    );
    let opponent = ScriptedAgent::new(Mark::O, vec![]);

    let agents: [Box<dyn Agent>; 2] = [Box::new(human), Box::new(opponent)];
    let mut session = Session::new(agents);

    assert!(matches!(session.advance(), Err(tictactoe::Error::Io(_))));
}
