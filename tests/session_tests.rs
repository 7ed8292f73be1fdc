//! Whole-game behaviour of `GameSession` through the public API.

use connect_n::game::{Cell, GameConfig, GameSession, Outcome, Player, Position, SessionState};
use connect_n::EngineError;
use quickcheck::quickcheck;

/// Fills a 7x6 board with no four in a row when Player 1 opens.
const DRAW_SEQUENCE: [usize; 42] = [
    0, 3, 0, 6, 1, 3, 0, 5, 4, 1, 1, 1, 1, 2, 4, 3, 5, 2, 3, 3, 1, 0, 0, 5, 3, 0, 2, 6, 6, 2, 2,
    6, 6, 4, 6, 2, 4, 4, 5, 5, 4, 5,
];

fn standard_session() -> GameSession {
    GameSession::new(GameConfig::default()).unwrap()
}

/// Play `columns` and return the outcome of the last drop.
fn play(session: &mut GameSession, columns: &[usize]) -> Outcome {
    let mut last = None;
    for &col in columns {
        last = Some(session.drop_token(col).unwrap());
    }
    last.expect("at least one move")
}

fn cells(coords: &[(usize, usize)]) -> Vec<Position> {
    coords.iter().map(|&c| Position::from(c)).collect()
}

#[test]
fn horizontal_alignment_wins_on_fourth_token() {
    let mut session = standard_session();
    // Player 2 answers on row 1 above each Player 1 token
    let outcome = play(&mut session, &[0, 0, 1, 1, 2, 2, 3]);
    assert_eq!(
        outcome,
        Outcome::Win {
            landing: Position::new(3, 0),
            player: Player::Player1,
            cells: cells(&[(0, 0), (1, 0), (2, 0), (3, 0)]),
        }
    );
}

#[test]
fn second_player_can_win_and_rows_above_the_floor_count() {
    let mut session = standard_session();
    // Player 2 takes row 0 while Player 1 stacks on top
    let outcome = play(&mut session, &[6, 0, 0, 1, 1, 2, 2, 3]);
    assert_eq!(
        outcome,
        Outcome::Win {
            landing: Position::new(3, 0),
            player: Player::Player2,
            cells: cells(&[(0, 0), (1, 0), (2, 0), (3, 0)]),
        }
    );

    let mut session = standard_session();
    let outcome = play(&mut session, &[0, 6, 0, 1, 1, 2, 2, 3, 3]);
    assert_eq!(
        outcome,
        Outcome::Win {
            landing: Position::new(3, 1),
            player: Player::Player1,
            cells: cells(&[(0, 1), (1, 1), (2, 1), (3, 1)]),
        }
    );
}

#[test]
fn vertical_alignment_wins() {
    let mut session = standard_session();
    let outcome = play(&mut session, &[4, 5, 4, 5, 4, 5, 4]);
    assert_eq!(
        outcome,
        Outcome::Win {
            landing: Position::new(4, 3),
            player: Player::Player1,
            cells: cells(&[(4, 0), (4, 1), (4, 2), (4, 3)]),
        }
    );
}

#[test]
fn rising_diagonal_wins() {
    let mut session = standard_session();
    // P1: (0,0) (1,1) (2,2) (3,3)
    let outcome = play(&mut session, &[0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3]);
    assert_eq!(
        outcome,
        Outcome::Win {
            landing: Position::new(3, 3),
            player: Player::Player1,
            cells: cells(&[(0, 0), (1, 1), (2, 2), (3, 3)]),
        }
    );
}

#[test]
fn falling_diagonal_wins() {
    let mut session = standard_session();
    // P1: (6,0) (5,1) (4,2) (3,3)
    let outcome = play(&mut session, &[6, 5, 5, 4, 4, 3, 4, 3, 3, 0, 3]);
    assert_eq!(
        outcome,
        Outcome::Win {
            landing: Position::new(3, 3),
            player: Player::Player1,
            cells: cells(&[(3, 3), (4, 2), (5, 1), (6, 0)]),
        }
    );
}

#[test]
fn full_board_without_alignment_is_a_draw_on_the_last_cell() {
    let mut session = standard_session();
    for (i, &col) in DRAW_SEQUENCE.iter().enumerate() {
        let outcome = session.drop_token(col).unwrap();
        let last = i + 1 == DRAW_SEQUENCE.len();
        assert_eq!(matches!(outcome, Outcome::Draw { .. }), last, "move {i}");
        assert_eq!(session.is_over(), last);
    }
    assert_eq!(session.state(), &SessionState::Draw);
}

#[test]
fn no_moves_after_game_ends_until_new_game() {
    let mut session = standard_session();
    play(&mut session, &[4, 5, 4, 5, 4, 5, 4]);
    let board = session.board().clone();

    for col in 0..7 {
        assert_eq!(session.drop_token(col), Err(EngineError::NotAcceptingMoves));
    }
    assert_eq!(session.board(), &board);

    session.new_game(GameConfig::default()).unwrap();
    assert!(session.drop_token(0).is_ok());
}

#[test]
fn new_game_after_win_switches_opener_and_clears_board() {
    let mut session = standard_session();
    let first_opener = session.active_player();
    play(&mut session, &[0, 0, 1, 1, 2, 2, 3]);

    session.new_game(GameConfig::default()).unwrap();
    assert_eq!(session.active_player(), first_opener.other());
    for x in 0..7 {
        for y in 0..6 {
            assert_eq!(session.cell_at(x, y), Ok(Cell::Empty));
        }
    }
    assert_eq!(session.state(), &SessionState::AwaitingMove);

    // and back again for the game after
    session.new_game(GameConfig::default()).unwrap();
    assert_eq!(session.active_player(), first_opener);
}

#[test]
fn larger_board_with_longer_alignment() {
    let mut session = GameSession::new(GameConfig::new(15, 14, 6)).unwrap();
    let mut moves = Vec::new();
    for col in 0..5 {
        moves.push(col);
        moves.push(col);
    }
    let before_last = play(&mut session, &moves);
    assert!(!before_last.is_terminal());

    let outcome = session.drop_token(5).unwrap();
    assert_eq!(
        outcome,
        Outcome::Win {
            landing: Position::new(5, 0),
            player: Player::Player1,
            cells: (0..6).map(|x| Position::new(x, 0)).collect(),
        }
    );
}

quickcheck! {
    fn turns_alternate_after_every_non_terminal_move(columns: Vec<u8>) -> bool {
        let mut session = standard_session();
        for column in columns {
            if session.is_over() {
                break;
            }
            let before = session.active_player();
            match session.drop_token(column as usize % 7) {
                Ok(Outcome::Continue { next_player, .. }) => {
                    if next_player == before || session.active_player() == before {
                        return false;
                    }
                }
                Ok(_) => {
                    if !session.is_over() {
                        return false;
                    }
                }
                Err(EngineError::ColumnFull(_)) => {
                    if session.active_player() != before {
                        return false;
                    }
                }
                Err(_) => return false,
            }
        }
        true
    }

    fn rejected_moves_change_nothing(columns: Vec<u8>, bad_column: u8) -> bool {
        let mut session = standard_session();
        for column in columns {
            if session.is_over() {
                break;
            }
            let _ = session.drop_token(column as usize % 7);
        }
        if session.is_over() {
            return true;
        }

        let board = session.board().clone();
        let active = session.active_player();
        let state = session.state().clone();
        let moves = session.moves().len();

        let out_of_range = 7 + bad_column as usize;
        let rejected = matches!(
            session.drop_token(out_of_range),
            Err(EngineError::ColumnOutOfRange { .. })
        );
        let full_rejected = match (0..7).find(|&c| board.is_column_full(c)) {
            Some(full) => session.drop_token(full) == Err(EngineError::ColumnFull(full)),
            None => true,
        };

        rejected
            && full_rejected
            && session.board() == &board
            && session.active_player() == active
            && session.state() == &state
            && session.moves().len() == moves
    }
}
