//! Board and engine behaviour over whole games

use qtictactoe::{
    Error,
    tictactoe::{Board, GameEngine, GameStatus, Player, mark_for_ply},
};
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

fn board(cells: &str) -> Board {
    Board::from_string(cells).unwrap()
}

#[test]
fn test_row_win_detected_on_last_move() {
    let b = board("XXX      ");
    assert!(b.is_winning_move(2, Player::X));
    assert_eq!(b.winner(), Some(Player::X));
}

#[test]
fn test_diagonal_wins_detected_on_last_move() {
    let main = board("X   X   X");
    assert!(main.is_winning_move(8, Player::X));

    let anti = board("  X X X  ");
    assert!(anti.is_winning_move(2, Player::X));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let b = board("XOXXOOOXX");
    assert!(b.is_full());
    assert!(!b.has_won(Player::X));
    assert!(!b.has_won(Player::O));
    assert_eq!(b.winner(), None);
    assert_eq!(b.status(), GameStatus::Drawn);
}

#[test]
fn test_legal_actions_are_empty_cells() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..200 {
        let mut engine = GameEngine::new();
        engine.reset();
        while !engine.status().is_terminal() {
            let legal = engine.legal_actions();
            let expected: Vec<usize> = (0..9).filter(|&i| engine.board().is_empty(i)).collect();
            assert_eq!(legal, expected);
            assert_eq!(engine.is_full(), legal.is_empty());

            let action = *legal.choose(&mut rng).unwrap();
            let mark = mark_for_ply(Player::X, engine.ply());
            engine.apply_move(action, mark).unwrap();
        }
        assert_eq!(engine.is_full(), engine.legal_actions().is_empty());
    }
}

#[test]
fn test_outcome_is_unique_and_sticky() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..200 {
        let mut engine = GameEngine::new();
        engine.reset();
        let mut decided: Option<GameStatus> = None;

        loop {
            let status = engine.status();
            let x = engine.board().has_won(Player::X);
            let o = engine.board().has_won(Player::O);
            assert!(!(x && o), "both marks hold a line");

            if let Some(previous) = decided {
                assert_eq!(status, previous);
            }
            if status.is_terminal() {
                decided = Some(status);
                let legal = engine.legal_actions();
                if let Some(&action) = legal.first() {
                    let mark = mark_for_ply(Player::X, engine.ply());
                    assert!(matches!(engine.apply_move(action, mark), Err(Error::GameOver)));
                    assert_eq!(engine.status(), status);
                }
                break;
            }

            let action = *engine.legal_actions().choose(&mut rng).unwrap();
            let mark = mark_for_ply(Player::X, engine.ply());
            engine.apply_move(action, mark).unwrap();
        }
    }
}

#[test]
fn test_engine_rejects_bad_moves() {
    let mut engine = GameEngine::new();
    engine.reset();
    engine.apply_move(4, Player::X).unwrap();

    assert!(matches!(
        engine.apply_move(4, Player::O),
        Err(Error::IllegalMove { position: 4 })
    ));
    assert!(matches!(
        engine.apply_move(9, Player::O),
        Err(Error::InvalidPosition { position: 9 })
    ));
    assert_eq!(engine.ply(), 1);
}

#[test]
fn test_state_key_tracks_moves() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.reset().as_str(), ".........");
    engine.apply_move(0, Player::X).unwrap();
    engine.apply_move(4, Player::O).unwrap();
    assert_eq!(engine.state().as_str(), "X...O....");
}
