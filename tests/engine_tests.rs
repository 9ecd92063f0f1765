//! Rules engine integration tests: construction, legality, flipping, turn
//! skipping, loading, simulation, and persistence.

use reversi_arena::core::{GameConfig, PlayerId, Pos, ReversiError};
use reversi_arena::rules::{GameResult, GameSnapshot, GameStatus, ReversiEngine};

fn p(id: u8) -> PlayerId {
    PlayerId::new(id)
}

/// Parse rows like `"1 2 . ."`: digits are players, `.` is empty.
fn grid(rows: &[&str]) -> Vec<Vec<Option<PlayerId>>> {
    rows.iter()
        .map(|row| {
            row.split_whitespace()
                .map(|cell| match cell {
                    "." => None,
                    digits => Some(PlayerId::new(digits.parse().unwrap())),
                })
                .collect()
        })
        .collect()
}

fn empty_game(side: usize, players: usize) -> ReversiEngine {
    ReversiEngine::new(GameConfig::new(side, players)).unwrap()
}

/// Loaded 4×4 position where player 1 cannot capture either corner.
fn corner_position() -> ReversiEngine {
    let mut engine = empty_game(4, 2);
    engine
        .load_game(
            p(1),
            &grid(&[
                "2 1 1 1", //
                "1 1 1 1",
                "1 1 1 1",
                "2 1 . .",
            ]),
        )
        .unwrap();
    engine
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_parity_must_match() {
    for (side, players) in [(4, 2), (5, 1), (9, 3), (6, 4), (1, 1)] {
        assert!(
            ReversiEngine::new(GameConfig::new(side, players)).is_ok(),
            "{side}x{side} with {players} players should be accepted"
        );
    }
    for (side, players) in [(5, 2), (4, 3), (8, 1)] {
        let err = ReversiEngine::new(GameConfig::new(side, players)).unwrap_err();
        assert!(matches!(err, ReversiError::InvalidConstruction(_)));
    }
}

#[test]
fn test_othello_needs_two_players() {
    let err = ReversiEngine::new(GameConfig::new(6, 4).with_othello(true)).unwrap_err();
    assert!(matches!(err, ReversiError::InvalidConstruction(_)));
}

#[test]
fn test_classic_start() {
    let engine = ReversiEngine::new(GameConfig::othello()).unwrap();

    assert_eq!(engine.piece_at(Pos::new(3, 4)).unwrap(), Some(p(1)));
    assert_eq!(engine.piece_at(Pos::new(4, 3)).unwrap(), Some(p(1)));
    assert_eq!(engine.piece_at(Pos::new(3, 3)).unwrap(), Some(p(2)));
    assert_eq!(engine.piece_at(Pos::new(4, 4)).unwrap(), Some(p(2)));
    assert_eq!(engine.count(p(1)), 2);
    assert_eq!(engine.count(p(2)), 2);
    assert_eq!(engine.turn(), p(1));
    assert!(engine.center_filled());
    assert_eq!(
        engine.available_moves(),
        vec![Pos::new(2, 3), Pos::new(3, 2), Pos::new(4, 5), Pos::new(5, 4)]
    );
}

#[test]
fn test_empty_board_opens_on_center() {
    let engine = empty_game(4, 2);
    let center = vec![Pos::new(1, 1), Pos::new(1, 2), Pos::new(2, 1), Pos::new(2, 2)];

    assert_eq!(engine.center(), center);
    assert_eq!(engine.available_moves_for(p(1)), center);
    assert_eq!(engine.available_moves_for(p(2)), center);
    assert!(engine.available_moves_for(p(3)).is_empty());
}

// =============================================================================
// Moves
// =============================================================================

#[test]
fn test_apply_move_flips_between() {
    let mut engine = ReversiEngine::new(GameConfig::othello()).unwrap();
    engine.apply_move(Pos::new(2, 3)).unwrap();

    assert_eq!(engine.piece_at(Pos::new(2, 3)).unwrap(), Some(p(1)));
    assert_eq!(engine.piece_at(Pos::new(3, 3)).unwrap(), Some(p(1)));
    assert_eq!(engine.count(p(1)), 4);
    assert_eq!(engine.count(p(2)), 1);
    assert_eq!(engine.turn(), p(2));
}

#[test]
fn test_illegal_move_changes_nothing() {
    let mut engine = ReversiEngine::new(GameConfig::othello()).unwrap();
    let before = engine.grid();

    let err = engine.apply_move(Pos::new(0, 0)).unwrap_err();
    assert_eq!(
        err,
        ReversiError::IllegalMove {
            pos: Pos::new(0, 0),
            player: p(1)
        }
    );

    let err = engine.apply_move(Pos::new(8, 0)).unwrap_err();
    assert!(matches!(err, ReversiError::OutOfBounds { side: 8, .. }));

    assert_eq!(engine.grid(), before);
    assert_eq!(engine.turn(), p(1));
}

#[test]
fn test_flip_fills_gap_up_to_own_piece() {
    let mut engine = empty_game(8, 2);
    engine
        .load_game(
            p(1),
            &grid(&[
                ". 2 1 . . . . .", //
                "2 . . . . . . .",
                ". . . . . . . .",
                "1 . . 2 2 . . .",
                ". . . 2 2 . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
            ]),
        )
        .unwrap();

    // Legal through the contiguous run east; the run south has a gap.
    engine.apply_move(Pos::new(0, 0)).unwrap();

    assert_eq!(engine.piece_at(Pos::new(0, 1)).unwrap(), Some(p(1)));
    assert_eq!(engine.piece_at(Pos::new(1, 0)).unwrap(), Some(p(1)));
    assert_eq!(engine.piece_at(Pos::new(2, 0)).unwrap(), Some(p(1)));
    // South-east reaches the edge without a player 1 piece.
    assert_eq!(engine.piece_at(Pos::new(1, 1)).unwrap(), None);
    assert_eq!(engine.piece_at(Pos::new(3, 3)).unwrap(), Some(p(2)));
    assert_eq!(engine.count(p(1)), 6);
    assert_eq!(engine.count(p(2)), 4);
}

#[test]
fn test_three_player_run_mixes_opponents() {
    let mut engine = empty_game(7, 3);
    engine
        .load_game(
            p(1),
            &grid(&[
                "1 . 2 3 1 . .", //
                ". . . . . . .",
                ". . 2 2 2 . .",
                ". . 3 3 3 . .",
                ". . 2 3 2 . .",
                ". . . . . . .",
                ". . . . . . .",
            ]),
        )
        .unwrap();
    assert!(engine.center_filled());
    assert!(engine.legal_move(Pos::new(0, 1)).unwrap());

    engine.apply_move(Pos::new(0, 1)).unwrap();

    for col in 0..5 {
        assert_eq!(engine.piece_at(Pos::new(0, col)).unwrap(), Some(p(1)));
    }
    assert_eq!(engine.count(p(1)), 5);
    assert_eq!(engine.count(p(2)), 5);
    assert_eq!(engine.count(p(3)), 4);
    assert_eq!(engine.piece_at(Pos::new(1, 2)).unwrap(), None);
}

#[test]
fn test_center_phase_flips_nothing() {
    // 6×6 with four players has a 4×4 center block.
    let mut engine = empty_game(6, 4);
    assert_eq!(engine.center().len(), 16);

    engine.apply_move(Pos::new(1, 1)).unwrap(); // player 1
    engine.apply_move(Pos::new(1, 2)).unwrap(); // player 2
    engine.apply_move(Pos::new(2, 1)).unwrap(); // player 3
    engine.apply_move(Pos::new(2, 2)).unwrap(); // player 4
    engine.apply_move(Pos::new(1, 3)).unwrap(); // player 1, would bracket (1, 2)

    assert_eq!(engine.piece_at(Pos::new(1, 2)).unwrap(), Some(p(2)));
    assert_eq!(engine.count(p(1)), 2);
    assert_eq!(engine.turn(), p(2));
}

#[test]
fn test_off_center_illegal_until_center_filled() {
    let mut engine = empty_game(4, 2);
    assert!(!engine.legal_move(Pos::new(0, 0)).unwrap());

    for pos in [Pos::new(1, 1), Pos::new(1, 2), Pos::new(2, 1), Pos::new(2, 2)] {
        engine.apply_move(pos).unwrap();
    }
    assert!(engine.center_filled());
    assert_eq!(engine.turn(), p(1));
    assert_eq!(
        engine.available_moves(),
        vec![Pos::new(0, 3), Pos::new(1, 3), Pos::new(2, 3), Pos::new(3, 3)]
    );
}

// =============================================================================
// Turns and termination
// =============================================================================

#[test]
fn test_load_skips_player_without_moves() {
    let engine = corner_position();

    assert!(engine.available_moves_for(p(1)).is_empty());
    assert_eq!(engine.turn(), p(2));
    assert_eq!(engine.available_moves(), vec![Pos::new(3, 2), Pos::new(3, 3)]);
}

#[test]
fn test_turn_skip_and_game_end() {
    let mut engine = corner_position();

    engine.apply_move(Pos::new(3, 2)).unwrap();
    assert_eq!(engine.piece_at(Pos::new(3, 1)).unwrap(), Some(p(2)));
    // Player 1 still cannot move, so player 2 goes again.
    assert_eq!(engine.turn(), p(2));
    assert_eq!(engine.status(), GameStatus::InProgress);

    engine.apply_move(Pos::new(3, 3)).unwrap();
    assert_eq!(engine.piece_at(Pos::new(1, 1)).unwrap(), Some(p(2)));
    assert_eq!(engine.piece_at(Pos::new(2, 2)).unwrap(), Some(p(2)));
    assert!(engine.is_done());
    assert_eq!(engine.count(p(1)), 9);
    assert_eq!(engine.count(p(2)), 7);
    assert_eq!(engine.outcome().as_slice(), &[p(1)]);
    assert_eq!(engine.result(), Some(GameResult::Winner(p(1))));

    let err = engine.apply_move(Pos::new(0, 0)).unwrap_err();
    assert!(matches!(err, ReversiError::IllegalMove { .. }));
}

#[test]
fn test_single_player_single_square() {
    let mut engine = empty_game(1, 1);
    assert_eq!(engine.available_moves(), vec![Pos::new(0, 0)]);

    engine.apply_move(Pos::new(0, 0)).unwrap();
    assert!(engine.is_done());
    assert_eq!(engine.outcome().as_slice(), &[p(1)]);
}

#[test]
fn test_tie_lists_every_leader() {
    let mut engine = empty_game(2, 2);
    for pos in Pos::all(2) {
        engine.apply_move(pos).unwrap();
    }

    assert!(engine.is_done());
    assert_eq!(engine.outcome().as_slice(), &[p(1), p(2)]);
    assert!(engine.result().unwrap().is_tied(p(2)));
}

#[test]
fn test_three_player_center_rotation() {
    let mut engine = empty_game(9, 3);
    let center = engine.center();
    assert_eq!(center.len(), 9);

    for (i, pos) in center.iter().enumerate() {
        assert_eq!(engine.turn(), PlayerId::new((i % 3) as u8 + 1));
        engine.apply_move(*pos).unwrap();
    }

    assert!(engine.center_filled());
    for player in engine.players() {
        assert_eq!(engine.count(player), 3);
    }
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_load_rejects_bad_input_without_change() {
    let mut engine = ReversiEngine::new(GameConfig::othello()).unwrap();
    let before = engine.grid();

    let short = vec![vec![None; 8]; 7];
    assert!(matches!(
        engine.load_game(p(1), &short),
        Err(ReversiError::InvalidState(_))
    ));

    let mut stranger = vec![vec![None; 8]; 8];
    stranger[0][0] = Some(p(3));
    assert!(matches!(
        engine.load_game(p(1), &stranger),
        Err(ReversiError::InvalidState(_))
    ));

    assert!(matches!(
        engine.load_game(p(3), &before),
        Err(ReversiError::InvalidState(_))
    ));

    assert_eq!(engine.grid(), before);
    assert_eq!(engine.turn(), p(1));
}

#[test]
fn test_load_recounts_pieces() {
    let mut engine = empty_game(4, 2);
    engine
        .load_game(
            p(2),
            &grid(&[
                "1 1 . .", //
                ". 1 2 .",
                ". 2 1 .",
                ". . . 2",
            ]),
        )
        .unwrap();

    assert_eq!(engine.count(p(1)), 4);
    assert_eq!(engine.count(p(2)), 3);
    assert_eq!(
        engine.locations(p(2)),
        vec![Pos::new(1, 2), Pos::new(2, 1), Pos::new(3, 3)]
    );
}

// =============================================================================
// Simulation
// =============================================================================

#[test]
fn test_simulate_leaves_receiver_untouched() {
    let engine = corner_position();
    let before = engine.grid();

    let after = engine
        .simulate(&[Pos::new(3, 2), Pos::new(3, 3)])
        .unwrap();

    assert_eq!(engine.grid(), before);
    assert_eq!(engine.turn(), p(2));
    assert!(!engine.is_done());

    // Both moves fall to player 2, matching the skip rule.
    assert!(after.is_done());
    assert_eq!(after.count(p(2)), 7);
}

#[test]
fn test_simulate_matches_apply() {
    let mut live = ReversiEngine::new(GameConfig::othello()).unwrap();
    let moves = [Pos::new(2, 3), Pos::new(2, 2), Pos::new(2, 1)];
    let simulated = live.simulate(&moves).unwrap();

    for pos in moves {
        live.apply_move(pos).unwrap();
    }
    assert_eq!(simulated.grid(), live.grid());
    assert_eq!(simulated.turn(), live.turn());
}

#[test]
fn test_simulate_illegal_move_errors() {
    let engine = ReversiEngine::new(GameConfig::othello()).unwrap();
    let err = engine.simulate(&[Pos::new(0, 0)]).unwrap_err();
    assert!(matches!(err, ReversiError::IllegalMove { .. }));
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_snapshot_json_restores_game() {
    let mut engine = ReversiEngine::new(GameConfig::othello()).unwrap();
    engine.apply_move(Pos::new(2, 3)).unwrap();

    let json = engine.snapshot().to_json().unwrap();
    let snapshot = GameSnapshot::from_json(&json).unwrap();
    let restored = ReversiEngine::from_snapshot(&snapshot).unwrap();

    assert_eq!(restored.grid(), engine.grid());
    assert_eq!(restored.turn(), p(2));
    assert!(restored.is_othello());
}

#[test]
fn test_snapshot_bytes_restore_in_place() {
    let source = corner_position();
    let bytes = source.snapshot().to_bytes().unwrap();

    let mut target = empty_game(4, 2);
    target.restore(&GameSnapshot::from_bytes(&bytes).unwrap()).unwrap();
    assert_eq!(target.grid(), source.grid());
    assert_eq!(target.turn(), p(2));
}
