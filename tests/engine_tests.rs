//! Turn state machine integration tests.
//!
//! These tests drive whole games through the public command surface and
//! check the roll, hold and claim rules between every step.

use proptest::prelude::*;
use thirty::{
    ClaimError, CombinationFinder, GameConfig, GamePhase, ScoreCategory, ScoreSnapshot,
    ThirtyGame,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn new_game(seed: u64) -> ThirtyGame {
    init_tracing();
    ThirtyGame::new(GameConfig::default(), seed).unwrap()
}

/// Claim every category in declaration order, rolling to the limit each turn.
fn play_out(game: &mut ThirtyGame) {
    for category in ScoreCategory::all() {
        while game.is_roll_allowed() {
            game.roll();
        }
        game.select_category(category);
        game.claim().unwrap();
    }
}

// =============================================================================
// Rolling and Holding
// =============================================================================

/// Held dice keep their value across every roll of the turn.
#[test]
fn test_held_die_survives_rolls() {
    let mut game = new_game(42);
    let kept = game.dice_values()[2];

    game.toggle_hold(2);
    game.roll();
    game.roll();

    assert_eq!(game.dice_values()[2], kept);
    assert!(game.held_flags()[2]);
}

/// Holding every die freezes the roll, yet the roll still counts.
#[test]
fn test_all_held_roll_counts() {
    let mut game = new_game(9);
    let before = game.dice_values();
    for i in 0..6 {
        game.toggle_hold(i);
    }

    game.roll();

    assert_eq!(game.dice_values(), before);
    assert_eq!(game.roll_count(), 2);
}

/// Toggling twice releases the die again.
#[test]
fn test_double_toggle_releases() {
    let mut game = new_game(1);
    game.toggle_hold(0);
    game.toggle_hold(0);
    assert!(!game.held_flags()[0]);
}

/// Rolls stop at `max_rolls`.
#[test]
fn test_roll_allowed_until_limit() {
    let config = GameConfig::default().with_max_rolls(5);
    let mut game = ThirtyGame::new(config, 3).unwrap();

    for expected in 2..=5 {
        assert!(game.is_roll_allowed());
        game.roll();
        assert_eq!(game.roll_count(), expected);
    }
    assert!(!game.is_roll_allowed());
}

/// With a single roll per turn, rolling is never allowed.
#[test]
fn test_single_roll_turns() {
    let config = GameConfig::default().with_max_rolls(1);
    let mut game = ThirtyGame::new(config, 3).unwrap();
    assert!(!game.is_roll_allowed());

    game.claim().unwrap();
    assert_eq!(game.roll_count(), 1);
    assert!(!game.is_roll_allowed());
}

/// Candidate scores always describe the dice on the table.
#[test]
fn test_candidates_track_every_roll() {
    let mut game = new_game(77);
    let finder = CombinationFinder::default();

    for category in [ScoreCategory::Low, ScoreCategory::Nines, ScoreCategory::Eights] {
        while game.is_roll_allowed() {
            game.roll();
            assert_eq!(
                game.candidate_scores(),
                &finder.candidate_scores(&game.dice_values())
            );
        }
        game.select_category(category);
        game.claim().unwrap();
        assert_eq!(
            game.candidate_scores(),
            &finder.candidate_scores(&game.dice_values())
        );
    }
}

// =============================================================================
// Claiming
// =============================================================================

/// Selecting a claimed category is allowed; claiming it is not.
#[test]
fn test_reselect_claimed_category() {
    let mut game = new_game(42);
    game.select_category(ScoreCategory::Tens);
    let recorded = game.claim().unwrap();

    game.select_category(ScoreCategory::Tens);
    assert_eq!(game.selected_category(), ScoreCategory::Tens);

    let sheet_before = game.snapshot();
    assert_eq!(game.claim(), Err(ClaimError::AlreadyClaimed(ScoreCategory::Tens)));
    assert_eq!(game.snapshot(), sheet_before);
    assert_eq!(game.category_scores()[ScoreCategory::Tens].score(), recorded);
}

/// A claimed score never moves, whatever happens later.
#[test]
fn test_claimed_score_frozen() {
    let mut game = new_game(5);
    game.select_category(ScoreCategory::Low);
    let low = game.claim().unwrap();

    for category in [ScoreCategory::Fours, ScoreCategory::Fives] {
        game.roll();
        game.roll();
        game.select_category(category);
        game.claim().unwrap();
        assert_eq!(game.category_scores()[ScoreCategory::Low].score(), low);
    }
}

/// The selected category survives a claim.
#[test]
fn test_selection_kept_after_claim() {
    let mut game = new_game(5);
    game.select_category(ScoreCategory::Elevens);
    game.claim().unwrap();
    assert_eq!(game.selected_category(), ScoreCategory::Elevens);
    assert!(game.claim().is_err());
}

/// Available categories shrink in declaration order.
#[test]
fn test_available_categories_shrink() {
    let mut game = new_game(8);
    game.select_category(ScoreCategory::Sixes);
    game.claim().unwrap();
    game.select_category(ScoreCategory::Low);
    game.claim().unwrap();

    let available = game.available_categories();
    assert_eq!(available.len(), 8);
    assert!(!available.contains(&ScoreCategory::Sixes));
    assert!(!available.contains(&ScoreCategory::Low));
    assert_eq!(available[0], ScoreCategory::Fours);
}

// =============================================================================
// Game Completion
// =============================================================================

/// Ten claims finish the game, and nothing moves afterwards.
#[test]
fn test_full_game_finishes() {
    let mut game = new_game(2024);
    play_out(&mut game);

    assert_eq!(game.phase(), GamePhase::Finished);
    assert!(game.available_categories().is_empty());
    assert!(!game.is_roll_allowed());
    assert!(!game.is_claim_allowed());
    assert_eq!(game.roll_count(), 1);

    let dice_before = game.dice_values();
    let sheet_before = game.snapshot();
    game.toggle_hold(0);
    game.roll();
    for category in ScoreCategory::all() {
        game.select_category(category);
        assert!(game.claim().is_err());
    }

    assert_eq!(game.dice_values(), dice_before);
    assert!(game.held_flags().iter().all(|&h| !h));
    assert_eq!(game.snapshot(), sheet_before);
}

/// The snapshot total matches the engine total.
#[test]
fn test_snapshot_total() {
    let mut game = new_game(11);
    play_out(&mut game);

    let snapshot = game.snapshot();
    assert!(snapshot.is_complete());
    assert_eq!(snapshot.total(), game.total_score());

    let bytes = snapshot.to_bytes().unwrap();
    assert_eq!(ScoreSnapshot::from_bytes(&bytes).unwrap().total(), game.total_score());
}

/// Restart discards progress but keeps the configuration.
#[test]
fn test_restart() {
    let mut game = new_game(11);
    play_out(&mut game);

    let fresh = game.restart(12);
    assert_eq!(fresh.phase(), GamePhase::InProgress);
    assert_eq!(fresh.snapshot(), ScoreSnapshot::empty());
    assert_eq!(fresh.roll_count(), 1);
    assert_eq!(fresh.config(), game.config());
}

/// The same seed and commands replay the same game.
#[test]
fn test_seeded_replay() {
    let mut a = new_game(31);
    let mut b = new_game(31);
    play_out(&mut a);
    play_out(&mut b);

    assert_eq!(a.snapshot(), b.snapshot());
    assert_eq!(a.dice_values(), b.dice_values());
}

/// Configuration errors surface at construction.
#[test]
fn test_config_from_json() {
    let config = GameConfig::from_json(r#"{"die_count": 4, "max_rolls": 2}"#).unwrap();
    let game = ThirtyGame::new(config, 1).unwrap();
    assert_eq!(game.dice().len(), 4);

    assert!(GameConfig::from_json(r#"{"max_rolls": 0}"#).is_err());
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Clone, Debug)]
enum Command {
    Toggle(usize),
    Roll,
    Select(usize),
    Claim,
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (0usize..8).prop_map(Command::Toggle),
        Just(Command::Roll),
        (0usize..10).prop_map(Command::Select),
        Just(Command::Claim),
    ]
}

proptest! {
    /// Invariants hold after every command of an arbitrary session.
    #[test]
    fn prop_invariants_hold(seed in any::<u64>(), commands in prop::collection::vec(command(), 0..80)) {
        let mut game = ThirtyGame::new(GameConfig::default(), seed).unwrap();
        let finder = CombinationFinder::default();

        for cmd in commands {
            let before = game.snapshot();
            let held_before: Vec<(u8, bool)> = game
                .dice()
                .iter()
                .map(|d| (d.value(), d.is_held()))
                .collect();

            match cmd {
                Command::Toggle(i) => game.toggle_hold(i),
                Command::Roll => {
                    game.roll();
                    for (die, (value, held)) in game.dice().iter().zip(&held_before) {
                        if *held {
                            prop_assert_eq!(die.value(), *value);
                        }
                    }
                }
                Command::Select(i) => game.select_category(ScoreCategory::ALL[i]),
                Command::Claim => {
                    let category = game.selected_category();
                    let was_claimed = before.get(category).is_claimed();
                    let result = game.claim();
                    prop_assert_eq!(result.is_ok(), !was_claimed);
                    if result.is_ok() {
                        prop_assert_eq!(game.roll_count(), 1);
                        prop_assert!(game.held_flags().iter().all(|&h| !h));
                    } else {
                        prop_assert_eq!(&game.snapshot(), &before);
                    }
                }
            }

            let after = game.snapshot();
            for category in ScoreCategory::all() {
                if before.get(category).is_claimed() {
                    prop_assert_eq!(after.get(category), before.get(category));
                }
            }

            prop_assert!(game.roll_count() >= 1);
            prop_assert!(game.roll_count() <= game.config().max_rolls);
            prop_assert_eq!(
                game.is_roll_allowed(),
                game.roll_count() < game.config().max_rolls
                    && !game.available_categories().is_empty()
            );
            prop_assert_eq!(
                game.phase() == GamePhase::Finished,
                game.available_categories().is_empty()
            );
            prop_assert_eq!(
                game.candidate_scores(),
                &finder.candidate_scores(&game.dice_values())
            );
        }
    }
}
