//! Full-game scenario tests.
//!
//! These drive the engine the way a presentation layer would: clicks become
//! `select_slot`, a timer expiry becomes `resolve_mismatch`.

use memory_match::{
    EngineError, GameConfig, GameResult, IllegalOperation, MatchEngine, Phase, Player,
    SelectOutcome, Token,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Group slot indices by token: `pairs[t]` holds both positions of token `t`.
fn pair_positions(engine: &MatchEngine) -> Vec<[usize; 2]> {
    let mut pairs = vec![[usize::MAX; 2]; engine.total_pairs()];
    for index in 0..engine.len() {
        let Token(id) = engine.token(index).unwrap();
        let entry = &mut pairs[id as usize];
        if entry[0] == usize::MAX {
            entry[0] = index;
        } else {
            entry[1] = index;
        }
    }
    pairs
}

/// Turn over two slots known to differ, then resolve.
fn play_mismatch(engine: &mut MatchEngine) {
    let pairs = pair_positions(engine);
    let open: Vec<[usize; 2]> = pairs
        .into_iter()
        .filter(|[a, _]| !engine.is_matched(*a).unwrap())
        .collect();
    assert!(open.len() >= 2, "need two unmatched pairs to mismatch");

    let outcome = engine.select_slot(open[0][0]).unwrap();
    assert_eq!(outcome, SelectOutcome::Flipped { index: open[0][0] });
    let outcome = engine.select_slot(open[1][0]).unwrap();
    assert!(outcome.needs_resolution());
    engine.resolve_mismatch().unwrap();
}

/// Size 16, eight correct pairs in a row: one player sweeps the board.
#[test]
fn test_perfect_game_small_board() {
    init_tracing();
    let mut engine = MatchEngine::new(GameConfig::small().with_seed(2024)).unwrap();

    for (found, [a, b]) in pair_positions(&engine).into_iter().enumerate() {
        assert!(!engine.is_game_over());
        engine.select_slot(a).unwrap();
        let outcome = engine.select_slot(b).unwrap();
        assert!(outcome.is_match());
        assert_eq!(engine.pairs_found(), found + 1);
    }

    assert!(engine.is_game_over());
    assert_eq!(engine.pairs_found(), 8);
    assert_eq!(engine.scores().total(), 8);
    assert_eq!(engine.score(Player::One), 8);
    assert_eq!(engine.result(), Some(GameResult::Winner(Player::One)));
    assert_eq!(engine.history().len(), 8);
    assert!((0..16).all(|i| engine.is_matched(i).unwrap() && engine.is_face_up(i).unwrap()));
}

/// Players alternate on misses and each scores on their own turn.
#[test]
fn test_alternating_players_score_separately() {
    let mut engine = MatchEngine::new(GameConfig::large().with_seed(77)).unwrap();
    let pairs = pair_positions(&engine);

    // Player 1 finds a pair, then misses.
    engine.select_slot(pairs[0][0]).unwrap();
    engine.select_slot(pairs[0][1]).unwrap();
    play_mismatch(&mut engine);
    assert_eq!(engine.current_player(), Player::Two);

    // Player 2 finds two pairs.
    for [a, b] in &pairs[1..3] {
        engine.select_slot(*a).unwrap();
        engine.select_slot(*b).unwrap();
    }
    assert_eq!(engine.current_player(), Player::Two);

    play_mismatch(&mut engine);
    assert_eq!(engine.current_player(), Player::One);

    assert_eq!(engine.score(Player::One), 1);
    assert_eq!(engine.score(Player::Two), 2);
    assert_eq!(engine.pairs_found(), 3);
    assert_eq!(engine.turn(), 6);

    let players: Vec<Player> = engine.history().iter().map(|r| r.player).collect();
    assert_eq!(
        players,
        vec![Player::One, Player::One, Player::Two, Player::Two, Player::Two]
    );
}

/// An even split ends in a draw.
#[test]
fn test_draw() {
    let mut engine = MatchEngine::new(GameConfig::new(8).with_seed(11)).unwrap();
    let pairs = pair_positions(&engine);

    for [a, b] in &pairs[..2] {
        engine.select_slot(*a).unwrap();
        engine.select_slot(*b).unwrap();
    }
    play_mismatch(&mut engine);
    for [a, b] in &pairs[2..] {
        engine.select_slot(*a).unwrap();
        engine.select_slot(*b).unwrap();
    }

    assert!(engine.is_game_over());
    assert_eq!(engine.score(Player::One), 2);
    assert_eq!(engine.score(Player::Two), 2);
    assert_eq!(engine.result(), Some(GameResult::Draw));
}

/// Queries keep working after the game ends; selections do not.
#[test]
fn test_game_over_is_terminal() {
    let mut engine = MatchEngine::new(GameConfig::new(2).with_seed(1)).unwrap();
    engine.select_slot(0).unwrap();
    engine.select_slot(1).unwrap();

    assert_eq!(engine.phase(), Phase::GameOver);
    for index in 0..2 {
        assert_eq!(
            engine.select_slot(index).unwrap_err(),
            EngineError::IllegalOperation(IllegalOperation::GameOver)
        );
        assert!(engine.is_matched(index).unwrap());
    }
    assert_eq!(
        engine.resolve_mismatch().unwrap_err(),
        EngineError::IllegalOperation(IllegalOperation::NoPendingMismatch)
    );
}

/// Restart wipes scores, pairs and history whatever came before.
#[test]
fn test_restart_resets_everything() {
    let mut engine = MatchEngine::new(GameConfig::small().with_seed(9)).unwrap();
    let pairs = pair_positions(&engine);
    engine.select_slot(pairs[0][0]).unwrap();
    engine.select_slot(pairs[0][1]).unwrap();
    play_mismatch(&mut engine);
    engine.select_slot(pairs[3][0]).unwrap();

    engine.restart();

    assert_eq!(engine.scores().total(), 0);
    assert_eq!(engine.pairs_found(), 0);
    assert_eq!(engine.current_player(), Player::One);
    assert_eq!(engine.phase(), Phase::Idle);
    assert!(engine.history().is_empty());
    assert_eq!(engine.legal_slots().len(), 16);
    assert!((0..16).all(|i| !engine.is_face_up(i).unwrap()));
}

/// `new_game` from a finished game starts clean.
#[test]
fn test_new_game_after_game_over() {
    let mut engine = MatchEngine::new(GameConfig::new(2).with_seed(1)).unwrap();
    engine.select_slot(0).unwrap();
    engine.select_slot(1).unwrap();
    assert!(engine.is_game_over());

    engine.new_game(GameConfig::small()).unwrap();

    assert!(!engine.is_game_over());
    assert_eq!(engine.scores().total(), 0);
    assert_eq!(engine.pairs_found(), 0);
    assert_eq!(engine.len(), 16);
}

/// A recorded seed replays the same board.
#[test]
fn test_seed_replays_deal() {
    let engine = MatchEngine::new(GameConfig::small()).unwrap();
    let replay = MatchEngine::new(GameConfig::small().with_seed(engine.seed())).unwrap();

    assert_eq!(engine.deck(), replay.deck());
}

/// The board view follows the game without revealing hidden cards.
#[test]
fn test_view_tracks_game() {
    let mut engine = MatchEngine::new(GameConfig::small().with_seed(5)).unwrap();
    let [a, b] = pair_positions(&engine)[0];
    engine.select_slot(a).unwrap();
    engine.select_slot(b).unwrap();

    let view = engine.view();

    assert_eq!(view.pairs_found, 1);
    assert_eq!(view.scores[Player::One], 1);
    let visible: Vec<usize> = view
        .slots
        .iter()
        .filter(|cell| cell.token.is_some())
        .map(|cell| cell.index)
        .collect();
    let mut expected = vec![a, b];
    expected.sort_unstable();
    assert_eq!(visible, expected);
    assert!(view.slots[a].matched && view.slots[b].matched);
}
