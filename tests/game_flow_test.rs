//! Full games driven through the public API on virtual time

use assert_matches::assert_matches;
use memory_match::{
    GameConfig, GameEngine, GameEvent, SessionState, ShuffleStrategy, TileStatus, VirtualTime,
};
use std::collections::HashMap;
use std::time::Duration;

fn engine(config: GameConfig, seed: u64) -> (GameEngine, VirtualTime) {
    GameEngine::with_virtual_time(config, seed).unwrap()
}

/// Indices of each label's two tiles, in board order.
fn pairs(engine: &GameEngine) -> Vec<(usize, usize)> {
    let mut by_label: HashMap<&str, Vec<usize>> = HashMap::new();
    for (index, tile) in engine.tiles().iter().enumerate() {
        by_label.entry(tile.label.as_str()).or_default().push(index);
    }
    let mut pairs: Vec<(usize, usize)> = by_label
        .values()
        .map(|indices| (indices[0], indices[1]))
        .collect();
    pairs.sort_unstable();
    pairs
}

#[test]
fn test_flawless_game_on_the_default_board() {
    let (mut engine, time) = engine(GameConfig::default(), 2024);
    let pairs = pairs(&engine);
    assert_eq!(pairs.len(), 8);

    let mut solved = None;
    for (first, second) in pairs {
        engine.select_tile(first);
        let events = engine.on_timers(time.advance(Duration::from_millis(1500)));
        assert!(events
            .iter()
            .all(|event| matches!(event, GameEvent::ScoreChanged(_))));

        let remaining_before = engine.tiles_remaining();
        for event in engine.select_tile(second) {
            if let GameEvent::Solved(summary) = event {
                solved = Some(summary);
            }
        }
        assert_eq!(engine.tiles_remaining(), remaining_before - 2);
        engine.on_timers(time.advance(Duration::from_millis(1500)));
    }

    let summary = solved.expect("last pair should solve the board");
    assert_eq!(summary.score.moves, 16);
    assert_eq!(summary.score.stars, 5);
    // 16 clicks 1.5s apart, clock started on the first one.
    assert_eq!(summary.score.elapsed_seconds, 22);
    assert_eq!(summary.score.formatted_elapsed(), "22s");
    assert_eq!(engine.state(), SessionState::Solved);
    assert!(engine
        .tiles()
        .iter()
        .all(|tile| tile.status == TileStatus::Matched));
}

#[test]
fn test_matched_tiles_survive_later_mismatches() {
    let config = GameConfig {
        tile_count: 6,
        catalogue: vec!["sun".into(), "moon".into(), "star".into()],
        ..GameConfig::default()
    };
    let (mut engine, time) = engine(config, 8);
    let pairs = pairs(&engine);
    let (m1, m2) = pairs[0];
    let (x1, _) = pairs[1];
    let (y1, _) = pairs[2];

    engine.select_tile(m1);
    engine.select_tile(m2);
    engine.select_tile(x1);
    let events = engine.select_tile(y1);
    assert_matches!(events.last(), Some(GameEvent::Mismatched { .. }));

    engine.on_timers(time.advance(Duration::from_secs(1)));

    assert!(engine.is_tile_visible(m1));
    assert!(engine.is_tile_visible(m2));
    assert!(!engine.is_tile_visible(x1));
    assert!(!engine.is_tile_visible(y1));
    assert_eq!(engine.tiles_remaining(), 4);
    assert_eq!(engine.pairs_remaining(), 2);
}

#[test]
fn test_custom_hide_delay() {
    let config = GameConfig {
        tile_count: 4,
        catalogue: vec!["a".into(), "b".into()],
        hide_delay_ms: 250,
        ..GameConfig::default()
    };
    let (mut engine, time) = engine(config, 4);
    let pairs = pairs(&engine);

    engine.select_tile(pairs[0].0);
    engine.select_tile(pairs[1].0);
    assert!(engine.on_timers(time.advance(Duration::from_millis(249))).is_empty());

    let events = engine.on_timers(time.advance(Duration::from_millis(1)));
    assert_eq!(
        events,
        vec![
            GameEvent::TileHidden { index: pairs[0].0 },
            GameEvent::TileHidden { index: pairs[1].0 },
        ]
    );
}

#[test]
fn test_legacy_shuffle_still_deals_pairs() {
    let config = GameConfig {
        shuffle: ShuffleStrategy::Legacy,
        ..GameConfig::default()
    };
    let (mut engine, _time) = engine(config, 77);

    for tile_count in [2, 8, 16, 40, 86] {
        engine.reset(tile_count).unwrap();
        let pairs = pairs(&engine);
        assert_eq!(pairs.len(), tile_count / 2);
        assert_eq!(engine.tile_count(), tile_count);
    }
}

#[test]
fn test_replay_deals_a_new_session() {
    let (mut engine, time) = engine(GameConfig::default(), 31);
    for (first, second) in pairs(&engine) {
        engine.select_tile(first);
        engine.select_tile(second);
    }
    assert!(engine.is_solved());
    let finished = engine.session_id();

    engine.replay().unwrap();

    assert_eq!(engine.state(), SessionState::NotStarted);
    assert_ne!(engine.session_id(), finished);
    assert_eq!(engine.moves(), 0);
    assert_eq!(engine.star_rating(), 5);
    assert_eq!(engine.formatted_elapsed(), "0s");
    assert_eq!(time.pending(), 0);
}
