//! Integration tests for the Memory Match library public API

use memory_match::{
    format_elapsed, star_rating, GameConfig, GameEngine, MemoryMatchError, Result, DESCRIPTION,
    NAME, VERSION,
};

#[test]
fn test_library_metadata() {
    assert!(!VERSION.is_empty());
    assert_eq!(NAME, "memory_match");
    assert!(!DESCRIPTION.is_empty());
}

#[test]
fn test_error_types() {
    let tile_error = MemoryMatchError::InvalidTileCount(3);
    assert!(matches!(tile_error, MemoryMatchError::InvalidTileCount(3)));
    assert_eq!(
        tile_error.to_string(),
        "Tile count must be a positive even number, got 3"
    );

    let catalogue_error = MemoryMatchError::CatalogueTooSmall {
        needed: 10,
        available: 4,
    };
    assert!(catalogue_error.to_string().contains("4 distinct labels"));

    let config_error = MemoryMatchError::Config("test config error".to_string());
    assert!(matches!(config_error, MemoryMatchError::Config(_)));
}

#[test]
fn test_result_type_alias() {
    let success: Result<i32> = Ok(42);
    assert!(success.is_ok());
    assert_eq!(success.unwrap(), 42);

    let failure: Result<i32> = Err(MemoryMatchError::Simulation("test".to_string()));
    assert!(failure.is_err());
}

#[test]
fn test_default_config() {
    let config = GameConfig::default();
    assert_eq!(config.tile_count, 16);
    assert_eq!(config.hide_delay_ms, 1000);
    assert!(config.validate().is_ok());
}

#[test]
fn test_scoring_helpers_are_exported() {
    assert_eq!(format_elapsed(3661), "1h 1mn 1s");
    assert_eq!(star_rating(0), 5);
    assert_eq!(star_rating(56), 0);
}

#[test]
fn test_engines_are_independent() {
    let (mut first, _first_time) = GameEngine::with_virtual_time(GameConfig::default(), 1).unwrap();
    let (second, _second_time) = GameEngine::with_virtual_time(GameConfig::default(), 1).unwrap();

    first.select_tile(0);

    assert_eq!(first.moves(), 1);
    assert_eq!(second.moves(), 0);
    assert_ne!(first.session_id(), second.session_id());
    // Same seed, same layout.
    assert_eq!(
        first.tiles().iter().map(|t| &t.label).collect::<Vec<_>>(),
        second.tiles().iter().map(|t| &t.label).collect::<Vec<_>>()
    );
}
