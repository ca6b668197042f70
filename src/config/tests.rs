use crate::config::GameConfig;

#[test]
fn test_default_config_matches_the_stock_game() {
    let config = GameConfig::default();

    assert_eq!(config.rounds_per_game, 5);
    assert_eq!(config.round_duration_secs, 300);
    assert_eq!(config.backend_url.as_str(), "http://127.0.0.1:8000/");
    assert_eq!(config.max_panorama_retries, 10);
}

#[test]
fn test_partial_overrides_keep_the_remaining_defaults() {
    let config: GameConfig =
        serde_json::from_str(r#"{"roundsPerGame": 3, "backendUrl": "https://example.com/api/"}"#)
            .expect("Failed to deserialize the config.");

    assert_eq!(config.rounds_per_game, 3);
    assert_eq!(config.round_duration_secs, 300);
    assert_eq!(config.backend_url.as_str(), "https://example.com/api/");
    assert_eq!(config.max_panorama_retries, 10);
}
