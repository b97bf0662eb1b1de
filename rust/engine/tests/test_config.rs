use std::fs;

use holdem_duel_engine::config::{
    load, load_with_sources, ConfigError, TableConfig, ValueSource, BET_UNIT_ENV, CONFIG_ENV,
    POLICY_ENV, SEED_ENV, STARTING_CHIPS_ENV,
};
use holdem_duel_engine::engine::Engine;
use holdem_duel_engine::errors::GameError;
use holdem_duel_engine::player::MAX_STARTING_CHIPS;
use serial_test::serial;

fn clear_env() {
    for key in [
        CONFIG_ENV,
        STARTING_CHIPS_ENV,
        BET_UNIT_ENV,
        SEED_ENV,
        POLICY_ENV,
    ] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn defaults_when_nothing_is_set() {
    clear_env();
    let resolved = load_with_sources().expect("defaults are valid");
    assert_eq!(resolved.config, TableConfig::default());
    assert_eq!(resolved.sources.starting_chips, ValueSource::Default);
    assert_eq!(resolved.sources.seed, ValueSource::Default);
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.toml");
    fs::write(&path, "starting_chips = 250\nseed = 456\nbet_unit = 25\n").unwrap();
    std::env::set_var(CONFIG_ENV, &path);
    std::env::set_var(SEED_ENV, "789");

    let resolved = load_with_sources().expect("load");
    assert_eq!(resolved.config.starting_chips, 250);
    assert_eq!(resolved.sources.starting_chips, ValueSource::File);
    assert_eq!(resolved.config.bet_unit, 25);
    assert_eq!(resolved.config.seed, Some(789));
    assert_eq!(resolved.sources.seed, ValueSource::Env);
    assert_eq!(resolved.sources.policy, ValueSource::Default);
    clear_env();
}

#[test]
#[serial]
fn empty_env_values_are_ignored() {
    clear_env();
    std::env::set_var(STARTING_CHIPS_ENV, "");
    let cfg = load().expect("load");
    assert_eq!(cfg.starting_chips, 100);
    clear_env();
}

#[test]
#[serial]
fn malformed_env_value_is_invalid() {
    clear_env();
    std::env::set_var(BET_UNIT_ENV, "ten");
    assert!(matches!(load(), Err(ConfigError::Invalid(_))));
    clear_env();
}

#[test]
#[serial]
fn missing_config_file_is_io_error() {
    clear_env();
    std::env::set_var(CONFIG_ENV, "/definitely/not/here/table.toml");
    assert!(matches!(load(), Err(ConfigError::Io(_))));
    clear_env();
}

#[test]
fn file_config_drives_a_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.toml");
    fs::write(&path, "starting_chips = 40\nbet_unit = 20\nseed = 1\n").unwrap();
    let cfg = TableConfig::from_file(&path).expect("parse");

    let mut eng = Engine::start(&cfg).expect("start");
    let snap = eng.snapshot();
    assert_eq!(snap.player_chips, 40);
    assert_eq!(snap.bet_unit, 20);
    let snap = eng.bet(eng.bet_unit()).unwrap();
    assert_eq!(snap.player_chips, 20);
}

#[test]
fn oversized_starting_chips_are_rejected() {
    let err = TableConfig::from_toml_str("starting_chips = 4294967295\nseed = 1\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let cfg = TableConfig {
        starting_chips: u32::MAX,
        seed: Some(1),
        ..TableConfig::default()
    };
    assert_eq!(
        Engine::start(&cfg).unwrap_err(),
        GameError::InvalidStartingChips {
            amount: u32::MAX,
            max: MAX_STARTING_CHIPS,
        }
    );
}

#[test]
#[serial]
fn oversized_env_starting_chips_are_invalid() {
    clear_env();
    std::env::set_var(STARTING_CHIPS_ENV, "3000000000");
    assert!(matches!(load(), Err(ConfigError::Invalid(_))));
    clear_env();
}

#[test]
fn largest_starting_stack_plays_out_without_overflow() {
    let cfg = TableConfig::from_toml_str(&format!(
        "starting_chips = {}\nseed = 1\n",
        MAX_STARTING_CHIPS
    ))
    .expect("upper bound is accepted");

    let mut eng = Engine::start(&cfg).expect("start");
    eng.bet(10).unwrap();
    let snap = eng.fold().unwrap();
    assert!(snap.game_over);
    assert_eq!(snap.pot, 0);
    assert_eq!(snap.player_chips, MAX_STARTING_CHIPS - 10);
    assert_eq!(snap.computer_chips, MAX_STARTING_CHIPS + 10);
    assert_eq!(eng.betting().total(), 2 * u64::from(MAX_STARTING_CHIPS));
}
