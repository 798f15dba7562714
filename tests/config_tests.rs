//! Configuration loading from files on disk.

use std::io::Write;

use casinobot::domain::GameType;
use casinobot::error::{ConfigError, Error};
use casinobot::infrastructure::config::Config;
use rust_decimal_macros::dec;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(content.as_bytes()).expect("write temp config");
    file
}

#[test]
fn sample_config_loads() {
    let config = Config::load(concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml")).unwrap();
    let catalog = config.catalog().unwrap();

    assert!(catalog.prices.unpriced().is_empty());
    assert_eq!(catalog.prices.price(GameType::Dice), Some(dec!(1.00)));
    assert_eq!(config.ledger.history_limit, 10);
    assert!(config.telegram.admin_ids.is_empty());
}

#[test]
fn missing_file_is_a_read_error() {
    let err = Config::load("/nonexistent/casinobot.toml").unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let file = write_config("[ledger\nstarting_balance = 1");
    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
}

#[test]
fn darts_zones_must_sum_to_one() {
    let file = write_config(
        r#"
[[games.darts.zones]]
name = "bullseye"
probability = "0.5"
multiplier = "5"

[[games.darts.zones]]
name = "miss"
probability = "0.4"
multiplier = "0"
"#,
    );

    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::InvalidValue { field: "games.darts", .. })
    ));
}

#[test]
fn negative_starting_balance_is_rejected() {
    let file = write_config("[ledger]\nstarting_balance = \"-1\"\n");
    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::InvalidValue { field: "ledger.starting_balance", .. })
    ));
}

#[test]
fn zero_price_is_rejected() {
    let file = write_config("[games.prices]\nslots = \"0\"\n");
    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::InvalidValue { field: "games.prices", .. })
    ));
}
