use casinobot::infrastructure::config::Config;

/// Every game at 1.00 and a 5.00 starting balance.
pub const PRICED: &str = r#"
[ledger]
starting_balance = 5

[telegram]
admin_ids = [1]

[games.prices]
darts = 1.00
slots = 1.00
dice = 1.00
blackjack = 1.00
"#;

pub fn priced_config() -> Config {
    Config::parse_toml(PRICED).expect("parse test config")
}
