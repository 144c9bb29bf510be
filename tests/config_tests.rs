//! CrapsConfig: дефолты, наложение окружения, валидация.

use std::collections::HashMap;

use craps_engine::domain::Chips;
use craps_engine::infra::{
    ConfigError, CrapsConfig, ENV_BANKROLL, ENV_MIN_BET, ENV_PLAYER, ENV_WINNING_BALANCE,
};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_match_table_constants() {
    let c = CrapsConfig::default();
    assert_eq!(c.player_name, "Player");
    assert_eq!(c.starting_balance, Chips(100));
    assert_eq!(c.minimum_bet, Chips(5));
    assert_eq!(c.winning_balance, Chips(1000));
    assert!(c.validate().is_ok());
}

#[test]
fn overlay_reads_all_keys() {
    let c = CrapsConfig::default()
        .overlay(lookup(&[
            (ENV_PLAYER, " Alice "),
            (ENV_BANKROLL, "250"),
            (ENV_MIN_BET, "10"),
            (ENV_WINNING_BALANCE, "2000"),
        ]))
        .unwrap();
    assert_eq!(c.player_name, "Alice");
    assert_eq!(c.starting_balance, Chips(250));
    assert_eq!(c.minimum_bet, Chips(10));
    assert_eq!(c.winning_balance, Chips(2000));

    let p = c.make_player();
    assert_eq!(p.balance(), Chips(250));
    assert_eq!(p.minimum_bet(), Chips(10));
}

#[test]
fn overlay_rejects_garbage_numbers() {
    let err = CrapsConfig::default()
        .overlay(lookup(&[(ENV_BANKROLL, "-5")]))
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidValue {
            key: ENV_BANKROLL,
            value: "-5".to_string()
        }
    );
}

#[test]
fn blank_player_name_keeps_default() {
    let c = CrapsConfig::default()
        .overlay(lookup(&[(ENV_PLAYER, "   ")]))
        .unwrap();
    assert_eq!(c.player_name, "Player");
}

#[test]
fn validate_rejects_bad_limits() {
    let mut c = CrapsConfig::default();
    c.minimum_bet = Chips::ZERO;
    assert_eq!(c.validate(), Err(ConfigError::ZeroMinimumBet));

    let mut c = CrapsConfig::default();
    c.starting_balance = Chips::ZERO;
    assert_eq!(c.validate(), Err(ConfigError::ZeroBankroll));

    let mut c = CrapsConfig::default();
    c.starting_balance = Chips(3);
    assert_eq!(
        c.validate(),
        Err(ConfigError::MinimumBetAboveBankroll {
            minimum: Chips(5),
            bankroll: Chips(3)
        })
    );

    let mut c = CrapsConfig::default();
    c.minimum_bet = Chips(200);
    assert!(matches!(
        c.validate(),
        Err(ConfigError::MinimumBetAboveBankroll { .. })
    ));

    // ставка ровно на весь банкролл допустима
    let mut c = CrapsConfig::default();
    c.minimum_bet = Chips(100);
    assert!(c.validate().is_ok());

    let mut c = CrapsConfig::default();
    c.starting_balance = Chips(1000);
    assert!(matches!(
        c.validate(),
        Err(ConfigError::TargetNotAboveBankroll { .. })
    ));
}

#[test]
fn config_deserializes_with_missing_fields() {
    let c: CrapsConfig = serde_json::from_str(r#"{"player_name":"Bob"}"#).unwrap();
    assert_eq!(c.player_name, "Bob");
    assert_eq!(c.minimum_bet, Chips(5));
}
