//! Конфигурация сессии: имя игрока, банкролл и лимиты стола.
//!
//! Источники по приоритету: флаги CLI > переменные окружения > дефолты.
//! Ядро получает уже готовые значения через конструкторы.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{
    Chips, Player, TableLimits, MINIMUM_BET, STARTING_BALANCE, WINNING_BALANCE,
};

pub const ENV_PLAYER: &str = "CRAPS_PLAYER";
pub const ENV_BANKROLL: &str = "CRAPS_BANKROLL";
pub const ENV_MIN_BET: &str = "CRAPS_MIN_BET";
pub const ENV_WINNING_BALANCE: &str = "CRAPS_WINNING_BALANCE";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Некорректное значение {key}={value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Минимальная ставка должна быть больше нуля")]
    ZeroMinimumBet,

    #[error("Стартовый банкролл должен быть больше нуля")]
    ZeroBankroll,

    #[error("Минимальная ставка {minimum} больше стартового банкролла {bankroll}")]
    MinimumBetAboveBankroll { minimum: Chips, bankroll: Chips },

    #[error("Цель {target} должна быть больше стартового банкролла {bankroll}")]
    TargetNotAboveBankroll { target: Chips, bankroll: Chips },
}

/// Параметры одной игровой сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CrapsConfig {
    pub player_name: String,
    pub starting_balance: Chips,
    pub minimum_bet: Chips,
    pub winning_balance: Chips,
}

impl Default for CrapsConfig {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            starting_balance: STARTING_BALANCE,
            minimum_bet: MINIMUM_BET,
            winning_balance: WINNING_BALANCE,
        }
    }
}

impl CrapsConfig {
    /// Дефолты, поверх которых наложены переменные окружения процесса.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().overlay(|key| std::env::var(key).ok())
    }

    /// Наложить значения из произвольного источника ключ -> строка.
    pub fn overlay(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(name) = lookup(ENV_PLAYER) {
            let name = name.trim();
            if !name.is_empty() {
                self.player_name = name.to_string();
            }
        }
        if let Some(v) = lookup(ENV_BANKROLL) {
            self.starting_balance = parse_chips(ENV_BANKROLL, &v)?;
        }
        if let Some(v) = lookup(ENV_MIN_BET) {
            self.minimum_bet = parse_chips(ENV_MIN_BET, &v)?;
        }
        if let Some(v) = lookup(ENV_WINNING_BALANCE) {
            self.winning_balance = parse_chips(ENV_WINNING_BALANCE, &v)?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minimum_bet.is_zero() {
            return Err(ConfigError::ZeroMinimumBet);
        }
        if self.starting_balance.is_zero() {
            return Err(ConfigError::ZeroBankroll);
        }
        if self.minimum_bet > self.starting_balance {
            return Err(ConfigError::MinimumBetAboveBankroll {
                minimum: self.minimum_bet,
                bankroll: self.starting_balance,
            });
        }
        if self.winning_balance <= self.starting_balance {
            return Err(ConfigError::TargetNotAboveBankroll {
                target: self.winning_balance,
                bankroll: self.starting_balance,
            });
        }
        Ok(())
    }

    pub fn limits(&self) -> TableLimits {
        TableLimits::new(self.minimum_bet, self.winning_balance)
    }

    pub fn make_player(&self) -> Player {
        Player::with_limits(self.player_name.clone(), self.starting_balance, self.limits())
    }
}

fn parse_chips(key: &'static str, raw: &str) -> Result<Chips, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Chips)
        .map_err(|_| ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        })
}
