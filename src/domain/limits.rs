use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Минимальная ставка по умолчанию.
pub const MINIMUM_BET: Chips = Chips(5);

/// Банкролл, при котором сессия считается выигранной.
pub const WINNING_BALANCE: Chips = Chips(1000);

/// Стартовый банкролл, если CLI/конфиг не передали свой.
pub const STARTING_BALANCE: Chips = Chips(100);

/// Лимиты стола: минимальная ставка и цель сессии.
///
/// Это конфигурация, а не логика: значения приходят из `CrapsConfig`
/// (или берутся дефолтные константы) и дальше только читаются.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableLimits {
    pub minimum_bet: Chips,
    pub winning_balance: Chips,
}

impl TableLimits {
    pub fn new(minimum_bet: Chips, winning_balance: Chips) -> Self {
        Self {
            minimum_bet,
            winning_balance,
        }
    }
}

impl Default for TableLimits {
    fn default() -> Self {
        Self::new(MINIMUM_BET, WINNING_BALANCE)
    }
}
