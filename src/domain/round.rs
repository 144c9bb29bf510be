use core::fmt;

use serde::{Deserialize, Serialize};

/// Фаза раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    /// Первый бросок раунда.
    ComeOut,
    /// Поинт установлен, бросаем до поинта или семёрки.
    Point,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::ComeOut => f.write_str("COME OUT ROLL"),
            Phase::Point => f.write_str("POINT PHASE"),
        }
    }
}

/// Статус раунда. Win/Lose – терминальные, выход только через reset.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundStatus {
    Playing,
    Win,
    Lose,
}

impl RoundStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundStatus::Playing)
    }
}

/// Результат одного броска относительно текущей фазы.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundOutcome {
    Win,
    Lose,
    Continue,
}

impl RoundOutcome {
    /// `Some(won)` если раунд разрешился, `None` для Continue.
    pub fn resolved(&self) -> Option<bool> {
        match self {
            RoundOutcome::Win => Some(true),
            RoundOutcome::Lose => Some(false),
            RoundOutcome::Continue => None,
        }
    }
}

/// Натурал на come-out.
pub const NATURALS: [u8; 2] = [7, 11];

/// Крэпс на come-out.
pub const CRAPS: [u8; 3] = [2, 3, 12];

/// Допустимые значения поинта.
pub const POINT_NUMBERS: [u8; 6] = [4, 5, 6, 8, 9, 10];

pub const SEVEN: u8 = 7;

/// Правила для экрана "rules".
pub const RULES: &str = "\
CRAPS RULES:
1. Come Out Roll:
   - Roll 7 or 11: You WIN
   - Roll 2, 3, or 12: You LOSE
   - Roll 4, 5, 6, 8, 9, or 10: Sets the POINT
2. Point Phase:
   - Roll your point again: You WIN
   - Roll a 7: You LOSE
   - Any other roll: Continue rolling";
