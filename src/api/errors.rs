use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём CLI / клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Ставка не принята: ниже минимума или больше баланса.
    #[error("Ставка не принята: {0}")]
    InvalidBet(String),

    /// Бросок вне активного раунда.
    #[error("Бросок сейчас невозможен: {0}")]
    IllegalRoll(String),

    /// Сессия уже закончена (банкролл 0 или цель достигнута).
    #[error("Сессия окончена")]
    SessionOver,

    /// Прочие ошибки движка.
    #[error("Ошибка движка: {0}")]
    EngineError(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::BetBelowMinimum { .. } | EngineError::InsufficientFunds { .. } => {
                ApiError::InvalidBet(err.to_string())
            }
            EngineError::CannotRoll | EngineError::RoundAlreadyResolved => {
                ApiError::IllegalRoll(err.to_string())
            }
            other => ApiError::EngineError(other.to_string()),
        }
    }
}
