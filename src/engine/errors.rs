use crate::domain::{Chips, DieValue};

use thiserror::Error;

/// Ошибки движка крэпса.
///
/// Неверная ставка снаружи видна как `false` из `place_bet`, здесь она
/// нужна только чтобы объяснить причину (логи, API). Остальные варианты –
/// нарушение контракта вызывающим кодом.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Ставка {amount} меньше минимальной {minimum}")]
    BetBelowMinimum { amount: Chips, minimum: Chips },

    #[error("Недостаточно фишек: ставка {amount}, баланс {balance}")]
    InsufficientFunds { amount: Chips, balance: Chips },

    #[error("Cannot roll dice at this time: нет ставки или раунд уже разрешён")]
    CannotRoll,

    #[error("Раунд уже разрешён, бросок нельзя засчитать без reset")]
    RoundAlreadyResolved,

    #[error("Недопустимая сумма броска: {0}")]
    InvalidRollTotal(u8),

    #[error("Недопустимое значение кости: {0}")]
    InvalidDieValue(DieValue),
}
