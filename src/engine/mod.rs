//! Движок крэпса: кости, машина состояний раунда, валидация ходов,
//! движок раунда и сессионный контроллер.
//!
//! Высокоуровневый объект: `GameController`
//! Основные операции:
//!   - `start_new_round` – reset + ставка
//!   - `roll` – бросок и расчёт, если раунд разрешился
//!   - `reset_round` – подготовка следующего раунда

pub mod controller;
pub mod dice;
pub mod errors;
pub mod round_engine;
pub mod round_history;
pub mod round_state;
pub mod validation;

pub use controller::{GameController, SessionStats};
pub use dice::Dice;
pub use errors::EngineError;
pub use round_engine::RoundEngine;
pub use round_history::{RoundEvent, RoundEventKind, RoundHistory};
pub use round_state::RoundState;
pub use validation::MoveValidator;

use crate::domain::DieValue;

/// Источник бросков для engine: две независимые кости 1..=6 за вызов.
/// Реализации – в infra (обёртки над `rand`) и в тестах.
pub trait DiceSource {
    fn roll_pair(&mut self) -> (DieValue, DieValue);
}

impl<S: DiceSource + ?Sized> DiceSource for &mut S {
    fn roll_pair(&mut self) -> (DieValue, DieValue) {
        (**self).roll_pair()
    }
}

impl<S: DiceSource + ?Sized> DiceSource for Box<S> {
    fn roll_pair(&mut self) -> (DieValue, DieValue) {
        (**self).roll_pair()
    }
}
