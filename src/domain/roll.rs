use core::fmt;

use serde::{Deserialize, Serialize};

/// Значение одной кости: 1..=6.
pub type DieValue = u8;

pub const DIE_SIDES: DieValue = 6;

/// Результат одного броска двух костей.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RollResult {
    pub die1: DieValue,
    pub die2: DieValue,
}

impl RollResult {
    pub fn new(die1: DieValue, die2: DieValue) -> Self {
        Self { die1, die2 }
    }

    /// Сумма 2..=12 для валидных костей. Мусор после десериализации не
    /// паникует, а даёт сумму, которую отклонит `check_outcome`.
    pub fn total(&self) -> u8 {
        self.die1.saturating_add(self.die2)
    }

    pub fn is_valid_die(value: DieValue) -> bool {
        (1..=DIE_SIDES).contains(&value)
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} = {}", self.die1, self.die2, self.total())
    }
}
