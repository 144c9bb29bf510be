use serde::{Deserialize, Serialize};

use crate::domain::round::{CRAPS, NATURALS, POINT_NUMBERS, SEVEN};
use crate::domain::{Phase, RoundOutcome, RoundStatus};
use crate::engine::errors::EngineError;

/// Машина состояний одного раунда.
///
/// Инварианты:
/// - `point == 0` тогда и только тогда, когда фаза ComeOut;
/// - статус становится Win/Lose ровно один раз и не возвращается в Playing
///   иначе как через `reset`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundState {
    phase: Phase,
    status: RoundStatus,
    point: u8,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundState {
    pub fn new() -> Self {
        Self {
            phase: Phase::ComeOut,
            status: RoundStatus::Playing,
            point: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Поинт, 0 в фазе ComeOut.
    pub fn point(&self) -> u8 {
        self.point
    }

    pub fn is_playing(&self) -> bool {
        self.status == RoundStatus::Playing
    }

    /// Применить сумму броска к текущей фазе.
    ///
    /// Вызов после Win/Lose – ошибка вызывающего кода, бросок не
    /// интерпретируется.
    pub fn check_outcome(&mut self, total: u8) -> Result<RoundOutcome, EngineError> {
        if self.status.is_terminal() {
            return Err(EngineError::RoundAlreadyResolved);
        }
        if !(2..=12).contains(&total) {
            return Err(EngineError::InvalidRollTotal(total));
        }

        let outcome = match self.phase {
            Phase::ComeOut => {
                if NATURALS.contains(&total) {
                    RoundOutcome::Win
                } else if CRAPS.contains(&total) {
                    RoundOutcome::Lose
                } else {
                    self.enter_point_phase(total);
                    RoundOutcome::Continue
                }
            }
            Phase::Point => {
                if total == self.point {
                    RoundOutcome::Win
                } else if total == SEVEN {
                    RoundOutcome::Lose
                } else {
                    RoundOutcome::Continue
                }
            }
        };

        match outcome {
            RoundOutcome::Win => self.status = RoundStatus::Win,
            RoundOutcome::Lose => self.status = RoundStatus::Lose,
            RoundOutcome::Continue => {}
        }

        Ok(outcome)
    }

    fn enter_point_phase(&mut self, point: u8) {
        debug_assert!(POINT_NUMBERS.contains(&point));
        self.point = point;
        self.phase = Phase::Point;
    }
}
