use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::{RollResult, RoundId, RoundOutcome};

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Новый раунд начался.
    RoundStarted { round_id: RoundId },

    /// Ставка принята (баланс уже после списания).
    BetPlaced { amount: Chips, balance_after: Chips },

    /// Бросок костей и его результат для фазы.
    DiceRolled {
        roll: RollResult,
        outcome: RoundOutcome,
    },

    /// На come-out выпал поинт.
    PointEstablished { point: u8 },

    /// Раунд разрешён, расчёт с игроком сделан.
    RoundResolved {
        won: bool,
        bet: Chips,
        balance_after: Chips,
    },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// История текущего раунда. Сбрасывается вместе с раундом.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Все броски раунда по порядку.
    pub fn rolls(&self) -> Vec<RollResult> {
        self.events
            .iter()
            .filter_map(|e| match e.kind {
                RoundEventKind::DiceRolled { roll, .. } => Some(roll),
                _ => None,
            })
            .collect()
    }
}
