use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::{Phase, RollResult, RoundId, RoundStatus};
use crate::engine::{DiceSource, GameController, SessionStats};

/// DTO одного броска.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollDto {
    pub die1: u8,
    pub die2: u8,
    pub total: u8,
}

impl From<RollResult> for RollDto {
    fn from(roll: RollResult) -> Self {
        Self {
            die1: roll.die1,
            die2: roll.die2,
            total: roll.total(),
        }
    }
}

/// DTO сессии: всё, что view-слою нужно для экрана.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionViewDto {
    pub player_name: String,
    pub balance: Chips,
    pub current_bet: Chips,
    pub round_id: RoundId,
    pub phase: Phase,
    /// 0 в фазе come-out.
    pub point: u8,
    pub round_status: RoundStatus,
    pub last_roll: Option<RollDto>,
    pub minimum_bet: Chips,
    pub winning_balance: Chips,
    pub round_over: bool,
    pub session_over: bool,
    pub has_won: bool,
    pub has_lost: bool,
    pub stats: SessionStats,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Ставка принята, раунд идёт.
    RoundStarted(SessionViewDto),

    /// Бросок выполнен; `view` – состояние после расчёта.
    Rolled {
        roll: RollDto,
        view: SessionViewDto,
    },

    /// Раунд сброшен, можно ставить снова.
    RoundReset(SessionViewDto),
}

/// Сформировать DTO по текущему состоянию контроллера.
pub fn build_session_view<S: DiceSource>(controller: &GameController<S>) -> SessionViewDto {
    let player = controller.player();
    let state = controller.round_state();

    SessionViewDto {
        player_name: player.name.clone(),
        balance: player.balance(),
        current_bet: player.current_bet(),
        round_id: controller.engine().round_id(),
        phase: state.phase(),
        point: state.point(),
        round_status: state.status(),
        last_roll: controller.last_roll().map(RollDto::from),
        minimum_bet: controller.minimum_bet(),
        winning_balance: controller.winning_balance(),
        round_over: controller.is_round_over(),
        session_over: controller.is_game_session_over(),
        has_won: player.has_won(),
        has_lost: player.has_lost(),
        stats: controller.stats(),
    }
}
