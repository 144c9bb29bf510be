use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::{Chips, Phase, Player, RollResult, RoundStatus};
use crate::engine::errors::EngineError;
use crate::engine::round_engine::RoundEngine;
use crate::engine::round_state::RoundState;
use crate::engine::validation::MoveValidator;
use crate::engine::DiceSource;
use crate::infra::config::CrapsConfig;

/// Счётчики сессии.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionStats {
    /// Разрешённые раунды (Win + Lose).
    pub rounds_played: u32,
    pub rounds_won: u32,
    pub rounds_lost: u32,
    /// Раунды, брошенные с живой ставкой.
    pub rounds_abandoned: u32,
    pub rolls: u32,
}

/// Сессия игры: один игрок + движок раунда на много раундов.
///
/// Перед каждым мутирующим вызовом спрашиваем `MoveValidator`.
pub struct GameController<S: DiceSource> {
    player: Player,
    engine: RoundEngine<S>,
    stats: SessionStats,
}

impl<S: DiceSource> GameController<S> {
    pub fn new(player: Player, source: S) -> Self {
        Self {
            player,
            engine: RoundEngine::new(source),
            stats: SessionStats::default(),
        }
    }

    /// Игрок и лимиты из конфига.
    pub fn from_config(config: &CrapsConfig, source: S) -> Self {
        Self::new(config.make_player(), source)
    }

    fn validator(&self) -> MoveValidator<'_> {
        MoveValidator::new(self.engine.state(), &self.player)
    }

    /// Новый раунд со ставкой. Сначала всегда reset; при неверной ставке
    /// раунд не начинается и баланс не меняется.
    pub fn start_new_round(&mut self, bet_amount: Chips) -> bool {
        self.reset_round();

        if !self.validator().is_valid_bet(bet_amount) {
            if let Err(reason) = self.player.validate_bet(bet_amount) {
                warn!(player = %self.player.name, %bet_amount, %reason, "ставка отклонена");
            }
            return false;
        }

        self.engine.place_bet(&mut self.player, bet_amount)
    }

    /// Бросок. Без ставки или после разрешения раунда – `CannotRoll`.
    pub fn roll(&mut self) -> Result<RollResult, EngineError> {
        if !self.validator().can_roll() {
            warn!(
                player = %self.player.name,
                status = ?self.engine.state().status(),
                bet = %self.player.current_bet(),
                "попытка броска вне раунда"
            );
            return Err(EngineError::CannotRoll);
        }

        let roll = self.engine.roll_dice(&mut self.player)?;
        self.stats.rolls += 1;

        match self.engine.state().status() {
            RoundStatus::Win => {
                self.stats.rounds_played += 1;
                self.stats.rounds_won += 1;
            }
            RoundStatus::Lose => {
                self.stats.rounds_played += 1;
                self.stats.rounds_lost += 1;
            }
            RoundStatus::Playing => {}
        }

        if self.is_game_session_over() {
            info!(
                player = %self.player.name,
                won = self.player.has_won(),
                balance = %self.player.balance(),
                "сессия окончена"
            );
        }

        Ok(roll)
    }

    pub fn is_round_over(&self) -> bool {
        self.engine.state().status() != RoundStatus::Playing
    }

    /// Конец сессии считается только по банкроллу, статус раунда не важен.
    pub fn is_game_session_over(&self) -> bool {
        self.player.has_won() || self.player.has_lost()
    }

    /// Хватает ли банкролла хотя бы на минимальную ставку. Остаток
    /// 1..min_bet-1 не считается проигрышем сессии, но играть им нельзя.
    pub fn can_afford_minimum_bet(&self) -> bool {
        self.player.can_bet(self.minimum_bet())
    }

    /// Подготовить следующий раунд. Баланс сохраняется; живая ставка
    /// неразрешённого раунда сгорает.
    pub fn reset_round(&mut self) {
        if !self.player.current_bet().is_zero() {
            let forfeited = self.player.forfeit_bet();
            self.stats.rounds_abandoned += 1;
            warn!(
                player = %self.player.name,
                round_id = self.engine.round_id(),
                %forfeited,
                "раунд брошен, ставка сгорела"
            );
        }
        self.engine.reset_round();
    }

    pub fn can_continue_game(&self) -> bool {
        self.validator().can_continue_game()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn engine(&self) -> &RoundEngine<S> {
        &self.engine
    }

    pub fn round_state(&self) -> &RoundState {
        self.engine.state()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn point(&self) -> u8 {
        self.engine.state().point()
    }

    pub fn is_in_point_phase(&self) -> bool {
        self.engine.state().phase() == Phase::Point
    }

    pub fn minimum_bet(&self) -> Chips {
        self.player.limits().minimum_bet
    }

    pub fn winning_balance(&self) -> Chips {
        self.player.limits().winning_balance
    }

    pub fn last_roll(&self) -> Option<RollResult> {
        self.engine.last_roll()
    }
}
