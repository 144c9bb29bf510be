use tracing::{debug, info};

use crate::domain::{Chips, Player, RollResult, RoundId, RoundOutcome};
use crate::engine::dice::Dice;
use crate::engine::errors::EngineError;
use crate::engine::round_history::{RoundEventKind, RoundHistory};
use crate::engine::round_state::RoundState;
use crate::engine::DiceSource;

/// Движок одного раунда: кости + машина состояний + история.
///
/// Игрок сюда не входит – он живёт в сессии и передаётся в мутирующие
/// методы по `&mut`, баланс переживает `reset_round`.
#[derive(Clone, Debug)]
pub struct RoundEngine<S: DiceSource> {
    round_id: RoundId,
    state: RoundState,
    dice: Dice<S>,
    history: RoundHistory,
}

impl<S: DiceSource> RoundEngine<S> {
    pub fn new(source: S) -> Self {
        let mut engine = Self {
            round_id: 1,
            state: RoundState::new(),
            dice: Dice::new(source),
            history: RoundHistory::new(),
        };
        engine
            .history
            .push(RoundEventKind::RoundStarted { round_id: engine.round_id });
        engine
    }

    /// Сбросить состояние раунда и кости. Игрока не трогает.
    pub fn reset_round(&mut self) {
        self.state.reset();
        self.dice.reset();
        self.history.clear();
        self.round_id += 1;
        self.history
            .push(RoundEventKind::RoundStarted { round_id: self.round_id });
        debug!(round_id = self.round_id, "раунд сброшен");
    }

    /// Делегирует в `Player::place_bet`.
    pub fn place_bet(&mut self, player: &mut Player, amount: Chips) -> bool {
        if !player.place_bet(amount) {
            return false;
        }
        self.history.push(RoundEventKind::BetPlaced {
            amount,
            balance_after: player.balance(),
        });
        debug!(
            round_id = self.round_id,
            player = %player.name,
            %amount,
            balance = %player.balance(),
            "ставка принята"
        );
        true
    }

    /// Бросок: кости -> `check_outcome` -> расчёт с игроком, если раунд
    /// разрешился. На Continue игрок не меняется.
    pub fn roll_dice(&mut self, player: &mut Player) -> Result<RollResult, EngineError> {
        if self.state.status().is_terminal() {
            return Err(EngineError::RoundAlreadyResolved);
        }

        let roll = self.dice.roll()?;
        let was_come_out = self.state.point() == 0;
        let outcome = self.state.check_outcome(roll.total())?;

        self.history.push(RoundEventKind::DiceRolled { roll, outcome });
        debug!(round_id = self.round_id, %roll, ?outcome, "бросок");

        if was_come_out && outcome == RoundOutcome::Continue {
            self.history.push(RoundEventKind::PointEstablished {
                point: self.state.point(),
            });
        }

        if let Some(won) = outcome.resolved() {
            let bet = player.current_bet();
            player.update_balance(won);
            self.history.push(RoundEventKind::RoundResolved {
                won,
                bet,
                balance_after: player.balance(),
            });
            info!(
                round_id = self.round_id,
                player = %player.name,
                won,
                %bet,
                balance = %player.balance(),
                "раунд разрешён"
            );
        }

        Ok(roll)
    }

    /// Раунд (не сессия) закончен: статус Win или Lose.
    pub fn is_game_over(&self) -> bool {
        self.state.status().is_terminal()
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn round_id(&self) -> RoundId {
        self.round_id
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    pub fn dice(&self) -> &Dice<S> {
        &self.dice
    }

    pub fn last_roll(&self) -> Option<RollResult> {
        self.dice.last_roll()
    }

    /// Значения обеих костей последнего броска, (0, 0) до первого броска.
    pub fn dice_values(&self) -> (u8, u8) {
        self.dice
            .last_roll()
            .map(|r| (r.die1, r.die2))
            .unwrap_or((0, 0))
    }
}
