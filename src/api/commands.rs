use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::engine::{DiceSource, GameController};

use super::dto::{build_session_view, CommandResponse, RollDto};
use super::errors::ApiError;

/// Команды, меняющие состояние сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Начать новый раунд со ставкой.
    StartRound { bet: Chips },

    /// Бросить кости в текущем раунде.
    Roll,

    /// Сбросить раунд, сохранив баланс.
    ResetRound,
}

/// Выполнить команду над контроллером.
///
/// Неверная ставка и бросок вне раунда превращаются в `ApiError`,
/// состояние при этом не меняется (кроме reset перед ставкой).
pub fn execute_command<S: DiceSource>(
    controller: &mut GameController<S>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::StartRound { bet } => {
            if controller.is_game_session_over() {
                return Err(ApiError::SessionOver);
            }
            if controller.start_new_round(bet) {
                Ok(CommandResponse::RoundStarted(build_session_view(controller)))
            } else {
                let reason = controller
                    .player()
                    .validate_bet(bet)
                    .err()
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| format!("ставка {bet} сейчас невозможна"));
                Err(ApiError::InvalidBet(reason))
            }
        }

        Command::Roll => {
            let roll = controller.roll()?;
            Ok(CommandResponse::Rolled {
                roll: RollDto::from(roll),
                view: build_session_view(controller),
            })
        }

        Command::ResetRound => {
            controller.reset_round();
            Ok(CommandResponse::RoundReset(build_session_view(controller)))
        }
    }
}
