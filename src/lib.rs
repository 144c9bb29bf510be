//! Движок крэпса для одного игрока.
//!
//! Слои:
//! - `domain` – фишки, игрок, бросок, фазы;
//! - `engine` – машина состояний раунда, валидация, движок раунда, сессия;
//! - `infra` – RNG-источники и конфигурация;
//! - `api` – команды/запросы/DTO для view-слоя.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use domain::{Chips, Phase, Player, RollResult, RoundOutcome, RoundStatus, TableLimits};
pub use engine::{DiceSource, EngineError, GameController, RoundEngine, RoundState};
pub use infra::CrapsConfig;
