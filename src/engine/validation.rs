use crate::domain::{Chips, Player};
use crate::engine::round_state::RoundState;

/// "Можно ли сейчас сделать это действие" для пары (раунд, игрок).
///
/// Только чтение и только bool – контроллер спрашивает его перед каждым
/// мутирующим вызовом, чтобы правило жило в одном месте.
#[derive(Clone, Copy, Debug)]
pub struct MoveValidator<'a> {
    round: &'a RoundState,
    player: &'a Player,
}

impl<'a> MoveValidator<'a> {
    pub fn new(round: &'a RoundState, player: &'a Player) -> Self {
        Self { round, player }
    }

    /// Ставка в пределах лимитов и баланса, раунд в игре.
    pub fn is_valid_bet(&self, amount: Chips) -> bool {
        self.player.can_bet(amount) && self.round.is_playing()
    }

    /// Раунд в игре и ставка уже сделана.
    pub fn can_roll(&self) -> bool {
        self.round.is_playing() && !self.player.current_bet().is_zero()
    }

    /// Сессия не закончена и раунд ещё идёт.
    pub fn can_continue_game(&self) -> bool {
        if self.player.has_won() || self.player.has_lost() {
            return false;
        }
        self.round.is_playing()
    }
}
