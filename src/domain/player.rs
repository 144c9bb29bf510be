use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::limits::TableLimits;
use crate::engine::errors::EngineError;

/// Игрок сессии: имя, банкролл и ставка текущего раунда.
///
/// Ставка списывается с баланса в момент `place_bet`; при выигрыше
/// `update_balance(true)` возвращает её вдвое, при проигрыше ничего
/// дополнительно не списывается.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    balance: Chips,
    /// Ненулевая только пока раунд активен и не разрешён.
    current_bet: Chips,
    limits: TableLimits,
}

impl Player {
    /// Игрок с лимитами по умолчанию (мин. ставка 5, цель 1000).
    pub fn new(name: impl Into<String>, balance: Chips) -> Self {
        Self::with_limits(name, balance, TableLimits::default())
    }

    pub fn with_limits(name: impl Into<String>, balance: Chips, limits: TableLimits) -> Self {
        Self {
            name: name.into(),
            balance,
            current_bet: Chips::ZERO,
            limits,
        }
    }

    pub fn balance(&self) -> Chips {
        self.balance
    }

    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }

    pub fn limits(&self) -> TableLimits {
        self.limits
    }

    pub fn minimum_bet(&self) -> Chips {
        self.limits.minimum_bet
    }

    /// Проверка ставки с причиной отказа.
    pub fn validate_bet(&self, amount: Chips) -> Result<(), EngineError> {
        if amount < self.limits.minimum_bet {
            return Err(EngineError::BetBelowMinimum {
                amount,
                minimum: self.limits.minimum_bet,
            });
        }
        if amount > self.balance {
            return Err(EngineError::InsufficientFunds {
                amount,
                balance: self.balance,
            });
        }
        Ok(())
    }

    /// `minimum_bet <= amount <= balance`, без изменений состояния.
    pub fn can_bet(&self, amount: Chips) -> bool {
        self.validate_bet(amount).is_ok()
    }

    /// Поставить `amount`. При отказе состояние не меняется.
    pub fn place_bet(&mut self, amount: Chips) -> bool {
        if !self.can_bet(amount) {
            return false;
        }
        self.balance -= amount;
        self.current_bet = amount;
        true
    }

    /// Расчёт раунда. Выигрыш: +2×ставка. Ставка обнуляется в любом случае.
    pub fn update_balance(&mut self, won: bool) {
        if won {
            self.balance += self.current_bet.doubled();
        }
        self.current_bet = Chips::ZERO;
    }

    /// Сгорание живой ставки при брошенном раунде. Баланс не трогаем –
    /// ставка уже списана.
    pub fn forfeit_bet(&mut self) -> Chips {
        std::mem::replace(&mut self.current_bet, Chips::ZERO)
    }

    pub fn has_won(&self) -> bool {
        self.balance >= self.limits.winning_balance
    }

    pub fn has_lost(&self) -> bool {
        self.balance.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forfeit_keeps_balance() {
        let mut p = Player::new("p", Chips(100));
        assert!(p.place_bet(Chips(20)));
        assert_eq!(p.forfeit_bet(), Chips(20));
        assert_eq!(p.balance(), Chips(80));
        assert_eq!(p.current_bet(), Chips::ZERO);
    }

    #[test]
    fn validate_bet_reports_reason() {
        let p = Player::new("p", Chips(10));
        assert!(matches!(
            p.validate_bet(Chips(3)),
            Err(EngineError::BetBelowMinimum { .. })
        ));
        assert!(matches!(
            p.validate_bet(Chips(11)),
            Err(EngineError::InsufficientFunds { .. })
        ));
        assert!(p.validate_bet(Chips(10)).is_ok());
    }
}
