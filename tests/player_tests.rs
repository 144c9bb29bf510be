//! Игрок/леджер: правила ставки, выплаты и условия конца сессии.

use craps_engine::domain::{Chips, Player, TableLimits, MINIMUM_BET, WINNING_BALANCE};

fn player(balance: u64) -> Player {
    Player::new("Tester", Chips(balance))
}

#[test]
fn default_limits_are_five_and_one_thousand() {
    let p = player(100);
    assert_eq!(p.minimum_bet(), Chips(5));
    assert_eq!(p.limits(), TableLimits::new(MINIMUM_BET, WINNING_BALANCE));
    assert_eq!(p.current_bet(), Chips::ZERO);
}

#[test]
fn place_bet_succeeds_iff_within_bounds() {
    for amount in 0..=110u64 {
        let mut p = player(100);
        let expected = (5..=100).contains(&amount);
        assert_eq!(p.can_bet(Chips(amount)), expected, "amount {amount}");
        assert_eq!(p.place_bet(Chips(amount)), expected, "amount {amount}");
        if expected {
            assert_eq!(p.balance(), Chips(100 - amount));
            assert_eq!(p.current_bet(), Chips(amount));
        } else {
            assert_eq!(p.balance(), Chips(100));
            assert_eq!(p.current_bet(), Chips::ZERO);
        }
    }
}

#[test]
fn bet_below_minimum_leaves_balance_unchanged() {
    let mut p = player(100);
    assert!(!p.place_bet(Chips(3)));
    assert_eq!(p.balance(), Chips(100));
}

#[test]
fn win_pays_double_the_bet() {
    let mut p = player(100);
    assert!(p.place_bet(Chips(10)));
    p.update_balance(true);
    assert_eq!(p.balance(), Chips(110));
    assert_eq!(p.current_bet(), Chips::ZERO);
}

#[test]
fn loss_does_not_debit_again() {
    let mut p = player(100);
    assert!(p.place_bet(Chips(10)));
    p.update_balance(false);
    assert_eq!(p.balance(), Chips(90));
    assert_eq!(p.current_bet(), Chips::ZERO);
}

#[test]
fn all_in_loss_busts_the_player() {
    let mut p = player(20);
    assert!(p.place_bet(Chips(20)));
    p.update_balance(false);
    assert!(p.has_lost());
    assert!(!p.has_won());
}

#[test]
fn reaching_target_wins_the_session() {
    let mut p = player(999);
    assert!(!p.has_won());
    assert!(p.place_bet(Chips(5)));
    p.update_balance(true);
    assert_eq!(p.balance(), Chips(1004));
    assert!(p.has_won());
}

#[test]
fn custom_limits_are_respected() {
    let limits = TableLimits::new(Chips(25), Chips(500));
    let mut p = Player::with_limits("High roller", Chips(300), limits);
    assert!(!p.can_bet(Chips(10)));
    assert!(p.place_bet(Chips(25)));
    assert!(!p.has_won());
}
