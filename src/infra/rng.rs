use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{DieValue, DIE_SIDES};
use crate::engine::DiceSource;

/// Системный RNG (thread_rng) – для настоящей игры.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl DiceSource for SystemRng {
    fn roll_pair(&mut self) -> (DieValue, DieValue) {
        let mut rng = rand::thread_rng();
        (rng.gen_range(1..=DIE_SIDES), rng.gen_range(1..=DIE_SIDES))
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Один и тот же seed даёт одну и ту же последовательность бросков.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl DiceSource for DeterministicRng {
    fn roll_pair(&mut self) -> (DieValue, DieValue) {
        (
            self.inner.gen_range(1..=DIE_SIDES),
            self.inner.gen_range(1..=DIE_SIDES),
        )
    }
}

/// Заранее заданная последовательность бросков, по кругу.
///
/// Пустой сценарий отдаёт (0, 0) – `Dice` отклонит это как неверную кость.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    pairs: Vec<(DieValue, DieValue)>,
    cursor: usize,
}

impl ScriptedDice {
    pub fn new(pairs: Vec<(DieValue, DieValue)>) -> Self {
        Self { pairs, cursor: 0 }
    }

    /// Сценарий по суммам: 2 -> (1,1), 7 -> (1,6), 10 -> (4,6).
    pub fn from_totals(totals: &[u8]) -> Self {
        Self::new(totals.iter().map(|&t| split_total(t)).collect())
    }

    /// Сколько бросков уже отдано.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ScriptedDice {
    fn roll_pair(&mut self) -> (DieValue, DieValue) {
        if self.pairs.is_empty() {
            return (0, 0);
        }
        let pair = self.pairs[self.cursor % self.pairs.len()];
        self.cursor += 1;
        pair
    }
}

fn split_total(total: u8) -> (DieValue, DieValue) {
    let first = if total > 7 { total - DIE_SIDES } else { 1 };
    (first, total.saturating_sub(first))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_total_covers_range() {
        for t in 2..=12u8 {
            let (a, b) = split_total(t);
            assert!((1..=6).contains(&a) && (1..=6).contains(&b), "total {t}");
            assert_eq!(a + b, t);
        }
    }

    #[test]
    fn scripted_dice_cycles() {
        let mut d = ScriptedDice::from_totals(&[7, 4]);
        assert_eq!(d.roll_pair(), (1, 6));
        assert_eq!(d.roll_pair(), (1, 3));
        assert_eq!(d.roll_pair(), (1, 6));
        assert_eq!(d.consumed(), 3);
    }
}
