use crate::domain::{DieValue, RollResult};
use crate::engine::errors::EngineError;
use crate::engine::DiceSource;

/// Две кости поверх внешнего источника случайности.
///
/// Состояние – только последний бросок (для отображения).
#[derive(Clone, Debug)]
pub struct Dice<S: DiceSource> {
    source: S,
    last: Option<RollResult>,
}

impl<S: DiceSource> Dice<S> {
    pub fn new(source: S) -> Self {
        Self { source, last: None }
    }

    /// Бросить обе кости. Значения вне 1..=6 от источника – ошибка источника.
    pub fn roll(&mut self) -> Result<RollResult, EngineError> {
        let (die1, die2) = self.source.roll_pair();
        check_die(die1)?;
        check_die(die2)?;

        let roll = RollResult::new(die1, die2);
        self.last = Some(roll);
        Ok(roll)
    }

    /// Последний бросок, `None` до первого броска и после reset.
    pub fn last_roll(&self) -> Option<RollResult> {
        self.last
    }

    /// Сумма последнего броска, 0 если бросков не было.
    pub fn last_total(&self) -> u8 {
        self.last.map(|r| r.total()).unwrap_or(0)
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

fn check_die(value: DieValue) -> Result<(), EngineError> {
    if RollResult::is_valid_die(value) {
        Ok(())
    } else {
        Err(EngineError::InvalidDieValue(value))
    }
}
