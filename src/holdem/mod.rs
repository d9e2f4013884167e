/// Module for calculating a hand's equity on the river by enumerating every
/// possible opponent holding.
mod equity_calculator;
/// Export `EquityCalculator` and `EquityResult`
pub use self::equity_calculator::{hand_strength, EquityCalculator, EquityResult};
