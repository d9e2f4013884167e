//! Texas hold'em hand strength evaluation.
//!
//! Given two hole cards and a complete five card board this crate answers
//! the question "how often does this hand win at showdown against a single
//! opponent holding any two of the unseen cards?"
//!
//! The work is split into two modules:
//!
//! - [`core`] holds the value types ([`core::Card`], [`core::Value`],
//!   [`core::Suit`], [`core::Deck`]), the combination enumerator and the hand
//!   classifier ([`core::Rankable`]).
//! - [`holdem`] holds the [`holdem::EquityCalculator`] which enumerates all
//!   990 opponent holdings on the river.
//!
//! # Example
//!
//! ```
//! use hand_strength::core::parse_cards;
//! use hand_strength::holdem::EquityCalculator;
//!
//! let hole = parse_cards(["AS", "AH"]).unwrap();
//! let board = parse_cards(["AD", "AC", "2H", "7S", "9D"]).unwrap();
//!
//! let result = EquityCalculator::new(&hole, &board).unwrap().calculate();
//! assert_eq!(990, result.trials);
//! assert_eq!(990, result.wins);
//! ```
/// Core card, deck, combination and ranking types.
pub mod core;

/// Everything needed to evaluate a hold'em hand on the river.
pub mod holdem;
