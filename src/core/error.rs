use thiserror::Error;

use super::Card;

/// Errors from turning text like `"10H"` into cards.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CardParseError {
    #[error("Empty card token")]
    EmptyToken,
    #[error("Unexpected character for a card value")]
    UnexpectedValueChar,
    #[error("Unexpected character for a card suit")]
    UnexpectedSuitChar,
    #[error("Card value is not followed by a suit")]
    MissingSuit,
    #[error("Extra un-used chars found after parsing")]
    UnparsedCharsRemaining,
}

/// The cards handed to the evaluator don't describe a legal hand.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum InvalidHandError {
    #[error("Expected {expected} cards but got {found}")]
    WrongCardCount { expected: usize, found: usize },
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("Card {0} is not in the deck")]
    CardNotInDeck(Card),
}
