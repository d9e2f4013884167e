/// card.rs has value and suit for poker cards.
mod card;
/// Export `Card`, `Suit`, and `Value`
pub use self::card::{parse_cards, Card, Suit, Value, SUITS, VALUES};

/// Errors returned when parsing cards or checking hand preconditions.
mod error;
/// Export the error types.
pub use self::error::{CardParseError, InvalidHandError};

/// deck.rs has the ordered deck and card removal.
mod deck;
/// Export `Deck`
pub use self::deck::{make_deck, remove_cards, Deck};

/// Enumerate every k sized subset of an ordered collection.
mod card_iter;
/// Export the combination enumerators.
pub use self::card_iter::{binomial, combinations, CardIter, Combinations};

/// Classify five card hands and pick the best five of seven.
mod rank;
/// Export the ranking types.
pub use self::rank::{CoreRank, Rank, Rankable};

/// Check that `cards` holds exactly `expected` cards and none of them repeat.
pub(crate) fn check_hand(cards: &[Card], expected: usize) -> Result<(), InvalidHandError> {
    if cards.len() != expected {
        return Err(InvalidHandError::WrongCardCount {
            expected,
            found: cards.len(),
        });
    }
    check_distinct(cards)
}

/// Check that no card appears twice.
pub(crate) fn check_distinct(cards: &[Card]) -> Result<(), InvalidHandError> {
    for (i, card) in cards.iter().enumerate() {
        if cards[i + 1..].contains(card) {
            return Err(InvalidHandError::DuplicateCard(*card));
        }
    }
    Ok(())
}
