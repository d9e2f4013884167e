use std::ops::Deref;

use super::{check_distinct, Card, InvalidHandError, Suit, Value};

/// An ordered collection of unique cards.
///
/// A fresh deck is suit-major (hearts, spades, clubs, diamonds) and the
/// values run from two up to ace inside each suit. Decks can only be made
/// whole or by removing cards from another deck, so every card in one is
/// unique and the order is always reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// How many cards are left.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all the cards been removed?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Iterate the cards in deck order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Return a new deck without any of the cards in `to_remove`.
    ///
    /// The remaining cards keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHandError::CardNotInDeck` for the first card of
    /// `to_remove` that isn't part of this deck.
    ///
    /// # Examples
    ///
    /// ```
    /// use hand_strength::core::{Card, Deck, Suit, Value};
    ///
    /// let d = Deck::default();
    /// let removed = d
    ///     .remove_cards(&[Card::new(Value::Jack, Suit::Heart)])
    ///     .unwrap();
    /// assert_eq!(51, removed.len());
    /// ```
    pub fn remove_cards(&self, to_remove: &[Card]) -> Result<Deck, InvalidHandError> {
        remove_cards(&self.cards, to_remove)
    }
}

/// Create the full 52 card deck.
impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .into_iter()
            .flat_map(|suit| Value::values().into_iter().map(move |v| Card::new(v, suit)))
            .collect();
        Self { cards }
    }
}

impl Deref for Deck {
    type Target = [Card];

    fn deref(&self) -> &[Card] {
        &self.cards[..]
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

/// Make a full 52 card deck in deck order.
pub fn make_deck() -> Deck {
    Deck::default()
}

/// Copy `source` leaving out every card that's in `to_remove`.
///
/// # Errors
///
/// A card that shows up twice in `source` is returned as
/// `InvalidHandError::DuplicateCard`. Every card in `to_remove` has to be
/// found in `source`; the first one that isn't is returned as
/// `InvalidHandError::CardNotInDeck`.
pub fn remove_cards(source: &[Card], to_remove: &[Card]) -> Result<Deck, InvalidHandError> {
    check_distinct(source)?;
    if let Some(missing) = to_remove.iter().find(|c| !source.contains(c)) {
        return Err(InvalidHandError::CardNotInDeck(*missing));
    }

    let cards = source
        .iter()
        .filter(|c| !to_remove.contains(c))
        .copied()
        .collect();
    Ok(Deck { cards })
}
