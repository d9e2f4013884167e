use crate::core::card::{Card, Value};

use super::{check_hand, Combinations, Deck, InvalidHandError};

/// All the different possible hand ranks.
/// For each hand rank the u8 is the single value used to
/// break ties against other hands of the same rank.
///
/// - `HighCard`, `Flush`: the highest card value in the hand.
/// - `OnePair`, `ThreeOfAKind`, `FourOfAKind`: the value that's repeated.
/// - `TwoPair`: the higher of the two pairs.
/// - `FullHouse`: the value of the three of a kind.
/// - `Straight`, `StraightFlush`: the top of the run.
///
/// Kickers are not tracked so two hands with the same rank and the same
/// tie break value are equal even when their other cards differ.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum Rank {
    /// The lowest rank.
    /// No matches
    HighCard(u8),
    /// One Card matches another.
    OnePair(u8),
    /// Two different pair of matching cards.
    TwoPair(u8),
    /// Three of the same value.
    ThreeOfAKind(u8),
    /// Five cards in a sequence
    Straight(u8),
    /// Five cards of the same suit
    Flush(u8),
    /// Three of one value and two of another value
    FullHouse(u8),
    /// Four of the same value.
    FourOfAKind(u8),
    /// Five cards in a sequence all for the same suit.
    StraightFlush(u8),
}

impl Rank {
    /// The tie break value carried by this rank.
    pub fn tiebreak(&self) -> u8 {
        match *self {
            Rank::HighCard(v)
            | Rank::OnePair(v)
            | Rank::TwoPair(v)
            | Rank::ThreeOfAKind(v)
            | Rank::Straight(v)
            | Rank::Flush(v)
            | Rank::FullHouse(v)
            | Rank::FourOfAKind(v)
            | Rank::StraightFlush(v) => v,
        }
    }

    /// Just the category, without the tie break.
    pub fn core_rank(&self) -> CoreRank {
        (*self).into()
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum CoreRank {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

/// Convert from Rank to CoreRank by stripping the u8 detail.
/// This is useful to reduce the cardinality of ranks.
///
/// For example counting how often an opponent ends up with each kind of
/// hand without caring about the specific values.
impl From<Rank> for CoreRank {
    fn from(rank: Rank) -> Self {
        match rank {
            Rank::HighCard(_) => CoreRank::HighCard,
            Rank::OnePair(_) => CoreRank::OnePair,
            Rank::TwoPair(_) => CoreRank::TwoPair,
            Rank::ThreeOfAKind(_) => CoreRank::ThreeOfAKind,
            Rank::Straight(_) => CoreRank::Straight,
            Rank::Flush(_) => CoreRank::Flush,
            Rank::FullHouse(_) => CoreRank::FullHouse,
            Rank::FourOfAKind(_) => CoreRank::FourOfAKind,
            Rank::StraightFlush(_) => CoreRank::StraightFlush,
        }
    }
}

/// How many times each value shows up, indexed by the numeric value.
/// Slots 0 and 1 are never used.
#[derive(Debug, Default)]
struct ValueBins([u8; 15]);

/// What a single high to low pass over the bins finds.
#[derive(Debug, Default)]
struct BinSummary {
    /// Largest count of any one value.
    max_count: u8,
    /// The highest value that has `max_count` cards.
    primary: u8,
    /// How many values have two or more cards.
    large_bins: u8,
    /// The highest value with two or more cards.
    top_pair: u8,
    /// The highest value present at all.
    high_card: u8,
}

impl ValueBins {
    fn insert(&mut self, v: Value) {
        self.0[v as usize] += 1;
    }

    fn summary(&self) -> BinSummary {
        let mut s = BinSummary::default();
        for v in (2..=14u8).rev() {
            let count = self.0[v as usize];
            if count > s.max_count {
                s.max_count = count;
                s.primary = v;
            }
            if count >= 2 {
                s.large_bins += 1;
                s.top_pair = s.top_pair.max(v);
            }
            if s.high_card == 0 && count != 0 {
                s.high_card = v;
            }
        }
        s
    }

    /// If five different values sit in a row return the highest.
    ///
    /// Aces are only high so A 2 3 4 5 isn't a run.
    fn straight_top(&self) -> Option<u8> {
        let mut occupied = (2..=14u8).filter(|&v| self.0[v as usize] > 0);
        let low = occupied.next()?;
        let mut high = low;
        let mut count = 1;
        for v in occupied {
            high = v;
            count += 1;
        }
        (count == 5 && high - low == 4).then_some(high)
    }
}

impl BinSummary {
    /// The best rank that can be made only from how the values repeat.
    fn rank(&self) -> Rank {
        match (self.max_count, self.large_bins) {
            (4, _) => Rank::FourOfAKind(self.primary),
            (3, 2) => Rank::FullHouse(self.primary),
            (3, _) => Rank::ThreeOfAKind(self.primary),
            (_, 2) => Rank::TwoPair(self.top_pair),
            (2, _) => Rank::OnePair(self.primary),
            _ => Rank::HighCard(self.high_card),
        }
    }
}

/// Can this turn into a hand rank? There are default implementations for
/// `Deck`, `Vec<Card>`, slices and arrays of cards.
pub trait Rankable {
    /// The cards to rank.
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Rank the cards to find the best 5 card hand.
    ///
    /// Every 5 card subset is ranked with `rank_five` and the best one wins.
    /// For a 7 card hold'em hand that's all 21 of them. With 5 or fewer
    /// cards this is the same as `rank_five`.
    ///
    /// The cards are expected to be unique; use `try_rank` to have that
    /// checked.
    ///
    /// # Examples
    /// ```
    /// use hand_strength::core::{parse_cards, Rank, Rankable};
    ///
    /// let hand = parse_cards(["JD", "8D", "9D", "3H", "2D", "QD", "10D"]).unwrap();
    /// assert_eq!(Rank::StraightFlush(12), hand.rank());
    /// ```
    fn rank(&self) -> Rank {
        let cards: Vec<Card> = self.cards().collect();
        if cards.len() <= 5 {
            return cards.rank_five();
        }

        let mut hand = [cards[0]; 5];
        let mut best = Rank::HighCard(0);
        let mut combos = Combinations::new(cards.len(), 5);
        while combos.advance() {
            for (slot, &i) in hand.iter_mut().zip(combos.indices()) {
                *slot = cards[i];
            }
            best = best.max(hand.rank_five());
        }
        best
    }

    /// Rank exactly 5 cards.
    ///
    /// The values are counted into bins to find pairs, sets and quads.
    /// Separately the hand is checked for a flush and, when no value
    /// repeats, for a straight. The best of those wins, with a straight
    /// and a flush together making a straight flush.
    ///
    /// The result is undefined (but safe) for anything other than five unique
    /// cards. `try_rank_five` checks that first.
    ///
    /// # Examples
    /// ```
    /// use hand_strength::core::{parse_cards, Rank, Rankable};
    ///
    /// let hand = parse_cards(["3H", "4H", "3C", "3S", "4C"]).unwrap();
    /// assert_eq!(Rank::FullHouse(3), hand.rank_five());
    /// ```
    fn rank_five(&self) -> Rank {
        let mut bins = ValueBins::default();
        let mut count = 0;
        let mut first_suit = None;
        let mut same_suit = true;

        for c in self.cards() {
            bins.insert(c.value);
            count += 1;
            match first_suit {
                None => first_suit = Some(c.suit),
                Some(s) => same_suit &= s == c.suit,
            }
        }

        let summary = bins.summary();
        let by_count = summary.rank();
        let flush = (count == 5 && same_suit).then_some(Rank::Flush(summary.high_card));

        let mut best = flush.map_or(by_count, |f| f.max(by_count));
        if let Rank::HighCard(_) = by_count {
            match (bins.straight_top(), flush) {
                (Some(top), Some(_)) => best = Rank::StraightFlush(top),
                (Some(top), None) => best = best.max(Rank::Straight(top)),
                (None, _) => {}
            }
        }
        best
    }

    /// `rank_five` after checking there are exactly five unique cards.
    fn try_rank_five(&self) -> Result<Rank, InvalidHandError> {
        let cards: Vec<Card> = self.cards().collect();
        check_hand(&cards, 5)?;
        Ok(cards.rank_five())
    }

    /// `rank` after checking there are exactly seven unique cards.
    fn try_rank(&self) -> Result<Rank, InvalidHandError> {
        let cards: Vec<Card> = self.cards().collect();
        check_hand(&cards, 7)?;
        Ok(cards.rank())
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for &[Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl<const N: usize> Rankable for [Card; N] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for Deck {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}
