use std::collections::BTreeMap;

use tracing::{debug, instrument, trace};

use crate::core::{
    check_distinct, check_hand, Card, CardIter, CoreRank, Deck, InvalidHandError, Rank, Rankable,
};

/// Number of hole cards each player holds.
const HOLE_CARDS: usize = 2;
/// Number of community cards on a complete board.
const BOARD_CARDS: usize = 5;

/// Tally of one equity calculation.
///
/// Every possible opponent holding counts once in `trials`. Those that
/// the player beats count in `wins`, those with an equal rank in `ties`,
/// and the rest are losses.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquityResult {
    /// The player's best hand.
    pub player_rank: Rank,
    /// Opponent holdings the player beats.
    pub wins: usize,
    /// Opponent holdings that split the pot.
    pub ties: usize,
    /// Total number of opponent holdings evaluated.
    pub trials: usize,
    /// How many opponent holdings end up in each category.
    pub opponent_categories: BTreeMap<CoreRank, usize>,
}

impl EquityResult {
    /// Opponent holdings that beat the player.
    ///
    /// A result whose wins and ties add up to more than its trials has no
    /// losses.
    pub fn losses(&self) -> usize {
        self.trials
            .saturating_sub(self.wins)
            .saturating_sub(self.ties)
    }

    /// Calculate win percentage (0.0 - 100.0)
    pub fn win_percentage(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        (self.wins as f64 / self.trials as f64) * 100.0
    }

    /// Calculate tie percentage (0.0 - 100.0)
    pub fn tie_percentage(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        (self.ties as f64 / self.trials as f64) * 100.0
    }

    /// Whatever is left after wins and ties.
    pub fn loss_percentage(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        100.0 - self.win_percentage() - self.tie_percentage()
    }
}

/// Calculator for how a hand does on the river against one opponent.
///
/// The player's two hole cards and the five board cards are taken out of a
/// fresh deck. Every two card holding that can be made from the 45 cards
/// left is then given to the opponent, and the best five of seven for both
/// sides are compared.
#[derive(Debug, Clone)]
pub struct EquityCalculator {
    /// The player's hole cards.
    hole: [Card; HOLE_CARDS],
    /// The complete board.
    board: [Card; BOARD_CARDS],
    /// Cards that could be in the opponent's hand, in deck order.
    remaining_deck: Deck,
}

impl EquityCalculator {
    /// Create a new EquityCalculator
    ///
    /// # Arguments
    /// * `hole` - The player's two hole cards
    /// * `board` - All five community cards
    ///
    /// # Errors
    ///
    /// Returns `InvalidHandError` when there aren't exactly two hole cards and
    /// five board cards, or when any card shows up twice.
    ///
    /// # Example
    /// ```
    /// use hand_strength::core::parse_cards;
    /// use hand_strength::holdem::EquityCalculator;
    ///
    /// let hole = parse_cards(["6H", "4H"]).unwrap();
    /// let board = parse_cards(["5H", "KH", "8C", "2S", "JD"]).unwrap();
    ///
    /// let calc = EquityCalculator::new(&hole, &board).unwrap();
    /// assert_eq!(45, calc.remaining_deck().len());
    /// ```
    pub fn new(hole: &[Card], board: &[Card]) -> Result<Self, InvalidHandError> {
        check_hand(hole, HOLE_CARDS)?;
        check_hand(board, BOARD_CARDS)?;

        let mut known = [hole[0]; HOLE_CARDS + BOARD_CARDS];
        known[..HOLE_CARDS].copy_from_slice(hole);
        known[HOLE_CARDS..].copy_from_slice(board);
        check_distinct(&known)?;

        let remaining_deck = Deck::default().remove_cards(&known)?;

        let mut h = [hole[0]; HOLE_CARDS];
        h.copy_from_slice(hole);
        let mut b = [board[0]; BOARD_CARDS];
        b.copy_from_slice(board);

        Ok(Self {
            hole: h,
            board: b,
            remaining_deck,
        })
    }

    /// The player's best five card hand out of hole cards plus board.
    pub fn player_rank(&self) -> Rank {
        self.with_board(&self.hole).rank()
    }

    /// Compare the player against every possible opponent holding.
    ///
    /// The holdings are visited in a fixed order so the result is always
    /// the same for the same cards.
    ///
    /// # Example
    /// ```
    /// use hand_strength::core::{parse_cards, Rank};
    /// use hand_strength::holdem::EquityCalculator;
    ///
    /// let hole = parse_cards(["7H", "8H"]).unwrap();
    /// let board = parse_cards(["9H", "10H", "JH", "2C", "2D"]).unwrap();
    ///
    /// let result = EquityCalculator::new(&hole, &board).unwrap().calculate();
    /// assert_eq!(Rank::StraightFlush(11), result.player_rank);
    /// assert_eq!(990, result.trials);
    /// ```
    #[instrument(level = "debug", skip(self), fields(hole = ?self.hole, board = ?self.board))]
    pub fn calculate(&self) -> EquityResult {
        let player_rank = self.player_rank();
        debug!(?player_rank, "Ranked player hand");

        let mut wins = 0;
        let mut ties = 0;
        let mut trials = 0;
        let mut opponent_categories = BTreeMap::new();

        for holding in CardIter::new(&self.remaining_deck, HOLE_CARDS) {
            let opponent_rank = self.with_board(&holding).rank();
            trace!(?holding, ?opponent_rank, "Ranked opponent holding");

            trials += 1;
            *opponent_categories
                .entry(opponent_rank.core_rank())
                .or_insert(0) += 1;

            if player_rank > opponent_rank {
                wins += 1;
            } else if player_rank == opponent_rank {
                ties += 1;
            }
        }

        debug!(wins, ties, trials, "Finished enumerating opponent holdings");
        EquityResult {
            player_rank,
            wins,
            ties,
            trials,
            opponent_categories,
        }
    }

    /// Get the player's hole cards
    pub fn hole(&self) -> &[Card] {
        &self.hole
    }

    /// Get the board
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Get the cards an opponent could be holding
    pub fn remaining_deck(&self) -> &Deck {
        &self.remaining_deck
    }

    /// Two hole cards followed by the board.
    fn with_board(&self, hole: &[Card]) -> [Card; HOLE_CARDS + BOARD_CARDS] {
        let mut cards = [self.board[0]; HOLE_CARDS + BOARD_CARDS];
        cards[..HOLE_CARDS].copy_from_slice(hole);
        cards[HOLE_CARDS..].copy_from_slice(&self.board);
        cards
    }
}

/// Check the cards and run an `EquityCalculator` in one go.
///
/// ```
/// use hand_strength::core::parse_cards;
/// use hand_strength::holdem::hand_strength;
///
/// let hole = parse_cards(["2H", "7D"]).unwrap();
/// let board = parse_cards(["AS", "AH", "KC", "KD", "QS"]).unwrap();
///
/// let result = hand_strength(&hole, &board).unwrap();
/// assert_eq!(990, result.wins + result.ties + result.losses());
/// ```
pub fn hand_strength(hole: &[Card], board: &[Card]) -> Result<EquityResult, InvalidHandError> {
    Ok(EquityCalculator::new(hole, board)?.calculate())
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::{parse_cards, Suit, Value};

    fn calc(hole: &[&str], board: &[&str]) -> EquityCalculator {
        EquityCalculator::new(&parse_cards(hole).unwrap(), &parse_cards(board).unwrap()).unwrap()
    }

    #[test]
    fn test_remaining_deck() {
        let c = calc(&["6H", "4H"], &["5H", "KH", "8C", "2S", "JD"]);
        assert_eq!(45, c.remaining_deck().len());
        for card in c.hole().iter().chain(c.board()) {
            assert!(!c.remaining_deck().contains(card));
        }
    }

    #[test_log::test]
    fn test_counts_add_up() {
        let result = calc(&["6H", "4H"], &["5H", "KH", "8C", "2S", "JD"]).calculate();
        assert_eq!(990, result.trials);
        assert_eq!(990, result.wins + result.ties + result.losses());
        assert_eq!(990, result.opponent_categories.values().sum::<usize>());
        assert_abs_diff_eq!(
            100.0,
            result.win_percentage() + result.tie_percentage() + result.loss_percentage(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_player_rank() {
        let c = calc(&["6H", "4H"], &["5H", "KH", "8C", "2S", "JD"]);
        assert_eq!(Rank::HighCard(13), c.player_rank());
    }

    #[test]
    fn test_nuts_always_wins() {
        // A royal flush on the board plays for everyone so it's always a split.
        let board_royal = calc(&["2C", "3D"], &["AS", "KS", "QS", "JS", "10S"]).calculate();
        assert_eq!(990, board_royal.ties);
        assert_eq!(0, board_royal.wins);
        assert_abs_diff_eq!(100.0, board_royal.tie_percentage(), epsilon = 1e-9);

        // Holding the top straight flush wins every time.
        let result = calc(&["KH", "QH"], &["9H", "10H", "JH", "2C", "2D"]).calculate();
        assert_eq!(Rank::StraightFlush(13), result.player_rank);
        assert_eq!(990, result.wins);
        assert_abs_diff_eq!(100.0, result.win_percentage(), epsilon = 1e-9);
        assert_abs_diff_eq!(0.0, result.loss_percentage(), epsilon = 1e-9);
    }

    #[test]
    fn test_quads_on_board_split() {
        // Quad aces on the board with a king kicker. Kickers aren't
        // compared so everyone holds the same four of a kind.
        let result = calc(&["2C", "3D"], &["AS", "AH", "AC", "AD", "KS"]).calculate();
        assert_eq!(Rank::FourOfAKind(14), result.player_rank);
        assert_eq!(990, result.ties);
        assert_eq!(
            Some(&990),
            result.opponent_categories.get(&CoreRank::FourOfAKind)
        );
    }

    #[test]
    fn test_playing_the_board() {
        // Nothing in the hole helps, so the best this can do is split the
        // board pair. Any queen makes a straight.
        let result = calc(&["2H", "7D"], &["9S", "9C", "10D", "JH", "KS"]).calculate();
        assert_eq!(Rank::OnePair(9), result.player_rank);
        assert_eq!(0, result.wins);
        assert!(result.losses() > 0);
        assert!(result.ties > 0);
        assert_abs_diff_eq!(0.0, result.win_percentage(), epsilon = 1e-9);
    }

    #[test]
    fn test_deterministic() {
        let c = calc(&["QH", "QD"], &["2S", "7C", "9D", "JS", "KH"]);
        let first = c.calculate();
        for _ in 0..3 {
            assert_eq!(first, c.calculate());
        }
    }

    #[test]
    fn test_hand_strength_fn_matches_calculator() {
        let hole = parse_cards(["AS", "KD"]).unwrap();
        let board = parse_cards(["AH", "7C", "4D", "9S", "2H"]).unwrap();
        assert_eq!(
            EquityCalculator::new(&hole, &board).unwrap().calculate(),
            hand_strength(&hole, &board).unwrap()
        );
    }

    #[test]
    fn test_rejects_wrong_counts() {
        let hole = parse_cards(["AS"]).unwrap();
        let board = parse_cards(["AH", "7C", "4D", "9S", "2H"]).unwrap();
        assert_eq!(
            Err(InvalidHandError::WrongCardCount {
                expected: 2,
                found: 1
            }),
            EquityCalculator::new(&hole, &board).map(|_| ())
        );

        let hole = parse_cards(["AS", "KS"]).unwrap();
        let board = parse_cards(["AH", "7C", "4D", "9S"]).unwrap();
        assert_eq!(
            Err(InvalidHandError::WrongCardCount {
                expected: 5,
                found: 4
            }),
            EquityCalculator::new(&hole, &board).map(|_| ())
        );
    }

    #[test]
    fn test_rejects_duplicates() {
        let hole = parse_cards(["AS", "KS"]).unwrap();
        let board = parse_cards(["AH", "7C", "4D", "9S", "KS"]).unwrap();
        assert_eq!(
            Err(InvalidHandError::DuplicateCard(Card::new(
                Value::King,
                Suit::Spade
            ))),
            hand_strength(&hole, &board)
        );

        let hole = parse_cards(["AS", "AS"]).unwrap();
        let board = parse_cards(["AH", "7C", "4D", "9S", "KS"]).unwrap();
        assert!(hand_strength(&hole, &board).is_err());
    }

    #[test]
    fn test_percentages_empty() {
        let result = EquityResult {
            player_rank: Rank::HighCard(7),
            wins: 0,
            ties: 0,
            trials: 0,
            opponent_categories: BTreeMap::new(),
        };
        assert_eq!(0.0, result.win_percentage());
        assert_eq!(0.0, result.tie_percentage());
        assert_eq!(0.0, result.loss_percentage());
    }

    #[test]
    fn test_percentages() {
        let result = EquityResult {
            player_rank: Rank::OnePair(4),
            wins: 700,
            ties: 100,
            trials: 1000,
            opponent_categories: BTreeMap::new(),
        };
        assert_abs_diff_eq!(70.0, result.win_percentage(), epsilon = 1e-9);
        assert_abs_diff_eq!(10.0, result.tie_percentage(), epsilon = 1e-9);
        assert_abs_diff_eq!(20.0, result.loss_percentage(), epsilon = 1e-9);
        assert_eq!(200, result.losses());
    }

    #[test]
    fn test_losses_never_underflow() {
        let result = EquityResult {
            player_rank: Rank::Flush(12),
            wins: 600,
            ties: 500,
            trials: 990,
            opponent_categories: BTreeMap::new(),
        };
        assert_eq!(0, result.losses());

        let result = EquityResult {
            wins: 1000,
            ties: 0,
            ..result
        };
        assert_eq!(0, result.losses());
    }

    #[test_log::test]
    fn test_ace_high_straight_against_flush_draws() {
        // Broadway straight. Any two hearts make a flush or better, the
        // eight other ace king holdings split, and everything else loses.
        let result = calc(&["AS", "KD"], &["10H", "JH", "QH", "2C", "7D"]).calculate();
        assert_eq!(Rank::Straight(14), result.player_rank);
        assert_eq!(937, result.wins);
        assert_eq!(8, result.ties);
        assert_eq!(45, result.losses());
        assert_eq!(Some(&42), result.opponent_categories.get(&CoreRank::Flush));
        assert_eq!(
            Some(&3),
            result.opponent_categories.get(&CoreRank::StraightFlush)
        );
        assert_abs_diff_eq!(94.6464, result.win_percentage(), epsilon = 1e-4);
    }
}
