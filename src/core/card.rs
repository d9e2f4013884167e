use std::fmt;
use std::str::FromStr;

use super::CardParseError;

/// Card rank or value.
/// This is basically the face value - 2
/// is the lowest and Ace the highest.
///
/// The discriminant is the numeric value used for tie breaks, so
/// `Value::Jack as u8 == 11` and `Value::Ace as u8 == 14`. Aces only
/// play high.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Value {
    /// 2
    Two = 2,
    /// 3
    Three = 3,
    /// 4
    Four = 4,
    /// 5
    Five = 5,
    /// 6
    Six = 6,
    /// 7
    Seven = 7,
    /// 8
    Eight = 8,
    /// 9
    Nine = 9,
    /// 10
    Ten = 10,
    /// Jack
    Jack = 11,
    /// Queen
    Queen = 12,
    /// King
    King = 13,
    /// Ace
    Ace = 14,
}

/// Every value in ascending order.
pub const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// Given a numeric value in `2..=14` return the matching `Value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hand_strength::core::Value;
    ///
    /// assert_eq!(Some(Value::Queen), Value::from_u8(12));
    /// assert_eq!(None, Value::from_u8(1));
    /// ```
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            2..=14 => Some(VALUES[(v - 2) as usize]),
            _ => None,
        }
    }

    /// Given a single character return the matching `Value`.
    ///
    /// Ten is written as `10` so it has no single character form and
    /// `'1'` is rejected here.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::Ace),
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'J' => Some(Self::Jack),
            '2'..='9' => c.to_digit(10).and_then(|d| Self::from_u8(d as u8)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Jack => write!(f, "J"),
            Value::Queen => write!(f, "Q"),
            Value::King => write!(f, "K"),
            Value::Ace => write!(f, "A"),
            v => write!(f, "{}", *v as u8),
        }
    }
}

impl FromStr for Value {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "10" {
            return Ok(Value::Ten);
        }
        let mut chars = s.chars();
        let c = chars.next().ok_or(CardParseError::EmptyToken)?;
        let value = Value::from_char(c).ok_or(CardParseError::UnexpectedValueChar)?;
        if chars.next().is_some() {
            return Err(CardParseError::UnparsedCharsRemaining);
        }
        Ok(value)
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
///
/// The declaration order is the suit-major order of a fresh deck.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Hearts
    Heart,
    /// Spades
    Spade,
    /// Clubs
    Club,
    /// Diamonds
    Diamond,
}

/// All the suits in deck order.
pub const SUITS: [Suit; 4] = [Suit::Heart, Suit::Spade, Suit::Club, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    /// This Suits on a single ascii char.
    ///
    /// ```
    /// use hand_strength::core::Suit;
    ///
    /// assert_eq!(Some(Suit::Spade), Suit::from_char('S'));
    /// assert_eq!(Some(Suit::Diamond), Suit::from_char('d'));
    /// assert_eq!(None, Suit::from_char('x'));
    /// ```
    pub fn from_char(s: char) -> Option<Self> {
        match s {
            'H' | 'h' => Some(Self::Heart),
            'S' | 's' => Some(Self::Spade),
            'C' | 'c' => Some(Self::Club),
            'D' | 'd' => Some(Self::Diamond),
            _ => None,
        }
    }

    /// This is the inverse of `from_char`.
    pub fn to_char(self) -> char {
        match self {
            Self::Heart => 'H',
            Self::Spade => 'S',
            Self::Club => 'C',
            Self::Diamond => 'D',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

/// Parse a single token like `"10H"` or `"AS"`.
///
/// The value comes first, then exactly one suit character. Anything
/// left over is an error.
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, rest) = match s.strip_prefix("10") {
            Some(rest) => (Value::Ten, rest),
            None => {
                let mut chars = s.chars();
                let c = chars.next().ok_or(CardParseError::EmptyToken)?;
                let value = Value::from_char(c).ok_or(CardParseError::UnexpectedValueChar)?;
                (value, chars.as_str())
            }
        };

        let mut chars = rest.chars();
        let suit = chars
            .next()
            .ok_or(CardParseError::MissingSuit)
            .and_then(|c| Suit::from_char(c).ok_or(CardParseError::UnexpectedSuitChar))?;

        if chars.next().is_some() {
            return Err(CardParseError::UnparsedCharsRemaining);
        }
        Ok(Card::new(value, suit))
    }
}

/// Parse every token into a `Card`, stopping at the first bad one.
///
/// ```
/// use hand_strength::core::{parse_cards, Card, Suit, Value};
///
/// let cards = parse_cards(["10H", "AS"]).unwrap();
/// assert_eq!(
///     vec![
///         Card::new(Value::Ten, Suit::Heart),
///         Card::new(Value::Ace, Suit::Spade)
///     ],
///     cards
/// );
/// assert!(parse_cards(["1H"]).is_err());
/// ```
pub fn parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, CardParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens.into_iter().map(|t| t.as_ref().parse()).collect()
}
