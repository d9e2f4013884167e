use crate::core::Card;

/// Number of ways to choose `k` items out of `n` without caring about order.
///
/// ```
/// use hand_strength::core::binomial;
///
/// assert_eq!(21, binomial(7, 5));
/// assert_eq!(990, binomial(45, 2));
/// assert_eq!(0, binomial(2, 3));
/// ```
///
/// Counts too large for a `u64` saturate at `u64::MAX`.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // Every partial result is itself a binomial so the division is exact.
        acc = match acc.checked_mul((n - i) as u128) {
            Some(product) => product / (i as u128 + 1),
            None => return u64::MAX,
        };
        if acc > u64::MAX as u128 {
            return u64::MAX;
        }
    }
    acc as u64
}

/// Walk every `k` sized combination of the indices `0..n`.
///
/// Each combination is strictly increasing and the combinations come out
/// in lexicographic order, starting at `[0, 1, .., k - 1]` and ending at
/// `[n - k, .., n - 1]`. There are exactly `binomial(n, k)` of them.
///
/// This can be used either as an `Iterator` that hands out a fresh `Vec`
/// per combination, or as a cursor via `advance` and `indices` when
/// allocating for every combination is too slow.
#[derive(Debug, Clone)]
pub struct Combinations {
    /// Size of the collection being picked from.
    n: usize,
    /// Current combination.
    idx: Vec<usize>,
    /// Has `idx` been handed out yet?
    started: bool,
    /// Set once the last combination has been passed.
    done: bool,
    /// How many combinations haven't been handed out yet. Only used for
    /// `size_hint`.
    remaining: u64,
}

impl Combinations {
    /// Create a new enumerator over `k` of `n` indices.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            idx: (0..k).collect(),
            started: false,
            done: k > n,
            remaining: binomial(n, k),
        }
    }

    /// The combination the cursor is on.
    ///
    /// Only meaningful after `advance` has returned true.
    pub fn indices(&self) -> &[usize] {
        &self.idx
    }

    /// Move to the next combination. Returns false once they are all used
    /// up, and keeps returning false after that.
    pub fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        if !self.started {
            self.started = true;
            self.remaining = self.remaining.saturating_sub(1);
            return true;
        }

        let k = self.idx.len();
        // Rightmost position that still has room to move up without running
        // into the ones after it.
        let Some(pos) = (0..k).rev().find(|&i| self.idx[i] < self.n - k + i) else {
            self.done = true;
            self.remaining = 0;
            return false;
        };

        self.idx[pos] += 1;
        for i in pos + 1..k {
            self.idx[i] = self.idx[i - 1] + 1;
        }
        self.remaining = self.remaining.saturating_sub(1);
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.advance() {
            Some(self.idx.clone())
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Combinations {}

/// Every `k` sized combination of the indices `0..n`.
///
/// ```
/// use hand_strength::core::combinations;
///
/// let all: Vec<Vec<usize>> = combinations(4, 2).collect();
/// assert_eq!(
///     vec![
///         vec![0, 1],
///         vec![0, 2],
///         vec![0, 3],
///         vec![1, 2],
///         vec![1, 3],
///         vec![2, 3]
///     ],
///     all
/// );
/// ```
pub fn combinations(n: usize, k: usize) -> Combinations {
    Combinations::new(n, k)
}

/// Given some cards create sets of possible groups of cards.
///
/// The groups come out in the same order as `Combinations` and each one is
/// a copy of the cards it refers to, in their original order.
#[derive(Debug)]
pub struct CardIter<'a> {
    /// All the possible cards that can be dealt
    possible_cards: &'a [Card],

    /// The index combinations being materialized.
    combos: Combinations,
}

impl CardIter<'_> {
    /// Create a new `CardIter` from a slice of cards.
    /// `num_cards` represents how many cards should be in the resulting vector.
    pub fn new(possible_cards: &[Card], num_cards: usize) -> CardIter<'_> {
        CardIter {
            possible_cards,
            combos: Combinations::new(possible_cards.len(), num_cards),
        }
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if !self.combos.advance() {
            return None;
        }
        Some(
            self.combos
                .indices()
                .iter()
                .map(|&i| self.possible_cards[i])
                .collect(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.combos.size_hint()
    }
}

impl ExactSizeIterator for CardIter<'_> {}
