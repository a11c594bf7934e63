//! Length predicates for post-filtering found words

use std::fmt;
use std::str::FromStr;

use num_traits::Num;

use crate::io::error::{HexwordError, invalid_parameter};

/// Predicate over an ordered quantity, usually word length
///
/// Only used to filter results; it never influences search pruning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchSpec<T> {
    /// Everything matches
    #[default]
    All,
    /// Matches values equal to the bound
    Equal(T),
    /// Matches values less than or equal to the bound
    AtMost(T),
    /// Matches values greater than or equal to the bound
    AtLeast(T),
}

impl<T: PartialOrd> MatchSpec<T> {
    /// Evaluate the predicate
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Equal(bound) => value == bound,
            Self::AtMost(bound) => value <= bound,
            Self::AtLeast(bound) => value >= bound,
        }
    }
}

impl MatchSpec<usize> {
    /// Whether the number of letters in `word` matches
    pub fn matches_word(&self, word: &str) -> bool {
        self.matches(&word.chars().count())
    }
}

impl<T: fmt::Display> fmt::Display for MatchSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Equal(bound) => write!(f, "={bound}"),
            Self::AtMost(bound) => write!(f, "<={bound}"),
            Self::AtLeast(bound) => write!(f, ">={bound}"),
        }
    }
}

/// Parses `all`, `N`, `=N`, `<=N` or `>=N`
impl<T: Num> FromStr for MatchSpec<T> {
    type Err = HexwordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.eq_ignore_ascii_case("all") || text == "*" {
            return Ok(Self::All);
        }

        let (constructor, bound): (fn(T) -> Self, &str) =
            if let Some(rest) = text.strip_prefix("<=") {
                (Self::AtMost, rest)
            } else if let Some(rest) = text.strip_prefix(">=") {
                (Self::AtLeast, rest)
            } else if let Some(rest) = text.strip_prefix('=') {
                (Self::Equal, rest)
            } else {
                (Self::Equal, text)
            };

        T::from_str_radix(bound.trim(), 10)
            .map(constructor)
            .map_err(|_unparsed| {
                invalid_parameter("length", &s, &"expected all, N, =N, <=N or >=N")
            })
    }
}
