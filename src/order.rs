//! Ordering strategies. A strategy decides where a key goes in a [`Tree`] and
//! can also be handed to a sort.
//!
//! [`Natural`] works for any `T: Ord`. The remaining strategies only make
//! sense for [`Word`] records. [`WordOrder`] bundles those into one enum for
//! callers that pick a strategy at runtime, e.g. from a config string.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//! use bst_index::{Compare, IgnoreCase, Natural, Word};
//!
//! let upper = Word::new("Cat");
//! let lower = Word::new("cat");
//!
//! assert_eq!(Natural.compare(&upper, &lower), Ordering::Less);
//! assert_eq!(IgnoreCase.compare(&upper, &lower), Ordering::Equal);
//! ```
//!
//! [`Tree`]: crate::Tree

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::word::Word;

/// A total order over `T`. Implementations must be pure: the same two
/// arguments always compare the same way.
pub trait Compare<T: ?Sized> {
    /// Compares `a` to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The type's own [`Ord`] implementation. For [`Word`] this is the
/// lexicographic order of the text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<T> Compare<T> for Natural
where
    T: Ord + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Lexicographic order of the word text with case folded away.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IgnoreCase;

impl Compare<Word> for IgnoreCase {
    fn compare(&self, a: &Word, b: &Word) -> Ordering {
        let a = a.text().chars().flat_map(char::to_lowercase);
        let b = b.text().chars().flat_map(char::to_lowercase);
        a.cmp(b)
    }
}

/// Word text ascending, then frequency ascending for equal text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AlphaFreq;

impl Compare<Word> for AlphaFreq {
    fn compare(&self, a: &Word, b: &Word) -> Ordering {
        a.text()
            .cmp(b.text())
            .then_with(|| a.frequency().cmp(&b.frequency()))
    }
}

/// Frequency descending. Words with the same frequency compare equal, so
/// this is meant for stable sorts rather than as a tree key order: a tree
/// ordered this way keeps only the first word seen for each frequency.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Frequency;

impl Compare<Word> for Frequency {
    fn compare(&self, a: &Word, b: &Word) -> Ordering {
        b.frequency().cmp(&a.frequency())
    }
}

/// One of the [`Word`] strategies, chosen at runtime.
///
/// Parses from `"natural"`, `"ignore-case"`, `"alpha-freq"` and
/// `"frequency"` (case-insensitive, `_` accepted in place of `-`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WordOrder {
    /// See [`Natural`].
    #[default]
    Natural,
    /// See [`IgnoreCase`].
    IgnoreCase,
    /// See [`AlphaFreq`].
    AlphaFreq,
    /// See [`Frequency`].
    Frequency,
}

impl Compare<Word> for WordOrder {
    fn compare(&self, a: &Word, b: &Word) -> Ordering {
        match self {
            Self::Natural => Natural.compare(a, b),
            Self::IgnoreCase => IgnoreCase.compare(a, b),
            Self::AlphaFreq => AlphaFreq.compare(a, b),
            Self::Frequency => Frequency.compare(a, b),
        }
    }
}

impl FromStr for WordOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "natural" => Ok(Self::Natural),
            "ignore-case" | "ignorecase" => Ok(Self::IgnoreCase),
            "alpha-freq" | "alphafreq" => Ok(Self::AlphaFreq),
            "frequency" => Ok(Self::Frequency),
            _ => Err(Error::UnknownOrder(s.to_string())),
        }
    }
}

impl fmt::Display for WordOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Natural => "natural",
            Self::IgnoreCase => "ignore-case",
            Self::AlphaFreq => "alpha-freq",
            Self::Frequency => "frequency",
        };
        f.write_str(name)
    }
}
