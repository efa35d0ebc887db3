//! The record stored in a word index.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// A distinct word, how many times it was seen and the lines it was seen on.
///
/// Equality and [`Ord`] only look at the text. Frequency and lines are
/// payload that gets updated in place after the word is found in a tree.
///
/// # Examples
///
/// ```
/// use bst_index::Word;
///
/// let mut word = Word::at_line("sat", 1);
/// word.record(2);
/// word.record(2);
///
/// assert_eq!(word.frequency(), 3);
/// assert_eq!(word.to_string(), "sat 3 [1, 2]");
/// ```
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    frequency: usize,
    lines: BTreeSet<usize>,
}

impl Word {
    /// A word seen once, on no particular line yet.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            frequency: 1,
            lines: BTreeSet::new(),
        }
    }

    /// A word seen once, on `line`.
    pub fn at_line(text: impl Into<String>, line: usize) -> Self {
        let mut word = Self::new(text);
        word.lines.insert(line);
        word
    }

    /// The word itself.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// How many times the word was seen.
    pub fn frequency(&self) -> usize {
        self.frequency
    }

    /// Overwrites the frequency.
    pub fn set_frequency(&mut self, frequency: usize) {
        self.frequency = frequency;
    }

    /// The (1-based) lines the word appeared on, ascending.
    pub fn lines(&self) -> &BTreeSet<usize> {
        &self.lines
    }

    /// Adds `line` to the line set. Returns `false` if it was already there.
    pub fn add_line(&mut self, line: usize) -> bool {
        self.lines.insert(line)
    }

    /// Records another sighting on `line`: bumps the frequency and adds the
    /// line.
    pub fn record(&mut self, line: usize) {
        self.frequency += 1;
        self.lines.insert(line);
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [", self.text, self.frequency)?;
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", line)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_word_has_frequency_one() {
        let word = Word::new("cat");
        assert_eq!(word.text(), "cat");
        assert_eq!(word.frequency(), 1);
        assert!(word.lines().is_empty());
    }

    #[test]
    fn record_counts_every_sighting_but_each_line_once() {
        let mut word = Word::at_line("the", 1);
        word.record(1);
        word.record(4);

        assert_eq!(word.frequency(), 3);
        assert_eq!(word.lines().iter().copied().collect::<Vec<_>>(), [1, 4]);
    }

    #[test]
    fn equality_ignores_payload() {
        let mut busy = Word::at_line("cat", 3);
        busy.set_frequency(10);

        assert_eq!(busy, Word::new("cat"));
        assert_ne!(Word::new("cat"), Word::new("Cat"));
        assert!(Word::new("Cat") < Word::new("cat"));
    }

    #[test]
    fn display() {
        assert_eq!(Word::new("lonely").to_string(), "lonely 1 []");

        let mut word = Word::at_line("dog", 7);
        word.add_line(2);
        assert_eq!(word.to_string(), "dog 1 [2, 7]");
    }
}
