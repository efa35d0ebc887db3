//! Builds a word index: one [`Word`] per distinct word in a text, held in a
//! [`Tree`], plus the listings that can be produced from it afterwards.
//!
//! A word is a maximal run of ASCII letters between separators, where a
//! separator is anything other than a letter, digit or `_`. Runs that contain
//! digits or underscores are thrown away whole rather than trimmed, so
//! `"abc123 def"` only indexes `def`.
//!
//! Lines are numbered from 1 and end at `\r\n`, `\n`, a lone `\r` or NEL
//! (`U+0085`). Files are decoded as Latin-1, so every byte is one character
//! and no input is rejected for its encoding.
//!
//! # Examples
//!
//! ```
//! use bst_index::index::{self, Indexer};
//! use bst_index::IgnoreCase;
//!
//! let tree = Indexer::new(IgnoreCase)
//!     .lowercase(true)
//!     .build_from_text("Cat cat CAT");
//!
//! let words: Vec<_> = tree.iter().map(ToString::to_string).collect();
//! assert_eq!(words, ["cat 3 [1]"]);
//!
//! let by_frequency = index::sort_by_frequency(&tree);
//! assert_eq!(by_frequency[0].frequency(), 3);
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::order::{AlphaFreq, Compare, Frequency, Natural};
use crate::tree::Tree;
use crate::word::Word;

static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("valid regex"));

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+$").expect("valid regex"));

static LINE_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|[\r\n\x{85}]").expect("valid regex"));

/// Whether `token` is something the index would store: one or more ASCII
/// letters and nothing else.
pub fn is_word(token: &str) -> bool {
    WORD_RE.is_match(token)
}

/// Splits a line into the words the index would store, in order.
///
/// ```
/// use bst_index::index::tokenize;
///
/// let words: Vec<_> = tokenize("It's 9am -- time_to go!").collect();
/// assert_eq!(words, ["It", "s", "go"]);
/// ```
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    SEPARATOR_RE.split(line).filter(|token| is_word(token))
}

/// Builds word indexes ordered by `C`.
///
/// Case folding is a separate switch from the strategy. Pair
/// [`IgnoreCase`][crate::IgnoreCase] with `lowercase(true)` so the stored
/// text is the folded form; the strategy alone only decides which spellings
/// count as the same word.
#[derive(Debug, Clone)]
pub struct Indexer<C = Natural> {
    order: C,
    lowercase: bool,
}

impl Default for Indexer {
    fn default() -> Self {
        Self::natural()
    }
}

impl Indexer {
    /// An indexer using the natural order of the word text.
    pub fn natural() -> Self {
        Self::new(Natural)
    }
}

impl<C> Indexer<C> {
    /// An indexer whose trees are ordered by `order`.
    pub fn new(order: C) -> Self {
        Self {
            order,
            lowercase: false,
        }
    }

    /// Lowercases every token before it is looked up or stored.
    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// The strategy new trees get.
    pub fn order(&self) -> &C {
        &self.order
    }
}

impl<C> Indexer<C>
where
    C: Compare<Word> + Clone,
{
    /// Indexes in-memory text, split into lines at any line terminator.
    pub fn build_from_text(&self, text: &str) -> Tree<Word, C> {
        self.build_from_lines(LINE_END_RE.split(text))
    }

    /// Indexes a sequence of lines. The first line is line 1.
    pub fn build_from_lines<I, S>(&self, lines: I) -> Tree<Word, C>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Tree::with_order(self.order.clone());
        for (i, line) in lines.into_iter().enumerate() {
            self.ingest_line(&mut tree, i + 1, line.as_ref());
        }
        debug!(words = tree.size(), "built index");
        tree
    }

    /// Indexes everything `reader` yields, decoding it as Latin-1.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if reading fails part way. Whatever was indexed before
    /// the failure is lost; use [`build_from_path`][Self::build_from_path]
    /// to keep it.
    pub fn build_from_reader<R: BufRead>(&self, reader: R) -> Result<Tree<Word, C>> {
        let mut tree = Tree::with_order(self.order.clone());
        self.ingest_reader(&mut tree, reader)?;
        debug!(words = tree.size(), "built index");
        Ok(tree)
    }

    /// Indexes the file at `path`, failing if it can't be opened or read.
    ///
    /// # Errors
    ///
    /// [`Error::Input`] naming the file.
    pub fn try_build_from_path(&self, path: impl AsRef<Path>) -> Result<Tree<Word, C>> {
        let path = path.as_ref();
        let input = |source: io::Error| Error::Input {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(input)?;
        let mut tree = Tree::with_order(self.order.clone());
        self.ingest_reader(&mut tree, BufReader::new(file)).map_err(input)?;
        debug!(path = %path.display(), words = tree.size(), "built index");
        Ok(tree)
    }

    /// Indexes the file at `path`, never failing.
    ///
    /// A file that can't be opened gives an empty tree. A read error part
    /// way through keeps the words indexed up to that point. Either way the
    /// problem is logged as a warning.
    pub fn build_from_path(&self, path: impl AsRef<Path>) -> Tree<Word, C> {
        let path = path.as_ref();
        let mut tree = Tree::with_order(self.order.clone());

        let file = match File::open(path) {
            Ok(file) => file,
            Err(error) => {
                warn!(path = %path.display(), %error, "cannot open input, index is empty");
                return tree;
            }
        };
        if let Err(error) = self.ingest_reader(&mut tree, BufReader::new(file)) {
            warn!(
                path = %path.display(),
                %error,
                words = tree.size(),
                "cannot finish reading input, index is partial"
            );
        }
        tree
    }

    /// Builds a tree ordered by this indexer's strategy out of records that
    /// were already counted, e.g. the contents of another tree. Nothing is
    /// re-tokenized and each record keeps its frequency and lines.
    ///
    /// Records that compare equal to one already inserted are dropped, as
    /// with any insert. Under [`Frequency`] that means one record per
    /// distinct frequency.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_index::index::Indexer;
    /// use bst_index::AlphaFreq;
    ///
    /// let natural = Indexer::natural().build_from_text("b a\nb");
    /// let rebuilt = Indexer::new(AlphaFreq).rebuild(natural);
    ///
    /// let words: Vec<_> = rebuilt.iter().map(ToString::to_string).collect();
    /// assert_eq!(words, ["a 1 [1]", "b 2 [1, 2]"]);
    /// ```
    pub fn rebuild<I>(&self, records: I) -> Tree<Word, C>
    where
        I: IntoIterator<Item = Word>,
    {
        let mut tree = Tree::with_order(self.order.clone());
        let mut dropped = 0usize;
        for word in records {
            if !tree.insert(word) {
                dropped += 1;
            }
        }
        debug!(words = tree.size(), dropped, "rebuilt index");
        tree
    }

    fn ingest_reader<R>(&self, tree: &mut Tree<Word, C>, mut reader: R) -> io::Result<()>
    where
        R: BufRead,
    {
        let mut buf = Vec::new();
        let mut line_no = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(());
            }
            // A chunk ends at the first `\n` but may hold lone `\r` or NEL
            // terminators before it.
            let chunk = latin1(&buf);
            let body = chunk.strip_suffix('\n').unwrap_or(&chunk);
            let body = body.strip_suffix('\r').unwrap_or(body);
            for line in LINE_END_RE.split(body) {
                line_no += 1;
                self.ingest_line(tree, line_no, line);
            }
        }
    }

    fn ingest_line(&self, tree: &mut Tree<Word, C>, line_no: usize, line: &str) {
        for token in tokenize(line) {
            let word = if self.lowercase {
                Word::at_line(token.to_lowercase(), line_no)
            } else {
                Word::at_line(token, line_no)
            };

            match tree.search_mut(&word) {
                Some(existing) => existing.record(line_no),
                None => {
                    tree.insert(word);
                }
            }
        }
    }
}

/// One `char` per byte.
fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Every word in `tree`, sorted by text and then by ascending frequency.
pub fn sort_by_alpha<C>(tree: &Tree<Word, C>) -> Vec<&Word> {
    sort_with(tree, &AlphaFreq)
}

/// Every word in `tree`, most frequent first. Words with the same frequency
/// keep the order the tree iterates them in.
pub fn sort_by_frequency<C>(tree: &Tree<Word, C>) -> Vec<&Word> {
    sort_with(tree, &Frequency)
}

/// The words sharing the highest frequency in `tree`, in the order
/// [`sort_by_frequency`] puts them. Empty for an empty tree.
pub fn top_frequency<C>(tree: &Tree<Word, C>) -> Vec<&Word> {
    let sorted = sort_by_frequency(tree);
    let top = match sorted.first() {
        Some(word) => word.frequency(),
        None => return Vec::new(),
    };
    sorted
        .into_iter()
        .take_while(|word| word.frequency() == top)
        .collect()
}

/// Every word in `tree`, stable sorted by `order`.
pub fn sort_with<'a, C, S>(tree: &'a Tree<Word, C>, order: &S) -> Vec<&'a Word>
where
    S: Compare<Word> + ?Sized,
{
    let mut words: Vec<&Word> = tree.iter().collect();
    words.sort_by(|a, b| order.compare(a, b));
    words
}
