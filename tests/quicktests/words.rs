use std::cmp::Ordering;
use std::collections::BTreeSet;

use bst_index::index::{self, Indexer};
use bst_index::{AlphaFreq, Compare, IgnoreCase, Natural, Tree, Word, WordOrder};
use quickcheck::{quickcheck, Arbitrary, Gen};

/// A short run of ASCII letters, so that collisions (including ones that only
/// differ in case) actually happen.
#[derive(Clone, Debug)]
struct Token(String);

impl Arbitrary for Token {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 3 + 1;
        let text = (0..len)
            .map(|_| *g.choose(&['a', 'b', 'c', 'A', 'B']).unwrap())
            .collect();
        Token(text)
    }
}

/// A line of tokens and junk separators.
#[derive(Clone, Debug)]
struct Line(String);

impl Arbitrary for Line {
    fn arbitrary(g: &mut Gen) -> Self {
        let tokens: Vec<Token> = Arbitrary::arbitrary(g);
        let mut line = String::new();
        for Token(token) in tokens {
            line.push_str(&token);
            line.push_str(g.choose(&[" ", ", ", "--", " 42 ", "\t"]).unwrap());
        }
        Line(line)
    }
}

fn words<C: Compare<Word>>(tokens: &[Token], order: C) -> Tree<Word, C> {
    let mut tree = Tree::with_order(order);
    for Token(token) in tokens {
        tree.insert(Word::new(token.as_str()));
    }
    tree
}

/// In-order traversal never goes backwards under the tree's own strategy.
fn non_decreasing<C: Compare<Word>>(tree: &Tree<Word, C>) -> bool {
    let values: Vec<_> = tree.iter().collect();
    values
        .windows(2)
        .all(|w| tree.order().compare(w[0], w[1]) != Ordering::Greater)
}

quickcheck! {
    fn in_order_natural(tokens: Vec<Token>) -> bool {
        non_decreasing(&words(&tokens, Natural))
    }

    fn in_order_ignore_case(tokens: Vec<Token>) -> bool {
        non_decreasing(&words(&tokens, IgnoreCase))
    }

    fn in_order_alpha_freq(tokens: Vec<Token>) -> bool {
        non_decreasing(&words(&tokens, AlphaFreq))
    }

    fn iterator_yields_size_values(tokens: Vec<Token>) -> bool {
        let tree = words(&tokens, WordOrder::IgnoreCase);
        let mut iter = tree.iter();
        let mut count = 0;
        while iter.has_next() {
            iter.try_next().unwrap();
            count += 1;
        }

        count == tree.size() && iter.try_next().is_err()
    }

    fn ignore_case_keeps_one_per_folded_spelling(tokens: Vec<Token>) -> bool {
        let tree = words(&tokens, IgnoreCase);
        let folded: BTreeSet<_> = tokens.iter().map(|Token(t)| t.to_lowercase()).collect();

        tree.size() == folded.len()
    }

    fn frequencies_add_up(lines: Vec<Line>) -> bool {
        let text: Vec<_> = lines.iter().map(|Line(l)| l.as_str()).collect();
        let tree = Indexer::natural().build_from_lines(&text);
        let expected: usize = text.iter().map(|l| index::tokenize(l).count()).sum();

        tree.iter().map(Word::frequency).sum::<usize>() == expected
    }

    fn every_recorded_line_contains_the_word(lines: Vec<Line>) -> bool {
        let text: Vec<_> = lines.iter().map(|Line(l)| l.as_str()).collect();
        let tree = Indexer::natural().build_from_lines(&text);

        tree.iter().all(|word| {
            word.lines()
                .iter()
                .all(|&line| index::tokenize(text[line - 1]).any(|t| t == word.text()))
        })
    }

    fn sort_by_frequency_is_descending(lines: Vec<Line>) -> bool {
        let text: Vec<_> = lines.iter().map(|Line(l)| l.as_str()).collect();
        let tree = Indexer::natural().build_from_lines(&text);
        let sorted = index::sort_by_frequency(&tree);

        sorted.len() == tree.size()
            && sorted.windows(2).all(|w| w[0].frequency() >= w[1].frequency())
    }

    fn rebuild_preserves_payload(lines: Vec<Line>) -> bool {
        let text: Vec<_> = lines.iter().map(|Line(l)| l.as_str()).collect();
        let natural = Indexer::natural().build_from_lines(&text);
        let before: Vec<String> = natural.iter().map(ToString::to_string).collect();

        let rebuilt = Indexer::new(AlphaFreq).rebuild(natural);
        let after: Vec<String> = index::sort_by_alpha(&rebuilt)
            .into_iter()
            .map(ToString::to_string)
            .collect();

        before == after
    }
}
