#![deny(warnings)]

use crate::codebook::CodeBook;
use crate::grammar::{Grammar, Production};
use crate::trees::{ParseTree, TreeBuilder};
use std::collections::HashMap;

/// Where the score of a chart cell came from: nothing yet, a word off
/// the diagonal, or the split that combined two sub-spans.
#[derive(Clone, Debug, PartialEq)]
pub enum BackPointer {
    Empty,
    Leaf(String),
    // (split point, left symbol, right symbol)
    Split(usize, usize, usize),
}

/// Triangular table holding, for every span `[i, j)` of the input and
/// every grammar symbol, the best probability found for that symbol
/// deriving the span, plus the backpointer that achieved it.
pub struct Chart {
    dim: usize, // input positions 0..=n
    symbols: usize,
    scores: Vec<f64>,
    backs: Vec<BackPointer>,
}

impl Chart {
    fn new(n: usize, symbols: usize) -> Chart {
        let cells = (n + 1) * (n + 1) * symbols;
        Chart {
            dim: n + 1,
            symbols,
            scores: vec![0.0; cells],
            backs: vec![BackPointer::Empty; cells],
        }
    }

    fn at(&self, i: usize, j: usize, symbol: usize) -> usize {
        (i * self.dim + j) * self.symbols + symbol
    }

    pub fn score(&self, i: usize, j: usize, symbol: usize) -> f64 {
        self.scores[self.at(i, j, symbol)]
    }

    pub fn back(&self, i: usize, j: usize, symbol: usize) -> &BackPointer {
        &self.backs[self.at(i, j, symbol)]
    }

    // Keep the maximum score per cell. Strict '>' means the first
    // candidate in fill order wins exact ties, callers must not rely
    // on which derivation that is.
    fn propose(&mut self, i: usize, j: usize, symbol: usize, score: f64, back: BackPointer) {
        let cell = self.at(i, j, symbol);
        if score > self.scores[cell] {
            self.scores[cell] = score;
            self.backs[cell] = back;
        }
    }
}

// Binary rule resolved to codebook indices so the fill loops do pure
// index arithmetic
struct DenseRule {
    head: usize,
    left: usize,
    right: usize,
    prob: f64,
}

/// A Cocke-Younger-Kasami parser returning the single most probable
/// parse under a grammar in Chomsky normal form.
///
/// Scores are plain probability products, they shrink with span length
/// and can underflow f64 for extremely long inputs.
pub struct CkyParser {
    pub grammar: Grammar,
    codebook: CodeBook,
    start: usize,
    // word -> (head, prob) entries for the diagonal
    lexicon: HashMap<String, Vec<(usize, f64)>>,
    binary: Vec<DenseRule>,
}

impl CkyParser {
    pub fn new(grammar: Grammar) -> CkyParser {
        let codebook = CodeBook::new(grammar.heads());
        let start = codebook
            .index_of(grammar.start_symbol())
            .expect("BUG: start symbol not registered");
        let mut lexicon: HashMap<String, Vec<(usize, f64)>> = HashMap::new();
        let mut binary = Vec::new();
        for production in &grammar.productions {
            match production {
                Production::Lexical { head, word, prob } => {
                    let head = codebook
                        .index_of(head)
                        .expect("BUG: unregistered symbol");
                    lexicon.entry(word.clone()).or_default().push((head, *prob));
                }
                Production::Binary {
                    head,
                    left,
                    right,
                    prob,
                } => binary.push(DenseRule {
                    head: codebook.index_of(head).expect("BUG: unregistered symbol"),
                    left: codebook.index_of(left).expect("BUG: unregistered symbol"),
                    right: codebook.index_of(right).expect("BUG: unregistered symbol"),
                    prob: *prob,
                }),
            }
        }
        CkyParser {
            grammar,
            codebook,
            start,
            lexicon,
            binary,
        }
    }

    /// Parse a token sequence into its most probable tree. Input the
    /// grammar cannot derive yields `ParseTree::Empty`.
    pub fn parse<T>(&self, tokens: T) -> ParseTree
    where
        T: Iterator,
        T::Item: AsRef<str>,
    {
        let words: Vec<String> = tokens.map(|w| w.as_ref().to_string()).collect();
        let chart = self.fill_chart(&words);
        TreeBuilder::new(&chart, &self.codebook).build(0, words.len(), self.start)
    }

    fn fill_chart(&self, words: &[String]) -> Chart {
        let mut chart = Chart::new(words.len(), self.codebook.len());
        for j in 1..=words.len() {
            let word = &words[j - 1];
            // Lexical entries land on the diagonal
            if let Some(entries) = self.lexicon.get(word.as_str()) {
                for &(head, prob) in entries {
                    chart.propose(j - 1, j, head, prob, BackPointer::Leaf(word.clone()));
                }
            }
            // Wider spans ending at j combine two adjacent sub-spans,
            // trying every split point against every binary rule
            for i in (0..j - 1).rev() {
                for k in i + 1..j {
                    for rule in &self.binary {
                        let left = chart.score(i, k, rule.left);
                        if left == 0.0 {
                            continue;
                        }
                        let right = chart.score(k, j, rule.right);
                        if right == 0.0 {
                            continue;
                        }
                        chart.propose(
                            i,
                            j,
                            rule.head,
                            rule.prob * left * right,
                            BackPointer::Split(k, rule.left, rule.right),
                        );
                    }
                }
            }
        }

        // debug Chart
        if cfg!(feature = "debug") {
            eprintln!("=== Chart ===");
            for i in 0..words.len() {
                for j in i + 1..=words.len() {
                    for symbol in 0..self.codebook.len() {
                        let score = chart.score(i, j, symbol);
                        if score > 0.0 {
                            eprintln!(
                                "({}, {}) {} p={} -- {:?}",
                                i,
                                j,
                                self.codebook.name_of(symbol),
                                score,
                                chart.back(i, j, symbol)
                            );
                        }
                    }
                }
            }
        }
        chart
    }
}
