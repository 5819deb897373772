#![deny(warnings)]

use std::collections::{HashMap, HashSet};
use std::fmt;

/// A production in Chomsky normal form. Lexical rules rewrite a symbol
/// into a single word, binary rules into exactly two symbols. No other
/// shape is expressible.
#[derive(Clone, PartialEq)]
pub enum Production {
    Lexical {
        head: String,
        word: String,
        prob: f64,
    },
    Binary {
        head: String,
        left: String,
        right: String,
        prob: f64,
    },
}

#[derive(Clone, Debug)]
pub struct Grammar {
    pub start: String,
    pub productions: Vec<Production>,
}

/// Accumulates weighted rules checking their shape and probabilities.
#[derive(Default)]
pub struct GrammarBuilder {
    productions: Vec<Production>,
    error: Option<String>,
}

impl Production {
    pub fn head(&self) -> &str {
        match self {
            Production::Lexical { head, .. } => head,
            Production::Binary { head, .. } => head,
        }
    }

    pub fn prob(&self) -> f64 {
        match self {
            Production::Lexical { prob, .. } => *prob,
            Production::Binary { prob, .. } => *prob,
        }
    }

    // Rules are identified by head and expansion, probability is ignored
    fn same_expansion(&self, other: &Production) -> bool {
        match (self, other) {
            (
                Production::Lexical { head, word, .. },
                Production::Lexical { head: h, word: w, .. },
            ) => head == h && word == w,
            (
                Production::Binary { head, left, right, .. },
                Production::Binary { head: h, left: l, right: r, .. },
            ) => head == h && left == l && right == r,
            _ => false,
        }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Production::Lexical { head, word, prob } => {
                write!(f, "{} -> '{}' [{}]", head, word, prob)
            }
            Production::Binary {
                head,
                left,
                right,
                prob,
            } => write!(f, "{} -> {} {} [{}]", head, left, right, prob),
        }
    }
}

impl fmt::Debug for Production {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Grammar {
    pub fn start_symbol(&self) -> &str {
        &self.start
    }

    /// Lexical productions whose word matches the queried token.
    pub fn lexical_rules<'a>(&'a self, token: &'a str) -> impl Iterator<Item = &'a Production> {
        self.productions.iter().filter(
            move |p| matches!(p, Production::Lexical { word, .. } if word == token),
        )
    }

    /// All binary productions.
    pub fn binary_rules(&self) -> impl Iterator<Item = &Production> {
        self.productions
            .iter()
            .filter(|p| matches!(p, Production::Binary { .. }))
    }

    /// Head symbols in the order their rules were added. Duplicates are
    /// kept, consumers dedup on their own terms.
    pub fn heads(&self) -> impl Iterator<Item = &str> {
        self.productions.iter().map(|p| p.head())
    }
}

impl GrammarBuilder {
    // The first error observed wins, later ones would only obscure it
    fn fail(&mut self, error: String) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    fn add_production(&mut self, production: Production) {
        let prob = production.prob();
        if !(prob > 0.0 && prob <= 1.0) {
            self.fail(format!("Bad Probability: {}", production));
            return;
        }
        // Check this rule is only added once, under any probability
        if self
            .productions
            .iter()
            .any(|p| p.same_expansion(&production))
        {
            self.fail(format!("Duplicate Rule: {}", production));
            return;
        }
        self.productions.push(production);
    }

    pub fn lexical(mut self, head: &str, word: &str, prob: f64) -> Self {
        self.add_lexical(head, word, prob);
        self
    }

    pub fn binary(mut self, head: &str, left: &str, right: &str, prob: f64) -> Self {
        self.add_binary(head, left, right, prob);
        self
    }

    // Non-chaining versions to be invoked in loops.

    pub fn add_lexical(&mut self, head: &str, word: &str, prob: f64) {
        self.add_production(Production::Lexical {
            head: head.to_string(),
            word: word.to_string(),
            prob,
        });
    }

    pub fn add_binary(&mut self, head: &str, left: &str, right: &str, prob: f64) {
        self.add_production(Production::Binary {
            head: head.to_string(),
            left: left.to_string(),
            right: right.to_string(),
            prob,
        });
    }

    pub fn into_grammar(mut self, start: impl Into<String>) -> Result<Grammar, String> {
        let start = start.into();
        // Every symbol referenced must head some rule, the chart only
        // tracks symbols that can derive something
        let heads: HashSet<String> = self.productions.iter().map(|p| p.head().to_string()).collect();
        if !heads.contains(start.as_str()) {
            self.fail(format!("Missing Symbol: {}", start));
        }
        let missing: Vec<String> = self
            .productions
            .iter()
            .filter_map(|p| match p {
                Production::Binary { left, right, .. } => Some([left, right]),
                _ => None,
            })
            .flatten()
            .filter(|child| !heads.contains(child.as_str()))
            .cloned()
            .collect();
        for child in missing {
            self.fail(format!("Missing Symbol: {}", child));
        }
        // Alternatives for a symbol form a distribution
        let mut mass: HashMap<String, f64> = HashMap::new();
        for production in &self.productions {
            *mass.entry(production.head().to_string()).or_insert(0.0) += production.prob();
        }
        for (head, total) in mass {
            if (total - 1.0).abs() > 0.01 {
                self.fail(format!("Rule probabilities for {} sum to {}", head, total));
            }
        }
        match self.error {
            Some(e) => Err(e),
            None => Ok(Grammar {
                start,
                productions: self.productions,
            }),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::GrammarBuilder;

    #[test]
    fn build_grammar() {
        let g = GrammarBuilder::default()
            .lexical("B", "left", 1.0)
            .lexical("C", "right", 1.0)
            .binary("A", "B", "C", 1.0)
            .into_grammar("A");
        assert!(g.is_ok());
        let g = g.unwrap();
        assert_eq!(g.start_symbol(), "A");
        assert_eq!(g.binary_rules().count(), 1);
        assert_eq!(g.lexical_rules("left").count(), 1);
        assert_eq!(g.lexical_rules("center").count(), 0);
    }

    #[test]
    fn dup_rule() {
        let g = GrammarBuilder::default()
            .lexical("B", "left", 0.5)
            .lexical("B", "left", 0.5)
            .lexical("C", "right", 1.0)
            .binary("A", "B", "C", 1.0)
            .into_grammar("A");
        assert_eq!(g.unwrap_err(), "Duplicate Rule: B -> 'left' [0.5]");
    }

    #[test]
    fn missing_symbol() {
        let g = GrammarBuilder::default()
            .lexical("B", "left", 1.0)
            .lexical("C", "right", 1.0)
            .binary("A", "B", "C", 1.0)
            .into_grammar("X");
        assert_eq!(g.unwrap_err(), "Missing Symbol: X");

        let g = GrammarBuilder::default()
            .lexical("B", "left", 1.0)
            .binary("A", "B", "C", 1.0)
            .into_grammar("A");
        assert_eq!(g.unwrap_err(), "Missing Symbol: C");
    }

    #[test]
    fn bad_probability() {
        let g = GrammarBuilder::default()
            .lexical("B", "left", 1.5)
            .into_grammar("B");
        assert_eq!(g.unwrap_err(), "Bad Probability: B -> 'left' [1.5]");

        let g = GrammarBuilder::default()
            .lexical("B", "left", 0.0)
            .into_grammar("B");
        assert_eq!(g.unwrap_err(), "Bad Probability: B -> 'left' [0]");
    }

    #[test]
    fn unbalanced_mass() {
        let g = GrammarBuilder::default()
            .lexical("B", "left", 0.5)
            .lexical("C", "right", 1.0)
            .binary("A", "B", "C", 1.0)
            .into_grammar("A");
        assert_eq!(g.unwrap_err(), "Rule probabilities for B sum to 0.5");
    }

    #[test]
    fn mass_tolerance() {
        // rounding noise in the sum must not reject the grammar
        let g = GrammarBuilder::default()
            .lexical("B", "a", 0.4)
            .lexical("B", "b", 0.3)
            .lexical("B", "c", 0.3)
            .into_grammar("B");
        assert!(g.is_ok());
    }
}
