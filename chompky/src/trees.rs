#![deny(warnings)]

use crate::codebook::CodeBook;
use crate::parser::{BackPointer, Chart};

/// Most probable parse of a token sequence. `Empty` is the outcome for
/// input the grammar doesn't license, not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseTree {
    Empty,
    // ("C", "right")
    Leaf(String, String),
    // ("A", [(B left) (C right)])
    Node(String, Vec<ParseTree>),
}

impl ParseTree {
    /// Leaf words left to right.
    pub fn leaves(&self) -> Vec<&str> {
        match self {
            ParseTree::Empty => Vec::new(),
            ParseTree::Leaf(_, word) => vec![word.as_str()],
            ParseTree::Node(_, children) => {
                children.iter().flat_map(|child| child.leaves()).collect()
            }
        }
    }

    /// Single-line bracketed rendering: (A (B left) (C right))
    pub fn bracketed(&self) -> String {
        match self {
            ParseTree::Empty => "()".to_string(),
            ParseTree::Leaf(head, word) => format!("({} {})", head, word),
            ParseTree::Node(head, children) => {
                let children = children
                    .iter()
                    .map(|child| child.bracketed())
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("({} {})", head, children)
            }
        }
    }

    pub fn print(&self) -> String {
        let mut out = String::new();
        self.print_helper("", &mut out);
        out
    }

    fn print_helper(&self, level: &str, out: &mut String) {
        match self {
            ParseTree::Empty => *out += &format!("{}`-- ()\n", level),
            ParseTree::Leaf(head, word) => {
                *out += &format!("{}`-- {} ==> {:?}\n", level, head, word)
            }
            ParseTree::Node(head, children) => {
                *out += &format!("{}`-- {}\n", level, head);
                if let Some((last, rest)) = children.split_last() {
                    let l = format!("{}  |", level);
                    for child in rest {
                        child.print_helper(&l, out);
                    }
                    let l = format!("{}   ", level);
                    last.print_helper(&l, out);
                }
            }
        }
    }
}

/// Rebuilds the most probable parse walking chart backpointers from the
/// top span down to the leaves.
pub struct TreeBuilder<'a> {
    chart: &'a Chart,
    codebook: &'a CodeBook,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(chart: &'a Chart, codebook: &'a CodeBook) -> TreeBuilder<'a> {
        TreeBuilder { chart, codebook }
    }

    /// Materialize the tree for `symbol` spanning `[i, j)`. An empty
    /// cell means the grammar doesn't derive the span.
    pub fn build(&self, i: usize, j: usize, symbol: usize) -> ParseTree {
        match self.chart.back(i, j, symbol) {
            BackPointer::Empty => ParseTree::Empty,
            BackPointer::Leaf(word) => {
                ParseTree::Leaf(self.codebook.name_of(symbol).to_string(), word.clone())
            }
            BackPointer::Split(k, left, right) => {
                let (k, left, right) = (*k, *left, *right);
                assert!(i < k && k < j, "BUG: split {} outside span ({}, {})", k, i, j);
                let left = self.build(i, k, left);
                let right = self.build(k, j, right);
                // A recorded split must have derivable children
                assert!(
                    left != ParseTree::Empty && right != ParseTree::Empty,
                    "BUG: dangling backpointer under ({}, {})",
                    i,
                    j
                );
                ParseTree::Node(
                    self.codebook.name_of(symbol).to_string(),
                    vec![left, right],
                )
            }
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ParseTree;

    fn sample() -> ParseTree {
        ParseTree::Node(
            "A".to_string(),
            vec![
                ParseTree::Leaf("B".to_string(), "left".to_string()),
                ParseTree::Leaf("C".to_string(), "right".to_string()),
            ],
        )
    }

    #[test]
    fn leaves_left_to_right() {
        assert_eq!(sample().leaves(), vec!["left", "right"]);
        assert_eq!(ParseTree::Empty.leaves(), Vec::<&str>::new());
    }

    #[test]
    fn bracketed() {
        assert_eq!(sample().bracketed(), "(A (B left) (C right))");
        assert_eq!(ParseTree::Empty.bracketed(), "()");
    }

    #[test]
    fn print_nested() {
        let expected = "\
`-- A
  |`-- B ==> \"left\"
   `-- C ==> \"right\"
";
        assert_eq!(sample().print(), expected);
    }
}
