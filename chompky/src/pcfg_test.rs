#![deny(warnings)]

use crate::parser::CkyParser;
use crate::pcfg::parse_pcfg;
use crate::trees::ParseTree;

fn toy_grammar() -> &'static str {
    r#"
    # PP attachment toy grammar
    S -> NP VP [1.0]
    VP -> V NP [0.5] | VP PP [0.5]
    PP -> P NP [1.0]
    NP -> NP PP [0.1]
    NP -> 'i' [0.4] | 'stars' [0.3] | 'telescopes' [0.2]
    V -> 'saw' [1.0]
    P -> 'with' [1.0]
    "#
}

#[test]
fn read_grammar() {
    let g = parse_pcfg(toy_grammar()).unwrap();
    // first rule's head is the start symbol
    assert_eq!(g.start_symbol(), "S");
    assert_eq!(g.binary_rules().count(), 5);
    assert_eq!(g.lexical_rules("saw").count(), 1);
    assert_eq!(g.lexical_rules("banana").count(), 0);
    assert_eq!(g.productions.len(), 10);
}

#[test]
fn text_grammar_parses() {
    let parser = CkyParser::new(parse_pcfg(toy_grammar()).unwrap());
    let tree = parser.parse("i saw stars with telescopes".split_whitespace());
    assert_eq!(
        tree.bracketed(),
        "(S (NP i) (VP (VP (V saw) (NP stars)) (PP (P with) (NP telescopes))))"
    );
    assert_eq!(
        parser.parse("saw i stars".split_whitespace()),
        ParseTree::Empty
    );
}

#[test]
fn double_quoted_words() {
    let g = parse_pcfg(r#"S -> "hi" [1.0]"#).unwrap();
    let parser = CkyParser::new(g);
    assert_eq!(
        parser.parse("hi".split_whitespace()),
        ParseTree::Leaf("S".to_string(), "hi".to_string())
    );
}

#[test]
fn rejects_non_cnf() {
    // unary nonterminal expansion
    let g = parse_pcfg("S -> NP [1.0]\nNP -> 'x' [1.0]");
    assert_eq!(g.unwrap_err(), "Not in Chomsky normal form: S -> NP");
    // ternary expansion
    let g = parse_pcfg("S -> A B C [1.0]");
    assert_eq!(g.unwrap_err(), "Not in Chomsky normal form: S -> A B C");
    // word mixed into a binary expansion
    let g = parse_pcfg("S -> NP 'x' [1.0]");
    assert_eq!(g.unwrap_err(), "Not in Chomsky normal form: S -> NP 'x'");
    // empty expansion
    let g = parse_pcfg("S -> [1.0]");
    assert_eq!(g.unwrap_err(), "Not in Chomsky normal form: S -> ");
}

#[test]
fn rejects_malformed_text() {
    assert_eq!(
        parse_pcfg("").unwrap_err(),
        "Empty grammar description"
    );
    assert_eq!(
        parse_pcfg("S -> 'a'").unwrap_err(),
        "Unexpected end of grammar description"
    );
    assert_eq!(
        parse_pcfg("S -> 'a' [x]").unwrap_err(),
        "Bad Probability: \"x\""
    );
    assert_eq!(
        parse_pcfg("S NP [1.0]").unwrap_err(),
        "Expected \"->\", got \"NP\""
    );
    assert_eq!(
        parse_pcfg("S -> 'unfinished [1.0]").unwrap_err(),
        "Unfinished word missing close quote"
    );
}

#[test]
fn rejects_bad_grammars() {
    assert_eq!(
        parse_pcfg("S -> 'a' [2.0]").unwrap_err(),
        "Bad Probability: S -> 'a' [2]"
    );
    assert_eq!(
        parse_pcfg("S -> NP NP [1.0]").unwrap_err(),
        "Missing Symbol: NP"
    );
    assert_eq!(
        parse_pcfg("S -> 'a' [0.5] | 'b' [0.1]").unwrap_err(),
        "Rule probabilities for S sum to 0.6"
    );
    assert_eq!(
        parse_pcfg("S -> 'a' [0.5] | 'a' [0.5]").unwrap_err(),
        "Duplicate Rule: S -> 'a' [0.5]"
    );
}
