#![deny(warnings)]

use crate::grammar::{Grammar, GrammarBuilder};
use crate::pcfg_tokenizer::PcfgTokenizer;

// A right-hand-side element is either a quoted word or a symbol name
enum Element {
    Word(String),
    Symbol(String),
}

/// Read a probabilistic grammar in Chomsky normal form from its text
/// form. Rules look like `S -> NP VP [0.9]`, lexical entries quote their
/// word: `NP -> 'time' [0.7] | 'flies' [0.3]`. The head of the first
/// rule is the start symbol.
pub fn parse_pcfg(description: &str) -> Result<Grammar, String> {
    let tokens = PcfgTokenizer::new(description.chars()).tokenize()?;
    let mut builder = GrammarBuilder::default();
    let mut start: Option<String> = None;
    let mut pos = 0;

    while pos < tokens.len() {
        let head = symbol(&tokens, &mut pos)?;
        expect(&tokens, &mut pos, "->")?;
        loop {
            alternative(&mut builder, &head, &tokens, &mut pos)?;
            if tokens.get(pos).is_some_and(|t| t == "|") {
                pos += 1;
            } else {
                break;
            }
        }
        start.get_or_insert(head);
    }

    match start {
        Some(start) => builder.into_grammar(start),
        None => Err("Empty grammar description".to_string()),
    }
}

// One weighted expansion: either a single quoted word or two symbols,
// followed by the bracketed probability. Anything else is not CNF.
fn alternative(
    builder: &mut GrammarBuilder,
    head: &str,
    tokens: &[String],
    pos: &mut usize,
) -> Result<(), String> {
    let mut elements = Vec::new();
    while tokens.get(*pos).is_some_and(|t| t != "[") {
        if tokens[*pos] == "'" || tokens[*pos] == "\"" {
            elements.push(Element::Word(quoted(tokens, pos)?));
        } else {
            elements.push(Element::Symbol(symbol(tokens, pos)?));
        }
    }
    let prob = probability(tokens, pos)?;
    match elements.as_slice() {
        [Element::Word(word)] => builder.add_lexical(head, word, prob),
        [Element::Symbol(left), Element::Symbol(right)] => {
            builder.add_binary(head, left, right, prob)
        }
        _ => {
            let expansion = elements
                .iter()
                .map(|e| match e {
                    Element::Word(word) => format!("'{}'", word),
                    Element::Symbol(name) => name.clone(),
                })
                .collect::<Vec<_>>()
                .join(" ");
            return Err(format!(
                "Not in Chomsky normal form: {} -> {}",
                head, expansion
            ));
        }
    }
    Ok(())
}

fn next_token<'a>(tokens: &'a [String], pos: &mut usize) -> Result<&'a str, String> {
    match tokens.get(*pos) {
        Some(token) => {
            *pos += 1;
            Ok(token)
        }
        None => Err("Unexpected end of grammar description".to_string()),
    }
}

fn expect(tokens: &[String], pos: &mut usize, what: &str) -> Result<(), String> {
    let token = next_token(tokens, pos)?;
    if token != what {
        return Err(format!("Expected {:?}, got {:?}", what, token));
    }
    Ok(())
}

fn symbol(tokens: &[String], pos: &mut usize) -> Result<String, String> {
    let token = next_token(tokens, pos)?;
    if !token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    {
        return Err(format!("Expected symbol, got {:?}", token));
    }
    Ok(token.to_string())
}

// Quoted words arrive from the tokenizer as quote, content, quote
fn quoted(tokens: &[String], pos: &mut usize) -> Result<String, String> {
    let open = next_token(tokens, pos)?.to_string();
    let word = next_token(tokens, pos)?.to_string();
    expect(tokens, pos, &open)?;
    Ok(word)
}

fn probability(tokens: &[String], pos: &mut usize) -> Result<f64, String> {
    expect(tokens, pos, "[")?;
    let token = next_token(tokens, pos)?;
    let prob = token
        .parse::<f64>()
        .map_err(|_| format!("Bad Probability: {:?}", token))?;
    expect(tokens, pos, "]")?;
    Ok(prob)
}
