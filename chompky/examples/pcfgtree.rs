fn grammar() -> &'static str {
    r#"
    S -> NP VP [1.0]
    VP -> V NP [0.5] | VP PP [0.5]
    PP -> P NP [1.0]
    NP -> NP PP [0.1]
    NP -> 'i' [0.4] | 'stars' [0.3] | 'telescopes' [0.2]
    V -> 'saw' [1.0]
    P -> 'with' [1.0]
    "#
}

fn main() {
    let grammar = chompky::parse_pcfg(grammar()).unwrap();
    let parser = chompky::CkyParser::new(grammar);

    let sentence = if std::env::args().len() > 1 {
        std::env::args().skip(1).collect::<Vec<String>>().join(" ")
    } else {
        "i saw stars with telescopes".to_string()
    };

    match parser.parse(sentence.split_whitespace()) {
        chompky::ParseTree::Empty => println!("No parse for '{}'", sentence),
        tree => print!("{}", tree.print()),
    }
}
