fn main() {
    // Grammar:  A -> B C;  B -> 'left';  C -> 'right'
    let grammar = chompky::GrammarBuilder::default()
        .lexical("B", "left", 1.0)
        .lexical("C", "right", 1.0)
        .binary("A", "B", "C", 1.0)
        .into_grammar("A")
        .unwrap();

    // Parse the only sentence this grammar licenses
    let parser = chompky::CkyParser::new(grammar);
    let tree = parser.parse("left right".split_whitespace());

    println!("{}", tree.bracketed());
    print!("{}", tree.print());
}
