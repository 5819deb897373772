fn usage() -> ! {
    eprintln!("usage: pcky <grammar-file> [sentence ...]");
    std::process::exit(1);
}

fn parse_and_print(parser: &chompky::CkyParser, sentence: &str) {
    match parser.parse(sentence.split_whitespace()) {
        chompky::ParseTree::Empty => println!("No parse for '{}'", sentence),
        tree => print!("{}", tree.print()),
    }
}

fn main() {
    let mut args = std::env::args().skip(1);
    let grammar_path = match args.next() {
        Some(path) => path,
        None => usage(),
    };
    let description = match std::fs::read_to_string(&grammar_path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{}: {}", grammar_path, err);
            std::process::exit(1);
        }
    };
    let grammar = match chompky::parse_pcfg(&description) {
        Ok(grammar) => grammar,
        Err(err) => {
            eprintln!("Bad grammar: {}", err);
            std::process::exit(1);
        }
    };
    let parser = chompky::CkyParser::new(grammar);

    // One-shot sentence from argv, else an interactive loop
    let sentence = args.collect::<Vec<String>>().join(" ");
    if !sentence.is_empty() {
        parse_and_print(&parser, &sentence);
        return;
    }
    let mut rl = rustyline::DefaultEditor::new().unwrap();
    while let Ok(line) = rl.readline("~> ") {
        rl.add_history_entry(&line).ok();
        parse_and_print(&parser, &line);
    }
}
