#![deny(warnings)]

pub struct PcfgTokenizer<I: Iterator<Item = char>> {
    input: std::iter::Peekable<I>,
    buff: Vec<String>,
}

impl<I: Iterator<Item = char>> PcfgTokenizer<I> {
    pub fn new(input: I) -> Self {
        Self {
            input: input.peekable(),
            buff: Vec::new(),
        }
    }

    /// Drain the input into its token sequence.
    pub fn tokenize(mut self) -> Result<Vec<String>, String> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Option<String>, String> {
        if !self.buff.is_empty() {
            return Ok(Some(self.buff.remove(0)));
        }
        match self.input.next() {
            // Single char tokens.
            Some(x) if "|[]".contains(x) => Ok(Some(x.to_string())),
            // Rewrite arrow.
            Some('-') => match self.input.next() {
                Some('>') => Ok(Some("->".to_string())),
                _ => Err("Incomplete -> operator".to_string()),
            },
            // Tokenize quoted words checking for escapes.
            Some(open) if open == '"' || open == '\'' => {
                self.buff.push(open.to_string());
                let mut quoted_word = String::new();
                let mut escaped = false;
                while let Some(ch) = self.input.next() {
                    // Swallow escape char '\' and prevent word closure
                    if !escaped && ch == '\\' {
                        escaped = true;
                        continue;
                    }
                    // Found close token. Check it wasn't escaped.
                    if !escaped && open == ch {
                        self.buff.push(quoted_word);
                        self.buff.push(ch.to_string());
                        return self.next_token();
                    }
                    quoted_word.push(ch);
                    escaped = false;
                }
                Err("Unfinished word missing close quote".to_string())
            }
            // Swallow comments until EOL.
            Some('#') => {
                for nl in self.input.by_ref() {
                    if nl == '\n' {
                        return self.next_token();
                    }
                }
                Ok(None)
            }
            // Symbol identifiers.
            Some(x) if x.is_ascii_alphabetic() || x == '_' => {
                let mut id = x.to_string();
                while let Some(ch) = self.input.peek() {
                    if !ch.is_ascii_alphanumeric() && *ch != '_' {
                        break;
                    }
                    id.push(self.input.next().unwrap());
                }
                Ok(Some(id))
            }
            // Probabilities: digits with optional fraction and exponent.
            Some(x) if x.is_ascii_digit() => {
                let mut number = x.to_string();
                self.take_digits(&mut number);
                if let Some('.') = self.input.peek() {
                    number.push(self.input.next().unwrap());
                    self.take_digits(&mut number);
                }
                if let Some(e) = self.input.peek() {
                    if *e == 'e' || *e == 'E' {
                        number.push(self.input.next().unwrap());
                        if let Some(sign) = self.input.peek() {
                            if *sign == '+' || *sign == '-' {
                                number.push(self.input.next().unwrap());
                            }
                        }
                        self.take_digits(&mut number);
                    }
                }
                Ok(Some(number))
            }
            // Swallow whitespace.
            Some(x) if x.is_whitespace() => {
                while let Some(ws) = self.input.peek() {
                    if !ws.is_whitespace() {
                        break;
                    }
                    self.input.next(); // consume whitespace
                }
                self.next_token()
            }
            Some(ch) => Err(format!("Unexpected char: {}", ch)),
            None => Ok(None),
        }
    }

    fn take_digits(&mut self, into: &mut String) {
        while let Some(d) = self.input.peek() {
            if !d.is_ascii_digit() {
                break;
            }
            into.push(self.input.next().unwrap());
        }
    }
}
