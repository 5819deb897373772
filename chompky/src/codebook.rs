#![deny(warnings)]

use std::collections::HashMap;

/// A bi-directional map between symbol names and dense auto-generated
/// indices, used to address chart dimensions by symbol.
#[derive(Clone, Debug)]
pub struct CodeBook {
    indices: HashMap<String, usize>,
    names: Vec<String>,
}

impl CodeBook {
    /// Build a codebook from symbol names. Duplicates keep their first
    /// assigned index so registration order fixes the layout.
    pub fn new<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> CodeBook {
        let mut book = CodeBook {
            indices: HashMap::new(),
            names: Vec::new(),
        };
        for name in names {
            book.add(name.as_ref());
        }
        book
    }

    /// Register a name returning its index. Indices are stable, adding an
    /// existing name is a no-op.
    pub fn add(&mut self, name: &str) -> usize {
        match self.indices.get(name) {
            Some(&index) => index,
            None => {
                let index = self.names.len();
                self.indices.insert(name.to_string(), index);
                self.names.push(name.to_string());
                index
            }
        }
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Name registered for an index. Total over `0..len()`.
    pub fn name_of(&self, index: usize) -> &str {
        &self.names[index]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

///////////////////////////////////////////////////////////////////////////////
