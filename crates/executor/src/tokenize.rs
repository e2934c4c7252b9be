//! Line tokenizer.
//!
//! Splits on whitespace only. Every other character belongs to a word, so
//! keys such as `#tag`, `it's` or `a\b` reach the engine unchanged:
//!
//! ```text
//! SET #tag 5    →  ("SET", ["#tag", "5"])
//! ```

use smallvec::SmallVec;

/// Operands of one command line. Commands take at most two.
pub type Operands = SmallVec<[String; 2]>;

/// A command line split into its word and operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    /// Command word as typed
    pub command: String,
    /// Remaining words
    pub operands: Operands,
}

/// Split a line. Returns `None` for a blank line.
pub fn tokenize(line: &str) -> Option<Tokens> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_string();
    Some(Tokens {
        command,
        operands: words.map(str::to_string).collect(),
    })
}
