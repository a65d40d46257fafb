pub mod blocks;
pub mod options;
pub mod rope;
pub mod ruler;
pub mod snapshot;
pub mod state;
pub mod token;
pub mod tokenizer;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use options::ParseOptions;
use state::BlockState;
use token::Token;
use tokenizer::BlockTokenizer;

#[derive(Debug)]
pub struct ParsedDoc {
    pub tokens: Vec<Token>,
}

impl ParsedDoc {
    /// Tokens a renderer should see.
    pub fn visible(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| !t.hidden)
    }
}

pub fn parse_document(rope: &Rope, options: &ParseOptions) -> ParsedDoc {
    let tokenizer = BlockTokenizer::new();
    let mut state = BlockState::new(rope, &tokenizer, options);
    let end = state.line_max;
    tokenizer.tokenize(&mut state, 0, end, false);
    ParsedDoc {
        tokens: state.tokens,
    }
}

/// Convenience: parse a string slice.
pub fn parse_str(text: &str, options: &ParseOptions) -> ParsedDoc {
    parse_document(&Rope::from(text), options)
}
