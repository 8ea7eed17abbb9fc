//! The boundary between lexing and parsing.
//!
//! The parser pulls tokens one at a time from a [`TokenSource`]. Sources must
//! eventually yield `EOF` and keep yielding it on every later call.

use std::vec::IntoIter;

use crate::{Span, MK_TOKEN};

use super::tokens::{Token, TokenKind};

pub trait TokenSource {
    /// Produces the next token. Never blocks; returns `EOF` once exhausted.
    fn next_token(&mut self) -> Token;
}

/// A token source over tokens that were produced ahead of time.
pub struct TokenStream {
    tokens: IntoIter<Token>,
    eof: Token,
}

impl TokenStream {
    /// Wraps `tokens`. If the vector carries its own `EOF` it is replayed
    /// forever once reached; otherwise a synthetic one is used.
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof = tokens
            .iter()
            .find(|token| token.is_eof())
            .cloned()
            .unwrap_or_else(|| MK_TOKEN!(TokenKind::EOF, String::new(), Span::null()));

        TokenStream {
            tokens: tokens.into_iter(),
            eof,
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        match self.tokens.next() {
            Some(token) if !token.is_eof() => token,
            _ => {
                // Drop anything after EOF so every later call repeats it.
                self.tokens = Vec::new().into_iter();
                self.eof.clone()
            }
        }
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        TokenStream::new(tokens)
    }
}
