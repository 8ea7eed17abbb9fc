//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Pull-based tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//!
//! The parser only depends on the [`source::TokenSource`] trait, so token
//! vectors built by hand can be parsed just like lexer output.

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;
