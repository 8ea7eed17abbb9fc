//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer and string literals
//! - Operators and punctuation
//! - Comments and whitespace
//! - Illegal characters and end of input

use pretty_assertions::assert_eq;

use super::{
    lexer::{tokenize, Lexer},
    source::{TokenSource, TokenStream},
    tokens::{Token, TokenKind},
};
use crate::{Span, MK_TOKEN};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.lang".to_string()))
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize(
        "fn let true false if else return".to_string(),
        Some("test.lang".to_string()),
    );

    assert_eq!(tokens[0].kind, TokenKind::Fn);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 8);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize(
        "foo bar baz_123 _underscore CamelCase letter".to_string(),
        Some("test.lang".to_string()),
    );

    let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(
        values,
        vec!["foo", "bar", "baz_123", "_underscore", "CamelCase", "letter", ""]
    );
    assert!(tokens[..6]
        .iter()
        .all(|token| token.kind == TokenKind::Identifier));
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 100".to_string(), Some("test.lang".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "100");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("= + - ! * / < > == != , ; ( ) { } [ ]"),
        vec![
            TokenKind::Assignment,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Not,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_adjacent_operators() {
    assert_eq!(
        kinds("a==b!=!c"),
        vec![
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Not,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(
        r#""foobar" "foo bar" "say \"hi\"\n" """#.to_string(),
        Some("test.lang".to_string()),
    );

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "foobar");
    assert_eq!(tokens[1].value, "foo bar");
    assert_eq!(tokens[2].value, "say \"hi\"\n");
    assert_eq!(tokens[3].kind, TokenKind::String);
    assert_eq!(tokens[3].value, "");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_string_span_covers_quotes() {
    let tokens = tokenize(r#"x "a\tb""#.to_string(), Some("test.lang".to_string()));

    assert_eq!(tokens[1].value, "a\tb");
    assert_eq!(tokens[1].span.start.0, 2);
    assert_eq!(tokens[1].span.end.0, 8);
}

#[test]
fn test_tokenize_comments_and_whitespace() {
    assert_eq!(
        kinds("let x = 5; // the answer\n\t  x"),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_illegal_characters() {
    let tokens = tokenize("let @ x # é".to_string(), Some("test.lang".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "@");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].value, "#");
    assert_eq!(tokens[4].kind, TokenKind::Illegal);
    assert_eq!(tokens[4].value, "é");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_unterminated_string_is_illegal_quote() {
    let tokens = tokenize("\"abc".to_string(), Some("test.lang".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].value, "\"");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "abc");
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let answer = 42;".to_string(), Some("test.lang".to_string()));

    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(tokens[1].span.end.0, 10);
    assert_eq!(tokens[3].span.start.0, 13);
    assert_eq!(tokens[3].span.start.1.as_str(), "test.lang");
    assert_eq!(tokens[5].span.start.0, 16);
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("x".to_string(), None);

    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}

#[test]
fn test_lexer_keeps_returning_eof() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    }
}

#[test]
fn test_token_stream_replays_eof() {
    let tokens = tokenize("a b".to_string(), None);
    let mut stream = TokenStream::new(tokens);

    assert_eq!(stream.next_token().value, "a");
    assert_eq!(stream.next_token().value, "b");
    for _ in 0..3 {
        assert_eq!(stream.next_token().kind, TokenKind::EOF);
    }
}

#[test]
fn test_token_stream_without_eof() {
    let mut stream = TokenStream::new(vec![MK_TOKEN!(
        TokenKind::Identifier,
        String::from("x"),
        Span::null()
    )]);

    assert_eq!(stream.next_token().kind, TokenKind::Identifier);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_token_stream_ignores_tokens_after_eof() {
    let token = |kind: TokenKind, value: &str| MK_TOKEN!(kind, String::from(value), Span::null());
    let mut stream = TokenStream::from(vec![
        token(TokenKind::Identifier, "x"),
        token(TokenKind::EOF, ""),
        token(TokenKind::Identifier, "y"),
    ]);

    assert_eq!(stream.next_token().value, "x");
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_token_display() {
    let tokens = tokenize("let x = 5;".to_string(), None);

    assert_eq!(tokens[0].to_string(), "LET");
    assert_eq!(tokens[1].to_string(), "IDENT (x)");
    assert_eq!(tokens[2].to_string(), "=");
    assert_eq!(tokens[3].to_string(), "INT (5)");
    assert_eq!(tokens[5].to_string(), "EOF");
}

#[test]
fn test_tokenize_program() {
    let source = r#"
let five = 5;
let add = fn(x, y) {
  x + y;
};
let result = add(five, 10);
if (5 < 10) {
  return true;
} else {
  return false;
}
[1, 2];
"#;

    let expected = vec![
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "five"),
        (TokenKind::Assignment, "="),
        (TokenKind::Number, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "add"),
        (TokenKind::Assignment, "="),
        (TokenKind::Fn, "fn"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "y"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Identifier, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "result"),
        (TokenKind::Assignment, "="),
        (TokenKind::Identifier, "add"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Number, "10"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::If, "if"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Number, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Number, "10"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::True, "true"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Else, "else"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::False, "false"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::OpenBracket, "["),
        (TokenKind::Number, "1"),
        (TokenKind::Comma, ","),
        (TokenKind::Number, "2"),
        (TokenKind::CloseBracket, "]"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    let tokens: Vec<Token> = tokenize(source.to_string(), Some("test.lang".to_string()));
    let actual: Vec<(TokenKind, &str)> = tokens
        .iter()
        .map(|token| (token.kind, token.value.as_str()))
        .collect();

    assert_eq!(actual, expected);
}
