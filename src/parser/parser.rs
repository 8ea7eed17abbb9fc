//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program driver.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing and a statement lookup for statement parsing.
//!
//! It keeps a two token window (current and peek) over a pull-based
//! [`TokenSource`] and maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers and associativity for operator precedence
//!
//! Syntax errors never abort parsing. They are recorded on the parser and
//! the failing statement is dropped.

use std::{collections::HashMap, mem};

use log::{debug, trace, warn};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        source::TokenSource,
        tokens::{Token, TokenKind},
    },
    Position, Span, MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, Associativity, AssociativityLookup, BPLookup, BindingPower,
        LEDHandler, LEDLookup, NUDHandler, NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// One instance parses one input; it owns its token source and collected
/// errors exclusively.
pub struct Parser {
    /// Where tokens are pulled from
    source: Box<dyn TokenSource>,
    /// The token being parsed
    current: Token,
    /// The token after `current`, already fetched
    peek: Token,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Lookup table for infix associativity
    associativity_lookup: AssociativityLookup,
}

impl Parser {
    /// Creates a parser over `source` with the default grammar registered.
    ///
    /// The token window is primed before returning, so `current_token` is
    /// the first token of the input and `peek_token` the second.
    pub fn new(source: impl TokenSource + 'static) -> Self {
        let placeholder = MK_TOKEN!(TokenKind::EOF, String::new(), Span::null());

        let mut parser = Parser {
            source: Box::new(source),
            current: placeholder.clone(),
            peek: placeholder,
            errors: Vec::new(),
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            associativity_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser.advance();
        parser.advance();
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Moves the window forward by one token.
    pub fn advance(&mut self) {
        self.current = mem::replace(&mut self.peek, self.source.next_token());
        trace!("current: {}, peek: {}", self.current, self.peek);
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances if the lookahead is `kind` and returns the new current token.
    ///
    /// Otherwise records an unexpected token error and leaves the window
    /// untouched. Callers abandon the construct they were parsing.
    pub fn expect_peek(&mut self, kind: TokenKind) -> Option<Token> {
        if self.peek_is(kind) {
            self.advance();
            Some(self.current.clone())
        } else {
            self.peek_error(kind);
            None
        }
    }

    /// Records that `expected` should have followed the current token.
    pub fn peek_error(&mut self, expected: TokenKind) {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                found: self.peek.kind,
                token: self.peek.value.clone(),
            },
            self.peek.span.start.clone(),
        );
        self.record_error(error);
    }

    /// Records that `expected` should have been found instead of the current token.
    pub fn current_error(&mut self, expected: TokenKind) {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                found: self.current.kind,
                token: self.current.value.clone(),
            },
            self.get_position(),
        );
        self.record_error(error);
    }

    /// Records that the current token cannot start an expression.
    pub fn no_prefix_parse_fn_error(&mut self) {
        let error = Error::new(
            ErrorImpl::NoPrefixParseFn {
                kind: self.current.kind,
                token: self.current.value.clone(),
            },
            self.get_position(),
        );
        self.record_error(error);
    }

    pub fn record_error(&mut self, error: Error) {
        warn!("syntax error at offset {}: {}", error.get_position().0, error);
        self.errors.push(error);
    }

    /// Returns the diagnostics collected so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Returns the diagnostics as plain messages.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Binding power of the lookahead; `Lowest` when it is not an operator.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.peek.kind)
    }

    /// Binding power of the current token; `Lowest` when it is not an operator.
    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.current.kind)
    }

    fn binding_power_of(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// The binding power the right operand of `kind` is parsed with.
    ///
    /// Right associative operators use one rank less, so an operator of the
    /// same rank further right is absorbed into the right operand.
    pub fn operand_binding_power(&self, kind: TokenKind, binding_power: BindingPower) -> BindingPower {
        match self.associativity_lookup.get(&kind) {
            Some(Associativity::Right) => binding_power.lower(),
            _ => binding_power,
        }
    }

    /// Registers a left associative left denotation (infix) handler.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.register_led(kind, binding_power, Associativity::Left, led_fn);
    }

    /// Registers a right associative left denotation (infix) handler.
    pub fn led_right(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.register_led(kind, binding_power, Associativity::Right, led_fn);
    }

    fn register_led(
        &mut self,
        kind: TokenKind,
        binding_power: BindingPower,
        associativity: Associativity,
        led_fn: LEDHandler,
    ) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.associativity_lookup.insert(kind, associativity);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler function for this prefix operator
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the position of the current token in the source file.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Parses statements until `EOF`.
    ///
    /// The window moves forward once after every statement, whether or not
    /// it parsed, so the loop always makes progress. Failed statements are
    /// left out of the program; their errors are available from `errors()`.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                debug!("parsed statement: {}", stmt);
                program.statements.push(stmt);
            }
            self.advance();
        }

        program
    }
}

/// Parses every statement produced by `source`.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// which registers the default lookup tables, and parses until EOF.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, holding the collected errors
/// - The parsed Program (best effort when errors were found)
pub fn parse(source: impl TokenSource + 'static) -> (Parser, Program) {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();

    (parser, program)
}

/// Lexes and parses `source` in one step.
pub fn parse_source(source: &str, file: Option<String>) -> (Parser, Program) {
    parse(Lexer::new(source.to_string(), file))
}
