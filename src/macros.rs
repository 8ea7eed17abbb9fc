//! Utility macros for the front end.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for simple tokens
//! - `MK_EXPR_IMPL!` / `MK_STMT_IMPL!` - Implement the AST node traits
//!
//! These macros reduce boilerplate in the lexer and AST implementations.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for simple single-token patterns.
///
/// Generates a handler function that emits a token with the given kind,
/// moving the lexer forward by the token's length.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal string value (used for length calculation)
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _matched: &str| -> Option<Token> {
            Some(lexer.emit($kind, String::from($value), $value.len()))
        }
    };
}

/// Implements `Expr` for a node that stores its originating `token`.
///
/// The node must be `Clone + Display`.
#[macro_export]
macro_rules! MK_EXPR_IMPL {
    ($node:ty, $expr_type:expr) => {
        impl Expr for $node {
            fn get_expr_type(&self) -> ExprType {
                $expr_type
            }
            fn as_any(&self) -> &dyn Any {
                self
            }
            fn clone_wrapper(&self) -> ExprWrapper {
                ExprWrapper::new(self.clone())
            }
            fn get_token(&self) -> &Token {
                &self.token
            }
        }
    };
}

/// Implements `Stmt` for a node that stores its originating `token`.
#[macro_export]
macro_rules! MK_STMT_IMPL {
    ($node:ty, $stmt_type:expr) => {
        impl Stmt for $node {
            fn get_stmt_type(&self) -> StmtType {
                $stmt_type
            }
            fn as_any(&self) -> &dyn Any {
                self
            }
            fn clone_wrapper(&self) -> StmtWrapper {
                StmtWrapper::new(self.clone())
            }
            fn get_token(&self) -> &Token {
                &self.token
            }
        }
    };
}
