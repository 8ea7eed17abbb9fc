use std::{any::Any, fmt::Display};

use crate::{lexer::tokens::Token, MK_EXPR_IMPL};

use super::{
    ast::{Expr, ExprType, ExprWrapper},
    statements::BlockStmt,
};

fn join(items: &[impl Display]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// LITERALS

/// Identifier Expression
/// A bare name; also used for `let` targets and function parameters.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        Identifier {
            value: token.value.clone(),
            token,
        }
    }
}

MK_EXPR_IMPL!(Identifier, ExprType::Identifier);

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Expression
#[derive(Debug, Clone)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

MK_EXPR_IMPL!(IntegerLiteral, ExprType::Integer);

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.value)
    }
}

/// String Expression
/// `value` holds the unescaped contents, without quotes.
#[derive(Debug, Clone)]
pub struct StringLiteral {
    pub token: Token,
    pub value: String,
}

MK_EXPR_IMPL!(StringLiteral, ExprType::String);

impl Display for StringLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.value)
    }
}

/// Boolean Expression
#[derive(Debug, Clone)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

MK_EXPR_IMPL!(BooleanLiteral, ExprType::Boolean);

impl Display for BooleanLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Array Expression
#[derive(Debug, Clone)]
pub struct ArrayLiteral {
    pub token: Token,
    pub elements: Vec<ExprWrapper>,
}

MK_EXPR_IMPL!(ArrayLiteral, ExprType::Array);

impl Display for ArrayLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", join(&self.elements))
    }
}

/// Function Expression
/// `fn(<parameters>) { <body> }`
#[derive(Debug, Clone)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStmt,
}

MK_EXPR_IMPL!(FunctionLiteral, ExprType::Function);

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}) {}",
            self.token.value,
            join(&self.parameters),
            self.body
        )
    }
}

// OPERATORS

/// Prefix Expression
/// Represents a prefix operation, like `-5` or `!ok`.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: ExprWrapper,
}

MK_EXPR_IMPL!(PrefixExpr, ExprType::Prefix);

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// Infix Expression
/// Represents a binary operation, like `a + b` or `x == y`.
#[derive(Debug, Clone)]
pub struct InfixExpr {
    pub token: Token,
    pub left: ExprWrapper,
    pub operator: String,
    pub right: ExprWrapper,
}

MK_EXPR_IMPL!(InfixExpr, ExprType::Infix);

impl Display for InfixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// Call Expression
/// `<function>(<arguments>)`
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub token: Token,
    pub function: ExprWrapper,
    pub arguments: Vec<ExprWrapper>,
}

MK_EXPR_IMPL!(CallExpr, ExprType::Call);

impl Display for CallExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.function, join(&self.arguments))
    }
}

/// Index Expression
/// `<left>[<index>]`
#[derive(Debug, Clone)]
pub struct IndexExpr {
    pub token: Token,
    pub left: ExprWrapper,
    pub index: ExprWrapper,
}

MK_EXPR_IMPL!(IndexExpr, ExprType::Index);

impl Display for IndexExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}[{}])", self.left, self.index)
    }
}

// CONTROL FLOW

/// If Expression
/// `if (<condition>) { ... } else { ... }`
#[derive(Debug, Clone)]
pub struct IfExpr {
    pub token: Token,
    pub condition: ExprWrapper,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
}

MK_EXPR_IMPL!(IfExpr, ExprType::If);

impl Display for IfExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, "else {}", alternative)?;
        }
        Ok(())
    }
}
