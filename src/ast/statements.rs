use std::{
    any::Any,
    fmt::Display,
    slice::Iter,
};

use crate::{lexer::tokens::Token, MK_STMT_IMPL};

use super::{
    ast::{ExprWrapper, Stmt, StmtType, StmtWrapper},
    expressions::Identifier,
};

/// `let <name> = <value>;`
#[derive(Debug, Clone)]
pub struct LetStmt {
    pub token: Token,
    pub name: Identifier,
    pub value: ExprWrapper,
}

MK_STMT_IMPL!(LetStmt, StmtType::LetStmt);

impl Display for LetStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = {};", self.token.value, self.name, self.value)
    }
}

/// `return [<value>];`
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Option<ExprWrapper>,
}

MK_STMT_IMPL!(ReturnStmt, StmtType::ReturnStmt);

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {};", self.token.value, value),
            None => write!(f, "{};", self.token.value),
        }
    }
}

/// An expression used in statement position.
#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: ExprWrapper,
}

MK_STMT_IMPL!(ExpressionStmt, StmtType::ExpressionStmt);

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// `{ <statements> }`, the body of `if` branches and function literals.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub token: Token,
    pub statements: Vec<StmtWrapper>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.statements.iter()
    }
}

MK_STMT_IMPL!(BlockStmt, StmtType::BlockStmt);

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
