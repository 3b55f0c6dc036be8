//! # Abstract Syntax Tree
//! The tree representation of Monkey source code which the compiler walks.
//!
//! Nodes are plain tagged unions. Each node renders back to source-like text
//! via [`fmt::Display`]; the rendering is deterministic and is relied upon by
//! the compiler to order hash literal keys.

pub mod expression;
pub mod statement;

pub use expression::{
  ArrayLiteral, BooleanLiteral, CallExpression, Expression, FunctionLiteral, HashLiteral,
  Identifier, IfExpression, IndexExpression, InfixExpression, IntegerLiteral, PrefixExpression,
  StringLiteral,
};
pub use statement::{
  BlockStatement, ExpressionStatement, LetStatement, ReturnStatement, Statement,
};

use std::fmt;

/// A complete Monkey program, a sequence of top-level statements
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
  pub statements: Vec<Statement>,
}
impl fmt::Display for Program {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for statement in &self.statements {
      write!(f, "{statement}")?;
    }

    Ok(())
  }
}
