use super::expression::{Expression, Identifier};
use std::fmt;

/// A statement of Monkey source code
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
  Let(LetStatement),
  Return(ReturnStatement),
  Expression(ExpressionStatement),
}
impl fmt::Display for Statement {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Let(let_) => let_.fmt(f),
      Self::Return(return_) => return_.fmt(f),
      Self::Expression(expression) => expression.fmt(f),
    }
  }
}

/// Binds a value to a name, `let x = 5;`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetStatement {
  pub name: Identifier,
  pub value: Expression,
}
impl fmt::Display for LetStatement {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "let {} = {};", self.name, self.value)
  }
}

/// Returns a value from the enclosing function, `return 5;`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReturnStatement {
  pub value: Expression,
}
impl fmt::Display for ReturnStatement {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "return {};", self.value)
  }
}

/// An expression in statement position, `x + 5;`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpressionStatement {
  pub expression: Expression,
}
impl fmt::Display for ExpressionStatement {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.expression.fmt(f)
  }
}

/// A brace-delimited sequence of statements
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockStatement {
  pub statements: Vec<Statement>,
}
impl fmt::Display for BlockStatement {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for statement in &self.statements {
      write!(f, "{statement}")?;
    }

    Ok(())
  }
}
