use super::statement::BlockStatement;
use smartstring::alias::String as SmartString;
use std::fmt;

/// An expression of Monkey source code
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
  Identifier(Identifier),
  Integer(IntegerLiteral),
  String(StringLiteral),
  Boolean(BooleanLiteral),
  Prefix(PrefixExpression),
  Infix(InfixExpression),
  If(IfExpression),
  Function(FunctionLiteral),
  Call(CallExpression),
  Array(ArrayLiteral),
  Index(IndexExpression),
  Hash(HashLiteral),
}
impl fmt::Display for Expression {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Identifier(identifier) => identifier.fmt(f),
      Self::Integer(integer) => integer.fmt(f),
      Self::String(string) => string.fmt(f),
      Self::Boolean(boolean) => boolean.fmt(f),
      Self::Prefix(prefix) => prefix.fmt(f),
      Self::Infix(infix) => infix.fmt(f),
      Self::If(if_) => if_.fmt(f),
      Self::Function(function) => function.fmt(f),
      Self::Call(call) => call.fmt(f),
      Self::Array(array) => array.fmt(f),
      Self::Index(index) => index.fmt(f),
      Self::Hash(hash) => hash.fmt(f),
    }
  }
}

/// A reference to a binding, `x`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier {
  pub value: SmartString,
}
impl fmt::Display for Identifier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.value)
  }
}

/// A signed 64-bit integer literal, `5`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegerLiteral {
  pub value: i64,
}
impl fmt::Display for IntegerLiteral {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.value)
  }
}

/// A string literal, `"hello"`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringLiteral {
  pub value: String,
}
impl fmt::Display for StringLiteral {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.value)
  }
}

/// A boolean literal, `true`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BooleanLiteral {
  pub value: bool,
}
impl fmt::Display for BooleanLiteral {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.value)
  }
}

/// A prefix operator applied to an expression, `-5` or `!ok`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixExpression {
  pub operator: SmartString,
  pub right: Box<Expression>,
}
impl fmt::Display for PrefixExpression {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}{})", self.operator, self.right)
  }
}

/// A binary operator applied to two expressions, `a + b`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfixExpression {
  pub operator: SmartString,
  pub left: Box<Expression>,
  pub right: Box<Expression>,
}
impl fmt::Display for InfixExpression {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({} {} {})", self.left, self.operator, self.right)
  }
}

/// A conditional expression, `if (x > 5) { 1 } else { 2 }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IfExpression {
  pub condition: Box<Expression>,
  pub consequence: BlockStatement,
  pub alternative: Option<BlockStatement>,
}
impl fmt::Display for IfExpression {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "if{} {}", self.condition, self.consequence)?;

    if let Some(alternative) = &self.alternative {
      write!(f, "else {alternative}")?;
    }

    Ok(())
  }
}

/// A function literal, `fn(x, y) { x + y }`
///
/// When the literal is the right-hand side of a `let`, the parser fills in
/// `name` so that the function can refer to itself when compiled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionLiteral {
  pub parameters: Vec<Identifier>,
  pub body: BlockStatement,
  pub name: Option<SmartString>,
}
impl fmt::Display for FunctionLiteral {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("fn")?;
    if let Some(name) = &self.name {
      write!(f, "<{name}>")?;
    }

    f.write_str("(")?;
    for (index, parameter) in self.parameters.iter().enumerate() {
      if index > 0 {
        f.write_str(", ")?;
      }
      write!(f, "{parameter}")?;
    }
    write!(f, ") {}", self.body)
  }
}

/// A call of a function with arguments, `add(1, 2)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallExpression {
  pub function: Box<Expression>,
  pub arguments: Vec<Expression>,
}
impl fmt::Display for CallExpression {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}(", self.function)?;
    for (index, argument) in self.arguments.iter().enumerate() {
      if index > 0 {
        f.write_str(", ")?;
      }
      write!(f, "{argument}")?;
    }
    f.write_str(")")
  }
}

/// An array literal, `[1, 2, 3]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayLiteral {
  pub elements: Vec<Expression>,
}
impl fmt::Display for ArrayLiteral {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("[")?;
    for (index, element) in self.elements.iter().enumerate() {
      if index > 0 {
        f.write_str(", ")?;
      }
      write!(f, "{element}")?;
    }
    f.write_str("]")
  }
}

/// Indexing into a collection, `array[0]` or `hash["key"]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexExpression {
  pub left: Box<Expression>,
  pub index: Box<Expression>,
}
impl fmt::Display for IndexExpression {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}[{}])", self.left, self.index)
  }
}

/// A hash literal, `{"a": 1, "b": 2}`
///
/// Pairs are kept in source order; the compiler sorts them by their textual
/// rendering so that equivalent literals produce identical bytecode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashLiteral {
  pub pairs: Vec<(Expression, Expression)>,
}
impl fmt::Display for HashLiteral {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("{")?;
    for (index, (key, value)) in self.pairs.iter().enumerate() {
      if index > 0 {
        f.write_str(", ")?;
      }
      write!(f, "{key}: {value}")?;
    }
    f.write_str("}")
  }
}
