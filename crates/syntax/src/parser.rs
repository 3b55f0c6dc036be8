use crate::ast::{
  ArrayLiteral, BlockStatement, BooleanLiteral, CallExpression, Expression, ExpressionStatement,
  FunctionLiteral, HashLiteral, Identifier, IfExpression, IndexExpression, InfixExpression,
  IntegerLiteral, LetStatement, PrefixExpression, Program, ReturnStatement, Statement,
  StringLiteral,
};
use crate::tokeniser::{Token, TokenKind, Tokeniser};
use smartstring::alias::String as SmartString;
use std::{error, fmt};

/// A pratt parser for Monkey source code.
///
/// Keeps a two token lookahead over the tokeniser, and dispatches on the
/// current token kind for prefix rules and on the peek token kind (by
/// precedence) for infix rules.
pub struct Parser<'source> {
  tokens: Tokeniser<'source>,

  current: Token,
  peek: Token,
}
impl<'source> Parser<'source> {
  pub fn new(source: &'source str) -> Self {
    let mut parser = Self {
      tokens: Tokeniser::from(source),
      current: end_of_file(),
      peek: end_of_file(),
    };

    parser.next_token();
    parser.next_token();
    parser
  }

  pub fn parse(mut self) -> Result<Program, ParseError> {
    let mut statements = Vec::new();

    while self.current.kind != TokenKind::EndOfFile {
      statements.push(self.statement()?);
      self.next_token();
    }

    Ok(Program { statements })
  }

  fn next_token(&mut self) {
    self.current = std::mem::replace(&mut self.peek, self.tokens.next().unwrap_or_else(end_of_file));
  }

  fn expect_peek(&mut self, expected: TokenKind) -> Result<(), ParseError> {
    if self.peek.kind == expected {
      self.next_token();
      Ok(())
    } else {
      Err(ParseError::UnexpectedToken {
        expected,
        got: self.peek.kind,
      })
    }
  }

  fn statement(&mut self) -> Result<Statement, ParseError> {
    match self.current.kind {
      TokenKind::Let => self.let_statement(),
      TokenKind::Return => self.return_statement(),
      _ => self.expression_statement(),
    }
  }

  fn let_statement(&mut self) -> Result<Statement, ParseError> {
    self.expect_peek(TokenKind::Identifier)?;
    let name = Identifier {
      value: self.current.literal.clone(),
    };

    self.expect_peek(TokenKind::Assign)?;
    self.next_token();

    let mut value = self.expression(Precedence::Lowest)?;

    // a function literal bound by a `let` knows its own name, so that it can
    // call itself when compiled
    if let Expression::Function(function) = &mut value {
      function.name = Some(name.value.clone());
    }

    if self.peek.kind == TokenKind::Semicolon {
      self.next_token();
    }

    Ok(Statement::Let(LetStatement { name, value }))
  }

  fn return_statement(&mut self) -> Result<Statement, ParseError> {
    self.next_token();
    let value = self.expression(Precedence::Lowest)?;

    if self.peek.kind == TokenKind::Semicolon {
      self.next_token();
    }

    Ok(Statement::Return(ReturnStatement { value }))
  }

  fn expression_statement(&mut self) -> Result<Statement, ParseError> {
    let expression = self.expression(Precedence::Lowest)?;

    if self.peek.kind == TokenKind::Semicolon {
      self.next_token();
    }

    Ok(Statement::Expression(ExpressionStatement { expression }))
  }

  fn expression(&mut self, precedence: Precedence) -> Result<Expression, ParseError> {
    let mut left = self.prefix_expression()?;

    while self.peek.kind != TokenKind::Semicolon && precedence < precedence_of(self.peek.kind) {
      self.next_token();
      left = self.infix_expression(left)?;
    }

    Ok(left)
  }

  fn prefix_expression(&mut self) -> Result<Expression, ParseError> {
    match self.current.kind {
      TokenKind::Identifier => Ok(Expression::Identifier(Identifier {
        value: self.current.literal.clone(),
      })),
      TokenKind::Integer => self.integer_literal(),
      TokenKind::String => Ok(Expression::String(StringLiteral {
        value: self.current.literal.to_string(),
      })),
      TokenKind::True | TokenKind::False => Ok(Expression::Boolean(BooleanLiteral {
        value: self.current.kind == TokenKind::True,
      })),
      TokenKind::Bang | TokenKind::Minus => {
        let operator = self.current.literal.clone();
        self.next_token();
        let right = self.expression(Precedence::Prefix)?;

        Ok(Expression::Prefix(PrefixExpression {
          operator,
          right: Box::new(right),
        }))
      }
      TokenKind::LeftParen => self.grouped_expression(),
      TokenKind::If => self.if_expression(),
      TokenKind::Function => self.function_literal(),
      TokenKind::LeftSquare => {
        let elements = self.expression_list(TokenKind::RightSquare)?;
        Ok(Expression::Array(ArrayLiteral { elements }))
      }
      TokenKind::LeftCurly => self.hash_literal(),
      kind => Err(ParseError::NoPrefixRule(kind)),
    }
  }

  fn infix_expression(&mut self, left: Expression) -> Result<Expression, ParseError> {
    match self.current.kind {
      TokenKind::LeftParen => {
        let arguments = self.expression_list(TokenKind::RightParen)?;

        Ok(Expression::Call(CallExpression {
          function: Box::new(left),
          arguments,
        }))
      }
      TokenKind::LeftSquare => {
        self.next_token();
        let index = self.expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RightSquare)?;

        Ok(Expression::Index(IndexExpression {
          left: Box::new(left),
          index: Box::new(index),
        }))
      }
      _ => {
        let operator = self.current.literal.clone();
        let precedence = precedence_of(self.current.kind);
        self.next_token();
        let right = self.expression(precedence)?;

        Ok(Expression::Infix(InfixExpression {
          operator,
          left: Box::new(left),
          right: Box::new(right),
        }))
      }
    }
  }

  fn integer_literal(&mut self) -> Result<Expression, ParseError> {
    let value = (self.current.literal)
      .parse()
      .map_err(|_| ParseError::InvalidInteger(self.current.literal.clone()))?;

    Ok(Expression::Integer(IntegerLiteral { value }))
  }

  fn grouped_expression(&mut self) -> Result<Expression, ParseError> {
    self.next_token();
    let expression = self.expression(Precedence::Lowest)?;
    self.expect_peek(TokenKind::RightParen)?;

    Ok(expression)
  }

  fn if_expression(&mut self) -> Result<Expression, ParseError> {
    self.expect_peek(TokenKind::LeftParen)?;
    self.next_token();
    let condition = self.expression(Precedence::Lowest)?;
    self.expect_peek(TokenKind::RightParen)?;

    self.expect_peek(TokenKind::LeftCurly)?;
    let consequence = self.block_statement()?;

    let alternative = if self.peek.kind == TokenKind::Else {
      self.next_token();
      self.expect_peek(TokenKind::LeftCurly)?;
      Some(self.block_statement()?)
    } else {
      None
    };

    Ok(Expression::If(IfExpression {
      condition: Box::new(condition),
      consequence,
      alternative,
    }))
  }

  fn function_literal(&mut self) -> Result<Expression, ParseError> {
    self.expect_peek(TokenKind::LeftParen)?;
    let parameters = self.function_parameters()?;

    self.expect_peek(TokenKind::LeftCurly)?;
    let body = self.block_statement()?;

    Ok(Expression::Function(FunctionLiteral {
      parameters,
      body,
      name: None,
    }))
  }

  fn function_parameters(&mut self) -> Result<Vec<Identifier>, ParseError> {
    let mut parameters = Vec::new();

    if self.peek.kind == TokenKind::RightParen {
      self.next_token();
      return Ok(parameters);
    }

    self.expect_peek(TokenKind::Identifier)?;
    parameters.push(Identifier {
      value: self.current.literal.clone(),
    });

    while self.peek.kind == TokenKind::Comma {
      self.next_token();
      self.expect_peek(TokenKind::Identifier)?;
      parameters.push(Identifier {
        value: self.current.literal.clone(),
      });
    }

    self.expect_peek(TokenKind::RightParen)?;
    Ok(parameters)
  }

  fn block_statement(&mut self) -> Result<BlockStatement, ParseError> {
    let mut statements = Vec::new();
    self.next_token();

    while self.current.kind != TokenKind::RightCurly {
      if self.current.kind == TokenKind::EndOfFile {
        return Err(ParseError::UnexpectedToken {
          expected: TokenKind::RightCurly,
          got: TokenKind::EndOfFile,
        });
      }

      statements.push(self.statement()?);
      self.next_token();
    }

    Ok(BlockStatement { statements })
  }

  fn expression_list(&mut self, end: TokenKind) -> Result<Vec<Expression>, ParseError> {
    let mut expressions = Vec::new();

    if self.peek.kind == end {
      self.next_token();
      return Ok(expressions);
    }

    self.next_token();
    expressions.push(self.expression(Precedence::Lowest)?);

    while self.peek.kind == TokenKind::Comma {
      self.next_token();
      self.next_token();
      expressions.push(self.expression(Precedence::Lowest)?);
    }

    self.expect_peek(end)?;
    Ok(expressions)
  }

  fn hash_literal(&mut self) -> Result<Expression, ParseError> {
    let mut pairs = Vec::new();

    while self.peek.kind != TokenKind::RightCurly {
      self.next_token();
      let key = self.expression(Precedence::Lowest)?;

      self.expect_peek(TokenKind::Colon)?;
      self.next_token();
      let value = self.expression(Precedence::Lowest)?;

      pairs.push((key, value));

      if self.peek.kind != TokenKind::RightCurly {
        self.expect_peek(TokenKind::Comma)?;
      }
    }

    self.expect_peek(TokenKind::RightCurly)?;
    Ok(Expression::Hash(HashLiteral { pairs }))
  }
}

fn end_of_file() -> Token {
  Token {
    kind: TokenKind::EndOfFile,
    literal: SmartString::new(),
  }
}

/// Binding strength of operators, loosest first
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
  Lowest,
  Equals,
  LessGreater,
  Sum,
  Product,
  Prefix,
  Call,
  Index,
}

fn precedence_of(kind: TokenKind) -> Precedence {
  match kind {
    TokenKind::Equal | TokenKind::NotEqual => Precedence::Equals,
    TokenKind::Less | TokenKind::Greater => Precedence::LessGreater,
    TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
    TokenKind::Star | TokenKind::Slash => Precedence::Product,
    TokenKind::LeftParen => Precedence::Call,
    TokenKind::LeftSquare => Precedence::Index,
    _ => Precedence::Lowest,
  }
}

/// An error from parsing source code into an AST
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
  /// A different token was expected at this position
  UnexpectedToken {
    expected: TokenKind,
    got: TokenKind,
  },
  /// No expression can start with this token
  NoPrefixRule(TokenKind),
  /// An integer literal which doesn't fit in a signed 64-bit integer
  InvalidInteger(SmartString),
}
impl ParseError {
  /// The title of the error message
  #[must_use]
  pub fn title(&self) -> &'static str {
    match self {
      Self::UnexpectedToken { .. } => "Unexpected Token",
      Self::NoPrefixRule(_) => "Expected Expression",
      Self::InvalidInteger(_) => "Invalid Integer",
    }
  }

  /// The body of the error message describing what has gone wrong
  #[must_use]
  pub fn message(&self) -> String {
    match self {
      Self::UnexpectedToken { expected, got } => {
        format!("expected next token to be {expected}, got {got} instead")
      }
      Self::NoPrefixRule(kind) => format!("no expression can start with {kind}"),
      Self::InvalidInteger(literal) => format!("could not parse `{literal}` as integer"),
    }
  }
}
impl fmt::Display for ParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.message())
  }
}
impl error::Error for ParseError {}
