//! # Syntax
//! Tokenise and parse Monkey source code into an Abstract Syntax Tree
//!
//! A pratt parser over a lazy tokeniser. The AST is a plain boxed tree of
//! tagged unions; nodes render back to source-like text with [`std::fmt::Display`].

pub mod ast;
mod parser;
mod tokeniser;

#[cfg(test)]
mod test;

/// Parses a source code string into an AST
///
/// # Examples
/// ```
/// let ast = monkey_syntax::parse("5 + 3").unwrap();
/// assert_eq!(ast.to_string(), "(5 + 3)");
/// ```
///
/// # Errors
/// If the syntax of the source is invalid
pub fn parse(source: &str) -> Result<ast::Program, ParseError> {
  parser::Parser::new(source).parse()
}

/// Get the tokens from a source code string
pub fn tokenise(source: &str) -> impl Iterator<Item = Token> + '_ {
  tokeniser::Tokeniser::from(source)
}

pub use parser::ParseError;
pub use tokeniser::{Token, TokenKind};
