use crate::diagnostics::Message;

use monkey_interpreter::{Bytecode, Value, VM};
use monkey_syntax::{ast, TokenKind};

use anstream::{eprintln, print, println};
use std::fs;

pub enum CommandStatus {
  /// Command was successful
  Success,
  /// The program had an error: it failed to parse, compile, or run
  Failure,
}

fn read_file(filename: &str) -> Result<String, ()> {
  match fs::read_to_string(filename) {
    Ok(file) if file.is_empty() => {
      eprintln!("{}", Message::warning(format!("Empty file `{filename}`")));
      Err(())
    }
    Ok(file) => Ok(file),
    Err(_) => {
      eprintln!("{}", Message::error(format!("File not found `{filename}`")));
      Err(())
    }
  }
}

fn parse(source: &str) -> Result<ast::Program, ()> {
  match monkey_syntax::parse(source) {
    Ok(ast) => Ok(ast),
    Err(error) => {
      eprintln!("{}", Message::from(&error));
      Err(())
    }
  }
}

fn compile(ast: &ast::Program) -> Result<Bytecode, ()> {
  match monkey_interpreter::compile(ast) {
    Ok(bytecode) => Ok(bytecode),
    Err(error) => {
      eprintln!("{}", Message::from(&error));
      Err(())
    }
  }
}

pub fn run(filename: &str) -> Result<CommandStatus, ()> {
  let source = read_file(filename)?;
  let Ok(ast) = parse(&source) else {
    return Ok(CommandStatus::Failure);
  };
  let Ok(bytecode) = compile(&ast) else {
    return Ok(CommandStatus::Failure);
  };

  // programs write output through `puts`; the value of the final expression
  // is only echoed by the REPL
  let mut vm = VM::new(bytecode);
  if let Err(error) = vm.run() {
    eprintln!("{}", Message::from(&error));
    return Ok(CommandStatus::Failure);
  }

  Ok(CommandStatus::Success)
}

pub fn print_tokens(filename: &str) -> Result<CommandStatus, ()> {
  let source = read_file(filename)?;

  println!("    ╭─[Tokens: {filename}]");
  for (index, token) in monkey_syntax::tokenise(&source).enumerate() {
    print!("{index:>3} │ {}", token.kind);
    if matches!(
      token.kind,
      TokenKind::Identifier | TokenKind::Integer | TokenKind::String | TokenKind::Illegal
    ) {
      print!(" ({})", token.literal);
    }
    println!();
  }
  println!("────╯");

  Ok(CommandStatus::Success)
}

pub fn print_ast(filename: &str) -> Result<CommandStatus, ()> {
  let source = read_file(filename)?;
  let Ok(ast) = parse(&source) else {
    return Ok(CommandStatus::Failure);
  };

  println!("╭─[Abstract Syntax Tree: {filename}]");
  for statement in &ast.statements {
    println!("│ {statement}");
  }
  println!("╯");

  Ok(CommandStatus::Success)
}

pub fn print_bytecode(filename: &str) -> Result<CommandStatus, ()> {
  let source = read_file(filename)?;
  let Ok(ast) = parse(&source) else {
    return Ok(CommandStatus::Failure);
  };
  let Ok(bytecode) = compile(&ast) else {
    return Ok(CommandStatus::Failure);
  };

  println!("╭─[Bytecode: {filename}]");
  print!("{}", bytecode.instructions);

  if !bytecode.constants.is_empty() {
    println!();
    println!("Constants:");
    for (index, constant) in bytecode.constants.iter().enumerate() {
      println!("{index:04} {constant}");

      // compiled functions are opaque handles; list their bodies beneath them
      if let Value::Function(function) = constant {
        for line in function.instructions.to_string().lines() {
          println!("     {line}");
        }
      }
    }
  }
  println!("╯");

  Ok(CommandStatus::Success)
}

mod repl;
pub use repl::repl;
