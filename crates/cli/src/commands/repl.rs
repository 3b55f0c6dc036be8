use super::{parse, CommandStatus};
use crate::diagnostics::Message;

use monkey_interpreter::{Compiler, SymbolTable, Value, BUILTINS, GLOBALS_SIZE, VM};
use monkey_syntax::{tokenise, TokenKind};

use anstream::{eprintln, println};
use owo_colors::OwoColorize;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};

#[derive(rustyline::Helper, rustyline::Completer, rustyline::Hinter, rustyline::Highlighter)]
struct MonkeyRustyLine;

// Check the input for multiline entry: assume it is multiline while more
// brackets have been opened than closed
impl Validator for MonkeyRustyLine {
  fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
    if brackets_approx_balanced(ctx.input()) {
      Ok(ValidationResult::Valid(None))
    } else {
      Ok(ValidationResult::Incomplete)
    }
  }
}

pub fn repl() -> Result<CommandStatus, ()> {
  println!("{}", crate::coloured_header());
  println!("{}", "exit using ctrl+d, or ctrl+c".dimmed());

  // bindings, constants, and globals live across entries
  let mut symbol_table = SymbolTable::new();
  for (index, builtin) in BUILTINS.iter().enumerate() {
    symbol_table.define_builtin(index, builtin.name);
  }
  let mut constants = Vec::new();
  let mut globals = vec![Value::Null; GLOBALS_SIZE];

  let mut rl = rustyline::Editor::new().unwrap();
  rl.set_helper(Some(MonkeyRustyLine));

  while let Ok(line) = rl.readline(">> ") {
    rl.add_history_entry(line.as_str()).unwrap();

    let Ok(ast) = parse(&line) else { continue };

    let mut compiler = Compiler::with_state(symbol_table, constants);
    let compile_result = compiler.compile(&ast);
    let bytecode = compiler.bytecode();
    (symbol_table, constants) = compiler.into_state();

    if let Err(error) = compile_result {
      eprintln!("{}", Message::from(&error));
      continue;
    }

    let mut vm = VM::with_globals(bytecode, globals);
    let run_result = vm.run();
    let result = vm.last_popped();
    globals = vm.into_globals();

    match run_result {
      Ok(()) => println!("{result}"),
      Err(error) => eprintln!("{}", Message::from(&error)),
    }
  }

  Ok(CommandStatus::Success)
}

/// Are all the brackets in the source balanced?
///
/// Only counts opening and closing brackets, it does not check nesting.
fn brackets_approx_balanced(source: &str) -> bool {
  let mut bracket_count = 0;

  for token in tokenise(source) {
    match token.kind {
      TokenKind::LeftCurly | TokenKind::LeftParen | TokenKind::LeftSquare => {
        bracket_count += 1;
      }
      TokenKind::RightCurly | TokenKind::RightParen | TokenKind::RightSquare => {
        bracket_count -= 1;
      }
      _ => {}
    }
  }

  bracket_count < 1
}
