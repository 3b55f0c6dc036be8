//! # Builtin functions
//! Native functions exposed to Monkey programs.
//!
//! The compiler registers these names at startup and the VM looks them up by
//! index with `OpGetBuiltin`, so the order of [BUILTINS] is part of the
//! bytecode contract. Errors from builtins are ordinary [Value::Error]
//! values which flow through the stack like any other value.

use crate::object::{Builtin, Value};
use std::rc::Rc;

/// The builtin functions, in registration order
pub static BUILTINS: [Builtin; 6] = [
  Builtin {
    name: "len",
    func: len,
  },
  Builtin {
    name: "puts",
    func: puts,
  },
  Builtin {
    name: "first",
    func: first,
  },
  Builtin {
    name: "last",
    func: last,
  },
  Builtin {
    name: "rest",
    func: rest,
  },
  Builtin {
    name: "push",
    func: push,
  },
];

fn error(message: String) -> Option<Value> {
  Some(Value::Error(message.into()))
}

fn wrong_argument_count(got: usize, want: usize) -> Option<Value> {
  error(format!("wrong number of arguments. got={got}, want={want}"))
}

/// The number of elements in an array, or bytes in a string
fn len(arguments: &[Value]) -> Option<Value> {
  let [argument] = arguments else {
    return wrong_argument_count(arguments.len(), 1);
  };

  match argument {
    #[allow(clippy::cast_possible_wrap)]
    Value::String(string) => Some(Value::Integer(string.len() as i64)),
    #[allow(clippy::cast_possible_wrap)]
    Value::Array(elements) => Some(Value::Integer(elements.len() as i64)),
    value => error(format!(
      "argument to `len` not supported, got {}",
      value.type_name()
    )),
  }
}

/// Print each argument on its own line
fn puts(arguments: &[Value]) -> Option<Value> {
  for argument in arguments {
    println!("{argument}");
  }

  None
}

fn first(arguments: &[Value]) -> Option<Value> {
  let [argument] = arguments else {
    return wrong_argument_count(arguments.len(), 1);
  };

  let Value::Array(elements) = argument else {
    return error(format!(
      "argument to `first` must be ARRAY, got {}",
      argument.type_name()
    ));
  };

  elements.first().cloned().or(Some(Value::Null))
}

fn last(arguments: &[Value]) -> Option<Value> {
  let [argument] = arguments else {
    return wrong_argument_count(arguments.len(), 1);
  };

  let Value::Array(elements) = argument else {
    return error(format!(
      "argument to `last` must be ARRAY, got {}",
      argument.type_name()
    ));
  };

  elements.last().cloned().or(Some(Value::Null))
}

/// A new array containing all but the first element
fn rest(arguments: &[Value]) -> Option<Value> {
  let [argument] = arguments else {
    return wrong_argument_count(arguments.len(), 1);
  };

  let Value::Array(elements) = argument else {
    return error(format!(
      "argument to `rest` must be ARRAY, got {}",
      argument.type_name()
    ));
  };

  if elements.is_empty() {
    return Some(Value::Null);
  }

  Some(Value::Array(Rc::new(elements[1..].to_vec())))
}

/// A new array with a value appended
fn push(arguments: &[Value]) -> Option<Value> {
  let [argument, value] = arguments else {
    return wrong_argument_count(arguments.len(), 2);
  };

  let Value::Array(elements) = argument else {
    return error(format!(
      "argument to `push` must be ARRAY, got {}",
      argument.type_name()
    ));
  };

  let mut elements = elements.as_ref().clone();
  elements.push(value.clone());

  Some(Value::Array(Rc::new(elements)))
}
