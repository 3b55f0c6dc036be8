//! # Objects
//! The tagged runtime values which live on the VM's stack.
//!
//! Heap-backed values (strings, arrays, hashes, functions, closures) are
//! shared through [`Rc`]; cloning a [Value] is always cheap. Arrays, hashes,
//! closures, and functions compare by reference identity, matching the
//! behaviour of `OpEqual` in the virtual machine.

use crate::code::Instructions;
use rustc_hash::{FxHashMap, FxHasher};
use std::hash::Hasher;
use std::rc::Rc;
use std::{fmt, ptr};

/// A Monkey runtime value
#[derive(Clone, Debug)]
pub enum Value {
  Integer(i64),
  Boolean(bool),
  Null,
  String(Rc<str>),
  Array(Rc<Vec<Value>>),
  Hash(Rc<FxHashMap<HashKey, HashPair>>),
  Function(Rc<CompiledFunction>),
  Closure(Rc<Closure>),
  Builtin(&'static Builtin),
  Error(Rc<str>),
}
impl Value {
  /// The name of the value's type, as used in error messages
  #[must_use]
  pub fn type_name(&self) -> &'static str {
    match self {
      Self::Integer(_) => "INTEGER",
      Self::Boolean(_) => "BOOLEAN",
      Self::Null => "NULL",
      Self::String(_) => "STRING",
      Self::Array(_) => "ARRAY",
      Self::Hash(_) => "HASH",
      Self::Function(_) => "COMPILED_FUNCTION",
      Self::Closure(_) => "CLOSURE",
      Self::Builtin(_) => "BUILTIN",
      Self::Error(_) => "ERROR",
    }
  }

  /// Is the value truthy?
  ///
  /// Only `false` and `null` are not truthy.
  #[must_use]
  pub fn is_truthy(&self) -> bool {
    match self {
      Self::Boolean(value) => *value,
      Self::Null => false,
      _ => true,
    }
  }

  /// Equality as seen by `OpEqual`.
  ///
  /// Integers, booleans, strings, and errors compare by value; everything
  /// else compares by reference identity.
  #[must_use]
  pub fn equals(&self, other: &Self) -> bool {
    match (self, other) {
      (Self::Integer(left), Self::Integer(right)) => left == right,
      (Self::Boolean(left), Self::Boolean(right)) => left == right,
      (Self::Null, Self::Null) => true,
      (Self::String(left), Self::String(right)) => left == right,
      (Self::Error(left), Self::Error(right)) => left == right,
      (Self::Array(left), Self::Array(right)) => Rc::ptr_eq(left, right),
      (Self::Hash(left), Self::Hash(right)) => Rc::ptr_eq(left, right),
      (Self::Function(left), Self::Function(right)) => Rc::ptr_eq(left, right),
      (Self::Closure(left), Self::Closure(right)) => Rc::ptr_eq(left, right),
      (Self::Builtin(left), Self::Builtin(right)) => ptr::eq(*left, *right),
      _ => false,
    }
  }

  /// Derive the key under which this value is stored in a hash.
  ///
  /// Only integers, booleans, and strings are hashable.
  #[must_use]
  pub fn hash_key(&self) -> Option<HashKey> {
    match self {
      #[allow(clippy::cast_sign_loss)]
      Self::Integer(value) => Some(HashKey {
        kind: HashKind::Integer,
        value: *value as u64,
      }),
      Self::Boolean(value) => Some(HashKey {
        kind: HashKind::Boolean,
        value: (*value).into(),
      }),
      Self::String(value) => {
        let mut hasher = FxHasher::default();
        hasher.write(value.as_bytes());

        Some(HashKey {
          kind: HashKind::String,
          value: hasher.finish(),
        })
      }
      _ => None,
    }
  }
}
impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Integer(value) => write!(f, "{value}"),
      Self::Boolean(value) => write!(f, "{value}"),
      Self::Null => f.write_str("null"),
      Self::String(value) => f.write_str(value),
      Self::Array(elements) => {
        f.write_str("[")?;
        for (index, element) in elements.iter().enumerate() {
          if index > 0 {
            f.write_str(", ")?;
          }
          write!(f, "{element}")?;
        }
        f.write_str("]")
      }
      Self::Hash(pairs) => {
        f.write_str("{")?;
        for (index, pair) in pairs.values().enumerate() {
          if index > 0 {
            f.write_str(", ")?;
          }
          write!(f, "{}: {}", pair.key, pair.value)?;
        }
        f.write_str("}")
      }
      Self::Function(_) => f.write_str("<compiled function>"),
      Self::Closure(_) => f.write_str("<closure>"),
      Self::Builtin(_) => f.write_str("builtin function"),
      Self::Error(message) => write!(f, "ERROR: {message}"),
    }
  }
}
impl PartialEq for Value {
  /// Structural equality, for assertions and constant comparison.
  ///
  /// The VM's `OpEqual` uses [`Value::equals`] instead, which compares
  /// collections by reference identity.
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Self::Integer(left), Self::Integer(right)) => left == right,
      (Self::Boolean(left), Self::Boolean(right)) => left == right,
      (Self::Null, Self::Null) => true,
      (Self::String(left), Self::String(right)) => left == right,
      (Self::Error(left), Self::Error(right)) => left == right,
      (Self::Array(left), Self::Array(right)) => left == right,
      (Self::Hash(left), Self::Hash(right)) => left == right,
      (Self::Function(left), Self::Function(right)) => left == right,
      (Self::Closure(left), Self::Closure(right)) => {
        left.function == right.function && left.free == right.free
      }
      (Self::Builtin(left), Self::Builtin(right)) => ptr::eq(*left, *right),
      _ => false,
    }
  }
}

/// The key of a hash entry: the value's type paired with a 64-bit hash
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HashKey {
  kind: HashKind,
  value: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum HashKind {
  Integer,
  Boolean,
  String,
}

/// A key-value entry of a hash, keeping the original key for display
#[derive(Clone, Debug, PartialEq)]
pub struct HashPair {
  pub key: Value,
  pub value: Value,
}

/// A function compiled to bytecode
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledFunction {
  pub instructions: Instructions,
  pub num_locals: usize,
  pub num_parameters: usize,
}

/// A function paired with the values it has captured from enclosing scopes
#[derive(Clone, Debug)]
pub struct Closure {
  pub function: Rc<CompiledFunction>,
  pub free: Vec<Value>,
}

/// A native function exposed to Monkey programs
pub struct Builtin {
  pub name: &'static str,
  pub func: fn(&[Value]) -> Option<Value>,
}
impl fmt::Debug for Builtin {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "<builtin {}>", self.name)
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn strings_with_equal_contents_share_hash_keys() {
    let one = Value::String("Hello World".into());
    let two = Value::String("Hello World".into());
    let other = Value::String("Goodbye".into());

    assert_eq!(one.hash_key(), two.hash_key());
    assert_ne!(one.hash_key(), other.hash_key());
  }

  #[test]
  fn hash_keys_distinguish_types() {
    let integer = Value::Integer(1);
    let boolean = Value::Boolean(true);

    assert_ne!(integer.hash_key(), boolean.hash_key());
  }

  #[test]
  fn only_integers_booleans_and_strings_are_hashable() {
    assert!(Value::Integer(1).hash_key().is_some());
    assert!(Value::Boolean(false).hash_key().is_some());
    assert!(Value::String("a".into()).hash_key().is_some());

    assert!(Value::Null.hash_key().is_none());
    assert!(Value::Array(Rc::new(vec![])).hash_key().is_none());
  }

  #[test]
  fn arrays_compare_by_identity()  {
    let elements = Rc::new(vec![Value::Integer(1)]);
    let one = Value::Array(Rc::clone(&elements));
    let two = Value::Array(elements);
    let fresh = Value::Array(Rc::new(vec![Value::Integer(1)]));

    assert!(one.equals(&two));
    assert!(!one.equals(&fresh));
  }

  #[test]
  fn strings_compare_by_contents() {
    let one = Value::String("hello".into());
    let two = Value::String("hello".into());

    assert!(one.equals(&two));
  }

  #[test]
  fn displays_values_as_source() {
    assert_eq!(Value::Integer(-5).to_string(), "-5");
    assert_eq!(Value::Boolean(true).to_string(), "true");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::String("hi".into()).to_string(), "hi");
    assert_eq!(Value::Error("boom".into()).to_string(), "ERROR: boom");

    let array = Value::Array(Rc::new(vec![Value::Integer(1), Value::String("two".into())]));
    assert_eq!(array.to_string(), "[1, two]");
  }

  #[test]
  fn truthiness() {
    assert!(Value::Integer(0).is_truthy());
    assert!(Value::String("".into()).is_truthy());
    assert!(Value::Boolean(true).is_truthy());

    assert!(!Value::Boolean(false).is_truthy());
    assert!(!Value::Null.is_truthy());
  }
}
