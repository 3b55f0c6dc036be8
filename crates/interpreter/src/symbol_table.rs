//! # Symbol table
//! Lexically nested name resolution for the compiler.
//!
//! Tables form a chain, one frame per function being compiled, linked to the
//! enclosing frame. Resolving a name which lives in an enclosing function
//! (but is neither global nor builtin) lifts it into this frame's free list,
//! which later determines the push order at the `OpClosure` site.

use rustc_hash::FxHashMap;
use smartstring::alias::String as SmartString;

/// Where a resolved name lives, and so how it is loaded
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SymbolScope {
  /// A top-level binding, stored in the VM's globals
  Global,
  /// A binding on the stack of the current function
  Local,
  /// A native function, loaded by its registration index
  Builtin,
  /// A value captured from an enclosing function
  Free,
  /// The name of the function currently being compiled, for self-reference
  Function,
}

/// A resolved name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
  pub name: SmartString,
  pub scope: SymbolScope,
  pub index: usize,
}

/// One frame of the symbol table chain
#[derive(Debug, Default)]
pub struct SymbolTable {
  outer: Option<Box<SymbolTable>>,

  store: FxHashMap<SmartString, Symbol>,
  definition_count: usize,
  free_symbols: Vec<Symbol>,
}
impl SymbolTable {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Create a new frame enclosed by `outer`
  #[must_use]
  pub fn enclosing(outer: SymbolTable) -> Self {
    Self {
      outer: Some(Box::new(outer)),
      ..Self::default()
    }
  }

  /// Discard this frame, returning the enclosing one
  ///
  /// # Panics
  /// Panics if this is the outermost frame
  #[must_use]
  pub fn into_outer(self) -> SymbolTable {
    *self.outer.expect("scope to have an outer scope")
  }

  /// Define a name in this frame, global in the outermost frame and local
  /// otherwise. Redefining a name shadows the previous binding.
  pub fn define(&mut self, name: &str) -> Symbol {
    let scope = if self.outer.is_none() {
      SymbolScope::Global
    } else {
      SymbolScope::Local
    };

    let symbol = Symbol {
      name: name.into(),
      scope,
      index: self.definition_count,
    };
    self.store.insert(symbol.name.clone(), symbol.clone());
    self.definition_count += 1;

    symbol
  }

  /// Register a builtin function under its fixed index
  pub fn define_builtin(&mut self, index: usize, name: &str) -> Symbol {
    let symbol = Symbol {
      name: name.into(),
      scope: SymbolScope::Builtin,
      index,
    };
    self.store.insert(symbol.name.clone(), symbol.clone());

    symbol
  }

  /// Bind the name of the function currently being compiled, so that it can
  /// refer to itself without capturing a free variable
  pub fn define_function_name(&mut self, name: &str) -> Symbol {
    let symbol = Symbol {
      name: name.into(),
      scope: SymbolScope::Function,
      index: 0,
    };
    self.store.insert(symbol.name.clone(), symbol.clone());

    symbol
  }

  fn define_free(&mut self, original: Symbol) -> Symbol {
    let symbol = Symbol {
      name: original.name.clone(),
      scope: SymbolScope::Free,
      index: self.free_symbols.len(),
    };
    self.free_symbols.push(original);
    self.store.insert(symbol.name.clone(), symbol.clone());

    symbol
  }

  /// Look up a name, innermost frame first.
  ///
  /// A hit in an enclosing frame which is neither global nor builtin is
  /// lifted into this frame's free list.
  pub fn resolve(&mut self, name: &str) -> Option<Symbol> {
    if let Some(symbol) = self.store.get(name) {
      return Some(symbol.clone());
    }

    let symbol = self.outer.as_mut()?.resolve(name)?;
    if symbol.scope == SymbolScope::Global || symbol.scope == SymbolScope::Builtin {
      return Some(symbol);
    }

    Some(self.define_free(symbol))
  }

  /// The enclosing-frame symbols captured by this frame, in capture order
  #[must_use]
  pub fn free_symbols(&self) -> &[Symbol] {
    &self.free_symbols
  }

  /// How many names have been defined in this frame
  #[must_use]
  pub fn definition_count(&self) -> usize {
    self.definition_count
  }
}
