use std::collections::HashMap;

use crate::{error::EvalError, util::predicates::is_legal_name};

/// The scope a statement executes in.
///
/// Top-level statements run in [`Scope::Global`]; statements executed on
/// behalf of a named owner (such as a function invocation binding its
/// arguments) run in a [`Scope::Named`] scope keyed by that owner's name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// The program-wide scope.
    Global,
    /// A scope owned by a named entity, falling back to global on reads.
    Named(String),
}

/// A stored variable value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single number.
    Scalar(f64),
    /// A fixed-size numeric array.
    Array(Vec<f64>),
}

/// The declared numeric kind of a variable.
///
/// The kind is fixed at declaration time and re-applied on every write, so
/// an `int` variable stays integral no matter what is assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumKind {
    /// Integer storage; assigned values truncate toward zero.
    Int,
    /// Floating-point storage; assigned values are kept as-is.
    Float,
}

impl NumKind {
    /// Coerces a value to this kind.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Int   => value.trunc(),
            Self::Float => value,
        }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    value: Value,
    kind:  NumKind,
}

/// All scalar and array variables of a running program.
///
/// Variables live either in the global map or in a per-owner local map.
/// Reads in a named scope fall back to the global map when the local map
/// does not hold the name; writes land in the nearest map that already
/// holds it.
#[derive(Debug, Default)]
pub struct VariableStore {
    globals: HashMap<String, Slot>,
    locals:  HashMap<String, HashMap<String, Slot>>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a variable in the given scope, overwriting any previous
    /// declaration of the same name in that scope.
    pub fn define(&mut self, name: &str, scope: &Scope, value: Value, kind: NumKind) {
        let value = match value {
            Value::Scalar(v)       => Value::Scalar(kind.apply(v)),
            Value::Array(elements) => {
                Value::Array(elements.into_iter().map(|v| kind.apply(v)).collect())
            },
        };
        let slot = Slot { value, kind };

        match scope {
            Scope::Global       => {
                self.globals.insert(name.to_owned(), slot);
            },
            Scope::Named(owner) => {
                self.locals
                    .entry(owner.clone())
                    .or_default()
                    .insert(name.to_owned(), slot);
            },
        }
    }

    /// Reads a variable, falling back from a named scope to the global
    /// scope.
    #[must_use]
    pub fn get(&self, name: &str, scope: &Scope) -> Option<&Value> {
        if let Scope::Named(owner) = scope
            && let Some(slot) = self.locals.get(owner).and_then(|map| map.get(name))
        {
            return Some(&slot.value);
        }
        self.globals.get(name).map(|slot| &slot.value)
    }

    /// Reads a scalar variable; array variables read as `None`.
    #[must_use]
    pub fn get_scalar(&self, name: &str, scope: &Scope) -> Option<f64> {
        match self.get(name, scope) {
            Some(Value::Scalar(v)) => Some(*v),
            _                      => None,
        }
    }

    /// Tests whether the name resolves in the given scope.
    #[must_use]
    pub fn exists(&self, name: &str, scope: &Scope) -> bool {
        self.get(name, scope).is_some()
    }

    /// Writes a scalar variable into the nearest scope that already holds
    /// it, applying the kind it was declared with.
    ///
    /// Returns `false` when the name is not declared anywhere visible from
    /// the scope; assignment to undeclared names is rejected, not an
    /// implicit declaration.
    pub fn set(&mut self, name: &str, scope: &Scope, value: f64) -> bool {
        if let Scope::Named(owner) = scope
            && let Some(slot) = self.locals.get_mut(owner).and_then(|map| map.get_mut(name))
        {
            slot.value = Value::Scalar(slot.kind.apply(value));
            return true;
        }
        if let Some(slot) = self.globals.get_mut(name) {
            slot.value = Value::Scalar(slot.kind.apply(value));
            return true;
        }
        false
    }

    /// Reads one element of an array variable.
    ///
    /// # Errors
    /// - [`EvalError::UnknownVariable`] when the name does not resolve.
    /// - [`EvalError::NotAnArray`] when it resolves to a scalar.
    /// - [`EvalError::IndexOutOfBounds`] when the index is past the end.
    pub fn get_array_element(&self, name: &str, index: usize, scope: &Scope) -> Result<f64, EvalError> {
        match self.get(name, scope) {
            Some(Value::Array(elements)) => {
                elements.get(index)
                        .copied()
                        .ok_or(EvalError::IndexOutOfBounds { size: elements.len(), found: index })
            },
            Some(Value::Scalar(_)) => Err(EvalError::NotAnArray { name: name.to_owned() }),
            None                   => Err(EvalError::UnknownVariable { name: name.to_owned() }),
        }
    }

    /// Writes one element of an array variable, applying its declared kind.
    ///
    /// # Errors
    /// Same conditions as [`VariableStore::get_array_element`].
    pub fn set_array_element(&mut self, name: &str, index: usize, scope: &Scope, value: f64) -> Result<(), EvalError> {
        let slot = match scope {
            Scope::Named(owner)
                if self.locals
                       .get(owner)
                       .is_some_and(|map| map.contains_key(name)) => {
                self.locals
                    .get_mut(owner)
                    .and_then(|map| map.get_mut(name))
            },
            _ => self.globals.get_mut(name),
        };
        let Some(slot) = slot else {
            return Err(EvalError::UnknownVariable { name: name.to_owned() });
        };

        match &mut slot.value {
            Value::Array(elements) => {
                let size = elements.len();
                let Some(element) = elements.get_mut(index) else {
                    return Err(EvalError::IndexOutOfBounds { size, found: index });
                };
                *element = slot.kind.apply(value);
                Ok(())
            },
            Value::Scalar(_) => Err(EvalError::NotAnArray { name: name.to_owned() }),
        }
    }
}

/// Splits an indexed assignment target such as `arr[i+1]` into the array
/// name and the raw index expression.
///
/// Returns `None` unless the token is a legal name directly followed by one
/// balanced bracket pair that closes at the end of the token.
///
/// # Example
/// ```
/// use bhask::interpreter::store::detect_indexed_target;
///
/// assert_eq!(detect_indexed_target("arr[i+1]"),
///            Some(("arr".to_owned(), "i+1".to_owned())));
/// assert_eq!(detect_indexed_target("arr[0]+1"), None);
/// assert_eq!(detect_indexed_target("arr"),      None);
/// ```
#[must_use]
pub fn detect_indexed_target(token: &str) -> Option<(String, String)> {
    if !token.ends_with(']') {
        return None;
    }
    let open = token.find('[')?;
    let name = &token[..open];
    if !is_legal_name(name) {
        return None;
    }

    let mut depth = 0i32;
    for (i, c) in token.char_indices().skip(open) {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    // The balancing bracket must be the last character,
                    // otherwise the token is an expression, not a target.
                    if i == token.len() - 1 {
                        return Some((name.to_owned(), token[open + 1..i].to_owned()));
                    }
                    return None;
                }
            },
            _ => {},
        }
    }
    None
}
