//! Test fixtures for argument types that the crate does not ship.
//!
//! Enabled for unit tests and, through the `test-helpers` feature, for the
//! integration tests.

use sea_query::Value;

use crate::value::{AccessorError, Accessors, Arg, Argument, Sequence, ValueAccessor};

/// Nullable string wrapper: binds the string when `valid`, NULL otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NullString {
    pub string: String,
    pub valid: bool,
}

impl NullString {
    pub fn valid(s: &str) -> Self {
        Self {
            string: s.to_string(),
            valid: true,
        }
    }

    pub fn null() -> Self {
        Self::default()
    }
}

impl ValueAccessor for NullString {
    fn value(&self) -> Result<Value, AccessorError> {
        Ok(if self.valid {
            Value::from(self.string.clone())
        } else {
            Value::String(None)
        })
    }
}

impl Argument for NullString {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Accessor(self)
    }
}

impl Argument for [NullString] {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Elements(Box::new(Accessors(self)))
    }
}

/// Accessor whose value is itself a byte string.
#[derive(Debug, Clone)]
pub struct Blob(pub Vec<u8>);

impl ValueAccessor for Blob {
    fn value(&self) -> Result<Value, AccessorError> {
        Ok(Value::from(self.0.clone()))
    }
}

impl Argument for Blob {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Accessor(self)
    }
}

/// Accessor that always fails.
#[derive(Debug, Clone, Copy)]
pub struct Unloaded;

impl ValueAccessor for Unloaded {
    fn value(&self) -> Result<Value, AccessorError> {
        Err("value not loaded".into())
    }
}

impl Argument for Unloaded {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Accessor(self)
    }
}

impl Argument for [Unloaded] {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Elements(Box::new(Accessors(self)))
    }
}

/// A custom collection read through `Sequence`: ids stored offset by a base.
#[derive(Debug, Clone)]
pub struct OffsetIds {
    pub base: i32,
    pub offsets: Vec<i32>,
}

impl Sequence for &OffsetIds {
    fn len(&self) -> usize {
        self.offsets.len()
    }

    fn element(&self, index: usize) -> Value {
        Value::from(self.base + self.offsets[index])
    }
}

impl Argument for OffsetIds {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Elements(Box::new(self))
    }
}
