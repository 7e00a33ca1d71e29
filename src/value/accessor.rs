//! `ValueAccessor` capability for wrapper types
//!
//! Some argument types are not driver values themselves but know how to produce one:
//! nullable wrappers, newtypes around domain ids, enums stored as text. Such types
//! implement [`ValueAccessor`] and expose it through [`Argument::to_arg`] by returning
//! [`Arg::Accessor`]. The expander always asks the accessor for its substitute value
//! before classifying the argument.
//!
//! ## Usage
//!
//! ```rust
//! use lifeguard_qp::{expand, Arg, Argument, AccessorError, ValueAccessor};
//! use sea_query::Value;
//!
//! struct Status(bool);
//!
//! impl ValueAccessor for Status {
//!     fn value(&self) -> Result<Value, AccessorError> {
//!         Ok(Value::from(if self.0 { "active" } else { "inactive" }))
//!     }
//! }
//!
//! impl Argument for Status {
//!     fn to_arg(&self) -> Arg<'_> {
//!         Arg::Accessor(self)
//!     }
//! }
//!
//! let (sql, values) = expand("status = ?", &[&Status(true)]).unwrap();
//! assert_eq!(sql, "status = ?");
//! assert_eq!(values, vec![Value::from("active")]);
//! ```
//!
//! [`Argument::to_arg`]: crate::value::Argument::to_arg
//! [`Arg::Accessor`]: crate::value::Arg::Accessor

use sea_query::Value;

use crate::value::Sequence;

/// Error returned by a [`ValueAccessor`].
///
/// The expander never propagates it; it is only logged.
pub type AccessorError = Box<dyn std::error::Error + Send + Sync>;

/// Optional capability: produce a substitute driver-level value on demand.
pub trait ValueAccessor {
    /// Return the value that should be bound in place of `self`.
    ///
    /// # Errors
    ///
    /// Implementations may fail; the expander discards the error and binds
    /// [`null_value`] instead.
    fn value(&self) -> Result<Value, AccessorError>;
}

/// SQL NULL as bound for an accessor that failed to produce a value.
///
/// `sea_query::Value` nulls are typed; an untyped NULL is spelled as a text null,
/// which PostgreSQL coerces to the column type on bind.
pub fn null_value() -> Value {
    Value::String(None)
}

/// Resolve an accessor to the value that gets classified.
pub(crate) fn resolve(accessor: &dyn ValueAccessor) -> Value {
    match accessor.value() {
        Ok(value) => value,
        Err(err) => {
            log::debug!("value accessor failed, binding NULL instead: {err}");
            null_value()
        }
    }
}

/// A slice of accessor types read as a [`Sequence`].
///
/// Each element goes through its accessor, with the same NULL-on-error rule as a
/// single accessor argument. Return it from `Argument::to_arg` for `[T]`:
/// `Arg::Elements(Box::new(Accessors(self)))`.
pub struct Accessors<'a, T>(pub &'a [T]);

impl<T: ValueAccessor> Sequence for Accessors<'_, T> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn element(&self, index: usize) -> Value {
        resolve(&self.0[index])
    }
}
