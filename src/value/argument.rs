//! `Argument` trait and its raw view, `Arg`
//!
//! Every value passed to the expander is seen through [`Argument::to_arg`], which
//! tells the expander what the argument *is* without the expander having to inspect
//! types at rewrite time:
//!
//! - plain scalars (`i64`, `&str`, `Uuid`, `Option<String>`, `sea_query::Value`, ...)
//! - byte strings (`[u8]`, `Vec<u8>`), which are complete driver values
//! - sequences, with fast paths for `Value`, `i64` and `String` elements
//! - value accessors, which produce a substitute value on demand
//!
//! References, boxes, `Vec`s and arrays forward to the type they wrap, so `&ids`,
//! `&&ids`, `vec![1, 2]` and `[1, 2]` all classify the same way.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use sea_query::Value;
use uuid::Uuid;

use crate::value::{Sequence, ValueAccessor};

/// What an argument looks like before classification.
pub enum Arg<'a> {
    /// A single driver value.
    Scalar(Value),
    /// A byte string. Bound as one `Bytes` value, never expanded.
    Bytes(&'a [u8]),
    /// Sequence of already-built driver values.
    Values(&'a [Value]),
    /// Sequence of integers.
    Ints(&'a [i64]),
    /// Sequence of strings.
    Strings(&'a [String]),
    /// Any other sequence, read element by element.
    Elements(Box<dyn Sequence + 'a>),
    /// A wrapper that produces its own driver value.
    Accessor(&'a dyn ValueAccessor),
}

impl std::fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arg::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
            Arg::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Arg::Values(values) => f.debug_tuple("Values").field(&values.len()).finish(),
            Arg::Ints(ints) => f.debug_tuple("Ints").field(&ints.len()).finish(),
            Arg::Strings(strings) => f.debug_tuple("Strings").field(&strings.len()).finish(),
            Arg::Elements(seq) => f.debug_tuple("Elements").field(&seq.len()).finish(),
            Arg::Accessor(_) => f.write_str("Accessor"),
        }
    }
}

/// A value that can be bound to a `?` placeholder.
///
/// Implement this for your own types by returning [`Arg::Accessor`] (for wrappers
/// implementing [`ValueAccessor`]) or [`Arg::Elements`] (for collections
/// implementing [`Sequence`]).
pub trait Argument {
    fn to_arg(&self) -> Arg<'_>;
}

impl<T: Argument + ?Sized> Argument for &T {
    fn to_arg(&self) -> Arg<'_> {
        (**self).to_arg()
    }
}

impl<T: Argument + ?Sized> Argument for Box<T> {
    fn to_arg(&self) -> Arg<'_> {
        (**self).to_arg()
    }
}

impl<T> Argument for Vec<T>
where
    [T]: Argument,
{
    fn to_arg(&self) -> Arg<'_> {
        self.as_slice().to_arg()
    }
}

impl<T, const N: usize> Argument for [T; N]
where
    [T]: Argument,
{
    fn to_arg(&self) -> Arg<'_> {
        self.as_slice().to_arg()
    }
}

impl Argument for Value {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Scalar(self.clone())
    }
}

impl Argument for str {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Scalar(Value::from(self))
    }
}

// `[u8]` is a driver value in its own right (bytea), not a list of tiny ints.
impl Argument for [u8] {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Bytes(self)
    }
}

impl Argument for [Value] {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Values(self)
    }
}

impl Argument for [i64] {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Ints(self)
    }
}

impl Argument for [String] {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Strings(self)
    }
}

impl<'s> Argument for [&'s str] {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Elements(Box::new(self))
    }
}

macro_rules! impl_scalar_argument {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Argument for $ty {
                #[allow(clippy::clone_on_copy)]
                fn to_arg(&self) -> Arg<'_> {
                    Arg::Scalar(Value::from(self.clone()))
                }
            }
        )*
    };
}

macro_rules! impl_elements_argument {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Argument for [$ty] {
                fn to_arg(&self) -> Arg<'_> {
                    Arg::Elements(Box::new(self))
                }
            }
        )*
    };
}

impl_scalar_argument!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    String,
    Uuid,
    Decimal,
    NaiveDate,
    NaiveTime,
    NaiveDateTime,
    DateTime<Utc>,
    serde_json::Value,
    Option<bool>,
    Option<i32>,
    Option<i64>,
    Option<f64>,
    Option<String>,
    Option<Uuid>,
);

impl_elements_argument!(
    bool,
    i8,
    i16,
    i32,
    u16,
    u32,
    u64,
    f32,
    f64,
    Uuid,
    Decimal,
    NaiveDate,
    NaiveTime,
    NaiveDateTime,
    DateTime<Utc>,
    serde_json::Value,
    Option<bool>,
    Option<i32>,
    Option<i64>,
    Option<f64>,
    Option<String>,
    Option<Uuid>,
);
