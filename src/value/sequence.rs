//! `Sequence` trait: generic element access for expandable arguments
//!
//! The expander has fast paths for slices of `Value`, `i64` and `String`. Every other
//! collection is read through this trait, one element at a time.
//!
//! Slices of any `Clone + Into<Value>` element implement it through `&[T]`. A custom
//! collection implements it for a reference to itself and returns
//! `Arg::Elements(Box::new(self))` from `Argument::to_arg`.

use sea_query::Value;

/// Indexed, length-known view over a collection of bindable elements.
pub trait Sequence {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Element at `index` as a driver value. `index` is always `< len()`.
    fn element(&self, index: usize) -> Value;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for &[T]
where
    T: Clone + Into<Value>,
{
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn element(&self, index: usize) -> Value {
        self[index].clone().into()
    }
}
