//! Argument model for placeholder expansion
//!
//! This module describes what can be bound to a `?` placeholder and how the
//! expander sees it.
//!
//! ## Traits
//!
//! - **`Argument`** - Exposes an argument as an [`Arg`] view (scalar, bytes, sequence, accessor)
//! - **`Sequence`** - Indexed element access for collections without a fast path
//! - **`ValueAccessor`** - Opt-in capability for wrappers that produce their own value

pub mod accessor;
pub mod argument;
pub mod sequence;

pub use accessor::{null_value, AccessorError, Accessors, ValueAccessor};
pub use argument::{Arg, Argument};
pub use sequence::Sequence;
