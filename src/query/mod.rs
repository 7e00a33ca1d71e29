//! Query rewriting: placeholder expansion and parameter conversion.

pub mod error;
pub mod expander;
mod flatten;
pub mod value_conversion;

pub use error::ExpandError;
pub use expander::{expand, Expander};
pub use value_conversion::{with_converted_params, ConvertError};
