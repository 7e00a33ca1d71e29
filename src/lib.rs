//! # Lifeguard QP
//!
//! `IN (?)` expansion for positional-placeholder queries.
//!
//! Given a query using `?` and a list of arguments, some of them sequences, the
//! expander rewrites each sequence's placeholder into one `?` per element and
//! flattens the arguments into a `sea_query::Value` list in the same order. The
//! values can be converted into PostgreSQL `ToSql` parameters with
//! [`with_converted_params`]; the query keeps its `?` placeholders. Nothing here
//! talks to a database.
//!
//! See [README on GitHub](https://github.com/microscaler/lifeguard)

pub mod config;
mod macros;
pub mod query;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
pub mod utils;
pub mod validation;
pub mod value;

pub use config::ExpandConfig;
pub use query::{expand, with_converted_params, ConvertError, ExpandError, Expander};
pub use validation::{ValidationError, ValidationFunc, Validations};
pub use value::{AccessorError, Accessors, Arg, Argument, Sequence, ValueAccessor};
