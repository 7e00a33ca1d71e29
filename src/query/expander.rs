//! `IN (?)` placeholder expansion.
//!
//! Drivers bind one value per placeholder, so `WHERE id IN (?)` cannot take a list
//! directly. [`expand`] rewrites the query so each sequence argument gets one `?` per
//! element, and flattens the arguments into a single list in placeholder order:
//!
//! ```rust
//! use lifeguard_qp::expand;
//! use sea_query::Value;
//!
//! let ids = vec!["1".to_string(), "2".to_string()];
//! let (sql, values) = expand("id IN (?) AND status = ?", &[&ids, &"active"]).unwrap();
//!
//! assert_eq!(sql, "id IN (?, ?) AND status = ?");
//! assert_eq!(values, vec![Value::from("1"), Value::from("2"), Value::from("active")]);
//! ```
//!
//! The expansion is a single forward pass over the query text and the classified
//! arguments. When no argument is a sequence the query is returned borrowed and
//! untouched.

use std::borrow::Cow;

use sea_query::Value;

use crate::config::ExpandConfig;
use crate::query::error::ExpandError;
use crate::query::flatten::{flatten, SequenceRef};
use crate::value::accessor;
use crate::value::{Arg, Argument};

const PLACEHOLDER: char = '?';
const SEPARATOR: &str = ", ?";

/// One argument after classification. Sequences always have `len >= 1`.
enum Classified<'a> {
    Scalar(Value),
    Sequence { seq: SequenceRef<'a>, len: usize },
}

impl Classified<'_> {
    fn into_scalar(self) -> Option<Value> {
        match self {
            Classified::Scalar(value) => Some(value),
            Classified::Sequence { .. } => None,
        }
    }
}

/// Byte strings are complete driver values and bind as one `Bytes` scalar.
fn byte_sequence_as_scalar(bytes: &[u8]) -> Value {
    Value::from(bytes.to_vec())
}

fn classify(position: usize, arg: &dyn Argument) -> Result<Classified<'_>, ExpandError> {
    let seq = match arg.to_arg() {
        Arg::Scalar(value) => return Ok(Classified::Scalar(value)),
        // The substitute is a driver value, which never expands
        Arg::Accessor(wrapper) => return Ok(Classified::Scalar(accessor::resolve(wrapper))),
        Arg::Bytes(bytes) => return Ok(Classified::Scalar(byte_sequence_as_scalar(bytes))),
        Arg::Values(values) => SequenceRef::Values(values),
        Arg::Ints(ints) => SequenceRef::Ints(ints),
        Arg::Strings(strings) => SequenceRef::Strings(strings),
        Arg::Elements(elements) => SequenceRef::Elements(elements),
    };

    let len = seq.len();
    if len == 0 {
        return Err(ExpandError::EmptySequence { position });
    }
    Ok(Classified::Sequence { seq, len })
}

fn count_placeholders(query: &str) -> usize {
    query.matches(PLACEHOLDER).count()
}

/// Placeholder expander with its configuration.
#[derive(Debug, Clone, Default)]
pub struct Expander {
    config: ExpandConfig,
}

impl Expander {
    pub fn new(config: ExpandConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExpandConfig {
        &self.config
    }

    /// Expand sequence arguments in `query` and flatten `args`.
    ///
    /// Returns the rewritten query and one value per placeholder in it.
    ///
    /// # Errors
    ///
    /// - [`ExpandError::EmptySequence`] if a sequence argument has no elements
    /// - [`ExpandError::TooManyPlaceholders`] / [`ExpandError::TooFewPlaceholders`] if
    ///   the number of `?` does not match the arguments. Without `strict_placeholders`
    ///   this is only checked when at least one argument is a sequence.
    /// - [`ExpandError::TooManyBindValues`] if `max_bind_values` is set and the flattened
    ///   list exceeds it
    pub fn expand<'q>(
        &self,
        query: &'q str,
        args: &[&dyn Argument],
    ) -> Result<(Cow<'q, str>, Vec<Value>), ExpandError> {
        let mut records = Vec::with_capacity(args.len());
        let mut flat_count = 0;
        let mut any_sequences = false;

        for (position, arg) in args.iter().enumerate() {
            let record = classify(position, *arg)?;
            match &record {
                Classified::Scalar(_) => flat_count += 1,
                Classified::Sequence { len, .. } => {
                    any_sequences = true;
                    flat_count += *len;
                }
            }
            records.push(record);
        }

        if let Some(max) = self.config.max_bind_values {
            if flat_count > max {
                return Err(ExpandError::TooManyBindValues {
                    count: flat_count,
                    max,
                });
            }
        }

        if !any_sequences {
            if self.config.strict_placeholders {
                let placeholders = count_placeholders(query);
                if placeholders > records.len() {
                    return Err(ExpandError::TooManyPlaceholders {
                        arguments: records.len(),
                    });
                }
                if placeholders < records.len() {
                    return Err(ExpandError::TooFewPlaceholders {
                        placeholders,
                        arguments: records.len(),
                    });
                }
            }
            // Every record is a scalar here
            let values = records.into_iter().filter_map(Classified::into_scalar).collect();
            return Ok((Cow::Borrowed(query), values));
        }

        let (sql, values) = rewrite(query, records, flat_count)?;
        log::debug!(
            "expanded {} argument(s) into {} bind value(s)",
            args.len(),
            values.len()
        );
        Ok((Cow::Owned(sql), values))
    }
}

/// Single forward pass over `query`, consuming one record per placeholder.
///
/// Text before a scalar's placeholder is not copied right away; it is flushed
/// together with the next sequence's text or with the tail.
fn rewrite(
    query: &str,
    records: Vec<Classified<'_>>,
    flat_count: usize,
) -> Result<(String, Vec<Value>), ExpandError> {
    let arguments = records.len();
    let mut sql = String::with_capacity(query.len() + SEPARATOR.len() * flat_count);
    let mut values = Vec::with_capacity(flat_count);
    let mut records = records.into_iter();
    let mut consumed = 0;

    // `rest` is the source text not yet copied; `offset` skips scalars already seen in it
    let mut rest = query;
    let mut offset = 0;

    while let Some(i) = rest[offset..].find(PLACEHOLDER) {
        let end = offset + i + PLACEHOLDER.len_utf8();
        let record = records
            .next()
            .ok_or(ExpandError::TooManyPlaceholders { arguments })?;
        consumed += 1;

        match record {
            Classified::Scalar(value) => {
                values.push(value);
                offset = end;
            }
            Classified::Sequence { seq, len } => {
                sql.push_str(&rest[..end]);
                for _ in 1..len {
                    sql.push_str(SEPARATOR);
                }
                flatten(&mut values, &seq, len);
                rest = &rest[end..];
                offset = 0;
            }
        }
    }

    sql.push_str(rest);

    if consumed < arguments {
        return Err(ExpandError::TooFewPlaceholders {
            placeholders: consumed,
            arguments,
        });
    }

    Ok((sql, values))
}

/// Expand with the default [`ExpandConfig`].
///
/// See [`Expander::expand`].
pub fn expand<'q>(
    query: &'q str,
    args: &[&dyn Argument],
) -> Result<(Cow<'q, str>, Vec<Value>), ExpandError> {
    Expander::default().expand(query, args)
}
