//! Sequence flattening into the output value list.

use sea_query::Value;

use crate::value::Sequence;

/// A classified sequence argument, borrowed from the caller.
pub(crate) enum SequenceRef<'a> {
    Values(&'a [Value]),
    Ints(&'a [i64]),
    Strings(&'a [String]),
    Elements(Box<dyn Sequence + 'a>),
}

impl SequenceRef<'_> {
    pub(crate) fn len(&self) -> usize {
        match self {
            SequenceRef::Values(values) => values.len(),
            SequenceRef::Ints(ints) => ints.len(),
            SequenceRef::Strings(strings) => strings.len(),
            SequenceRef::Elements(seq) => seq.len(),
        }
    }
}

/// Append the first `len` elements of `seq` to `target`, in order.
///
/// The typed slices are bulk appends; everything else goes through
/// [`Sequence::element`] one index at a time. The result is the same either way.
pub(crate) fn flatten(target: &mut Vec<Value>, seq: &SequenceRef<'_>, len: usize) {
    debug_assert_eq!(seq.len(), len);

    match seq {
        SequenceRef::Values(values) => target.extend_from_slice(&values[..len]),
        SequenceRef::Ints(ints) => target.extend(ints[..len].iter().map(|&i| Value::from(i))),
        SequenceRef::Strings(strings) => {
            target.extend(strings[..len].iter().map(|s| Value::from(s.clone())))
        }
        SequenceRef::Elements(seq) => {
            for index in 0..len {
                target.push(seq.element(index));
            }
        }
    }
}
