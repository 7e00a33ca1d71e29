//! Error type for placeholder expansion.

/// Expansion failure. No partial query or value list is produced alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// A sequence argument had no elements (`IN ()` has no valid spelling)
    EmptySequence { position: usize },
    /// The query has more `?` than there are arguments
    TooManyPlaceholders { arguments: usize },
    /// The query has fewer `?` than there are arguments
    TooFewPlaceholders { placeholders: usize, arguments: usize },
    /// The flattened value list is larger than the configured bind limit
    TooManyBindValues { count: usize, max: usize },
}

impl std::fmt::Display for ExpandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpandError::EmptySequence { position } => {
                write!(f, "empty sequence passed to 'in' query (argument {position})")
            }
            ExpandError::TooManyPlaceholders { arguments } => {
                write!(f, "number of placeholders exceeds arguments ({arguments})")
            }
            ExpandError::TooFewPlaceholders {
                placeholders,
                arguments,
            } => write!(
                f,
                "number of placeholders ({placeholders}) less than number of arguments ({arguments})"
            ),
            ExpandError::TooManyBindValues { count, max } => {
                write!(f, "expanded query binds {count} values, limit is {max}")
            }
        }
    }
}

impl std::error::Error for ExpandError {}
