//! Macros for building argument lists.

/// Expand a query with any mix of arguments, without spelling out `&dyn Argument`.
///
/// ```rust
/// use lifeguard_qp::expand;
///
/// let ids = vec![3i64, 5, 8];
/// let (sql, values) = expand!("id IN (?) AND kind = ?", ids, "post").unwrap();
/// assert_eq!(sql, "id IN (?, ?, ?) AND kind = ?");
/// assert_eq!(values.len(), 4);
/// ```
#[macro_export]
macro_rules! expand {
    ($query:expr $(, $arg:expr)* $(,)?) => {
        $crate::expand($query, &[$(&$arg as &dyn $crate::Argument),*])
    };
}
