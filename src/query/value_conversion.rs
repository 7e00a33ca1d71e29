//! Conversion of expanded values into PostgreSQL bind parameters.
//!
//! [`with_converted_params`] turns the flattened `sea_query::Value` list produced by
//! [`expand`](crate::expand) into `ToSql` trait objects and hands them to a closure:
//!
//! ```rust
//! use lifeguard_qp::{expand, with_converted_params};
//!
//! let (_sql, values) = expand("id IN (?)", &[&[1i64, 2, 3]]).unwrap();
//! let bound = with_converted_params(&values, |params| params.len()).unwrap();
//! assert_eq!(bound, 3);
//! ```
//!
//! Only the values are converted. The expanded query still uses `?`, which PostgreSQL
//! does not accept; rewriting it to `$1, $2, ...` is left to the caller's query layer.
//!
//! The converted parameters are owned by this function, so references handed to the
//! closure stay valid for the whole call.

use std::error::Error;

use bytes::BytesMut;
use postgres_types::{to_sql_checked, IsNull, ToSql, Type};
use sea_query::Value;

type Param = Box<dyn ToSql + Sync + Send>;

/// Error converting a `Value` into a bind parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The value kind has no `ToSql` mapping here
    Unsupported(String),
    /// `BigUnsigned` larger than `i64::MAX`
    UnsignedOverflow(u64),
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::Unsupported(value) => {
                write!(f, "Unsupported value type in query: {value}")
            }
            ConvertError::UnsignedOverflow(u) => write!(
                f,
                "BigUnsigned value {u} exceeds i64::MAX ({}), cannot be safely cast to i64",
                i64::MAX
            ),
        }
    }
}

impl std::error::Error for ConvertError {}

/// Untyped SQL NULL. Accepted for any column type.
#[derive(Debug)]
struct Null;

impl ToSql for Null {
    fn to_sql(&self, _ty: &Type, _out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        Ok(IsNull::Yes)
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}

/// Convert expanded values to `ToSql` parameters and run `f` with them.
///
/// # Errors
///
/// Returns [`ConvertError`] if a value has no PostgreSQL mapping or an unsigned
/// value does not fit `i64`. `f` is not called in that case.
pub fn with_converted_params<F, R>(values: &[Value], f: F) -> Result<R, ConvertError>
where
    F: FnOnce(&[&(dyn ToSql + Sync)]) -> R,
{
    let owned = values.iter().map(to_param).collect::<Result<Vec<Param>, _>>()?;
    let params: Vec<&(dyn ToSql + Sync)> = owned
        .iter()
        .map(|p| p.as_ref() as &(dyn ToSql + Sync))
        .collect();
    Ok(f(&params))
}

fn to_param(value: &Value) -> Result<Param, ConvertError> {
    // Some variants are boxed inside `Value`; the typed `let` bindings deref either way.
    let param: Param = match value {
        Value::Bool(Some(b)) => Box::new(*b),
        Value::TinyInt(Some(i)) => Box::new(i32::from(*i)),
        Value::SmallInt(Some(i)) => Box::new(i32::from(*i)),
        Value::Int(Some(i)) => Box::new(*i),
        Value::BigInt(Some(i)) => Box::new(*i),
        Value::TinyUnsigned(Some(u)) => Box::new(i32::from(*u)),
        Value::SmallUnsigned(Some(u)) => Box::new(i32::from(*u)),
        Value::Unsigned(Some(u)) => Box::new(i64::from(*u)),
        Value::BigUnsigned(Some(u)) => {
            let signed = i64::try_from(*u).map_err(|_| ConvertError::UnsignedOverflow(*u))?;
            Box::new(signed)
        }
        Value::Float(Some(f)) => Box::new(*f),
        Value::Double(Some(d)) => Box::new(*d),
        Value::Char(Some(c)) => Box::new(c.to_string()),
        Value::String(Some(s)) => {
            let s: &String = s;
            Box::new(s.clone())
        }
        Value::Bytes(Some(b)) => {
            let b: &Vec<u8> = b;
            Box::new(b.clone())
        }
        Value::Json(Some(j)) => {
            let j: &serde_json::Value = j;
            Box::new(j.clone())
        }
        Value::Uuid(Some(u)) => {
            let u: &uuid::Uuid = u;
            Box::new(*u)
        }
        Value::Decimal(Some(d)) => {
            let d: &rust_decimal::Decimal = d;
            Box::new(*d)
        }
        Value::ChronoDate(Some(d)) => {
            let d: &chrono::NaiveDate = d;
            Box::new(*d)
        }
        Value::ChronoTime(Some(t)) => {
            let t: &chrono::NaiveTime = t;
            Box::new(*t)
        }
        Value::ChronoDateTime(Some(dt)) => {
            let dt: &chrono::NaiveDateTime = dt;
            Box::new(*dt)
        }
        Value::ChronoDateTimeUtc(Some(dt)) => {
            let dt: &chrono::DateTime<chrono::Utc> = dt;
            Box::new(*dt)
        }
        Value::Bool(None)
        | Value::TinyInt(None)
        | Value::SmallInt(None)
        | Value::Int(None)
        | Value::BigInt(None)
        | Value::TinyUnsigned(None)
        | Value::SmallUnsigned(None)
        | Value::Unsigned(None)
        | Value::BigUnsigned(None)
        | Value::Float(None)
        | Value::Double(None)
        | Value::Char(None)
        | Value::String(None)
        | Value::Bytes(None)
        | Value::Json(None)
        | Value::Uuid(None)
        | Value::Decimal(None)
        | Value::ChronoDate(None)
        | Value::ChronoTime(None)
        | Value::ChronoDateTime(None)
        | Value::ChronoDateTimeUtc(None) => Box::new(Null),
        _ => return Err(ConvertError::Unsupported(format!("{value:?}"))),
    };
    Ok(param)
}
