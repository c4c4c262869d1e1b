//! Forward conversion: Value → PostgreSQL bind parameter.

use bytes::BytesMut;
use load_core::Value;
use postgres_types::{to_sql_checked, IsNull, ToSql, Type};
use std::error::Error;

/// A borrowed [`Value`] usable as a tokio-postgres query parameter.
///
/// Nulls are accepted for any column type. Non-null values are encoded with
/// the matching Rust type (`bool`, `i64`, `f64`, `String`) and rejected when
/// the target column's type does not accept it.
#[derive(Debug, Clone, Copy)]
pub struct PostgreSQLValue<'a>(pub &'a Value);

impl ToSql for PostgreSQLValue<'_> {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self.0 {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(b) => encode(b, ty, out),
            Value::BigInt(i) => encode(i, ty, out),
            Value::Double(f) => encode(f, ty, out),
            Value::Text(s) => encode(s, ty, out),
        }
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}

fn encode<T: ToSql>(
    value: &T,
    ty: &Type,
    out: &mut BytesMut,
) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
    if !T::accepts(ty) {
        return Err(format!(
            "cannot bind a {} value to a column of type {ty}",
            std::any::type_name::<T>()
        )
        .into());
    }
    value.to_sql(ty, out)
}
