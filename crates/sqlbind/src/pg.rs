//! tokio-postgres integration.
//!
//! Lets a `presets::postgres()` accumulator be executed directly:
//!
//! ```ignore
//! let mut q = sqlbind::presets::postgres();
//! let sql = format!("SELECT * FROM users {}", sqlbind::where_([q.col("id").in_(vec![1, 2])?]));
//! let params = q.finish()?;
//! let rows = client.query(&sql, &params.as_refs()).await?;
//! ```
//!
//! Each [`Value`] variant only encodes into the column types it can represent
//! without reinterpretation; anything else fails with `WrongType`.

use crate::params::Params;
use crate::value::Value;
use bytes::BytesMut;
use std::error::Error;
use tokio_postgres::types::{IsNull, Kind, ToSql, Type, WrongType};

fn is_int(ty: &Type) -> bool {
    matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8)
}

fn is_float(ty: &Type) -> bool {
    matches!(*ty, Type::FLOAT4 | Type::FLOAT8)
}

fn is_text(ty: &Type) -> bool {
    matches!(
        *ty,
        Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME | Type::UNKNOWN | Type::JSON
    )
}

fn is_array(ty: &Type) -> bool {
    matches!(ty.kind(), Kind::Array(_))
}

fn wrong_type(ty: &Type) -> Box<dyn Error + Sync + Send> {
    Box::new(WrongType::new::<Value>(ty.clone()))
}

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(b) if *ty == Type::BOOL => b.to_sql(ty, out),
            Value::Int(n) if is_int(ty) || is_float(ty) => match *ty {
                Type::INT2 => i16::try_from(*n)?.to_sql(ty, out),
                Type::INT4 => i32::try_from(*n)?.to_sql(ty, out),
                Type::INT8 => n.to_sql(ty, out),
                Type::FLOAT4 => (*n as f32).to_sql(ty, out),
                _ => (*n as f64).to_sql(ty, out),
            },
            Value::Float(f) if *ty == Type::FLOAT4 => (*f as f32).to_sql(ty, out),
            Value::Float(f) if *ty == Type::FLOAT8 => f.to_sql(ty, out),
            Value::Text(s) if is_text(ty) => s.as_str().to_sql(ty, out),
            Value::Bytes(b) if *ty == Type::BYTEA => b.as_slice().to_sql(ty, out),
            // Elements are checked one by one against the member type.
            Value::Array(items) if is_array(ty) => items.as_slice().to_sql(ty, out),
            _ => Err(wrong_type(ty)),
        }
    }

    fn accepts(_ty: &Type) -> bool {
        // NULL binds into any column; other variants are matched in `to_sql`.
        true
    }

    tokio_postgres::types::to_sql_checked!();
}

impl Params {
    /// Values as tokio-postgres parameter references, in slot order.
    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.values()
            .into_iter()
            .map(|v| v as &(dyn ToSql + Sync))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: &Value, ty: &Type) -> Result<Vec<u8>, Box<dyn Error + Sync + Send>> {
        let mut buf = BytesMut::new();
        value.to_sql_checked(ty, &mut buf)?;
        Ok(buf.to_vec())
    }

    #[test]
    fn ints_narrow_to_the_column_width() {
        assert_eq!(encode(&Value::Int(5), &Type::INT4).unwrap(), vec![0, 0, 0, 5]);
        assert_eq!(encode(&Value::Int(5), &Type::INT2).unwrap(), vec![0, 5]);
        assert_eq!(encode(&Value::Int(5), &Type::INT8).unwrap().len(), 8);
        assert_eq!(
            encode(&Value::Int(2), &Type::FLOAT8).unwrap(),
            2.0f64.to_be_bytes().to_vec()
        );
        assert!(encode(&Value::Int(70_000), &Type::INT2).is_err());
    }

    #[test]
    fn mismatched_variants_are_rejected() {
        assert!(encode(&Value::from("abc"), &Type::INT4).is_err());
        assert!(encode(&Value::Int(5), &Type::TEXT).is_err());
        assert!(encode(&Value::Float(1.5), &Type::INT8).is_err());
        assert!(encode(&Value::Bool(true), &Type::INT4).is_err());
        assert!(encode(&Value::bytes(vec![1u8]), &Type::TEXT).is_err());
        assert!(encode(&Value::Array(vec![Value::Int(1)]), &Type::INT8).is_err());
    }

    #[test]
    fn matching_variants_encode() {
        assert_eq!(encode(&Value::from("abc"), &Type::TEXT).unwrap(), b"abc".to_vec());
        assert_eq!(encode(&Value::from("abc"), &Type::VARCHAR).unwrap(), b"abc".to_vec());
        assert_eq!(encode(&Value::Bool(true), &Type::BOOL).unwrap(), vec![1]);
        assert_eq!(encode(&Value::bytes(vec![7u8]), &Type::BYTEA).unwrap(), vec![7]);
        assert_eq!(
            encode(&Value::Float(1.5), &Type::FLOAT8).unwrap(),
            1.5f64.to_be_bytes().to_vec()
        );
    }

    #[test]
    fn null_encodes_into_any_column() {
        let mut buf = BytesMut::new();
        for ty in [Type::INT4, Type::DATE, Type::JSONB] {
            let r = Value::Null.to_sql_checked(&ty, &mut buf).unwrap();
            assert!(matches!(r, IsNull::Yes));
        }
        assert!(buf.is_empty());
        assert!(encode(&Value::from("2024-01-01"), &Type::DATE).is_err());
    }

    #[test]
    fn arrays_check_their_elements() {
        let ints = Value::Array(vec![Value::Int(1), Value::Int(2)]);
        assert!(encode(&ints, &Type::INT8_ARRAY).is_ok());
        assert!(encode(&ints, &Type::INT4_ARRAY).is_ok());

        let mixed = Value::Array(vec![Value::Int(1), Value::from("x")]);
        assert!(encode(&mixed, &Type::INT8_ARRAY).is_err());
        assert!(encode(&Value::Array(vec![Value::from("x")]), &Type::TEXT_ARRAY).is_ok());
    }
}
