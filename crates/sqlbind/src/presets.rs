//! Ready-made style/dialect combinations. Each call returns a fresh
//! accumulator.

use crate::dialect::{GenericDialect, PostgresDialect, SqliteDialect};
use crate::query::QueryParams;
use crate::style::ParamStyle;

/// `?` placeholders, generic dialect.
pub fn default() -> QueryParams {
    QueryParams::new(ParamStyle::Qmark, GenericDialect)
}

/// `:p0` placeholders, generic dialect (e.g. SQLAlchemy `text()`).
pub fn default_named() -> QueryParams {
    QueryParams::new(ParamStyle::Named, GenericDialect)
}

/// `%(p0)s` placeholders, generic dialect (e.g. psycopg2, clickhouse-driver).
pub fn default_pyformat() -> QueryParams {
    QueryParams::new(ParamStyle::PyFormat, GenericDialect)
}

/// `%s` placeholders, generic dialect (e.g. mysql-connector).
pub fn default_format() -> QueryParams {
    QueryParams::new(ParamStyle::Format, GenericDialect)
}

/// `:1` placeholders, generic dialect (e.g. Oracle).
pub fn default_numeric() -> QueryParams {
    QueryParams::new(ParamStyle::Numeric, GenericDialect)
}

/// `?` placeholders, SQLite dialect.
pub fn sqlite() -> QueryParams {
    QueryParams::new(ParamStyle::Qmark, SqliteDialect::new())
}

/// `:p0` placeholders, SQLite dialect.
pub fn sqlite_named() -> QueryParams {
    QueryParams::new(ParamStyle::Named, SqliteDialect::new())
}

/// `$1` placeholders, PostgreSQL dialect (tokio-postgres).
pub fn postgres() -> QueryParams {
    QueryParams::new(ParamStyle::Dollar, PostgresDialect)
}
