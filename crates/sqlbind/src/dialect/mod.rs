//! Dialect strategies.
//!
//! A dialect supplies the boolean FALSE literal (used for empty IN-lists) and
//! the rendering of `field IN values`. It is chosen independently of the
//! placeholder style and is fixed for the lifetime of a
//! [`QueryParams`](crate::QueryParams).

mod postgres;
mod sqlite;

#[cfg(test)]
mod tests;

pub use postgres::PostgresDialect;
pub use sqlite::{DEFAULT_INLINE_THRESHOLD, SqliteDialect, sqlite_escape, sqlite_value_list};

use crate::error::{BindError, BindResult};
use crate::fragment::Fragment;
use crate::query::QueryParams;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Dialect-specific rendering rules.
pub trait Dialect: fmt::Debug + Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Literal rendered for an unsatisfiable condition.
    fn false_literal(&self) -> &'static str {
        "FALSE"
    }

    /// Render `field IN values` for a non-empty list, binding through `q`.
    fn render_in(
        &self,
        q: &mut QueryParams,
        field: &str,
        values: Vec<Value>,
    ) -> BindResult<Fragment>;
}

/// Dialect for drivers that accept a whole list as one bind value.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericDialect;

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn render_in(
        &self,
        q: &mut QueryParams,
        field: &str,
        values: Vec<Value>,
    ) -> BindResult<Fragment> {
        let token = q.value(Value::Array(values));
        Ok(Fragment::raw(format!("{field} IN {token}")))
    }
}

/// Named dialect selection, for configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    #[default]
    Generic,
    Sqlite,
    Postgres,
}

impl DialectKind {
    /// Instantiate the dialect. `inline_threshold` only affects SQLite.
    pub fn build(self, inline_threshold: usize) -> Arc<dyn Dialect> {
        match self {
            DialectKind::Generic => Arc::new(GenericDialect),
            DialectKind::Sqlite => Arc::new(SqliteDialect::with_inline_threshold(inline_threshold)),
            DialectKind::Postgres => Arc::new(PostgresDialect),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DialectKind::Generic => "generic",
            DialectKind::Sqlite => "sqlite",
            DialectKind::Postgres => "postgres",
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialectKind {
    type Err = BindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" | "default" => Ok(DialectKind::Generic),
            "sqlite" => Ok(DialectKind::Sqlite),
            "postgres" | "postgresql" => Ok(DialectKind::Postgres),
            other => Err(BindError::config(format!("unknown dialect '{other}'"))),
        }
    }
}
