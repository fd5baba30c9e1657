//! # sqlbind
//!
//! Compose conditional, dialect-aware SQL fragments while every literal goes
//! through a placeholder.
//!
//! ## Features
//!
//! - **SQL stays SQL**: fragments are plain strings you interpolate into your own query text
//! - **Vanishing conditions**: absent filters collapse to [`Fragment::EMPTY`] instead of `TRUE`/`NULL` hacks
//! - **Any driver**: `?`, `:1`, `%s`, `$1`, `:p0` and `%(p0)s` placeholder styles
//! - **Dialect-aware IN**: array binds, per-value binds, or audited inline literals on SQLite
//!
//! ## Usage
//!
//! ```ignore
//! use sqlbind::{not_none, pairs, presets, where_};
//!
//! let mut q = presets::sqlite();
//! let name: Option<&str> = None;
//! let sql = format!(
//!     "SELECT * FROM users {} {}",
//!     where_([
//!         q.eq_all(pairs!["name" => not_none(name), "age" => 30]),
//!         q.col("role").in_(vec!["admin", "owner"])?,
//!     ]),
//!     q.limit(20),
//! );
//! assert_eq!(sql, "SELECT * FROM users WHERE age = ? AND role IN (?,?) LIMIT ?");
//!
//! let params = q.finish()?; // [30, "admin", "owner", 20]
//! conn.execute(&sql, params)?;
//! ```

pub mod clause;
pub mod config;
pub mod dialect;
pub mod error;
pub mod fragment;
pub mod maybe;
pub mod params;
pub mod path;
pub mod presets;
pub mod query;
pub mod style;
pub mod value;

mod template;

#[cfg(feature = "postgres")]
pub mod pg;

pub mod prelude;

pub use clause::{fields, group_by, order_by, prefix_and, prefix_join, prefix_or, set, where_, with};
pub use config::BindConfig;
pub use dialect::{Dialect, DialectKind, GenericDialect, PostgresDialect, SqliteDialect};
pub use error::{BindError, BindResult};
pub use fragment::{Fragment, and_, join_fragments, not_, or_};
pub use maybe::{Args, BindArgs, IntoParam, Maybe, cond, not_empty, not_none, truthy};
pub use params::{NamedParams, Params};
pub use path::{Path, PathExpr, like_escape, path};
pub use query::QueryParams;
pub use style::ParamStyle;
pub use value::{Truthy, Value};
