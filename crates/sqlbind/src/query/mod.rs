//! The per-query parameter accumulator.
//!
//! [`QueryParams`] renders templates into placeholder tokens and stores the
//! bound values in matching order. Create one per query, build fragments with
//! it, interpolate them into the SQL text, then hand
//! [`finish()`](QueryParams::finish) to the driver.
//!
//! ```ignore
//! use sqlbind::{not_none, presets, where_};
//!
//! let mut q = presets::default();
//! let name: Option<&str> = None;
//! let sql = format!(
//!     "SELECT * FROM users {}",
//!     where_([q.col("name").eq(not_none(name)), q.col("age").gt(30)]),
//! );
//! assert_eq!(sql, "SELECT * FROM users WHERE age > ?");
//! let params = q.finish()?; // [30]
//! ```

mod helpers;


use crate::dialect::{Dialect, GenericDialect};
use crate::error::{BindError, BindResult};
use crate::fragment::Fragment;
use crate::maybe::{BindArgs, IntoParam, Maybe};
use crate::params::Params;
use crate::path::{Path, PathExpr};
use crate::style::{ParamStyle, param_key};
use crate::template::Template;
use crate::value::{Truthy, Value};
use std::fmt;
use std::sync::Arc;

/// Accumulates bound values for one query and renders their placeholders.
///
/// Not meant to be shared between queries: tokens are numbered over the whole
/// lifetime of the instance.
#[derive(Clone)]
pub struct QueryParams {
    style: ParamStyle,
    dialect: Arc<dyn Dialect>,
    params: Params,
    count: usize,
    error: Option<BindError>,
}

impl fmt::Debug for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryParams")
            .field("style", &self.style)
            .field("dialect", &self.dialect.name())
            .field("params", &self.params)
            .field("error", &self.error)
            .finish()
    }
}

impl Default for QueryParams {
    fn default() -> Self {
        Self::new(ParamStyle::Qmark, GenericDialect)
    }
}

impl QueryParams {
    /// Create an empty accumulator.
    pub fn new(style: ParamStyle, dialect: impl Dialect + 'static) -> Self {
        Self::with_dialect(style, Arc::new(dialect))
    }

    /// Create an empty accumulator sharing a dialect instance.
    pub fn with_dialect(style: ParamStyle, dialect: Arc<dyn Dialect>) -> Self {
        Self {
            style,
            dialect,
            params: Params::for_named(style.is_named()),
            count: 0,
            error: None,
        }
    }

    pub fn style(&self) -> ParamStyle {
        self.style
    }

    pub fn dialect(&self) -> &dyn Dialect {
        &*self.dialect
    }

    /// Number of bound values.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Bound values so far, or the recorded build error.
    pub fn params(&self) -> BindResult<&Params> {
        self.check()?;
        Ok(&self.params)
    }

    /// The first build error recorded, if any.
    pub fn error(&self) -> Option<&BindError> {
        self.error.as_ref()
    }

    /// Fail if a template or row error was recorded while building.
    pub fn check(&self) -> BindResult<()> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    /// Materialize the parameters for the driver.
    pub fn finish(self) -> BindResult<Params> {
        self.check()?;
        Ok(self.params)
    }

    // ==================== Core binding ====================

    fn record(&mut self, err: BindError) {
        #[cfg(feature = "tracing")]
        tracing::warn!(error = %err, "sqlbind: fragment dropped");
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    /// Store `values` and return one token per value.
    fn push_values(&mut self, values: Vec<Value>) -> Vec<String> {
        let mut tokens = Vec::with_capacity(values.len());
        for value in values {
            let slot = self.count;
            tokens.push(self.style.placeholder(slot));
            match &mut self.params {
                Params::Positional(v) => v.push(value),
                Params::Named(m) => m.insert(param_key(slot), value),
            }
            self.count += 1;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(bound = tokens.len(), total = self.count, "sqlbind: bind");
        tokens
    }

    /// Convert one value, recording a conversion error as suppression.
    pub(crate) fn param(&mut self, value: impl IntoParam) -> Maybe<Value> {
        match value.into_param() {
            Ok(v) => v,
            Err(err) => {
                self.record(err);
                Maybe::Suppressed
            }
        }
    }

    /// `None` if any argument is suppressed.
    fn present(args: Vec<Maybe<Value>>) -> Option<Vec<Value>> {
        args.into_iter().map(Maybe::into_option).collect()
    }

    fn bind_values(&mut self, template: &str, values: Vec<Value>) -> Fragment {
        let parsed = match Template::parse(template) {
            Ok(t) => t,
            Err(err) => {
                self.record(err);
                return Fragment::EMPTY;
            }
        };
        if parsed.holes() != values.len() {
            self.record(BindError::Arity {
                template: template.to_string(),
                holes: parsed.holes(),
                values: values.len(),
            });
            return Fragment::EMPTY;
        }
        let tokens = self.push_values(values);
        match parsed.render(&tokens) {
            Ok(sql) => Fragment::raw(sql),
            Err(err) => {
                self.record(err);
                Fragment::EMPTY
            }
        }
    }

    /// Bind `args` into the `{}` holes of `template`.
    ///
    /// If any argument is [`Maybe::Suppressed`] the result is EMPTY and
    /// nothing is stored. A malformed template, or a hole count that differs
    /// from the argument count, or an integer outside the `i64` range, also
    /// yields EMPTY and is reported by
    /// [`check`](Self::check) / [`finish`](Self::finish).
    ///
    /// ```ignore
    /// q.bind("field BETWEEN {} AND {}", (10, 20)); // "field BETWEEN ? AND ?"
    /// ```
    pub fn bind(&mut self, template: &str, args: impl BindArgs) -> Fragment {
        let args = match args.into_args() {
            Ok(args) => args,
            Err(err) => {
                self.record(err);
                return Fragment::EMPTY;
            }
        };
        match Self::present(args) {
            Some(values) => self.bind_values(template, values),
            None => Fragment::EMPTY,
        }
    }

    /// Bind one value and render just its token.
    pub fn value(&mut self, value: impl IntoParam) -> Fragment {
        match self.param(value) {
            Maybe::Present(v) => {
                let mut tokens = self.push_values(vec![v]);
                Fragment::raw(tokens.pop().unwrap_or_default())
            }
            Maybe::Suppressed => Fragment::EMPTY,
        }
    }

    /// `lhs op <token>`, EMPTY when suppressed.
    pub(crate) fn compare(&mut self, lhs: &str, op: &str, value: Maybe<Value>) -> Fragment {
        match value {
            Maybe::Present(v) => {
                let token = self.value(v);
                Fragment::raw(format!("{lhs} {op} {token}"))
            }
            Maybe::Suppressed => Fragment::EMPTY,
        }
    }

    // ==================== Conditional binding ====================

    /// Bind only when `predicate` holds.
    pub fn cond(&mut self, predicate: bool, template: &str, args: impl BindArgs) -> Fragment {
        if predicate {
            self.bind(template, args)
        } else {
            Fragment::EMPTY
        }
    }

    /// Bind `value` into `template` unless it is `None`.
    pub fn not_none<T: IntoParam>(&mut self, template: &str, value: Option<T>) -> Fragment {
        match value {
            Some(v) => self.bind(template, v),
            None => Fragment::EMPTY,
        }
    }

    /// Bind `value` into `template` unless it is falsy.
    pub fn not_empty<T>(&mut self, template: &str, value: T) -> Fragment
    where
        T: Truthy + IntoParam,
    {
        if value.is_truthy() {
            self.bind(template, value)
        } else {
            Fragment::EMPTY
        }
    }

    // ==================== Membership ====================

    /// `field IN values`, rendered by the dialect.
    ///
    /// NULL or suppressed → EMPTY; an empty list → the dialect FALSE literal;
    /// a scalar is treated as a one-element list.
    pub fn in_(&mut self, field: impl AsRef<str>, values: impl IntoParam) -> BindResult<Fragment> {
        let values = match values.into_param()? {
            Maybe::Suppressed | Maybe::Present(Value::Null) => return Ok(Fragment::EMPTY),
            Maybe::Present(Value::Array(items)) => items,
            Maybe::Present(scalar) => vec![scalar],
        };
        if values.is_empty() {
            return Ok(Fragment::raw(self.dialect.false_literal()));
        }
        let dialect = Arc::clone(&self.dialect);
        dialect.render_in(self, field.as_ref(), values)
    }

    // ==================== Paths ====================

    /// Start a path expression at column `name`.
    pub fn col(&mut self, name: &str) -> PathExpr<'_> {
        PathExpr::new(self, Path::root().attr(name))
    }

    /// Arbitrary SQL expression as left-hand side, e.g. `LOWER(name)`.
    pub fn expr(&mut self, sql: &str) -> PathExpr<'_> {
        PathExpr::new(self, Path::literal(sql))
    }

    /// Bind an existing [`Path`].
    pub fn path(&mut self, path: impl Into<Path>) -> PathExpr<'_> {
        PathExpr::new(self, path.into())
    }
}
