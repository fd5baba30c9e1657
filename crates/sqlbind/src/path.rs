//! Attribute-path expressions.
//!
//! [`Path`] turns dotted access into a column reference (`users.name`);
//! [`PathExpr`] pairs a path with the accumulator so comparisons bind their
//! right-hand side:
//!
//! ```ignore
//! let mut q = presets::default();
//! assert_eq!(q.col("users").attr("name").eq("Bob"), "users.name = ?");
//! assert_eq!(q.expr("LOWER(name)").eq("bob"), "LOWER(name) = ?");
//! ```

use crate::error::BindResult;
use crate::fragment::Fragment;
use crate::maybe::{IntoParam, Maybe};
use crate::query::QueryParams;
use crate::value::Value;
use std::fmt;

/// A column reference built from dotted segments, or a literal expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(String);

/// Shorthand for `Path::root().attr(name)`.
pub fn path(name: &str) -> Path {
    Path::root().attr(name)
}

impl Path {
    /// The empty path; the first [`attr`](Self::attr) names a column.
    pub fn root() -> Self {
        Path(String::new())
    }

    /// Use `sql` verbatim as the path, e.g. `field + 10`.
    pub fn literal(sql: impl Into<String>) -> Self {
        Path(sql.into())
    }

    /// Append `.name`, or start the path with `name` when empty.
    pub fn attr(self, name: &str) -> Self {
        if self.0.is_empty() {
            Path(name.to_string())
        } else {
            Path(format!("{}.{name}", self.0))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::literal(s)
    }
}

impl From<Path> for Fragment {
    fn from(p: Path) -> Self {
        Fragment::raw(p.0)
    }
}

/// A [`Path`] bound to the accumulator its comparisons write into.
#[derive(Debug)]
pub struct PathExpr<'q> {
    q: &'q mut QueryParams,
    path: Path,
}

impl<'q> PathExpr<'q> {
    pub(crate) fn new(q: &'q mut QueryParams, path: Path) -> Self {
        Self { q, path }
    }

    /// Append `.name`.
    pub fn attr(self, name: &str) -> Self {
        Self {
            q: self.q,
            path: self.path.attr(name),
        }
    }

    pub fn as_str(&self) -> &str {
        self.path.as_str()
    }

    /// Release the accumulator and keep the path.
    pub fn into_path(self) -> Path {
        self.path
    }

    fn cmp(self, op: &str, value: impl IntoParam) -> Fragment {
        let value = self.q.param(value);
        self.q.compare(self.path.as_str(), op, value)
    }

    /// `path < ?`
    pub fn lt(self, value: impl IntoParam) -> Fragment {
        self.cmp("<", value)
    }

    /// `path <= ?`
    pub fn le(self, value: impl IntoParam) -> Fragment {
        self.cmp("<=", value)
    }

    /// `path > ?`
    pub fn gt(self, value: impl IntoParam) -> Fragment {
        self.cmp(">", value)
    }

    /// `path >= ?`
    pub fn ge(self, value: impl IntoParam) -> Fragment {
        self.cmp(">=", value)
    }

    /// `path = ?`, or `path IS NULL` for NULL.
    pub fn eq(self, value: impl IntoParam) -> Fragment {
        self.q.eq(self.path.as_str(), value)
    }

    /// `path != ?`, or `path IS NOT NULL` for NULL.
    pub fn ne(self, value: impl IntoParam) -> Fragment {
        self.q.neq(self.path.as_str(), value)
    }

    /// `path IN ...`, rendered by the dialect.
    pub fn in_(self, values: impl IntoParam) -> BindResult<Fragment> {
        self.q.in_(self.path.as_str(), values)
    }

    /// `NOT path`
    pub fn not(self) -> Fragment {
        Fragment::raw(format!("NOT {}", self.path))
    }

    /// `path LIKE ?` binding `template` with its `{}` replaced by the
    /// LIKE-escaped `value`.
    ///
    /// ```ignore
    /// q.col("tag").like("{}%", "my_tag"); // binds "my\_tag%"
    /// ```
    pub fn like(self, template: &str, value: impl Into<Maybe<String>>) -> Fragment {
        self.pattern("LIKE", template, value.into())
    }

    /// Case-insensitive [`like`](Self::like).
    pub fn ilike(self, template: &str, value: impl Into<Maybe<String>>) -> Fragment {
        self.pattern("ILIKE", template, value.into())
    }

    fn pattern(self, op: &str, template: &str, value: Maybe<String>) -> Fragment {
        let pattern = value.map(|v| Value::Text(template.replacen("{}", &like_escape(&v, '\\'), 1)));
        self.q.compare(self.path.as_str(), op, pattern)
    }
}

impl From<&str> for Maybe<String> {
    fn from(s: &str) -> Self {
        Maybe::Present(s.to_string())
    }
}

impl From<String> for Maybe<String> {
    fn from(s: String) -> Self {
        Maybe::Present(s)
    }
}

impl From<Maybe<&str>> for Maybe<String> {
    fn from(m: Maybe<&str>) -> Self {
        m.map(str::to_string)
    }
}

/// Escape `%`, `_` and `escape` itself for use inside a LIKE pattern.
pub fn like_escape(value: &str, escape: char) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == escape || c == '%' || c == '_' {
            out.push(escape);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maybe::not_none;
    use crate::presets;

    #[test]
    fn dotted_paths() {
        assert_eq!(path("users").attr("name").as_str(), "users.name");
        assert_eq!(Path::root().attr("c").attr("val").to_string(), "c.val");
        assert_eq!(Path::literal("field + 10").as_str(), "field + 10");
    }

    #[test]
    fn comparisons() {
        let mut q = presets::default();
        assert_eq!(q.col("val").lt(1), "val < ?");
        assert_eq!(q.col("val").le(2), "val <= ?");
        assert_eq!(q.col("val").gt(3), "val > ?");
        assert_eq!(q.col("val").ge(4), "val >= ?");
        assert_eq!(q.col("val").eq(5), "val = ?");
        assert_eq!(q.col("val").ne(6), "val != ?");
        assert_eq!(q.len(), 6);

        assert_eq!(q.col("val").eq(not_none(None::<i32>)), Fragment::EMPTY);
        assert_eq!(q.col("val").eq(None::<i32>), "val IS NULL");
        assert_eq!(q.col("val").ne(None::<i32>), "val IS NOT NULL");
        assert_eq!(q.len(), 6);
    }

    #[test]
    fn literal_and_negation() {
        let mut q = presets::default();
        assert_eq!(q.expr("field + 10").lt(1), "field + 10 < ?");
        assert_eq!(q.col("enabled").not(), "NOT enabled");
        assert_eq!(q.col("users").attr("name").eq("Bob"), "users.name = ?");
    }

    #[test]
    fn like_escaping() {
        assert_eq!(like_escape("boo", '\\'), "boo");
        assert_eq!(like_escape("boo%", '\\'), "boo\\%");
        assert_eq!(like_escape("boo_", '\\'), "boo\\_");
        assert_eq!(like_escape("boo\\", '\\'), "boo\\\\");
        assert_eq!(like_escape("%b\\oo_|", '|'), "|%b\\oo|_||");
    }

    #[test]
    fn like_binds_escaped_pattern() {
        let mut q = presets::default();
        assert_eq!(q.col("tag").like("{}%", "my_tag"), "tag LIKE ?");
        assert_eq!(q.col("tag").ilike("{}%", "my_tag"), "tag ILIKE ?");
        assert_eq!(q.col("tag").like("{}%", Maybe::<&str>::Suppressed), Fragment::EMPTY);
        let expected = Value::Text("my\\_tag%".to_string());
        assert_eq!(q.params().unwrap().values(), vec![&expected, &expected]);
    }
}
