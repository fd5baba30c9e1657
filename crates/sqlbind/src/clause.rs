//! Clause builders.
//!
//! Each builder joins its fragments, drops empties, and prepends the keyword
//! only when something survives, so optional clauses can be interpolated
//! into a query template unconditionally.

use crate::fragment::{Fragment, join_fragments};

/// Join with `sep` and prepend `prefix` if the result is non-empty.
pub fn prefix_join<I>(prefix: &str, sep: &str, fragments: I, wrap: Option<&str>) -> Fragment
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    let joined = join_fragments(sep, fragments, wrap);
    if joined.is_empty() {
        Fragment::EMPTY
    } else {
        Fragment::raw(format!("{prefix}{joined}"))
    }
}

/// `WHERE a AND b ...`
pub fn where_<I>(fragments: I) -> Fragment
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    prefix_join("WHERE ", " AND ", fragments, None)
}

/// `WITH cte1, cte2 ...`
pub fn with<I>(fragments: I) -> Fragment
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    prefix_join("WITH ", ", ", fragments, None)
}

/// `SET a = ?, b = ? ...`
pub fn set<I>(fragments: I) -> Fragment
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    prefix_join("SET ", ", ", fragments, None)
}

/// Comma-separated list without a keyword.
pub fn fields<I>(fragments: I) -> Fragment
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    join_fragments(", ", fragments, None)
}

/// `GROUP BY a, b ...`
pub fn group_by<I>(fragments: I) -> Fragment
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    prefix_join("GROUP BY ", ", ", fragments, None)
}

/// `ORDER BY a, b DESC ...`
pub fn order_by<I>(fragments: I) -> Fragment
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    prefix_join("ORDER BY ", ", ", fragments, None)
}

/// `AND a AND b`, for appending to an existing static WHERE clause.
pub fn prefix_and<I>(fragments: I) -> Fragment
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    prefix_join("AND ", " AND ", fragments, None)
}

/// `OR a OR b`, for appending to an existing static WHERE clause.
pub fn prefix_or<I>(fragments: I) -> Fragment
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    prefix_join("OR ", " OR ", fragments, None)
}
