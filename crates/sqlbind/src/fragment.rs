//! Rendered SQL fragments and their boolean composition.
//!
//! A [`Fragment`] is SQL text whose literals have already been replaced by
//! placeholders. [`Fragment::EMPTY`] is absorbed by every combinator, so a
//! condition that "did not happen" simply disappears from the query:
//!
//! ```ignore
//! use sqlbind::{and_, or_, presets, Fragment};
//!
//! let mut q = presets::default();
//! let f = or_([q.col("a").lt(10), and_([q.col("b").gt(20), Fragment::EMPTY])]);
//! assert_eq!(f, "(a < ? OR b > ?)");
//! ```

use std::fmt;
use std::ops::Deref;

/// A rendered, placeholder-substituted SQL snippet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
    /// The absent fragment.
    pub const EMPTY: Fragment = Fragment(String::new());

    /// Wrap SQL text that carries no literal values.
    ///
    /// The text is used verbatim; never pass user input here.
    pub fn raw(sql: impl Into<String>) -> Self {
        Fragment(sql.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// `(self AND other)`, absorbing empties.
    pub fn and(self, other: impl Into<Fragment>) -> Fragment {
        and_([self, other.into()])
    }

    /// `(self OR other)`, absorbing empties.
    pub fn or(self, other: impl Into<Fragment>) -> Fragment {
        or_([self, other.into()])
    }

    /// `NOT self`, or EMPTY when `self` is empty.
    pub fn not(self) -> Fragment {
        not_(self)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for Fragment {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Fragment {
    fn from(s: &str) -> Self {
        Fragment(s.to_string())
    }
}

impl From<String> for Fragment {
    fn from(s: String) -> Self {
        Fragment(s)
    }
}

impl From<&Fragment> for Fragment {
    fn from(f: &Fragment) -> Self {
        f.clone()
    }
}

impl From<Fragment> for String {
    fn from(f: Fragment) -> Self {
        f.0
    }
}

impl PartialEq<str> for Fragment {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Fragment {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for Fragment {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}

/// Join non-empty fragments with `sep`.
///
/// No survivors gives EMPTY; a single survivor is returned as-is. With two or
/// more, the joined text is substituted into `wrap` (a template with one `{}`)
/// when given.
pub fn join_fragments<I>(sep: &str, fragments: I, wrap: Option<&str>) -> Fragment
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    let mut parts: Vec<Fragment> = fragments
        .into_iter()
        .map(Into::into)
        .filter(|f| !f.is_empty())
        .collect();

    match parts.len() {
        0 => Fragment::EMPTY,
        1 => parts.remove(0),
        _ => {
            let joined = parts
                .iter()
                .map(Fragment::as_str)
                .collect::<Vec<_>>()
                .join(sep);
            match wrap {
                Some(template) => Fragment(template.replacen("{}", &joined, 1)),
                None => Fragment(joined),
            }
        }
    }
}

/// Join with ` AND `, parenthesized when two or more terms survive.
pub fn and_<I>(fragments: I) -> Fragment
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    join_fragments(" AND ", fragments, Some("({})"))
}

/// Join with ` OR `, parenthesized when two or more terms survive.
pub fn or_<I>(fragments: I) -> Fragment
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    join_fragments(" OR ", fragments, Some("({})"))
}

/// Prefix with `NOT `; EMPTY stays EMPTY.
pub fn not_(fragment: impl Into<Fragment>) -> Fragment {
    let fragment = fragment.into();
    if fragment.is_empty() {
        Fragment::EMPTY
    } else {
        Fragment(format!("NOT {fragment}"))
    }
}
