//! Keyword-style helpers on [`QueryParams`]: equality, ranges, assignments,
//! VALUES and LIMIT/OFFSET.

use super::QueryParams;
use crate::clause;
use crate::error::BindError;
use crate::fragment::{Fragment, and_, join_fragments};
use crate::maybe::{IntoParam, Maybe};
use crate::value::Value;

impl QueryParams {
    fn null_aware(&mut self, field: &str, value: Maybe<Value>, negate: bool) -> Fragment {
        match value {
            Maybe::Suppressed => Fragment::EMPTY,
            Maybe::Present(Value::Null) if negate => Fragment::raw(format!("{field} IS NOT NULL")),
            Maybe::Present(Value::Null) => Fragment::raw(format!("{field} IS NULL")),
            present if negate => self.compare(field, "!=", present),
            present => self.compare(field, "=", present),
        }
    }

    /// `field = ?`, or `field IS NULL` for a NULL value.
    pub fn eq(&mut self, field: impl AsRef<str>, value: impl IntoParam) -> Fragment {
        let value = self.param(value);
        self.null_aware(field.as_ref(), value, false)
    }

    /// `field != ?`, or `field IS NOT NULL` for a NULL value.
    pub fn neq(&mut self, field: impl AsRef<str>, value: impl IntoParam) -> Fragment {
        let value = self.param(value);
        self.null_aware(field.as_ref(), value, true)
    }

    /// AND of [`eq`](Self::eq) over `pairs`; suppressed pairs are dropped.
    ///
    /// ```ignore
    /// q.eq_all(pairs!["a" => 1, "b" => None::<i32>]); // "(a = ? AND b IS NULL)"
    /// ```
    pub fn eq_all<I, K, V>(&mut self, pairs: I) -> Fragment
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoParam,
    {
        let parts: Vec<Fragment> = pairs
            .into_iter()
            .map(|(k, v)| self.eq(k, v))
            .collect();
        and_(parts)
    }

    /// AND of [`neq`](Self::neq) over `pairs`; suppressed pairs are dropped.
    pub fn neq_all<I, K, V>(&mut self, pairs: I) -> Fragment
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoParam,
    {
        let parts: Vec<Fragment> = pairs
            .into_iter()
            .map(|(k, v)| self.neq(k, v))
            .collect();
        and_(parts)
    }

    fn range(
        &mut self,
        field: &str,
        left: Maybe<Value>,
        right_op: &str,
        right: Maybe<Value>,
    ) -> Fragment {
        let lower = self.compare(field, ">=", left);
        let upper = self.compare(field, right_op, right);
        and_([lower, upper])
    }

    /// `field >= left AND field < right`; either bound may be suppressed.
    pub fn in_range(
        &mut self,
        field: impl AsRef<str>,
        left: impl IntoParam,
        right: impl IntoParam,
    ) -> Fragment {
        let (left, right) = (self.param(left), self.param(right));
        self.range(field.as_ref(), left, "<", right)
    }

    /// `field >= left AND field <= right`; either bound may be suppressed.
    pub fn in_crange(
        &mut self,
        field: impl AsRef<str>,
        left: impl IntoParam,
        right: impl IntoParam,
    ) -> Fragment {
        let (left, right) = (self.param(left), self.param(right));
        self.range(field.as_ref(), left, "<=", right)
    }

    /// `a = ?, b = ?` for SET clauses. NULL is bound, suppressed pairs dropped.
    pub fn assign<I, K, V>(&mut self, pairs: I) -> Fragment
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoParam,
    {
        let parts: Vec<Fragment> = pairs
            .into_iter()
            .map(|(k, v)| {
                let value = self.param(v);
                self.compare(k.as_ref(), "=", value)
            })
            .collect();
        join_fragments(", ", parts, None)
    }

    /// `SET a = ?, b = ?`, EMPTY when every pair is suppressed.
    pub fn set<I, K, V>(&mut self, pairs: I) -> Fragment
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoParam,
    {
        let assignments = self.assign(pairs);
        clause::set([assignments])
    }

    /// `WHERE` over [`eq_all`](Self::eq_all).
    pub fn where_eq<I, K, V>(&mut self, pairs: I) -> Fragment
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoParam,
    {
        let cond = self.eq_all(pairs);
        clause::where_([cond])
    }

    /// `(a, b) VALUES (?, ?), (?, ?)` for rows sharing the same columns.
    ///
    /// Columns come from the first row; later rows may list them in any
    /// order. Cells are bound row-major. Any suppressed cell drops the whole
    /// fragment; a row with different columns is a build error.
    pub fn values<R, I, K, V>(&mut self, rows: R) -> Fragment
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoParam,
    {
        let mut converted: Vec<Vec<(String, Maybe<Value>)>> = Vec::new();
        for row in rows {
            let mut cells = Vec::new();
            for (k, v) in row {
                cells.push((k.into(), self.param(v)));
            }
            converted.push(cells);
        }
        let rows = converted;
        let Some(first) = rows.first() else {
            return Fragment::EMPTY;
        };
        let names: Vec<String> = first.iter().map(|(k, _)| k.clone()).collect();
        if names.is_empty() {
            return Fragment::EMPTY;
        }

        let mut cells = Vec::with_capacity(names.len() * rows.len());
        for (idx, mut row) in rows.into_iter().enumerate() {
            if row.len() != names.len() {
                self.record(BindError::row_shape(
                    idx,
                    format!("expected {} columns, found {}", names.len(), row.len()),
                ));
                return Fragment::EMPTY;
            }
            for name in &names {
                let Some(pos) = row.iter().position(|(k, _)| k == name) else {
                    self.record(BindError::row_shape(idx, format!("missing column '{name}'")));
                    return Fragment::EMPTY;
                };
                match row.swap_remove(pos).1 {
                    Maybe::Present(v) => cells.push(v),
                    Maybe::Suppressed => return Fragment::EMPTY,
                }
            }
        }

        let group = format!("({})", vec!["{}"; names.len()].join(", "));
        let groups = vec![group.as_str(); cells.len() / names.len()].join(", ");
        let columns = names.join(", ").replace('{', "{{").replace('}', "}}");
        self.bind_values(&format!("({columns}) VALUES {groups}"), cells)
    }

    /// Single-row [`values`](Self::values).
    pub fn values_row<I, K, V>(&mut self, pairs: I) -> Fragment
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoParam,
    {
        self.values([pairs])
    }

    /// `LIMIT ?`, EMPTY when suppressed.
    pub fn limit(&mut self, value: impl IntoParam) -> Fragment {
        self.bind("LIMIT {}", value)
    }

    /// `OFFSET ?`, EMPTY when suppressed.
    pub fn offset(&mut self, value: impl IntoParam) -> Fragment {
        self.bind("OFFSET {}", value)
    }
}
