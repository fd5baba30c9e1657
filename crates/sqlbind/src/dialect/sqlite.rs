use super::Dialect;
use crate::error::{BindError, BindResult};
use crate::fragment::Fragment;
use crate::query::QueryParams;
use crate::value::Value;

/// IN-lists longer than this are inlined instead of bound.
pub const DEFAULT_INLINE_THRESHOLD: usize = 10;

/// SQLite: `0` as FALSE, one placeholder per IN value.
///
/// SQLite cannot bind a list, and limits the number of parameters per
/// statement. Lists longer than the inline threshold are therefore written as
/// escaped literals; only integers, floats, text and booleans (as `1`/`0`)
/// are accepted there.
#[derive(Debug, Clone, Copy)]
pub struct SqliteDialect {
    inline_threshold: usize,
}

impl Default for SqliteDialect {
    fn default() -> Self {
        Self {
            inline_threshold: DEFAULT_INLINE_THRESHOLD,
        }
    }
}

impl SqliteDialect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inline_threshold(inline_threshold: usize) -> Self {
        Self { inline_threshold }
    }

    pub fn inline_threshold(&self) -> usize {
        self.inline_threshold
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn false_literal(&self) -> &'static str {
        "0"
    }

    fn render_in(
        &self,
        q: &mut QueryParams,
        field: &str,
        values: Vec<Value>,
    ) -> BindResult<Fragment> {
        if values.len() > self.inline_threshold {
            // Escape before touching the accumulator: a bad literal aborts
            // the whole render.
            let list = sqlite_value_list(&values)?;
            #[cfg(feature = "tracing")]
            tracing::debug!(
                field,
                count = values.len(),
                threshold = self.inline_threshold,
                "inlining sqlite IN-list"
            );
            return Ok(Fragment::raw(format!("{field} IN ({list})")));
        }

        let tokens: Vec<Fragment> = values.into_iter().map(|v| q.value(v)).collect();
        let tokens = tokens
            .iter()
            .map(Fragment::as_str)
            .collect::<Vec<_>>()
            .join(",");
        Ok(Fragment::raw(format!("{field} IN ({tokens})")))
    }
}

/// Escape a single literal for inline use in SQLite.
pub fn sqlite_escape(value: &Value) -> BindResult<String> {
    match value {
        // SQLite truncates a string literal at NUL.
        Value::Text(s) if s.contains('\0') => Err(BindError::UnsupportedLiteral {
            type_name: "text containing NUL",
        }),
        Value::Text(s) => Ok(format!("'{}'", s.replace('\'', "''"))),
        Value::Int(n) => Ok(n.to_string()),
        Value::Float(f) if f.is_finite() => Ok(f.to_string()),
        Value::Float(_) => Err(BindError::UnsupportedLiteral {
            type_name: "non-finite float",
        }),
        Value::Bool(b) => Ok(if *b { "1" } else { "0" }.to_string()),
        other => Err(BindError::UnsupportedLiteral {
            type_name: other.type_name(),
        }),
    }
}

/// Comma-joined escaped literals.
pub fn sqlite_value_list(values: &[Value]) -> BindResult<String> {
    let escaped = values
        .iter()
        .map(sqlite_escape)
        .collect::<BindResult<Vec<_>>>()?;
    Ok(escaped.join(","))
}
