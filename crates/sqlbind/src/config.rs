use crate::dialect::{DEFAULT_INLINE_THRESHOLD, DialectKind};
use crate::query::QueryParams;
use crate::style::ParamStyle;
use serde::{Deserialize, Serialize};

/// Placeholder style and dialect selection, e.g. loaded from an app config.
///
/// ```ignore
/// let cfg: BindConfig = serde_json::from_str(r#"{"style": "named", "dialect": "sqlite"}"#)?;
/// let mut q = cfg.build();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindConfig {
    /// Placeholder style (default: `qmark`).
    pub style: ParamStyle,
    /// Dialect (default: `generic`).
    pub dialect: DialectKind,
    /// SQLite IN-lists longer than this are inlined (default: 10).
    pub inline_threshold: usize,
}

impl Default for BindConfig {
    fn default() -> Self {
        Self {
            style: ParamStyle::Qmark,
            dialect: DialectKind::Generic,
            inline_threshold: DEFAULT_INLINE_THRESHOLD,
        }
    }
}

impl BindConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder style.
    pub fn style(mut self, style: ParamStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the dialect.
    pub fn dialect(mut self, dialect: DialectKind) -> Self {
        self.dialect = dialect;
        self
    }

    /// Set the SQLite inline threshold.
    pub fn inline_threshold(mut self, threshold: usize) -> Self {
        self.inline_threshold = threshold;
        self
    }

    /// A fresh accumulator for one query.
    pub fn build(&self) -> QueryParams {
        QueryParams::with_dialect(self.style, self.dialect.build(self.inline_threshold))
    }
}
