//! Placeholder styles.
//!
//! | style      | token       | storage  |
//! |------------|-------------|----------|
//! | `qmark`    | `?`         | sequence |
//! | `numeric`  | `:1`, `:2`  | sequence |
//! | `format`   | `%s`        | sequence |
//! | `dollar`   | `$1`, `$2`  | sequence |
//! | `named`    | `:p0`       | mapping  |
//! | `pyformat` | `%(p0)s`    | mapping  |

use crate::error::BindError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How bound values are referenced from the SQL text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamStyle {
    /// `?` repeated per value.
    #[default]
    Qmark,
    /// `:1`, `:2`, ... (1-based).
    Numeric,
    /// `%s` repeated per value.
    Format,
    /// `$1`, `$2`, ... (1-based, PostgreSQL).
    Dollar,
    /// `:p0`, `:p1`, ... keyed mapping.
    Named,
    /// `%(p0)s`, `%(p1)s`, ... keyed mapping.
    PyFormat,
}

impl ParamStyle {
    /// Whether values are stored in a key→value mapping.
    pub fn is_named(self) -> bool {
        matches!(self, ParamStyle::Named | ParamStyle::PyFormat)
    }

    /// Token for the value stored at 0-based `slot`.
    pub fn placeholder(self, slot: usize) -> String {
        match self {
            ParamStyle::Qmark => "?".to_string(),
            ParamStyle::Numeric => format!(":{}", slot + 1),
            ParamStyle::Format => "%s".to_string(),
            ParamStyle::Dollar => format!("${}", slot + 1),
            ParamStyle::Named => format!(":{}", param_key(slot)),
            ParamStyle::PyFormat => format!("%({})s", param_key(slot)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ParamStyle::Qmark => "qmark",
            ParamStyle::Numeric => "numeric",
            ParamStyle::Format => "format",
            ParamStyle::Dollar => "dollar",
            ParamStyle::Named => "named",
            ParamStyle::PyFormat => "pyformat",
        }
    }
}

/// Synthetic mapping key for the 0-based `slot`.
pub fn param_key(slot: usize) -> String {
    format!("p{slot}")
}

impl fmt::Display for ParamStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamStyle {
    type Err = BindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "qmark" => Ok(ParamStyle::Qmark),
            "numeric" => Ok(ParamStyle::Numeric),
            "format" => Ok(ParamStyle::Format),
            "dollar" => Ok(ParamStyle::Dollar),
            "named" => Ok(ParamStyle::Named),
            "pyformat" => Ok(ParamStyle::PyFormat),
            other => Err(BindError::config(format!("unknown param style '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens() {
        assert_eq!(ParamStyle::Qmark.placeholder(3), "?");
        assert_eq!(ParamStyle::Numeric.placeholder(0), ":1");
        assert_eq!(ParamStyle::Format.placeholder(5), "%s");
        assert_eq!(ParamStyle::Dollar.placeholder(1), "$2");
        assert_eq!(ParamStyle::Named.placeholder(0), ":p0");
        assert_eq!(ParamStyle::PyFormat.placeholder(1), "%(p1)s");
    }

    #[test]
    fn parses_names() {
        assert_eq!("pyformat".parse::<ParamStyle>().unwrap(), ParamStyle::PyFormat);
        assert_eq!(" QMARK ".parse::<ParamStyle>().unwrap(), ParamStyle::Qmark);
        assert!("colon".parse::<ParamStyle>().is_err());
        let s: ParamStyle = serde_json::from_str(r#""named""#).unwrap();
        assert_eq!(s, ParamStyle::Named);
        assert_eq!(serde_json::to_string(&ParamStyle::PyFormat).unwrap(), r#""pyformat""#);
    }
}
