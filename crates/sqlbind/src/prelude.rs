//! Convenient imports for building queries.
//!
//! ```ignore
//! use sqlbind::prelude::*;
//! ```

pub use crate::clause::{fields, group_by, order_by, prefix_and, prefix_or, set, where_, with};
pub use crate::fragment::{Fragment, and_, not_, or_};
pub use crate::maybe::{Maybe, cond, not_empty, not_none, truthy};
pub use crate::pairs;
pub use crate::path::{Path, path};
pub use crate::presets;
pub use crate::query::QueryParams;
pub use crate::value::Value;
pub use crate::{BindError, BindResult};
