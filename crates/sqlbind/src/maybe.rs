//! Conditional suppression of bound values.
//!
//! A [`Maybe::Suppressed`] value makes the fragment that would bind it vanish:
//! the bind returns [`Fragment::EMPTY`](crate::Fragment::EMPTY) and no
//! parameter slot is consumed.
//!
//! ```ignore
//! use sqlbind::{not_none, presets, where_};
//!
//! let mut q = presets::default();
//! let age: Option<i32> = None;
//! let sql = format!("SELECT * FROM users {}", where_([q.col("age").gt(not_none(age))]));
//! assert_eq!(sql, "SELECT * FROM users ");
//! ```

use crate::error::BindResult;
use crate::value::{Truthy, Value};

/// A value that is either present or suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// Bind the value.
    Present(T),
    /// Drop the enclosing fragment.
    Suppressed,
}

impl<T> Maybe<T> {
    /// `None` suppresses, `Some(v)` is present.
    pub fn from_nullable(value: Option<T>) -> Self {
        value.map_or(Maybe::Suppressed, Maybe::Present)
    }

    /// Falsy values (see [`Truthy`]) suppress.
    pub fn from_truthy(value: T) -> Self
    where
        T: Truthy,
    {
        if value.is_truthy() {
            Maybe::Present(value)
        } else {
            Maybe::Suppressed
        }
    }

    /// Present only when `predicate` holds.
    pub fn from_predicate(predicate: bool, value: T) -> Self {
        if predicate {
            Maybe::Present(value)
        } else {
            Maybe::Suppressed
        }
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, Maybe::Suppressed)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Maybe::Present(v) => Maybe::Present(f(v)),
            Maybe::Suppressed => Maybe::Suppressed,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Present(v) => Some(v),
            Maybe::Suppressed => None,
        }
    }
}

/// Suppress `None`; bind `Some(v)` as `v`.
pub fn not_none<T>(value: Option<T>) -> Maybe<T> {
    Maybe::from_nullable(value)
}

/// Suppress falsy values (`0`, `""`, empty lists, `None`, `false`).
pub fn not_empty<T: Truthy>(value: T) -> Maybe<T> {
    Maybe::from_truthy(value)
}

/// Alias of [`not_empty`].
pub fn truthy<T: Truthy>(value: T) -> Maybe<T> {
    Maybe::from_truthy(value)
}

/// Bind `value` only when `predicate` holds.
pub fn cond<T>(predicate: bool, value: T) -> Maybe<T> {
    Maybe::from_predicate(predicate, value)
}

/// Anything accepted by the bind-family methods.
///
/// Plain values are always present, `Option::None` binds SQL NULL, and
/// [`Maybe::Suppressed`] suppresses. Integers wider than `i64` fail with
/// [`BindError::OutOfRange`](crate::BindError::OutOfRange) when they do not fit.
pub trait IntoParam {
    fn into_param(self) -> BindResult<Maybe<Value>>;
}

macro_rules! impl_into_param {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoParam for $t {
                fn into_param(self) -> BindResult<Maybe<Value>> {
                    Ok(Maybe::Present(Value::from(self)))
                }
            }
        )*
    };
}

impl_into_param!(
    Value,
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    f32,
    f64,
    String,
    &str,
    &String,
    serde_json::Value,
);

macro_rules! impl_into_param_checked {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoParam for $t {
                fn into_param(self) -> BindResult<Maybe<Value>> {
                    Value::try_from(self).map(Maybe::Present)
                }
            }
        )*
    };
}

impl_into_param_checked!(u64, usize, isize, i128, u128);

impl<T: IntoParam> IntoParam for Option<T> {
    fn into_param(self) -> BindResult<Maybe<Value>> {
        match self {
            Some(v) => v.into_param(),
            None => Ok(Maybe::Present(Value::Null)),
        }
    }
}

/// A list binds as one [`Value::Array`]; a suppressed item suppresses the
/// whole list.
impl<T: IntoParam> IntoParam for Vec<T> {
    fn into_param(self) -> BindResult<Maybe<Value>> {
        let mut items = Vec::with_capacity(self.len());
        for item in self {
            match item.into_param()? {
                Maybe::Present(v) => items.push(v),
                Maybe::Suppressed => return Ok(Maybe::Suppressed),
            }
        }
        Ok(Maybe::Present(Value::Array(items)))
    }
}

impl<T: IntoParam> IntoParam for Maybe<T> {
    fn into_param(self) -> BindResult<Maybe<Value>> {
        match self {
            Maybe::Present(v) => v.into_param(),
            Maybe::Suppressed => Ok(Maybe::Suppressed),
        }
    }
}

/// Already converted, as produced by [`pairs!`](crate::pairs).
impl IntoParam for BindResult<Maybe<Value>> {
    fn into_param(self) -> BindResult<Maybe<Value>> {
        self
    }
}

/// The value list of one template bind.
///
/// Implemented for single values, tuples of values, and [`Args`].
pub trait BindArgs {
    fn into_args(self) -> BindResult<Vec<Maybe<Value>>>;
}

impl<T: IntoParam> BindArgs for T {
    fn into_args(self) -> BindResult<Vec<Maybe<Value>>> {
        Ok(vec![self.into_param()?])
    }
}

impl BindArgs for () {
    fn into_args(self) -> BindResult<Vec<Maybe<Value>>> {
        Ok(Vec::new())
    }
}

macro_rules! impl_bind_args_tuple {
    ($($name:ident),+) => {
        impl<$($name: IntoParam),+> BindArgs for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_args(self) -> BindResult<Vec<Maybe<Value>>> {
                let ($($name,)+) = self;
                Ok(vec![$($name.into_param()?),+])
            }
        }
    };
}

impl_bind_args_tuple!(A);
impl_bind_args_tuple!(A, B);
impl_bind_args_tuple!(A, B, C);
impl_bind_args_tuple!(A, B, C, D);
impl_bind_args_tuple!(A, B, C, D, E);
impl_bind_args_tuple!(A, B, C, D, E, F);
impl_bind_args_tuple!(A, B, C, D, E, F, G);
impl_bind_args_tuple!(A, B, C, D, E, F, G, H);

/// A runtime-sized argument list for [`QueryParams::bind`](crate::QueryParams::bind).
#[derive(Debug, Clone, Default)]
pub struct Args(Vec<BindResult<Maybe<Value>>>);

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: impl IntoParam) -> &mut Self {
        self.0.push(value.into_param());
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P: IntoParam> FromIterator<P> for Args {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Args(iter.into_iter().map(IntoParam::into_param).collect())
    }
}

impl BindArgs for Args {
    fn into_args(self) -> BindResult<Vec<Maybe<Value>>> {
        self.0.into_iter().collect()
    }
}

/// Build a `(column, value)` list for the keyword-style helpers
/// (`eq_all`, `neq_all`, `assign`, `set`, `where_eq`, `values_row`).
///
/// ```ignore
/// let f = q.eq_all(sqlbind::pairs!["name" => not_none(name), "age" => 30]);
/// ```
#[macro_export]
macro_rules! pairs {
    () => {
        ::std::vec::Vec::<(&str, $crate::BindResult<$crate::Maybe<$crate::Value>>)>::new()
    };
    ($($col:expr => $val:expr),+ $(,)?) => {
        ::std::vec![$(($col, $crate::IntoParam::into_param($val))),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BindError;

    #[test]
    fn adapters() {
        assert_eq!(not_none(None::<i32>), Maybe::Suppressed);
        assert_eq!(not_none(Some(10)), Maybe::Present(10));
        assert_eq!(not_empty(0), Maybe::Suppressed);
        assert_eq!(truthy("x"), Maybe::Present("x"));
        assert_eq!(cond(false, 10), Maybe::Suppressed);
        assert_eq!(cond(true, 10), Maybe::Present(10));
    }

    #[test]
    fn into_param_distinguishes_null_from_suppressed() {
        assert_eq!(None::<i32>.into_param(), Ok(Maybe::Present(Value::Null)));
        assert_eq!(not_none(None::<i32>).into_param(), Ok(Maybe::Suppressed));
        assert_eq!(Maybe::Present(5i32).into_param(), Ok(Maybe::Present(Value::Int(5))));
    }

    #[test]
    fn wide_integers_are_range_checked() {
        assert_eq!(20usize.into_param(), Ok(Maybe::Present(Value::Int(20))));
        assert_eq!((-3isize).into_param(), Ok(Maybe::Present(Value::Int(-3))));
        assert_eq!(
            u64::MAX.into_param(),
            Err(BindError::OutOfRange {
                type_name: "u64",
                value: u64::MAX.to_string(),
            })
        );
        assert!(vec![1u128, u128::MAX].into_param().is_err());
        assert!(Some(i128::MIN).into_param().is_err());
    }

    #[test]
    fn suppressed_item_suppresses_list() {
        let items = vec![Maybe::Present(1i32), Maybe::Suppressed];
        assert_eq!(items.into_param(), Ok(Maybe::Suppressed));
        assert_eq!(
            vec![Some(1i32), None].into_param(),
            Ok(Maybe::Present(Value::Array(vec![Value::Int(1), Value::Null])))
        );
    }

    #[test]
    fn bind_args_from_tuples() {
        assert_eq!((10i32, "a").into_args().unwrap().len(), 2);
        assert_eq!(().into_args().unwrap().len(), 0);
        assert_eq!(7i32.into_args(), Ok(vec![Maybe::Present(Value::Int(7))]));
        let args: Args = vec![1, 2, 3].into_iter().collect();
        assert_eq!(args.len(), 3);
        assert!((1i32, u64::MAX).into_args().is_err());
    }

    #[test]
    fn pairs_macro() {
        let p = crate::pairs!["a" => 1, "b" => not_none(None::<i32>)];
        assert_eq!(p[0], ("a", Ok(Maybe::Present(Value::Int(1)))));
        assert_eq!(p[1], ("b", Ok(Maybe::Suppressed)));
    }
}
