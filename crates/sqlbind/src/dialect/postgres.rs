use super::Dialect;
use crate::error::BindResult;
use crate::fragment::Fragment;
use crate::query::QueryParams;
use crate::value::Value;

/// PostgreSQL: membership as `field = ANY(<array>)`.
///
/// Postgres rejects `IN $1`, but binds a whole array behind `ANY`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDialect;

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn render_in(
        &self,
        q: &mut QueryParams,
        field: &str,
        values: Vec<Value>,
    ) -> BindResult<Fragment> {
        let token = q.value(Value::Array(values));
        Ok(Fragment::raw(format!("{field} = ANY({token})")))
    }
}
