//! Build a search query from optional filters and print it with its
//! parameters in a few placeholder styles.
//!
//! Run with: cargo run --example dynamic_filters -p sqlbind

use sqlbind::prelude::*;

#[derive(Debug, Default)]
struct Search<'a> {
    name: Option<&'a str>,
    min_age: Option<i32>,
    max_age: Option<i32>,
    roles: Vec<&'a str>,
    tag: Option<&'a str>,
    page: Option<i32>,
}

const PAGE_SIZE: i32 = 20;

fn build(q: &mut QueryParams, s: &Search<'_>) -> BindResult<String> {
    let filters = [
        q.col("name").eq(not_none(s.name)),
        q.in_range("age", not_none(s.min_age), not_none(s.max_age)),
        q.in_("role", not_empty(s.roles.clone()))?,
        q.col("tags").like("%{}%", s.tag.map_or(Maybe::Suppressed, Maybe::Present)),
    ];
    Ok(format!(
        "SELECT id, name FROM users {} {} {} {}",
        where_(filters),
        order_by(["name"]),
        q.limit(PAGE_SIZE),
        q.offset(not_none(s.page.map(|p| p * PAGE_SIZE))),
    ))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let searches = [
        Search::default(),
        Search {
            name: Some("alice"),
            ..Default::default()
        },
        Search {
            min_age: Some(18),
            roles: vec!["admin", "owner"],
            tag: Some("50%_off"),
            page: Some(2),
            ..Default::default()
        },
    ];

    let styles: [(&str, fn() -> QueryParams); 3] = [
        ("sqlite", presets::sqlite),
        ("postgres", presets::postgres),
        ("pyformat", presets::default_pyformat),
    ];

    for search in &searches {
        println!("{search:?}");
        for (label, make) in styles {
            let mut q = make();
            let sql = build(&mut q, search)?;
            let params = q.finish()?;
            println!("  [{label}] {}", sql.trim_end());
            println!("  [{label}] params = {}", serde_json::to_string(&params)?);
        }
        println!();
    }

    Ok(())
}
