use sqlbind::prelude::*;
use tokio_postgres::NoTls;

async fn connect() -> Option<tokio_postgres::Client> {
    dotenvy::dotenv().ok();
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(v) => v,
        Err(_) => {
            eprintln!("DATABASE_URL is not set; skipping postgres tests");
            return None;
        }
    };
    let (client, connection) = tokio_postgres::connect(&database_url, NoTls)
        .await
        .expect("failed to connect to DATABASE_URL");
    tokio::spawn(async move {
        let _ = connection.await;
    });
    Some(client)
}

#[tokio::test]
async fn dynamic_filters_roundtrip() {
    let Some(client) = connect().await else {
        return;
    };

    let mut q = presets::postgres();
    let name: Option<&str> = None;
    let sql = format!(
        "SELECT n::int8 FROM generate_series(1, 20) AS n {} ORDER BY n",
        where_([
            q.expr("n").in_(vec![2i64, 4, 6, 30]).unwrap(),
            q.expr("n::text").eq(not_none(name)),
            q.expr("n").lt(5i64),
        ])
    );
    assert_eq!(
        sql,
        "SELECT n::int8 FROM generate_series(1, 20) AS n WHERE n = ANY($1) AND n < $2 ORDER BY n"
    );

    let params = q.finish().unwrap();
    let rows = client.query(&sql, &params.as_refs()).await.unwrap();
    let got: Vec<i64> = rows.iter().map(|r| r.get(0)).collect();
    assert_eq!(got, vec![2, 4]);
}

#[tokio::test]
async fn values_insert_roundtrip() {
    let Some(client) = connect().await else {
        return;
    };

    client
        .batch_execute("CREATE TEMP TABLE sqlbind_items (id int4, label text, price float8)")
        .await
        .unwrap();

    let mut q = presets::postgres();
    let rows = vec![
        pairs!["id" => 1i32, "label" => "a", "price" => 1.5],
        pairs!["id" => 2i32, "label" => None::<&str>, "price" => 2.0],
    ];
    let sql = format!("INSERT INTO sqlbind_items {}", q.values(rows));
    let params = q.finish().unwrap();
    let inserted = client.execute(&sql, &params.as_refs()).await.unwrap();
    assert_eq!(inserted, 2);

    let mut q = presets::postgres();
    let sql = format!(
        "SELECT id FROM sqlbind_items {}",
        q.where_eq(pairs!["label" => None::<&str>])
    );
    assert_eq!(sql, "SELECT id FROM sqlbind_items WHERE label IS NULL");
    let params = q.finish().unwrap();
    let row = client.query_one(&sql, &params.as_refs()).await.unwrap();
    assert_eq!(row.get::<_, i32>(0), 2);
}
