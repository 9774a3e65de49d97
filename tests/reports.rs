use chrono::NaiveDate;
use news_reports::db::Db;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

async fn hits(pool: &SqlitePool, path: &str, status: &str, time: &str, n: usize) {
    for _ in 0..n {
        sqlx::query("INSERT INTO log (path, status, time) VALUES (?, ?, ?)")
            .bind(path)
            .bind(status)
            .bind(time)
            .execute(pool)
            .await
            .unwrap();
    }
}

/// In-memory database with the news schema and a small fixed traffic log:
///
/// - 2016-07-16: 99 ok hits and 1 miss, exactly 1% errors
/// - 2016-07-17: article "a" gets 5 ok hits and 1 miss, 16.7% errors
/// - 2016-07-18: articles "b", "c", "d" get 3/4/2 ok hits, no errors
/// - 2016-07-19: 1 ok hit and 1 miss, 50% errors
async fn seeded_db() -> Db {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    for ddl in [
        "CREATE TABLE authors (id INTEGER PRIMARY KEY, name TEXT NOT NULL)",
        "CREATE TABLE articles (slug TEXT NOT NULL, title TEXT NOT NULL, \
         author INTEGER NOT NULL REFERENCES authors(id))",
        "CREATE TABLE log (path TEXT, status TEXT, time TEXT)",
    ] {
        sqlx::query(ddl).execute(&pool).await.unwrap();
    }

    sqlx::query(
        "INSERT INTO authors (id, name) VALUES \
         (1, 'Ursula La Multa'), (2, 'Rudolf von Treppenwitz')",
    )
    .execute(&pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO articles (slug, title, author) VALUES \
         ('a', 'Foo', 1), ('b', 'Bar', 1), ('c', 'Baz', 2), ('d', 'Qux', 2)",
    )
    .execute(&pool)
    .await
    .unwrap();

    hits(&pool, "/ok", "200 OK", "2016-07-16 09:00:00", 99).await;
    hits(&pool, "/missing", "404 NOT FOUND", "2016-07-16 09:30:00", 1).await;

    hits(&pool, "/article/a", "200 OK", "2016-07-17 10:00:00", 5).await;
    hits(&pool, "/article/a", "404 NOT FOUND", "2016-07-17 11:00:00", 1).await;

    hits(&pool, "/article/b", "200 OK", "2016-07-18 10:00:00", 3).await;
    hits(&pool, "/article/c", "200 OK", "2016-07-18 11:00:00", 4).await;
    hits(&pool, "/article/d", "200 OK", "2016-07-18 12:00:00", 2).await;

    hits(&pool, "/ok", "200 OK", "2016-07-19 08:00:00", 1).await;
    hits(&pool, "/gone", "404 NOT FOUND", "2016-07-19 08:01:00", 1).await;

    let db = Db::Sqlite(pool);
    db.initialize_views().await.unwrap();
    db
}

#[tokio::test]
async fn top_articles_returns_at_most_three_in_descending_order() {
    let db = seeded_db().await;
    let articles = db.top_articles().await.unwrap();

    assert_eq!(articles.len(), 3);
    assert!(articles.windows(2).all(|w| w[0].pv >= w[1].pv));

    // Path views count every request, so the 404 hit on "a" counts too.
    assert_eq!(articles[0].title, "Foo");
    assert_eq!(articles[0].pv, 6);
    assert_eq!(articles[1].title, "Baz");
    assert_eq!(articles[1].pv, 4);
    assert_eq!(articles[2].title, "Bar");
    assert_eq!(articles[2].pv, 3);
}

#[tokio::test]
async fn top_authors_sums_views_across_their_articles() {
    let db = seeded_db().await;
    let authors = db.top_authors().await.unwrap();

    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0].name, "Ursula La Multa");
    assert_eq!(authors[0].total_views, 6 + 3);
    assert_eq!(authors[1].name, "Rudolf von Treppenwitz");
    assert_eq!(authors[1].total_views, 4 + 2);
}

#[tokio::test]
async fn high_error_days_filters_above_one_percent_and_sorts_by_date() {
    let db = seeded_db().await;
    let days = db.high_error_days().await.unwrap();

    // 2016-07-16 sits exactly at 1% and must not appear.
    assert_eq!(days.len(), 2);

    assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2016, 7, 17).unwrap());
    assert!((days[0].error_rate - 100.0 / 6.0).abs() < 1e-9);

    assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2016, 7, 19).unwrap());
    assert!((days[1].error_rate - 50.0).abs() < 1e-9);

    assert!(days.iter().all(|d| d.error_rate > 1.0));
    assert!(days.windows(2).all(|w| w[0].date < w[1].date));
}

#[tokio::test]
async fn initialize_views_is_idempotent() {
    let db = seeded_db().await;
    let before = db.top_articles().await.unwrap();

    // Seeding already initialized once, so this is the second run.
    db.initialize_views().await.unwrap();
    let after = db.top_articles().await.unwrap();

    assert_eq!(before.len(), after.len());
    for (b, a) in before.iter().zip(after.iter()) {
        assert_eq!(b.title, a.title);
        assert_eq!(b.pv, a.pv);
    }
}
