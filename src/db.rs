use sqlx::{PgPool, SqlitePool};
use tracing::info;

use crate::argument_parsing::Args;
use crate::error::ReportError;
use crate::report::{ArticleViews, AuthorViews, DailyErrorRate};
use crate::{postgres_queries, shared_queries, sqlite_queries};

#[derive(Clone)]
pub enum Db {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl Db {
    /// Connect to the database the arguments select. An empty Postgres
    /// connection string falls through to Sqlite.
    pub async fn from_args(args: Args) -> Result<Self, ReportError> {
        match args.pg {
            Some(pg_string) if !pg_string.is_empty() => {
                info!("connecting to postgres");
                Ok(Db::Postgres(PgPool::connect(&pg_string).await?))
            }
            _ => {
                info!(db = %args.sqlite_db, "connecting to sqlite");
                Ok(Db::Sqlite(SqlitePool::connect(&args.sqlite_db).await?))
            }
        }
    }

    /// Create or replace the three reporting views as one unit of work.
    /// Runs inside a single transaction, so a failing view definition
    /// leaves no partial view set behind.
    pub async fn initialize_views(&self) -> Result<(), ReportError> {
        match self {
            Self::Postgres(p) => Self::initialize_views_postgres(p).await,
            Self::Sqlite(s) => Self::initialize_views_sqlite(s).await,
        }
    }

    async fn initialize_views_postgres(pool: &PgPool) -> Result<(), ReportError> {
        let mut tx = pool.begin().await?;
        for query in [
            postgres_queries::CREATE_VIEW_MOST_VIEWED_PATHS_QUERY,
            postgres_queries::CREATE_VIEW_MOST_VIEWED_ARTICLES_QUERY,
            postgres_queries::CREATE_VIEW_DAILY_ERROR_RATES_QUERY,
        ] {
            if let Err(e) = sqlx::query(query).execute(&mut *tx).await {
                tx.rollback().await?;
                return Err(ReportError::Sql(e));
            }
        }
        tx.commit().await?;
        info!("postgres views initialized");
        Ok(())
    }

    async fn initialize_views_sqlite(pool: &SqlitePool) -> Result<(), ReportError> {
        let mut tx = pool.begin().await?;
        // Drop order is the reverse of creation so dependent views go first.
        for query in [
            sqlite_queries::DROP_VIEW_DAILY_ERROR_RATES_QUERY,
            sqlite_queries::DROP_VIEW_MOST_VIEWED_ARTICLES_QUERY,
            sqlite_queries::DROP_VIEW_MOST_VIEWED_PATHS_QUERY,
            sqlite_queries::CREATE_VIEW_MOST_VIEWED_PATHS_QUERY,
            sqlite_queries::CREATE_VIEW_MOST_VIEWED_ARTICLES_QUERY,
            sqlite_queries::CREATE_VIEW_DAILY_ERROR_RATES_QUERY,
        ] {
            if let Err(e) = sqlx::query(query).execute(&mut *tx).await {
                tx.rollback().await?;
                return Err(ReportError::Sql(e));
            }
        }
        tx.commit().await?;
        info!("sqlite views initialized");
        Ok(())
    }

    /// The three most viewed articles of all time, most viewed first.
    pub async fn top_articles(&self) -> Result<Vec<ArticleViews>, ReportError> {
        let articles = match self {
            Self::Postgres(p) => {
                sqlx::query_as::<_, ArticleViews>(shared_queries::SELECT_TOP_THREE_ARTICLES_QUERY)
                    .fetch_all(p)
                    .await?
            }
            Self::Sqlite(s) => {
                sqlx::query_as::<_, ArticleViews>(shared_queries::SELECT_TOP_THREE_ARTICLES_QUERY)
                    .fetch_all(s)
                    .await?
            }
        };
        Ok(articles)
    }

    /// Every author with at least one viewed article, ranked by the sum of
    /// views across their articles.
    pub async fn top_authors(&self) -> Result<Vec<AuthorViews>, ReportError> {
        let authors = match self {
            Self::Postgres(p) => {
                sqlx::query_as::<_, AuthorViews>(shared_queries::SELECT_AUTHOR_TOTAL_VIEWS_QUERY)
                    .fetch_all(p)
                    .await?
            }
            Self::Sqlite(s) => {
                sqlx::query_as::<_, AuthorViews>(shared_queries::SELECT_AUTHOR_TOTAL_VIEWS_QUERY)
                    .fetch_all(s)
                    .await?
            }
        };
        Ok(authors)
    }

    /// Days on which more than 1% of requests errored, earliest first.
    pub async fn high_error_days(&self) -> Result<Vec<DailyErrorRate>, ReportError> {
        let days = match self {
            Self::Postgres(p) => {
                sqlx::query_as::<_, DailyErrorRate>(shared_queries::SELECT_HIGH_ERROR_DAYS_QUERY)
                    .fetch_all(p)
                    .await?
            }
            Self::Sqlite(s) => {
                sqlx::query_as::<_, DailyErrorRate>(shared_queries::SELECT_HIGH_ERROR_DAYS_QUERY)
                    .fetch_all(s)
                    .await?
            }
        };
        Ok(days)
    }
}
