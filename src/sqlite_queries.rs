// Sqlite has no CREATE OR REPLACE VIEW, so each view is dropped then
// recreated inside the initialization transaction.
pub const DROP_VIEW_DAILY_ERROR_RATES_QUERY: &str = "DROP VIEW IF EXISTS daily_error_rates";
pub const DROP_VIEW_MOST_VIEWED_ARTICLES_QUERY: &str = "DROP VIEW IF EXISTS most_viewed_articles";
pub const DROP_VIEW_MOST_VIEWED_PATHS_QUERY: &str = "DROP VIEW IF EXISTS most_viewed_paths";

pub const CREATE_VIEW_MOST_VIEWED_PATHS_QUERY: &str = r#"
                CREATE VIEW most_viewed_paths AS
                SELECT path, COUNT(*) AS pv
                FROM log
                GROUP BY path
                ORDER BY pv DESC
                "#;
pub const CREATE_VIEW_MOST_VIEWED_ARTICLES_QUERY: &str = r#"
                CREATE VIEW most_viewed_articles AS
                SELECT title, articles.author AS author_id, pv
                FROM articles
                JOIN most_viewed_paths ON '/article/' || articles.slug = most_viewed_paths.path
                ORDER BY pv DESC
                "#;
pub const CREATE_VIEW_DAILY_ERROR_RATES_QUERY: &str = r#"
                CREATE VIEW daily_error_rates AS
                SELECT date(time) AS date,
                100.0 * COUNT(CASE WHEN status NOT LIKE '2%' THEN 1 END) / COUNT(*) AS error_rate
                FROM log
                GROUP BY date
                ORDER BY date ASC
                "#;
