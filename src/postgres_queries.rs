pub const CREATE_VIEW_MOST_VIEWED_PATHS_QUERY: &str = r#"
                CREATE OR REPLACE VIEW most_viewed_paths AS
                SELECT path, COUNT(*) AS pv
                FROM log
                GROUP BY path
                ORDER BY pv DESC
                "#;
pub const CREATE_VIEW_MOST_VIEWED_ARTICLES_QUERY: &str = r#"
                CREATE OR REPLACE VIEW most_viewed_articles AS
                SELECT title, articles.author AS author_id, pv
                FROM articles
                JOIN most_viewed_paths ON concat('/article/', articles.slug) = most_viewed_paths.path
                ORDER BY pv DESC
                "#;
pub const CREATE_VIEW_DAILY_ERROR_RATES_QUERY: &str = r#"
                CREATE OR REPLACE VIEW daily_error_rates AS
                SELECT CAST(date_trunc('day', time) AS date) AS date,
                CAST(100.0 * COUNT(CASE WHEN status NOT LIKE '2%' THEN 1 END) AS float8) / COUNT(*) AS error_rate
                FROM log
                GROUP BY date
                ORDER BY date ASC
                "#;
