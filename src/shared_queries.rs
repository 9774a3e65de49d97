pub const SELECT_TOP_THREE_ARTICLES_QUERY: &str = r#"
                SELECT title, pv
                FROM most_viewed_articles
                ORDER BY pv DESC
                LIMIT 3
                "#;
pub const SELECT_AUTHOR_TOTAL_VIEWS_QUERY: &str = r#"
                SELECT name, CAST(SUM(pv) AS bigint) AS total_views
                FROM authors
                JOIN most_viewed_articles ON authors.id = most_viewed_articles.author_id
                GROUP BY name
                ORDER BY total_views DESC
                "#;
pub const SELECT_HIGH_ERROR_DAYS_QUERY: &str = r#"
                SELECT date, error_rate
                FROM daily_error_rates
                WHERE error_rate > 1.0
                ORDER BY date ASC
                "#;
