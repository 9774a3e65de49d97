use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::db::Db;
use crate::error::ReportError;

#[derive(sqlx::FromRow, Serialize)]
pub struct ArticleViews {
    pub title: String,
    pub pv: i64,
}

#[derive(sqlx::FromRow, Serialize)]
pub struct AuthorViews {
    pub name: String,
    pub total_views: i64,
}

#[derive(sqlx::FromRow, Serialize)]
pub struct DailyErrorRate {
    pub date: NaiveDate,
    pub error_rate: f64,
}

impl fmt::Display for ArticleViews {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" --- {} views", self.title, self.pv)
    }
}

impl fmt::Display for AuthorViews {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --- {} views", self.name, self.total_views)
    }
}

impl fmt::Display for DailyErrorRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} --- {:.1}% errors",
            self.date.format("%B %d, %Y"),
            self.error_rate
        )
    }
}

pub async fn print_top_articles(db: &Db) -> Result<(), ReportError> {
    println!("1. The most popular three articles of all time:");
    let articles = db.top_articles().await?;
    debug!(rows = articles.len(), "top articles fetched");
    for article in &articles {
        println!("{article}");
    }
    println!();
    Ok(())
}

pub async fn print_top_authors(db: &Db) -> Result<(), ReportError> {
    println!("2. The most popular article authors of all time:");
    let authors = db.top_authors().await?;
    debug!(rows = authors.len(), "author totals fetched");
    for author in &authors {
        println!("{author}");
    }
    println!();
    Ok(())
}

pub async fn print_high_error_days(db: &Db) -> Result<(), ReportError> {
    println!("3. The dates when more than 1% of requests lead to errors:");
    let days = db.high_error_days().await?;
    debug!(rows = days.len(), "high error days fetched");
    for day in &days {
        println!("{day}");
    }
    println!();
    Ok(())
}
