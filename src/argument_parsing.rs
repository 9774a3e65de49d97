use clap::Parser;

/// Configure either Postgres or Sqlite connection string
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Postgres Db Connection String
    #[arg(short, long, env, default_value = None)]
    pub pg: Option<String>,

    /// Sqlite Db Connection String (fallback when no Postgres string is given)
    #[arg(short, long, env, default_value = "sqlite://news.db?mode=rwc")]
    pub sqlite_db: String,
}
