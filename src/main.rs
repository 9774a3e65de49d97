use clap::Parser;
use news_reports::argument_parsing::Args;
use news_reports::db::Db;
use news_reports::error::ReportError;
use news_reports::report;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays clean report text.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ReportError> {
    let args = Args::parse();
    let db = Db::from_args(args).await?;
    db.initialize_views().await?;
    report::print_top_articles(&db).await?;
    report::print_top_authors(&db).await?;
    report::print_high_error_days(&db).await?;
    Ok(())
}
