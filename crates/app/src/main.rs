mod db;
mod render;
mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use services::{AppServices, Clock, Route};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::db::{normalize_sqlite_url, prepare_sqlite_file};
use crate::shell::{Flow, Shell};

/// Level-gated quiz in the terminal.
#[derive(Parser, Debug)]
#[command(name = "quiz", version)]
struct Args {
    /// `SQLite` database holding progress.
    #[arg(long = "db", env = "QUIZ_DB_URL", default_value = "sqlite://quiz.sqlite3")]
    db_url: String,

    /// Keep progress in memory only; nothing survives exit.
    #[arg(long)]
    memory: bool,

    /// Path to open first, e.g. `/category/beginner`.
    #[arg(long, default_value = "/")]
    route: String,
}

async fn build_services(args: &Args) -> Result<AppServices> {
    let clock = Clock::default_clock();
    if args.memory {
        info!("using in-memory progress store");
        return AppServices::in_memory(clock).context("building services");
    }

    let db_url = normalize_sqlite_url(&args.db_url);
    prepare_sqlite_file(&db_url)?;
    info!(db = %db_url, "opening progress database");
    AppServices::new_sqlite(&db_url, clock)
        .await
        .with_context(|| format!("opening {db_url}"))
}

async fn run(args: Args) -> Result<()> {
    let services = build_services(&args).await?;
    let mut shell = Shell::open(services, Route::parse(&args.route)).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    loop {
        stdout.write_all(shell.render().as_bytes()).await?;
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if shell.handle(&line).await == Flow::Exit {
            break;
        }
    }

    info!(route = %shell.route(), "quiz closed");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Args::parse()).await
}
