use clap::{Parser, Subcommand};

mod migrate;
mod settings;

use migrate::MigrateAction;
use settings::Database;

#[derive(Debug, Parser)]
#[command(name = "savings", about = "Savings ledger server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the HTTP API (default).
    Serve,
    /// Run schema migrations against the configured database.
    Migrate {
        #[arg(value_enum, default_value_t = MigrateAction::Up)]
        action: MigrateAction,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "savings={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let db = match sea_orm::Database::connect(settings.server.database.connection_url()).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!("failed to connect to database: {err}");
            return Err(err.into());
        }
    };

    if let Some(Command::Migrate { action }) = cli.command {
        if settings.server.database == Database::Memory {
            tracing::warn!("migrating an in-memory database; nothing will persist");
        }
        migrate::apply(&db, action).await?;
        tracing::info!(?action, "migration finished");
        return Ok(());
    }

    if let Err(err) = migrate::apply(&db, MigrateAction::Up).await {
        tracing::error!("failed to initialize database: {err}");
        return Err(err.into());
    }

    let engine = engine::Engine::builder().database(db).build().await?;
    tracing::info!(records = engine.count().await?, "ledger store connected");

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener on {addr}: {err}");
            return Err(err.into());
        }
    };

    server::run_with_listener(engine, listener).await?;
    Ok(())
}
