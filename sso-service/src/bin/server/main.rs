use std::sync::Arc;

use clap::Parser;
use sso_service::config::Config;
use sso_service::credentials::ports::CredentialServicePort;
use sso_service::credentials::service::CredentialService;
use sso_service::repositories::SqliteStorage;
use sso_service::server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sso-service")]
#[command(about = "Credential verification and token issuance")]
struct Args {
    /// Config file to load over the defaults
    #[arg(long, env = "CONFIG_PATH")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    init_tracing(&config);

    tracing::info!(
        service = "sso-service",
        version = env!("CARGO_PKG_VERSION"),
        env = %config.env,
        "starting application"
    );

    let token_ttl = config.token_ttl()?;

    tracing::info!(
        storage_url = %config.storage.url,
        grpc_port = config.server.grpc_port,
        http_port = config.server.http_port,
        token_ttl_minutes = config.token.ttl_minutes,
        "Configuration loaded"
    );

    let pool = SqliteStorage::connect(&config.storage.url, config.storage.max_connections).await?;
    tracing::info!(
        max_connections = config.storage.max_connections,
        database = "sqlite",
        "Database connection pool created"
    );

    SqliteStorage::run_migrations(&pool).await?;
    tracing::info!(database = "sqlite", "Database migrations completed");

    let storage = Arc::new(SqliteStorage::new(pool));
    let credential_service: Arc<dyn CredentialServicePort> = Arc::new(CredentialService::new(
        Arc::clone(&storage),
        Arc::clone(&storage),
        Arc::clone(&storage),
        token_ttl,
        tracing::info_span!("credentials"),
    ));

    let result = server::run(&config.server, credential_service, async {
        let signal = shutdown_signal().await;
        tracing::info!(signal, "stopping application");
    })
    .await;

    match &result {
        Ok(()) => tracing::info!("application stopped"),
        Err(e) => tracing::error!(
            error = %format!("{e:#}"),
            "application stopped on server failure"
        ),
    }

    result
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "sso_service={0},auth={0},tower_http={0}",
            config.log.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.env == "local" {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    }
}

async fn shutdown_signal() -> &'static str {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => "SIGINT",
        _ = terminate => "SIGTERM",
    }
}
