use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tonic::transport::Server;

use crate::config::ServerConfig;
use crate::credentials::ports::CredentialServicePort;
use crate::inbound::grpc::AuthGrpcService;
use crate::inbound::http::router::create_router;
use crate::proto::auth_server::AuthServer;

/// Serve the HTTP and gRPC surfaces until `shutdown` resolves.
///
/// If either server stops first, both are told to drain and its error is
/// returned.
///
/// # Arguments
/// * `config` - Ports and request timeout
/// * `credential_service` - Service shared by both surfaces
/// * `shutdown` - Resolves when the process is asked to stop
pub async fn run<S>(
    config: &ServerConfig,
    credential_service: Arc<dyn CredentialServicePort>,
    shutdown: S,
) -> Result<(), anyhow::Error>
where
    S: Future<Output = ()>,
{
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let http_address = format!("0.0.0.0:{}", config.http_port);
    let http_listener = TcpListener::bind(&http_address)
        .await
        .with_context(|| format!("failed to bind http address {http_address}"))?;
    tracing::info!(
        address = %http_listener.local_addr()?,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(Arc::clone(&credential_service));
    let mut http_shutdown = shutdown_rx.clone();
    let http_server = tokio::spawn(async move {
        axum::serve(http_listener, http_application)
            .with_graceful_shutdown(async move {
                let _ = http_shutdown.changed().await;
            })
            .await
    });

    let grpc_address: SocketAddr = format!("0.0.0.0:{}", config.grpc_port).parse()?;
    let grpc_service = AuthGrpcService::new(credential_service);
    let request_timeout = Duration::from_secs(config.timeout_secs);
    tracing::info!(
        address = %grpc_address,
        protocol = "grpc",
        timeout_secs = config.timeout_secs,
        "gRpc server listening"
    );

    let mut grpc_shutdown = shutdown_rx;
    let grpc_server = tokio::spawn(async move {
        Server::builder()
            .timeout(request_timeout)
            .add_service(AuthServer::new(grpc_service))
            .serve_with_shutdown(grpc_address, async move {
                let _ = grpc_shutdown.changed().await;
            })
            .await
    });

    let servers = async {
        tokio::try_join!(
            server_exit("http", http_server),
            server_exit("grpc", grpc_server),
        )
        .map(|_| ())
    };
    tokio::pin!(servers);

    let early_exit = tokio::select! {
        () = shutdown => None,
        result = &mut servers => Some(result),
    };

    let _ = shutdown_tx.send(true);

    match early_exit {
        None => servers.await,
        Some(Err(e)) => Err(e),
        Some(Ok(())) => anyhow::bail!("servers stopped before shutdown was requested"),
    }
}

async fn server_exit<E>(
    name: &'static str,
    handle: JoinHandle<Result<(), E>>,
) -> Result<(), anyhow::Error>
where
    E: std::error::Error + Send + Sync + 'static,
{
    handle
        .await
        .with_context(|| format!("{name} server task failed"))?
        .with_context(|| format!("{name} server failed"))
}
