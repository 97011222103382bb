use anyhow::{anyhow, Context};
use axum::serve;
use directory::{
    app, build_app_state, create_dir_all, get_config_info, get_log_level, is_directory,
    setup_logger, theme::Theme, Database,
};
use futures::TryFutureExt;
use log::{error, info, warn};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::{net::TcpListener, signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = get_config_info();
    let log_level = get_log_level(&cli);

    setup_logger()
        .level(log_level)
        .level_for("directory", log_level)
        .level_for("sqlx", log::LevelFilter::Warn)
        .level_for("http_response", log_level)
        .level_for("http_request", log_level)
        .apply()?;

    let data_dir = cli.data_dir();
    let static_dir = cli.static_dir();
    let host = cli.host();
    let port = cli.port();

    create_dir_all(&data_dir)
        .with_context(|| format!("failed to create data directory {}", data_dir))?;
    if !is_directory(&static_dir) {
        warn!("static directory {} not found, stylesheet will 404", static_dir);
    }

    let socket_addr = SocketAddr::from_str(&format!("{}:{}", host, port))
        .map_err(|e| anyhow!("invalid address: {}", e))?;

    let listener = TcpListener::bind(socket_addr)
        .map_err(|e| anyhow!("error binding to socket: {}", e))
        .await?;

    info!("Laboratory directory starting...");
    info!("  Listen: http://{}", socket_addr);
    info!("  Data:   {}", data_dir);
    info!("  Static: {}", static_dir);

    let database = Database::new(&data_dir).await.map_err(|e| {
        error!("error setting up SQLite database: {:#}", e);
        e
    })?;

    let app_state = build_app_state(static_dir, Arc::new(database.clone()), Theme::itam());
    let app = app(app_state);

    let served = serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await;

    database.close().await;
    served?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
