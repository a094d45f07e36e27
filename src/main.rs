use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wakaf_core::application::{
    ports::{notify::Notifier, time::Clock},
    services::{ApplicationServices, Repositories},
};
use wakaf_core::config::AppConfig;
use wakaf_core::infrastructure::{
    database,
    notify::TracingNotifier,
    repositories::{
        PostgresActivityLogRepository, PostgresApprovalRepository, PostgresFasilitasRepository,
        PostgresInventarisRepository, PostgresPemetaanFasilitasRepository,
        PostgresPemetaanTanahRepository, PostgresSertifikatRepository, PostgresTanahRepository,
    },
    time::SystemClock,
};
use wakaf_core::presentation::http::{routes::build_router, state::HttpState};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let repos = Repositories {
        tanah: Arc::new(PostgresTanahRepository::new(pool.clone())),
        sertifikat: Arc::new(PostgresSertifikatRepository::new(pool.clone())),
        approvals: Arc::new(PostgresApprovalRepository::new(pool.clone())),
        pemetaan_tanah: Arc::new(PostgresPemetaanTanahRepository::new(pool.clone())),
        pemetaan_fasilitas: Arc::new(PostgresPemetaanFasilitasRepository::new(pool.clone())),
        fasilitas: Arc::new(PostgresFasilitasRepository::new(pool.clone())),
        inventaris: Arc::new(PostgresInventarisRepository::new(pool.clone())),
        activity_logs: Arc::new(PostgresActivityLogRepository::new(pool.clone())),
    };

    let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(repos, notifier, clock));
    let state = HttpState { services };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
