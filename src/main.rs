use anyhow::Result;
use kiosk_core::application::{
    ports::{security::TokenManager, time::Clock},
    services::ApplicationServices,
};
use kiosk_core::config::{AppConfig, LogFormat};
use kiosk_core::domain::{
    comment::CommentRepository, native_product::NativeProductRepository,
    order::OrderRepository, package::PackageRepository, post::PostRepository,
    product::ProductRepository,
};
use kiosk_core::infrastructure::{
    database,
    repositories::{
        PostgresCommentRepository, PostgresNativeProductRepository, PostgresOrderRepository,
        PostgresPackageRepository, PostgresPostRepository, PostgresProductRepository,
    },
    security::token::JwtTokenManager,
    time::SystemClock,
};
use kiosk_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::Instrument;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("fatal error: {err}");
            std::process::exit(1);
        }
    };
    init_tracing(config.log_format());

    let span = tracing::info_span!("kiosk_core", build = config.build_number().unwrap_or("dev"));
    if let Err(err) = bootstrap(config).instrument(span).await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap(config: AppConfig) -> Result<()> {
    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let post_repo: Arc<dyn PostRepository> = Arc::new(PostgresPostRepository::new(pool.clone()));
    let comment_repo: Arc<dyn CommentRepository> =
        Arc::new(PostgresCommentRepository::new(pool.clone()));
    let product_repo: Arc<dyn ProductRepository> =
        Arc::new(PostgresProductRepository::new(pool.clone()));
    let package_repo: Arc<dyn PackageRepository> =
        Arc::new(PostgresPackageRepository::new(pool.clone()));
    let order_repo: Arc<dyn OrderRepository> = Arc::new(PostgresOrderRepository::new(pool.clone()));
    let native_product_repo: Arc<dyn NativeProductRepository> =
        Arc::new(PostgresNativeProductRepository::new(pool));

    let token_manager: Arc<dyn TokenManager> = Arc::new(JwtTokenManager::new(
        config.access_token_secret(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        post_repo,
        comment_repo,
        product_repo,
        package_repo,
        order_repo,
        native_product_repo,
        token_manager,
        clock,
    ));

    let state = HttpState { services };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(env_filter));
    let result = match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .try_init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };

    if result.is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
