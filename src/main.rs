use anyhow::Result;
use events_booking::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::ApplicationServices,
};
use events_booking::config::AppConfig;
use events_booking::domain::{
    event::{EventReadRepository, EventWriteRepository},
    registration::RegistrationRepository,
    user::UserRepository,
};
use events_booking::infrastructure::{
    database,
    repositories::{
        SqliteEventReadRepository, SqliteEventWriteRepository, SqliteRegistrationRepository,
        SqliteUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::JwtTokenManager},
    time::SystemClock,
};
use events_booking::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

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
    tracing::debug!(?config, "configuration loaded");

    let pool = database::init_pool(
        config.database_url(),
        config.database_max_connections(),
        config.database_acquire_timeout(),
    )
    .await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool.clone()));
    let event_write_repo: Arc<dyn EventWriteRepository> =
        Arc::new(SqliteEventWriteRepository::new(pool.clone()));
    let event_read_repo: Arc<dyn EventReadRepository> =
        Arc::new(SqliteEventReadRepository::new(pool.clone()));
    let registration_repo: Arc<dyn RegistrationRepository> =
        Arc::new(SqliteRegistrationRepository::new(pool.clone()));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_manager: Arc<dyn TokenManager> = Arc::new(JwtTokenManager::new(
        config.token_secret(),
        config.token_ttl(),
        config.token_expiry_policy(),
        clock,
    )?);
    tracing::info!(policy = %config.token_expiry_policy(), "token expiry policy");

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        event_write_repo,
        event_read_repo,
        registration_repo,
        password_hasher,
        token_manager,
    ));

    let app = build_router(HttpState { services });

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
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
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
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
                tracing::error!(error = %err, "failed to install terminate handler");
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
