use attendance_audit::application::{
    commands::audit::AuditRecorder,
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::ApplicationServices,
};
use attendance_audit::config::AppConfig;
use attendance_audit::domain::{audit::AuditEventRepository, user::UserRepository};
use attendance_audit::infrastructure::{
    database,
    repositories::{PostgresAuditEventRepository, PostgresUserRepository},
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    time::SystemClock,
};
use attendance_audit::presentation::http::{routes::build_configured_router, state::HttpState};
use anyhow::Result;
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

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let audit_repo: Arc<dyn AuditEventRepository> =
        Arc::new(PostgresAuditEventRepository::new(pool.clone()));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_manager_impl =
        BiscuitTokenManager::new(config.biscuit_private_key(), config.token_ttl())?;
    let token_manager: Arc<dyn TokenManager> = Arc::new(token_manager_impl);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let audit_recorder = Arc::new(
        AuditRecorder::new(
            Arc::clone(&audit_repo),
            Arc::clone(&user_repo),
            Arc::clone(&clock),
            config.display_offset(),
        )
        .with_write_timeout(config.audit_write_timeout()),
    );

    let services = Arc::new(ApplicationServices::with_recorder(
        user_repo,
        audit_repo,
        password_hasher,
        token_manager,
        clock,
        config.display_offset(),
        audit_recorder,
    ));

    let state = HttpState { services };

    let app = build_configured_router(state, config.allowed_origins(), config.public_api_url());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(%address, display_offset = %config.display_offset(), "listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
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
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
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
