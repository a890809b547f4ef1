//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use jobboard_common::{
    AppConfig, AppError, JwtService, StorageConfig, VerificationTokenService,
};
use jobboard_core::Mailer;
use jobboard_db::{create_pool, run_migrations, MemoryStore};
use jobboard_service::{LogMailer, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;

    Ok(api.merge(health_routes()).with_state(state))
}

/// Initialize all dependencies and create AppState; mail goes to the log.
///
/// Outside production the log also carries verification links at `info`.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let mailer = Arc::new(
        LogMailer::new(config.mail.from.clone()).with_links(!config.app.env.is_production()),
    );
    create_app_state_with_mailer(config, mailer).await
}

/// Initialize all dependencies with a caller-provided mailer
pub async fn create_app_state_with_mailer(
    config: AppConfig,
    mailer: Arc<dyn Mailer>,
) -> Result<AppState, AppError> {
    let builder = ServiceContextBuilder::new()
        .mailer(mailer)
        .jwt_service(Arc::new(JwtService::new(
            &config.jwt.secret,
            config.jwt.session_ttl,
        )))
        .verification_tokens(Arc::new(VerificationTokenService::new(
            &config.verification.secret,
            config.verification.ttl,
        )))
        .public_url(config.app.public_url.clone());

    let (builder, pool) = match &config.storage {
        StorageConfig::Postgres(db) => {
            info!("Connecting to PostgreSQL...");
            let pool = create_pool(db)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            if db.run_migrations {
                run_migrations(&pool)
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                info!("Database migrations applied");
            }

            (builder.postgres(pool.clone()), Some(pool))
        }
        StorageConfig::Memory => {
            warn!("Using in-memory storage; all data is lost on shutdown");
            (builder.memory(MemoryStore::new()), None)
        }
    };

    let service_context = builder
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, pool))
}

/// Run the HTTP server on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read listener address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
