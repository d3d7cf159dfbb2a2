use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{error, info, warn};

use weatherapp_api::{build_router, AppState};
use weatherapp_core::repositories::{
    ChatRepository, CommentRepository, RefreshTokenStore, UserRepository,
};
use weatherapp_core::services::{
    AuthService, ChatService, CommentService, ProfileService, TokenService,
};
use weatherapp_infrastructure::{
    create_pool, run_migrations, MemoryChatRepository, MemoryCommentRepository,
    MemoryRefreshTokenStore, MemoryUserRepository, PgChatRepository, PgCommentRepository,
    PgUserRepository, RedisRefreshTokenStore,
};
use weatherapp_security::JwtService;
use weatherapp_shared::config::{AppConfig, DatabaseBackend, SessionStoreBackend};
use weatherapp_shared::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (.env, config/*.toml, environment)
    let config = AppConfig::load().context("loading configuration")?;

    // Initialize telemetry; the guard flushes the file writer on exit
    let _log_guard = init_telemetry(&config.log).context("initialising telemetry")?;

    info!("{} starting ({})...", config.app.name, config.app.env);

    let Repositories { users, comments, chat } = repositories(&config).await?;
    let refresh_tokens = refresh_token_store(&config).await?;

    let jwt = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry)
        .with_issuer(config.jwt.issuer.clone())
        .with_audience(config.jwt.audience.clone());
    let tokens = Arc::new(TokenService::new(
        jwt,
        refresh_tokens,
        users.clone(),
        config.jwt.refresh_token_expiry,
    ));

    let state = AppState::new(
        Arc::new(AuthService::new(users.clone(), tokens.clone())),
        Arc::new(ProfileService::new(users)),
        Arc::new(CommentService::new(comments)),
        Arc::new(ChatService::new(chat)),
        tokens,
    );
    let app = build_router(state, &config.cors.allowed_origins);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse().context("parsing app.host")?;
    let addr = SocketAddr::from((host, config.app.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

struct Repositories {
    users: Arc<dyn UserRepository>,
    comments: Arc<dyn CommentRepository>,
    chat: Arc<dyn ChatRepository>,
}

async fn repositories(config: &AppConfig) -> anyhow::Result<Repositories> {
    match config.database.backend {
        DatabaseBackend::Postgres => {
            info!("Connecting to database...");
            let pool = create_pool(
                &config.database.url,
                config.database.max_connections,
                config.database.min_connections,
            )
            .await
            .context("connecting to postgres")?;
            info!("Database connection established.");

            if config.database.run_migrations {
                run_migrations(&pool).await.context("running migrations")?;
            }
            Ok(Repositories {
                users: Arc::new(PgUserRepository::new(pool.clone())),
                comments: Arc::new(PgCommentRepository::new(pool.clone())),
                chat: Arc::new(PgChatRepository::new(pool)),
            })
        }
        DatabaseBackend::Memory => {
            warn!("Using in-memory repositories; accounts, comments and chat are lost on restart");
            Ok(Repositories {
                users: Arc::new(MemoryUserRepository::new()),
                comments: Arc::new(MemoryCommentRepository::new()),
                chat: Arc::new(MemoryChatRepository::new()),
            })
        }
    }
}

async fn refresh_token_store(config: &AppConfig) -> anyhow::Result<Arc<dyn RefreshTokenStore>> {
    match (config.session.store, config.redis.as_ref()) {
        (SessionStoreBackend::Redis, Some(redis)) => {
            let store = RedisRefreshTokenStore::connect(&redis.url, redis.key_prefix.clone())
                .await
                .context("connecting to redis")?;
            Ok(Arc::new(store))
        }
        (SessionStoreBackend::Redis, None) => {
            anyhow::bail!("session.store = \"redis\" requires a [redis] section")
        }
        (SessionStoreBackend::Memory, _) => {
            info!("Refresh tokens are kept in process memory");
            Ok(Arc::new(MemoryRefreshTokenStore::new()))
        }
    }
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
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
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
