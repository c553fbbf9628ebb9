use std::net::SocketAddr;
use std::sync::Arc;

use secrecy::ExposeSecret;

use userhub::{
    config::Config,
    database, handlers,
    services::{auth, token::TokenService},
    state::AppState,
    store::{PgUserStore, UserStore},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "userhub=debug,axum=info,tower_http=info".to_string());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::load()?;
    tracing::info!("Loaded configuration:\n{}", config);

    let pool = database::connect(&config.database).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let store: Arc<dyn UserStore> = Arc::new(PgUserStore::new(pool));
    let tokens = Arc::new(TokenService::new(
        config.auth.jwt_secret.expose_secret(),
        config.auth.token_ttl(),
    ));

    // Optional out-of-band admin provisioning; signup never grants admin.
    if let (Some(email), Some(password)) = (
        &config.auth.bootstrap_admin_email,
        &config.auth.bootstrap_admin_password,
    ) {
        auth::ensure_bootstrap_admin(store.as_ref(), email, password.expose_secret()).await?;
    }

    let state = AppState::new(store, tokens);
    let app = handlers::router(state);

    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port).parse()?;
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown signal received");
    }
}
