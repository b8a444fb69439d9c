use axum::{Router, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use google_login_axum::{GL_ROUTE_PREFIX, google_login_router, init};

mod handlers;

use crate::handlers::{account, index};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Connect the stores and seed the OAuth settings before serving
    init().await?;

    let app = Router::new()
        .route("/", get(index))
        .route("/account", get(account))
        .nest(GL_ROUTE_PREFIX.as_str(), google_login_router());

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
