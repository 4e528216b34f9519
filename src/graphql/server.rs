use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::Router;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tokio::net::TcpListener;

use super::schema::EmpdeskSchema;
use crate::error::Result;

pub const GRAPHQL_PATH: &str = "/graphql";

/// Routes: `POST /graphql` executes operations, `GET /graphql` serves GraphiQL,
/// `GET /health` answers `ok`.
pub fn router(schema: EmpdeskSchema) -> Router {
    Router::new()
        .route(
            GRAPHQL_PATH,
            get(graphiql).post_service(GraphQL::new(schema)),
        )
        .route("/health", get(health))
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn health() -> &'static str {
    "ok"
}

/// Binds the GraphQL listener on `addr` (`host:port`).
pub async fn bind(addr: &str) -> Result<TcpListener> {
    Ok(TcpListener::bind(addr).await?)
}

/// Serves `schema` on an already bound listener until Ctrl-C.
pub async fn run_server(schema: EmpdeskSchema, listener: TcpListener) -> Result<()> {
    tracing::info!(address = %listener.local_addr()?, "GraphQL server listening");

    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
