use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{Router, response::Html, routing::get};
use tokio::net::TcpListener;

use super::RosterSchema;
use crate::error::Result;

pub const GRAPHQL_PATH: &str = "/graphql";

/// Routes: `POST /graphql` executes requests, `GET /graphql` serves GraphiQL.
pub fn router(schema: RosterSchema) -> Router {
    Router::new().route("/", get(index)).route(
        GRAPHQL_PATH,
        get(graphiql).post_service(GraphQL::new(schema)),
    )
}

/// Bind `host:port` and serve until Ctrl-C.
///
/// `host` may be a hostname such as `localhost` or an IPv4/IPv6 literal; it is
/// resolved at bind time.
pub async fn run_server(schema: RosterSchema, host: &str, port: u16) -> Result<()> {
    let listener = TcpListener::bind((host, port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "GraphQL server listening");

    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

async fn index() -> Html<String> {
    Html(format!(
        "<h1>roster GraphQL API is running</h1><p>Open <a href=\"{path}\">{path}</a> to explore it.</p>",
        path = GRAPHQL_PATH
    ))
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
