use crate::graphql::{GRAPHQL_PATH, build_schema, run_server};
use anyhow::{Context, Result};

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or(ctx.config.server.host);
    let port = port.unwrap_or(ctx.config.server.port);

    // IPv6 literals need brackets inside a URL
    let url_host = if host.contains(':') {
        format!("[{}]", host)
    } else {
        host.clone()
    };

    let schema = build_schema(ctx.db);

    println!(
        "Starting GraphQL server on http://{}:{}{}",
        url_host, port, GRAPHQL_PATH
    );
    println!("GraphiQL: http://{}:{}{}", url_host, port, GRAPHQL_PATH);

    tokio::runtime::Runtime::new()?
        .block_on(run_server(schema, &host, port))
        .with_context(|| format!("Failed to serve on {}:{}", host, port))?;
    Ok(())
}
