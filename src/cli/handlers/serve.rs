use crate::graphql::{GRAPHQL_PATH, bind, run_server};
use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext) -> Result<()> {
    let addr = ctx.config.server.bind_address();

    tokio::runtime::Runtime::new()?.block_on(async {
        let schema = ctx.schema().await?;
        let listener = bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        println!(
            "{} http://localhost:{}{}",
            "GraphQL server running on".green(),
            listener.local_addr()?.port(),
            GRAPHQL_PATH
        );

        run_server(schema, listener).await?;
        anyhow::Ok(())
    })
}
