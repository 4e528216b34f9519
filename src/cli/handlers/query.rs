use anyhow::Result;

use super::CommandContext;

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let vars = parse_variables(variables)?;
    let response = tokio::runtime::Runtime::new()?.block_on(async {
        let schema = ctx.schema().await?;
        let request = async_graphql::Request::new(query).variables(vars);
        anyhow::Ok(schema.execute(request).await)
    })?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

pub(super) fn parse_variables(variables: Option<String>) -> Result<async_graphql::Variables> {
    Ok(match variables {
        Some(v) => serde_json::from_str(&v)?,
        None => async_graphql::Variables::default(),
    })
}
