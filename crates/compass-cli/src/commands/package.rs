use std::path::Path;

use anyhow::Context;
use compass_core::graphql;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PackageCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `compass package`.
pub async fn handle(
    action: &PackageCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let value = match action {
        PackageCommands::Create { application, file } => {
            serde_json::to_value(create(ctx, application, file).await?)?
        }
        PackageCommands::Update { id, file } => serde_json::to_value(update(ctx, id, file).await?)?,
        PackageCommands::Get { id } => serde_json::to_value(get(ctx, id).await?)?,
        PackageCommands::List { application } => serde_json::to_value(list(ctx, application).await?)?,
        PackageCommands::Delete { id } => {
            ctx.packages
                .delete(&ctx.db, &ctx.tenant, id)
                .await
                .with_context(|| format!("failed to delete package '{id}'"))?;
            json!({ "deleted": id })
        }
    };
    output(&value, flags.format)
}

fn read_input<T: DeserializeOwned>(file: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read '{}'", file.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid input in '{}'", file.display()))
}

pub async fn create(
    ctx: &AppContext,
    application: &str,
    file: &Path,
) -> anyhow::Result<graphql::Package> {
    let input: graphql::PackageCreateInput = read_input(file)?;
    let input = ctx.converter.create_input_from_graphql(&input)?;

    let id = ctx.db.generate_id("pkg").await?;
    let pkg = input.to_package(&id, application, &ctx.tenant);
    ctx.packages
        .create(&ctx.db, &pkg)
        .await
        .context("failed to create package")?;

    tracing::debug!(id = %pkg.id, application, "package created");
    Ok(ctx.converter.to_graphql(Some(&pkg))?)
}

pub async fn update(ctx: &AppContext, id: &str, file: &Path) -> anyhow::Result<graphql::Package> {
    let input: graphql::PackageUpdateInput = read_input(file)?;
    let input = ctx.converter.update_input_from_graphql(&input)?;

    let mut pkg = ctx
        .packages
        .get_by_id(&ctx.db, &ctx.tenant, id)
        .await
        .with_context(|| format!("failed to get package '{id}'"))?;
    pkg.set_from_update_input(&input);
    ctx.packages
        .update(&ctx.db, &pkg)
        .await
        .with_context(|| format!("failed to update package '{id}'"))?;

    Ok(ctx.converter.to_graphql(Some(&pkg))?)
}

pub async fn get(ctx: &AppContext, id: &str) -> anyhow::Result<graphql::Package> {
    let pkg = ctx
        .packages
        .get_by_id(&ctx.db, &ctx.tenant, id)
        .await
        .with_context(|| format!("failed to get package '{id}'"))?;
    Ok(ctx.converter.to_graphql(Some(&pkg))?)
}

pub async fn list(ctx: &AppContext, application: &str) -> anyhow::Result<Vec<graphql::Package>> {
    let packages = ctx
        .packages
        .list_by_application_id(&ctx.db, &ctx.tenant, application)
        .await
        .with_context(|| format!("failed to list packages of application '{application}'"))?;
    Ok(ctx.converter.multiple_to_graphql(packages.iter().map(Some))?)
}
