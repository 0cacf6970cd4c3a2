//! Config command handlers.

use anyhow::Result;
use lycaddy_gui::ConfigOps;
use lycaddy_gui::types::ConfigReply;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Show the current root directory and port.
pub async fn show(ctx: &CliContext, json: bool) -> Result<()> {
    let result = ConfigOps::new(ctx.backend.deps()).read().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&ConfigReply::from(result.clone()))?);
    }

    let config = result.map_err(CliError::from)?;
    if !json {
        println!("root = {}", config.root_path);
        println!("port = {}", config.port);
    }
    Ok(())
}

/// Update root and/or port. Omitted values keep their current setting.
pub async fn set(ctx: &CliContext, root: Option<String>, port: Option<String>) -> Result<()> {
    if root.is_none() && port.is_none() {
        return Err(CliError::Arguments("pass --root and/or --port".to_string()).into());
    }

    let ops = ConfigOps::new(ctx.backend.deps());
    let current = ops.read().await.map_err(CliError::from)?;
    let root = root.unwrap_or(current.root_path);
    let port = port.unwrap_or_else(|| current.port.to_string());

    let written = ops.write(&root, &port).await.map_err(CliError::from)?;
    println!(
        "Updated {}: root = {}, port = {}",
        ctx.backend.layout().caddyfile.display(),
        written.root_path,
        written.port
    );
    Ok(())
}

/// Prompt for a new document root and write it, keeping the port.
pub async fn pick(ctx: &CliContext) -> Result<()> {
    let picked = ctx.backend.select_directory().await;
    let Some(root) = picked.path else {
        println!("Cancelled");
        return Ok(());
    };
    set(ctx, Some(root), None).await
}
