//! InboxHands - webmail inbox reader for the running Chrome.
//!
//! Main entry point for the InboxHands CLI.

mod cli;
mod register;

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use serde_json::Value;
use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use inboxhands_config::{ConfigLoader, ConfigValidator, LoggingConfig};
use inboxhands_core::ToolRegistry;
use inboxhands_protocols::error::ToolError;
use inboxhands_protocols::tool::ToolContext;

use crate::cli::Cli;

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(&logging.dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("inboxhands")
        .filename_suffix("log")
        .max_log_files(14)
        .build(&logging.dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The worker flushes on drop, so it has to outlive main.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    tracing_subscriber::registry()
        .with(env_filter)
        // Console layer on stderr; stdout carries the JSON result
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    Ok(())
}

async fn run_tool(
    registry: &ToolRegistry,
    tool_id: &str,
    params: Value,
    work_dir: &Path,
) -> Result<(), ToolError> {
    let tool = registry
        .get(tool_id)
        .ok_or_else(|| ToolError::NotFound(tool_id.to_string()))?;

    let ctx = ToolContext::new("cli", work_dir.to_path_buf());
    tool.validate(&params)?;
    let result = tool.execute(params, ctx).await?;

    match serde_json::to_string_pretty(&result) {
        Ok(text) => println!("{}", text),
        Err(e) => return Err(ToolError::ExecutionFailed(e.to_string())),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = ConfigLoader::load_or_default(&cli.config)?;
    init_tracing(&config.logging)?;
    info!("Loaded configuration from {}", cli.config.display());

    for warning in ConfigValidator::validate(&config).into_result()? {
        warn!("Config {}: {}", warning.path, warning.message);
    }

    let work_dir = match cli.work_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let registry = Arc::new(ToolRegistry::new());
    register::register_tools(registry.clone(), &config, &work_dir).await?;

    let Some((tool_id, params)) = cli.command.invocation() else {
        let definitions: Vec<Value> = registry
            .list()
            .iter()
            .map(|definition| definition.to_anthropic_tool())
            .collect();
        println!("{}", serde_json::to_string_pretty(&definitions)?);
        return Ok(());
    };

    if let Err(e) = run_tool(&registry, tool_id, params, &work_dir).await {
        error!("{} failed: {}", tool_id, e);
        return Err(e.into());
    }
    Ok(())
}
