mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use llmcost_config::Config;
use llmcost_engine::Calculator;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (stderr, so --json output stays parseable)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let config_path = cli.config.as_deref();
    let json = cli.json;

    match cli.command {
        cli::Commands::Tokens { text, file, model } => {
            let (_, calculator) = load(config_path)?;
            commands::tokens::handle(&calculator, text, file, model, json)
        }
        cli::Commands::Llm {
            model,
            employees,
            prompts_per_day,
            prompt_tokens,
            completion_tokens,
        } => {
            let (_, calculator) = load(config_path)?;
            let usage = llmcost_core::UsageAssumptions {
                employee_count: employees,
                prompts_per_employee_per_day: prompts_per_day,
                avg_prompt_tokens: prompt_tokens,
                avg_completion_tokens: completion_tokens,
            };
            commands::llm::handle(&calculator, model, usage, json)
        }
        cli::Commands::VectorStore {
            provider,
            pod_type,
            pod_size,
        } => {
            let (_, calculator) = load(config_path)?;
            commands::vector_store::handle(&calculator, provider, pod_type, pod_size, json)
        }
        cli::Commands::Models => {
            let (_, calculator) = load(config_path)?;
            commands::models::handle(&calculator, json)
        }
        cli::Commands::Serve {
            host,
            port,
            no_open,
        } => {
            let (config, calculator) = load(config_path)?;
            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            commands::serve::handle(calculator, host, port, !no_open).await
        }
        cli::Commands::Config(cmd) => commands::config::handle(cmd, config_path),
        cli::Commands::Completions { shell } => commands::completions::handle(shell),
    }
}

/// Load config once and build the calculator from it
fn load(config_path: Option<&Path>) -> Result<(Config, Calculator)> {
    let config = Config::resolve(config_path)?;
    let calculator = Calculator::from_config(&config)?;
    Ok((config, calculator))
}
