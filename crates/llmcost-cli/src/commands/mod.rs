pub mod completions;
pub mod config;
pub mod llm;
pub mod models;
pub mod serve;
pub mod tokens;
pub mod vector_store;

use anyhow::Result;
use llmcost_core::CostProjection;
use serde::Serialize;

/// Print a result as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a projection the way the form shows it, rounded to cents
pub fn print_projection(projection: &CostProjection) {
    for line in projection.to_string().lines() {
        println!("  {}", line);
    }
}
