use anyhow::{Context, Result};
use llmcost_engine::{Calculator, TokenCountRequest};
use std::io::Read;
use std::path::PathBuf;

pub fn handle(
    calculator: &Calculator,
    text: Option<String>,
    file: Option<PathBuf>,
    model: String,
    json: bool,
) -> Result<()> {
    let text = match (text, file) {
        (_, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read prompt from {}", path.display()))?,
        (Some(text), None) if text != "-" => text,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let resp = calculator.count_prompt(&TokenCountRequest { text, model })?;

    if json {
        return super::print_json(&resp);
    }

    println!("✓ {}", resp.model);
    println!("  Encoding: {}", resp.encoding);
    println!("  Token Count: {}", resp.token_count);

    Ok(())
}
