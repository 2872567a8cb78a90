use anyhow::Result;
use llmcost_engine::Calculator;

pub fn handle(calculator: &Calculator, json: bool) -> Result<()> {
    let models = calculator.models();

    if json {
        return super::print_json(&models);
    }

    if models.is_empty() {
        println!("No models configured.");
        return Ok(());
    }

    println!("Models:");
    for model in models {
        println!("  {} ({})", model.display_name, model.id);
        println!(
            "    Prompt: {:.4} $/1K tokens, Completion: {:.4} $/1K tokens",
            model.prompt_per_1k, model.completion_per_1k
        );
        println!(
            "    Encoding: {}",
            model.encoding.as_deref().unwrap_or("unknown to tokenizer")
        );
    }

    Ok(())
}
