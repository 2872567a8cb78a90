use anyhow::Result;
use llmcost_core::UsageAssumptions;
use llmcost_engine::{Calculator, LlmCostRequest};

pub fn handle(
    calculator: &Calculator,
    model: String,
    usage: UsageAssumptions,
    json: bool,
) -> Result<()> {
    let limits = calculator.limits();
    if usage.employee_count > limits.max_employees
        || usage.prompts_per_employee_per_day > limits.max_prompts_per_day
        || usage.avg_prompt_tokens > limits.max_prompt_tokens
        || usage.avg_completion_tokens > limits.max_completion_tokens
    {
        tracing::warn!("Usage exceeds the form's configured ranges; estimating anyway");
    }

    let resp = calculator.estimate_llm(&LlmCostRequest { model, usage })?;

    if json {
        return super::print_json(&resp);
    }

    println!("Cost Analysis (Weekdays): {}", resp.display_name);
    println!("  Prompts per day: {}", resp.prompts_per_day);
    super::print_projection(&resp.projection);

    Ok(())
}
