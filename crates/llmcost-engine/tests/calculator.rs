use llmcost_config::Config;
use llmcost_core::{CoreError, PodSize, PodType, UsageAssumptions, VectorStoreProvider};
use llmcost_engine::{Calculator, LlmCostRequest, TokenCountRequest, VectorStoreCostRequest};

fn calculator() -> Calculator {
    Calculator::from_config(&Config::default()).unwrap()
}

#[test]
fn test_zero_usage_costs_nothing_for_every_model() {
    let calculator = calculator();

    for model in calculator.models() {
        let resp = calculator
            .estimate_llm(&LlmCostRequest {
                model: model.id.clone(),
                usage: UsageAssumptions::default(),
            })
            .unwrap();
        assert!(resp.projection.is_zero(), "{}", model.id);
    }
}

#[test]
fn test_gpt4_is_twenty_times_turbo_for_prompts() {
    let calculator = calculator();
    let usage = UsageAssumptions {
        employee_count: 200,
        prompts_per_employee_per_day: 300,
        avg_prompt_tokens: 300,
        avg_completion_tokens: 0,
    };

    let turbo = calculator
        .estimate_llm(&LlmCostRequest {
            model: "gpt-3.5-turbo".to_string(),
            usage,
        })
        .unwrap();
    let gpt4 = calculator
        .estimate_llm(&LlmCostRequest {
            model: "gpt-4".to_string(),
            usage,
        })
        .unwrap();

    assert_eq!(turbo.prompts_per_day, 60_000);
    assert!((gpt4.projection.per_day / turbo.projection.per_day - 20.0).abs() < 1e-9);
}

#[test]
fn test_llm_and_vector_store_use_different_year_lengths() {
    let calculator = calculator();

    let llm = calculator
        .estimate_llm(&LlmCostRequest {
            model: "gpt-4".to_string(),
            usage: UsageAssumptions {
                employee_count: 1,
                prompts_per_employee_per_day: 1,
                avg_prompt_tokens: 100,
                avg_completion_tokens: 100,
            },
        })
        .unwrap();
    let llm_days = llm.projection.per_year / llm.projection.per_day;
    assert!((llm_days - 365.0 * 5.0 / 7.0).abs() < 1e-9);

    let store = calculator.estimate_vector_store(&VectorStoreCostRequest {
        provider: VectorStoreProvider::ManagedServiceEnterprise,
        pod_type: Some(PodType::P2),
        pod_size: Some(PodSize::X8),
    });
    let store_days = store.projection.per_year / store.projection.per_day;
    assert!((store_days - 365.0).abs() < 1e-9);
}

#[test]
fn test_open_source_store_is_free() {
    let calculator = calculator();

    for pod_type in PodType::ALL {
        for pod_size in PodSize::ALL {
            let resp = calculator.estimate_vector_store(&VectorStoreCostRequest {
                provider: VectorStoreProvider::OpenSource,
                pod_type: Some(pod_type),
                pod_size: Some(pod_size),
            });
            assert!(resp.projection.is_zero());
        }
    }
}

#[test]
fn test_token_count_errors() {
    let calculator = calculator();

    let empty = calculator.count_prompt(&TokenCountRequest {
        text: String::new(),
        model: "gpt-4".to_string(),
    });
    assert_eq!(empty, Err(CoreError::EmptyInput));

    let unknown = calculator.count_prompt(&TokenCountRequest {
        text: "hello".to_string(),
        model: String::new(),
    });
    assert!(matches!(unknown, Err(CoreError::UnsupportedModel(_))));
}

#[test]
fn test_token_count_is_deterministic() {
    let calculator = calculator();
    let req = TokenCountRequest {
        text: "Estimate the cost of running this prompt every weekday.".to_string(),
        model: "gpt-4".to_string(),
    };

    let first = calculator.count_prompt(&req).unwrap();
    for _ in 0..3 {
        assert_eq!(calculator.count_prompt(&req).unwrap(), first);
    }
}

#[test]
fn test_request_json_shape() {
    let req: LlmCostRequest = serde_json::from_str(
        r#"{"model":"GPT-4","employee_count":10,"prompts_per_employee_per_day":5}"#,
    )
    .unwrap();
    assert_eq!(req.usage.employee_count, 10);
    assert_eq!(req.usage.avg_prompt_tokens, 0);

    let req: VectorStoreCostRequest =
        serde_json::from_str(r#"{"provider":"standard","pod_type":"p1"}"#).unwrap();
    assert_eq!(req.pod_type, Some(PodType::P1));
    assert_eq!(req.pod_size, None);
}
