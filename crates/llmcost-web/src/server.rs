use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::Html,
    routing::{get, post},
};
use llmcost_core::{PodSize, PodType, VectorStoreProvider};
use llmcost_engine::{
    Calculator, LlmCostRequest, LlmCostResponse, ModelSummary, TokenCountRequest,
    TokenCountResponse, VectorStoreCostRequest, VectorStoreCostResponse,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::ApiError;

pub struct WebServer;

#[derive(Clone)]
struct AppState {
    calculator: Calculator,
}

/// Choices the form offers, so the page never hardcodes them
#[derive(Serialize)]
struct FormOptions {
    models: Vec<ModelSummary>,
    providers: Vec<OptionItem>,
    pod_types: Vec<OptionItem>,
    pod_sizes: Vec<OptionItem>,
    limits: llmcost_config::UsageLimits,
}

#[derive(Serialize)]
struct OptionItem {
    value: &'static str,
    label: &'static str,
}

impl WebServer {
    /// Build the application router
    pub fn router(calculator: Calculator) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/", get(serve_form))
            .route("/health", get(handle_health))
            .route("/api/options", get(api_options))
            .route("/api/models", get(api_models))
            .route("/api/tokens", post(api_count_tokens))
            .route("/api/llm-cost", post(api_llm_cost))
            .route("/api/vector-store-cost", post(api_vector_store_cost))
            .layer(cors)
            .with_state(AppState { calculator })
    }

    pub async fn serve(calculator: Calculator, host: &str, port: u16) -> anyhow::Result<()> {
        let app = Self::router(calculator);

        let addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&addr).await?;

        info!("Web form listening on http://{}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}

async fn serve_form() -> Html<&'static str> {
    Html(include_str!("form.html"))
}

/// GET /health
async fn handle_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "llmcost",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "ok"
    }))
}

/// GET /api/options - Everything the form needs to populate its controls
async fn api_options(State(state): State<AppState>) -> Json<FormOptions> {
    Json(FormOptions {
        models: state.calculator.models(),
        providers: VectorStoreProvider::ALL
            .iter()
            .map(|p| OptionItem {
                value: p.as_str(),
                label: p.label(),
            })
            .collect(),
        pod_types: PodType::ALL
            .iter()
            .map(|t| OptionItem {
                value: t.as_str(),
                label: t.label(),
            })
            .collect(),
        pod_sizes: PodSize::ALL
            .iter()
            .map(|s| OptionItem {
                value: s.as_str(),
                label: s.as_str(),
            })
            .collect(),
        limits: state.calculator.limits(),
    })
}

/// GET /api/models - Configured models and their rates
async fn api_models(State(state): State<AppState>) -> Json<Vec<ModelSummary>> {
    Json(state.calculator.models())
}

/// POST /api/tokens - Prompt Token Counter
async fn api_count_tokens(
    State(state): State<AppState>,
    payload: Result<Json<TokenCountRequest>, JsonRejection>,
) -> Result<Json<TokenCountResponse>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(state.calculator.count_prompt(&req)?))
}

/// POST /api/llm-cost - Cost Calculator (LLM)
async fn api_llm_cost(
    State(state): State<AppState>,
    payload: Result<Json<LlmCostRequest>, JsonRejection>,
) -> Result<Json<LlmCostResponse>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(state.calculator.estimate_llm(&req)?))
}

/// POST /api/vector-store-cost - Vector Store Cost
async fn api_vector_store_cost(
    State(state): State<AppState>,
    payload: Result<Json<VectorStoreCostRequest>, JsonRejection>,
) -> Result<Json<VectorStoreCostResponse>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(state.calculator.estimate_vector_store(&req)))
}
