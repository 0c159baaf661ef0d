//! Prompt Routes - Catalog read and insert
//!
//! HTTP handlers that delegate to PromptService for business logic.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use promptdeck::DomainError;

use crate::models::{CreatePromptRequest, PromptResponse};
use crate::AppState;

/// List all prompts, most recently updated first
#[utoipa::path(
    get,
    path = "/prompts",
    responses(
        (status = 200, description = "All prompts, newest first", body = Vec<PromptResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn list_prompts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PromptResponse>>, (StatusCode, String)> {
    let prompts = state
        .prompt_service
        .list_all()
        .await
        .map_err(into_http_error)?;

    let responses = prompts
        .into_iter()
        .map(PromptResponse::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(into_http_error)?;

    Ok(Json(responses))
}

/// Create a new prompt
#[utoipa::path(
    post,
    path = "/prompts",
    request_body = CreatePromptRequest,
    responses(
        (status = 201, description = "Prompt created", body = PromptResponse),
        (status = 400, description = "Missing required field or too many tags"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn create_prompt(
    State(state): State<AppState>,
    Json(payload): Json<CreatePromptRequest>,
) -> Result<(StatusCode, Json<PromptResponse>), (StatusCode, String)> {
    let prompt = state
        .prompt_service
        .create(payload.into())
        .await
        .map_err(into_http_error)?;

    let response = PromptResponse::try_from(prompt).map_err(into_http_error)?;

    Ok((StatusCode::CREATED, Json(response)))
}

fn into_http_error(e: DomainError) -> (StatusCode, String) {
    match e {
        DomainError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, e.to_string()),
        _ => {
            tracing::warn!("Prompt request failed ({}): {}", e.category(), e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/prompts", get(list_prompts).post(create_prompt))
}
