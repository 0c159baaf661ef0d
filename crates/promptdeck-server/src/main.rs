use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use promptdeck::PromptRepository;

mod adapters;
mod application;
mod models;
mod routes;
#[cfg(test)]
mod testing;

use adapters::PgPromptRepository;
use application::PromptService;

/// Prompt service over whichever store backs the server
pub type AppPromptService = PromptService<dyn PromptRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub prompt_service: Arc<AppPromptService>,
}

impl AppState {
    pub fn new(repo: Arc<dyn PromptRepository>) -> Self {
        Self {
            prompt_service: Arc::new(PromptService::new(repo)),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "PromptDeck API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router with shared state
fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::prompt::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(#[shuttle_shared_db::Postgres] pool: PgPool) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🗂️  PromptDeck API initializing...");

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run database migrations: {}", e))?;

    tracing::info!("✅ Database migrations completed");

    let repo = Arc::new(PgPromptRepository::new(pool));
    let router = app(AppState::new(repo));

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ PromptDeck API ready");

    Ok(router.into())
}
