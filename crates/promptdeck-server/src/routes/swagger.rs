//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{CreatePromptRequest, PromptResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Prompt endpoints
        super::prompt::list_prompts,
        super::prompt::create_prompt,
    ),
    info(
        title = "PromptDeck API",
        version = "0.1.0",
        description = "Prompt catalog store - list and create reusable prompts.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Prompt", description = "Prompt - Catalog entries with use case and tags"),
    ),
    components(
        schemas(
            CreatePromptRequest,
            PromptResponse,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_prompt_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/prompts"));
    }
}
