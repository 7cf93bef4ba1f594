use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::cowsay::Renderer;
use crate::AppState;

fn default_input() -> String {
    "I love Linux!".to_string()
}

#[derive(Debug, Deserialize)]
pub struct CowsayQuery {
    #[serde(default = "default_input")]
    pub input: String,
}

/// Unauthenticated novelty endpoint. Whatever the renderer produces is
/// the body, including the empty string when the command fails.
pub async fn render(
    query: web::Query<CowsayQuery>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let output = state.renderer.render(&query.input).await;
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(output)
}
