use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

use crate::state::AppState;

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[get("/stats")]
pub async fn stats(state: web::Data<Arc<AppState>>) -> HttpResponse {
    let stats = state.engine.stats();

    HttpResponse::Ok().json(serde_json::json!({
        "total_verses": stats.verses,
        "embedding_model": stats.embedding_model,
        "embedding_dimension": stats.dimension,
    }))
}
