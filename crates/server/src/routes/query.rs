use actix_web::{post, web, HttpResponse};
use std::sync::Arc;
use tracing::debug;

use ayahsearch_common::AyahSearchError;
use ayahsearch_search::NavOutcome;

use crate::state::AppState;
use crate::types::{
    format_verse_output, ErrorResponse, MessageResponse, QueryRequest, DEFAULT_SESSION_ID,
};

/// Map a core error to the matching actix error
fn to_http_error(e: AyahSearchError) -> actix_web::Error {
    match e.status_code() {
        400 => actix_web::error::ErrorBadRequest(e),
        503 => actix_web::error::ErrorServiceUnavailable(e),
        _ => actix_web::error::ErrorInternalServerError(e),
    }
}

fn message(text: &str) -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new(text))
}

/// Query endpoint: navigation command or new semantic search
///
/// Navigation runs entirely under the session lock. A new search drops
/// the lock first, embeds and scans, then re-acquires it just to commit
/// the result set; the lock is never held across the embedding call.
#[post("/query")]
pub async fn query(
    body: web::Json<QueryRequest>,
    state: web::Data<Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let query = body.query.trim();
    if query.is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(ErrorResponse::new(AyahSearchError::EmptyQuery.to_string())));
    }

    let session_id = body
        .session_id
        .as_deref()
        .unwrap_or(DEFAULT_SESSION_ID)
        .to_string();
    let session = state.sessions.session(&session_id).await;

    // handle "next", "previous", "more" against the last results
    {
        let mut session = session.lock().await;
        if let Some(outcome) = session.navigate(query, state.config.more_window) {
            debug!("Navigation outcome for session '{}'", session_id);
            return Ok(match outcome {
                NavOutcome::Verse(verse) => {
                    HttpResponse::Ok().json(format_verse_output(std::slice::from_ref(&verse)))
                }
                NavOutcome::Verses(verses) => {
                    HttpResponse::Ok().json(format_verse_output(&verses))
                }
                NavOutcome::NoMoreVerses => message("No more verses"),
                NavOutcome::AlreadyAtFirst => message("Already at first verse"),
            });
        }
    }

    // normal search; the session lock is released during the embedding call
    let results = state
        .engine
        .search_verses(query)
        .await
        .map_err(to_http_error)?;

    if results.is_empty() {
        return Ok(message("No verses found"));
    }

    let response = format_verse_output(&results);
    session.lock().await.commit_search(results);

    Ok(HttpResponse::Ok().json(response))
}
