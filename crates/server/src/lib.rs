//! AyahSearch HTTP server
//!
//! Actix-web REST API in front of the search engine and session machine.
//! CORS stays permissive so browser frontends can call it directly.

pub mod routes;
pub mod state;
pub mod types;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use ayahsearch_common::{AppConfig, Result};
use ayahsearch_search::SearchEngine;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use crate::state::AppState;

/// Start the HTTP server and block until it shuts down
pub async fn start_server(config: AppConfig, engine: Arc<SearchEngine>) -> Result<()> {
    let bind_address = config.server_bind_address();
    let state = Arc::new(AppState::new(config, engine));

    tracing::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(Arc::clone(&state)))
            .service(routes::query::query)
            .service(routes::system::health)
            .service(routes::system::stats)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
