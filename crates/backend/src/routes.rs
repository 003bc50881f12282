use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::gateway::AppState;
use crate::shared::request_log::request_logger;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Справочник enum-ов
        .route("/api/enums", get(handlers::enums::list_all))
        .route("/api/enums/:name", get(handlers::enums::get_by_name))
        // Нормализация payload
        .route(
            "/api/normalize/:kind/:direction",
            post(handlers::normalize::normalize),
        )
        .layer(middleware::from_fn(request_logger))
        .with_state(state)
}
