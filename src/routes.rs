// region:    --- Imports
use crate::handlers;
use crate::store::ItemStore;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

// endregion: --- Imports

/// 핸들러 공유 상태
pub type AppState = Arc<dyn ItemStore>;

// 요청 본문 최대 크기(64KB)
const MAX_BODY_BYTES: usize = 64 * 1024;

/// 라우터 설정
pub fn routes(store: AppState) -> Router {
    // 별도 오리진의 클라이언트를 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/items",
            get(handlers::handle_get_items).post(handlers::handle_create_item),
        )
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(store)
}
