// region:    --- Imports
use crate::item::{CreateItemRequest, NewItem, ValidationError};
use crate::routes::AppState;
use crate::store::StoreError;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, info, warn};

// endregion: --- Imports

// region:    --- Api Error
const FETCH_FAILED: &str = "Error fetching items";
const ADD_FAILED: &str = "Error adding item";

/// 응답 본문: { message, error }
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
    error: serde_json::Value,
}

impl ApiError {
    fn from_store(message: &'static str, e: StoreError) -> Self {
        match e {
            StoreError::Validation(e) => Self::validation(message, &e),
            StoreError::Storage(detail) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message,
                error: json!({ "kind": "StorageError", "message": detail }),
            },
        }
    }

    fn validation(message: &'static str, e: &ValidationError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
            error: json!({
                "kind": "ValidationError",
                "message": e.to_string(),
                "fields": e.violations,
            }),
        }
    }

    fn malformed_body(rejection: JsonRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: ADD_FAILED,
            error: json!({ "kind": "MalformedBody", "message": rejection.body_text() }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({ "message": self.message, "error": self.error })),
        )
            .into_response()
    }
}

// endregion: --- Api Error

// region:    --- Item Handlers

/// 모든 상품 조회
pub async fn handle_get_items(State(store): State<AppState>) -> Response {
    info!("{:<12} --> 모든 상품 조회", "Handler");
    match store.list_all().await {
        Ok(items) => Json(items).into_response(),
        Err(e) => {
            error!("{:<12} --> 상품 조회 실패: {}", "Handler", e);
            ApiError::from_store(FETCH_FAILED, e).into_response()
        }
    }
}

/// 상품 등록
/// currentBid 는 항상 startingBid 로 설정
pub async fn handle_create_item(
    State(store): State<AppState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("{:<12} --> 잘못된 요청 본문: {}", "Handler", rejection);
            return ApiError::malformed_body(rejection).into_response();
        }
    };
    info!("{:<12} --> 상품 등록 요청: {:?}", "Handler", req);

    match store.insert(NewItem::from(req)).await {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => {
            match &e {
                StoreError::Validation(_) => warn!("{:<12} --> 상품 검증 실패: {}", "Handler", e),
                StoreError::Storage(_) => error!("{:<12} --> 상품 저장 실패: {}", "Handler", e),
            }
            ApiError::from_store(ADD_FAILED, e).into_response()
        }
    }
}

// endregion: --- Item Handlers

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ViolationReason;

    #[test]
    fn storage_failure_maps_to_500() {
        let err = ApiError::from_store(FETCH_FAILED, StoreError::Storage("down".into()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error["kind"], "StorageError");
        assert_eq!(err.error["message"], "down");
    }

    #[test]
    fn validation_failure_maps_to_400_with_fields() {
        let e = ValidationError::single("name", ViolationReason::Empty);
        let err = ApiError::from_store(ADD_FAILED, StoreError::Validation(e));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Error adding item");
        assert_eq!(err.error["fields"][0]["field"], "name");
        assert_eq!(err.error["fields"][0]["reason"], "empty");
    }
}
