use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 상품 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub starting_bid: f64,
    pub current_bid: f64,
    pub created_at: DateTime<Utc>,
}

/// 저장소에 넘기는 신규 상품 후보
/// 필드 누락은 검증 단계에서 거른다
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub starting_bid: Option<f64>,
    pub current_bid: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}

/// 상품 등록 요청 본문
/// 클라이언트가 보낸 currentBid 는 무시한다
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub starting_bid: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<CreateItemRequest> for NewItem {
    // currentBid = startingBid
    fn from(req: CreateItemRequest) -> Self {
        NewItem {
            name: req.name,
            description: req.description,
            starting_bid: req.starting_bid,
            current_bid: req.starting_bid,
            created_at: req.created_at,
        }
    }
}
