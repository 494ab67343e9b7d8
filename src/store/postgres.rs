// region:    --- Imports
use super::{queries, ItemStore, StoreError};
use crate::database::DatabaseManager;
use crate::item::{validate, Item, NewItem, ValidationError, ViolationReason};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

// endregion: --- Imports

// CHECK 제약 위반 SQLSTATE
const CHECK_VIOLATION: &str = "23514";

// region:    --- Postgres Store
/// Postgres 기반 상품 저장소
pub struct PostgresItemStore {
    db_manager: Arc<DatabaseManager>,
}

impl PostgresItemStore {
    pub fn new(db_manager: Arc<DatabaseManager>) -> Self {
        Self { db_manager }
    }
}

#[async_trait]
impl ItemStore for PostgresItemStore {
    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        info!("{:<12} --> 모든 상품 조회", "Store");
        let items = sqlx::query_as::<_, Item>(queries::GET_ALL_ITEMS)
            .fetch_all(self.db_manager.pool())
            .await?;
        Ok(items)
    }

    async fn insert(&self, candidate: NewItem) -> Result<Item, StoreError> {
        let valid = validate(&candidate)?;
        let name = valid.name.to_string();
        let description = valid.description.to_string();
        let (starting_bid, current_bid) = (valid.starting_bid, valid.current_bid);
        let created_at = candidate.created_at;

        let item = self
            .db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    sqlx::query_as::<_, Item>(queries::INSERT_ITEM)
                        .bind(name)
                        .bind(description)
                        .bind(starting_bid)
                        .bind(current_bid)
                        .bind(created_at)
                        .fetch_one(&mut **tx)
                        .await
                        .map_err(map_insert_error)
                })
            })
            .await?;

        info!("{:<12} --> 상품 저장 id: {}", "Store", item.id);
        Ok(item)
    }
}

/// 스키마 CHECK 위반은 검증 오류로 변환
fn map_insert_error(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &e {
        if db.code().as_deref() == Some(CHECK_VIOLATION) {
            warn!(
                "{:<12} --> 스키마 제약 위반: {:?}",
                "Store",
                db.constraint()
            );
            let field = field_for_constraint(db.constraint().unwrap_or_default());
            let reason = match field {
                "name" | "description" => ViolationReason::Empty,
                _ => ViolationReason::Negative,
            };
            return StoreError::Validation(ValidationError::single(field, reason));
        }
    }
    StoreError::from(e)
}

fn field_for_constraint(constraint: &str) -> &'static str {
    match constraint {
        "items_name_check" => "name",
        "items_description_check" => "description",
        "items_current_bid_check" => "currentBid",
        _ => "startingBid",
    }
}

// endregion: --- Postgres Store
