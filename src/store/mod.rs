// region:    --- Imports
use crate::item::{Item, NewItem, ValidationError};
use async_trait::async_trait;
use thiserror::Error;

// endregion: --- Imports

// region:    --- Modules
mod memory;
mod postgres;
pub mod queries;

pub use memory::InMemoryItemStore;
pub use postgres::PostgresItemStore;

// endregion: --- Modules

// region:    --- Store Error
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Storage(e.to_string())
    }
}

// endregion: --- Store Error

// region:    --- Item Store Trait
/// 상품 저장소 트레이트
/// 생성 후 수정/삭제 연산은 없다
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// 저장 순서대로 전체 상품 조회
    async fn list_all(&self) -> Result<Vec<Item>, StoreError>;

    /// 검증 후 저장. 실패 시 아무것도 저장하지 않는다
    async fn insert(&self, candidate: NewItem) -> Result<Item, StoreError>;
}

// endregion: --- Item Store Trait
