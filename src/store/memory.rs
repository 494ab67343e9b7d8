// region:    --- Imports
use super::{ItemStore, StoreError};
use crate::item::{validate, Item, NewItem};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

// endregion: --- Imports

// region:    --- In-Memory Store
#[derive(Default)]
struct Inner {
    items: Vec<Item>,
    last_id: i64,
}

/// 프로세스 메모리에 보관하는 저장소 (재시작 시 소멸)
#[derive(Default)]
pub struct InMemoryItemStore {
    inner: RwLock<Inner>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.items.clone())
    }

    async fn insert(&self, candidate: NewItem) -> Result<Item, StoreError> {
        let valid = validate(&candidate)?;

        // id 발급과 저장을 같은 쓰기 락 안에서 처리
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let item = Item {
            id: inner.last_id,
            name: valid.name.to_string(),
            description: valid.description.to_string(),
            starting_bid: valid.starting_bid,
            current_bid: valid.current_bid,
            created_at: candidate.created_at.unwrap_or_else(Utc::now),
        };
        inner.items.push(item.clone());
        info!("{:<12} --> 상품 저장 id: {}", "Store", item.id);
        Ok(item)
    }
}

// endregion: --- In-Memory Store

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ViolationReason;
    use chrono::TimeZone;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn candidate(name: &str, description: &str, bid: f64) -> NewItem {
        NewItem {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            starting_bid: Some(bid),
            current_bid: Some(bid),
            created_at: None,
        }
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = InMemoryItemStore::new();
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_assigns_id_and_created_at() {
        let store = InMemoryItemStore::new();
        let before = Utc::now();
        let item = store
            .insert(candidate("Vase", "Ming era", 100.0))
            .await
            .unwrap();
        assert_eq!(item.id, 1);
        assert_eq!(item.starting_bid, 100.0);
        assert_eq!(item.current_bid, 100.0);
        assert!(item.created_at >= before);
    }

    #[tokio::test]
    async fn supplied_created_at_is_kept() {
        let store = InMemoryItemStore::new();
        let at = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        let mut new_item = candidate("Clock", "Grandfather", 50.0);
        new_item.created_at = Some(at);
        let item = store.insert(new_item).await.unwrap();
        assert_eq!(item.created_at, at);
    }

    #[tokio::test]
    async fn store_does_not_tie_current_bid_to_starting_bid() {
        let store = InMemoryItemStore::new();
        let mut new_item = candidate("Rug", "Persian", 10.0);
        new_item.current_bid = Some(25.0);
        let item = store.insert(new_item).await.unwrap();
        assert_eq!(item.starting_bid, 10.0);
        assert_eq!(item.current_bid, 25.0);
    }

    #[tokio::test]
    async fn invalid_insert_leaves_store_unchanged() {
        let store = InMemoryItemStore::new();
        store.insert(candidate("Vase", "Ming era", 100.0)).await.unwrap();

        let err = store
            .insert(candidate("Lamp", "Antique", -5.0))
            .await
            .unwrap_err();
        match err {
            StoreError::Validation(e) => {
                assert!(e
                    .violations
                    .iter()
                    .all(|v| v.reason == ViolationReason::Negative));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(store.insert(candidate("", "x", 10.0)).await.is_err());
        assert!(store.insert(NewItem::default()).await.is_err());

        assert_eq!(store.list_all().await.unwrap().len(), 1);

        // 실패한 시도가 id를 소비하지 않음
        let next = store.insert(candidate("Bell", "Brass", 1.0)).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn lists_in_insertion_order_and_is_repeatable() {
        let store = InMemoryItemStore::new();
        for (i, name) in ["A", "B", "C"].iter().enumerate() {
            store
                .insert(candidate(name, "desc", i as f64))
                .await
                .unwrap();
        }
        let first = store.list_all().await.unwrap();
        let second = store.list_all().await.unwrap();
        assert_eq!(first, second);
        let names: Vec<&str> = first.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn concurrent_inserts_get_unique_ids() {
        let store = Arc::new(InMemoryItemStore::new());
        let mut handles = vec![];
        for i in 0..50 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .insert(candidate(&format!("item {i}"), "desc", i as f64))
                    .await
                    .unwrap()
                    .id
            }));
        }
        let mut ids = HashSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.unwrap()));
        }
        assert_eq!(ids.len(), 50);
        assert_eq!(store.list_all().await.unwrap().len(), 50);
    }
}
