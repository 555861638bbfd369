use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::entities::Entity;
use crate::errors::StoreError;
use crate::repositories::ResourceStore;

/// Insertion-ordered in-memory collection. Lookup and removal are linear
/// scans over small collections.
#[derive(Clone)]
pub struct InMemoryStore<T> {
    inner: Arc<RwLock<Vec<T>>>,
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T> InMemoryStore<T> {
    /// Start from an initial ordered collection.
    pub fn seeded(records: Vec<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(records)),
        }
    }
}

#[async_trait]
impl<T: Entity + 'static> ResourceStore<T> for InMemoryStore<T> {
    async fn list(&self) -> Vec<T> {
        self.inner.read().await.clone()
    }

    async fn insert(&self, record: T) -> Result<T, StoreError> {
        let mut records = self.inner.write().await;
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(StoreError::DuplicateId);
        }
        records.push(record.clone());
        Ok(record)
    }

    async fn get(&self, id: &str) -> Option<T> {
        self.inner.read().await.iter().find(|r| r.id() == id).cloned()
    }

    async fn replace(&self, record: T) -> Result<T, StoreError> {
        let mut records = self.inner.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or(StoreError::NotFound)?;
        *slot = record.clone();
        Ok(record)
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let mut records = self.inner.write().await;
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(StoreError::NotFound)?;
        records.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::dish::Dish;

    fn sample_dish(id: &str, name: &str) -> Dish {
        Dish {
            id: id.to_string(),
            name: name.to_string(),
            description: "House special".to_string(),
            price: 9,
            image_url: "https://example.com/dish.png".to_string(),
        }
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = InMemoryStore::default();
        store.insert(sample_dish("a", "Soup")).await.unwrap();
        store.insert(sample_dish("b", "Salad")).await.unwrap();
        store.insert(sample_dish("c", "Stew")).await.unwrap();

        let ids: Vec<String> = store.list().await.into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_id() {
        let store = InMemoryStore::default();
        store.insert(sample_dish("a", "Soup")).await.unwrap();
        let err = store.insert(sample_dish("a", "Salad")).await.unwrap_err();
        assert_eq!(err, StoreError::DuplicateId);
        assert_eq!(store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn get_finds_by_id() {
        let store = InMemoryStore::seeded(vec![sample_dish("a", "Soup"), sample_dish("b", "Salad")]);
        assert_eq!(store.get("b").await.unwrap().name, "Salad");
        assert!(store.get("zzz").await.is_none());
    }

    #[tokio::test]
    async fn replace_overwrites_in_place() {
        let store = InMemoryStore::seeded(vec![sample_dish("a", "Soup"), sample_dish("b", "Salad")]);

        let mut updated = sample_dish("a", "Gazpacho");
        updated.price = 11;
        store.replace(updated).await.unwrap();

        let listed = store.list().await;
        assert_eq!(listed[0].name, "Gazpacho");
        assert_eq!(listed[0].price, 11);
        assert_eq!(listed[1].name, "Salad");
    }

    #[tokio::test]
    async fn replace_unknown_id_is_not_found() {
        let store = InMemoryStore::default();
        let err = store.replace(sample_dish("a", "Soup")).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }

    #[tokio::test]
    async fn remove_splices_the_record_out() {
        let store = InMemoryStore::seeded(vec![sample_dish("a", "Soup"), sample_dish("b", "Salad")]);
        store.remove("a").await.unwrap();

        let ids: Vec<String> = store.list().await.into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[tokio::test]
    async fn remove_nonexistent_returns_err() {
        let store = InMemoryStore::<Dish>::default();
        assert_eq!(store.remove("nope").await.unwrap_err(), StoreError::NotFound);
    }
}
