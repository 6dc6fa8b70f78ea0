pub mod file;
pub mod memory;

use async_trait::async_trait;

use crate::error::AppError;

pub use file::FileStore;
pub use memory::MemoryStore;

pub const BOOKINGS_KEY: &str = "parkease-bookings";
pub const SPOTS_KEY: &str = "parkease-spots";
pub const LAST_PAGE_KEY: &str = "parkease-last-page";

#[async_trait]
pub trait KeyValueStore: Send + Sync + 'static {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    async fn remove(&self, key: &str) -> Result<(), AppError>;
}

pub async fn read_collection<T>(store: &dyn KeyValueStore, key: &str) -> Result<Vec<T>, AppError>
where
    T: serde::de::DeserializeOwned,
{
    match store.get(key).await? {
        Some(raw) => serde_json::from_str(&raw)
            .map_err(|err| AppError::Storage(format!("corrupt collection {key}: {err}"))),
        None => Ok(Vec::new()),
    }
}

pub async fn write_collection<T>(
    store: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<(), AppError>
where
    T: serde::Serialize + Sync,
{
    let raw = serde_json::to_string(items)
        .map_err(|err| AppError::Storage(format!("failed to serialize {key}: {err}")))?;
    store.set(key, &raw).await
}

#[cfg(test)]
mod tests {
    use super::{read_collection, write_collection, MemoryStore};

    #[tokio::test]
    async fn missing_collection_reads_as_empty() {
        let store = MemoryStore::new();
        let items: Vec<u32> = read_collection(&store, "nothing-here").await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn corrupt_collection_is_a_storage_error() {
        let store = MemoryStore::new();
        super::KeyValueStore::set(&store, "broken", "{not json")
            .await
            .unwrap();

        let result: Result<Vec<u32>, _> = read_collection(&store, "broken").await;
        assert!(matches!(result, Err(crate::error::AppError::Storage(_))));
    }

    #[tokio::test]
    async fn collection_is_written_as_json_array() {
        let store = MemoryStore::new();
        write_collection(&store, "numbers", &[1u32, 2, 3]).await.unwrap();

        let raw = super::KeyValueStore::get(&store, "numbers").await.unwrap();
        assert_eq!(raw.as_deref(), Some("[1,2,3]"));
    }
}
