use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::AppError;
use crate::models::spot::ParkingSpot;
use crate::store::{read_collection, write_collection, KeyValueStore, SPOTS_KEY};

#[async_trait]
pub trait SpotRepository: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<Option<ParkingSpot>, AppError>;
    async fn list(&self) -> Result<Vec<ParkingSpot>, AppError>;
    async fn upsert(&self, spot: ParkingSpot) -> Result<(), AppError>;
}

pub struct StoreSpotRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl StoreSpotRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl SpotRepository for StoreSpotRepository {
    async fn get_by_id(&self, id: &str) -> Result<Option<ParkingSpot>, AppError> {
        let spots: Vec<ParkingSpot> = read_collection(self.store.as_ref(), SPOTS_KEY).await?;
        Ok(spots.into_iter().find(|spot| spot.id == id))
    }

    async fn list(&self) -> Result<Vec<ParkingSpot>, AppError> {
        read_collection(self.store.as_ref(), SPOTS_KEY).await
    }

    async fn upsert(&self, spot: ParkingSpot) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;

        let mut spots: Vec<ParkingSpot> = read_collection(self.store.as_ref(), SPOTS_KEY).await?;
        match spots.iter_mut().find(|existing| existing.id == spot.id) {
            Some(existing) => *existing = spot,
            None => spots.push(spot),
        }

        write_collection(self.store.as_ref(), SPOTS_KEY, &spots).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{SpotRepository, StoreSpotRepository};
    use crate::models::spot::ParkingSpot;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn upsert_replaces_existing_spot() {
        let repo = StoreSpotRepository::new(Arc::new(MemoryStore::new()));

        let mut spot = ParkingSpot::fallback("9");
        repo.upsert(spot.clone()).await.unwrap();

        spot.hourly_rate = 55.0;
        repo.upsert(spot).await.unwrap();

        let spots = repo.list().await.unwrap();
        assert_eq!(spots.len(), 1);
        assert_eq!(spots[0].hourly_rate, 55.0);
    }

    #[tokio::test]
    async fn unknown_id_is_none() {
        let repo = StoreSpotRepository::new(Arc::new(MemoryStore::new()));
        assert!(repo.get_by_id("42").await.unwrap().is_none());
    }
}
