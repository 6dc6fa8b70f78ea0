use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::AppError;
use crate::models::booking::Booking;
use crate::store::{read_collection, write_collection, KeyValueStore, BOOKINGS_KEY};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    /// Adds a booking to the collection. Duplicate ids are rejected.
    async fn append(&self, booking: Booking) -> Result<(), AppError>;
    async fn list(&self) -> Result<Vec<Booking>, AppError>;
}

pub struct StoreBookingRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl StoreBookingRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl BookingRepository for StoreBookingRepository {
    async fn get_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        let bookings: Vec<Booking> = read_collection(self.store.as_ref(), BOOKINGS_KEY).await?;
        Ok(bookings.into_iter().find(|booking| booking.id == id))
    }

    async fn append(&self, booking: Booking) -> Result<(), AppError> {
        // the whole collection is rewritten, so appends must not interleave
        let _guard = self.write_lock.lock().await;

        let mut bookings: Vec<Booking> =
            read_collection(self.store.as_ref(), BOOKINGS_KEY).await?;
        if bookings.iter().any(|existing| existing.id == booking.id) {
            return Err(AppError::Conflict(format!(
                "booking {} already exists",
                booking.id
            )));
        }

        bookings.push(booking);
        write_collection(self.store.as_ref(), BOOKINGS_KEY, &bookings).await?;

        debug!(count = bookings.len(), "booking collection written");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        read_collection(self.store.as_ref(), BOOKINGS_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{NaiveDate, Utc};

    use super::{BookingRepository, StoreBookingRepository};
    use crate::error::AppError;
    use crate::models::booking::{Booking, BookingStatus, PaymentMethod};
    use crate::store::MemoryStore;

    fn booking(id: &str) -> Booking {
        Booking {
            id: id.to_string(),
            user_id: "guest".to_string(),
            spot_id: "7".to_string(),
            spot_name: "Test Lot".to_string(),
            location: "1 Test Road".to_string(),
            date: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
            start_time: "10:00".to_string(),
            duration_hours: 2,
            vehicle: "Honda City (KA-01-AB-1234)".to_string(),
            payment_method: PaymentMethod::Later,
            price: 80.0,
            currency: "₹".to_string(),
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
            confirmation_code: "PARK1234".to_string(),
        }
    }

    fn repository() -> StoreBookingRepository {
        StoreBookingRepository::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn append_grows_collection_by_one() {
        let repo = repository();
        repo.append(booking("booking-1")).await.unwrap();
        repo.append(booking("booking-2")).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].id, "booking-2");
    }

    #[tokio::test]
    async fn get_by_id_returns_stored_fields_unmodified() {
        let repo = repository();
        let original = booking("booking-42");
        repo.append(original.clone()).await.unwrap();

        let found = repo.get_by_id("booking-42").await.unwrap();
        assert_eq!(found, Some(original));
        assert!(repo.get_by_id("booking-43").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected_without_writing() {
        let repo = repository();
        repo.append(booking("booking-1")).await.unwrap();

        let result = repo.append(booking("booking-1")).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn concurrent_appends_are_not_lost() {
        let repo = Arc::new(repository());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.append(booking(&format!("booking-{i}"))).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.list().await.unwrap().len(), 16);
    }
}
