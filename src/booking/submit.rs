use std::time::Instant;
use chrono::Utc;

use serde::Serialize;
use tokio::time::sleep;
use tracing::{error, info};

use crate::booking::form::{BookingRequest, BookingSelection};
use crate::booking::ids::confirmation_code;
use crate::booking::lookup::lookup_spot;
use crate::booking::pricing::total_price;
use crate::error::AppError;
use crate::models::booking::{Booking, BookingStatus, GUEST_USER_ID};
use crate::models::notice::Notice;
use crate::models::spot::ParkingSpot;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct BookingReceipt {
    pub booking: Booking,
    pub redirect_to: String,
    pub notice: Notice,
}

pub fn confirmation_path(booking_id: &str) -> String {
    format!("/booking/confirmation/{booking_id}")
}

pub async fn submit_booking(
    state: &AppState,
    spot_id: &str,
    user_id: Option<&str>,
    request: BookingRequest,
) -> Result<BookingReceipt, AppError> {
    let selection = request.validate(state.settings.today())?;
    let spot = lookup_spot(state, spot_id).await?.spot;

    let start = Instant::now();
    match create_booking(state, &spot, user_id, selection).await {
        Ok(booking) => {
            record_outcome(state, "success", start);

            let notice = if state.connectivity.is_offline() {
                Notice::booking_saved_offline()
            } else {
                Notice::booking_confirmed(&spot.name)
            };
            state.publish(notice.clone());

            info!(
                booking_id = %booking.id,
                spot_id = %booking.spot_id,
                price = booking.price,
                "booking confirmed"
            );

            Ok(BookingReceipt {
                redirect_to: confirmation_path(&booking.id),
                booking,
                notice,
            })
        }
        Err(err) => {
            record_outcome(state, "error", start);
            state.publish(Notice::booking_failed());
            error!(spot_id, error = %err, "failed to create booking");
            Err(err)
        }
    }
}

async fn create_booking(
    state: &AppState,
    spot: &ParkingSpot,
    user_id: Option<&str>,
    selection: BookingSelection,
) -> Result<Booking, AppError> {
    let booking = Booking {
        id: state.booking_ids.next(),
        user_id: user_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or(GUEST_USER_ID)
            .to_string(),
        spot_id: spot.id.clone(),
        spot_name: spot.name.clone(),
        location: spot.address.clone(),
        date: selection.date,
        start_time: selection.start_time,
        duration_hours: selection.duration_hours,
        vehicle: selection.vehicle,
        payment_method: selection.payment_method,
        price: total_price(spot.hourly_rate, selection.duration_hours),
        currency: spot.currency.clone(),
        status: BookingStatus::Confirmed,
        created_at: Utc::now(),
        confirmation_code: confirmation_code(),
    };

    sleep(state.settings.submit_delay).await;
    state.bookings.append(booking.clone()).await?;

    Ok(booking)
}

fn record_outcome(state: &AppState, outcome: &str, start: Instant) {
    state
        .metrics
        .booking_submit_latency_seconds
        .with_label_values(&[outcome])
        .observe(start.elapsed().as_secs_f64());
    state
        .metrics
        .bookings_total
        .with_label_values(&[outcome])
        .inc();
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::submit_booking;
    use crate::booking::form::BookingRequest;
    use crate::error::AppError;
    use crate::models::booking::BookingStatus;
    use crate::models::notice::NoticeStatus;
    use crate::state::{AppState, BookingSettings};
    use crate::store::MemoryStore;

    fn state() -> AppState {
        let settings = BookingSettings {
            submit_delay: Duration::ZERO,
            ..BookingSettings::default()
        };
        AppState::new(Arc::new(MemoryStore::new()), settings, 16)
    }

    fn request(duration_hours: u32) -> BookingRequest {
        BookingRequest {
            duration_hours: Some(duration_hours),
            vehicle: Some("v1".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn booking_on_sample_spot_prices_rate_times_duration() {
        let state = state();

        let receipt = submit_booking(&state, "42", None, request(2)).await.unwrap();
        assert_eq!(receipt.booking.price, 80.0);
        assert_eq!(receipt.booking.spot_id, "42");
        assert_eq!(receipt.booking.user_id, "guest");
        assert_eq!(receipt.booking.status, BookingStatus::Confirmed);
        assert!(receipt.booking.confirmation_code.starts_with("PARK"));
    }

    #[tokio::test]
    async fn collection_grows_by_one_and_redirect_matches_id() {
        let state = state();
        let before = state.bookings.list().await.unwrap().len();

        let receipt = submit_booking(&state, "42", Some("user-7"), request(3))
            .await
            .unwrap();

        let after = state.bookings.list().await.unwrap();
        assert_eq!(after.len(), before + 1);
        assert_eq!(after[0].id, receipt.booking.id);
        assert_eq!(after[0].user_id, "user-7");
        assert_eq!(
            receipt.redirect_to,
            format!("/booking/confirmation/{}", receipt.booking.id)
        );
    }

    #[tokio::test]
    async fn offline_changes_notice_but_not_outcome() {
        let state = state();

        let online = submit_booking(&state, "42", None, request(1)).await.unwrap();
        assert_eq!(online.notice.status, NoticeStatus::Success);
        assert_eq!(online.notice.title, "Booking Confirmed");

        state.connectivity.set_online(false);
        let offline = submit_booking(&state, "42", None, request(1)).await.unwrap();
        assert_eq!(offline.notice.status, NoticeStatus::Pending);
        assert_eq!(
            offline.notice.message,
            "Booking saved offline. Will sync when online."
        );

        assert_eq!(state.bookings.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn invalid_form_writes_nothing() {
        let state = state();
        let result = submit_booking(&state, "42", None, request(7)).await;

        assert!(result.is_err());
        assert!(state.bookings.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejected_form_never_touches_the_spot() {
        let state = state();
        state.connectivity.set_online(false);
        let mut rx = state.notice_tx.subscribe();

        let result = submit_booking(&state, "42", None, request(7)).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(rx.try_recv().is_err());
        assert_eq!(
            state
                .metrics
                .spot_lookups_total
                .with_label_values(&["fallback"])
                .get(),
            0
        );
    }

    #[tokio::test]
    async fn notices_are_broadcast() {
        let state = state();
        let mut rx = state.notice_tx.subscribe();

        submit_booking(&state, "42", None, request(2)).await.unwrap();

        let notice = rx.recv().await.unwrap();
        assert_eq!(
            notice.message,
            "Your booking at Sample Parking Spot has been confirmed."
        );
    }
}
