use serde::Serialize;

use crate::error::AppError;
use crate::models::spot::ParkingSpot;

pub fn total_price(hourly_rate: f64, duration_hours: u32) -> f64 {
    hourly_rate * f64::from(duration_hours)
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Quote {
    pub spot_id: String,
    pub hourly_rate: f64,
    pub price_unit: String,
    pub currency: String,
    pub duration_hours: u32,
    pub total: f64,
}

pub fn quote(spot: &ParkingSpot, duration_hours: u32) -> Result<Quote, AppError> {
    if duration_hours == 0 {
        return Err(AppError::BadRequest(
            "duration must be at least 1 hour".to_string(),
        ));
    }

    Ok(Quote {
        spot_id: spot.id.clone(),
        hourly_rate: spot.hourly_rate,
        price_unit: spot.price_unit.clone(),
        currency: spot.currency.clone(),
        duration_hours,
        total: total_price(spot.hourly_rate, duration_hours),
    })
}

#[cfg(test)]
mod tests {
    use super::{quote, total_price};
    use crate::models::spot::ParkingSpot;

    #[test]
    fn total_is_rate_times_duration() {
        for rate in [0.0, 1.0, 12.5, 40.0, 99.99] {
            for duration in 1..=48u32 {
                assert_eq!(total_price(rate, duration), rate * duration as f64);
            }
        }
    }

    #[test]
    fn sample_spot_for_two_hours_costs_80() {
        let spot = ParkingSpot::fallback("42");
        let quote = quote(&spot, 2).unwrap();
        assert_eq!(quote.total, 80.0);
        assert_eq!(quote.currency, "₹");
    }

    #[test]
    fn zero_duration_is_rejected() {
        let spot = ParkingSpot::fallback("42");
        assert!(quote(&spot, 0).is_err());
    }
}
