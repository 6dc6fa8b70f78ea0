use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpotType {
    Indoor,
    Outdoor,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Amenities {
    pub covered: bool,
    pub security: bool,
    pub cctv: bool,
    pub ev_charging: bool,
    pub handicapped: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParkingSpot {
    pub id: String,
    pub name: String,
    pub address: String,
    pub description: String,
    pub hourly_rate: f64,
    pub price_unit: String,
    pub currency: String,
    pub total_spots: u32,
    pub available_spots: u32,
    pub spot_type: SpotType,
    pub amenities: Amenities,
    pub hours: String,
    pub rating: f64,
    pub reviews: u32,
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

pub const FALLBACK_SPOT_NAME: &str = "Sample Parking Spot";
pub const FALLBACK_SPOT_ADDRESS: &str = "123 Sample Street, City";
pub const FALLBACK_HOURLY_RATE: f64 = 40.0;
pub const DEFAULT_CURRENCY: &str = "₹";

impl ParkingSpot {
    pub fn fallback(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: FALLBACK_SPOT_NAME.to_string(),
            address: FALLBACK_SPOT_ADDRESS.to_string(),
            description: "This is a sample parking spot for demonstration purposes.".to_string(),
            hourly_rate: FALLBACK_HOURLY_RATE,
            price_unit: "hour".to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            total_spots: 50,
            available_spots: 20,
            spot_type: SpotType::Indoor,
            amenities: Amenities {
                covered: true,
                security: true,
                cctv: true,
                ev_charging: true,
                handicapped: true,
            },
            hours: "24/7".to_string(),
            rating: 4.5,
            reviews: 120,
            location: None,
        }
    }
}

pub fn sample_spots() -> Vec<ParkingSpot> {
    vec![
        ParkingSpot {
            id: "1".to_string(),
            name: "MG Road Metro Parking".to_string(),
            address: "MG Road, Bengaluru".to_string(),
            description: "Multi-level parking next to the MG Road metro station.".to_string(),
            hourly_rate: 40.0,
            price_unit: "hour".to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            total_spots: 120,
            available_spots: 34,
            spot_type: SpotType::Indoor,
            amenities: Amenities {
                covered: true,
                security: true,
                cctv: true,
                ev_charging: true,
                handicapped: true,
            },
            hours: "06:00-23:00".to_string(),
            rating: 4.4,
            reviews: 212,
            location: Some(GeoPoint {
                lat: 12.9756,
                lng: 77.6066,
            }),
        },
        ParkingSpot {
            id: "2".to_string(),
            name: "Brigade Road Open Lot".to_string(),
            address: "Brigade Road, Bengaluru".to_string(),
            description: "Open-air lot close to the shopping district.".to_string(),
            hourly_rate: 30.0,
            price_unit: "hour".to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            total_spots: 60,
            available_spots: 12,
            spot_type: SpotType::Outdoor,
            amenities: Amenities {
                covered: false,
                security: true,
                cctv: true,
                ev_charging: false,
                handicapped: false,
            },
            hours: "24/7".to_string(),
            rating: 3.9,
            reviews: 87,
            location: Some(GeoPoint {
                lat: 12.9719,
                lng: 77.6077,
            }),
        },
        ParkingSpot {
            id: "3".to_string(),
            name: "Indiranagar 100ft Road Parking".to_string(),
            address: "100 Feet Road, Indiranagar, Bengaluru".to_string(),
            description: "Basement parking with EV chargers.".to_string(),
            hourly_rate: 50.0,
            price_unit: "hour".to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            total_spots: 80,
            available_spots: 41,
            spot_type: SpotType::Indoor,
            amenities: Amenities {
                covered: true,
                security: true,
                cctv: true,
                ev_charging: true,
                handicapped: true,
            },
            hours: "24/7".to_string(),
            rating: 4.7,
            reviews: 154,
            location: Some(GeoPoint {
                lat: 12.9784,
                lng: 77.6408,
            }),
        },
    ]
}
