use serde::Serialize;

use crate::models::spot::{GeoPoint, ParkingSpot};

const EARTH_RADIUS_KM: f64 = 6_371.0;

pub fn haversine_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let sin_lat = (delta_lat / 2.0).sin();
    let sin_lng = (delta_lng / 2.0).sin();

    let haversine = sin_lat * sin_lat + lat1.cos() * lat2.cos() * sin_lng * sin_lng;
    let central_angle = 2.0 * haversine.sqrt().asin();

    EARTH_RADIUS_KM * central_angle
}

#[derive(Debug, Clone, Serialize)]
pub struct NearbySpot {
    #[serde(flatten)]
    pub spot: ParkingSpot,
    pub distance_km: Option<f64>,
}

pub fn rank_by_distance(
    spots: Vec<ParkingSpot>,
    origin: Option<&GeoPoint>,
    limit: Option<usize>,
) -> Vec<NearbySpot> {
    let mut ranked: Vec<NearbySpot> = spots
        .into_iter()
        .map(|spot| {
            let distance_km = origin
                .zip(spot.location.as_ref())
                .map(|(from, to)| haversine_km(from, to));
            NearbySpot { spot, distance_km }
        })
        .collect();

    if origin.is_some() {
        ranked.sort_by(|a, b| match (a.distance_km, b.distance_km) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
    }

    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::{haversine_km, rank_by_distance};
    use crate::models::spot::{GeoPoint, ParkingSpot};

    fn spot_at(id: &str, location: Option<GeoPoint>) -> ParkingSpot {
        let mut spot = ParkingSpot::fallback(id);
        spot.location = location;
        spot
    }

    #[test]
    fn zero_distance_for_same_point() {
        let p = GeoPoint {
            lat: 12.9716,
            lng: 77.5946,
        };
        let distance = haversine_km(&p, &p);
        assert!(distance < 1e-9);
    }

    #[test]
    fn bengaluru_to_mysuru_is_around_128_km() {
        let bengaluru = GeoPoint {
            lat: 12.9716,
            lng: 77.5946,
        };
        let mysuru = GeoPoint {
            lat: 12.2958,
            lng: 76.6394,
        };
        let distance = haversine_km(&bengaluru, &mysuru);
        assert!((distance - 128.0).abs() < 5.0);
    }

    #[test]
    fn nearest_spot_comes_first_and_unlocated_last() {
        let origin = GeoPoint {
            lat: 12.9716,
            lng: 77.5946,
        };
        let spots = vec![
            spot_at("nowhere", None),
            spot_at("far", Some(GeoPoint { lat: 13.2, lng: 77.7 })),
            spot_at("near", Some(GeoPoint { lat: 12.972, lng: 77.595 })),
        ];

        let ranked = rank_by_distance(spots, Some(&origin), None);
        let ids: Vec<&str> = ranked.iter().map(|n| n.spot.id.as_str()).collect();
        assert_eq!(ids, vec!["near", "far", "nowhere"]);
        assert!(ranked[2].distance_km.is_none());
    }

    #[test]
    fn without_origin_order_is_kept_and_limit_applies() {
        let spots = vec![
            spot_at("a", Some(GeoPoint { lat: 1.0, lng: 1.0 })),
            spot_at("b", None),
            spot_at("c", Some(GeoPoint { lat: 0.0, lng: 0.0 })),
        ];

        let ranked = rank_by_distance(spots, None, Some(2));
        let ids: Vec<&str> = ranked.iter().map(|n| n.spot.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(ranked.iter().all(|n| n.distance_km.is_none()));
    }
}
