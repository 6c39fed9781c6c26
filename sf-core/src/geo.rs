use std::fmt;

use sf_boundary::Facility;

/// Browser geolocation request timeout.
pub const GEOLOCATION_TIMEOUT_MS: u32 = 10_000;
/// Cached positions younger than this may be reused.
pub const GEOLOCATION_MAX_AGE_MS: u32 = 300_000;

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance in meters.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let d_phi = (other.lat - self.lat).to_radians();
        let d_lambda = (other.lng - self.lng).to_radians();
        let a = (d_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_METERS * c
    }

    /// The `lng,lat` notation of the routing API.
    #[must_use]
    pub fn to_lng_lat(&self) -> String {
        format!("{},{}", self.lng, self.lat)
    }
}

/// The position of a facility on the map.
///
/// The backend is known to deliver latitude and longitude swapped,
/// which can be compensated with `swapped`.
#[must_use]
pub const fn facility_position(facility: &Facility, swapped: bool) -> GeoPoint {
    if swapped {
        GeoPoint::new(facility.longitude, facility.latitude)
    } else {
        GeoPoint::new(facility.latitude, facility.longitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationError {
    Unsupported,
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Unknown,
}

impl GeolocationError {
    /// Maps the W3C `GeolocationPositionError.code`.
    #[must_use]
    pub const fn from_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Unsupported => "이 브라우저는 위치 정보를 지원하지 않습니다.",
            Self::PermissionDenied => {
                "위치 정보 접근이 거부되었습니다. 브라우저 설정에서 위치 권한을 허용해주세요."
            }
            Self::PositionUnavailable => "위치 정보를 사용할 수 없습니다.",
            Self::Timeout => "위치 정보 요청 시간이 초과되었습니다.",
            Self::Unknown => "위치 정보를 가져올 수 없습니다.",
        }
    }
}

impl fmt::Display for GeolocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for GeolocationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_between_seoul_and_busan() {
        let seoul = GeoPoint::new(37.5665, 126.9780);
        let busan = GeoPoint::new(35.1796, 129.0756);
        let d = seoul.distance_to(&busan);
        assert!((d - 325_000.0).abs() < 5_000.0, "{d}");
        assert!(seoul.distance_to(&seoul).abs() < f64::EPSILON);
    }

    #[test]
    fn routing_notation_starts_with_longitude() {
        assert_eq!(GeoPoint::new(37.5, 127.25).to_lng_lat(), "127.25,37.5");
    }

    #[test]
    fn swap_facility_coordinates() {
        let facility = Facility {
            facility_id: 1,
            name: "체육관".into(),
            address: String::new(),
            phone_number: None,
            main_sport: String::new(),
            aver_rating: 0.0,
            review_count: 0,
            is_favorite: false,
            latitude: 127.0,
            longitude: 37.5,
        };
        assert_eq!(facility_position(&facility, true), GeoPoint::new(37.5, 127.0));
        assert_eq!(facility_position(&facility, false), GeoPoint::new(127.0, 37.5));
    }

    #[test]
    fn error_codes() {
        assert_eq!(GeolocationError::from_code(1), GeolocationError::PermissionDenied);
        assert_eq!(GeolocationError::from_code(3).to_string(), "위치 정보 요청 시간이 초과되었습니다.");
        assert_eq!(GeolocationError::from_code(0), GeolocationError::Unknown);
    }
}
