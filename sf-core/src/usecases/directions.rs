use super::prelude::*;
use crate::geo::GeoPoint;

/// The part of a driving route that is displayed.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOverview {
    /// Meters
    pub distance   : u64,
    /// Milliseconds
    pub duration   : u64,
    pub toll_fare  : u64,
    pub taxi_fare  : u64,
    pub fuel_price : u64,
    pub path       : Vec<GeoPoint>,
}

#[must_use]
pub fn directions_query(start: GeoPoint, goal: GeoPoint) -> DirectionsQuery {
    DirectionsQuery {
        start: start.to_lng_lat(),
        goal: goal.to_lng_lat(),
        option: Some(DEFAULT_ROUTE_OPTION.to_owned()),
    }
}

/// The optimal route, if the provider found one.
#[must_use]
pub fn best_route(directions: &Directions) -> Option<RouteOverview> {
    if directions.code != 0 {
        log::debug!(
            "No route found ({}): {}",
            directions.code,
            directions.message
        );
        return None;
    }
    let unit = directions.route.traoptimal.as_ref()?.first()?;
    let summary = &unit.summary;
    Some(RouteOverview {
        distance: summary.distance,
        duration: summary.duration,
        toll_fare: summary.toll_fare,
        taxi_fare: summary.taxi_fare,
        fuel_price: summary.fuel_price,
        path: unit
            .path
            .iter()
            .map(|[lng, lat]| GeoPoint::new(*lat, *lng))
            .collect(),
    })
}

pub async fn driving_route<A>(
    api: &A,
    start: GeoPoint,
    goal: GeoPoint,
) -> api::Result<Option<RouteOverview>>
where
    A: DirectionsApi,
{
    let directions = api.driving(&directions_query(start, goal)).await?;
    Ok(best_route(&directions))
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    fn directions(code: i32) -> Directions {
        serde_json::from_str(&format!(
            r#"{{
                "code": {code},
                "message": "길찾기를 성공하였습니다.",
                "route": {{
                    "traoptimal": [{{
                        "summary": {{
                            "start": {{ "location": [127.1, 37.5] }},
                            "goal": {{ "location": [127.2, 37.4] }},
                            "distance": 12345,
                            "duration": 1500000,
                            "tollFare": 0,
                            "taxiFare": 15600,
                            "fuelPrice": 1800
                        }},
                        "path": [[127.1, 37.5], [127.2, 37.4]]
                    }}]
                }}
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn query_uses_lng_lat_order() {
        let query = directions_query(GeoPoint::new(37.5, 127.1), GeoPoint::new(37.4, 127.2));
        assert_eq!(query.start, "127.1,37.5");
        assert_eq!(query.goal, "127.2,37.4");
        assert_eq!(query.option.as_deref(), Some("traoptimal"));
    }

    #[test]
    fn extract_the_optimal_route() {
        let route = best_route(&directions(0)).unwrap();
        assert_eq!(route.distance, 12_345);
        assert_eq!(route.taxi_fare, 15_600);
        assert_eq!(
            route.path,
            vec![GeoPoint::new(37.5, 127.1), GeoPoint::new(37.4, 127.2)]
        );
        assert!(best_route(&directions(1)).is_none());
    }

    #[tokio::test]
    async fn fetch_a_driving_route() {
        let api = MockApi::default();
        *api.directions.borrow_mut() = Some(directions(0));
        let route = driving_route(&api, GeoPoint::new(37.5, 127.1), GeoPoint::new(37.4, 127.2))
            .await
            .unwrap();
        assert!(route.is_some());
        assert_eq!(
            api.calls(),
            vec!["GET /api/directions/driving?start=127.1%2C37.5&goal=127.2%2C37.4&option=traoptimal"]
        );
    }
}
