use serde::{Deserialize, Serialize};

/// Driving directions as proxied by the backend.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Directions {
    pub code: i32,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub current_date_time: Option<String>,
    #[serde(default)]
    pub route: Route,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Route {
    #[serde(default)]
    pub traoptimal: Option<Vec<RouteUnit>>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct RouteUnit {
    pub summary: RouteSummary,
    /// `[lng, lat]` pairs.
    #[serde(default)]
    pub path: Vec<[f64; 2]>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub start      : RoutePoint,
    pub goal       : RoutePoint,
    /// Meters
    pub distance   : u64,
    /// Milliseconds
    pub duration   : u64,
    #[serde(default)]
    pub toll_fare  : u64,
    #[serde(default)]
    pub taxi_fare  : u64,
    #[serde(default)]
    pub fuel_price : u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct RoutePoint {
    /// `[lng, lat]`
    pub location: [f64; 2],
}
