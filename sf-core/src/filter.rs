//! Facility search criteria as composed in the filter bar.

use std::fmt;

use sf_boundary::FacilitySearch;
use sf_frontend_api::Query;

use crate::geo::{GeoPoint, GeolocationError};

/// Selectable search radii in meters.
pub const RADIUS_OPTIONS: [u32; 4] = [1_000, 3_000, 5_000, 10_000];

/// Selectable minimum ratings.
pub const MIN_RATING_OPTIONS: [f64; 3] = [4.5, 4.0, 3.5];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Rating,
    Reviews,
    Price,
    Distance,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::Rating, Self::Reviews, Self::Price, Self::Distance];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::Reviews => "review",
            Self::Price => "price",
            Self::Distance => "distance",
        }
    }

    #[must_use]
    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rating => "평점순",
            Self::Reviews => "리뷰 많은순",
            Self::Price => "가격순",
            Self::Distance => "거리순",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LocationState {
    #[default]
    Unknown,
    Locating,
    Available(GeoPoint),
    Unavailable(String),
}

impl LocationState {
    #[must_use]
    pub const fn position(&self) -> Option<GeoPoint> {
        match self {
            Self::Available(pos) => Some(*pos),
            _ => None,
        }
    }
}

/// The outcome of selecting a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortSelection {
    Applied,
    /// The current position has to be determined first.
    NeedsLocation,
    Rejected,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    pub keyword    : String,
    pub province   : String,
    pub city       : String,
    pub sport      : String,
    pub radius     : Option<u32>,
    pub min_rating : Option<f64>,
    pub sort       : Option<SortKey>,
    pub location   : LocationState,
    /// City options of the selected province.
    pub cities     : Vec<String>,
    sort_before_locating: Option<SortKey>,
}

impl SearchFilter {
    /// Restores the criteria stored in the URL.
    ///
    /// Location based criteria stay inactive until a position is available.
    #[must_use]
    pub fn from_query(query: &SearchQuery) -> Self {
        let SearchQuery {
            keyword,
            ct_nm,
            ct_detail_nm,
            main_sport,
            min_rating,
            radius,
            sort_by,
            page: _,
        } = query.clone();
        Self {
            keyword: keyword.unwrap_or_default(),
            province: ct_nm.unwrap_or_default(),
            city: ct_detail_nm.unwrap_or_default(),
            sport: main_sport.unwrap_or_default(),
            radius,
            min_rating,
            sort: sort_by,
            ..Default::default()
        }
    }

    /// Returns `true` if the city options have to be fetched.
    pub fn select_province(&mut self, province: &str) -> bool {
        self.province = province.to_owned();
        self.city.clear();
        self.cities.clear();
        !self.province.is_empty()
    }

    /// Applies the city options fetched for `province`.
    ///
    /// Options of a province that is no longer selected are dropped.
    pub fn apply_cities<E>(&mut self, province: &str, result: Result<Vec<String>, E>) -> bool
    where
        E: fmt::Display,
    {
        if self.province != province {
            log::debug!("Dropping cities of {province}, {} is selected", self.province);
            return false;
        }
        match result {
            Ok(cities) => {
                if !self.city.is_empty() && !cities.contains(&self.city) {
                    self.city.clear();
                }
                self.cities = cities;
            }
            Err(err) => {
                log::warn!("Unable to load cities of {province}: {err}");
                self.cities.clear();
            }
        }
        true
    }

    pub fn start_locating(&mut self) {
        self.location = LocationState::Locating;
    }

    pub fn location_found(&mut self, position: GeoPoint) {
        self.location = LocationState::Available(position);
        self.sort_before_locating = None;
    }

    /// Location based controls are disabled afterwards.
    pub fn location_failed(&mut self, err: GeolocationError) {
        log::warn!("Unable to determine the current position: {err}");
        self.location = LocationState::Unavailable(err.message().to_owned());
        self.radius = None;
        if self.sort == Some(SortKey::Distance) {
            self.sort = self.sort_before_locating.take();
        }
    }

    #[must_use]
    pub const fn location_enabled(&self) -> bool {
        !matches!(self.location, LocationState::Unavailable(_))
    }

    /// Whether restored criteria wait for a position.
    #[must_use]
    pub const fn needs_location(&self) -> bool {
        matches!(self.location, LocationState::Unknown)
            && (self.radius.is_some() || matches!(self.sort, Some(SortKey::Distance)))
    }

    /// Selecting the active radius deselects it.
    pub fn toggle_radius(&mut self, radius: u32) {
        if !self.location_enabled() {
            return;
        }
        self.radius = if self.radius == Some(radius) {
            None
        } else {
            Some(radius)
        };
    }

    /// Selecting the active minimum rating deselects it.
    pub fn toggle_min_rating(&mut self, min_rating: f64) {
        self.min_rating = match self.min_rating {
            Some(r) if (r - min_rating).abs() < f64::EPSILON => None,
            _ => Some(min_rating),
        };
    }

    pub fn select_sort(&mut self, sort: Option<SortKey>) -> SortSelection {
        if sort != Some(SortKey::Distance) {
            self.sort = sort;
            return SortSelection::Applied;
        }
        match self.location {
            LocationState::Available(_) => {
                self.sort = sort;
                SortSelection::Applied
            }
            LocationState::Unavailable(_) => SortSelection::Rejected,
            LocationState::Unknown | LocationState::Locating => {
                if self.sort != Some(SortKey::Distance) {
                    self.sort_before_locating = self.sort;
                }
                self.sort = sort;
                self.location = LocationState::Locating;
                SortSelection::NeedsLocation
            }
        }
    }

    /// The criteria of the next facility search.
    #[must_use]
    pub fn to_search(&self) -> FacilitySearch {
        let position = self.location.position();
        let radius = self.radius.filter(|_| position.is_some());
        let distance_sort = self.sort == Some(SortKey::Distance) && position.is_some();
        let position = position.filter(|_| radius.is_some() || distance_sort);
        FacilitySearch {
            keyword: non_blank(&self.keyword),
            ct_nm: non_blank(&self.province),
            ct_detail_nm: non_blank(&self.city),
            main_sport: non_blank(&self.sport),
            min_rating: self.min_rating,
            max_rating: None,
            sort_by: self
                .sort
                .filter(|s| *s != SortKey::Distance || distance_sort)
                .map(|s| s.as_str().to_owned()),
            lat: position.map(|p| p.lat),
            lng: position.map(|p| p.lng),
            radius,
        }
    }

    /// The URL representation of the criteria.
    #[must_use]
    pub fn to_query(&self, page: u32) -> SearchQuery {
        SearchQuery {
            keyword: non_blank(&self.keyword),
            ct_nm: non_blank(&self.province),
            ct_detail_nm: non_blank(&self.city),
            main_sport: non_blank(&self.sport),
            min_rating: self.min_rating,
            radius: self.radius,
            sort_by: self.sort,
            page: Some(page).filter(|p| *p > 1),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub(crate) fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_owned())
}

/// Search criteria kept in the `/search` URL.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub keyword      : Option<String>,
    pub ct_nm        : Option<String>,
    pub ct_detail_nm : Option<String>,
    pub main_sport   : Option<String>,
    pub min_rating   : Option<f64>,
    pub radius       : Option<u32>,
    pub sort_by      : Option<SortKey>,
    pub page         : Option<u32>,
}

impl SearchQuery {
    /// Reads the criteria with `get` from URL parameters.
    /// Invalid values are ignored.
    pub fn from_url_params<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str| get(key).as_deref().and_then(non_blank);
        Self {
            keyword: text("keyword"),
            ct_nm: text("ctNm"),
            ct_detail_nm: text("ctDetailNm"),
            main_sport: text("mainSport"),
            min_rating: text("minRating").and_then(|r| r.parse().ok()),
            radius: text("radius").and_then(|r| r.parse().ok()),
            sort_by: text("sortBy").and_then(|s| SortKey::from_str_opt(&s)),
            page: text("page")
                .and_then(|p| p.parse().ok())
                .filter(|p| *p > 0),
        }
    }

    #[must_use]
    pub fn to_url_params(&self) -> Query {
        Query::new()
            .opt("keyword", self.keyword.as_ref())
            .opt("ctNm", self.ct_nm.as_ref())
            .opt("ctDetailNm", self.ct_detail_nm.as_ref())
            .opt("mainSport", self.main_sport.as_ref())
            .opt("minRating", self.min_rating)
            .opt("radius", self.radius)
            .opt("sortBy", self.sort_by.map(SortKey::as_str))
            .opt("page", self.page)
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const HERE: GeoPoint = GeoPoint::new(37.5, 127.03);

    fn located() -> SearchFilter {
        let mut filter = SearchFilter::default();
        filter.location_found(HERE);
        filter
    }

    #[test]
    fn reselecting_the_radius_removes_location_params() {
        let mut filter = located();
        filter.toggle_radius(5_000);
        let search = filter.to_search();
        assert_eq!(search.radius, Some(5_000));
        assert_eq!(search.lat, Some(37.5));
        assert_eq!(search.lng, Some(127.03));

        filter.toggle_radius(3_000);
        assert_eq!(filter.to_search().radius, Some(3_000));

        filter.toggle_radius(3_000);
        let search = filter.to_search();
        assert_eq!(search.radius, None);
        assert_eq!(search.lat, None);
        assert_eq!(search.lng, None);
    }

    #[test]
    fn reselecting_the_min_rating_removes_it() {
        let mut filter = SearchFilter::default();
        filter.toggle_min_rating(4.0);
        assert_eq!(filter.to_search().min_rating, Some(4.0));
        filter.toggle_min_rating(4.5);
        assert_eq!(filter.to_search().min_rating, Some(4.5));
        filter.toggle_min_rating(4.5);
        assert_eq!(filter.to_search().min_rating, None);
    }

    #[test]
    fn province_change_clears_the_city() {
        let mut filter = SearchFilter::default();
        assert!(filter.select_province("서울특별시"));
        filter.apply_cities::<String>("서울특별시", Ok(vec!["강남구".into(), "마포구".into()]));
        filter.city = "강남구".into();

        assert!(filter.select_province("부산광역시"));
        assert!(filter.city.is_empty());
        assert!(filter.cities.is_empty());
        filter.apply_cities::<String>("부산광역시", Ok(vec!["해운대구".into()]));
        assert_eq!(filter.cities, vec!["해운대구".to_string()]);

        assert!(!filter.select_province(""));
    }

    #[test]
    fn cities_of_a_deselected_province_are_dropped() {
        let mut filter = SearchFilter::default();
        filter.select_province("서울특별시");
        assert!(!filter.select_province(""));
        assert!(!filter.apply_cities::<String>("서울특별시", Ok(vec!["강남구".into()])));
        assert!(filter.province.is_empty());
        assert!(filter.cities.is_empty());

        filter.select_province("부산광역시");
        filter.reset();
        assert!(!filter.apply_cities::<String>("부산광역시", Ok(vec!["해운대구".into()])));
        assert_eq!(filter, SearchFilter::default());
    }

    #[test]
    fn failed_city_fetch_yields_no_options() {
        let mut filter = SearchFilter::default();
        filter.select_province("서울특별시");
        filter.apply_cities("서울특별시", Err("timeout"));
        assert!(filter.cities.is_empty());
    }

    #[test]
    fn distance_sort_requires_a_position() {
        let mut filter = SearchFilter::default();
        assert_eq!(filter.select_sort(Some(SortKey::Rating)), SortSelection::Applied);
        assert_eq!(
            filter.select_sort(Some(SortKey::Distance)),
            SortSelection::NeedsLocation
        );
        assert_eq!(filter.location, LocationState::Locating);
        assert_eq!(filter.to_search().sort_by, None);

        filter.location_failed(GeolocationError::PermissionDenied);
        assert_eq!(filter.sort, Some(SortKey::Rating));
        assert!(!filter.location_enabled());
        assert_eq!(
            filter.select_sort(Some(SortKey::Distance)),
            SortSelection::Rejected
        );
        assert_eq!(filter.sort, Some(SortKey::Rating));
    }

    #[test]
    fn distance_sort_sends_the_position() {
        let mut filter = SearchFilter::default();
        filter.select_sort(Some(SortKey::Distance));
        filter.location_found(HERE);
        let search = filter.to_search();
        assert_eq!(search.sort_by.as_deref(), Some("distance"));
        assert_eq!(search.lat, Some(37.5));
        assert_eq!(search.radius, None);
    }

    #[test]
    fn radius_is_ignored_without_position() {
        let mut filter = SearchFilter::default();
        filter.toggle_radius(1_000);
        assert_eq!(filter.radius, Some(1_000));
        assert!(filter.needs_location());
        assert_eq!(filter.to_search().radius, None);

        filter.location_failed(GeolocationError::Timeout);
        assert_eq!(filter.radius, None);
        filter.toggle_radius(1_000);
        assert_eq!(filter.radius, None);
    }

    #[test]
    fn blank_text_is_omitted() {
        let filter = SearchFilter {
            keyword: "  ".into(),
            sport: "헬스".into(),
            ..Default::default()
        };
        let search = filter.to_search();
        assert_eq!(search.keyword, None);
        assert_eq!(search.main_sport.as_deref(), Some("헬스"));
    }

    #[test]
    fn reset_clears_everything() {
        let mut filter = located();
        filter.keyword = "짐".into();
        filter.select_province("서울특별시");
        filter.apply_cities::<String>("서울특별시", Ok(vec!["강남구".into()]));
        filter.toggle_radius(1_000);
        filter.reset();
        assert_eq!(filter, SearchFilter::default());
        assert_eq!(filter.to_search(), FacilitySearch::default());
    }

    #[test]
    fn url_round_trip() {
        let params: HashMap<&str, &str> = [
            ("keyword", "짐"),
            ("ctNm", "서울특별시"),
            ("mainSport", "헬스"),
            ("minRating", "4"),
            ("sortBy", "rating"),
            ("page", "3"),
            ("radius", "abc"),
        ]
        .into();
        let query = SearchQuery::from_url_params(|k| params.get(k).map(ToString::to_string));
        assert_eq!(query.keyword.as_deref(), Some("짐"));
        assert_eq!(query.min_rating, Some(4.0));
        assert_eq!(query.radius, None);
        assert_eq!(query.sort_by, Some(SortKey::Rating));
        assert_eq!(query.page(), 3);

        let filter = SearchFilter::from_query(&query);
        assert_eq!(filter.province, "서울특별시");
        assert_eq!(filter.to_query(3), query);
        assert_eq!(
            query.to_url_params().to_query_string(),
            "?keyword=%EC%A7%90&ctNm=%EC%84%9C%EC%9A%B8%ED%8A%B9%EB%B3%84%EC%8B%9C\
             &mainSport=%ED%97%AC%EC%8A%A4&minRating=4&sortBy=rating&page=3"
        );
    }
}
