use async_trait::async_trait;

use crate::{Api, Auth, Query, Result};
use sf_boundary::{CourseList, Facility, FacilityList, FacilitySearch};

/// Parameters of the facility list endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacilityQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: FacilitySearch,
}

impl FacilityQuery {
    #[must_use]
    pub fn to_query(&self) -> Query {
        let FacilitySearch {
            keyword,
            ct_nm,
            ct_detail_nm,
            main_sport,
            min_rating,
            max_rating,
            sort_by,
            lat,
            lng,
            radius,
        } = &self.search;
        Query::new()
            .opt("page", self.page)
            .opt("limit", self.limit)
            .opt("keyword", keyword.as_ref())
            .opt("ctNm", ct_nm.as_ref())
            .opt("ctDetailNm", ct_detail_nm.as_ref())
            .opt("mainSport", main_sport.as_ref())
            .opt("minRating", *min_rating)
            .opt("maxRating", *max_rating)
            .opt("sortBy", sort_by.as_ref())
            .opt("lat", *lat)
            .opt("lng", *lng)
            .opt("radius", *radius)
    }
}

#[async_trait(?Send)]
pub trait FacilityApi {
    async fn facilities(&self, query: &FacilityQuery) -> Result<FacilityList>;
    /// The three facilities favored by most users.
    async fn favorite_facilities(&self) -> Result<FacilityList>;
    async fn facility(&self, id: i64) -> Result<Facility>;
    async fn facility_courses(
        &self,
        id: i64,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<CourseList>;
}

#[async_trait(?Send)]
impl FacilityApi for Api {
    async fn facilities(&self, query: &FacilityQuery) -> Result<FacilityList> {
        self.get("/api/facilities", &query.to_query(), self.optional_auth())
            .await
    }
    async fn favorite_facilities(&self) -> Result<FacilityList> {
        self.get("/api/facilities/favorite", &Query::new(), Auth::Public)
            .await
    }
    async fn facility(&self, id: i64) -> Result<Facility> {
        self.get(
            &format!("/api/facilities/{id}"),
            &Query::new(),
            self.optional_auth(),
        )
        .await
    }
    async fn facility_courses(
        &self,
        id: i64,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<CourseList> {
        let query = Query::new().opt("page", page).opt("limit", limit);
        self.get(
            &format!("/api/facilities/{id}/courses"),
            &query,
            Auth::Public,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_query_string() {
        let query = FacilityQuery {
            page: Some(1),
            limit: Some(10),
            search: FacilitySearch {
                keyword: Some("짐".into()),
                min_rating: Some(4.0),
                ..Default::default()
            },
        };
        assert_eq!(
            query.to_query().to_query_string(),
            "?page=1&limit=10&keyword=%EC%A7%90&minRating=4"
        );
    }

    #[test]
    fn region_and_location_params() {
        let query = FacilityQuery {
            search: FacilitySearch {
                ct_nm: Some("서울특별시".into()),
                ct_detail_nm: Some("강남구".into()),
                sort_by: Some("distance".into()),
                lat: Some(37.5),
                lng: Some(127.03),
                radius: Some(5),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            query.to_query().to_form_string(),
            "ctNm=%EC%84%9C%EC%9A%B8%ED%8A%B9%EB%B3%84%EC%8B%9C\
             &ctDetailNm=%EA%B0%95%EB%82%A8%EA%B5%AC\
             &sortBy=distance&lat=37.5&lng=127.03&radius=5"
        );
    }
}
