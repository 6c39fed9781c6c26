use super::prelude::*;
use crate::filter::SortKey;

/// Facilities per result page.
pub const SEARCH_PAGE_SIZE: u32 = 10;

/// Courses per page on the facility detail page.
pub const COURSE_PAGE_SIZE: u32 = 10;

pub const TOP_RATED_COUNT: u32 = 3;

pub async fn search_facilities<A>(
    api: &A,
    search: &FacilitySearch,
    page: u32,
) -> api::Result<FacilityList>
where
    A: FacilityApi,
{
    let query = FacilityQuery {
        page: Some(page.max(1)),
        limit: Some(SEARCH_PAGE_SIZE),
        search: search.clone(),
    };
    let list = api.facilities(&query).await.inspect_err(|err| {
        log::warn!("Unable to search facilities: {err}");
    })?;
    log::debug!(
        "Found {} facilities ({} on page {page})",
        list.pagination.total_count,
        list.facility_list.len()
    );
    Ok(list)
}

/// The best rated facilities shown on the home page.
pub async fn top_rated_facilities<A>(api: &A) -> api::Result<Vec<Facility>>
where
    A: FacilityApi,
{
    let query = FacilityQuery {
        page: Some(1),
        limit: Some(TOP_RATED_COUNT),
        search: FacilitySearch {
            sort_by: Some(SortKey::Rating.as_str().to_owned()),
            ..Default::default()
        },
    };
    let list = api.facilities(&query).await?;
    Ok(list.facility_list)
}

/// The facilities with the most favorites, without the user's favorite flags.
pub async fn popular_facilities<A>(api: &A) -> api::Result<Vec<Facility>>
where
    A: FacilityApi,
{
    let list = api.favorite_facilities().await.inspect_err(|err| {
        log::warn!("Unable to fetch popular facilities: {err}");
    })?;
    Ok(list.facility_list)
}

pub async fn facility_courses_page<A>(api: &A, facility_id: i64, page: u32) -> api::Result<CourseList>
where
    A: FacilityApi,
{
    api.facility_courses(facility_id, Some(page.max(1)), Some(COURSE_PAGE_SIZE))
        .await
}

/// Cities of a province, never blank entries.
pub async fn load_cities<A>(api: &A, province: &str) -> api::Result<Vec<String>>
where
    A: MetadataApi,
{
    let mut cities = api.cities(province).await?;
    cities.retain(|city| !city.trim().is_empty());
    Ok(cities)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};
    use crate::filter::SearchFilter;

    #[tokio::test]
    async fn search_sends_flattened_criteria() {
        let api = MockApi::default();
        api.total_count.set(42);
        api.facilities.borrow_mut().push(facility(1));

        let mut filter = SearchFilter::default();
        filter.keyword = "짐".into();
        filter.province = "서울특별시".into();
        filter.sport = "헬스".into();

        let list = search_facilities(&api, &filter.to_search(), 1).await.unwrap();
        assert_eq!(
            api.calls(),
            vec![
                "GET /api/facilities?page=1&limit=10\
                 &keyword=%EC%A7%90\
                 &ctNm=%EC%84%9C%EC%9A%B8%ED%8A%B9%EB%B3%84%EC%8B%9C\
                 &mainSport=%ED%97%AC%EC%8A%A4"
            ]
        );
        assert_eq!(list.pagination.total_count, 42);
        assert_eq!(list.pagination.total_pages, 5);
    }

    #[tokio::test]
    async fn page_zero_is_treated_as_first_page() {
        let api = MockApi::default();
        search_facilities(&api, &FacilitySearch::default(), 0)
            .await
            .unwrap();
        assert_eq!(api.calls(), vec!["GET /api/facilities?page=1&limit=10"]);
    }

    #[tokio::test]
    async fn top_rated_are_sorted_by_rating() {
        let api = MockApi::default();
        api.facilities.borrow_mut().extend([facility(1), facility(2)]);
        let top = top_rated_facilities(&api).await.unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(
            api.calls(),
            vec!["GET /api/facilities?page=1&limit=3&sortBy=rating"]
        );
    }

    #[tokio::test]
    async fn popular_facilities_are_public() {
        let api = MockApi::default();
        api.facilities.borrow_mut().push(facility(7));
        let popular = popular_facilities(&api).await.unwrap();
        assert_eq!(popular.len(), 1);
        assert_eq!(api.calls(), vec!["GET /api/facilities/favorite"]);
    }

    #[tokio::test]
    async fn course_pages() {
        let api = MockApi::default();
        facility_courses_page(&api, 5, 2).await.unwrap();
        assert_eq!(
            api.calls(),
            vec!["GET /api/facilities/5/courses?page=2&limit=10"]
        );
    }

    #[tokio::test]
    async fn blank_cities_are_dropped() {
        let api = MockApi::default();
        api.cities
            .borrow_mut()
            .extend(["강남구".to_owned(), " ".to_owned(), "서초구".to_owned()]);
        let cities = load_cities(&api, "서울특별시").await.unwrap();
        assert_eq!(cities, vec!["강남구", "서초구"]);
    }

    #[tokio::test]
    async fn failed_search_is_reported() {
        let api = MockApi::default();
        api.fail_with(500, None);
        let err = search_facilities(&api, &FacilitySearch::default(), 1)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), api::ErrorKind::Server);
    }
}
