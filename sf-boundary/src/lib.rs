//! # sf-boundary
//!
//! Serializable, anemic data structures of the SportFinder REST API.
//!
//! Field names follow the backend's camelCase JSON. Timestamps are kept as the
//! strings the backend sends; interpreting them is up to the client.

use serde::{Deserialize, Serialize};

mod community;
mod directions;

pub use self::{community::*, directions::*};

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub facility_id  : i64,
    pub name         : String,
    #[serde(default)]
    pub address      : String,
    #[serde(default)]
    pub phone_number : Option<String>,
    #[serde(default)]
    pub main_sport   : String,
    #[serde(default)]
    pub aver_rating  : f64,
    #[serde(default)]
    pub review_count : u64,
    #[serde(default)]
    pub is_favorite  : bool,
    #[serde(default)]
    pub latitude     : f64,
    #[serde(default)]
    pub longitude    : f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct FacilityList {
    pub facility_list: Vec<Facility>,
    pub pagination: Pagination,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub course_id           : i64,
    pub facility_id         : i64,
    #[serde(default)]
    pub course_no           : String,
    pub course_name         : String,
    #[serde(default)]
    pub sport_cd            : String,
    #[serde(default)]
    pub sport_name          : String,
    #[serde(default)]
    pub start_date          : Option<String>,
    #[serde(default)]
    pub end_date            : Option<String>,
    #[serde(default)]
    pub establishment_year  : Option<String>,
    #[serde(default)]
    pub establishment_month : Option<String>,
    #[serde(default)]
    pub request_count       : u64,
    #[serde(default)]
    pub price               : u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct CourseList {
    pub courses: Vec<Course>,
    pub pagination: Pagination,
}

/// The envelope accompanying every paginated list.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub page               : u32,
    pub limit              : u32,
    pub total_count        : u64,
    pub total_pages        : u32,
    pub offset             : u64,
    pub display_page_count : u32,
    pub start_page         : u32,
    pub end_page           : u32,
    pub has_previous       : bool,
    pub has_next           : bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub province: String,
    #[serde(default)]
    pub cities: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct FilterMetadata {
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(default)]
    pub sports: Vec<String>,
    #[serde(default)]
    pub min_rating: f64,
    #[serde(default)]
    pub max_rating: f64,
}

/// Search criteria of the facility list.
///
/// The API expects these as top-level query parameters
/// next to `page` and `limit`.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct FacilitySearch {
    pub keyword      : Option<String>,
    pub ct_nm        : Option<String>,
    pub ct_detail_nm : Option<String>,
    pub main_sport   : Option<String>,
    pub min_rating   : Option<f64>,
    pub max_rating   : Option<f64>,
    pub sort_by      : Option<String>,
    pub lat          : Option<f64>,
    pub lng          : Option<f64>,
    pub radius       : Option<u32>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub review_id   : i64,
    pub user_id     : i64,
    pub facility_id : i64,
    pub content     : String,
    pub rating      : u8,
    #[serde(default)]
    pub created_at  : String,
    #[serde(default)]
    pub updated_at  : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub facility_id: i64,
    pub content: String,
    pub rating: u8,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct UpdateReview {
    pub content: String,
    pub rating: u8,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct FacilityRating {
    pub facility_id: i64,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub review_count: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct FavoriteFacility {
    pub favorite_id: i64,
    pub user_id: i64,
    pub facility_id: i64,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStatus {
    pub is_favorite: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct FavoriteCount {
    pub facility_id: i64,
    pub favorite_count: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Message {
    pub message: String,
}

/// Token issued by the OAuth provider in exchange for an authorization code.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ProviderToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// The shapes of error bodies the backend is known to send.
///
/// Only one of the message fields is usually set.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(default)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
    pub msg: Option<String>,
    pub code: Option<String>,
}

impl ErrorBody {
    /// The first non-empty human readable message.
    ///
    /// A message consisting of whitespace only still counts as given.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        [&self.message, &self.error, &self.msg]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_facility_list() {
        let json = r#"{
          "facilityList": [{
            "facilityId": 7,
            "name": "강남 스포츠센터",
            "address": "서울특별시 강남구",
            "phoneNumber": "02-123-4567",
            "mainSport": "헬스",
            "averRating": 4.5,
            "reviewCount": 12,
            "isFavorite": true,
            "latitude": 127.02,
            "longitude": 37.49
          }],
          "pagination": { "page": 1, "limit": 10, "totalCount": 31, "totalPages": 4 }
        }"#;
        let list: FacilityList = serde_json::from_str(json).unwrap();
        assert_eq!(list.facility_list.len(), 1);
        assert_eq!(list.facility_list[0].main_sport, "헬스");
        assert!(list.facility_list[0].is_favorite);
        assert_eq!(list.pagination.total_count, 31);
        assert_eq!(list.pagination.total_pages, 4);
        assert!(!list.pagination.has_next);
    }

    #[test]
    fn serialize_search_with_camel_case_keys() {
        let search = FacilitySearch {
            ct_nm: Some("서울특별시".into()),
            min_rating: Some(4.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&search).unwrap();
        assert_eq!(json["ctNm"], "서울특별시");
        assert_eq!(json["minRating"], 4.0);
    }

    #[test]
    fn error_body_message_precedence() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"bad","msg":"worse"}"#).unwrap();
        assert_eq!(body.message(), Some("bad"));
        let body: ErrorBody = serde_json::from_str(r#"{"message":"","msg":"worse"}"#).unwrap();
        assert_eq!(body.message(), Some("worse"));
        let body: ErrorBody = serde_json::from_str(r#"{"message":" ","msg":"worse"}"#).unwrap();
        assert_eq!(body.message(), Some(" "));
        assert_eq!(ErrorBody::default().message(), None);
    }
}
