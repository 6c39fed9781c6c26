use async_trait::async_trait;

use crate::{Api, Auth, Query, Result};
use sf_boundary::{FacilityRating, NewReview, Review, UpdateReview};

#[async_trait(?Send)]
pub trait ReviewApi {
    async fn create_review(&self, review: &NewReview) -> Result<Review>;
    async fn review(&self, id: i64) -> Result<Review>;
    async fn update_review(&self, id: i64, review: &UpdateReview) -> Result<()>;
    async fn delete_review(&self, id: i64) -> Result<()>;
    async fn reviews_by_facility(
        &self,
        facility_id: i64,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Vec<Review>>;
    async fn facility_rating(&self, facility_id: i64) -> Result<FacilityRating>;
    async fn reviews_by_user(
        &self,
        user_id: i64,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Vec<Review>>;
}

#[async_trait(?Send)]
impl ReviewApi for Api {
    async fn create_review(&self, review: &NewReview) -> Result<Review> {
        self.post("/api/reviews", review, Auth::Bearer).await
    }
    async fn review(&self, id: i64) -> Result<Review> {
        self.get(&format!("/api/reviews/{id}"), &Query::new(), Auth::Public)
            .await
    }
    async fn update_review(&self, id: i64, review: &UpdateReview) -> Result<()> {
        self.put(&format!("/api/reviews/{id}"), review, Auth::Bearer)
            .await
    }
    async fn delete_review(&self, id: i64) -> Result<()> {
        self.delete(&format!("/api/reviews/{id}"), Auth::Bearer)
            .await
    }
    async fn reviews_by_facility(
        &self,
        facility_id: i64,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Vec<Review>> {
        let query = Query::new().opt("page", page).opt("limit", limit);
        self.get(
            &format!("/api/reviews/facility/{facility_id}"),
            &query,
            Auth::Public,
        )
        .await
    }
    async fn facility_rating(&self, facility_id: i64) -> Result<FacilityRating> {
        self.get(
            &format!("/api/reviews/facility/{facility_id}/rating"),
            &Query::new(),
            Auth::Public,
        )
        .await
    }
    async fn reviews_by_user(
        &self,
        user_id: i64,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Vec<Review>> {
        let query = Query::new().opt("page", page).opt("limit", limit);
        self.get(
            &format!("/api/reviews/user/{user_id}"),
            &query,
            Auth::Bearer,
        )
        .await
    }
}
