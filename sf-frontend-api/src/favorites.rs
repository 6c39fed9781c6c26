use async_trait::async_trait;

use crate::{Api, Auth, Query, Result};
use sf_boundary::{FavoriteCount, FavoriteFacility, FavoriteStatus};

#[async_trait(?Send)]
pub trait FavoriteApi {
    async fn add_favorite(&self, facility_id: i64) -> Result<()>;
    async fn remove_favorite(&self, facility_id: i64) -> Result<()>;
    async fn favorite_status(&self, facility_id: i64) -> Result<FavoriteStatus>;
    async fn my_favorites(&self) -> Result<Vec<FavoriteFacility>>;
    async fn favorite_count(&self, facility_id: i64) -> Result<FavoriteCount>;
}

#[async_trait(?Send)]
impl FavoriteApi for Api {
    async fn add_favorite(&self, facility_id: i64) -> Result<()> {
        self.post_empty(&format!("/api/favorites/{facility_id}"), Auth::Bearer)
            .await
    }
    async fn remove_favorite(&self, facility_id: i64) -> Result<()> {
        self.delete(&format!("/api/favorites/{facility_id}"), Auth::Bearer)
            .await
    }
    async fn favorite_status(&self, facility_id: i64) -> Result<FavoriteStatus> {
        self.get(
            &format!("/api/favorites/{facility_id}/status"),
            &Query::new(),
            Auth::Bearer,
        )
        .await
    }
    async fn my_favorites(&self) -> Result<Vec<FavoriteFacility>> {
        self.get("/api/favorites", &Query::new(), Auth::Bearer)
            .await
    }
    async fn favorite_count(&self, facility_id: i64) -> Result<FavoriteCount> {
        self.get(
            &format!("/api/favorites/facility/{facility_id}/count"),
            &Query::new(),
            Auth::Public,
        )
        .await
    }
}
