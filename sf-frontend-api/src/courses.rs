use async_trait::async_trait;

use crate::{Api, Auth, Query, Result};
use sf_boundary::{Course, CourseList};

#[async_trait(?Send)]
pub trait CourseApi {
    async fn courses(&self, page: Option<u32>, limit: Option<u32>) -> Result<CourseList>;
    async fn course(&self, id: i64) -> Result<Course>;
}

#[async_trait(?Send)]
impl CourseApi for Api {
    async fn courses(&self, page: Option<u32>, limit: Option<u32>) -> Result<CourseList> {
        let query = Query::new().opt("page", page).opt("limit", limit);
        self.get("/api/courses", &query, Auth::Public).await
    }
    async fn course(&self, id: i64) -> Result<Course> {
        self.get(&format!("/api/courses/{id}"), &Query::new(), Auth::Public)
            .await
    }
}
