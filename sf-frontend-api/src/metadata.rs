use async_trait::async_trait;

use crate::{encode_component, Api, Auth, Query, Result};
use sf_boundary::{FilterMetadata, Region};

#[async_trait(?Send)]
pub trait MetadataApi {
    async fn filter_metadata(&self) -> Result<FilterMetadata>;
    async fn sports(&self) -> Result<Vec<String>>;
    async fn regions(&self) -> Result<Vec<Region>>;
    async fn cities(&self, province: &str) -> Result<Vec<String>>;
}

#[async_trait(?Send)]
impl MetadataApi for Api {
    async fn filter_metadata(&self) -> Result<FilterMetadata> {
        self.get("/api/metadata/filters", &Query::new(), Auth::Public)
            .await
    }
    async fn sports(&self) -> Result<Vec<String>> {
        self.get("/api/metadata/sports", &Query::new(), Auth::Public)
            .await
    }
    async fn regions(&self) -> Result<Vec<Region>> {
        self.get("/api/metadata/regions", &Query::new(), Auth::Public)
            .await
    }
    async fn cities(&self, province: &str) -> Result<Vec<String>> {
        self.get(&cities_endpoint(province), &Query::new(), Auth::Public)
            .await
    }
}

fn cities_endpoint(province: &str) -> String {
    format!("/api/metadata/regions/{}/cities", encode_component(province))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_province_in_path() {
        assert_eq!(
            cities_endpoint("서울특별시"),
            "/api/metadata/regions/%EC%84%9C%EC%9A%B8%ED%8A%B9%EB%B3%84%EC%8B%9C/cities"
        );
    }
}
