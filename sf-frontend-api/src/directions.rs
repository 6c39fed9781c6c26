use async_trait::async_trait;

use crate::{Api, Auth, Query, Result};
use sf_boundary::Directions;

pub const DEFAULT_ROUTE_OPTION: &str = "traoptimal";

/// Start and goal are `"lng,lat"` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsQuery {
    pub start: String,
    pub goal: String,
    pub option: Option<String>,
}

impl DirectionsQuery {
    #[must_use]
    pub fn to_query(&self) -> Query {
        Query::new()
            .param("start", &self.start)
            .param("goal", &self.goal)
            .param(
                "option",
                self.option.as_deref().unwrap_or(DEFAULT_ROUTE_OPTION),
            )
    }
}

#[async_trait(?Send)]
pub trait DirectionsApi {
    async fn driving(&self, query: &DirectionsQuery) -> Result<Directions>;
}

#[async_trait(?Send)]
impl DirectionsApi for Api {
    async fn driving(&self, query: &DirectionsQuery) -> Result<Directions> {
        self.get("/api/directions/driving", &query.to_query(), Auth::Public)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_option() {
        let query = DirectionsQuery {
            start: "127.1,37.5".into(),
            goal: "127.2,37.4".into(),
            option: None,
        };
        assert_eq!(
            query.to_query().to_query_string(),
            "?start=127.1%2C37.5&goal=127.2%2C37.4&option=traoptimal"
        );
    }
}
