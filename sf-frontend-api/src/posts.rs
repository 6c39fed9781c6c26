use async_trait::async_trait;

use crate::{Api, Auth, Query, Result};
use sf_boundary::{Message, NewPost, Post, PostCategory, PostList, UpdatePost, Vote, VoteType};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PostSort {
    #[default]
    Latest,
    Upvote,
}

impl PostSort {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Upvote => "upvote",
        }
    }

    #[must_use]
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "latest" => Some(Self::Latest),
            "upvote" => Some(Self::Upvote),
            _ => None,
        }
    }
}

/// Parameters of the post list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub category: Option<PostCategory>,
    pub keyword: Option<String>,
    pub sort_by: Option<PostSort>,
}

impl PostQuery {
    #[must_use]
    pub fn to_query(&self) -> Query {
        Query::new()
            .opt("page", self.page)
            .opt("limit", self.limit)
            .opt("category", self.category.as_ref().map(PostCategory::as_str))
            .opt("keyword", self.keyword.as_ref())
            .opt("sortBy", self.sort_by.map(PostSort::as_str))
    }
}

#[async_trait(?Send)]
pub trait PostApi {
    async fn create_post(&self, post: &NewPost) -> Result<Post>;
    async fn posts(&self, query: &PostQuery) -> Result<PostList>;
    async fn post_by_id(&self, id: i64) -> Result<Post>;
    async fn update_post(&self, id: i64, post: &UpdatePost) -> Result<()>;
    async fn delete_post(&self, id: i64) -> Result<()>;
    async fn vote(&self, id: i64, vote_type: VoteType) -> Result<()>;
    async fn unvote(&self, id: i64) -> Result<()>;
}

#[async_trait(?Send)]
impl PostApi for Api {
    async fn create_post(&self, post: &NewPost) -> Result<Post> {
        self.post("/api/posts", post, Auth::Bearer).await
    }
    async fn posts(&self, query: &PostQuery) -> Result<PostList> {
        self.get("/api/posts", &query.to_query(), Auth::Public)
            .await
    }
    async fn post_by_id(&self, id: i64) -> Result<Post> {
        self.get(&format!("/api/posts/{id}"), &Query::new(), Auth::Public)
            .await
    }
    async fn update_post(&self, id: i64, post: &UpdatePost) -> Result<()> {
        self.put(&format!("/api/posts/{id}"), post, Auth::Bearer)
            .await
    }
    async fn delete_post(&self, id: i64) -> Result<()> {
        self.delete(&format!("/api/posts/{id}"), Auth::Bearer).await
    }
    async fn vote(&self, id: i64, vote_type: VoteType) -> Result<()> {
        let msg: Option<Message> =
            self.post(&format!("/api/posts/{id}/vote"), &Vote { vote_type }, Auth::Bearer)
                .await?;
        if let Some(Message { message }) = msg {
            log::debug!("Voted on post {id}: {message}");
        }
        Ok(())
    }
    async fn unvote(&self, id: i64) -> Result<()> {
        self.delete(&format!("/api/posts/{id}/vote"), Auth::Bearer)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_list_query() {
        let query = PostQuery {
            page: Some(2),
            limit: Some(20),
            category: Some(PostCategory::Qna),
            keyword: Some("배드민턴 모임".into()),
            sort_by: Some(PostSort::Upvote),
        };
        assert_eq!(
            query.to_query().to_query_string(),
            "?page=2&limit=20&category=QNA\
             &keyword=%EB%B0%B0%EB%93%9C%EB%AF%BC%ED%84%B4%20%EB%AA%A8%EC%9E%84\
             &sortBy=upvote"
        );
    }

    #[test]
    fn sort_keys() {
        assert_eq!(PostSort::from_str_opt("upvote"), Some(PostSort::Upvote));
        assert_eq!(PostSort::from_str_opt("oldest"), None);
        assert_eq!(PostSort::default().as_str(), "latest");
    }
}
