use async_trait::async_trait;

use crate::{Api, Auth, Query, Result};
use sf_boundary::{Comment, NewComment, UpdateComment};

#[async_trait(?Send)]
pub trait CommentApi {
    async fn comments(&self, post_id: i64) -> Result<Vec<Comment>>;
    async fn create_comment(&self, post_id: i64, comment: &NewComment) -> Result<Comment>;
    async fn update_comment(&self, comment_id: i64, comment: &UpdateComment) -> Result<()>;
    async fn delete_comment(&self, comment_id: i64) -> Result<()>;
}

#[async_trait(?Send)]
impl CommentApi for Api {
    async fn comments(&self, post_id: i64) -> Result<Vec<Comment>> {
        self.get(
            &format!("/api/posts/{post_id}/comments"),
            &Query::new(),
            Auth::Public,
        )
        .await
    }
    async fn create_comment(&self, post_id: i64, comment: &NewComment) -> Result<Comment> {
        self.post(
            &format!("/api/posts/{post_id}/comments"),
            comment,
            Auth::Bearer,
        )
        .await
    }
    async fn update_comment(&self, comment_id: i64, comment: &UpdateComment) -> Result<()> {
        self.put(&format!("/api/comments/{comment_id}"), comment, Auth::Bearer)
            .await
    }
    async fn delete_comment(&self, comment_id: i64) -> Result<()> {
        self.delete(&format!("/api/comments/{comment_id}"), Auth::Bearer)
            .await
    }
}
