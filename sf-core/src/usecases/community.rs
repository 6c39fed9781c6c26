use super::prelude::*;
use crate::{dialog::ConfirmDialog, filter::non_blank};

pub const POST_PAGE_SIZE: u32 = 20;

#[must_use]
pub const fn category_label(category: PostCategory) -> &'static str {
    match category {
        PostCategory::Notice => "공지사항",
        PostCategory::Qna => "질의응답",
        PostCategory::Tip => "정보",
        PostCategory::Meetup => "모임",
        PostCategory::Free => "자유",
    }
}

/// State of the community list as kept in the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityQuery {
    pub page: u32,
    pub category: Option<PostCategory>,
    pub keyword: String,
    pub sort: PostSort,
}

impl Default for CommunityQuery {
    fn default() -> Self {
        Self {
            page: 1,
            category: None,
            keyword: String::new(),
            sort: PostSort::default(),
        }
    }
}

impl CommunityQuery {
    pub fn from_url_params<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str| get(key).as_deref().and_then(non_blank);
        Self {
            page: text("page")
                .and_then(|p| p.parse().ok())
                .filter(|p| *p > 0)
                .unwrap_or(1),
            category: text("category").and_then(|c| PostCategory::from_str_opt(&c)),
            keyword: text("keyword").unwrap_or_default(),
            sort: text("sortBy")
                .and_then(|s| PostSort::from_str_opt(&s))
                .unwrap_or_default(),
        }
    }

    /// Only non-default values end up in the URL.
    #[must_use]
    pub fn to_url_params(&self) -> Query {
        Query::new()
            .opt("category", self.category.as_ref().map(PostCategory::as_str))
            .opt("keyword", non_blank(self.keyword.trim()))
            .opt(
                "sortBy",
                (self.sort != PostSort::Latest).then_some(self.sort.as_str()),
            )
            .opt("page", (self.page > 1).then_some(self.page))
    }

    #[must_use]
    pub fn to_post_query(&self) -> PostQuery {
        PostQuery {
            page: Some(self.page.max(1)),
            limit: Some(POST_PAGE_SIZE),
            category: self.category,
            keyword: non_blank(self.keyword.trim()),
            sort_by: Some(self.sort),
        }
    }

    pub fn select_category(&mut self, category: Option<PostCategory>) {
        self.category = category;
        self.page = 1;
    }

    pub fn select_sort(&mut self, sort: PostSort) {
        self.sort = sort;
        self.page = 1;
    }
}

pub async fn load_posts<A>(api: &A, query: &CommunityQuery) -> api::Result<PostList>
where
    A: PostApi,
{
    api.posts(&query.to_post_query()).await.inspect_err(|err| {
        log::warn!("Unable to load posts: {err}");
    })
}

#[derive(Debug, Error)]
pub enum PostError {
    #[error("로그인이 필요합니다.")]
    LoginRequired,
    #[error("{0}")]
    Invalid(&'static str),
    #[error("수정 권한이 없습니다.")]
    NotOwner,
    #[error(transparent)]
    Api(#[from] api::Error),
}

/// The post form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub category: PostCategory,
    pub title: String,
    pub content: String,
}

impl PostDraft {
    #[must_use]
    pub fn edit(post: &Post) -> Self {
        Self {
            category: post.category,
            title: post.title.clone(),
            content: post.content.clone(),
        }
    }

    /// Returns the trimmed title and content.
    pub fn validate(&self) -> Result<(String, String), PostError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(PostError::Invalid("제목을 입력해주세요."));
        }
        let content = self.content.trim();
        if content.is_empty() {
            return Err(PostError::Invalid("내용을 입력해주세요."));
        }
        Ok((title.to_owned(), content.to_owned()))
    }
}

/// Creates a new post or updates `editing` and returns the ID of the saved post.
pub async fn save_post<A>(
    api: &A,
    session: &Session,
    editing: Option<i64>,
    draft: &PostDraft,
) -> Result<i64, PostError>
where
    A: PostApi,
{
    if !session.is_logged_in() {
        return Err(PostError::LoginRequired);
    }
    let (title, content) = draft.validate()?;
    let category = draft.category;
    match editing {
        Some(id) => {
            let update = UpdatePost {
                category,
                title,
                content,
            };
            api.update_post(id, &update).await?;
            log::info!("Updated post {id}");
            Ok(id)
        }
        None => {
            let new = NewPost {
                category,
                title,
                content,
            };
            let post = api.create_post(&new).await?;
            log::info!("Created post {}", post.post_id);
            Ok(post.post_id)
        }
    }
}

/// Loads a post into the form, but only for its author.
pub async fn load_post_for_edit<A>(
    api: &A,
    session: &Session,
    id: i64,
) -> Result<PostDraft, PostError>
where
    A: PostApi,
{
    if !session.is_logged_in() {
        return Err(PostError::LoginRequired);
    }
    let post = api.post_by_id(id).await?;
    if !session.owns(post.user_id) {
        log::warn!("Refusing to edit post {id} of user {}", post.user_id);
        return Err(PostError::NotOwner);
    }
    Ok(PostDraft::edit(&post))
}

pub async fn delete_post<A>(api: &A, session: &Session, id: i64) -> Result<(), PostError>
where
    A: PostApi,
{
    if !session.is_logged_in() {
        return Err(PostError::LoginRequired);
    }
    api.delete_post(id).await?;
    log::info!("Deleted post {id}");
    Ok(())
}

#[derive(Debug, Error)]
pub enum VoteError {
    #[error("로그인이 필요합니다.")]
    LoginRequired,
    #[error(transparent)]
    Api(#[from] api::Error),
}

/// Votes for a post and returns the post with the updated counters.
///
/// A rejected vote is only logged; the post is re-fetched in any case.
pub async fn vote_post<A>(
    api: &A,
    session: &Session,
    id: i64,
    vote_type: VoteType,
) -> Result<Post, VoteError>
where
    A: PostApi,
{
    if !session.is_logged_in() {
        return Err(VoteError::LoginRequired);
    }
    if let Err(err) = api.vote(id, vote_type).await {
        log::warn!("Unable to vote for post {id}: {err}");
    }
    Ok(api.post_by_id(id).await?)
}

#[derive(Debug, Error)]
pub enum CommentError {
    #[error("로그인이 필요합니다.")]
    LoginRequired,
    #[error("댓글 내용을 입력해주세요.")]
    Empty,
    #[error(transparent)]
    Api(#[from] api::Error),
}

fn comment_content(session: &Session, content: &str) -> Result<String, CommentError> {
    if !session.is_logged_in() {
        return Err(CommentError::LoginRequired);
    }
    non_blank(content.trim()).ok_or(CommentError::Empty)
}

pub async fn create_comment<A>(
    api: &A,
    session: &Session,
    post_id: i64,
    content: &str,
) -> Result<Comment, CommentError>
where
    A: CommentApi,
{
    let content = comment_content(session, content)?;
    let comment = api.create_comment(post_id, &NewComment { content }).await?;
    log::debug!("Created comment {} on post {post_id}", comment.comment_id);
    Ok(comment)
}

pub async fn update_comment<A>(
    api: &A,
    session: &Session,
    comment_id: i64,
    content: &str,
) -> Result<(), CommentError>
where
    A: CommentApi,
{
    let content = comment_content(session, content)?;
    api.update_comment(comment_id, &UpdateComment { content })
        .await?;
    Ok(())
}

pub async fn delete_comment<A>(
    api: &A,
    session: &Session,
    comment_id: i64,
) -> Result<(), CommentError>
where
    A: CommentApi,
{
    if !session.is_logged_in() {
        return Err(CommentError::LoginRequired);
    }
    api.delete_comment(comment_id).await?;
    log::info!("Deleted comment {comment_id}");
    Ok(())
}

/// Drops a deleted comment from the displayed list.
pub fn remove_comment(comments: &mut Vec<Comment>, comment_id: i64) -> bool {
    let len = comments.len();
    comments.retain(|c| c.comment_id != comment_id);
    comments.len() != len
}

#[must_use]
pub fn delete_post_dialog() -> ConfirmDialog {
    ConfirmDialog::danger("게시물 삭제", "정말 이 게시물을 삭제하시겠습니까?")
}

#[must_use]
pub fn delete_comment_dialog() -> ConfirmDialog {
    ConfirmDialog::danger("댓글 삭제", "정말 이 댓글을 삭제하시겠습니까?")
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};
    use crate::dialog::DialogState;
    use std::collections::HashMap;

    #[derive(Debug, PartialEq)]
    enum Pending {
        DeleteComment(i64),
    }

    #[test]
    fn community_query_from_url() {
        let params: HashMap<&str, &str> = [
            ("category", "QNA"),
            ("keyword", "풋살"),
            ("sortBy", "upvote"),
            ("page", "3"),
        ]
        .into();
        let query = CommunityQuery::from_url_params(|k| params.get(k).map(|v| (*v).to_owned()));
        assert_eq!(
            query,
            CommunityQuery {
                page: 3,
                category: Some(PostCategory::Qna),
                keyword: "풋살".into(),
                sort: PostSort::Upvote,
            }
        );
        assert_eq!(
            query.to_url_params().to_form_string(),
            "category=QNA&keyword=%ED%92%8B%EC%82%B4&sortBy=upvote&page=3"
        );
    }

    #[test]
    fn invalid_url_params_fall_back_to_defaults() {
        let query = CommunityQuery::from_url_params(|k| match k {
            "category" => Some("SPAM".into()),
            "page" => Some("0".into()),
            "sortBy" => Some("oldest".into()),
            _ => None,
        });
        assert_eq!(query, CommunityQuery::default());
        assert!(query.to_url_params().is_empty());
    }

    #[test]
    fn changing_the_category_resets_the_page() {
        let mut query = CommunityQuery {
            page: 4,
            ..Default::default()
        };
        query.select_category(Some(PostCategory::Tip));
        assert_eq!(query.page, 1);
        assert_eq!(
            query.to_post_query().to_query().to_form_string(),
            "page=1&limit=20&category=TIP&sortBy=latest"
        );
    }

    #[test]
    fn category_labels() {
        let labels: Vec<_> = PostCategory::ALL.into_iter().map(category_label).collect();
        assert_eq!(labels, ["공지사항", "질의응답", "정보", "모임", "자유"]);
    }

    #[test]
    fn post_draft_requires_title_and_content() {
        let mut draft = PostDraft {
            title: "  ".into(),
            content: "본문".into(),
            ..Default::default()
        };
        assert_eq!(draft.validate().unwrap_err().to_string(), "제목을 입력해주세요.");
        draft.title = " 제목 ".into();
        draft.content = "\n".into();
        assert_eq!(draft.validate().unwrap_err().to_string(), "내용을 입력해주세요.");
        draft.content = " 본문 ".into();
        assert_eq!(
            draft.validate().unwrap(),
            ("제목".to_owned(), "본문".to_owned())
        );
    }

    #[tokio::test]
    async fn save_new_and_existing_posts() {
        let api = MockApi::default();
        let session = logged_in();
        let draft = PostDraft {
            category: PostCategory::Meetup,
            title: "같이 뛰어요".into(),
            content: "토요일 아침".into(),
        };
        let id = save_post(&api, &session, None, &draft).await.unwrap();
        assert_eq!(api.posts.borrow()[0].category, PostCategory::Meetup);

        let mut draft = load_post_for_edit(&api, &session, id).await.unwrap();
        draft.title = "일요일로 변경".into();
        assert_eq!(save_post(&api, &session, Some(id), &draft).await.unwrap(), id);
        assert_eq!(api.posts.borrow()[0].title, "일요일로 변경");
        assert_eq!(
            api.calls(),
            vec!["POST /api/posts", "GET /api/posts/1", "PUT /api/posts/1"]
        );
    }

    #[tokio::test]
    async fn only_authors_may_edit() {
        let api = MockApi::default();
        api.posts.borrow_mut().push(post(5, 8));
        let err = load_post_for_edit(&api, &logged_in(), 5)
            .await
            .unwrap_err();
        assert!(matches!(err, PostError::NotOwner));
        assert_eq!(err.to_string(), "수정 권한이 없습니다.");
    }

    #[tokio::test]
    async fn writing_requires_login() {
        let api = MockApi::default();
        let draft = PostDraft {
            title: "제목".into(),
            content: "본문".into(),
            ..Default::default()
        };
        let err = save_post(&api, &Session::default(), None, &draft)
            .await
            .unwrap_err();
        assert!(matches!(err, PostError::LoginRequired));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn vote_and_refetch() {
        let api = MockApi::default();
        api.posts.borrow_mut().push(post(5, 8));
        let post = vote_post(&api, &logged_in(), 5, VoteType::Upvote)
            .await
            .unwrap();
        assert_eq!(post.upvote_count, 1);
        assert_eq!(api.calls(), vec!["POST /api/posts/5/vote", "GET /api/posts/5"]);

        let err = vote_post(&api, &Session::default(), 5, VoteType::Downvote)
            .await
            .unwrap_err();
        assert!(matches!(err, VoteError::LoginRequired));
        assert_eq!(api.calls().len(), 2);
    }

    #[tokio::test]
    async fn blank_comments_are_rejected() {
        let api = MockApi::default();
        let err = create_comment(&api, &logged_in(), 1, "   ")
            .await
            .unwrap_err();
        assert!(matches!(err, CommentError::Empty));
        let err = update_comment(&api, &logged_in(), 1, "")
            .await
            .unwrap_err();
        assert!(matches!(err, CommentError::Empty));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn create_and_update_comments() {
        let api = MockApi::default();
        let session = logged_in();
        let comment = create_comment(&api, &session, 1, " 좋은 글 ").await.unwrap();
        assert_eq!(comment.content, "좋은 글");
        update_comment(&api, &session, comment.comment_id, "수정된 댓글")
            .await
            .unwrap();
        assert_eq!(api.comments.borrow()[0].content, "수정된 댓글");
    }

    #[tokio::test]
    async fn delete_comment_after_confirmation() {
        let api = MockApi::default();
        let session = logged_in();
        api.comments
            .borrow_mut()
            .extend([comment(2, 1, 7), comment(3, 1, 7)]);
        let mut comments = api.comments.borrow().clone();
        let mut dialog = DialogState::default();

        dialog.open(delete_comment_dialog(), Pending::DeleteComment(3));
        dialog.cancel();
        assert_eq!(dialog.confirm(), None);
        assert!(api.calls().is_empty());

        dialog.open(delete_comment_dialog(), Pending::DeleteComment(3));
        let Some(Pending::DeleteComment(id)) = dialog.confirm() else {
            panic!("no pending action");
        };
        delete_comment(&api, &session, id).await.unwrap();
        assert!(remove_comment(&mut comments, id));
        assert_eq!(api.calls(), vec!["DELETE /api/comments/3"]);
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].comment_id, 2);
    }

    #[tokio::test]
    async fn failed_deletion_keeps_the_comment() {
        let api = MockApi::default();
        api.fail_with(403, None);
        let err = delete_comment(&api, &logged_in(), 3).await.unwrap_err();
        assert!(matches!(err, CommentError::Api(_)));
    }
}
