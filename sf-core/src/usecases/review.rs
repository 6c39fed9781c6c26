use super::prelude::*;

/// Reviews are fetched in one chunk.
pub const REVIEW_PAGE_SIZE: u32 = 50;
pub const DEFAULT_RATING: u8 = 5;
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("로그인이 필요합니다.")]
    LoginRequired,
    #[error("{0}")]
    Invalid(&'static str),
    #[error("이미 작성한 리뷰가 있습니다.")]
    Duplicate,
    #[error(transparent)]
    Api(api::Error),
}

impl From<api::Error> for ReviewError {
    fn from(err: api::Error) -> Self {
        match err.kind() {
            api::ErrorKind::Conflict => Self::Duplicate,
            _ => Self::Api(err),
        }
    }
}

/// The review form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    /// The review that is being edited, if any.
    pub editing: Option<i64>,
    pub content: String,
    pub rating: u8,
}

impl Default for ReviewDraft {
    fn default() -> Self {
        Self {
            editing: None,
            content: String::new(),
            rating: DEFAULT_RATING,
        }
    }
}

impl ReviewDraft {
    #[must_use]
    pub fn edit(review: &Review) -> Self {
        Self {
            editing: Some(review.review_id),
            content: review.content.clone(),
            rating: review.rating,
        }
    }

    pub fn validate(&self) -> Result<(), ReviewError> {
        if self.content.trim().is_empty() {
            return Err(ReviewError::Invalid("리뷰 내용을 입력해주세요."));
        }
        if !RATING_RANGE.contains(&self.rating) {
            return Err(ReviewError::Invalid("평점은 1점에서 5점 사이여야 합니다."));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewSubmitted {
    Created(Review),
    Updated(i64),
}

impl ReviewSubmitted {
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Created(_) => "리뷰가 작성되었습니다.",
            Self::Updated(_) => "리뷰가 수정되었습니다.",
        }
    }
}

pub async fn submit_review<A>(
    api: &A,
    session: &Session,
    facility_id: i64,
    draft: &ReviewDraft,
) -> Result<ReviewSubmitted, ReviewError>
where
    A: ReviewApi,
{
    draft.validate()?;
    if !session.is_logged_in() {
        return Err(ReviewError::LoginRequired);
    }
    let content = draft.content.trim().to_owned();
    if let Some(id) = draft.editing {
        let update = UpdateReview {
            content,
            rating: draft.rating,
        };
        api.update_review(id, &update).await?;
        log::info!("Updated review {id}");
        Ok(ReviewSubmitted::Updated(id))
    } else {
        let new = NewReview {
            facility_id,
            content,
            rating: draft.rating,
        };
        let review = api.create_review(&new).await?;
        log::info!(
            "Created review {} for facility {facility_id}",
            review.review_id
        );
        Ok(ReviewSubmitted::Created(review))
    }
}

pub async fn delete_review<A>(api: &A, session: &Session, id: i64) -> Result<(), ReviewError>
where
    A: ReviewApi,
{
    if !session.is_logged_in() {
        return Err(ReviewError::LoginRequired);
    }
    api.delete_review(id).await.map_err(ReviewError::Api)?;
    log::info!("Deleted review {id}");
    Ok(())
}

pub async fn facility_reviews<A>(api: &A, facility_id: i64) -> api::Result<Vec<Review>>
where
    A: ReviewApi,
{
    api.reviews_by_facility(facility_id, Some(1), Some(REVIEW_PAGE_SIZE))
        .await
}

pub async fn my_reviews<A>(api: &A, session: &Session) -> Result<Vec<Review>, ReviewError>
where
    A: ReviewApi,
{
    let user_id = session.user_id().ok_or(ReviewError::LoginRequired)?;
    api.reviews_by_user(user_id, Some(1), Some(REVIEW_PAGE_SIZE))
        .await
        .map_err(ReviewError::Api)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[tokio::test]
    async fn reject_blank_content_before_any_call() {
        let api = MockApi::default();
        let draft = ReviewDraft {
            content: "  \n ".into(),
            ..Default::default()
        };
        let err = submit_review(&api, &logged_in(), 1, &draft)
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewError::Invalid(_)));
        assert_eq!(err.to_string(), "리뷰 내용을 입력해주세요.");
        assert!(api.calls().is_empty());
    }

    #[test]
    fn rating_must_be_in_range() {
        let mut draft = ReviewDraft {
            content: "좋아요".into(),
            ..Default::default()
        };
        assert_eq!(draft.rating, 5);
        assert!(draft.validate().is_ok());
        draft.rating = 0;
        assert!(draft.validate().is_err());
        draft.rating = 6;
        assert!(draft.validate().is_err());
    }

    #[tokio::test]
    async fn create_a_review() {
        let api = MockApi::default();
        let draft = ReviewDraft {
            content: " 깨끗해요 ".into(),
            rating: 4,
            ..Default::default()
        };
        let submitted = submit_review(&api, &logged_in(), 3, &draft).await.unwrap();
        let ReviewSubmitted::Created(review) = &submitted else {
            panic!("unexpected result: {submitted:?}");
        };
        assert_eq!(review.facility_id, 3);
        assert_eq!(review.content, "깨끗해요");
        assert_eq!(review.rating, 4);
        assert_eq!(submitted.message(), "리뷰가 작성되었습니다.");
        assert_eq!(api.calls(), vec!["POST /api/reviews"]);
    }

    #[tokio::test]
    async fn update_an_existing_review() {
        let api = MockApi::default();
        api.reviews.borrow_mut().push(review(9, 7, 3));
        let mut draft = ReviewDraft::edit(&review(9, 7, 3));
        draft.content = "수정".into();
        let submitted = submit_review(&api, &logged_in(), 3, &draft).await.unwrap();
        assert_eq!(submitted, ReviewSubmitted::Updated(9));
        assert_eq!(api.reviews.borrow()[0].content, "수정");
        assert_eq!(api.calls(), vec!["PUT /api/reviews/9"]);
    }

    #[tokio::test]
    async fn conflicts_are_duplicates() {
        let api = MockApi::default();
        let draft = ReviewDraft {
            content: "또 작성".into(),
            ..Default::default()
        };
        api.fail_with(409, None);
        let err = submit_review(&api, &logged_in(), 3, &draft)
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewError::Duplicate));

        api.fail_with(400, Some("DUPLICATE_REVIEW"));
        let err = submit_review(&api, &logged_in(), 3, &draft)
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewError::Duplicate));

        api.fail_with(400, Some("INVALID_RATING"));
        let err = submit_review(&api, &logged_in(), 3, &draft)
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewError::Api(_)));
    }

    #[tokio::test]
    async fn anonymous_users_cannot_submit() {
        let api = MockApi::default();
        let draft = ReviewDraft {
            content: "좋아요".into(),
            ..Default::default()
        };
        let err = submit_review(&api, &Session::default(), 3, &draft)
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewError::LoginRequired));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn load_reviews_in_one_chunk() {
        let api = MockApi::default();
        api.reviews
            .borrow_mut()
            .extend([review(1, 7, 3), review(2, 8, 3), review(3, 7, 4)]);
        let reviews = facility_reviews(&api, 3).await.unwrap();
        assert_eq!(reviews.len(), 2);
        let mine = my_reviews(&api, &logged_in()).await.unwrap();
        assert_eq!(mine.len(), 2);
        assert_eq!(
            api.calls(),
            vec![
                "GET /api/reviews/facility/3?page=1&limit=50",
                "GET /api/reviews/user/7?page=1&limit=50",
            ]
        );
    }

    #[tokio::test]
    async fn delete_a_review() {
        let api = MockApi::default();
        api.reviews.borrow_mut().push(review(1, 7, 3));
        delete_review(&api, &logged_in(), 1).await.unwrap();
        assert!(api.reviews.borrow().is_empty());
    }
}
