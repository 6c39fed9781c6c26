use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostCategory {
    Notice,
    Qna,
    Tip,
    Meetup,
    #[default]
    Free,
}

impl PostCategory {
    pub const ALL: [Self; 5] = [Self::Notice, Self::Qna, Self::Tip, Self::Meetup, Self::Free];

    /// The wire representation, also used in URL query strings.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Notice => "NOTICE",
            Self::Qna => "QNA",
            Self::Tip => "TIP",
            Self::Meetup => "MEETUP",
            Self::Free => "FREE",
        }
    }

    #[must_use]
    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoteType {
    Upvote,
    Downvote,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub post_id        : i64,
    pub user_id        : i64,
    #[serde(default)]
    pub nickname       : String,
    pub category       : PostCategory,
    pub title          : String,
    pub content        : String,
    #[serde(default)]
    pub upvote_count   : u64,
    #[serde(default)]
    pub downvote_count : u64,
    #[serde(default)]
    pub comment_count  : u64,
    #[serde(default)]
    pub created_at     : String,
    #[serde(default)]
    pub updated_at     : String,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase", default)]
pub struct PostPagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub items_per_page: u32,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct PostList {
    pub posts: Vec<Post>,
    #[serde(default)]
    pub pagination: PostPagination,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub category: PostCategory,
    pub title: String,
    pub content: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct UpdatePost {
    pub category: PostCategory,
    pub title: String,
    pub content: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub vote_type: VoteType,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub comment_id : i64,
    pub post_id    : i64,
    pub user_id    : i64,
    #[serde(default)]
    pub nickname   : String,
    pub content    : String,
    #[serde(default)]
    pub created_at : String,
    #[serde(default)]
    pub updated_at : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewComment {
    pub content: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct UpdateComment {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_format() {
        assert_eq!(serde_json::to_string(&PostCategory::Qna).unwrap(), "\"QNA\"");
        let c: PostCategory = serde_json::from_str("\"MEETUP\"").unwrap();
        assert_eq!(c, PostCategory::Meetup);
        assert_eq!(PostCategory::from_str_opt("TIP"), Some(PostCategory::Tip));
        assert_eq!(PostCategory::from_str_opt("tip"), None);
    }

    #[test]
    fn vote_wire_format() {
        let vote = Vote {
            vote_type: VoteType::Downvote,
        };
        assert_eq!(
            serde_json::to_string(&vote).unwrap(),
            r#"{"voteType":"DOWNVOTE"}"#
        );
    }
}
