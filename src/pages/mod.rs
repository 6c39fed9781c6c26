mod community;
mod facility;
mod home;
mod login;
mod mypage;
mod post;
mod post_write;
mod search;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Search,
    Facility,
    Login,
    MyPage,
    Community,
    PostWrite,
    PostEdit,
}

impl Page {
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Search => "/search",
            Self::Facility => "/facility",
            Self::Login => "/login",
            Self::MyPage => "/mypage",
            Self::Community => "/community",
            Self::PostWrite => "/community/write",
            Self::PostEdit => "/community/edit",
        }
    }

    /// The path of a single item below this page.
    pub fn item(&self, id: i64) -> String {
        format!("{}/{id}", self.path())
    }
}

pub use self::{
    community::*, facility::*, home::*, login::*, mypage::*, post::*, post_write::*, search::*,
};
