use std::time::Duration;

use leptos::*;
use leptos_router::*;
use time::{OffsetDateTime, UtcOffset};

use sf_core::{
    notification::{Toasts, TOAST_DURATION_MS},
    session::Session,
};
use sf_frontend_api::Api;

pub mod cfg;
mod geolocation;
mod map;
mod storage;

mod pages;
use pages::*;

mod components;
use components::*;

use self::{cfg::Cfg, storage::BrowserStore};

/// State shared by all pages.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub cfg: Cfg,
    pub session: RwSignal<Session>,
    pub toasts: RwSignal<Toasts>,
}

impl AppContext {
    /// A client that authorizes with the token of the current session.
    #[must_use]
    pub fn api(&self) -> Api {
        let token = self.session.with_untracked(|s| s.token.clone());
        Api::new(self.cfg.api_url).with_token(token)
    }

    pub fn logged_in(&self) -> bool {
        self.session.with(Session::is_logged_in)
    }

    pub fn login(&self, session: Session) {
        log::info!("Successfully logged in");
        self.session.set(session);
    }

    pub fn logout(&self) {
        log::info!("Logging out");
        self.session.set(Session::logout(&BrowserStore));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(|toasts| toasts.success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(|toasts| toasts.error(message));
    }

    fn notify(&self, show: impl FnOnce(&mut Toasts) -> u64) {
        let toasts = self.toasts;
        let mut id = 0;
        toasts.update(|t| id = show(t));
        set_timeout(
            move || {
                toasts.update(|t| {
                    t.dismiss(id);
                });
            },
            Duration::from_millis(TOAST_DURATION_MS.into()),
        );
    }
}

#[must_use]
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

pub(crate) fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

pub(crate) fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc().to_offset(local_offset())
}

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    let cfg = Cfg::from_env_or_default();
    let session = RwSignal::new(Session::load(&BrowserStore));
    let toasts = RwSignal::new(Toasts::default());
    let app = AppContext {
        cfg,
        session,
        toasts,
    };
    provide_context(app);

    log::debug!("User is logged in: {}", session.with_untracked(Session::is_logged_in));

    let on_logout = move || {
        app.logout();
        app.success("로그아웃되었습니다.");
    };

    view! {
      <Router>
        <NavBar session = session.into() on_logout />
        <main class="min-h-screen bg-white">
          <Routes>
            <Route
              path=Page::Home.path()
              view=move || view! { <Home /> }
            />
            <Route
              path=Page::Search.path()
              view=move || view! { <SearchResults /> }
            />
            <Route
              path=format!("{}/:id", Page::Facility.path())
              view=move || view! { <FacilityDetail /> }
            />
            <Route
              path=Page::Login.path()
              view=move || view! { <Login /> }
            />
            <Route
              path=Page::MyPage.path()
              view=move || view! { <MyPage /> }
            />
            <Route
              path=Page::Community.path()
              view=move || view! { <Community /> }
            />
            <Route
              path=Page::PostWrite.path()
              view=move || view! { <PostWrite /> }
            />
            <Route
              path=format!("{}/:postId", Page::PostEdit.path())
              view=move || view! { <PostWrite /> }
            />
            <Route
              path=format!("{}/:postId", Page::Community.path())
              view=move || view! { <PostDetail /> }
            />
          </Routes>
        </main>
        <footer class="bg-[#0D1B2A] text-white py-8">
          <div class="max-w-[1440px] mx-auto px-4 md:px-8 text-center text-sm text-gray-400">
            "© 2024 스포츠시설 검색. All rights reserved."
          </div>
        </footer>
        <ToastView toasts />
      </Router>
    }
}
