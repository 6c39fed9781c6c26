use leptos::*;
use leptos_router::*;

use sf_core::usecases::{self, LoginState};

use crate::{storage::BrowserStore, use_app, Page};

#[component]
pub fn Login() -> impl IntoView {
    let app = use_app();
    let query = use_query_map();
    let navigate = use_navigate();

    let state = RwSignal::new(LoginState::default());

    // -- actions -- //

    let redirect = Action::new(move |()| async move {
        state.set(LoginState::Redirecting);
        match usecases::login_redirect_url(&app.api()).await {
            Ok(url) => {
                if let Err(err) = window().location().set_href(&url) {
                    log::error!("Unable to redirect to the login page: {err:?}");
                    state.set(LoginState::Failed("로그인 페이지로 이동할 수 없습니다.".to_owned()));
                }
            }
            Err(err) => {
                log::error!("Unable to start login: {err}");
                state.set(LoginState::Failed(err.to_string()));
            }
        }
    });

    let exchange = create_action(move |code: &String| {
        let code = code.to_owned();
        let navigate = navigate.clone();
        async move {
            let result =
                usecases::complete_login(&app.api(), &BrowserStore, &code, |s| state.set(s)).await;
            match result {
                Ok(session) => {
                    app.login(session);
                    app.success("로그인되었습니다.");
                    navigate(
                        Page::Home.path(),
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(err) => {
                    _ = window().alert_with_message(&format!("로그인에 실패했습니다.\n{err}"));
                }
            }
        }
    });

    // -- init -- //

    if let Some(code) = query.with_untracked(|q| q.get("code").cloned()) {
        exchange.dispatch(code);
    }

    let status = move || match state.get() {
        LoginState::Unauthenticated | LoginState::Authenticated => None,
        LoginState::Redirecting => Some("카카오 로그인 페이지로 이동 중...".to_owned()),
        LoginState::ExchangingCode => Some("카카오 인증 정보를 확인하는 중...".to_owned()),
        LoginState::ExchangingToken => Some("로그인 처리 중...".to_owned()),
        LoginState::Failed(msg) => Some(msg),
    };

    view! {
      <div class="min-h-screen bg-[#F5F7FA] flex items-center justify-center py-8 md:py-16">
        <div class="max-w-md w-full mx-4 md:mx-0">
          <div class="text-center mb-8">
            <h2 class="text-2xl font-bold mb-3">"로그인"</h2>
            <p class="text-[#8B9DA9]">"리뷰·별점·댓글 작성 시에만" <br /> "로그인이 필요합니다"</p>
          </div>
          <div class="bg-white rounded-3xl shadow-xl p-8 mb-6">
            <button
              class="w-full flex items-center justify-center gap-3 py-4 bg-[#FEE500] text-black rounded-xl hover:bg-[#fdd800] transition-colors font-semibold disabled:opacity-50"
              disabled = move || state.with(LoginState::is_busy)
              on:click = move |_| redirect.dispatch(())
            >
              "카카오로 시작하기"
            </button>
            { move || status().map(|msg| view! {
              <p class=move || if matches!(state.get(), LoginState::Failed(_)) { "mt-4 text-center text-[#FF6B6B]" } else { "mt-4 text-center text-[#8B9DA9]" }>
                { msg }
              </p>
            })}
          </div>
          <div class="bg-gradient-to-r from-[#16E0B4]/10 to-[#16E0B4]/5 border-2 border-[#16E0B4] rounded-2xl p-6">
            <h4 class="mb-3 font-semibold">"💡 로그인 없이 이용 가능"</h4>
            <ul class="space-y-2 text-[#8B9DA9]">
              <li>"✓ 시설 검색 및 정보 확인"</li>
              <li>"✓ 리뷰 및 평점 조회"</li>
              <li>"✓ 지역별·종목별 필터링"</li>
            </ul>
          </div>
          <div class="mt-6 p-6 bg-white rounded-2xl border-2 border-[#E1E8ED]">
            <h4 class="mb-3 font-semibold">"🔒 로그인 시 이용 가능"</h4>
            <ul class="space-y-2 text-[#8B9DA9]">
              <li>"별점 및 리뷰 작성"</li>
              <li>"댓글 작성"</li>
              <li>"관심 시설 찜하기"</li>
            </ul>
          </div>
        </div>
      </div>
    }
}
