use leptos::*;

use sf_boundary::{Facility, Review};
use sf_core::{format, usecases};

use crate::{components::*, local_offset, use_app, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Reviews,
    Favorites,
}

#[component]
pub fn MyPage() -> impl IntoView {
    let app = use_app();

    view! {
      <div class="bg-[#F5F7FA] min-h-screen">
        <div class="max-w-[1440px] mx-auto px-4 md:px-8 py-6 md:py-12">
          <Show
            when = move || app.logged_in()
            fallback = || view! {
              <div class="bg-white rounded-3xl shadow-sm p-8 text-center">
                <h2 class="text-xl font-bold mb-3">"로그인이 필요합니다"</h2>
                <p class="text-[#8B9DA9] mb-6">"찜한 시설과 작성한 리뷰는 로그인 후 확인할 수 있습니다."</p>
                <a
                  href=Page::Login.path()
                  class="inline-block px-6 py-3 bg-[#0D1B2A] text-white rounded-xl hover:bg-[#1a2f42] transition-colors"
                >
                  "로그인하러 가기"
                </a>
              </div>
            }
          >
            <Profile />
          </Show>
        </div>
      </div>
    }
}

#[component]
fn Profile() -> impl IntoView {
    let app = use_app();
    let tab = RwSignal::new(Tab::Reviews);

    // -- actions -- //

    let fetch_reviews = Action::new(move |()| async move {
        let session = app.session.get_untracked();
        usecases::my_reviews(&app.api(), &session).await.map_err(|err| {
            log::error!("Unable to fetch my reviews: {err}");
            "리뷰를 불러올 수 없습니다.".to_owned()
        })
    });

    let fetch_favorites = Action::new(move |()| async move {
        let session = app.session.get_untracked();
        usecases::my_favorite_facilities(&app.api(), &session)
            .await
            .map_err(|err| {
                log::error!("Unable to fetch my favorites: {err}");
                "찜한 시설을 불러올 수 없습니다.".to_owned()
            })
    });

    fetch_reviews.dispatch(());
    fetch_favorites.dispatch(());

    let review_count = move || match fetch_reviews.value().get() {
        Some(Ok(reviews)) => format!("{}개", reviews.len()),
        _ => "-".to_owned(),
    };
    let favorite_count = move || match fetch_favorites.value().get() {
        Some(Ok(facilities)) => format!("{}개", facilities.len()),
        _ => "-".to_owned(),
    };
    let nickname = move || {
        app.session
            .with(|s| s.nickname.clone())
            .map_or_else(|| "회원님".to_owned(), |n| format!("{n}님"))
    };

    let tab_class = move |t: Tab| {
        if tab.get() == t {
            "flex-1 py-4 px-6 font-semibold text-[#16E0B4] border-b-2 border-[#16E0B4]"
        } else {
            "flex-1 py-4 px-6 font-semibold text-[#8B9DA9] hover:text-[#0D1B2A]"
        }
    };

    view! {
      <div class="bg-white rounded-3xl shadow-sm p-4 md:p-8 mb-6 md:mb-8">
        <h2 class="text-2xl font-bold mb-6">{ nickname }</h2>
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4 md:gap-6">
          <div class="p-4 bg-[#F5F7FA] rounded-2xl">
            <span class="text-[#8B9DA9]">"작성한 리뷰"</span>
            <p class="font-bold">{ review_count }</p>
          </div>
          <div class="p-4 bg-[#F5F7FA] rounded-2xl">
            <span class="text-[#8B9DA9]">"찜한 시설"</span>
            <p class="font-bold">{ favorite_count }</p>
          </div>
        </div>
      </div>

      <div class="bg-white rounded-3xl shadow-sm overflow-hidden">
        <div class="flex border-b-2 border-[#E1E8ED]">
          <button class=move || tab_class(Tab::Reviews) on:click = move |_| tab.set(Tab::Reviews)>
            "내가 작성한 리뷰"
          </button>
          <button class=move || tab_class(Tab::Favorites) on:click = move |_| tab.set(Tab::Favorites)>
            "찜한 시설"
          </button>
        </div>
        <div class="p-8">
          { move || match tab.get() {
              Tab::Reviews => match fetch_reviews.value().get() {
                  None => view! { <p class="text-[#8B9DA9]">"리뷰를 불러오는 중..."</p> }.into_view(),
                  Some(Err(msg)) => view! { <p class="text-[#FF6B6B]">{ msg }</p> }.into_view(),
                  Some(Ok(reviews)) if reviews.is_empty() => view! {
                    <p class="text-center text-[#8B9DA9]">"작성한 리뷰가 없습니다."</p>
                  }.into_view(),
                  Some(Ok(reviews)) => view! { <MyReviews reviews /> }.into_view(),
              },
              Tab::Favorites => match fetch_favorites.value().get() {
                  None => view! { <p class="text-[#8B9DA9]">"찜한 시설을 불러오는 중..."</p> }.into_view(),
                  Some(Err(msg)) => view! { <p class="text-[#FF6B6B]">{ msg }</p> }.into_view(),
                  Some(Ok(facilities)) if facilities.is_empty() => view! {
                    <p class="text-center text-[#8B9DA9]">"찜한 시설이 없습니다."</p>
                  }.into_view(),
                  Some(Ok(facilities)) => view! { <Favorites facilities /> }.into_view(),
              },
          }}
        </div>
      </div>
    }
}

#[component]
fn MyReviews(reviews: Vec<Review>) -> impl IntoView {
    let offset = local_offset();
    view! {
      <ul class="space-y-6">
        { reviews.into_iter().map(|review| view! {
          <li class="p-6 bg-[#F5F7FA] rounded-2xl border-2 border-transparent hover:border-[#16E0B4] transition-colors">
            <div class="flex items-center justify-between mb-2">
              <a href=Page::Facility.item(review.facility_id) class="font-semibold hover:text-[#16E0B4]">
                "시설 보기 →"
              </a>
              <span class="text-sm text-[#8B9DA9]">{ format::long_date(&review.created_at, offset) }</span>
            </div>
            <p class="text-[#FFA726] mb-2">{ "★".repeat(usize::from(review.rating)) }</p>
            <p class="text-[#0D1B2A] whitespace-pre-wrap">{ review.content }</p>
          </li>
        }).collect_view() }
      </ul>
    }
}

#[component]
fn Favorites(facilities: Vec<Facility>) -> impl IntoView {
    view! {
      <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 md:gap-6">
        { facilities.into_iter().map(|facility| view! { <FacilityCard facility /> }).collect_view() }
      </div>
    }
}
