use leptos::*;
use leptos_router::*;

use sf_boundary::Facility;
use sf_core::{
    format,
    geo::facility_position,
    usecases::{self, FavoriteError},
};
use sf_frontend_api::FacilityApi;

use crate::{components::*, use_app, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Info,
    Courses,
    Reviews,
    Map,
}

impl Tab {
    const ALL: [Self; 4] = [Self::Info, Self::Courses, Self::Reviews, Self::Map];

    const fn label(self) -> &'static str {
        match self {
            Self::Info => "시설 정보",
            Self::Courses => "강좌 안내",
            Self::Reviews => "리뷰",
            Self::Map => "위치",
        }
    }
}

#[component]
pub fn FacilityDetail() -> impl IntoView {
    let app = use_app();
    let params = use_params_map();

    let facility = RwSignal::new(None::<Result<Facility, String>>);

    let fetch_facility = create_action(move |id: &i64| {
        let id = *id;
        async move {
            let api = app.api();
            match api.facility(id).await {
                Ok(mut f) => {
                    let session = app.session.get_untracked();
                    f.is_favorite = usecases::favorite_status(&api, &session, id).await;
                    facility.set(Some(Ok(f)));
                }
                Err(err) => {
                    log::warn!("Unable to fetch facility {id}: {err}");
                    facility.set(Some(Err("시설 정보를 불러올 수 없습니다.".to_owned())));
                }
            }
        }
    });

    create_effect(move |_| {
        let id = params.with(|p| p.get("id").and_then(|id| id.parse::<i64>().ok()));
        match id {
            Some(id) => {
                facility.set(None);
                fetch_facility.dispatch(id);
            }
            None => facility.set(Some(Err("잘못된 시설 주소입니다.".to_owned()))),
        }
    });

    move || match facility.get() {
        None => view! {
          <p class="text-center text-[#8B9DA9] py-16">"시설 정보를 불러오는 중..."</p>
        }.into_view(),
        Some(Err(msg)) => view! {
          <div class="mx-auto text-center max-w-7xl px-4 mt-12 pb-16">
            <h2 class="text-2xl font-bold text-[#0D1B2A] mb-4">{ msg }</h2>
            <a href=Page::Search.path() class="text-[#16E0B4]">"시설 검색으로 돌아가기"</a>
          </div>
        }.into_view(),
        Some(Ok(f)) => view! { <FacilityProfile facility = f /> }.into_view(),
    }
}

#[allow(clippy::too_many_lines)]
#[component]
fn FacilityProfile(facility: Facility) -> impl IntoView {
    let app = use_app();
    let tab = RwSignal::new(Tab::Info);
    let is_favorite = RwSignal::new(facility.is_favorite);
    let position = facility_position(&facility, app.cfg.swap_facility_coordinates);

    let Facility {
        facility_id,
        name,
        address,
        phone_number,
        main_sport,
        aver_rating,
        review_count,
        ..
    } = facility;

    let toggle_favorite = Action::new(move |()| async move {
        let before = is_favorite.get_untracked();
        // Shown right away, reverted if the request fails.
        is_favorite.set(!before);
        let session = app.session.get_untracked();
        match usecases::toggle_favorite(&app.api(), &session, facility_id, before).await {
            Ok(now) => {
                is_favorite.set(now);
                app.success(if now { "찜 목록에 추가되었습니다." } else { "찜 목록에서 삭제되었습니다." });
            }
            Err(FavoriteError::LoginRequired) => {
                is_favorite.set(before);
                app.error("로그인이 필요합니다.");
            }
            Err(err) => {
                log::error!("Unable to toggle favorite of facility {facility_id}: {err}");
                is_favorite.set(before);
                app.error("찜하기에 실패했습니다.");
            }
        }
    });

    let tab_class = move |t: Tab| {
        if tab.get() == t {
            "pb-4 px-2 font-semibold text-[#16E0B4] border-b-2 border-[#16E0B4]"
        } else {
            "pb-4 px-2 font-semibold text-[#8B9DA9] hover:text-[#0D1B2A]"
        }
    };

    let info = {
        let address = address.clone();
        let phone_number = phone_number.clone();
        let main_sport = main_sport.clone();
        move || view! {
          <dl class="grid grid-cols-1 md:grid-cols-2 gap-4">
            <div class="p-4 bg-[#F5F7FA] rounded-xl">
              <dt class="text-sm text-[#8B9DA9]">"주소"</dt>
              <dd class="font-semibold">{ address.clone() }</dd>
            </div>
            <div class="p-4 bg-[#F5F7FA] rounded-xl">
              <dt class="text-sm text-[#8B9DA9]">"전화번호"</dt>
              <dd class="font-semibold">{ phone_number.clone().unwrap_or_else(|| "-".to_owned()) }</dd>
            </div>
            <div class="p-4 bg-[#F5F7FA] rounded-xl">
              <dt class="text-sm text-[#8B9DA9]">"주요 종목"</dt>
              <dd class="font-semibold">{ main_sport.clone() }</dd>
            </div>
            <div class="p-4 bg-[#F5F7FA] rounded-xl">
              <dt class="text-sm text-[#8B9DA9]">"평점"</dt>
              <dd class="font-semibold">{ format!("{} ({}개 리뷰)", format::rating(aver_rating), review_count) }</dd>
            </div>
          </dl>
        }
    };
    let map_title = name.clone();
    let map_address = address.clone();

    view! {
      <div class="bg-white">
        <div class="max-w-[1440px] mx-auto px-4 md:px-8 py-6 md:py-12">
          <div class="bg-white rounded-2xl md:rounded-3xl border-2 border-[#E1E8ED] p-4 md:p-8 mb-6 md:mb-8">
            <div class="flex flex-col md:flex-row items-start justify-between gap-4">
              <div>
                <div class="inline-block px-4 py-2 bg-[#16E0B4]/10 text-[#16E0B4] rounded-full mb-3">{ main_sport.clone() }</div>
                <h2 class="text-2xl font-bold mb-3">{ name }</h2>
                <p class="text-[#8B9DA9] mb-4">{ address.clone() }</p>
                <div class="flex items-center gap-4">
                  <span class="text-[#FFA726] text-xl">"★"</span>
                  <span class="text-xl font-bold">{ format::rating(aver_rating) }</span>
                  <span class="text-[#8B9DA9]">{ format!("리뷰 {review_count}개") }</span>
                </div>
              </div>
              <div class="flex flex-col gap-3 w-full md:w-auto">
                { phone_number.clone().map(|phone| view! {
                  <a href=format!("tel:{phone}") class="px-6 py-3 bg-[#16E0B4] text-[#0D1B2A] rounded-xl font-bold text-center">
                    "전화 문의하기"
                  </a>
                })}
                <button
                  class=move || if is_favorite.get() {
                    "px-6 py-3 bg-[#FF6B6B] text-white rounded-xl font-bold"
                  } else {
                    "px-6 py-3 bg-white border-2 border-[#E1E8ED] rounded-xl hover:border-[#16E0B4] font-bold"
                  }
                  disabled = move || toggle_favorite.pending().get()
                  on:click = move |_| toggle_favorite.dispatch(())
                >
                  { move || if is_favorite.get() { "♥ 찜 해제" } else { "♡ 찜하기" } }
                </button>
              </div>
            </div>
          </div>

          <div class="border-b-2 border-[#E1E8ED] mb-6 md:mb-8 overflow-x-auto">
            <div class="flex gap-4 md:gap-8">
              { Tab::ALL.into_iter().map(|t| view! {
                <button class=move || tab_class(t) on:click = move |_| tab.set(t)>{ t.label() }</button>
              }).collect_view() }
            </div>
          </div>

          { move || match tab.get() {
              Tab::Info => info().into_view(),
              Tab::Courses => view! { <CourseTable facility_id /> }.into_view(),
              Tab::Reviews => if app.cfg.reviews_enabled {
                  view! { <ReviewSection facility_id /> }.into_view()
              } else {
                  view! {
                    <div class="p-12 bg-[#F5F7FA] rounded-2xl text-center">
                      <h3 class="font-bold mb-2">"리뷰 기능 준비 중"</h3>
                      <p class="text-[#8B9DA9]">"곧 만나보실 수 있습니다."</p>
                    </div>
                  }.into_view()
              },
              Tab::Map => view! {
                <FacilityMapView position title = map_title.clone() address = map_address.clone() />
              }.into_view(),
          }}
        </div>
      </div>
    }
}
