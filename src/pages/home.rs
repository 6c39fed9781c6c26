use leptos::*;
use leptos_router::*;

use sf_core::usecases;
use sf_frontend_api::Query;

use crate::{components::*, use_app, Page};

const SPORTS: [(&str, &str); 8] = [
    ("축구", "#16E0B4"),
    ("헬스/피트니스", "#FF6B9D"),
    ("배구", "#FFA726"),
    ("수영", "#42A5F5"),
    ("농구", "#AB47BC"),
    ("사이클", "#26C6DA"),
    ("테니스", "#66BB6A"),
    ("기타", "#8B9DA9"),
];

fn search_path(key: &'static str, value: &str) -> String {
    let query = Query::new().param(key, value);
    format!("{}{}", Page::Search.path(), query.to_query_string())
}

#[component]
pub fn Home() -> impl IntoView {
    let app = use_app();
    let navigate = use_navigate();

    let keyword = RwSignal::new(String::new());

    let fetch_top_rated = Action::new(move |()| async move {
        usecases::top_rated_facilities(&app.api()).await.map_err(|err| {
            log::error!("Unable to fetch top rated facilities: {err}");
        })
    });
    fetch_top_rated.dispatch(());

    let fetch_popular = Action::new(move |()| async move {
        usecases::popular_facilities(&app.api()).await.map_err(|_| ())
    });
    fetch_popular.dispatch(());

    let search = store_value(move || {
        let keyword = keyword.get_untracked();
        let keyword = keyword.trim();
        let path = if keyword.is_empty() {
            Page::Search.path().to_owned()
        } else {
            search_path("keyword", keyword)
        };
        navigate(&path, NavigateOptions::default());
    });
    let search = move || search.with_value(|search| search());

    view! {
      <div class="bg-white">
        <section class="relative overflow-hidden bg-[#0D1B2A] text-white">
          <div class="max-w-[1440px] mx-auto px-4 md:px-8 py-12 md:py-24">
            <div class="inline-block px-3 md:px-4 py-2 bg-[#16E0B4]/20 border border-[#16E0B4] rounded-full mb-4 md:mb-6">
              <span class="text-[#16E0B4] text-sm md:text-base">"50,000개 이상의 운동 시설 데이터"</span>
            </div>
            <h1 class="text-3xl md:text-5xl font-bold mb-4 md:mb-6">"우리 아이를 위한" <br /> "최적의 운동 시설 찾기"</h1>
            <p class="text-lg md:text-xl text-gray-300 mb-6 md:mb-8">"지역과 종목으로 원하는 시설을 빠르게 검색하세요"</p>
            <div class="flex flex-col md:flex-row gap-3 max-w-2xl">
              <input
                type="search"
                class="flex-1 px-4 py-3 md:py-4 rounded-xl text-[#0D1B2A] outline-none"
                placeholder="시설명, 지역, 종목으로 검색..."
                prop:value = move || keyword.get()
                on:input = move |ev| keyword.set(event_target_value(&ev))
                on:keyup = move |ev| {
                  if ev.key() == "Enter" {
                    search();
                  }
                }
              />
              <button
                class="px-6 md:px-8 py-3 md:py-4 bg-[#16E0B4] text-[#0D1B2A] rounded-xl hover:bg-[#14c9a0] transition-all font-bold"
                on:click = move |_| search()
              >
                "운동 시설 검색하기"
              </button>
            </div>
          </div>
        </section>

        <section class="py-8 md:py-16 bg-white">
          <div class="max-w-[1440px] mx-auto px-4 md:px-8">
            <div class="text-center mb-8 md:mb-12">
              <h2 class="text-2xl font-bold mb-2 md:mb-4">"운동 종목별로 찾아보기"</h2>
              <p class="text-[#8B9DA9] text-sm md:text-base">"아이가 관심있는 운동 종목을 선택해보세요"</p>
            </div>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-3 md:gap-6">
              { SPORTS.into_iter().map(|(name, color)| view! {
                <a
                  href=search_path("mainSport", name)
                  class="group p-4 md:p-8 bg-[#F5F7FA] rounded-2xl hover:shadow-xl transition-all hover:-translate-y-1 text-center"
                >
                  <div
                    class="w-12 h-12 md:w-20 md:h-20 rounded-2xl mx-auto mb-2 md:mb-4"
                    style=format!("background-color: {color}33")
                  ></div>
                  <h4 class="text-sm md:text-base">{ name }</h4>
                </a>
              }).collect_view() }
            </div>
          </div>
        </section>

        <section class="py-8 md:py-16 bg-[#F5F7FA]">
          <div class="max-w-[1440px] mx-auto px-4 md:px-8">
            <div class="flex flex-col md:flex-row items-start md:items-center justify-between mb-6 md:mb-12 gap-4">
              <div>
                <h2 class="text-2xl font-bold mb-1 md:mb-2">"인기 시설"</h2>
                <p class="text-[#8B9DA9] text-sm md:text-base">"많은 학부모님들이 선택한 시설입니다"</p>
              </div>
              <a
                href=search_path("sortBy", "rating")
                class="px-4 md:px-6 py-2 md:py-3 border-2 border-[#0D1B2A] text-[#0D1B2A] rounded-lg hover:bg-[#0D1B2A] hover:text-white transition-colors"
              >
                "전체 보기"
              </a>
            </div>
            { move || match fetch_top_rated.value().get() {
                None => view! { <p class="text-center text-[#8B9DA9]">"인기 시설을 불러오는 중..."</p> }.into_view(),
                Some(Err(())) => view! { <p class="text-center text-[#8B9DA9]">"인기 시설을 불러올 수 없습니다."</p> }.into_view(),
                Some(Ok(facilities)) if facilities.is_empty() => view! {
                  <p class="text-center text-[#8B9DA9]">"등록된 시설이 없습니다."</p>
                }.into_view(),
                Some(Ok(facilities)) => view! {
                  <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 md:gap-6">
                    { facilities.into_iter().map(|facility| view! { <FacilityCard facility /> }).collect_view() }
                  </div>
                }.into_view(),
            }}
          </div>
        </section>

        <section class="py-8 md:py-16 bg-white">
          <div class="max-w-[1440px] mx-auto px-4 md:px-8">
            <div class="mb-6 md:mb-12">
              <h2 class="text-2xl font-bold mb-1 md:mb-2">"찜이 많은 시설"</h2>
              <p class="text-[#8B9DA9] text-sm md:text-base">"가장 많이 찜한 시설 Top 3"</p>
            </div>
            { move || match fetch_popular.value().get() {
                None => view! { <p class="text-center text-[#8B9DA9]">"시설을 불러오는 중..."</p> }.into_view(),
                Some(Err(())) => view! { <p class="text-center text-[#8B9DA9]">"시설을 불러올 수 없습니다."</p> }.into_view(),
                Some(Ok(facilities)) if facilities.is_empty() => view! {
                  <p class="text-center text-[#8B9DA9]">"아직 찜한 시설이 없습니다."</p>
                }.into_view(),
                Some(Ok(facilities)) => view! {
                  <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 md:gap-6">
                    { facilities.into_iter().map(|facility| view! { <FacilityCard facility /> }).collect_view() }
                  </div>
                }.into_view(),
            }}
          </div>
        </section>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_frontend_api::encode_component;

    #[test]
    fn sport_shortcuts_link_to_the_search() {
        assert_eq!(
            search_path("mainSport", "헬스/피트니스"),
            "/search?mainSport=%ED%97%AC%EC%8A%A4%2F%ED%94%BC%ED%8A%B8%EB%8B%88%EC%8A%A4"
        );
        assert_eq!(search_path("keyword", "수영"), format!("/search?keyword={}", encode_component("수영")));
    }
}
