use leptos::*;

use sf_core::{
    filter::{LocationState, SearchFilter, SortKey, SortSelection, MIN_RATING_OPTIONS, RADIUS_OPTIONS},
    format,
    sequence::RequestSequence,
    usecases,
};
use sf_frontend_api::MetadataApi;

use crate::{geolocation::current_position, use_app};

const SELECT: &str = "w-full px-4 py-3 bg-[#F5F7FA] border-2 border-[#E1E8ED] rounded-xl focus:outline-none focus:border-[#16E0B4] disabled:opacity-50";
const CHIP: &str = "px-3 py-2 bg-white border-2 border-[#E1E8ED] rounded-lg hover:border-[#16E0B4] transition-colors text-sm disabled:opacity-40 disabled:cursor-not-allowed";
const ACTIVE_CHIP: &str = "px-3 py-2 border-2 border-[#16E0B4] bg-[#16E0B4]/10 text-[#0D1B2A] rounded-lg text-sm font-semibold";

/// Search criteria of the facility list.
///
/// `on_search` is called whenever the criteria should be applied.
#[allow(clippy::too_many_lines)]
#[component]
pub fn FilterBar<F, R>(
    filter: RwSignal<SearchFilter>,
    result_count: Signal<u64>,
    loading: Signal<bool>,
    on_search: F,
    on_reset: R,
) -> impl IntoView
where
    F: Fn() + 'static + Copy,
    R: Fn() + 'static + Copy,
{
    let app = use_app();

    // -- signals -- //

    let provinces = RwSignal::new(Vec::<String>::new());
    let sports = RwSignal::new(Vec::<String>::new());
    let show_filters = RwSignal::new(true);
    let city_requests = store_value(RequestSequence::new());

    // -- actions -- //

    let load_metadata = Action::new(move |()| async move {
        match app.api().filter_metadata().await {
            Ok(metadata) => {
                provinces.set(metadata.regions.into_iter().map(|r| r.province).collect());
                sports.set(metadata.sports);
            }
            Err(err) => {
                log::error!("Unable to load filter metadata: {err}");
            }
        }
    });

    let load_cities = create_action(move |province: &String| {
        let province = province.to_owned();
        let ticket = city_requests.with_value(RequestSequence::start);
        async move {
            let result = usecases::load_cities(&app.api(), &province).await;
            if city_requests.with_value(|s| s.is_current(ticket)) {
                filter.update(|f| {
                    f.apply_cities(&province, result);
                });
            }
        }
    });

    let locate = Action::new(move |()| async move {
        filter.update(SearchFilter::start_locating);
        match current_position().await {
            Ok(position) => {
                filter.update(|f| f.location_found(position));
                on_search();
            }
            Err(err) => {
                app.error(err.message());
                filter.update(|f| f.location_failed(err));
                on_search();
            }
        }
    });

    // -- init -- //

    load_metadata.dispatch(());
    filter.with_untracked(|f| {
        if !f.province.is_empty() {
            load_cities.dispatch(f.province.clone());
        }
        if f.needs_location() {
            locate.dispatch(());
        }
    });

    // -- callbacks -- //

    let on_province = move |province: String| {
        let mut fetch = false;
        filter.update(|f| fetch = f.select_province(&province));
        // Any pending fetch belongs to the previous province.
        city_requests.with_value(RequestSequence::start);
        if fetch {
            load_cities.dispatch(province);
        }
    };

    let on_sort = move |value: String| {
        let mut selection = SortSelection::Applied;
        filter.update(|f| selection = f.select_sort(SortKey::from_str_opt(&value)));
        match selection {
            SortSelection::Applied => on_search(),
            SortSelection::NeedsLocation => locate.dispatch(()),
            SortSelection::Rejected => app.error("위치 정보를 사용할 수 없어 거리순 정렬을 할 수 없습니다."),
        }
    };

    let location_enabled = create_memo(move |_| filter.with(SearchFilter::location_enabled));
    let locating = create_memo(move |_| filter.with(|f| f.location == LocationState::Locating));
    let location_label = move || {
        filter.with(|f| match &f.location {
            LocationState::Unknown => "내 위치".to_owned(),
            LocationState::Locating => "위치 확인 중...".to_owned(),
            LocationState::Available(_) => "위치 재설정".to_owned(),
            LocationState::Unavailable(_) => "위치 사용 불가".to_owned(),
        })
    };

    view! {
      <div class="sticky top-[72px] z-40 bg-white shadow-lg border-b border-[#E1E8ED]">
        <div class="max-w-[1440px] mx-auto px-4 md:px-8 py-4 md:py-6">
          <div class="flex items-center gap-3 mb-4">
            <input
              type="text"
              class="flex-1 pl-4 pr-4 py-3 bg-[#F5F7FA] border-2 border-[#E1E8ED] rounded-xl focus:outline-none focus:border-[#16E0B4]"
              placeholder="시설명, 지역, 종목으로 검색..."
              prop:value = move || filter.with(|f| f.keyword.clone())
              on:input = move |ev| {
                let keyword = event_target_value(&ev);
                filter.update(|f| f.keyword = keyword);
              }
              on:keyup = move |ev| {
                if ev.key() == "Enter" {
                  on_search();
                }
              }
            />
            <button
              class="px-4 md:px-6 py-3 bg-[#0D1B2A] text-white rounded-xl hover:bg-[#1a2f42] transition-colors whitespace-nowrap"
              on:click = move |_| show_filters.update(|s| *s = !*s)
            >
              { move || if show_filters.get() { "필터 숨기기" } else { "필터 보기" } }
            </button>
          </div>

          <Show when = move || show_filters.get()>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-3 md:gap-4 mb-4">
              <div>
                <label class="block text-sm mb-2 text-[#8B9DA9]">"시/도"</label>
                <select
                  class=SELECT
                  prop:value = move || filter.with(|f| f.province.clone())
                  on:change = move |ev| on_province(event_target_value(&ev))
                >
                  <option value="">"시/도 선택"</option>
                  <For
                    each = move || provinces.get()
                    key = |p| p.clone()
                    let:province
                  >
                    <option value=province.clone()>{ province.clone() }</option>
                  </For>
                </select>
              </div>
              <div>
                <label class="block text-sm mb-2 text-[#8B9DA9]">"시/구"</label>
                <select
                  class=SELECT
                  disabled = move || filter.with(|f| f.province.is_empty())
                  prop:value = move || filter.with(|f| f.city.clone())
                  on:change = move |ev| {
                    let city = event_target_value(&ev);
                    filter.update(|f| f.city = city);
                  }
                >
                  <option value="">"시/구 선택"</option>
                  <For
                    each = move || filter.with(|f| f.cities.clone())
                    key = |c| c.clone()
                    let:city
                  >
                    <option value=city.clone()>{ city.clone() }</option>
                  </For>
                </select>
              </div>
              <div>
                <label class="block text-sm mb-2 text-[#8B9DA9]">"운동 종목"</label>
                <select
                  class=SELECT
                  prop:value = move || filter.with(|f| f.sport.clone())
                  on:change = move |ev| {
                    let sport = event_target_value(&ev);
                    filter.update(|f| f.sport = sport);
                  }
                >
                  <option value="">"종목 선택"</option>
                  <For
                    each = move || sports.get()
                    key = |s| s.clone()
                    let:sport
                  >
                    <option value=sport.clone()>{ sport.clone() }</option>
                  </For>
                </select>
              </div>
            </div>

            <div class="flex flex-wrap items-center gap-2 mb-4">
              <span class="text-sm text-[#8B9DA9] mr-1">"반경"</span>
              { RADIUS_OPTIONS.into_iter().map(|radius| view! {
                <button
                  class=move || if filter.with(|f| f.radius == Some(radius)) { ACTIVE_CHIP } else { CHIP }
                  disabled = move || !location_enabled.get()
                  on:click = move |_| {
                    filter.update(|f| f.toggle_radius(radius));
                    if filter.with_untracked(|f| f.radius.is_some() && f.location.position().is_none()) {
                      locate.dispatch(());
                    }
                  }
                >
                  { format::distance(f64::from(radius)) }
                </button>
              }).collect_view() }

              <span class="text-sm text-[#8B9DA9] ml-4 mr-1">"평점"</span>
              { MIN_RATING_OPTIONS.into_iter().map(|rating| view! {
                <button
                  class=move || if filter.with(|f| f.min_rating == Some(rating)) { ACTIVE_CHIP } else { CHIP }
                  on:click = move |_| filter.update(|f| f.toggle_min_rating(rating))
                >
                  { format!("{} 이상", format::rating(rating)) }
                </button>
              }).collect_view() }

              <select
                class="ml-auto px-3 py-2 border-2 border-[#E1E8ED] rounded-lg text-sm"
                prop:value = move || filter.with(|f| f.sort.map(SortKey::as_str).unwrap_or_default())
                on:change = move |ev| on_sort(event_target_value(&ev))
              >
                <option value="">"기본순"</option>
                { SortKey::ALL.into_iter().map(|key| view! {
                  <option
                    value=key.as_str()
                    disabled = move || key == SortKey::Distance && !location_enabled.get()
                  >
                    { key.label() }
                  </option>
                }).collect_view() }
              </select>
            </div>
          </Show>

          <div class="flex flex-col md:flex-row items-start md:items-center justify-between gap-3">
            <div class="flex items-center gap-3">
              <p class="text-[#8B9DA9] text-sm md:text-base">
                "검색된 시설 "
                <strong class="text-[#0D1B2A]">{ move || format!("{}개", format::thousands(result_count.get())) }</strong>
              </p>
              <Show when = move || filter.with(|f| f.location.position().is_some())>
                <span class="text-xs md:text-sm text-[#16E0B4] bg-[#16E0B4]/10 px-2 py-1 rounded-full">"📍 내 위치 기준"</span>
              </Show>
            </div>
            <div class="flex items-center gap-2 md:gap-3 w-full md:w-auto">
              <button
                class="flex-1 md:flex-none px-4 py-2 border-2 border-[#16E0B4] text-[#16E0B4] rounded-xl hover:bg-[#16E0B4] hover:text-white transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                title="현재 위치를 기준으로 주변 시설을 검색합니다"
                disabled = move || locating.get() || !location_enabled.get()
                on:click = move |_| locate.dispatch(())
              >
                { location_label }
              </button>
              <button
                class="flex-1 md:flex-none px-4 py-2 bg-[#E1E8ED] text-[#8B9DA9] rounded-xl hover:bg-[#d1d8dd] transition-colors"
                on:click = move |_| {
                  filter.update(SearchFilter::reset);
                  city_requests.with_value(RequestSequence::start);
                  on_reset();
                }
              >
                "초기화"
              </button>
              <button
                class="flex-1 md:flex-none px-4 py-2 bg-[#16E0B4] text-[#0D1B2A] rounded-xl hover:bg-[#14c9a0] transition-colors font-bold disabled:opacity-50 disabled:cursor-not-allowed"
                disabled = move || loading.get()
                on:click = move |_| on_search()
              >
                { move || if loading.get() { "검색 중..." } else { "검색" } }
              </button>
            </div>
          </div>
        </div>
      </div>
    }
}
