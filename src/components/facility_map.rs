use leptos::{html::Div, *};

use sf_core::{
    format,
    geo::GeoPoint,
    usecases::{self, RouteOverview},
};

use crate::{geolocation::current_position, map, use_app};

/// A map with the facility marker and driving directions from the current position.
#[component]
pub fn FacilityMapView(position: GeoPoint, title: String, address: String) -> impl IntoView {
    let app = use_app();

    let container = create_node_ref::<Div>();
    let facility_map = store_value(None::<map::FacilityMap>);
    let map_error = RwSignal::new(None::<String>);
    let route = RwSignal::new(None::<RouteOverview>);
    let route_error = RwSignal::new(None::<String>);

    let init_map = Action::new(move |()| {
        let title = title.clone();
        let address = address.clone();
        async move {
            let Some(client_id) = app.cfg.naver_map_client_id else {
                map_error.set(Some("지도를 표시할 수 없습니다.".to_owned()));
                return;
            };
            if let Err(err) = map::load_script(client_id).await {
                log::error!("Unable to initialize the map: {err}");
                map_error.set(Some("지도를 불러올 수 없습니다.".to_owned()));
                return;
            }
            let Some(element) = container.get_untracked() else {
                log::warn!("Map container is gone");
                return;
            };
            let m = map::FacilityMap::new(&element, position, &title, &address);
            facility_map.set_value(Some(m));
        }
    });

    let find_route = Action::new(move |()| async move {
        route_error.set(None);
        let start = match current_position().await {
            Ok(start) => start,
            Err(err) => {
                route_error.set(Some(err.message().to_owned()));
                return;
            }
        };
        match usecases::driving_route(&app.api(), start, position).await {
            Ok(Some(overview)) => {
                facility_map.update_value(|m| {
                    if let Some(m) = m {
                        m.show_route(start, &overview.path);
                    }
                });
                route.set(Some(overview));
            }
            Ok(None) => {
                route_error.set(Some("경로를 찾을 수 없습니다.".to_owned()));
            }
            Err(err) => {
                log::error!("Unable to fetch directions: {err}");
                route_error.set(Some("길찾기 정보를 불러올 수 없습니다.".to_owned()));
            }
        }
    });

    container.on_load(move |_| init_map.dispatch(()));

    on_cleanup(move || {
        facility_map.update_value(|m| {
            m.take();
        });
    });

    view! {
      <div>
        { move || map_error.get().map(|msg| view! {
          <div class="h-96 bg-[#F5F7FA] rounded-2xl flex items-center justify-center border-2 border-[#E1E8ED] mb-6">
            <p class="text-[#8B9DA9]">{ msg }</p>
          </div>
        })}
        <div
          node_ref = container
          class = move || if map_error.with(Option::is_some) { "hidden" } else { "h-96 rounded-2xl border-2 border-[#E1E8ED] mb-6" }
        ></div>
        <div class="flex items-center gap-3 mb-4">
          <button
            class="px-6 py-3 bg-[#0D1B2A] text-white rounded-xl hover:bg-[#1a2f42] transition-colors disabled:opacity-50"
            disabled = move || find_route.pending().get()
            on:click = move |_| find_route.dispatch(())
          >
            { move || if find_route.pending().get() { "경로 검색 중..." } else { "내 위치에서 길찾기" } }
          </button>
          <Show when = move || route.with(Option::is_some)>
            <button
              class="px-4 py-3 bg-[#E1E8ED] text-[#8B9DA9] rounded-xl"
              on:click = move |_| {
                facility_map.update_value(|m| {
                  if let Some(m) = m {
                    m.clear_route();
                  }
                });
                route.set(None);
              }
            >
              "경로 지우기"
            </button>
          </Show>
        </div>
        { move || route_error.get().map(|msg| view! { <p class="text-[#FF6B6B] mb-4">{ msg }</p> }) }
        { move || route.get().map(|r| view! { <RouteSummary route = r /> }) }
      </div>
    }
}

#[component]
fn RouteSummary(route: RouteOverview) -> impl IntoView {
    #[allow(clippy::cast_precision_loss)]
    let distance = format::distance(route.distance as f64);
    view! {
      <div class="grid grid-cols-2 md:grid-cols-5 gap-3 p-4 bg-[#F5F7FA] rounded-2xl">
        <RouteFact label = "거리" value = distance />
        <RouteFact label = "소요 시간" value = format::duration(route.duration) />
        <RouteFact label = "통행료" value = format::won(route.toll_fare) />
        <RouteFact label = "택시 요금" value = format::won(route.taxi_fare) />
        <RouteFact label = "유류비" value = format::won(route.fuel_price) />
      </div>
    }
}

#[component]
fn RouteFact(label: &'static str, value: String) -> impl IntoView {
    view! {
      <div>
        <p class="text-sm text-[#8B9DA9]">{ label }</p>
        <p class="font-semibold">{ value }</p>
      </div>
    }
}
