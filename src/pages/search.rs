use leptos::*;
use leptos_router::*;

use sf_boundary::FacilityList;
use sf_core::{
    filter::{SearchFilter, SearchQuery},
    pagination::total_pages,
    sequence::RequestSequence,
    usecases::{self, SEARCH_PAGE_SIZE},
};

use crate::{components::*, use_app, Page};

#[component]
pub fn SearchResults() -> impl IntoView {
    let app = use_app();
    let query = use_query_map();
    let navigate = use_navigate();

    // -- signals -- //

    let restored = query.with_untracked(|q| SearchQuery::from_url_params(|key| q.get(key).cloned()));
    let filter = RwSignal::new(SearchFilter::from_query(&restored));
    let page = RwSignal::new(restored.page());
    let result = RwSignal::new(None::<Result<FacilityList, String>>);
    let requests = store_value(RequestSequence::new());

    // -- actions -- //

    let search = create_action(move |page: &u32| {
        let page = *page;
        let search = filter.with_untracked(SearchFilter::to_search);
        let ticket = requests.with_value(RequestSequence::start);
        async move {
            let response = usecases::search_facilities(&app.api(), &search, page).await;
            let Some(response) = requests.with_value(|s| s.accept(ticket, response)) else {
                return;
            };
            match response {
                Ok(list) => result.set(Some(Ok(list))),
                Err(err) => {
                    log::error!("Unable to search facilities: {err}");
                    result.set(Some(Err("시설 검색에 실패했습니다.".to_owned())));
                }
            }
        }
    });

    // -- callbacks -- //

    let run_search = store_value(move |p: u32| {
        page.set(p);
        let url_params = filter.with_untracked(|f| f.to_query(p).to_url_params());
        navigate(
            &format!("{}{}", Page::Search.path(), url_params.to_query_string()),
            NavigateOptions {
                replace: true,
                scroll: false,
                ..Default::default()
            },
        );
        search.dispatch(p);
    });
    let run_search = move |p: u32| run_search.with_value(|run| run(p));

    let on_search = move || run_search(1);
    let on_reset = move || run_search(1);
    let on_page = move |p: u32| {
        run_search(p);
        window().scroll_to_with_x_and_y(0.0, 0.0);
    };

    // -- init -- //

    if !filter.with_untracked(SearchFilter::needs_location) {
        search.dispatch(page.get_untracked());
    }

    // -- derived -- //

    let loading = Signal::derive(move || search.pending().get());
    let total_count = Signal::derive(move || {
        result.with(|r| match r {
            Some(Ok(list)) => list.pagination.total_count,
            _ => 0,
        })
    });
    let total = Signal::derive(move || total_pages(total_count.get(), SEARCH_PAGE_SIZE));

    view! {
      <div class="bg-[#F5F7FA] min-h-screen">
        <FilterBar filter result_count = total_count loading on_search on_reset />
        <div class="max-w-[1440px] mx-auto px-4 md:px-8 py-4 md:py-8">
          { move || match result.get() {
              None => view! { <p class="text-center text-[#8B9DA9] py-16">"시설을 불러오는 중..."</p> }.into_view(),
              Some(Err(msg)) => view! { <p class="text-center text-[#FF6B6B] py-16">{ msg }</p> }.into_view(),
              Some(Ok(list)) if list.facility_list.is_empty() => view! {
                <div class="text-center py-16">
                  <p class="text-xl font-bold mb-2">"검색 결과가 없습니다"</p>
                  <p class="text-[#8B9DA9]">"다른 조건으로 검색해보세요."</p>
                </div>
              }.into_view(),
              Some(Ok(list)) => view! {
                <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4 md:gap-6">
                  { list.facility_list.into_iter().map(|facility| view! { <FacilityCard facility /> }).collect_view() }
                </div>
              }.into_view(),
          }}
          <PageNav current = page.into() total on_change = on_page />
        </div>
      </div>
    }
}
