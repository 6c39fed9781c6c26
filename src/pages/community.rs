use leptos::*;
use leptos_router::*;

use sf_boundary::{Post, PostCategory, PostList};
use sf_core::{
    format,
    sequence::RequestSequence,
    usecases::{self, category_label, CommunityQuery},
};
use sf_frontend_api::PostSort;

use crate::{components::*, use_app, Page};

const CHIP_ACTIVE: &str = "px-4 py-2 rounded-lg font-medium transition-colors bg-[#16E0B4] text-white";
const CHIP_INACTIVE: &str =
    "px-4 py-2 rounded-lg font-medium transition-colors bg-white text-[#8B9DA9] hover:bg-[#E1E8ED]";

#[component]
pub fn Community() -> impl IntoView {
    let app = use_app();
    let query_map = use_query_map();
    let navigate = use_navigate();

    // -- signals -- //

    let query = RwSignal::new(
        query_map.with_untracked(|q| CommunityQuery::from_url_params(|key| q.get(key).cloned())),
    );
    let result = RwSignal::new(None::<Result<PostList, String>>);
    let requests = store_value(RequestSequence::new());

    // -- actions -- //

    let fetch_posts = Action::new(move |()| {
        let query = query.get_untracked();
        let ticket = requests.with_value(RequestSequence::start);
        async move {
            let response = usecases::load_posts(&app.api(), &query).await;
            let Some(response) = requests.with_value(|s| s.accept(ticket, response)) else {
                return;
            };
            result.set(Some(
                response.map_err(|_| "게시물 목록을 불러올 수 없습니다.".to_owned()),
            ));
        }
    });

    // -- callbacks -- //

    let reload = store_value(move || {
        let url_params = query.with_untracked(CommunityQuery::to_url_params);
        navigate(
            &format!("{}{}", Page::Community.path(), url_params.to_query_string()),
            NavigateOptions {
                replace: true,
                scroll: false,
                ..Default::default()
            },
        );
        fetch_posts.dispatch(());
    });
    let reload = move || reload.with_value(|reload| reload());

    let on_category = move |category: Option<PostCategory>| {
        query.update(|q| q.select_category(category));
        reload();
    };
    let on_sort = move |sort: PostSort| {
        query.update(|q| q.select_sort(sort));
        reload();
    };
    let on_search = move || {
        query.update(|q| q.page = 1);
        reload();
    };
    let on_page = move |page: u32| {
        query.update(|q| q.page = page);
        reload();
        window().scroll_to_with_x_and_y(0.0, 0.0);
    };

    // -- init -- //

    fetch_posts.dispatch(());

    // -- derived -- //

    let current = Signal::derive(move || query.with(|q| q.page));
    let total = Signal::derive(move || {
        result.with(|r| match r {
            Some(Ok(list)) => list.pagination.total_pages,
            _ => 0,
        })
    });
    let category_class = move |category: Option<PostCategory>| {
        if query.with(|q| q.category) == category {
            CHIP_ACTIVE
        } else {
            CHIP_INACTIVE
        }
    };

    view! {
      <div class="min-h-screen bg-[#F5F7FA] py-4 md:py-8">
        <div class="max-w-6xl mx-auto px-3 md:px-4">
          <div class="flex justify-between items-center mb-6 md:mb-8">
            <h1 class="text-2xl md:text-3xl font-bold text-[#0D1B2A]">"커뮤니티"</h1>
            <Show when = move || app.logged_in()>
              <a
                href=Page::PostWrite.path()
                class="px-4 md:px-6 py-2 md:py-3 bg-[#16E0B4] text-white rounded-xl font-semibold hover:bg-[#12c9a0] transition-colors"
              >
                "글쓰기"
              </a>
            </Show>
          </div>

          <div class="flex flex-wrap gap-3 mb-6">
            <button class=move || category_class(None) on:click = move |_| on_category(None)>"전체"</button>
            { PostCategory::ALL.into_iter().map(|c| view! {
              <button class=move || category_class(Some(c)) on:click = move |_| on_category(Some(c))>
                { category_label(c) }
              </button>
            }).collect_view() }
          </div>

          <div class="flex flex-col sm:flex-row gap-3 mb-6">
            <input
              type="text"
              class="flex-1 px-4 py-3 rounded-xl border-2 border-[#E1E8ED] focus:border-[#16E0B4] focus:outline-none"
              placeholder="검색어를 입력하세요"
              prop:value = move || query.with(|q| q.keyword.clone())
              on:input = move |ev| query.update(|q| q.keyword = event_target_value(&ev))
              on:keyup = move |ev| {
                if ev.key() == "Enter" {
                  on_search();
                }
              }
            />
            <div class="flex gap-3">
              <button
                class="flex-1 sm:flex-none px-6 py-3 bg-[#16E0B4] text-white rounded-xl font-semibold hover:bg-[#12c9a0] transition-colors"
                on:click = move |_| on_search()
              >
                "검색"
              </button>
              <select
                class="flex-1 sm:flex-none px-4 py-3 rounded-xl border-2 border-[#E1E8ED] focus:border-[#16E0B4] focus:outline-none"
                prop:value = move || query.with(|q| q.sort.as_str())
                on:change = move |ev| {
                  if let Some(sort) = PostSort::from_str_opt(&event_target_value(&ev)) {
                    on_sort(sort);
                  }
                }
              >
                <option value=PostSort::Latest.as_str()>"최신순"</option>
                <option value=PostSort::Upvote.as_str()>"추천순"</option>
              </select>
            </div>
          </div>

          { move || if fetch_posts.pending().get() && result.with(Option::is_none) {
              view! { <div class="text-center py-20 text-[#8B9DA9]">"로딩 중..."</div> }.into_view()
            } else {
              match result.get() {
                None => ().into_view(),
                Some(Err(msg)) => view! { <div class="text-center py-20 text-[#FF6B6B]">{ msg }</div> }.into_view(),
                Some(Ok(list)) if list.posts.is_empty() => view! {
                  <div class="text-center py-20 text-[#8B9DA9]">"게시물이 없습니다"</div>
                }.into_view(),
                Some(Ok(list)) => view! {
                  <div class="space-y-3">
                    { list.posts.into_iter().map(|post| view! { <PostRow post /> }).collect_view() }
                  </div>
                }.into_view(),
              }
            }
          }

          <PageNav current total on_change = on_page />
        </div>
      </div>
    }
}

#[component]
fn PostRow(post: Post) -> impl IntoView {
    let now = crate::now();
    view! {
      <a
        href=Page::Community.item(post.post_id)
        class="block bg-white rounded-xl p-4 md:p-6 hover:shadow-lg transition-shadow"
      >
        <div class="flex flex-col sm:flex-row sm:items-center gap-2 sm:gap-3 mb-3">
          <span class="px-3 py-1 bg-[#16E0B4]/10 text-[#16E0B4] text-sm font-medium rounded-lg w-fit">
            { category_label(post.category) }
          </span>
          <h3 class="text-base md:text-lg font-bold text-[#0D1B2A]">{ post.title }</h3>
        </div>
        <p class="text-[#8B9DA9] mb-4 line-clamp-2">{ post.content }</p>
        <div class="flex flex-col sm:flex-row sm:items-center justify-between gap-3 text-sm text-[#8B9DA9]">
          <div class="flex items-center gap-4">
            <span>{ post.nickname }</span>
            <span>{ format::relative_date(&post.created_at, now) }</span>
          </div>
          <div class="flex items-center gap-4">
            <span>{ format!("👍 {}", post.upvote_count) }</span>
            <span>{ format!("👎 {}", post.downvote_count) }</span>
            <span>{ format!("💬 {}", post.comment_count) }</span>
          </div>
        </div>
      </a>
    }
}
