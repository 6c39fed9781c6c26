use leptos::*;

use sf_boundary::{FacilityRating, Review};
use sf_core::{
    dialog::{ConfirmDialog, DialogState},
    format,
    pagination::total_pages,
    usecases::{self, ReviewDraft, RATING_RANGE},
};
use sf_frontend_api::ReviewApi;

use crate::{components::*, local_offset, use_app};

const REVIEWS_PER_PAGE: u32 = 5;

#[component]
fn Stars<F>(count: Signal<u8>, on_rate: Option<F>) -> impl IntoView
where
    F: Fn(u8) + 'static + Copy,
{
    let interactive = on_rate.is_some();
    view! {
      <div class="flex gap-1">
        { RATING_RANGE.map(|star| view! {
          <button
            type="button"
            disabled = !interactive
            class = if interactive { "cursor-pointer hover:scale-110 transition-transform" } else { "" }
            on:click = move |_| {
              if let Some(on_rate) = on_rate {
                on_rate(star);
              }
            }
          >
            <span class = move || if star <= count.get() { "text-[#FFA726]" } else { "text-[#E1E8ED]" }>"★"</span>
          </button>
        }).collect_view() }
      </div>
    }
}

/// Reviews of a facility with a form to write one.
#[allow(clippy::too_many_lines)]
#[component]
pub fn ReviewSection(facility_id: i64) -> impl IntoView {
    let app = use_app();

    // -- signals -- //

    let reviews = RwSignal::new(None::<Result<Vec<Review>, String>>);
    let rating = RwSignal::new(None::<FacilityRating>);
    let draft = RwSignal::new(ReviewDraft::default());
    let page = RwSignal::new(1_u32);
    let dialog = RwSignal::new(DialogState::<i64>::default());

    // -- actions -- //

    let fetch_reviews = Action::new(move |()| async move {
        let api = app.api();
        match usecases::facility_reviews(&api, facility_id).await {
            Ok(list) => reviews.set(Some(Ok(list))),
            Err(err) => {
                log::error!("Unable to fetch reviews of facility {facility_id}: {err}");
                reviews.set(Some(Err("리뷰를 불러올 수 없습니다.".to_owned())));
            }
        }
        match api.facility_rating(facility_id).await {
            Ok(info) => rating.set(Some(info)),
            Err(err) => log::warn!("Unable to fetch rating of facility {facility_id}: {err}"),
        }
    });

    let submit = Action::new(move |()| async move {
        let current = draft.get_untracked();
        let session = app.session.get_untracked();
        match usecases::submit_review(&app.api(), &session, facility_id, &current).await {
            Ok(submitted) => {
                app.success(submitted.message());
                draft.set(ReviewDraft::default());
                fetch_reviews.dispatch(());
            }
            Err(err) => {
                log::warn!("Unable to submit review: {err}");
                app.error(err.to_string());
            }
        }
    });

    let delete = create_action(move |id: &i64| {
        let id = *id;
        async move {
            let session = app.session.get_untracked();
            match usecases::delete_review(&app.api(), &session, id).await {
                Ok(()) => {
                    app.success("리뷰가 삭제되었습니다.");
                    fetch_reviews.dispatch(());
                }
                Err(err) => {
                    log::error!("Unable to delete review {id}: {err}");
                    app.error("리뷰 삭제에 실패했습니다.");
                }
            }
        }
    });

    fetch_reviews.dispatch(());

    // -- derived -- //

    let review_list = Signal::derive(move || {
        reviews.with(|r| r.as_ref().and_then(|r| r.as_ref().ok()).cloned().unwrap_or_default())
    });
    let total = Signal::derive(move || {
        review_list.with(|r| total_pages(r.len() as u64, REVIEWS_PER_PAGE))
    });
    let visible = move || {
        let skip = (page.get().saturating_sub(1) * REVIEWS_PER_PAGE) as usize;
        review_list.with(|r| {
            r.iter()
                .skip(skip)
                .take(REVIEWS_PER_PAGE as usize)
                .cloned()
                .collect::<Vec<_>>()
        })
    };
    let current_rating = Signal::derive(move || draft.with(|d| d.rating));
    let editing = move || draft.with(|d| d.editing.is_some());

    view! {
      <div>
        <div class="flex items-center justify-between mb-6">
          <h3 class="font-bold">
            { move || format!("리뷰 ({})", rating.with(|r| r.as_ref().map_or(0, |r| r.review_count))) }
          </h3>
          { move || rating.get().map(|r| view! {
            <div class="flex items-center gap-2">
              <span class="text-xl font-bold">{ format::rating(r.average_rating) }</span>
              <span class="text-[#8B9DA9]">"/ 5.0"</span>
            </div>
          })}
        </div>

        <Show
          when = move || app.logged_in()
          fallback = || view! {
            <div class="mb-6 p-6 bg-[#F5F7FA] rounded-2xl text-center text-[#8B9DA9]">
              "리뷰를 작성하려면 로그인이 필요합니다."
            </div>
          }
        >
          <div class="mb-6 p-6 bg-[#F5F7FA] rounded-2xl border-2 border-[#E1E8ED]">
            <h4 class="mb-4">{ move || if editing() { "리뷰 수정" } else { "리뷰 작성" } }</h4>
            <div class="mb-4">
              <label class="block text-sm font-semibold mb-2">"별점"</label>
              <Stars count = current_rating on_rate = Some(move |star| draft.update(|d| d.rating = star)) />
            </div>
            <div class="mb-4">
              <label class="block text-sm font-semibold mb-2">"리뷰 내용"</label>
              <textarea
                class="w-full px-4 py-3 border-2 border-[#E1E8ED] rounded-xl focus:outline-none focus:border-[#16E0B4] resize-none"
                rows="4"
                placeholder="이 시설에 대한 리뷰를 작성해주세요."
                prop:value = move || draft.with(|d| d.content.clone())
                on:input = move |ev| {
                  let content = event_target_value(&ev);
                  draft.update(|d| d.content = content);
                }
              ></textarea>
            </div>
            <div class="flex gap-2">
              <button
                class="px-6 py-3 bg-[#16E0B4] text-[#0D1B2A] rounded-xl font-bold hover:bg-[#14c9a0] disabled:opacity-50"
                disabled = move || submit.pending().get()
                on:click = move |_| submit.dispatch(())
              >
                { move || if editing() { "수정하기" } else { "작성하기" } }
              </button>
              <Show when = editing>
                <button
                  class="px-6 py-3 bg-[#E1E8ED] text-[#8B9DA9] rounded-xl"
                  on:click = move |_| draft.set(ReviewDraft::default())
                >
                  "취소"
                </button>
              </Show>
            </div>
          </div>
        </Show>

        { move || match reviews.get() {
            None => view! { <p class="text-center text-[#8B9DA9] py-8">"리뷰를 불러오는 중..."</p> }.into_view(),
            Some(Err(msg)) => view! { <p class="text-center text-[#FF6B6B] py-8">{ msg }</p> }.into_view(),
            Some(Ok(list)) if list.is_empty() => view! {
              <p class="text-center text-[#8B9DA9] py-8">"아직 작성된 리뷰가 없습니다."</p>
            }.into_view(),
            Some(Ok(_)) => view! {
              <ul class="space-y-4">
                <For
                  each = visible
                  key = |review| (review.review_id, review.updated_at.clone())
                  let:review
                >
                  <ReviewItem
                    review
                    on_edit = move |r: Review| {
                      draft.set(ReviewDraft::edit(&r));
                      scroll_to_top();
                    }
                    on_delete = move |id| dialog.update(|d| d.open(
                      ConfirmDialog::danger("리뷰 삭제", "리뷰를 삭제하시겠습니까?"),
                      id,
                    ))
                  />
                </For>
              </ul>
              <PageNav current = page.into() total on_change = move |p| page.set(p) />
            }.into_view(),
        }}

        <ConfirmDialogView
          dialog = Signal::derive(move || dialog.with(|d| d.dialog().cloned()))
          on_confirm = move || {
            if let Some(id) = dialog.try_update(DialogState::confirm).flatten() {
              delete.dispatch(id);
            }
          }
          on_cancel = move || dialog.update(DialogState::cancel)
        />
      </div>
    }
}

#[component]
fn ReviewItem<E, D>(review: Review, on_edit: E, on_delete: D) -> impl IntoView
where
    E: Fn(Review) + 'static + Copy,
    D: Fn(i64) + 'static + Copy,
{
    let app = use_app();
    let own = app.session.with_untracked(|s| s.owns(review.user_id));
    let date = format::long_date(&review.created_at, local_offset());
    let id = review.review_id;
    let rating = review.rating;
    let content = review.content.clone();
    let review = store_value(review);

    view! {
      <li class="p-6 bg-white rounded-2xl border-2 border-[#E1E8ED]">
        <div class="flex items-center justify-between mb-2">
          <Stars count = Signal::derive(move || rating) on_rate = { None::<fn(u8)> } />
          <span class="text-sm text-[#8B9DA9]">{ date }</span>
        </div>
        <p class="whitespace-pre-wrap">{ content }</p>
        { own.then(|| view! {
          <div class="flex gap-2 mt-4">
            <button class="text-sm text-[#42A5F5]" on:click = move |_| on_edit(review.get_value())>"수정"</button>
            <button class="text-sm text-[#FF6B6B]" on:click = move |_| on_delete(id)>"삭제"</button>
          </div>
        })}
      </li>
    }
}

fn scroll_to_top() {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}
