use leptos::*;

use sf_core::pagination::{page_items, PageItem, DEFAULT_WINDOW};

const BUTTON: &str = "min-w-[40px] h-10 px-3 rounded-lg border-2 border-[#E1E8ED] hover:border-[#16E0B4] transition-colors disabled:opacity-40 disabled:cursor-not-allowed";
const CURRENT: &str = "min-w-[40px] h-10 px-3 rounded-lg border-2 border-[#16E0B4] bg-[#16E0B4] text-[#0D1B2A] font-bold";

/// Page navigation shared by all lists.
#[component]
pub fn PageNav<F>(current: Signal<u32>, total: Signal<u32>, on_change: F) -> impl IntoView
where
    F: Fn(u32) + 'static + Copy,
{
    let items = create_memo(move |_| page_items(current.get(), total.get(), DEFAULT_WINDOW));

    let item_view = move |item: PageItem| match item {
        PageItem::Ellipsis => view! { <span class="px-2 text-[#8B9DA9]">"…"</span> }.into_view(),
        PageItem::First | PageItem::Page(_) | PageItem::Last(_) => {
            let page = match item {
                PageItem::Page(page) | PageItem::Last(page) => page,
                _ => 1,
            };
            view! {
              <button
                class=move || if current.get() == page { CURRENT } else { BUTTON }
                on:click = move |_| {
                  if current.get_untracked() != page {
                    on_change(page);
                  }
                }
              >
                { page }
              </button>
            }
            .into_view()
        }
    };

    view! {
      <Show when = move || { total.get() > 1 }>
        <nav class="flex items-center justify-center gap-2 mt-8">
          <button
            class=BUTTON
            disabled = move || current.get() <= 1
            on:click = move |_| on_change(current.get_untracked().saturating_sub(1).max(1))
          >
            "이전"
          </button>
          { move || items.get().into_iter().map(item_view).collect_view() }
          <button
            class=BUTTON
            disabled = move || current.get() >= total.get()
            on:click = move |_| on_change((current.get_untracked() + 1).min(total.get_untracked()))
          >
            "다음"
          </button>
        </nav>
      </Show>
    }
}
