use leptos::*;
use leptos_router::*;

use sf_boundary::PostCategory;
use sf_core::{
    dialog::{ConfirmDialog, DialogState, Severity},
    usecases::{self, category_label, PostDraft, PostError},
};

use crate::{components::*, use_app, Page};

fn warning(title: &str, message: impl Into<String>) -> ConfirmDialog {
    ConfirmDialog::info(title, message).with_severity(Severity::Warning)
}

/// Creates a new post or edits the post given by the `postId` route parameter.
#[allow(clippy::too_many_lines)]
#[component]
pub fn PostWrite() -> impl IntoView {
    let app = use_app();
    let params = use_params_map();
    let navigate = use_navigate();

    let editing = params.with_untracked(|p| p.get("postId").and_then(|id| id.parse::<i64>().ok()));

    // -- signals -- //

    let draft = RwSignal::new(PostDraft::default());
    // Holds the path to continue with once the notice is closed.
    let dialog = RwSignal::new(DialogState::<Option<String>>::default());

    let notify = move |notice: ConfirmDialog, next: Option<String>| {
        dialog.update(|d| d.open(notice, next));
    };

    // -- actions -- //

    let load = create_action(move |id: &i64| {
        let id = *id;
        async move {
            let session = app.session.get_untracked();
            match usecases::load_post_for_edit(&app.api(), &session, id).await {
                Ok(loaded) => draft.set(loaded),
                Err(PostError::NotOwner) => notify(
                    warning("권한 없음", "본인의 게시글만 수정할 수 있습니다."),
                    Some(Page::Community.path().to_owned()),
                ),
                Err(PostError::LoginRequired) => notify(
                    warning("로그인 필요", "로그인이 필요합니다."),
                    Some(Page::Login.path().to_owned()),
                ),
                Err(err) => {
                    log::error!("Unable to load post {id} for editing: {err}");
                    notify(
                        warning("오류", "게시물을 찾을 수 없습니다."),
                        Some(Page::Community.path().to_owned()),
                    );
                }
            }
        }
    });

    let save = Action::new(move |()| async move {
        let session = app.session.get_untracked();
        let current = draft.get_untracked();
        match usecases::save_post(&app.api(), &session, editing, &current).await {
            Ok(id) => {
                let (title, message) = if editing.is_some() {
                    ("수정 완료", "게시물이 수정되었습니다.")
                } else {
                    ("작성 완료", "게시물이 작성되었습니다.")
                };
                notify(
                    ConfirmDialog::info(title, message),
                    Some(Page::Community.item(id)),
                );
            }
            Err(err @ PostError::Invalid(_)) => notify(warning("입력 필요", err.to_string()), None),
            Err(PostError::LoginRequired) => notify(
                warning("로그인 필요", "로그인이 필요합니다."),
                Some(Page::Login.path().to_owned()),
            ),
            Err(err) => {
                log::error!("Unable to save post: {err}");
                notify(warning("저장 실패", "게시물 저장에 실패했습니다."), None);
            }
        }
    });

    // -- callbacks -- //

    let close = store_value(move || {
        if let Some(Some(path)) = dialog.try_update(DialogState::confirm).flatten() {
            navigate(&path, NavigateOptions::default());
        }
    });
    let close = move || close.with_value(|close| close());

    // -- init -- //

    if app.logged_in() {
        if let Some(id) = editing {
            load.dispatch(id);
        }
    } else {
        notify(
            warning("로그인 필요", "로그인이 필요합니다."),
            Some(Page::Login.path().to_owned()),
        );
    }

    let category_class = move |category: PostCategory| {
        if draft.with(|d| d.category) == category {
            "px-4 py-2 rounded-lg font-medium transition-colors bg-[#16E0B4] text-white"
        } else {
            "px-4 py-2 rounded-lg font-medium transition-colors bg-[#F5F7FA] text-[#8B9DA9] hover:bg-[#E1E8ED]"
        }
    };
    let back = editing.map_or_else(|| Page::Community.path().to_owned(), |id| Page::Community.item(id));

    view! {
      <div class="min-h-screen bg-[#F5F7FA] py-8">
        <div class="max-w-4xl mx-auto px-4">
          <a href=back class="inline-block text-[#8B9DA9] hover:text-[#0D1B2A] mb-6">"← 뒤로 가기"</a>
          <div class="bg-white rounded-xl p-8">
            <h1 class="text-3xl font-bold text-[#0D1B2A] mb-8">
              { if editing.is_some() { "게시물 수정" } else { "게시물 작성" } }
            </h1>
            <form
              class="space-y-6"
              on:submit = move |ev| {
                ev.prevent_default();
                save.dispatch(());
              }
            >
              <div>
                <label class="block text-sm font-semibold text-[#0D1B2A] mb-3">"카테고리"</label>
                <div class="flex flex-wrap gap-3">
                  { PostCategory::ALL.into_iter().map(|c| view! {
                    <button
                      type="button"
                      class=move || category_class(c)
                      on:click = move |_| draft.update(|d| d.category = c)
                    >
                      { category_label(c) }
                    </button>
                  }).collect_view() }
                </div>
              </div>
              <div>
                <label class="block text-sm font-semibold text-[#0D1B2A] mb-3">"제목"</label>
                <input
                  type="text"
                  class="w-full px-4 py-3 rounded-xl border-2 border-[#E1E8ED] focus:border-[#16E0B4] focus:outline-none"
                  placeholder="제목을 입력하세요"
                  maxlength="100"
                  prop:value = move || draft.with(|d| d.title.clone())
                  on:input = move |ev| draft.update(|d| d.title = event_target_value(&ev))
                />
              </div>
              <div>
                <label class="block text-sm font-semibold text-[#0D1B2A] mb-3">"내용"</label>
                <textarea
                  class="w-full px-4 py-3 rounded-xl border-2 border-[#E1E8ED] focus:border-[#16E0B4] focus:outline-none resize-none"
                  rows="15"
                  placeholder="내용을 입력하세요"
                  prop:value = move || draft.with(|d| d.content.clone())
                  on:input = move |ev| draft.update(|d| d.content = event_target_value(&ev))
                ></textarea>
              </div>
              <div class="flex justify-end gap-3">
                <a href=Page::Community.path() class="px-6 py-3 rounded-xl border-2 border-[#E1E8ED] text-[#8B9DA9] hover:bg-[#F5F7FA]">
                  "취소"
                </a>
                <button
                  type="submit"
                  class="px-6 py-3 bg-[#16E0B4] text-white rounded-xl font-semibold hover:bg-[#12c9a0] disabled:opacity-50"
                  disabled = move || save.pending().get() || load.pending().get()
                >
                  { move || match (save.pending().get(), editing.is_some()) {
                      (true, _) => "저장 중...",
                      (false, true) => "수정하기",
                      (false, false) => "작성하기",
                  }}
                </button>
              </div>
            </form>
          </div>
        </div>
        <ConfirmDialogView
          dialog = Signal::derive(move || dialog.with(|d| d.dialog().cloned()))
          on_confirm = close
          on_cancel = close
        />
      </div>
    }
}
