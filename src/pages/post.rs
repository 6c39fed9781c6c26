use leptos::*;
use leptos_router::*;

use sf_boundary::{Comment, Post, VoteType};
use sf_core::{
    dialog::DialogState,
    format,
    usecases::{self, category_label, CommentError, VoteError},
};
use sf_frontend_api::{CommentApi, PostApi};

use crate::{components::*, local_offset, use_app, Page};

/// Destructive actions waiting for confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    DeletePost,
    DeleteComment(i64),
}

#[component]
pub fn PostDetail() -> impl IntoView {
    let params = use_params_map();
    let post_id = move || params.with(|p| p.get("postId").and_then(|id| id.parse::<i64>().ok()));

    move || match post_id() {
        Some(id) => view! { <PostView post_id = id /> }.into_view(),
        None => view! {
          <div class="min-h-screen bg-[#F5F7FA] flex flex-col items-center justify-center gap-4">
            <p class="text-[#8B9DA9]">"게시물을 찾을 수 없습니다."</p>
            <a href=Page::Community.path() class="text-[#16E0B4]">"목록으로"</a>
          </div>
        }.into_view(),
    }
}

#[allow(clippy::too_many_lines)]
#[component]
fn PostView(post_id: i64) -> impl IntoView {
    let app = use_app();
    let navigate = use_navigate();

    // -- signals -- //

    let post = RwSignal::new(None::<Result<Post, String>>);
    let comments = RwSignal::new(Vec::<Comment>::new());
    let new_comment = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<i64>);
    let editing_content = RwSignal::new(String::new());
    let dialog = RwSignal::new(DialogState::<Pending>::default());

    let to_login = store_value({
        let navigate = navigate.clone();
        move || navigate(Page::Login.path(), NavigateOptions::default())
    });
    let to_login = move || to_login.with_value(|f| f());
    let to_list = store_value(move || navigate(Page::Community.path(), NavigateOptions::default()));
    let to_list = move || to_list.with_value(|f| f());

    // -- actions -- //

    let fetch_post = Action::new(move |()| async move {
        let result = app.api().post_by_id(post_id).await.map_err(|err| {
            log::warn!("Unable to fetch post {post_id}: {err}");
            "게시물을 찾을 수 없습니다.".to_owned()
        });
        post.set(Some(result));
    });

    let fetch_comments = Action::new(move |()| async move {
        match app.api().comments(post_id).await {
            Ok(list) => comments.set(list),
            Err(err) => log::warn!("Unable to fetch comments of post {post_id}: {err}"),
        }
    });

    let vote = create_action(move |vote_type: &VoteType| {
        let vote_type = *vote_type;
        async move {
            let session = app.session.get_untracked();
            match usecases::vote_post(&app.api(), &session, post_id, vote_type).await {
                Ok(updated) => post.set(Some(Ok(updated))),
                Err(VoteError::LoginRequired) => {
                    app.error("로그인이 필요합니다.");
                    to_login();
                }
                Err(err) => {
                    log::error!("Unable to refresh post {post_id} after voting: {err}");
                    app.error("투표에 실패했습니다.");
                }
            }
        }
    });

    let delete_post = Action::new(move |()| async move {
        let session = app.session.get_untracked();
        match usecases::delete_post(&app.api(), &session, post_id).await {
            Ok(()) => {
                app.success("게시물이 삭제되었습니다.");
                to_list();
            }
            Err(err) => {
                log::error!("Unable to delete post {post_id}: {err}");
                app.error("게시물 삭제에 실패했습니다.");
            }
        }
    });

    let add_comment = Action::new(move |()| async move {
        let session = app.session.get_untracked();
        let content = new_comment.get_untracked();
        match usecases::create_comment(&app.api(), &session, post_id, &content).await {
            Ok(comment) => {
                new_comment.set(String::new());
                comments.update(|list| list.push(comment));
                update_comment_count(post, true);
            }
            Err(CommentError::LoginRequired) => {
                app.error("로그인이 필요합니다.");
                to_login();
            }
            Err(err @ CommentError::Empty) => app.error(err.to_string()),
            Err(err) => {
                log::error!("Unable to create comment: {err}");
                app.error("댓글 작성에 실패했습니다.");
            }
        }
    });

    let save_comment = create_action(move |comment_id: &i64| {
        let comment_id = *comment_id;
        async move {
            let session = app.session.get_untracked();
            let content = editing_content.get_untracked();
            match usecases::update_comment(&app.api(), &session, comment_id, &content).await {
                Ok(()) => {
                    let content = content.trim().to_owned();
                    comments.update(|list| {
                        if let Some(c) = list.iter_mut().find(|c| c.comment_id == comment_id) {
                            c.content = content;
                        }
                    });
                    editing.set(None);
                    editing_content.set(String::new());
                }
                Err(err @ (CommentError::Empty | CommentError::LoginRequired)) => {
                    app.error(err.to_string());
                }
                Err(err) => {
                    log::error!("Unable to update comment {comment_id}: {err}");
                    app.error("댓글 수정에 실패했습니다.");
                }
            }
        }
    });

    let delete_comment = create_action(move |comment_id: &i64| {
        let comment_id = *comment_id;
        async move {
            let session = app.session.get_untracked();
            match usecases::delete_comment(&app.api(), &session, comment_id).await {
                Ok(()) => {
                    let removed = comments
                        .try_update(|list| usecases::remove_comment(list, comment_id))
                        .unwrap_or_default();
                    if removed {
                        update_comment_count(post, false);
                    }
                }
                Err(err) => {
                    log::error!("Unable to delete comment {comment_id}: {err}");
                    app.error("댓글 삭제에 실패했습니다.");
                }
            }
        }
    });

    // -- callbacks -- //

    let on_confirm = move || match dialog.try_update(DialogState::confirm).flatten() {
        Some(Pending::DeletePost) => delete_post.dispatch(()),
        Some(Pending::DeleteComment(id)) => delete_comment.dispatch(id),
        None => {}
    };
    let on_edit_comment = move |comment: &Comment| {
        editing.set(Some(comment.comment_id));
        editing_content.set(comment.content.clone());
    };

    // -- init -- //

    fetch_post.dispatch(());
    fetch_comments.dispatch(());

    let offset = local_offset();

    let article = move || match post.get() {
        None => view! { <div class="text-center py-20 text-[#8B9DA9]">"로딩 중..."</div> }.into_view(),
        Some(Err(msg)) => view! { <div class="text-center py-20 text-[#FF6B6B]">{ msg }</div> }.into_view(),
        Some(Ok(p)) => {
            let is_author = app.session.with(|s| s.owns(p.user_id));
            view! {
              <article class="bg-white rounded-xl p-8 mb-6">
                <div class="flex items-start justify-between mb-4">
                  <div>
                    <span class="inline-block px-3 py-1 bg-[#16E0B4]/10 text-[#16E0B4] text-sm font-medium rounded-lg mb-3">
                      { category_label(p.category) }
                    </span>
                    <h1 class="text-2xl font-bold text-[#0D1B2A] mb-2">{ p.title }</h1>
                    <div class="flex items-center gap-3 text-sm text-[#8B9DA9]">
                      <span>{ p.nickname }</span>
                      <span>{ format::date_time(&p.created_at, offset) }</span>
                    </div>
                  </div>
                  <Show when = move || is_author>
                    <div class="flex gap-2">
                      <a
                        href=Page::PostEdit.item(post_id)
                        class="px-3 py-2 text-[#8B9DA9] hover:text-[#16E0B4] hover:bg-[#16E0B4]/10 rounded-lg"
                      >
                        "수정"
                      </a>
                      <button
                        class="px-3 py-2 text-[#8B9DA9] hover:text-red-500 hover:bg-red-50 rounded-lg"
                        on:click = move |_| dialog.update(|d| d.open(usecases::delete_post_dialog(), Pending::DeletePost))
                      >
                        "삭제"
                      </button>
                    </div>
                  </Show>
                </div>
                <div class="text-[#0D1B2A] whitespace-pre-wrap mb-8">{ p.content }</div>
                <div class="flex items-center justify-center gap-4 pt-6 border-t border-[#E1E8ED]">
                  <button
                    class="px-6 py-3 rounded-xl border-2 border-[#E1E8ED] hover:border-[#16E0B4] hover:text-[#16E0B4]"
                    disabled = move || vote.pending().get()
                    on:click = move |_| vote.dispatch(VoteType::Upvote)
                  >
                    { format!("👍 추천 {}", p.upvote_count) }
                  </button>
                  <button
                    class="px-6 py-3 rounded-xl border-2 border-[#E1E8ED] hover:border-[#FF6B6B] hover:text-[#FF6B6B]"
                    disabled = move || vote.pending().get()
                    on:click = move |_| vote.dispatch(VoteType::Downvote)
                  >
                    { format!("👎 비추천 {}", p.downvote_count) }
                  </button>
                </div>
              </article>
            }.into_view()
        }
    };

    let comment_count = move || {
        post.with(|p| match p {
            Some(Ok(p)) => p.comment_count,
            _ => 0,
        })
    };

    view! {
      <div class="min-h-screen bg-[#F5F7FA] py-8">
        <div class="max-w-4xl mx-auto px-4">
          <a href=Page::Community.path() class="inline-block text-[#8B9DA9] hover:text-[#0D1B2A] mb-6">
            "← 목록으로"
          </a>

          { article }

          <section class="bg-white rounded-xl p-8">
            <h2 class="text-lg font-bold text-[#0D1B2A] mb-6">{ move || format!("댓글 {}", comment_count()) }</h2>

            <Show
              when = move || app.logged_in()
              fallback = || view! {
                <p class="mb-8 p-4 bg-[#F5F7FA] rounded-xl text-center text-[#8B9DA9]">
                  "댓글을 작성하려면 "
                  <a href=Page::Login.path() class="text-[#16E0B4] font-semibold">"로그인"</a>
                  "이 필요합니다."
                </p>
              }
            >
              <div class="mb-8">
                <textarea
                  class="w-full px-4 py-3 rounded-xl border-2 border-[#E1E8ED] focus:border-[#16E0B4] focus:outline-none resize-none"
                  rows="3"
                  placeholder="댓글을 입력하세요"
                  prop:value = move || new_comment.get()
                  on:input = move |ev| new_comment.set(event_target_value(&ev))
                ></textarea>
                <div class="flex justify-end mt-2">
                  <button
                    class="px-6 py-2 bg-[#16E0B4] text-white rounded-xl font-semibold hover:bg-[#12c9a0] disabled:opacity-50"
                    disabled = move || add_comment.pending().get()
                    on:click = move |_| add_comment.dispatch(())
                  >
                    "댓글 작성"
                  </button>
                </div>
              </div>
            </Show>

            <Show
              when = move || comments.with(|c| !c.is_empty())
              fallback = || view! { <p class="text-center py-8 text-[#8B9DA9]">"첫 댓글을 남겨보세요."</p> }
            >
              <ul class="space-y-4">
                <For
                  each = move || comments.get()
                  key = |c| (c.comment_id, c.content.clone())
                  let:comment
                >
                  <CommentItem
                    comment
                    editing
                    editing_content
                    on_edit = on_edit_comment
                    on_save = move |id| save_comment.dispatch(id)
                    on_delete = move |id| dialog.update(|d| d.open(usecases::delete_comment_dialog(), Pending::DeleteComment(id)))
                  />
                </For>
              </ul>
            </Show>
          </section>
        </div>

        <ConfirmDialogView
          dialog = Signal::derive(move || dialog.with(|d| d.dialog().cloned()))
          on_confirm
          on_cancel = move || dialog.update(DialogState::cancel)
        />
      </div>
    }
}

fn update_comment_count(post: RwSignal<Option<Result<Post, String>>>, added: bool) {
    post.update(|p| {
        if let Some(Ok(p)) = p {
            p.comment_count = if added {
                p.comment_count + 1
            } else {
                p.comment_count.saturating_sub(1)
            };
        }
    });
}

#[component]
fn CommentItem<E, S, D>(
    comment: Comment,
    editing: RwSignal<Option<i64>>,
    editing_content: RwSignal<String>,
    on_edit: E,
    on_save: S,
    on_delete: D,
) -> impl IntoView
where
    E: Fn(&Comment) + 'static + Copy,
    S: Fn(i64) + 'static + Copy,
    D: Fn(i64) + 'static + Copy,
{
    let app = use_app();
    let id = comment.comment_id;
    let is_author = app.session.with_untracked(|s| s.owns(comment.user_id));
    let is_editing = move || editing.get() == Some(id);
    let created = format::date_time(&comment.created_at, local_offset());
    let content = comment.content.clone();
    let comment = store_value(comment);

    view! {
      <li class="p-4 bg-[#F5F7FA] rounded-xl">
        <div class="flex items-center justify-between mb-2">
          <div class="flex items-center gap-3 text-sm">
            <span class="font-semibold text-[#0D1B2A]">{ comment.with_value(|c| c.nickname.clone()) }</span>
            <span class="text-[#8B9DA9]">{ created }</span>
          </div>
          <Show when = move || is_author && !is_editing()>
            <div class="flex gap-2 text-sm">
              <button
                class="text-[#8B9DA9] hover:text-[#16E0B4]"
                on:click = move |_| comment.with_value(on_edit)
              >
                "수정"
              </button>
              <button class="text-[#8B9DA9] hover:text-red-500" on:click = move |_| on_delete(id)>"삭제"</button>
            </div>
          </Show>
        </div>
        <Show
          when = is_editing
          fallback = move || view! { <p class="text-[#0D1B2A] whitespace-pre-wrap">{ content.clone() }</p> }
        >
          <textarea
            class="w-full px-4 py-3 rounded-xl border-2 border-[#E1E8ED] focus:border-[#16E0B4] focus:outline-none resize-none"
            rows="3"
            prop:value = move || editing_content.get()
            on:input = move |ev| editing_content.set(event_target_value(&ev))
          ></textarea>
          <div class="flex justify-end gap-2 mt-2">
            <button
              class="px-4 py-2 text-[#8B9DA9] hover:bg-[#E1E8ED] rounded-lg"
              on:click = move |_| {
                editing.set(None);
                editing_content.set(String::new());
              }
            >
              "취소"
            </button>
            <button
              class="px-4 py-2 bg-[#16E0B4] text-white rounded-lg font-semibold hover:bg-[#12c9a0]"
              on:click = move |_| on_save(id)
            >
              "저장"
            </button>
          </div>
        </Show>
      </li>
    }
}
