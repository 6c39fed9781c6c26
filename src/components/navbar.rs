use leptos::*;
use leptos_router::*;

use sf_core::session::Session;

use crate::Page;

const LINK: &str = "hover:text-[#16E0B4] transition-colors";
const ACTIVE_LINK: &str = "hover:text-[#16E0B4] transition-colors text-[#16E0B4]";

#[component]
pub fn NavBar<F>(session: Signal<Session>, on_logout: F) -> impl IntoView
where
    F: Fn() + 'static + Copy,
{
    let (menu_open, set_menu_open) = create_signal(false);
    let close_menu = move || set_menu_open.set(false);
    let navigate = use_navigate();
    let logout = store_value(move || {
        on_logout();
        navigate(Page::Home.path(), NavigateOptions::default());
    });
    let on_logout = move || logout.with_value(|logout| logout());

    view! {
      <header class="bg-[#0D1B2A] text-white sticky top-0 z-50">
        <nav class="max-w-[1440px] mx-auto px-4 md:px-8 py-4">
          <div class="flex items-center justify-between">

            // Logo
            <A href=Page::Home.path() class="flex items-center gap-2 md:gap-3".to_string()>
              <div class="w-8 h-8 md:w-10 md:h-10 bg-[#16E0B4] rounded-lg"></div>
              <span class="font-bold tracking-tight text-sm md:text-base">"스포츠시설 검색"</span>
            </A>

            // Menu items
            <div class="hidden lg:flex items-center gap-8">
              <MainMenuItems on_select = move || {} />
            </div>
            <div class="hidden lg:flex items-center gap-4">
              <UserMenu session on_logout on_select = move || {} />
            </div>

            // Hamburger Icon
            <button
              class = {move ||
                if menu_open.get() {
                  "open block hamburger lg:hidden focus:outline-none"
                } else {
                  "block hamburger lg:hidden focus:outline-none"
                }
              }
              on:click = move |_| set_menu_open.update(|s| *s = !*s)
            >
              <span class="hamburger-top"></span>
              <span class="hamburger-middle"></span>
              <span class="hamburger-bottom"></span>
            </button>
          </div>

          // Mobile Menu
          <div class="lg:hidden">
            <menu
              class = {move ||
                if menu_open.get() {
                  "flex flex-col gap-4 pt-4 mt-4 border-t border-white/10"
                } else {
                  "hidden"
                }
              }>
              <MainMenuItems on_select = close_menu />
              <UserMenu session on_logout on_select = close_menu />
            </menu>
          </div>
        </nav>
      </header>
    }
}

#[component]
fn MainMenuItems<F>(on_select: F) -> impl IntoView
where
    F: Fn() + 'static + Copy,
{
    view! {
      <MenuItem page = Page::Home label = "홈" on_select />
      <MenuItem page = Page::Search label = "시설 검색" on_select />
      <MenuItem page = Page::Community label = "커뮤니티" on_select />
    }
}

#[component]
fn UserMenu<F, S>(session: Signal<Session>, on_logout: F, on_select: S) -> impl IntoView
where
    F: Fn() + 'static + Copy,
    S: Fn() + 'static + Copy,
{
    let logged_in = create_memo(move |_| session.with(Session::is_logged_in));

    view! {
      <MenuItem page = Page::MyPage label = "마이페이지" on_select />
      <Show
        when = move || logged_in.get()
        fallback = move || view! {
          <a
            href=Page::Login.path()
            class="px-4 py-2 bg-[#16E0B4] text-[#0D1B2A] rounded-lg hover:bg-[#14c9a0] transition-colors"
            on:click = move |_| on_select()
          >
            "로그인"
          </a>
        }
      >
        <button
          class="px-4 py-2 bg-[#FF6B6B] text-white rounded-lg hover:bg-[#ee5a5a] transition-colors"
          on:click = move |_| {
            on_select();
            on_logout();
          }
        >
          "로그아웃"
        </button>
      </Show>
    }
}

#[component]
fn MenuItem<F>(page: Page, label: &'static str, on_select: F) -> impl IntoView
where
    F: Fn() + 'static + Copy,
{
    let location = use_location();
    let active = create_memo(move |_| {
        location.pathname.with(|path| is_active(page, path))
    });

    view! {
      <a
        href=page.path()
        class=move || if active.get() { ACTIVE_LINK } else { LINK }
        on:click = move |_| on_select()
      >
        { label }
      </a>
    }
}

/// The community link stays active on all board pages.
fn is_active(page: Page, path: &str) -> bool {
    match page {
        Page::Community => path.starts_with(Page::Community.path()),
        _ => path == page.path(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_active_menu_item() {
        assert!(is_active(Page::Home, "/"));
        assert!(!is_active(Page::Home, "/search"));
        assert!(is_active(Page::Community, "/community/12"));
        assert!(is_active(Page::Community, "/community/edit/3"));
        assert!(!is_active(Page::Search, "/search/other"));
    }
}
