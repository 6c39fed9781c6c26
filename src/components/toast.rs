use leptos::*;

use sf_core::notification::{ToastKind, Toasts};

#[component]
pub fn ToastView(toasts: RwSignal<Toasts>) -> impl IntoView {
    let current = create_memo(move |_| toasts.with(|t| t.current().cloned()));

    move || {
        current.get().map(|toast| {
            let id = toast.id;
            let border = match toast.kind {
                ToastKind::Success => "border-[#16E0B4]",
                ToastKind::Error => "border-[#FF6B6B]",
            };
            view! {
              <div class="fixed top-24 left-1/2 -translate-x-1/2 z-[100]">
                <div class=format!("bg-white rounded-2xl shadow-2xl border-2 {border} px-6 py-4 flex items-center gap-3 min-w-[300px]")>
                  <p class="flex-1 font-semibold text-[#0D1B2A]">{ toast.message }</p>
                  <button
                    class="text-[#8B9DA9] hover:text-[#0D1B2A] transition-colors"
                    on:click = move |_| toasts.update(|t| {
                        t.dismiss(id);
                    })
                  >
                    "✕"
                  </button>
                </div>
              </div>
            }
        })
    }
}
