use leptos::*;

use sf_core::dialog::{ConfirmDialog, Severity};

const fn colors(severity: Severity) -> (&'static str, &'static str) {
    match severity {
        Severity::Danger => ("text-[#FF6B6B]", "bg-red-500 hover:bg-red-600"),
        Severity::Warning => ("text-[#FFA726]", "bg-[#FFA726] hover:bg-[#F57C00]"),
        Severity::Info => ("text-[#42A5F5]", "bg-[#42A5F5] hover:bg-[#1E88E5]"),
    }
}

/// A modal dialog asking to confirm an action.
///
/// Clicking the backdrop cancels.
#[component]
pub fn ConfirmDialogView<C, X>(
    dialog: Signal<Option<ConfirmDialog>>,
    on_confirm: C,
    on_cancel: X,
) -> impl IntoView
where
    C: Fn() + 'static + Copy,
    X: Fn() + 'static + Copy,
{
    move || {
        dialog.get().map(|dialog| {
            let ConfirmDialog {
                title,
                message,
                confirm_label,
                cancel_label,
                severity,
                info_only,
            } = dialog;
            let (icon, confirm_bg) = colors(severity);
            view! {
              <div
                class="fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4"
                on:click = move |_| on_cancel()
              >
                <div
                  class="bg-white rounded-2xl shadow-2xl max-w-md w-full p-6"
                  on:click = |ev| ev.stop_propagation()
                >
                  <div class=format!("text-4xl text-center mb-4 {icon}")>"!"</div>
                  <h3 class="text-xl font-bold text-[#0D1B2A] text-center mb-2">{ title }</h3>
                  <p class="text-[#8B9DA9] text-center mb-6">{ message }</p>
                  <div class="flex gap-3">
                    { (!info_only).then(|| view! {
                      <button
                        class="flex-1 px-6 py-3 rounded-xl border-2 border-[#E1E8ED] text-[#8B9DA9] font-semibold hover:bg-[#F5F7FA] transition-colors"
                        on:click = move |_| on_cancel()
                      >
                        { cancel_label }
                      </button>
                    })}
                    <button
                      class=format!("flex-1 px-6 py-3 rounded-xl text-white font-semibold transition-colors {confirm_bg}")
                      on:click = move |_| on_confirm()
                    >
                      { confirm_label }
                    </button>
                  </div>
                </div>
              </div>
            }
        })
    }
}
