//! Notice Toast Component
//!
//! Shows the current notice; `AppContext::show_notice` handles dismissal.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NoticeToast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let toast_class = move || match ctx.notice.get() {
        Some(notice) if notice.is_error() => "success-message show error",
        Some(_) => "success-message show",
        None => "success-message",
    };

    view! {
        <div class=toast_class role="status">
            {move || ctx.notice.get().map(|notice| notice.text)}
        </div>
    }
}
