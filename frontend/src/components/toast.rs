//! 全局 toast
//!
//! 核心层产生的 [`Notice`] 统一从这里展示，几秒后自动消失。

use civicsync::{Notice, NoticeLevel};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use uuid::Uuid;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, Copy)]
pub struct ToastContext {
    notices: RwSignal<Vec<Notice>>,
}

impl ToastContext {
    pub fn push(&self, notice: Notice) {
        let id = notice.id;
        let notices = self.notices;
        notices.update(|list| list.push(notice));
        Timeout::new(DISMISS_AFTER_MS, move || dismiss(notices, id)).forget();
    }
}

fn dismiss(notices: RwSignal<Vec<Notice>>, id: Uuid) {
    // 页面已卸载时信号可能已被释放
    let _ = notices.try_update(|list| list.retain(|n| n.id != id));
}

pub fn provide_toasts() -> ToastContext {
    let ctx = ToastContext {
        notices: RwSignal::new(Vec::new()),
    };
    provide_context(ctx);
    ctx
}

pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided by App")
}

fn alert_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "alert alert-info shadow-lg",
        NoticeLevel::Success => "alert alert-success shadow-lg",
        NoticeLevel::Warning => "alert alert-warning shadow-lg",
        NoticeLevel::Error => "alert alert-error shadow-lg",
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let ToastContext { notices } = use_toast();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div role="alert" class=alert_class(notice.level)>
                            <div>
                                <h3 class="font-bold">{notice.title}</h3>
                                <div class="text-sm">{notice.description}</div>
                            </div>
                            <button
                                class="btn btn-ghost btn-xs"
                                on:click=move |_| dismiss(notices, id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
