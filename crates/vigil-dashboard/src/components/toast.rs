//! Toast Notification Components

use crate::components::icons::*;
use crate::state::{use_app_state, Toast, ToastType};
use leptos::*;

/// Toast container component - renders all active toasts
#[component]
pub fn ToastContainer() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="toast-container">
            <For
                each=move || state.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let state = state.clone();
                    view! { <ToastItem toast=toast on_close=Callback::new(move |_| state.remove_toast(id)) /> }
                }
            />
        </div>
    }
}

/// Individual toast item
#[component]
fn ToastItem(toast: Toast, on_close: Callback<()>) -> impl IntoView {
    let visible = create_rw_signal(true);
    let exiting = create_rw_signal(false);

    let handle_close = move |_| {
        exiting.set(true);
        set_timeout(
            move || {
                visible.set(false);
                on_close.call(());
            },
            std::time::Duration::from_millis(300),
        );
    };

    let toast_type = toast.toast_type;
    let title = store_value(toast.title);
    let message = store_value(toast.message);

    view! {
        <Show when=move || visible.get()>
            <div
                class=move || format!(
                    "toast {} {}",
                    toast_type.class(),
                    if exiting.get() { "toast-exit" } else { "toast-enter" }
                )
            >
                <div class="toast-icon">
                    {match toast_type {
                        ToastType::Success => view! { <IconCheckCircle size=IconSize::Md /> }.into_view(),
                        ToastType::Error => view! { <IconXCircle size=IconSize::Md /> }.into_view(),
                        ToastType::Info => view! { <IconInfo size=IconSize::Md /> }.into_view(),
                    }}
                </div>
                <div class="toast-content">
                    <div class="toast-title">{title.get_value()}</div>
                    <div class="toast-message">{message.get_value()}</div>
                </div>
                <button class="toast-close" on:click=handle_close>
                    <IconX size=IconSize::Sm />
                </button>
            </div>
        </Show>
    }
}
