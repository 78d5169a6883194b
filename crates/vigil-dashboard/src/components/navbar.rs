//! Top Navigation Bar Component

use leptos::*;
use leptos_router::*;

use crate::components::icons::*;
use crate::components::table::StatusBadge;
use crate::control;
use crate::state::use_app_state;
use crate::types::DeviceCommand;

/// Top navigation bar with device command buttons and the live status badge.
#[component]
pub fn Navbar() -> impl IntoView {
    let state = use_app_state();

    let status_text = {
        let state = state.clone();
        Signal::derive(move || state.device_status.get().as_str().to_string())
    };
    let status_class = {
        let state = state.clone();
        Signal::derive(move || state.device_status.get().color_class().to_string())
    };

    let dispatch = {
        let state = state.clone();
        move |command: DeviceCommand| {
            let state = state.clone();
            spawn_local(async move {
                control::dispatch(state, command).await;
            });
        }
    };
    let on_system = {
        let dispatch = dispatch.clone();
        move |_| dispatch(DeviceCommand::ActivateSystem)
    };
    let on_buzzer = {
        let dispatch = dispatch.clone();
        move |_| dispatch(DeviceCommand::ActivateBuzzer)
    };
    let on_off = move |_| dispatch(DeviceCommand::Deactivate);

    let toggle_theme = {
        let state = state.clone();
        move |_| state.toggle_dark_mode()
    };
    let dark_mode = state.dark_mode;

    view! {
        <nav class="navbar">
            <div class="navbar-left">
                <A href="/" class="navbar-brand">
                    <IconShield size=IconSize::Lg class="navbar-logo".to_string() />
                    <span class="navbar-title">"Vigil"</span>
                </A>
                <div class="navbar-links">
                    <A href="/" class="nav-link" exact=true>
                        <IconActivity size=IconSize::Sm />
                        <span>"Dashboard"</span>
                    </A>
                    <A href="/history" class="nav-link">
                        <IconDatabase size=IconSize::Sm />
                        <span>"History"</span>
                    </A>
                </div>
            </div>

            <div class="navbar-right">
                <div class="navbar-status">
                    <StatusBadge status=status_text class=status_class />
                </div>
                <div class="navbar-actions">
                    <button class="btn btn-primary" on:click=on_system>
                        <IconZap size=IconSize::Sm />
                        <span>{DeviceCommand::ActivateSystem.label()}</span>
                    </button>
                    <button class="btn btn-secondary" on:click=on_buzzer>
                        <IconActivity size=IconSize::Sm />
                        <span>{DeviceCommand::ActivateBuzzer.label()}</span>
                    </button>
                    <button class="btn btn-ghost" on:click=on_off>
                        <IconXCircle size=IconSize::Sm />
                        <span>{DeviceCommand::Deactivate.label()}</span>
                    </button>
                </div>
                <button class="btn btn-ghost theme-toggle" on:click=toggle_theme>
                    <Show
                        when=move || dark_mode.get()
                        fallback=|| view! { <IconMoon size=IconSize::Sm /> }
                    >
                        <IconSun size=IconSize::Sm />
                    </Show>
                </button>
            </div>
        </nav>
    }
}
