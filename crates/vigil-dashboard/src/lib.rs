//! Vigil Dashboard - Leptos/WASM Frontend
//!
//! Browser client for a home-security sensor node: live readings, intrusion
//! count, device control, and a small set of chart views over the same data.

use leptos::*;
use leptos_router::*;

pub mod api;
pub mod components;
pub mod control;
pub mod pages;
pub mod poller;
pub mod series;
pub mod state;
pub mod types;

use components::navbar::Navbar;
use components::toast::ToastContainer;
use pages::{dashboard::DashboardPage, history::HistoryPage};
use state::{provide_app_state, provide_dashboard_state};

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state
    let _app = provide_app_state();
    let _dashboard = provide_dashboard_state();

    let app = state::use_app_state();
    let theme_class = move || {
        if app.dark_mode.get() {
            "app theme-dark"
        } else {
            "app theme-light"
        }
    };

    view! {
        <Router>
            <div class=theme_class>
                <Navbar />
                <main class="app-main">
                    <Routes>
                        <Route path="/" view=DashboardPage />
                        <Route path="/history" view=HistoryPage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
                <ToastContainer />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <div class="not-found-content">
                <h1>"404"</h1>
                <h2>"Page Not Found"</h2>
                <p>"The page you're looking for doesn't exist or has been moved."</p>
                <A href="/" class="btn btn-primary">
                    "Go Home"
                </A>
            </div>
        </div>
    }
}

/// WASM entry point
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize tracing for WASM
    tracing_wasm::set_as_global_default();

    // Mount the app
    mount_to_body(App);
}
