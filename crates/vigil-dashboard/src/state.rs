//! Global State Management for the Vigil Dashboard
//!
//! Provides reactive state signals for the application. All state is
//! explicitly constructed and provided through context; nothing ambient.

use gloo_storage::{LocalStorage, Storage};
use leptos::*;

use crate::types::{ChartSelection, DeviceStatus, Reading};

/// Key for the persisted theme preference in localStorage
const DARK_MODE_KEY: &str = "vigil_dark_mode";

/// Toast notification type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Error,
    Info,
}

impl ToastType {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Error => "toast-error",
            Self::Info => "toast-info",
        }
    }
}

/// Toast notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub toast_type: ToastType,
    pub title: String,
    pub message: String,
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Last command the backend acknowledged; optimistic, never polled.
    pub device_status: RwSignal<DeviceStatus>,
    /// Current theme (light/dark)
    pub dark_mode: RwSignal<bool>,
    /// Active toast notifications
    pub toasts: RwSignal<Vec<Toast>>,
    /// Toast ID counter
    toast_counter: RwSignal<u64>,
}

impl AppState {
    pub fn new() -> Self {
        let stored_dark: bool = LocalStorage::get(DARK_MODE_KEY).unwrap_or(false);

        Self {
            device_status: RwSignal::new(DeviceStatus::default()),
            dark_mode: RwSignal::new(stored_dark),
            toasts: RwSignal::new(Vec::new()),
            toast_counter: RwSignal::new(0),
        }
    }

    /// Toggle dark mode and persist the preference.
    pub fn toggle_dark_mode(&self) {
        self.dark_mode.update(|v| *v = !*v);
        let _ = LocalStorage::set(DARK_MODE_KEY, self.dark_mode.get_untracked());
    }

    /// Show a toast notification, auto-removed after five seconds.
    pub fn show_toast(
        &self,
        toast_type: ToastType,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.toast_counter.update(|c| *c += 1);
        let id = self.toast_counter.get_untracked();

        let toast = Toast {
            id,
            toast_type,
            title: title.into(),
            message: message.into(),
        };

        self.toasts.update(|toasts| toasts.push(toast));

        let toasts = self.toasts;
        set_timeout(
            move || {
                toasts.update(|t| t.retain(|toast| toast.id != id));
            },
            std::time::Duration::from_millis(5000),
        );
    }

    pub fn toast_success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.show_toast(ToastType::Success, title, message);
    }

    pub fn toast_error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.show_toast(ToastType::Error, title, message);
    }

    /// Remove a specific toast
    pub fn remove_toast(&self, id: u64) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide app state context
pub fn provide_app_state() -> AppState {
    let state = AppState::new();
    provide_context(state.clone());
    state
}

/// Use app state from context
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

// ============================================================================
// Dashboard State
// ============================================================================

/// The three poll-fed data buckets plus the active chart selection.
///
/// Buckets are mutated only by the poller; the selection only by the chart
/// switcher. Each bucket is replaced wholesale on a successful refresh and
/// left untouched on a failed one, so a failure in one source never corrupts
/// another.
#[derive(Clone)]
pub struct DashboardState {
    /// Most recent readings (bounded small count).
    pub latest: RwSignal<Vec<Reading>>,
    /// Full reading history, timestamp-ascending as the backend returns it.
    pub history: RwSignal<Vec<Reading>>,
    /// Intrusion event count; `None` until the first successful fetch.
    pub attack_count: RwSignal<Option<u64>>,
    /// Exactly one chart variant is active at a time.
    pub selection: RwSignal<ChartSelection>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            latest: RwSignal::new(Vec::new()),
            history: RwSignal::new(Vec::new()),
            attack_count: RwSignal::new(None),
            selection: RwSignal::new(ChartSelection::default()),
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide dashboard state context
pub fn provide_dashboard_state() -> DashboardState {
    let state = DashboardState::new();
    provide_context(state.clone());
    state
}

/// Use dashboard state from context
pub fn use_dashboard_state() -> DashboardState {
    expect_context::<DashboardState>()
}
