//! Reading History Page

use leptos::*;

use crate::api;
use crate::components::{spinner::*, table::*};
use crate::pages::dashboard::reading_columns;
use crate::types::Reading;

/// Full history table, fetched once on mount. No polling here; operators
/// reload or revisit for fresh data.
#[component]
pub fn HistoryPage() -> impl IntoView {
    let (loading, set_loading) = create_signal(true);
    let (readings, set_readings) = create_signal::<Vec<Reading>>(Vec::new());
    let (error, set_error) = create_signal::<Option<String>>(None);

    create_effect(move |_| {
        spawn_local(async move {
            match api::all_data().await {
                Ok(data) => set_readings.set(data),
                Err(e) => {
                    tracing::warn!(error = %e, "history fetch failed");
                    set_error.set(Some(e.message));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="history-page">
            <div class="page-header">
                <h1>"History"</h1>
                <p class="page-subtitle">
                    {move || format!("{} recorded samples", readings.get().len())}
                </p>
            </div>

            <Show when=move || loading.get()>
                <div class="loading-state">
                    <Spinner size=SpinnerSize::Lg />
                    <p>"Loading history..."</p>
                </div>
            </Show>

            <Show when=move || !loading.get()>
                <Show when=move || error.get().is_some()>
                    <div class="alert alert-error">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>

                <div class="card">
                    <div class="card-body">
                        <DataTable
                            columns=reading_columns()
                            data=Signal::derive(move || readings.get())
                            empty_message="No samples recorded yet".to_string()
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}
