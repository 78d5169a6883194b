//! Main Dashboard Page

use leptos::*;

use crate::components::charts::{DonutChart, GroupedBarChart, TrendChart};
use crate::components::{icons::*, table::*};
use crate::poller::Poller;
use crate::series::{self, TrendFields};
use crate::state::use_dashboard_state;
use crate::types::{ChartSelection, Reading};

/// Main dashboard page: live stat cards, the chart switcher, and the
/// latest-readings table. Polling runs for exactly as long as this page is
/// mounted.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_dashboard_state();

    let poller = Poller::start(state.clone());
    on_cleanup(move || poller.dispose());

    let latest = state.latest;
    let history = state.history;
    let attack_count = state.attack_count;
    let selection = state.selection;

    let latest_count = move || latest.get().len().to_string();
    let history_count = move || history.get().len().to_string();
    let attack_display = move || match attack_count.get() {
        Some(count) => count.to_string(),
        None => "—".to_string(),
    };
    let attack_subtitle = move || match attack_count.get() {
        Some(_) => "intrusions detected",
        None => "waiting for first fetch",
    };
    let last_seen = move || {
        latest
            .get()
            .last()
            .map(|r| series::format_timestamp(r.date))
            .unwrap_or_else(|| "—".to_string())
    };

    view! {
        <div class="dashboard-page">
            <div class="page-header">
                <h1>"Dashboard"</h1>
                <p class="page-subtitle">"Live sensor readings, refreshed every 10 seconds"</p>
            </div>

            // Stats Cards
            <div class="stats-grid">
                <StatsCard
                    title="Attack Count"
                    value=attack_display
                    subtitle=Signal::derive(move || attack_subtitle().to_string())
                    icon=view! { <IconShield size=IconSize::Lg /> }
                    color="error"
                />
                <StatsCard
                    title="Latest Readings"
                    value=latest_count
                    subtitle=Signal::derive(|| "in current snapshot".to_string())
                    icon=view! { <IconActivity size=IconSize::Lg /> }
                    color="teal"
                />
                <StatsCard
                    title="History Records"
                    value=history_count
                    subtitle=Signal::derive(|| "stored samples".to_string())
                    icon=view! { <IconDatabase size=IconSize::Lg /> }
                    color="info"
                />
                <StatsCard
                    title="Last Sample"
                    value=last_seen
                    subtitle=Signal::derive(|| "device local time".to_string())
                    icon=view! { <IconLineChart size=IconSize::Lg /> }
                    color="terracotta"
                />
            </div>

            <div class="dashboard-grid">
                // Chart card with the view switcher
                <div class="card chart-card">
                    <div class="card-header">
                        <h2>"Sensor Charts"</h2>
                        <div class="chart-switcher">
                            {ChartSelection::ALL.iter().copied().map(|variant| {
                                view! { <ChartSwitchButton variant=variant /> }
                            }).collect_view()}
                        </div>
                    </div>
                    <div class="card-body">
                        <ActiveChart />
                    </div>
                </div>

                // Latest readings table
                <div class="card">
                    <div class="card-header">
                        <h2>"Latest Readings"</h2>
                    </div>
                    <div class="card-body">
                        <DataTable
                            columns=reading_columns()
                            data=Signal::derive(move || latest.get())
                            empty_message="No readings received yet".to_string()
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}

/// One button of the chart switcher. Switching only flips the selection
/// signal; the buckets it renders from are untouched.
#[component]
fn ChartSwitchButton(variant: ChartSelection) -> impl IntoView {
    let state = use_dashboard_state();
    let selection = state.selection;

    let on_select = move |_| selection.set(variant);

    view! {
        <button
            class=move || {
                if selection.get() == variant {
                    "btn btn-sm btn-primary"
                } else {
                    "btn btn-sm btn-ghost"
                }
            }
            on:click=on_select
        >
            {match variant {
                ChartSelection::Aggregate => view! { <IconPieChart size=IconSize::Sm /> }.into_view(),
                ChartSelection::Snapshot => view! { <IconBarChart size=IconSize::Sm /> }.into_view(),
                ChartSelection::TrendLdrVr | ChartSelection::TrendTempDistance => {
                    view! { <IconLineChart size=IconSize::Sm /> }.into_view()
                }
            }}
            <span>{variant.label()}</span>
        </button>
    }
}

/// The chart matching the active selection, or an explicit empty state when
/// the backing bucket has no data yet.
#[component]
fn ActiveChart() -> impl IntoView {
    let state = use_dashboard_state();
    let latest = state.latest;
    let history = state.history;
    let selection = state.selection;

    view! {
        {move || match selection.get() {
            ChartSelection::Aggregate => {
                let slices = create_memo(move |_| series::aggregate_totals(&latest.get()));
                view! {
                    <Show
                        when=move || slices.get().is_some()
                        fallback=|| view! { <ChartEmptyState message="No snapshot data yet" /> }
                    >
                        <div class="donut-wrapper">
                            <DonutChart data=Signal::derive(move || slices.get().unwrap_or_default()) />
                            <div class="donut-legend">
                                {move || slices.get().unwrap_or_default().into_iter().map(|(label, value, color)| {
                                    view! {
                                        <div class="legend-item">
                                            <span class="legend-swatch" style=format!("background: {}", color)></span>
                                            <span class="legend-label">{label}</span>
                                            <span class="legend-value">{format!("{:.1}", value)}</span>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    </Show>
                }.into_view()
            }
            ChartSelection::Snapshot => {
                let snapshot = create_memo(move |_| series::snapshot_comparison(&latest.get()));
                view! {
                    <Show
                        when=move || snapshot.get().is_some()
                        fallback=|| view! { <ChartEmptyState message="No snapshot data yet" /> }
                    >
                        <GroupedBarChart series=Signal::derive(move || snapshot.get().unwrap_or_default()) />
                    </Show>
                }.into_view()
            }
            ChartSelection::TrendLdrVr => {
                let trend = create_memo(move |_| series::trend(&history.get(), TrendFields::LdrVr));
                view! {
                    <Show
                        when=move || trend.get().is_some()
                        fallback=|| view! { <ChartEmptyState message="No history yet" /> }
                    >
                        <TrendChart series=Signal::derive(move || trend.get().unwrap_or_default()) />
                    </Show>
                }.into_view()
            }
            ChartSelection::TrendTempDistance => {
                let trend = create_memo(move |_| series::trend(&history.get(), TrendFields::TempDistance));
                view! {
                    <Show
                        when=move || trend.get().is_some()
                        fallback=|| view! { <ChartEmptyState message="No history yet" /> }
                    >
                        <TrendChart series=Signal::derive(move || trend.get().unwrap_or_default()) />
                    </Show>
                }.into_view()
            }
        }}
    }
}

/// Empty state shown instead of a chart when its bucket is still empty.
#[component]
fn ChartEmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="empty-state">
            <IconBarChart size=IconSize::Xl class="text-muted".to_string() />
            <p>{message}</p>
        </div>
    }
}

/// Stats card component
#[component]
fn StatsCard(
    #[prop(into)] title: String,
    value: impl Fn() -> String + 'static,
    #[prop(into)] subtitle: Signal<String>,
    icon: View,
    #[prop(into)] color: String,
) -> impl IntoView {
    view! {
        <div class=format!("stats-card stats-card-{}", color)>
            <div class="stats-icon">{icon}</div>
            <div class="stats-content">
                <span class="stats-value">{value}</span>
                <span class="stats-title">{title}</span>
                <span class="stats-subtitle">{move || subtitle.get()}</span>
            </div>
        </div>
    }
}

/// Column set shared by the latest-readings and history tables.
pub(crate) fn reading_columns() -> Vec<TableColumn<Reading>> {
    vec![
        TableColumn::new("ID", |r: &Reading| r.id.to_string().into_view()),
        TableColumn::new("LDR", |r: &Reading| format!("{:.1}", r.ldr).into_view()),
        TableColumn::new("VR", |r: &Reading| format!("{:.1}", r.vr).into_view()),
        TableColumn::new("Temp (°C)", |r: &Reading| {
            format!("{:.1}", r.temp).into_view()
        }),
        TableColumn::new("Distance (cm)", |r: &Reading| {
            format!("{:.1}", r.distance).into_view()
        }),
        TableColumn::new("Recorded At", |r: &Reading| {
            series::format_timestamp(r.date).into_view()
        }),
    ]
}
