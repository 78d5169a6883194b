//! SVG Chart Components
//!
//! Hand-rolled chart widgets for the dashboard's three visualization
//! families: a doughnut for aggregate totals, grouped bars for per-reading
//! snapshots, and multi-line trends with timestamp labels. All of them take
//! already-transformed series; no data shaping happens here.

use leptos::*;

use crate::series::{SnapshotSeries, TrendSeries};

/// Shared chart dimensions.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 300,
            padding: 40,
        }
    }
}

/// Y-axis bounds over every dataset, padded 5% so lines don't hug the frame.
fn value_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::MAX;
    let mut max = f64::MIN;
    let mut any = false;

    for v in values {
        min = min.min(v);
        max = max.max(v);
        any = true;
    }
    if !any {
        return (0.0, 1.0);
    }

    let range = max - min;
    if range > 0.0 {
        (min - range * 0.05, max + range * 0.05)
    } else {
        (min - 1.0, max + 1.0)
    }
}

/// Multi-line trend chart. One x position per label; every dataset is
/// expected to carry exactly `labels.len()` values.
#[component]
pub fn TrendChart(
    #[prop(into)] series: MaybeSignal<TrendSeries>,
    #[prop(default = ChartConfig::default())] config: ChartConfig,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let ChartConfig {
        width,
        height,
        padding,
    } = config;

    let series_for_plot = series.clone();
    let series_for_axis = series.clone();
    let series_for_legend = series;

    view! {
        <svg
            class=format!("chart trend-chart {}", class)
            viewBox=format!("0 0 {} {}", width, height)
            preserveAspectRatio="xMidYMid meet"
        >
            <rect x="0" y="0" width=width height=height fill="var(--card-bg)" rx="8" />

            // Grid and axis labels
            {move || {
                let s = series_for_axis.get();
                if s.labels.is_empty() {
                    return view! { <g></g> }.into_view();
                }

                let (y_min, y_max) = value_bounds(
                    s.datasets.iter().flat_map(|d| d.values.iter().copied()),
                );
                let chart_w = (width - 2 * padding) as f64;
                let chart_h = (height - 2 * padding) as f64;

                let h_lines: Vec<_> = (0..=4).map(|i| {
                    let y = padding as f64 + (i as f64 / 4.0) * chart_h;
                    let value = y_max - (i as f64 / 4.0) * (y_max - y_min);
                    view! {
                        <g>
                            <line
                                x1=padding
                                y1=y
                                x2=width - padding
                                y2=y
                                stroke="var(--text-muted)"
                                stroke-width="0.5"
                                stroke-dasharray="4,4"
                                opacity="0.3"
                            />
                            <text
                                x=padding - 8
                                y=y + 4.0
                                text-anchor="end"
                                font-size="10"
                                fill="var(--text-muted)"
                            >
                                {format!("{:.1}", value)}
                            </text>
                        </g>
                    }
                }).collect();

                // At most six x ticks so long histories stay readable.
                let n = s.labels.len();
                let step = (n / 6).max(1);
                let x_ticks: Vec<_> = s.labels.iter().enumerate()
                    .filter(|(i, _)| i % step == 0)
                    .map(|(i, label)| {
                        let x = if n > 1 {
                            padding as f64 + (i as f64 / (n - 1) as f64) * chart_w
                        } else {
                            padding as f64 + chart_w / 2.0
                        };
                        view! {
                            <text
                                x=x
                                y=height - padding + 16
                                text-anchor="middle"
                                font-size="9"
                                fill="var(--text-muted)"
                            >
                                {label.clone()}
                            </text>
                        }
                    }).collect();

                view! { <g class="grid">{h_lines}{x_ticks}</g> }.into_view()
            }}

            // Lines and points
            {move || {
                let s = series_for_plot.get();
                if s.labels.is_empty() {
                    return view! { <g></g> }.into_view();
                }

                let (y_min, y_max) = value_bounds(
                    s.datasets.iter().flat_map(|d| d.values.iter().copied()),
                );
                let chart_w = (width - 2 * padding) as f64;
                let chart_h = (height - 2 * padding) as f64;
                let n = s.labels.len();

                let to_svg = move |i: usize, v: f64| {
                    let x = if n > 1 {
                        padding as f64 + (i as f64 / (n - 1) as f64) * chart_w
                    } else {
                        padding as f64 + chart_w / 2.0
                    };
                    let y = padding as f64 + chart_h
                        - ((v - y_min) / (y_max - y_min)) * chart_h;
                    (x, y)
                };

                let lines: Vec<_> = s.datasets.iter().map(|ds| {
                    let mut path = String::new();
                    for (i, v) in ds.values.iter().enumerate() {
                        let (x, y) = to_svg(i, *v);
                        if i == 0 {
                            path.push_str(&format!("M {} {}", x, y));
                        } else {
                            path.push_str(&format!(" L {} {}", x, y));
                        }
                    }

                    let points: Vec<_> = ds.values.iter().enumerate().map(|(i, v)| {
                        let (x, y) = to_svg(i, *v);
                        let tooltip = format!(
                            "{} — {}: {:.1}",
                            s.labels.get(i).cloned().unwrap_or_default(),
                            ds.name,
                            v
                        );
                        let color = ds.color.clone();
                        view! {
                            <circle
                                cx=x
                                cy=y
                                r="3"
                                fill=color
                                stroke="var(--card-bg)"
                                stroke-width="1.5"
                                class="chart-point"
                            >
                                <title>{tooltip}</title>
                            </circle>
                        }
                    }).collect();

                    let color = ds.color.clone();
                    view! {
                        <g class="series">
                            <path
                                d=path
                                fill="none"
                                stroke=color
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            />
                            {points}
                        </g>
                    }
                }).collect();

                view! { <g class="series-group">{lines}</g> }.into_view()
            }}

            // Legend
            {move || {
                let s = series_for_legend.get();
                let items: Vec<_> = s.datasets.iter().enumerate().map(|(i, ds)| {
                    let x = padding + (i as u32 * 110);
                    let color = ds.color.clone();
                    let name = ds.name.clone();
                    view! {
                        <g transform=format!("translate({}, {})", x, height - 12)>
                            <rect x="0" y="0" width="12" height="12" fill=color rx="2" />
                            <text x="16" y="10" font-size="11" fill="var(--text-secondary)">{name}</text>
                        </g>
                    }
                }).collect();
                view! { <g class="legend">{items}</g> }
            }}
        </svg>
    }
}

/// Grouped bar chart: one group per label, one bar per dataset within each
/// group.
#[component]
pub fn GroupedBarChart(
    #[prop(into)] series: MaybeSignal<SnapshotSeries>,
    #[prop(default = ChartConfig::default())] config: ChartConfig,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let ChartConfig {
        width,
        height,
        padding,
    } = config;

    let series_for_bars = series.clone();
    let series_for_legend = series;

    view! {
        <svg
            class=format!("chart grouped-bar-chart {}", class)
            viewBox=format!("0 0 {} {}", width, height)
            preserveAspectRatio="xMidYMid meet"
        >
            <rect x="0" y="0" width=width height=height fill="var(--card-bg)" rx="8" />

            {move || {
                let s = series_for_bars.get();
                if s.labels.is_empty() || s.datasets.is_empty() {
                    return view! { <g></g> }.into_view();
                }

                let max_value = s
                    .datasets
                    .iter()
                    .flat_map(|d| d.values.iter().copied())
                    .fold(0.0_f64, f64::max);
                let chart_w = (width - 2 * padding) as f64;
                let chart_h = (height - 2 * padding) as f64;

                let group_w = chart_w / s.labels.len() as f64;
                let bar_w = (group_w * 0.8) / s.datasets.len() as f64;

                let groups: Vec<_> = s.labels.iter().enumerate().map(|(gi, label)| {
                    let group_x = padding as f64 + gi as f64 * group_w + group_w * 0.1;

                    let bars: Vec<_> = s.datasets.iter().enumerate().map(|(di, ds)| {
                        let value = ds.values.get(gi).copied().unwrap_or(0.0);
                        let bar_h = if max_value > 0.0 {
                            (value / max_value) * chart_h
                        } else {
                            0.0
                        };
                        let x = group_x + di as f64 * bar_w;
                        let y = padding as f64 + chart_h - bar_h;
                        let color = ds.color.clone();
                        let tooltip = format!("{} {}: {:.1}", ds.name, label, value);

                        view! {
                            <rect
                                x=x
                                y=y
                                width=bar_w * 0.9
                                height=bar_h
                                fill=color
                                rx="3"
                                class="bar-rect"
                            >
                                <title>{tooltip}</title>
                            </rect>
                        }
                    }).collect();

                    let label_x = group_x + (s.datasets.len() as f64 * bar_w) / 2.0;
                    view! {
                        <g class="bar-group">
                            {bars}
                            <text
                                x=label_x
                                y=height as f64 - padding as f64 + 15.0
                                text-anchor="middle"
                                font-size="11"
                                fill="var(--text-muted)"
                            >
                                {label.clone()}
                            </text>
                        </g>
                    }
                }).collect();

                view! { <g class="bars">{groups}</g> }.into_view()
            }}

            {move || {
                let s = series_for_legend.get();
                let items: Vec<_> = s.datasets.iter().enumerate().map(|(i, ds)| {
                    let x = padding + (i as u32 * 70);
                    let color = ds.color.clone();
                    let name = ds.name.clone();
                    view! {
                        <g transform=format!("translate({}, {})", x, height - 12)>
                            <rect x="0" y="0" width="12" height="12" fill=color rx="2" />
                            <text x="16" y="10" font-size="11" fill="var(--text-secondary)">{name}</text>
                        </g>
                    }
                }).collect();
                view! { <g class="legend">{items}</g> }
            }}
        </svg>
    }
}

/// Doughnut chart over `(label, value, color)` slices, with the grand total
/// in the cutout.
#[component]
pub fn DonutChart(
    #[prop(into)] data: MaybeSignal<Vec<(String, f64, String)>>,
    #[prop(default = 220)] size: u32,
    #[prop(default = 30)] thickness: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let radius = (size / 2 - thickness) as f64;
    let center = size as f64 / 2.0;

    let data_for_segments = data.clone();
    let data_for_total = data;

    view! {
        <svg
            class=format!("chart donut-chart {}", class)
            viewBox=format!("0 0 {} {}", size, size)
            preserveAspectRatio="xMidYMid meet"
        >
            {move || {
                let slices = data_for_segments.get();
                let total: f64 = slices.iter().map(|(_, v, _)| *v).sum();
                if total == 0.0 {
                    return view! { <g></g> }.into_view();
                }

                let mut start_angle = -90.0_f64;
                let segments: Vec<_> = slices.iter().map(|(label, value, color)| {
                    let angle = (*value / total) * 360.0;
                    let end_angle = start_angle + angle;

                    let start_rad = start_angle.to_radians();
                    let end_rad = end_angle.to_radians();

                    let x1 = center + radius * start_rad.cos();
                    let y1 = center + radius * start_rad.sin();
                    let x2 = center + radius * end_rad.cos();
                    let y2 = center + radius * end_rad.sin();

                    let large_arc = if angle > 180.0 { 1 } else { 0 };
                    let path = format!(
                        "M {} {} A {} {} 0 {} 1 {} {}",
                        x1, y1, radius, radius, large_arc, x2, y2
                    );

                    let percentage = (*value / total) * 100.0;
                    let tooltip = format!("{}: {:.1} ({:.1}%)", label, value, percentage);
                    let color = color.clone();

                    start_angle = end_angle;

                    view! {
                        <path
                            d=path
                            fill="none"
                            stroke=color
                            stroke-width=thickness
                            stroke-linecap="butt"
                            class="donut-segment"
                        >
                            <title>{tooltip}</title>
                        </path>
                    }
                }).collect();

                view! { <g class="segments">{segments}</g> }.into_view()
            }}

            <text
                x=center
                y=center
                text-anchor="middle"
                dominant-baseline="middle"
                font-size="16"
                font-weight="600"
                fill="var(--text-primary)"
            >
                {move || {
                    let total: f64 = data_for_total.get().iter().map(|(_, v, _)| *v).sum();
                    format!("{:.0}", total)
                }}
            </text>
        </svg>
    }
}
