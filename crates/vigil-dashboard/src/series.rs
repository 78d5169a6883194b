//! Series Transformer
//!
//! Pure functions mapping raw reading buckets into chart-ready series.
//! No mutation of inputs, no hidden state: identical buckets always yield
//! structurally identical output. Empty buckets yield `None` so the caller
//! renders an explicit empty state instead of a zero-filled chart.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};

use crate::types::Reading;

/// Display timezone for all operator-facing timestamps (UTC+7, Bangkok).
/// The underlying values are never mutated; this is rendering only.
const DISPLAY_UTC_OFFSET_SECS: i32 = 7 * 3600;

/// Years are shown in the Buddhist era, as the site's operators expect.
const BUDDHIST_ERA_OFFSET: i32 = 543;

// ============================================================================
// Chart-ready structures
// ============================================================================

/// One dataset of a grouped-bar snapshot comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotDataset {
    /// Dataset name shown in the legend (the reading it came from).
    pub name: String,
    /// One value per label, positionally aligned.
    pub values: Vec<f64>,
    pub color: String,
}

/// Grouped-bar series: fixed field-name labels, one dataset per reading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<SnapshotDataset>,
}

/// One line of a trend chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendDataset {
    pub name: String,
    /// One value per label, positionally aligned; no gaps, no interpolation.
    pub values: Vec<f64>,
    pub color: String,
}

/// Time-trend series: one localized label per reading, one dataset per
/// tracked field. Every dataset has exactly `labels.len()` values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<TrendDataset>,
}

/// Which field pair a trend chart tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendFields {
    LdrVr,
    TempDistance,
}

// ============================================================================
// Transformations
// ============================================================================

/// Aggregate view: per-field sums across the latest snapshot, in the donut
/// chart's `(label, value, color)` input shape.
pub fn aggregate_totals(latest: &[Reading]) -> Option<Vec<(String, f64, String)>> {
    if latest.is_empty() {
        return None;
    }

    let temp_total: f64 = latest.iter().map(|r| r.temp).sum();
    let distance_total: f64 = latest.iter().map(|r| r.distance).sum();

    Some(vec![
        (
            "Temperature".to_string(),
            temp_total,
            "var(--terracotta)".to_string(),
        ),
        (
            "Distance".to_string(),
            distance_total,
            "var(--error)".to_string(),
        ),
    ])
}

/// Snapshot-comparison view: for each reading in the latest snapshot, one
/// dataset carrying that reading's LDR and VR values. Labels are the fixed
/// field names, not timestamps.
pub fn snapshot_comparison(latest: &[Reading]) -> Option<SnapshotSeries> {
    if latest.is_empty() {
        return None;
    }

    let palette = ["var(--teal)", "var(--terracotta)", "var(--info)", "var(--success)", "var(--error)"];

    let datasets = latest
        .iter()
        .enumerate()
        .map(|(i, reading)| SnapshotDataset {
            name: format!("#{}", reading.id),
            values: vec![reading.ldr, reading.vr],
            color: palette[i % palette.len()].to_string(),
        })
        .collect();

    Some(SnapshotSeries {
        labels: vec!["LDR".to_string(), "VR".to_string()],
        datasets,
    })
}

/// Trend view: one label per history record, one dataset per tracked field.
///
/// The history is used in the order the backend returned it; ordering is a
/// backend guarantee this client trusts rather than re-validates.
pub fn trend(history: &[Reading], fields: TrendFields) -> Option<TrendSeries> {
    if history.is_empty() {
        return None;
    }

    let labels = history.iter().map(|r| format_timestamp(r.date)).collect();

    let datasets = match fields {
        TrendFields::LdrVr => vec![
            TrendDataset {
                name: "LDR".to_string(),
                values: history.iter().map(|r| r.ldr).collect(),
                color: "var(--teal)".to_string(),
            },
            TrendDataset {
                name: "VR".to_string(),
                values: history.iter().map(|r| r.vr).collect(),
                color: "var(--info)".to_string(),
            },
        ],
        TrendFields::TempDistance => vec![
            TrendDataset {
                name: "Temperature".to_string(),
                values: history.iter().map(|r| r.temp).collect(),
                color: "var(--terracotta)".to_string(),
            },
            TrendDataset {
                name: "Distance".to_string(),
                values: history.iter().map(|r| r.distance).collect(),
                color: "var(--error)".to_string(),
            },
        ],
    };

    Some(TrendSeries { labels, datasets })
}

/// Render a timestamp for display: `D/M/YY HH:MM` in UTC+7 with a two-digit
/// Buddhist-era year, matching the short Thai style the operators see
/// everywhere else.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    let offset = FixedOffset::east_opt(DISPLAY_UTC_OFFSET_SECS).unwrap();
    let local = ts.with_timezone(&offset);
    let be_year = (local.year() + BUDDHIST_ERA_OFFSET).rem_euclid(100);
    format!(
        "{}/{}/{:02} {:02}:{:02}",
        local.day(),
        local.month(),
        be_year,
        local.hour(),
        local.minute()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn reading(id: i64, ldr: f64, vr: f64, temp: f64, distance: f64, date: &str) -> Reading {
        Reading {
            id,
            ldr,
            vr,
            temp,
            distance,
            date: date.parse().unwrap(),
        }
    }

    fn sample_history() -> Vec<Reading> {
        vec![
            reading(1, 480.0, 710.0, 26.5, 90.0, "2024-05-01T07:30:00Z"),
            reading(2, 505.0, 715.0, 27.0, 88.5, "2024-05-01T07:40:00Z"),
            reading(3, 530.0, 700.0, 27.5, 95.0, "2024-05-01T07:50:00Z"),
        ]
    }

    #[test]
    fn test_aggregate_totals_are_field_sums() {
        let latest = sample_history();
        let slices = aggregate_totals(&latest).unwrap();

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].0, "Temperature");
        assert_eq!(slices[0].1, 26.5 + 27.0 + 27.5);
        assert_eq!(slices[1].0, "Distance");
        assert_eq!(slices[1].1, 90.0 + 88.5 + 95.0);
    }

    #[test]
    fn test_aggregate_totals_order_independent() {
        let mut latest = sample_history();
        let forward = aggregate_totals(&latest).unwrap();
        latest.reverse();
        let backward = aggregate_totals(&latest).unwrap();

        assert_eq!(forward[0].1, backward[0].1);
        assert_eq!(forward[1].1, backward[1].1);
    }

    #[test]
    fn test_aggregate_empty_snapshot_yields_none() {
        // Empty bucket means "no data" state, never a chart of zero slices.
        assert_eq!(aggregate_totals(&[]), None);
    }

    #[test]
    fn test_snapshot_comparison_one_dataset_per_reading() {
        let latest = sample_history();
        let series = snapshot_comparison(&latest).unwrap();

        assert_eq!(series.labels, vec!["LDR", "VR"]);
        assert_eq!(series.datasets.len(), 3);
        assert_eq!(series.datasets[0].name, "#1");
        assert_eq!(series.datasets[0].values, vec![480.0, 710.0]);
        assert_eq!(series.datasets[2].values, vec![530.0, 700.0]);
        for ds in &series.datasets {
            assert_eq!(ds.values.len(), series.labels.len());
        }
    }

    #[test]
    fn test_snapshot_comparison_empty_yields_none() {
        assert!(snapshot_comparison(&[]).is_none());
    }

    #[test]
    fn test_trend_alignment_invariant() {
        let history = sample_history();
        for fields in [TrendFields::LdrVr, TrendFields::TempDistance] {
            let series = trend(&history, fields).unwrap();
            assert_eq!(series.labels.len(), history.len());
            for ds in &series.datasets {
                assert_eq!(ds.values.len(), series.labels.len());
            }
        }
    }

    #[test]
    fn test_trend_temp_distance_exact_sequences() {
        let series = trend(&sample_history(), TrendFields::TempDistance).unwrap();

        assert_eq!(series.datasets.len(), 2);
        assert_eq!(series.datasets[0].name, "Temperature");
        assert_eq!(series.datasets[0].values, vec![26.5, 27.0, 27.5]);
        assert_eq!(series.datasets[1].name, "Distance");
        assert_eq!(series.datasets[1].values, vec![90.0, 88.5, 95.0]);
        // 07:30 UTC is 14:30 in Bangkok; 2024 CE is 2567 BE.
        assert_eq!(
            series.labels,
            vec!["1/5/67 14:30", "1/5/67 14:40", "1/5/67 14:50"]
        );
    }

    #[test]
    fn test_trend_ldr_vr_exact_sequences() {
        let series = trend(&sample_history(), TrendFields::LdrVr).unwrap();

        assert_eq!(series.datasets[0].name, "LDR");
        assert_eq!(series.datasets[0].values, vec![480.0, 505.0, 530.0]);
        assert_eq!(series.datasets[1].name, "VR");
        assert_eq!(series.datasets[1].values, vec![710.0, 715.0, 700.0]);
    }

    #[test]
    fn test_trend_empty_yields_none() {
        assert!(trend(&[], TrendFields::LdrVr).is_none());
    }

    #[test]
    fn test_transform_idempotence() {
        let history = sample_history();
        assert_eq!(
            trend(&history, TrendFields::LdrVr),
            trend(&history, TrendFields::LdrVr)
        );
        assert_eq!(aggregate_totals(&history), aggregate_totals(&history));
        assert_eq!(snapshot_comparison(&history), snapshot_comparison(&history));
    }

    #[test]
    fn test_format_timestamp_fixed_offset_and_era() {
        let ts = Utc.with_ymd_and_hms(2024, 12, 31, 18, 5, 0).unwrap();
        // 18:05 UTC on Dec 31 is 01:05 on Jan 1 in Bangkok, year 2568 BE.
        assert_eq!(format_timestamp(ts), "1/1/68 01:05");

        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 7, 30, 0).unwrap();
        assert_eq!(format_timestamp(ts), "1/5/67 14:30");
    }
}
