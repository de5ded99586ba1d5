use crate::domain::records::TrainingRecord;
use std::fmt;

/// Minimum number of sessions before a trend direction is inferred.
pub const MIN_SESSIONS_FOR_TREND: usize = 5;

/// Sub-window length for the early/recent pain comparison.
const TREND_WINDOW: usize = 3;

/// Coarse direction of the pain trend over a record sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Improving,
    Stable,
    Worsening,
    InsufficientData,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Improving => write!(f, "improving"),
            TrendDirection::Stable => write!(f, "stable"),
            TrendDirection::Worsening => write!(f, "worsening"),
            TrendDirection::InsufficientData => write!(f, "insufficient data"),
        }
    }
}

/// Aggregate statistics over an ordered sequence of training records.
///
/// `max_volume` and `average_pain_during` are `None` for an empty sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSummary {
    pub session_count: usize,
    pub max_volume: Option<f64>,
    pub average_pain_during: Option<f64>,
    pub direction: TrendDirection,
}

/// One chart-ready point projected from a training record.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    /// Short date label (dd/mm/yyyy).
    pub label: String,
    pub volume: f64,
    pub pain_during: u8,
    pub pain_next_day: Option<u8>,
}

fn mean_pain(records: &[TrainingRecord]) -> f64 {
    records.iter().map(|r| r.pain_during as f64).sum::<f64>() / records.len() as f64
}

/// Summarize an ordered sequence of records.
///
/// Caller contract: `records` is ordered oldest-first. The trend direction
/// compares mean intra-session pain of the first [`TREND_WINDOW`] records
/// (early) against the last [`TREND_WINDOW`] (recent); lower recent pain
/// means `Improving`. No sorting happens here. An empty sequence is not an
/// error; it yields `session_count = 0` and `InsufficientData`.
pub fn summarize(records: &[TrainingRecord]) -> TrendSummary {
    let session_count = records.len();

    let max_volume = records
        .iter()
        .map(TrainingRecord::volume)
        .fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |m| m.max(v)))
        });

    let average_pain_during = if records.is_empty() {
        None
    } else {
        Some(mean_pain(records))
    };

    let direction = if session_count < MIN_SESSIONS_FOR_TREND {
        TrendDirection::InsufficientData
    } else {
        let early = mean_pain(&records[..TREND_WINDOW]);
        let recent = mean_pain(&records[session_count - TREND_WINDOW..]);
        if recent < early {
            TrendDirection::Improving
        } else if recent == early {
            TrendDirection::Stable
        } else {
            TrendDirection::Worsening
        }
    };

    TrendSummary {
        session_count,
        max_volume,
        average_pain_during,
        direction,
    }
}

/// Project records into a chart series, one point per record in input order.
///
/// Pure, lazy and restartable: no filtering, no aggregation, no state carried
/// between calls.
pub fn to_series(records: &[TrainingRecord]) -> impl Iterator<Item = SeriesPoint> + '_ {
    records.iter().map(|r| SeriesPoint {
        label: r.date.format("%d/%m/%Y").to_string(),
        volume: r.volume(),
        pain_during: r.pain_during,
        pain_next_day: r.pain_next_day,
    })
}

/// Select the records whose 24h pain follow-up is still pending, in input
/// order. Callers truncate for display; the full subset is returned here.
pub fn select_pending(records: &[TrainingRecord]) -> impl Iterator<Item = &TrainingRecord> {
    records.iter().filter(|r| r.is_pending_followup())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(day: u32, pain: u8, volume: f64) -> TrainingRecord {
        TrainingRecord {
            id: day as i64,
            date: Utc.with_ymd_and_hms(2026, 3, day, 10, 0, 0).unwrap(),
            set_count: 3,
            rep_count: 10,
            weight: 20.0,
            pain_during: pain,
            pain_next_day: None,
            notes: None,
            exercise_name: "leg press".to_string(),
            total_volume: Some(volume),
        }
    }

    #[test]
    fn empty_sequence_yields_insufficient_data() {
        let summary = summarize(&[]);
        assert_eq!(summary.session_count, 0);
        assert_eq!(summary.direction, TrendDirection::InsufficientData);
        assert!(summary.max_volume.is_none());
        assert!(summary.average_pain_during.is_none());
    }

    #[test]
    fn fewer_than_five_sessions_has_no_direction() {
        let records: Vec<_> = (1..=4).map(|d| record(d, 5, 100.0)).collect();
        let summary = summarize(&records);
        assert_eq!(summary.session_count, 4);
        assert_eq!(summary.direction, TrendDirection::InsufficientData);
        assert_eq!(summary.average_pain_during, Some(5.0));
    }

    #[test]
    fn falling_pain_on_oldest_first_input_is_improving() {
        // Oldest-first: pain drops from 8 to 2 over time.
        let pains = [8, 8, 8, 2, 2];
        let records: Vec<_> = pains
            .iter()
            .enumerate()
            .map(|(i, &p)| record(i as u32 + 1, p, 100.0))
            .collect();
        assert_eq!(summarize(&records).direction, TrendDirection::Improving);
    }

    #[test]
    fn rising_pain_on_oldest_first_input_is_worsening() {
        let pains = [2, 2, 8, 8, 8];
        let records: Vec<_> = pains
            .iter()
            .enumerate()
            .map(|(i, &p)| record(i as u32 + 1, p, 100.0))
            .collect();
        assert_eq!(summarize(&records).direction, TrendDirection::Worsening);
    }

    #[test]
    fn max_volume_uses_computed_product_when_wire_value_absent() {
        let mut r = record(1, 3, 0.0);
        r.total_volume = None;
        // 3 sets x 10 reps x 20kg
        assert_eq!(summarize(&[r]).max_volume, Some(600.0));
    }

    #[test]
    fn series_preserves_order_and_length() {
        let records: Vec<_> = (1..=6).map(|d| record(d, 4, d as f64 * 10.0)).collect();
        let series: Vec<_> = to_series(&records).collect();
        assert_eq!(series.len(), records.len());
        for (point, rec) in series.iter().zip(&records) {
            assert_eq!(point.volume, rec.volume());
            assert_eq!(point.pain_during, rec.pain_during);
        }
        assert_eq!(series[0].label, "01/03/2026");
    }

    #[test]
    fn analyzer_calls_are_idempotent() {
        let records: Vec<_> = (1..=7).map(|d| record(d, 6, 50.0)).collect();
        assert_eq!(summarize(&records), summarize(&records));
        let a: Vec<_> = to_series(&records).collect();
        let b: Vec<_> = to_series(&records).collect();
        assert_eq!(a, b);
    }
}
