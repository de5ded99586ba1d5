use chrono::{Duration, TimeZone, Utc};
use rehabtrack::domain::analysis::{select_pending, summarize, to_series, TrendDirection};
use rehabtrack::domain::pain::PainBand;
use rehabtrack::domain::records::TrainingRecord;

fn record(days: i64, pain: u8, pain_24h: Option<u8>, volume: f64) -> TrainingRecord {
    let base = Utc.with_ymd_and_hms(2026, 4, 1, 9, 0, 0).unwrap();
    TrainingRecord {
        id: days,
        date: base + Duration::days(days),
        set_count: 3,
        rep_count: 10,
        weight: 30.0,
        pain_during: pain,
        pain_next_day: pain_24h,
        notes: None,
        exercise_name: "leg press".to_string(),
        total_volume: Some(volume),
    }
}

/// Oldest-first sequence with the given intra-session pain values.
fn sequence(pains: &[u8]) -> Vec<TrainingRecord> {
    pains
        .iter()
        .enumerate()
        .map(|(i, &p)| record(i as i64, p, Some(p), 100.0))
        .collect()
}

#[test]
fn bands_partition_the_scale() {
    for pain in 0..=10u8 {
        let band = PainBand::from_score(pain);
        let expected = match pain {
            0..=3 => PainBand::Low,
            4..=5 => PainBand::Moderate,
            _ => PainBand::High,
        };
        assert_eq!(band, expected, "pain {}", pain);
    }
}

#[test]
fn empty_input_is_not_an_error() {
    let summary = summarize(&[]);
    assert_eq!(summary.session_count, 0);
    assert_eq!(summary.direction, TrendDirection::InsufficientData);
    assert!(summary.max_volume.is_none());
    assert!(summary.average_pain_during.is_none());
    assert_eq!(to_series(&[]).count(), 0);
    assert_eq!(select_pending(&[]).count(), 0);
}

// The input contract is oldest-first, so the last window is the recent one.
// These two tests pin that convention.

#[test]
fn pain_dropping_over_time_reads_as_improving() {
    let records = sequence(&[8, 8, 8, 2, 2]);
    assert_eq!(summarize(&records).direction, TrendDirection::Improving);
}

#[test]
fn pain_rising_over_time_reads_as_worsening() {
    let records = sequence(&[2, 2, 8, 8, 8]);
    assert_eq!(summarize(&records).direction, TrendDirection::Worsening);
}

#[test]
fn flat_pain_reads_as_stable() {
    let records = sequence(&[4, 4, 4, 4, 4, 4]);
    assert_eq!(summarize(&records).direction, TrendDirection::Stable);
}

#[test]
fn four_sessions_are_insufficient_for_a_direction() {
    let records = sequence(&[8, 8, 2, 2]);
    let summary = summarize(&records);
    assert_eq!(summary.session_count, 4);
    assert_eq!(summary.direction, TrendDirection::InsufficientData);
    assert_eq!(summary.max_volume, Some(100.0));
    assert_eq!(summary.average_pain_during, Some(5.0));
}

#[test]
fn series_is_an_order_preserving_projection() {
    let records: Vec<TrainingRecord> = (0..6)
        .map(|i| record(i, 3, None, (i + 1) as f64 * 50.0))
        .collect();

    let series: Vec<_> = to_series(&records).collect();
    assert_eq!(series.len(), records.len());
    for (i, point) in series.iter().enumerate() {
        assert_eq!(point.volume, records[i].volume());
        assert_eq!(point.pain_during, records[i].pain_during);
        assert_eq!(point.pain_next_day, records[i].pain_next_day);
    }
}

#[test]
fn pending_selector_returns_exactly_the_unreported_subset() {
    let mut records: Vec<TrainingRecord> = (0..10)
        .map(|i| record(i, 4, Some(3), 100.0))
        .collect();
    records[1].pain_next_day = None;
    records[4].pain_next_day = None;
    records[9].pain_next_day = None;

    let pending: Vec<_> = select_pending(&records).collect();
    assert_eq!(pending.len(), 3);
    assert_eq!(
        pending.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![records[1].id, records[4].id, records[9].id]
    );
}

#[test]
fn series_is_restartable_without_hidden_state() {
    let records = sequence(&[1, 5, 7, 2, 9]);
    let first: Vec<_> = to_series(&records).collect();
    let second: Vec<_> = to_series(&records).collect();
    assert_eq!(first, second);
    assert_eq!(summarize(&records), summarize(&records));
}
