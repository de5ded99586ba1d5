use crate::domain::records::TrainingRecord;

/// Case-insensitive filter on exercise name. Empty needle keeps everything.
pub fn filter_records<'a>(records: &'a [TrainingRecord], needle: &str) -> Vec<&'a TrainingRecord> {
    let needle = needle.trim().to_lowercase();
    records
        .iter()
        .filter(|r| needle.is_empty() || r.exercise_name.to_lowercase().contains(&needle))
        .collect()
}

/// Group records by exercise name, groups ordered by first appearance,
/// records keeping their input order within each group.
pub fn group_by_exercise<'a>(
    records: &[&'a TrainingRecord],
) -> Vec<(String, Vec<&'a TrainingRecord>)> {
    let mut groups: Vec<(String, Vec<&TrainingRecord>)> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|(name, _)| *name == record.exercise_name) {
            Some((_, members)) => members.push(record),
            None => groups.push((record.exercise_name.clone(), vec![record])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: i64, exercise: &str) -> TrainingRecord {
        TrainingRecord {
            id,
            date: Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap(),
            set_count: 3,
            rep_count: 10,
            weight: 30.0,
            pain_during: 2,
            pain_next_day: None,
            notes: None,
            exercise_name: exercise.to_string(),
            total_volume: None,
        }
    }

    #[test]
    fn filter_is_case_insensitive_and_keeps_order() {
        let records = vec![record(1, "Leg Press"), record(2, "seated row"), record(3, "leg curl")];
        let hits = filter_records(&records, "LEG");
        assert_eq!(hits.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(filter_records(&records, "").len(), 3);
    }

    #[test]
    fn grouping_preserves_first_appearance_order() {
        let records = vec![
            record(1, "leg press"),
            record(2, "seated row"),
            record(3, "leg press"),
        ];
        let refs: Vec<&TrainingRecord> = records.iter().collect();
        let groups = group_by_exercise(&refs);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "leg press");
        assert_eq!(groups[0].1.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(groups[1].0, "seated row");
    }
}
