use crate::domain::errors::ApiError;
use crate::domain::pain::PainBand;
use crate::domain::ports::TrainingApi;
use crate::domain::records::{
    AggregateStats, ChatReply, Exercise, ExtractedData, MonthlyReport, NewExercise, NewRecord,
    TrainingRecord, TrendPoint,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Datelike, Duration, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

/// In-memory [`TrainingApi`] used in MODE=mock and in integration tests.
/// Deterministic apart from record timestamps, which are seeded relative to
/// now so the dashboard always shows a live-looking history.
pub struct MockTrainingApi {
    exercises: RwLock<Vec<Exercise>>,
    records: RwLock<Vec<TrainingRecord>>,
    next_record_id: AtomicI64,
}

impl MockTrainingApi {
    pub fn new() -> Self {
        Self {
            exercises: RwLock::new(Vec::new()),
            records: RwLock::new(Vec::new()),
            next_record_id: AtomicI64::new(1),
        }
    }

    /// Mock with a small seeded history: two exercises, eight sessions,
    /// two of them still pending their 24h follow-up.
    pub fn with_sample_data() -> Self {
        let now = Utc::now();
        let leg_press = Exercise {
            id: Uuid::new_v4(),
            name: "leg press".to_string(),
            category: "lower body".to_string(),
            max_pain_threshold: 5,
            created_at: now - Duration::days(40),
        };
        let rows = Exercise {
            id: Uuid::new_v4(),
            name: "seated row".to_string(),
            category: "upper body".to_string(),
            max_pain_threshold: 4,
            created_at: now - Duration::days(35),
        };

        // Oldest-first seed; pain eases over the history.
        let seed: [(&Exercise, i64, u32, u32, f64, u8, Option<u8>); 8] = [
            (&leg_press, 21, 3, 10, 40.0, 7, Some(6)),
            (&rows, 19, 3, 12, 25.0, 4, Some(3)),
            (&leg_press, 17, 3, 10, 42.5, 6, Some(5)),
            (&leg_press, 14, 4, 10, 42.5, 5, Some(4)),
            (&rows, 12, 3, 12, 27.5, 3, Some(2)),
            (&leg_press, 10, 4, 10, 45.0, 3, Some(3)),
            (&leg_press, 3, 4, 12, 45.0, 2, None),
            (&rows, 1, 3, 12, 30.0, 2, None),
        ];

        let records: Vec<TrainingRecord> = seed
            .iter()
            .enumerate()
            .map(
                |(i, (exercise, days_ago, sets, reps, weight, pain, pain_24h))| TrainingRecord {
                    id: i as i64 + 1,
                    date: now - Duration::days(*days_ago),
                    set_count: *sets,
                    rep_count: *reps,
                    weight: *weight,
                    pain_during: *pain,
                    pain_next_day: *pain_24h,
                    notes: None,
                    exercise_name: exercise.name.clone(),
                    total_volume: Some(*sets as f64 * *reps as f64 * weight),
                },
            )
            .collect();

        info!("MockTrainingApi: seeded sample history");
        Self {
            next_record_id: AtomicI64::new(records.len() as i64 + 1),
            exercises: RwLock::new(vec![leg_press, rows]),
            records: RwLock::new(records),
        }
    }

    async fn insert_record(&self, new: NewRecord) -> TrainingRecord {
        let id = self.next_record_id.fetch_add(1, Ordering::Relaxed);
        let record = TrainingRecord {
            id,
            date: Utc::now(),
            set_count: new.set_count,
            rep_count: new.rep_count,
            weight: new.weight,
            pain_during: new.pain_during,
            pain_next_day: None,
            notes: new.notes,
            exercise_name: new.exercise_name,
            total_volume: Some(new.set_count as f64 * new.rep_count as f64 * new.weight),
        };
        self.records.write().await.push(record.clone());
        record
    }

    fn recommendation_for(pain: u8, exercise: &str) -> String {
        match PainBand::from_score(pain) {
            PainBand::Low => format!(
                "Good tolerance on {}. You can increase volume or load by 5-10% next session.",
                exercise
            ),
            PainBand::Moderate => format!(
                "You are near the tolerance threshold on {}. Hold the current load before progressing.",
                exercise
            ),
            PainBand::High => format!(
                "Pain is elevated on {}. Reduce the load by 15-20% or pick an easier variant.",
                exercise
            ),
        }
    }
}

impl Default for MockTrainingApi {
    fn default() -> Self {
        Self::new()
    }
}

/// Naive extractor standing in for the backend's NL engine. Understands
/// messages like "leg press 3x10 40kg pain 2".
fn extract_session(message: &str) -> Option<ExtractedData> {
    let lowered = message.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let mut sets_reps: Option<(u32, u32)> = None;
    let mut weight: Option<f64> = None;
    let mut pain: Option<u8> = None;
    let mut sets_reps_idx = tokens.len();

    for (i, token) in tokens.iter().enumerate() {
        if let Some((s, r)) = token.split_once('x')
            && let (Ok(s), Ok(r)) = (s.parse::<u32>(), r.parse::<u32>())
        {
            sets_reps = Some((s, r));
            sets_reps_idx = i;
        } else if let Some(kg) = token.strip_suffix("kg") {
            weight = kg.parse::<f64>().ok();
        } else if (*token == "pain" || *token == "dolor") && i + 1 < tokens.len() {
            pain = tokens[i + 1].parse::<u8>().ok();
        }
    }

    let (set_count, rep_count) = sets_reps?;
    // Everything before the NxM token is taken as the exercise name.
    let exercise = tokens[..sets_reps_idx].join(" ");
    if exercise.is_empty() {
        return None;
    }

    Some(ExtractedData {
        exercise,
        set_count,
        rep_count,
        weight: weight?,
        pain_during: pain?,
    })
}

#[async_trait]
impl TrainingApi for MockTrainingApi {
    async fn send_chat_message(&self, message: &str) -> Result<ChatReply> {
        let Some(extracted) = extract_session(message) else {
            return Ok(ChatReply {
                message: "I could not read a session from that. Try something like \
                          'leg press 3x10 40kg pain 2'."
                    .to_string(),
                extracted_data: None,
                was_saved: false,
                recommendation: None,
            });
        };

        let record = self
            .insert_record(NewRecord {
                exercise_name: extracted.exercise.clone(),
                set_count: extracted.set_count,
                rep_count: extracted.rep_count,
                weight: extracted.weight,
                pain_during: extracted.pain_during,
                notes: None,
            })
            .await;

        Ok(ChatReply {
            message: format!(
                "Logged {}: {}x{} @ {}kg, pain {}/10.",
                record.exercise_name,
                record.set_count,
                record.rep_count,
                record.weight,
                record.pain_during
            ),
            recommendation: Some(Self::recommendation_for(
                extracted.pain_during,
                &extracted.exercise,
            )),
            extracted_data: Some(extracted),
            was_saved: true,
        })
    }

    async fn list_exercises(&self) -> Result<Vec<Exercise>> {
        Ok(self.exercises.read().await.clone())
    }

    async fn create_exercise(&self, exercise: NewExercise) -> Result<Exercise> {
        let created = Exercise {
            id: Uuid::new_v4(),
            name: exercise.name,
            category: exercise.category,
            max_pain_threshold: exercise.max_pain_threshold,
            created_at: Utc::now(),
        };
        self.exercises.write().await.push(created.clone());
        Ok(created)
    }

    async fn list_records(&self, limit: usize, offset: usize) -> Result<Vec<TrainingRecord>> {
        let records = self.records.read().await;
        let mut sorted: Vec<TrainingRecord> = records.clone();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(sorted.into_iter().skip(offset).take(limit).collect())
    }

    async fn pending_records(&self) -> Result<Vec<TrainingRecord>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.is_pending_followup())
            .cloned()
            .collect())
    }

    async fn records_for_exercise(
        &self,
        exercise_id: Uuid,
        limit: usize,
    ) -> Result<Vec<TrainingRecord>> {
        let name = {
            let exercises = self.exercises.read().await;
            exercises
                .iter()
                .find(|e| e.id == exercise_id)
                .map(|e| e.name.clone())
        };
        let Some(name) = name else {
            return Err(ApiError::Status {
                status: 404,
                endpoint: format!("/records/exercise/{}", exercise_id),
                body: "exercise not found".to_string(),
            }
            .into());
        };

        let records = self.records.read().await;
        let mut matching: Vec<TrainingRecord> = records
            .iter()
            .filter(|r| r.exercise_name == name)
            .cloned()
            .collect();
        // Oldest-first, the ordering the trend analyzer relies on.
        matching.sort_by(|a, b| a.date.cmp(&b.date));
        matching.truncate(limit);
        Ok(matching)
    }

    async fn create_record(&self, record: NewRecord) -> Result<TrainingRecord> {
        Ok(self.insert_record(record).await)
    }

    async fn update_next_day_pain(&self, record_id: i64, pain: u8) -> Result<TrainingRecord> {
        let mut records = self.records.write().await;
        let Some(record) = records.iter_mut().find(|r| r.id == record_id) else {
            return Err(ApiError::Status {
                status: 404,
                endpoint: format!("/records/{}/next-day-pain", record_id),
                body: "record not found".to_string(),
            }
            .into());
        };
        record.pain_next_day = Some(pain);
        Ok(record.clone())
    }

    async fn fetch_stats(&self) -> Result<AggregateStats> {
        let records = self.records.read().await;
        let total = records.len() as u64;
        let pending = records.iter().filter(|r| r.is_pending_followup()).count() as u64;
        let average = if records.is_empty() {
            0.0
        } else {
            records.iter().map(|r| r.pain_during as f64).sum::<f64>() / records.len() as f64
        };
        let last_record: Option<DateTime<Utc>> = records.iter().map(|r| r.date).max();

        Ok(AggregateStats {
            total_records: total,
            pending_pain_followups: pending,
            average_pain_during: average,
            last_record,
        })
    }

    async fn monthly_report(&self, year: i32, month: u32) -> Result<MonthlyReport> {
        let records = self.records.read().await;
        let mut in_period: Vec<&TrainingRecord> = records
            .iter()
            .filter(|r| r.date.year() == year && r.date.month() == month)
            .collect();
        in_period.sort_by_key(|r| r.date);

        if in_period.is_empty() {
            return Err(ApiError::Status {
                status: 404,
                endpoint: format!("/reports/monthly/{}/{}", year, month),
                body: "no records for the selected period".to_string(),
            }
            .into());
        }

        let mut exercise_names: Vec<&str> =
            in_period.iter().map(|r| r.exercise_name.as_str()).collect();
        exercise_names.sort_unstable();
        exercise_names.dedup();

        let average_pain = in_period.iter().map(|r| r.pain_during as f64).sum::<f64>()
            / in_period.len() as f64;

        Ok(MonthlyReport {
            period: format!("{:04}-{:02}", year, month),
            exercises_analyzed: exercise_names.len() as u32,
            total_sessions: in_period.len() as u32,
            summary_text: format!(
                "{} sessions across {} exercises. Average intra-session pain {:.1}/10.",
                in_period.len(),
                exercise_names.len(),
                average_pain
            ),
            trend_series: in_period
                .iter()
                .map(|r| TrendPoint {
                    date: r.date,
                    total_volume: r.volume(),
                    pain_during: r.pain_during,
                    pain_next_day: r.pain_next_day,
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extractor_reads_a_full_session() {
        let data = extract_session("Leg press 3x10 40kg pain 2").unwrap();
        assert_eq!(data.exercise, "leg press");
        assert_eq!(data.set_count, 3);
        assert_eq!(data.rep_count, 10);
        assert_eq!(data.weight, 40.0);
        assert_eq!(data.pain_during, 2);
    }

    #[test]
    fn extractor_rejects_freeform_text() {
        assert!(extract_session("my knee feels better today").is_none());
        assert!(extract_session("3x10 40kg pain 2").is_none()); // no exercise name
    }
}
