use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An exercise in the rehabilitation catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub max_pain_threshold: u8,
    pub created_at: DateTime<Utc>,
}

/// A single training session as delivered by the backend.
///
/// `total_volume` is normally precomputed upstream; [`TrainingRecord::volume`]
/// falls back to `set_count * rep_count * weight` when it is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingRecord {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub set_count: u32,
    pub rep_count: u32,
    /// Weight in kg.
    pub weight: f64,
    /// Pain reported during the session, 0-10.
    pub pain_during: u8,
    /// Pain reported a day later; `None` while the follow-up is pending.
    pub pain_next_day: Option<u8>,
    pub notes: Option<String>,
    pub exercise_name: String,
    #[serde(default)]
    pub total_volume: Option<f64>,
}

impl TrainingRecord {
    /// Training volume of the session (sets x reps x weight).
    pub fn volume(&self) -> f64 {
        self.total_volume
            .unwrap_or_else(|| self.set_count as f64 * self.rep_count as f64 * self.weight)
    }

    pub fn is_pending_followup(&self) -> bool {
        self.pain_next_day.is_none()
    }
}

/// Payload for creating a record through the manual log editor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    pub exercise_name: String,
    pub set_count: u32,
    pub rep_count: u32,
    pub weight: f64,
    pub pain_during: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Payload for creating an exercise.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExercise {
    pub name: String,
    pub category: String,
    pub max_pain_threshold: u8,
}

/// Structured data the backend extracted from a chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedData {
    pub exercise: String,
    pub set_count: u32,
    pub rep_count: u32,
    pub weight: f64,
    pub pain_during: u8,
}

/// One turn of the natural-language logging conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub message: String,
    pub extracted_data: Option<ExtractedData>,
    pub was_saved: bool,
    pub recommendation: Option<String>,
}

/// Aggregate stats for the dashboard header cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub total_records: u64,
    pub pending_pain_followups: u64,
    pub average_pain_during: f64,
    #[serde(rename = "lastRecordTimestamp")]
    pub last_record: Option<DateTime<Utc>>,
}

/// One point of a backend-generated trend series (monthly reports).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: DateTime<Utc>,
    pub total_volume: f64,
    pub pain_during: u8,
    pub pain_next_day: Option<u8>,
}

/// Backend-generated monthly executive report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub period: String,
    pub exercises_analyzed: u32,
    pub total_sessions: u32,
    pub summary_text: String,
    pub trend_series: Vec<TrendPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_decodes_from_backend_json() {
        let json = r#"{
            "id": 17,
            "date": "2026-04-02T09:30:00Z",
            "setCount": 3,
            "repCount": 10,
            "weight": 42.5,
            "painDuring": 4,
            "painNextDay": null,
            "notes": "slight stiffness",
            "exerciseName": "leg press",
            "totalVolume": 1275.0
        }"#;

        let record: TrainingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 17);
        assert_eq!(record.set_count, 3);
        assert_eq!(record.pain_next_day, None);
        assert!(record.is_pending_followup());
        assert_eq!(record.volume(), 1275.0);
    }

    #[test]
    fn record_volume_falls_back_to_the_product() {
        let json = r#"{
            "id": 1,
            "date": "2026-04-02T09:30:00Z",
            "setCount": 4,
            "repCount": 12,
            "weight": 10.0,
            "painDuring": 1,
            "painNextDay": 2,
            "notes": null,
            "exerciseName": "seated row"
        }"#;

        let record: TrainingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.total_volume, None);
        assert_eq!(record.volume(), 480.0);
    }

    #[test]
    fn stats_decode_uses_the_wire_timestamp_name() {
        let json = r#"{
            "totalRecords": 12,
            "pendingPainFollowups": 2,
            "averagePainDuring": 3.4,
            "lastRecordTimestamp": "2026-04-02T09:30:00Z"
        }"#;

        let stats: AggregateStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_records, 12);
        assert_eq!(stats.pending_pain_followups, 2);
        assert!(stats.last_record.is_some());
    }
}
