use crate::domain::records::{
    AggregateStats, ChatReply, Exercise, MonthlyReport, NewExercise, NewRecord, TrainingRecord,
};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Data-access seam to the tracker backend. Constructed once per process and
/// injected into whichever view or service needs it; there is no ambient
/// client singleton.
#[async_trait]
pub trait TrainingApi: Send + Sync {
    /// One turn of the natural-language logging conversation.
    async fn send_chat_message(&self, message: &str) -> Result<ChatReply>;

    async fn list_exercises(&self) -> Result<Vec<Exercise>>;
    async fn create_exercise(&self, exercise: NewExercise) -> Result<Exercise>;

    /// Most recent records first.
    async fn list_records(&self, limit: usize, offset: usize) -> Result<Vec<TrainingRecord>>;

    /// Records whose 24h pain follow-up is still pending.
    async fn pending_records(&self) -> Result<Vec<TrainingRecord>>;

    /// Records of one exercise, ordered oldest-first. This ordering is the
    /// caller contract the trend analyzer relies on.
    async fn records_for_exercise(
        &self,
        exercise_id: Uuid,
        limit: usize,
    ) -> Result<Vec<TrainingRecord>>;

    async fn create_record(&self, record: NewRecord) -> Result<TrainingRecord>;

    /// Complete the 24h pain follow-up of a record.
    async fn update_next_day_pain(&self, record_id: i64, pain: u8) -> Result<TrainingRecord>;

    async fn fetch_stats(&self) -> Result<AggregateStats>;

    async fn monthly_report(&self, year: i32, month: u32) -> Result<MonthlyReport>;
}
