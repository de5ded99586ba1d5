use rehabtrack::domain::ports::TrainingApi;
use rehabtrack::domain::records::{NewExercise, NewRecord};
use rehabtrack::infrastructure::mock::MockTrainingApi;

fn new_record(exercise: &str, pain: u8) -> NewRecord {
    NewRecord {
        exercise_name: exercise.to_string(),
        set_count: 3,
        rep_count: 10,
        weight: 40.0,
        pain_during: pain,
        notes: None,
    }
}

#[tokio::test]
async fn created_record_is_pending_until_followup_is_reported() {
    let api = MockTrainingApi::new();

    let record = api.create_record(new_record("leg press", 2)).await.unwrap();
    assert!(record.pain_next_day.is_none());

    let pending = api.pending_records().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, record.id);

    let updated = api.update_next_day_pain(record.id, 3).await.unwrap();
    assert_eq!(updated.pain_next_day, Some(3));

    let pending = api.pending_records().await.unwrap();
    assert!(pending.is_empty());
}

#[tokio::test]
async fn updating_an_unknown_record_fails() {
    let api = MockTrainingApi::new();
    assert!(api.update_next_day_pain(999, 3).await.is_err());
}

#[tokio::test]
async fn stats_reflect_the_store() {
    let api = MockTrainingApi::new();

    let stats = api.fetch_stats().await.unwrap();
    assert_eq!(stats.total_records, 0);
    assert_eq!(stats.pending_pain_followups, 0);
    assert!(stats.last_record.is_none());

    api.create_record(new_record("leg press", 2)).await.unwrap();
    api.create_record(new_record("seated row", 6)).await.unwrap();

    let stats = api.fetch_stats().await.unwrap();
    assert_eq!(stats.total_records, 2);
    assert_eq!(stats.pending_pain_followups, 2);
    assert_eq!(stats.average_pain_during, 4.0);
    assert!(stats.last_record.is_some());
}

#[tokio::test]
async fn chat_message_with_a_session_is_saved() {
    let api = MockTrainingApi::new();

    let reply = api
        .send_chat_message("leg press 3x10 40kg pain 2")
        .await
        .unwrap();
    assert!(reply.was_saved);
    let data = reply.extracted_data.expect("extraction");
    assert_eq!(data.exercise, "leg press");
    assert_eq!(data.weight, 40.0);
    assert!(reply.recommendation.is_some());

    let stats = api.fetch_stats().await.unwrap();
    assert_eq!(stats.total_records, 1);
}

#[tokio::test]
async fn chat_smalltalk_is_not_saved() {
    let api = MockTrainingApi::new();

    let reply = api.send_chat_message("my knee feels great").await.unwrap();
    assert!(!reply.was_saved);
    assert!(reply.extracted_data.is_none());

    let stats = api.fetch_stats().await.unwrap();
    assert_eq!(stats.total_records, 0);
}

#[tokio::test]
async fn exercise_records_come_back_oldest_first() {
    let api = MockTrainingApi::with_sample_data();

    let exercises = api.list_exercises().await.unwrap();
    let leg_press = exercises
        .iter()
        .find(|e| e.name == "leg press")
        .expect("seeded exercise");

    let records = api.records_for_exercise(leg_press.id, 30).await.unwrap();
    assert!(records.len() >= 5);
    assert!(records.iter().all(|r| r.exercise_name == "leg press"));
    for window in records.windows(2) {
        assert!(window[0].date <= window[1].date);
    }
}

#[tokio::test]
async fn recent_records_come_back_newest_first() {
    let api = MockTrainingApi::with_sample_data();

    let records = api.list_records(10, 0).await.unwrap();
    for window in records.windows(2) {
        assert!(window[0].date >= window[1].date);
    }

    let page = api.list_records(3, 0).await.unwrap();
    assert_eq!(page.len(), 3);
}

#[tokio::test]
async fn monthly_report_covers_only_the_period() {
    let api = MockTrainingApi::new();
    api.create_record(new_record("leg press", 2)).await.unwrap();
    api.create_record(new_record("seated row", 4)).await.unwrap();

    let now = chrono::Utc::now();
    use chrono::Datelike;
    let report = api.monthly_report(now.year(), now.month()).await.unwrap();
    assert_eq!(report.total_sessions, 2);
    assert_eq!(report.exercises_analyzed, 2);
    assert_eq!(report.trend_series.len(), 2);

    // A period with no records mirrors the backend's 404.
    assert!(api.monthly_report(2020, 1).await.is_err());
}

#[tokio::test]
async fn created_exercise_shows_up_in_the_catalogue() {
    let api = MockTrainingApi::new();
    let created = api
        .create_exercise(NewExercise {
            name: "bridge".to_string(),
            category: "core".to_string(),
            max_pain_threshold: 4,
        })
        .await
        .unwrap();

    let exercises = api.list_exercises().await.unwrap();
    assert_eq!(exercises.len(), 1);
    assert_eq!(exercises[0].id, created.id);
    assert_eq!(exercises[0].max_pain_threshold, 4);
}
