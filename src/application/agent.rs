use crate::config::Config;
use crate::domain::ports::TrainingApi;
use crate::domain::records::{
    AggregateStats, ChatReply, Exercise, MonthlyReport, NewExercise, NewRecord, TrainingRecord,
};
use chrono::{Datelike, Utc};
use crossbeam_channel::{Receiver, Sender};
use std::future::Future;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

/// Maximum lines kept in the activity feed.
const ACTIVITY_LOG_CAP: usize = 300;

/// Recent-records count shown on the dashboard.
const RECENT_RECORDS_LIMIT: usize = 10;

/// Which main view is routed into the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Chat,
    Records,
    Trends,
}

/// Completed API calls delivered back to the UI thread.
#[derive(Debug)]
pub enum ApiEvent {
    Stats(AggregateStats),
    Pending(Vec<TrainingRecord>),
    RecentRecords(Vec<TrainingRecord>),
    AllRecords(Vec<TrainingRecord>),
    Exercises(Vec<Exercise>),
    TrendRecords {
        exercise_id: Uuid,
        records: Vec<TrainingRecord>,
    },
    Chat(ChatReply),
    RecordSaved(TrainingRecord),
    ExerciseSaved(Exercise),
    PainUpdated(TrainingRecord),
    Report(MonthlyReport),
    RequestFailed(String),
}

/// Manual log-editor form state with local validation.
#[derive(Debug, Clone)]
pub struct RecordForm {
    pub exercise_name: String,
    pub set_count: u32,
    pub rep_count: u32,
    pub weight: f64,
    pub pain_during: u8,
    pub notes: String,
}

impl Default for RecordForm {
    fn default() -> Self {
        Self {
            exercise_name: String::new(),
            set_count: 3,
            rep_count: 10,
            weight: 0.0,
            pain_during: 0,
            notes: String::new(),
        }
    }
}

impl RecordForm {
    pub fn validate(&self) -> Result<NewRecord, String> {
        if self.exercise_name.trim().is_empty() {
            return Err("Pick an exercise".to_string());
        }
        if self.set_count == 0 || self.rep_count == 0 {
            return Err("Sets and reps must be positive".to_string());
        }
        if self.weight < 0.0 {
            return Err("Weight cannot be negative".to_string());
        }
        if self.pain_during > 10 {
            return Err("Pain must be between 0 and 10".to_string());
        }
        Ok(NewRecord {
            exercise_name: self.exercise_name.trim().to_string(),
            set_count: self.set_count,
            rep_count: self.rep_count,
            weight: self.weight,
            pain_during: self.pain_during,
            notes: if self.notes.trim().is_empty() {
                None
            } else {
                Some(self.notes.trim().to_string())
            },
        })
    }
}

/// Exercise-catalogue form state.
#[derive(Debug, Clone)]
pub struct ExerciseForm {
    pub name: String,
    pub category: String,
    pub max_pain_threshold: u8,
    pub open: bool,
}

impl Default for ExerciseForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            max_pain_threshold: 5,
            open: false,
        }
    }
}

impl ExerciseForm {
    pub fn validate(&self) -> Result<NewExercise, String> {
        if self.name.trim().is_empty() {
            return Err("Exercise needs a name".to_string());
        }
        if self.max_pain_threshold > 10 {
            return Err("Threshold must be between 0 and 10".to_string());
        }
        Ok(NewExercise {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            max_pain_threshold: self.max_pain_threshold,
        })
    }
}

/// Long-lived UI agent: owns the injected backend port, a handle to the
/// background runtime, and all view state. Requests are fired onto the
/// runtime and their results polled back each frame via a channel.
pub struct TrainerAgent {
    api: Arc<dyn TrainingApi>,
    runtime: tokio::runtime::Handle,
    event_tx: Sender<ApiEvent>,
    event_rx: Receiver<ApiEvent>,
    pub log_rx: Receiver<String>,
    pub config: Config,

    // Navigation & status
    pub active_view: View,
    pub last_error: Option<String>,
    pub activity_log: Vec<String>,

    // Dashboard
    pub stats: Option<AggregateStats>,
    pub pending: Vec<TrainingRecord>,
    pub recent_records: Vec<TrainingRecord>,
    pub updating_record: Option<i64>,

    // Chat
    pub chat_history: Vec<(String, String)>, // (Sender, Message)
    pub chat_input: String,
    pub chat_focused: bool,
    pub sending_chat: bool,

    // Records view
    pub records: Vec<TrainingRecord>,
    pub record_form: RecordForm,
    pub exercise_form: ExerciseForm,
    pub form_error: Option<String>,
    pub record_filter: String,
    pub group_by_exercise: bool,

    // Trends view
    pub exercises: Vec<Exercise>,
    pub selected_exercise: Option<Uuid>,
    pub trend_records: Vec<TrainingRecord>,
    pub loading_trend: bool,
    pub report_year: i32,
    pub report_month: u32,
    pub report: Option<MonthlyReport>,
    pub loading_report: bool,
}

impl TrainerAgent {
    pub fn new(
        api: Arc<dyn TrainingApi>,
        runtime: tokio::runtime::Handle,
        log_rx: Receiver<String>,
        config: Config,
    ) -> Self {
        let (event_tx, event_rx) = crossbeam_channel::unbounded();
        let now = Utc::now();

        let agent = Self {
            api,
            runtime,
            event_tx,
            event_rx,
            log_rx,
            config,
            active_view: View::Dashboard,
            last_error: None,
            activity_log: Vec::new(),
            stats: None,
            pending: Vec::new(),
            recent_records: Vec::new(),
            updating_record: None,
            chat_history: Vec::new(),
            chat_input: String::new(),
            chat_focused: true,
            sending_chat: false,
            records: Vec::new(),
            record_form: RecordForm::default(),
            exercise_form: ExerciseForm::default(),
            form_error: None,
            record_filter: String::new(),
            group_by_exercise: false,
            exercises: Vec::new(),
            selected_exercise: None,
            trend_records: Vec::new(),
            loading_trend: false,
            report_year: now.year(),
            report_month: now.month(),
            report: None,
            loading_report: false,
        };

        agent.refresh_dashboard();
        agent.load_exercises();
        agent.load_records();
        agent
    }

    /// Fire an API call onto the background runtime; its result comes back
    /// through the event channel. Failures collapse into a single generic
    /// request-failed condition for the UI.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = anyhow::Result<ApiEvent>> + Send + 'static,
    {
        let tx = self.event_tx.clone();
        self.runtime.spawn(async move {
            let event = match fut.await {
                Ok(event) => event,
                Err(e) => {
                    warn!("Request failed: {:#}", e);
                    ApiEvent::RequestFailed("Request failed. Is the backend reachable?".to_string())
                }
            };
            let _ = tx.send(event);
        });
    }

    // --- Commands (one logical request per user action) ---

    pub fn refresh_dashboard(&self) {
        let api = self.api.clone();
        self.spawn(async move { api.fetch_stats().await.map(ApiEvent::Stats) });

        let api = self.api.clone();
        self.spawn(async move { api.pending_records().await.map(ApiEvent::Pending) });

        let api = self.api.clone();
        self.spawn(async move {
            api.list_records(RECENT_RECORDS_LIMIT, 0)
                .await
                .map(ApiEvent::RecentRecords)
        });
    }

    pub fn load_exercises(&self) {
        let api = self.api.clone();
        self.spawn(async move { api.list_exercises().await.map(ApiEvent::Exercises) });
    }

    pub fn load_records(&self) {
        let api = self.api.clone();
        let limit = self.config.records_page_size;
        self.spawn(async move { api.list_records(limit, 0).await.map(ApiEvent::AllRecords) });
    }

    pub fn select_trend_exercise(&mut self, exercise_id: Uuid) {
        self.selected_exercise = Some(exercise_id);
        self.loading_trend = true;
        let api = self.api.clone();
        let limit = self.config.trend_limit;
        self.spawn(async move {
            api.records_for_exercise(exercise_id, limit)
                .await
                .map(|records| ApiEvent::TrendRecords {
                    exercise_id,
                    records,
                })
        });
    }

    pub fn send_chat(&mut self) {
        let message = self.chat_input.trim().to_string();
        if message.is_empty() || self.sending_chat {
            return;
        }
        self.chat_input.clear();
        self.chat_history.push(("User".to_string(), message.clone()));
        self.sending_chat = true;

        let api = self.api.clone();
        self.spawn(async move { api.send_chat_message(&message).await.map(ApiEvent::Chat) });
    }

    pub fn submit_record(&mut self) {
        match self.record_form.validate() {
            Ok(new_record) => {
                self.form_error = None;
                let api = self.api.clone();
                self.spawn(async move {
                    api.create_record(new_record).await.map(ApiEvent::RecordSaved)
                });
            }
            Err(msg) => self.form_error = Some(msg),
        }
    }

    pub fn submit_exercise(&mut self) {
        match self.exercise_form.validate() {
            Ok(new_exercise) => {
                self.form_error = None;
                let api = self.api.clone();
                self.spawn(async move {
                    api.create_exercise(new_exercise)
                        .await
                        .map(ApiEvent::ExerciseSaved)
                });
            }
            Err(msg) => self.form_error = Some(msg),
        }
    }

    pub fn set_next_day_pain(&mut self, record_id: i64, pain: u8) {
        self.updating_record = Some(record_id);
        let api = self.api.clone();
        self.spawn(async move {
            api.update_next_day_pain(record_id, pain)
                .await
                .map(ApiEvent::PainUpdated)
        });
    }

    pub fn load_report(&mut self) {
        self.loading_report = true;
        let api = self.api.clone();
        let (year, month) = (self.report_year, self.report_month);
        self.spawn(async move { api.monthly_report(year, month).await.map(ApiEvent::Report) });
    }

    // --- Event polling (called once per frame) ---

    pub fn poll_events(&mut self) {
        while let Ok(line) = self.log_rx.try_recv() {
            self.activity_log.push(line.trim_end().to_string());
            if self.activity_log.len() > ACTIVITY_LOG_CAP {
                let excess = self.activity_log.len() - ACTIVITY_LOG_CAP;
                self.activity_log.drain(..excess);
            }
        }

        while let Ok(event) = self.event_rx.try_recv() {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Stats(stats) => self.stats = Some(stats),
            ApiEvent::Pending(records) => self.pending = records,
            ApiEvent::RecentRecords(records) => self.recent_records = records,
            ApiEvent::AllRecords(records) => self.records = records,
            ApiEvent::Exercises(exercises) => {
                self.exercises = exercises;
                // Default the trends view onto the first exercise.
                if self.selected_exercise.is_none()
                    && let Some(first) = self.exercises.first()
                {
                    let id = first.id;
                    self.select_trend_exercise(id);
                }
            }
            ApiEvent::TrendRecords {
                exercise_id,
                records,
            } => {
                // A stale response for a previously selected exercise is dropped.
                if self.selected_exercise == Some(exercise_id) {
                    self.trend_records = records;
                    self.loading_trend = false;
                }
            }
            ApiEvent::Chat(reply) => {
                self.sending_chat = false;
                self.chat_history.push(("Coach".to_string(), reply.message));
                if let Some(data) = reply.extracted_data {
                    self.chat_history.push((
                        "System".to_string(),
                        format!(
                            "Extracted: {} {}x{} @ {}kg, pain {}/10",
                            data.exercise,
                            data.set_count,
                            data.rep_count,
                            data.weight,
                            data.pain_during
                        ),
                    ));
                }
                if let Some(recommendation) = reply.recommendation {
                    self.chat_history.push(("Coach".to_string(), recommendation));
                }
                if reply.was_saved {
                    self.refresh_dashboard();
                    self.load_records();
                }
            }
            ApiEvent::RecordSaved(record) => {
                self.record_form = RecordForm::default();
                self.activity_log
                    .push(format!("Saved record for {}", record.exercise_name));
                self.refresh_dashboard();
                self.load_records();
            }
            ApiEvent::ExerciseSaved(exercise) => {
                self.exercise_form = ExerciseForm::default();
                self.activity_log
                    .push(format!("Created exercise {}", exercise.name));
                self.load_exercises();
            }
            ApiEvent::PainUpdated(record) => {
                self.updating_record = None;
                self.pending.retain(|r| r.id != record.id);
                self.refresh_dashboard();
            }
            ApiEvent::RequestFailed(message) => {
                self.sending_chat = false;
                self.loading_trend = false;
                self.loading_report = false;
                self.updating_record = None;
                self.last_error = Some(message);
            }
            ApiEvent::Report(report) => {
                self.loading_report = false;
                self.report = Some(report);
            }
        }
    }
}
