use crate::config::Config;
use crate::domain::errors::ApiError;
use crate::domain::ports::TrainingApi;
use crate::domain::records::{
    AggregateStats, ChatReply, Exercise, MonthlyReport, NewExercise, NewRecord, TrainingRecord,
};
use crate::infrastructure::http_client_factory::HttpClientFactory;
use anyhow::Result;
use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

/// REST implementation of [`TrainingApi`] against the tracker backend.
pub struct RestTrainingApi {
    client: ClientWithMiddleware,
    base_url: String,
}

impl RestTrainingApi {
    pub fn new(config: &Config) -> Self {
        let client =
            HttpClientFactory::create_client(config.request_timeout_secs, config.http_max_retries);

        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn decode<T: DeserializeOwned>(
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                body,
            }
            .into());
        }

        response.json::<T>().await.map_err(|e| {
            ApiError::Decode {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        debug!("GET {}", endpoint);
        let response = self
            .client
            .get(self.url(endpoint))
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                reason: e.to_string(),
            })?;

        Self::decode(endpoint, response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        debug!("POST {}", endpoint);
        let response = self
            .client
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                reason: e.to_string(),
            })?;

        Self::decode(endpoint, response).await
    }

    async fn patch_json<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        debug!("PATCH {}", endpoint);
        let response = self
            .client
            .patch(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                reason: e.to_string(),
            })?;

        Self::decode(endpoint, response).await
    }
}

#[async_trait]
impl TrainingApi for RestTrainingApi {
    async fn send_chat_message(&self, message: &str) -> Result<ChatReply> {
        self.post_json("/chat", &serde_json::json!({ "message": message }))
            .await
    }

    async fn list_exercises(&self) -> Result<Vec<Exercise>> {
        self.get_json("/exercises", &[]).await
    }

    async fn create_exercise(&self, exercise: NewExercise) -> Result<Exercise> {
        self.post_json("/exercises", &exercise).await
    }

    async fn list_records(&self, limit: usize, offset: usize) -> Result<Vec<TrainingRecord>> {
        self.get_json(
            "/records",
            &[("limit", limit.to_string()), ("offset", offset.to_string())],
        )
        .await
    }

    async fn pending_records(&self) -> Result<Vec<TrainingRecord>> {
        self.get_json("/records/pending", &[]).await
    }

    async fn records_for_exercise(
        &self,
        exercise_id: Uuid,
        limit: usize,
    ) -> Result<Vec<TrainingRecord>> {
        self.get_json(
            &format!("/records/exercise/{}", exercise_id),
            &[("limit", limit.to_string())],
        )
        .await
    }

    async fn create_record(&self, record: NewRecord) -> Result<TrainingRecord> {
        self.post_json("/records", &record).await
    }

    async fn update_next_day_pain(&self, record_id: i64, pain: u8) -> Result<TrainingRecord> {
        self.patch_json(
            &format!("/records/{}/next-day-pain", record_id),
            &serde_json::json!({ "painNextDay": pain }),
        )
        .await
    }

    async fn fetch_stats(&self) -> Result<AggregateStats> {
        self.get_json("/reports/stats", &[]).await
    }

    async fn monthly_report(&self, year: i32, month: u32) -> Result<MonthlyReport> {
        self.get_json(&format!("/reports/monthly/{}/{}", year, month), &[])
            .await
    }
}
