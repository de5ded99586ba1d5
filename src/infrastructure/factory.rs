use crate::config::{Config, Mode};
use crate::domain::ports::TrainingApi;
use crate::infrastructure::mock::MockTrainingApi;
use crate::infrastructure::rest_api::RestTrainingApi;
use std::sync::Arc;
use tracing::info;

pub struct ServiceFactory;

impl ServiceFactory {
    pub fn create_api(config: &Config) -> Arc<dyn TrainingApi> {
        match config.mode {
            Mode::Mock => {
                info!("ServiceFactory: using in-memory mock backend");
                Arc::new(MockTrainingApi::with_sample_data())
            }
            Mode::Live => {
                info!("ServiceFactory: using REST backend at {}", config.api_base_url);
                Arc::new(RestTrainingApi::new(config))
            }
        }
    }
}
