use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Mock,
    Live,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(Mode::Mock),
            "live" => Ok(Mode::Live),
            _ => anyhow::bail!("Invalid MODE: {}. Must be 'mock' or 'live'", s),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub http_max_retries: u32,
    /// Page size for the records list view.
    pub records_page_size: usize,
    /// Maximum records fetched per exercise for the trends view.
    pub trend_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mode_str = env::var("MODE").unwrap_or_else(|_| "mock".to_string());
        let mode = Mode::from_str(&mode_str)?;

        let api_base_url = env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8000/api/v1".to_string());
        url::Url::parse(&api_base_url).context("Invalid API_BASE_URL")?;

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .context("Invalid REQUEST_TIMEOUT_SECS")?;

        let http_max_retries = env::var("HTTP_MAX_RETRIES")
            .unwrap_or_else(|_| "3".to_string())
            .parse::<u32>()
            .context("Invalid HTTP_MAX_RETRIES")?;

        let records_page_size = env::var("RECORDS_PAGE_SIZE")
            .unwrap_or_else(|_| "50".to_string())
            .parse::<usize>()
            .context("Invalid RECORDS_PAGE_SIZE")?;

        let trend_limit = env::var("TREND_LIMIT")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<usize>()
            .context("Invalid TREND_LIMIT")?;

        Ok(Self {
            mode,
            api_base_url,
            request_timeout_secs,
            http_max_retries,
            records_page_size,
            trend_limit,
        })
    }
}
