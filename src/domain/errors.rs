use thiserror::Error;

/// Errors produced at the backend boundary. The analyzer itself defines no
/// error kinds; empty or too-short inputs are represented as absent values.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {reason}")]
    Transport { reason: String },

    #[error("Backend returned {status} for {endpoint}: {body}")]
    Status {
        status: u16,
        endpoint: String,
        body: String,
    },

    #[error("Could not decode response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_formatting() {
        let error = ApiError::Status {
            status: 404,
            endpoint: "/reports/monthly/2026/2".to_string(),
            body: "no records for period".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("/reports/monthly/2026/2"));
        assert!(msg.contains("no records for period"));
    }

    #[test]
    fn test_transport_error_formatting() {
        let error = ApiError::Transport {
            reason: "connection refused".to_string(),
        };
        assert!(error.to_string().contains("connection refused"));
    }
}
