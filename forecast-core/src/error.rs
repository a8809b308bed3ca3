use reqwest::StatusCode;

/// Shown when no payload could be obtained.
pub const RETRIEVE_FAILED_MESSAGE: &str = "could not retrieve data";

/// Shown when a payload arrived but neither summary could be built from it.
pub const PARSE_FAILED_MESSAGE: &str = "could not parse data";

/// Why a forecast document could not be fetched.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Forecast request failed with status {status}: {body}")]
    Http { status: StatusCode, body: String },
    #[error("Failed to parse forecast JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    pub fn user_message(&self) -> &'static str {
        RETRIEVE_FAILED_MESSAGE
    }
}

/// Structural problems that stop a summary from being built at all.
///
/// Missing leaf fields are not errors; they become `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("Forecast payload is empty")]
    EmptyPayload,
    #[error("Forecast payload is not an array of reports")]
    NotAnArray,
    #[error("Report entry {0} is not an object")]
    MalformedReport(usize),
    #[error("First report entry has no timeSeries section")]
    MissingTimeSeries,
}

impl ExtractError {
    pub fn user_message(&self) -> &'static str {
        PARSE_FAILED_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_distinguishable() {
        let fetch = FetchError::Http {
            status: StatusCode::NOT_FOUND,
            body: "missing".into(),
        };
        assert_eq!(fetch.user_message(), RETRIEVE_FAILED_MESSAGE);
        assert_eq!(ExtractError::EmptyPayload.user_message(), PARSE_FAILED_MESSAGE);
        assert_ne!(RETRIEVE_FAILED_MESSAGE, PARSE_FAILED_MESSAGE);
    }

    #[test]
    fn http_error_display_includes_status() {
        let err = FetchError::Http {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "oops".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("oops"));
    }
}
