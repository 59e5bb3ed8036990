use thiserror::Error;

/// Failure of a single analysis call.
///
/// Callers show one generic message for every variant; the distinction is for logs.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("missing API credential: set GEMINI_API_KEY or API_KEY")]
    Configuration,

    #[error("empty response from analysis provider")]
    EmptyResponse,

    #[error("provider response is not a valid analysis JSON object: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Provider { status: u16, body: String },
}

impl AnalysisError {
    /// Stable label for the `kind` log field. Non-success HTTP statuses count as transport.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::EmptyResponse => "empty_response",
            Self::Parse(_) => "parse",
            Self::Transport(_) | Self::Provider { .. } => "transport",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_status_is_a_transport_failure() {
        let err = AnalysisError::Provider {
            status: 503,
            body: "overloaded".into(),
        };
        assert_eq!(err.kind(), "transport");
        assert_eq!(err.to_string(), "provider returned 503: overloaded");
    }

    #[test]
    fn parse_kind() {
        let err: AnalysisError = serde_json::from_str::<serde_json::Value>("nope")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), "parse");
    }
}
