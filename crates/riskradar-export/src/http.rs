//! HTTP client for the report-generation endpoint.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use riskradar_core::{AnalysisResult, RedFlag};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_REPORT_URL: &str = "http://localhost:3000/api/v1/generate-report";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Body POSTed to the report endpoint.
#[derive(Debug, Serialize)]
pub struct ReportPayload<'a> {
    pub risk_score: i64,
    pub summary: &'a str,
    pub red_flags: &'a [RedFlag],
    /// RFC 3339, UTC.
    pub timestamp: String,
}

impl<'a> ReportPayload<'a> {
    pub fn new(result: &'a AnalysisResult, at: DateTime<Utc>) -> Self {
        Self {
            risk_score: result.risk_score,
            summary: &result.summary,
            red_flags: &result.red_flags,
            timestamp: at.to_rfc3339(),
        }
    }
}

/// What happened to an export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The endpoint returned a document, saved at this path.
    Downloaded(PathBuf),
    /// The endpoint was unavailable; the caller prints the report instead.
    PrintFallback,
}

/// Client for the report-generation endpoint.
pub struct ReportClient {
    client: reqwest::Client,
    url: String,
}

impl ReportClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Request a rendered report. Returns the raw document bytes.
    pub async fn generate(&self, result: &AnalysisResult) -> Result<Vec<u8>, ExportError> {
        let payload = ReportPayload::new(result, Utc::now());

        info!(url = %self.url, red_flags = payload.red_flags.len(), "requesting report");
        let resp = self.client.post(&self.url).json(&payload).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ExportError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp.bytes().await?;
        Ok(bytes.to_vec())
    }

    /// Generate a report and save it in `out_dir`.
    ///
    /// Every failure degrades to [`ExportOutcome::PrintFallback`] with a warning.
    pub async fn export(&self, result: &AnalysisResult, out_dir: &Path) -> ExportOutcome {
        match self.download(result, out_dir).await {
            Ok(path) => {
                info!(path = %path.display(), "report saved");
                ExportOutcome::Downloaded(path)
            }
            Err(err) => {
                warn!(error = %err, "report endpoint unavailable, falling back to print");
                ExportOutcome::PrintFallback
            }
        }
    }

    async fn download(&self, result: &AnalysisResult, out_dir: &Path) -> Result<PathBuf, ExportError> {
        let bytes = self.generate(result).await?;
        let path = out_dir.join(report_file_name(Utc::now()));
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|source| ExportError::Write {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }
}

/// `Legal_Risk_Report_<unix millis>.pdf`
pub fn report_file_name(at: DateTime<Utc>) -> String {
    format!("Legal_Risk_Report_{}.pdf", at.timestamp_millis())
}
