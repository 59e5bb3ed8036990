use async_trait::async_trait;
use riskradar_core::{AnalysisResult, RegionConfig};

use crate::AnalysisError;

/// Capability seam between the session and whichever provider performs the analysis.
///
/// Implementations make exactly one attempt per call: no retry, no partial results.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(
        &self,
        contract_text: &str,
        region: &RegionConfig,
    ) -> Result<AnalysisResult, AnalysisError>;
}
