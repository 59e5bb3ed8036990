//! Analysis result types shared between the provider client, the session, and export.
//!
//! Field names follow the JSON shape requested from the provider. Missing
//! fields deserialize to empty values: the provider's output is trusted as-is.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Four-level severity scale, ordered `Low < Medium < High < Critical`.
///
/// Missing or unrecognised provider values land in `Unknown`, which sorts below `Low`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskLevel {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
    // serde requires `other` on the last variant; the discriminant keeps it lowest in `Ord`.
    #[default]
    #[serde(other)]
    Unknown = 0,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single flagged contract issue. Identified only by its position in the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedFlag {
    #[serde(default)]
    pub issue: String,
    #[serde(default)]
    pub law_violated: String,
    #[serde(default)]
    pub severity: RiskLevel,
    #[serde(default)]
    pub explanation: String,
    /// Remedial clause language proposed by the provider.
    #[serde(default)]
    pub suggested_fix: String,
}

/// Completed assessment as returned by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    /// 0 (safe) to 100 (extremely risky). Not range-checked.
    pub risk_score: i64,
    /// Provider-assigned label, kept verbatim even when it disagrees with the score.
    pub risk_rating: String,
    pub summary: String,
    pub red_flags: Vec<RedFlag>,
    pub compliant_points: Vec<String>,
    pub applicable_laws_identified: Vec<String>,
}
