//! View model: a pure description of what the session currently shows.
//!
//! [`render`] is re-evaluated after every transition. Nothing here talks to
//! the provider or the terminal.

use riskradar_core::status::{self, ScraperStatus};
use riskradar_core::{AnalysisResult, RegionCode, RiskLevel, region};

use crate::draft::ContractDraft;
use crate::state::SessionState;

/// Number of red flags surfaced in the condensed preview.
pub const PREVIEW_LIMIT: usize = 3;

pub const DISCLAIMER: &str = "Disclaimer: This tool provides automated analysis for informational \
purposes only and does not constitute legal advice. Always consult a qualified attorney for final \
contract review.";

/// Product highlights shown on the home screen as `(title, blurb)`.
pub const HIGHLIGHTS: &[(&str, &str)] = &[
    (
        "Multi-Region Logic",
        "Adapts analysis based on specific acts like PDPA (SG) or Contract Act 1872 (IN).",
    ),
    (
        "Gemini 2.5 Flash",
        "High-speed reasoning to identify subtle risks and unfair clauses in seconds.",
    ),
    (
        "Privacy First",
        "Contracts are processed securely via enterprise-grade API endpoints.",
    ),
];

/// Colour band derived locally from the numeric score.
///
/// Independent of the provider's rating label; the two may disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Safe,
    Caution,
    Danger,
}

impl RiskBand {
    pub fn from_score(score: i64) -> Self {
        if score < 30 {
            Self::Safe
        } else if score < 70 {
            Self::Caution
        } else {
            Self::Danger
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Caution => "caution",
            Self::Danger => "danger",
        }
    }
}

/// Badge colour for a severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Orange,
    Yellow,
    Blue,
}

impl Tone {
    pub fn for_severity(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Critical => Self::Red,
            RiskLevel::High => Self::Orange,
            RiskLevel::Medium => Self::Yellow,
            RiskLevel::Low | RiskLevel::Unknown => Self::Blue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub rows: &'static [ScraperStatus],
    pub health: &'static str,
    pub latency_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionTile {
    pub code: RegionCode,
    pub name: &'static str,
    pub flag: &'static str,
    pub currency: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractForm {
    pub region_name: &'static str,
    pub laws: &'static [&'static str],
    pub char_count: usize,
    pub file_name: Option<String>,
    pub submit_enabled: bool,
    pub loading: bool,
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewItem {
    pub issue: String,
    pub severity: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindingDetail {
    pub law_violated: String,
    pub explanation: String,
    pub suggested_fix: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindingView {
    pub index: usize,
    pub issue: String,
    pub severity: RiskLevel,
    pub tone: Tone,
    pub expanded: bool,
    /// Present only while expanded.
    pub detail: Option<FindingDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub region_name: &'static str,
    pub score: i64,
    pub score_label: String,
    pub band: RiskBand,
    /// Provider label, shown verbatim next to the band.
    pub rating: String,
    pub summary: String,
    pub compliant_points: Vec<String>,
    pub critical_preview: Vec<PreviewItem>,
    pub findings: Vec<FindingView>,
    pub laws_identified: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Home {
        regions: Vec<RegionTile>,
        highlights: &'static [(&'static str, &'static str)],
    },
    Compose {
        regions: Vec<RegionTile>,
        form: ContractForm,
    },
    Result(ResultView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub banner: StatusBanner,
    pub screen: Screen,
}

// ── Rendering ──

pub fn render(state: &SessionState) -> View {
    let screen = match state {
        SessionState::NoRegion => Screen::Home {
            regions: region_tiles(None),
            highlights: HIGHLIGHTS,
        },
        SessionState::RegionSelected {
            region,
            draft,
            notice,
        } => Screen::Compose {
            regions: region_tiles(Some(*region)),
            form: contract_form(*region, draft, false, notice.clone()),
        },
        SessionState::Analyzing { region, draft } => Screen::Compose {
            regions: region_tiles(Some(*region)),
            form: contract_form(*region, draft, true, None),
        },
        SessionState::ResultShown {
            region,
            result,
            expanded,
            ..
        } => Screen::Result(result_view(*region, result, expanded)),
    };

    View {
        banner: status_banner(),
        screen,
    }
}

/// Result view with every finding in the given expansion state.
pub fn result_view(region: RegionCode, result: &AnalysisResult, expanded: &[bool]) -> ResultView {
    let findings = result
        .red_flags
        .iter()
        .enumerate()
        .map(|(index, flag)| {
            let is_open = expanded.get(index).copied().unwrap_or(false);
            FindingView {
                index,
                issue: flag.issue.clone(),
                severity: flag.severity,
                tone: Tone::for_severity(flag.severity),
                expanded: is_open,
                detail: is_open.then(|| FindingDetail {
                    law_violated: flag.law_violated.clone(),
                    explanation: flag.explanation.clone(),
                    suggested_fix: flag.suggested_fix.clone(),
                }),
            }
        })
        .collect();

    // Provider order, no severity sort.
    let critical_preview = result
        .red_flags
        .iter()
        .take(PREVIEW_LIMIT)
        .map(|flag| PreviewItem {
            issue: flag.issue.clone(),
            severity: flag.severity,
        })
        .collect();

    ResultView {
        region_name: region.config().name,
        score: result.risk_score,
        score_label: format!("{}/100", result.risk_score),
        band: RiskBand::from_score(result.risk_score),
        rating: result.risk_rating.clone(),
        summary: result.summary.clone(),
        compliant_points: result.compliant_points.clone(),
        critical_preview,
        findings,
        laws_identified: result.applicable_laws_identified.clone(),
    }
}

fn status_banner() -> StatusBanner {
    StatusBanner {
        rows: status::INITIAL_SCRAPER_STATUS,
        health: status::SYSTEM_HEALTH,
        latency_ms: status::LATENCY_MS,
    }
}

fn region_tiles(selected: Option<RegionCode>) -> Vec<RegionTile> {
    region::all()
        .map(|config| RegionTile {
            code: config.code,
            name: config.name,
            flag: config.flag,
            currency: config.currency,
            selected: selected == Some(config.code),
        })
        .collect()
}

fn contract_form(
    code: RegionCode,
    draft: &ContractDraft,
    loading: bool,
    notice: Option<String>,
) -> ContractForm {
    let config = code.config();
    ContractForm {
        region_name: config.name,
        laws: config.laws,
        char_count: draft.char_count(),
        file_name: draft.file_name().map(str::to_owned),
        submit_enabled: !loading && draft.is_submit_enabled(),
        loading,
        notice,
    }
}
