//! Session finite-state machine.
//!
//! ```text
//! NoRegion ──select──▶ RegionSelected ──submit──▶ Analyzing ──ok──▶ ResultShown
//!    ▲                   ▲    │  ▲                   │                │  │
//!    │                   │    │  └──────failed───────┘                │  │
//!    │                   │    └───────────reset────────────┐          │  │
//!    │                   └──────────────select─────────────┼──────────┘  │
//!    └─────────────────────────────────reset───────────────┴─────────────┘
//! ```

use riskradar_core::{AnalysisResult, RegionCode};
use thiserror::Error;

use crate::draft::{ContractDraft, MIN_ENABLED_CHARS, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    NoRegion,
    RegionSelected {
        region: RegionCode,
        draft: ContractDraft,
        /// Set after a failed analysis until the next user action.
        notice: Option<String>,
    },
    Analyzing {
        region: RegionCode,
        draft: ContractDraft,
    },
    ResultShown {
        region: RegionCode,
        draft: ContractDraft,
        result: AnalysisResult,
        /// One entry per red flag; all start collapsed.
        expanded: Vec<bool>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SelectRegion(RegionCode),
    EditText(String),
    LoadFile { name: String, content: String },
    Submit,
    AnalysisSucceeded(AnalysisResult),
    AnalysisFailed { notice: String },
    ToggleFinding(usize),
    Reset,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("select a jurisdiction first")]
    NoRegionSelected,
    #[error("an analysis is already in progress")]
    AnalysisInFlight,
    #[error("contract input is closed while a result is displayed")]
    ResultDisplayed,
    #[error("submit is disabled below {required} characters ({chars} entered)")]
    SubmitDisabled { chars: usize, required: usize },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no analysis is in progress")]
    NoPendingAnalysis,
    #[error("no result is displayed")]
    NoResult,
    #[error("finding {index} does not exist ({count} findings)")]
    NoSuchFinding { index: usize, count: usize },
}

impl SessionState {
    /// Next state for `event`. A rejected event leaves `self` as it was.
    pub fn apply(&self, event: Event) -> Result<SessionState, SessionError> {
        use SessionState::*;

        match (self, event) {
            (Analyzing { .. }, Event::SelectRegion(_) | Event::Reset) => {
                Err(SessionError::AnalysisInFlight)
            }
            (NoRegion, Event::SelectRegion(region)) => Ok(RegionSelected {
                region,
                draft: ContractDraft::new(),
                notice: None,
            }),
            // Changing jurisdiction keeps the draft so it can be re-analysed.
            (
                RegionSelected { draft, .. } | ResultShown { draft, .. },
                Event::SelectRegion(region),
            ) => Ok(RegionSelected {
                region,
                draft: draft.clone(),
                notice: None,
            }),
            (_, Event::Reset) => Ok(NoRegion),

            (RegionSelected { region, draft, .. }, Event::EditText(text)) => {
                let mut draft = draft.clone();
                draft.set_text(text);
                Ok(RegionSelected {
                    region: *region,
                    draft,
                    notice: None,
                })
            }
            (RegionSelected { region, draft, .. }, Event::LoadFile { name, content }) => {
                let mut draft = draft.clone();
                draft.install_file(name, content);
                Ok(RegionSelected {
                    region: *region,
                    draft,
                    notice: None,
                })
            }
            (RegionSelected { region, draft, .. }, Event::Submit) => {
                if !draft.is_submit_enabled() {
                    return Err(SessionError::SubmitDisabled {
                        chars: draft.char_count(),
                        required: MIN_ENABLED_CHARS,
                    });
                }
                draft.submit()?;
                Ok(Analyzing {
                    region: *region,
                    draft: draft.clone(),
                })
            }
            (Analyzing { region, draft }, Event::AnalysisSucceeded(result)) => {
                let expanded = vec![false; result.red_flags.len()];
                Ok(ResultShown {
                    region: *region,
                    draft: draft.clone(),
                    result,
                    expanded,
                })
            }
            (Analyzing { region, draft }, Event::AnalysisFailed { notice }) => Ok(RegionSelected {
                region: *region,
                draft: draft.clone(),
                notice: Some(notice),
            }),
            (
                ResultShown {
                    region,
                    draft,
                    result,
                    expanded,
                },
                Event::ToggleFinding(index),
            ) => {
                if index >= expanded.len() {
                    return Err(SessionError::NoSuchFinding {
                        index,
                        count: expanded.len(),
                    });
                }
                let mut expanded = expanded.clone();
                expanded[index] = !expanded[index];
                Ok(ResultShown {
                    region: *region,
                    draft: draft.clone(),
                    result: result.clone(),
                    expanded,
                })
            }

            (NoRegion, Event::EditText(_) | Event::LoadFile { .. } | Event::Submit) => {
                Err(SessionError::NoRegionSelected)
            }
            (Analyzing { .. }, Event::EditText(_) | Event::LoadFile { .. } | Event::Submit) => {
                Err(SessionError::AnalysisInFlight)
            }
            (ResultShown { .. }, Event::EditText(_) | Event::LoadFile { .. } | Event::Submit) => {
                Err(SessionError::ResultDisplayed)
            }
            (_, Event::AnalysisSucceeded(_) | Event::AnalysisFailed { .. }) => {
                Err(SessionError::NoPendingAnalysis)
            }
            (_, Event::ToggleFinding(_)) => Err(SessionError::NoResult),
        }
    }

    /// Short label for log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoRegion => "no_region",
            Self::RegionSelected { .. } => "region_selected",
            Self::Analyzing { .. } => "analyzing",
            Self::ResultShown { .. } => "result_shown",
        }
    }

    pub fn region(&self) -> Option<RegionCode> {
        match self {
            Self::NoRegion => None,
            Self::RegionSelected { region, .. }
            | Self::Analyzing { region, .. }
            | Self::ResultShown { region, .. } => Some(*region),
        }
    }

    pub fn draft(&self) -> Option<&ContractDraft> {
        match self {
            Self::NoRegion => None,
            Self::RegionSelected { draft, .. }
            | Self::Analyzing { draft, .. }
            | Self::ResultShown { draft, .. } => Some(draft),
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            Self::ResultShown { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&str> {
        match self {
            Self::RegionSelected { notice, .. } => notice.as_deref(),
            _ => None,
        }
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self, Self::Analyzing { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskradar_core::{RedFlag, RiskLevel};

    fn contract(chars: usize) -> String {
        "c".repeat(chars)
    }

    fn selected(region: RegionCode, text: &str) -> SessionState {
        SessionState::NoRegion
            .apply(Event::SelectRegion(region))
            .unwrap()
            .apply(Event::EditText(text.to_string()))
            .unwrap()
    }

    fn result_with_flags(n: usize) -> AnalysisResult {
        AnalysisResult {
            risk_score: 55,
            risk_rating: "Medium".into(),
            red_flags: (0..n)
                .map(|i| RedFlag {
                    issue: format!("issue {i}"),
                    law_violated: "Contract Act 1950".into(),
                    severity: RiskLevel::Medium,
                    explanation: String::new(),
                    suggested_fix: String::new(),
                })
                .collect(),
            ..Default::default()
        }
    }

    fn shown(n: usize) -> SessionState {
        selected(RegionCode::Malaysia, &contract(60))
            .apply(Event::Submit)
            .unwrap()
            .apply(Event::AnalysisSucceeded(result_with_flags(n)))
            .unwrap()
    }

    #[test]
    fn starts_without_region() {
        assert_eq!(SessionState::default(), SessionState::NoRegion);
    }

    #[test]
    fn happy_path() {
        let state = selected(RegionCode::Singapore, &contract(60));
        assert_eq!(state.name(), "region_selected");
        let state = state.apply(Event::Submit).unwrap();
        assert!(state.is_analyzing());
        let state = state
            .apply(Event::AnalysisSucceeded(result_with_flags(2)))
            .unwrap();
        assert_eq!(state.result().unwrap().red_flags.len(), 2);
        assert_eq!(state.apply(Event::Reset).unwrap(), SessionState::NoRegion);
    }

    #[test]
    fn short_submission_is_rejected_without_state_change() {
        let state = selected(RegionCode::India, &contract(49));
        let err = state.apply(Event::Submit).unwrap_err();
        assert!(matches!(err, SessionError::Validation(_)));
        assert_eq!(state.name(), "region_selected");
    }

    #[test]
    fn nineteen_chars_submit_disabled() {
        let state = selected(RegionCode::India, &contract(19));
        assert_eq!(
            state.apply(Event::Submit).unwrap_err(),
            SessionError::SubmitDisabled {
                chars: 19,
                required: 20
            }
        );
    }

    #[test]
    fn exactly_fifty_chars_proceeds() {
        let state = selected(RegionCode::India, &contract(50));
        assert!(state.apply(Event::Submit).unwrap().is_analyzing());
    }

    #[test]
    fn analyzing_blocks_resubmission_and_navigation() {
        let state = selected(RegionCode::Uae, &contract(80))
            .apply(Event::Submit)
            .unwrap();
        for event in [
            Event::Submit,
            Event::Reset,
            Event::SelectRegion(RegionCode::HongKong),
            Event::EditText("new".into()),
        ] {
            assert_eq!(
                state.apply(event).unwrap_err(),
                SessionError::AnalysisInFlight
            );
        }
    }

    #[test]
    fn failure_returns_to_region_selected_with_draft() {
        let text = contract(70);
        let state = selected(RegionCode::Singapore, &text)
            .apply(Event::Submit)
            .unwrap()
            .apply(Event::AnalysisFailed {
                notice: "failed".into(),
            })
            .unwrap();
        assert_eq!(state.name(), "region_selected");
        assert_eq!(state.draft().unwrap().text(), text);
        assert_eq!(state.notice(), Some("failed"));
        assert!(state.result().is_none());
    }

    #[test]
    fn editing_clears_notice() {
        let state = selected(RegionCode::Singapore, &contract(70))
            .apply(Event::Submit)
            .unwrap()
            .apply(Event::AnalysisFailed {
                notice: "failed".into(),
            })
            .unwrap()
            .apply(Event::EditText(contract(71)))
            .unwrap();
        assert_eq!(state.notice(), None);
    }

    #[test]
    fn selecting_region_clears_result() {
        let state = shown(1)
            .apply(Event::SelectRegion(RegionCode::HongKong))
            .unwrap();
        assert_eq!(state.name(), "region_selected");
        assert_eq!(state.region(), Some(RegionCode::HongKong));
        assert!(state.result().is_none());
        assert_eq!(state.draft().unwrap().char_count(), 60);
    }

    #[test]
    fn reset_from_region_selected() {
        let state = selected(RegionCode::India, "draft");
        assert_eq!(state.apply(Event::Reset).unwrap(), SessionState::NoRegion);
    }

    #[test]
    fn findings_toggle_independently() {
        let state = shown(3);
        let SessionState::ResultShown { expanded, .. } = &state else {
            panic!("expected result");
        };
        assert_eq!(expanded, &[false, false, false]);

        let state = state
            .apply(Event::ToggleFinding(1))
            .unwrap()
            .apply(Event::ToggleFinding(2))
            .unwrap()
            .apply(Event::ToggleFinding(1))
            .unwrap();
        let SessionState::ResultShown { expanded, .. } = &state else {
            panic!("expected result");
        };
        assert_eq!(expanded, &[false, false, true]);
    }

    #[test]
    fn toggle_out_of_range() {
        assert_eq!(
            shown(2).apply(Event::ToggleFinding(2)).unwrap_err(),
            SessionError::NoSuchFinding { index: 2, count: 2 }
        );
        assert_eq!(
            SessionState::NoRegion
                .apply(Event::ToggleFinding(0))
                .unwrap_err(),
            SessionError::NoResult
        );
    }

    #[test]
    fn input_requires_region() {
        assert_eq!(
            SessionState::NoRegion
                .apply(Event::EditText("x".into()))
                .unwrap_err(),
            SessionError::NoRegionSelected
        );
    }

    #[test]
    fn stray_provider_outcome_is_rejected() {
        let state = selected(RegionCode::India, "draft");
        assert_eq!(
            state
                .apply(Event::AnalysisSucceeded(AnalysisResult::default()))
                .unwrap_err(),
            SessionError::NoPendingAnalysis
        );
    }

    #[test]
    fn load_file_sets_label() {
        let state = SessionState::NoRegion
            .apply(Event::SelectRegion(RegionCode::India))
            .unwrap()
            .apply(Event::LoadFile {
                name: "msa.txt".into(),
                content: contract(90),
            })
            .unwrap();
        assert_eq!(state.draft().unwrap().file_name(), Some("msa.txt"));
    }
}
