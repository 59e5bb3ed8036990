//! Prompt-driven session: the terminal counterpart of the single-page flow.

use std::fmt;
use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use inquire::{InquireError, Select, Text};
use riskradar_ai::GeminiAnalyzer;
use riskradar_core::{RegionConfig, RiskLevel, region};
use riskradar_session::{Event, SessionController, SessionError, SessionState, read_contract_file};

use crate::{ProviderArgs, display, export_report};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    SelectRegion,
    PasteText,
    LoadFile,
    Analyze,
    ToggleFinding,
    Export,
    NewAnalysis,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SelectRegion => "Select jurisdiction",
            Self::PasteText => "Paste contract text",
            Self::LoadFile => "Load .txt / .md file",
            Self::Analyze => "Analyze risks",
            Self::ToggleFinding => "Expand / collapse a finding",
            Self::Export => "Download report",
            Self::NewAnalysis => "New analysis",
            Self::Quit => "Quit",
        })
    }
}

/// Menu entries offered in `state`. `Analyze` only appears once submit is enabled.
fn actions(state: &SessionState) -> Vec<Action> {
    match state {
        SessionState::NoRegion => vec![Action::SelectRegion, Action::Quit],
        SessionState::RegionSelected { draft, .. } => {
            let mut actions = vec![Action::PasteText, Action::LoadFile];
            if draft.is_submit_enabled() {
                actions.push(Action::Analyze);
            }
            actions.extend([Action::SelectRegion, Action::NewAnalysis, Action::Quit]);
            actions
        }
        SessionState::Analyzing { .. } => vec![Action::Quit],
        SessionState::ResultShown { result, .. } => {
            let mut actions = Vec::new();
            if !result.red_flags.is_empty() {
                actions.push(Action::ToggleFinding);
            }
            actions.extend([
                Action::Export,
                Action::SelectRegion,
                Action::NewAnalysis,
                Action::Quit,
            ]);
            actions
        }
    }
}

struct RegionChoice(&'static RegionConfig);

impl fmt::Display for RegionChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.0.flag, self.0.name, self.0.code)
    }
}

struct FindingChoice {
    index: usize,
    severity: RiskLevel,
    issue: String,
}

impl fmt::Display for FindingChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {:<9} {}", self.index + 1, self.severity, self.issue)
    }
}

pub async fn run(config: &ProviderArgs) -> anyhow::Result<()> {
    let mut session = SessionController::new(GeminiAnalyzer::new(config.gemini_config()));

    loop {
        display::print_view(&session.view());

        let menu = Select::new("Next step", actions(session.state())).prompt();
        let Some(action) = answer(menu)? else {
            break;
        };

        match action {
            Action::Quit => break,
            Action::SelectRegion => {
                let choices: Vec<RegionChoice> = region::all().map(RegionChoice).collect();
                if let Some(choice) = answer(Select::new("Jurisdiction", choices).prompt())? {
                    report(session.select_region(choice.0.code));
                }
            }
            Action::PasteText => {
                eprintln!(
                    "Paste the contract (minimum 50 characters), then a line with a single `{PASTE_TERMINATOR}`."
                );
                let text = read_pasted_text(io::stdin().lock())
                    .context("reading pasted contract text")?;
                report(session.edit_text(text));
            }
            Action::LoadFile => {
                if let Some(path) = answer(Text::new("File path").prompt())? {
                    match read_contract_file(&PathBuf::from(path.trim())) {
                        Ok((name, content)) => {
                            report(session.dispatch(Event::LoadFile { name, content }))
                        }
                        Err(err) => eprintln!("  ! {err}"),
                    }
                }
            }
            Action::Analyze => {
                if let Some(region) = session.state().region() {
                    eprintln!("Analyzing contract against {} law...", region.config().name);
                }
                report(session.submit().await);
            }
            Action::ToggleFinding => {
                let choices: Vec<FindingChoice> = session
                    .state()
                    .result()
                    .map(|result| {
                        result
                            .red_flags
                            .iter()
                            .enumerate()
                            .map(|(index, flag)| FindingChoice {
                                index,
                                severity: flag.severity,
                                issue: flag.issue.clone(),
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                if let Some(choice) = answer(Select::new("Finding", choices).prompt())? {
                    report(session.toggle_finding(choice.index));
                }
            }
            Action::Export => {
                let state = session.state();
                if let (Some(region), Some(result)) = (state.region(), state.result()) {
                    export_report(config, region, result).await;
                }
            }
            Action::NewAnalysis => report(session.reset()),
        }
    }
    Ok(())
}

/// Line that ends a pasted contract.
const PASTE_TERMINATOR: &str = ".";

/// Collect lines until [`PASTE_TERMINATOR`] or end of input. Line breaks are kept.
fn read_pasted_text(reader: impl BufRead) -> io::Result<String> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim() == PASTE_TERMINATOR {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

/// `None` when the user backs out of a prompt with Esc or Ctrl-C.
fn answer<T>(result: Result<T, InquireError>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err).context("reading interactive input"),
    }
}

fn report(outcome: Result<(), SessionError>) {
    if let Err(err) = outcome {
        eprintln!("  ! {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskradar_core::{AnalysisResult, RegionCode};

    fn selected(text: &str) -> SessionState {
        SessionState::NoRegion
            .apply(Event::SelectRegion(RegionCode::Singapore))
            .unwrap()
            .apply(Event::EditText(text.into()))
            .unwrap()
    }

    #[test]
    fn home_offers_region_choice_only() {
        assert_eq!(
            actions(&SessionState::NoRegion),
            vec![Action::SelectRegion, Action::Quit]
        );
    }

    #[test]
    fn analyze_appears_once_submit_is_enabled() {
        assert!(!actions(&selected(&"x".repeat(19))).contains(&Action::Analyze));
        assert!(actions(&selected(&"x".repeat(20))).contains(&Action::Analyze));
    }

    #[test]
    fn empty_result_hides_finding_toggle() {
        let state = selected(&"x".repeat(60))
            .apply(Event::Submit)
            .unwrap()
            .apply(Event::AnalysisSucceeded(AnalysisResult::default()))
            .unwrap();
        let offered = actions(&state);
        assert!(!offered.contains(&Action::ToggleFinding));
        assert!(offered.contains(&Action::Export));
    }

    #[test]
    fn pasted_text_keeps_every_line_up_to_terminator() {
        let input = "1. Parties\r\nAcme Pte Ltd and the Client.\n\n2. Term\n.\nignored\n";
        let text = read_pasted_text(input.as_bytes()).unwrap();
        assert_eq!(text, "1. Parties\nAcme Pte Ltd and the Client.\n\n2. Term");
    }

    #[test]
    fn pasted_text_ends_at_end_of_input() {
        let text = read_pasted_text("only line\nsecond line".as_bytes()).unwrap();
        assert_eq!(text, "only line\nsecond line");
        assert_eq!(read_pasted_text(io::empty()).unwrap(), "");
    }

    #[test]
    fn region_choice_label() {
        let label = RegionChoice(RegionCode::HongKong.config()).to_string();
        assert_eq!(label, "🇭🇰 Hong Kong (HK)");
    }
}
