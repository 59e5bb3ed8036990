//! Session lifecycle for one user: region choice, draft, analysis, result.
//!
//! State is an explicit value ([`SessionState`]); transitions are pure
//! ([`SessionState::apply`]); the view is a pure function of state
//! ([`view::render`]). [`SessionController`] is the only place that awaits
//! the analysis provider.

pub mod controller;
pub mod draft;
pub mod state;
pub mod view;

pub use controller::{GENERIC_FAILURE_NOTICE, SessionController};
pub use draft::{ContractDraft, DraftError, ValidationError, read_contract_file};
pub use state::{Event, SessionError, SessionState};
pub use view::{RiskBand, View, render};
