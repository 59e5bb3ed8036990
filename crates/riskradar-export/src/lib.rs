//! Report export: remote PDF generation with a print fallback.

pub mod http;

pub use http::{ExportError, ExportOutcome, ReportClient, ReportPayload};
