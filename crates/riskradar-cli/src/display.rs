//! Terminal rendering of session views and analysis reports.
//!
//! Everything here prints a [`View`] (or a part of one) produced by
//! `riskradar_session::render`; no state is derived locally.

use std::io::IsTerminal;

use riskradar_core::{AnalysisResult, RegionCode, RiskLevel, region, status::SyncState};
use riskradar_session::view::{
    ContractForm, DISCLAIMER, FindingView, RegionTile, ResultView, Screen, StatusBanner, Tone,
    result_view,
};
use riskradar_session::{RiskBand, View};

const GAUGE_WIDTH: usize = 20;
const MAX_PREVIEW_CHARS: usize = 60;

// ── Public API ──

/// Print the full view: status banner then the current screen.
pub fn print_view(view: &View) {
    print_banner(&view.banner);
    match &view.screen {
        Screen::Home {
            regions,
            highlights,
        } => {
            print_regions(regions);
            println!("Why Legal Risk Radar");
            for (title, blurb) in highlights.iter() {
                println!("  {:<26} {}", title, blurb);
            }
            println!();
        }
        Screen::Compose { regions, form } => {
            print_regions(regions);
            print_form(form);
        }
        Screen::Result(result) => print_result(result),
    }
}

/// Print the static legal database status line.
pub fn print_banner(banner: &StatusBanner) {
    let regions: Vec<String> = banner
        .rows
        .iter()
        .map(|row| {
            let mark = match row.status {
                SyncState::Active => "●",
                SyncState::Syncing => "⟳",
            };
            format!("{mark} {} ({})", row.region, row.docs_count)
        })
        .collect();
    println!("LIVE LEGAL DB  {}", regions.join("  "));
    println!("{} • Latency: {}ms", banner.health, banner.latency_ms);
    println!();
}

/// Print the detailed status table for the `status` command.
pub fn print_status_table(banner: &StatusBanner) {
    println!("Legal database status");
    for row in banner.rows {
        let state = match row.status {
            SyncState::Active => "active",
            SyncState::Syncing => "syncing",
        };
        println!(
            "  {:<12} {:<8} {:>6} docs   updated {}",
            row.region, state, row.docs_count, row.last_update
        );
    }
    println!(
        "  {:<12} {:<8} {:>6} docs",
        "Total",
        "",
        riskradar_core::status::total_documents()
    );
    println!();
    println!("{} • Latency: {}ms", banner.health, banner.latency_ms);
}

/// Print every jurisdiction with its laws and source authorities.
pub fn print_catalog() {
    for config in region::all() {
        println!(
            "=== {} {} ({}) ===",
            config.flag, config.name, config.code
        );
        println!("  {:<26} {}", "currency", config.currency);
        println!("  {:<26} {}", "laws", config.laws.join(", "));
        println!("  {:<26} {}", "sources", config.sources.join(", "));
        println!();
    }
}

/// Print a result with every finding expanded, followed by the disclaimer.
///
/// The terminal stand-in for printing the report when no document can be downloaded.
pub fn print_report(region: RegionCode, result: &AnalysisResult) {
    let expanded = vec![true; result.red_flags.len()];
    print_result(&result_view(region, result, &expanded));
}

// ── Screens ──

fn print_regions(regions: &[RegionTile]) {
    println!("Select Jurisdiction");
    for tile in regions {
        let marker = if tile.selected { ">" } else { " " };
        println!(
            "  {} {:<4} {} {:<12} {}",
            marker, tile.code, tile.flag, tile.name, tile.currency
        );
    }
    println!();
}

fn print_form(form: &ContractForm) {
    println!("Upload Contract ({})", form.region_name);
    println!("  {:<26} {}", "framework", form.laws.join(", "));
    if let Some(name) = &form.file_name {
        println!("  {:<26} {} loaded successfully", "file", name);
    }
    println!("  {:<26} {} chars", "draft", form.char_count);

    let action = if form.loading {
        "analyzing..."
    } else if form.submit_enabled {
        "ready"
    } else {
        "disabled"
    };
    println!("  {:<26} {}", "submit", action);

    if let Some(notice) = &form.notice {
        println!();
        println!("  ! {notice}");
    }
    println!();
}

fn print_result(result: &ResultView) {
    let color = Palette::detect();

    println!("=== Risk Assessment: {} ===", result.region_name);
    println!(
        "  {:<26} {}{}{}  {}",
        "score",
        color.band(result.band),
        result.score_label,
        color.reset(),
        gauge(result.score)
    );
    println!("  {:<26} {} ({})", "rating", result.rating, result.band.as_str());
    if !result.summary.is_empty() {
        println!("  {:<26} {}", "summary", result.summary);
    }
    println!();

    println!("Compliant Points ({})", result.compliant_points.len());
    for point in &result.compliant_points {
        println!("  ✓ {point}");
    }
    println!();

    println!("Critical Risks");
    if result.critical_preview.is_empty() {
        println!("  No critical risks found.");
    }
    for item in &result.critical_preview {
        println!(
            "  {}{:<9}{} {}",
            color.severity(item.severity),
            item.severity,
            color.reset(),
            shorten(&item.issue, MAX_PREVIEW_CHARS)
        );
    }
    println!();

    if !result.findings.is_empty() {
        println!("Detailed Findings ({})", result.findings.len());
        for finding in &result.findings {
            print_finding(finding, &color);
        }
        println!();
    }

    if !result.laws_identified.is_empty() {
        println!("  {:<26} {}", "laws identified", result.laws_identified.join(", "));
        println!();
    }

    println!("{DISCLAIMER}");
}

fn print_finding(finding: &FindingView, color: &Palette) {
    let arrow = if finding.expanded { "▾" } else { "▸" };
    println!(
        "  {} [{}] {}{:<9}{} {}",
        arrow,
        finding.index + 1,
        color.tone(finding.tone),
        finding.severity,
        color.reset(),
        finding.issue
    );
    if let Some(detail) = &finding.detail {
        println!("      {:<22} {}", "law violated", detail.law_violated);
        println!("      {:<22} {}", "explanation", detail.explanation);
        println!("      {:<22} {}", "recommended action", detail.suggested_fix);
    }
}

// ── Helpers ──

/// `[██████░░░░...]` for a 0..=100 score. Out-of-range scores are clamped for drawing only.
fn gauge(score: i64) -> String {
    let filled = (score.clamp(0, 100) as usize * GAUGE_WIDTH) / 100;
    format!(
        "[{}{}]",
        "█".repeat(filled),
        "░".repeat(GAUGE_WIDTH - filled)
    )
}

fn shorten(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// ANSI colours, disabled when stdout is not a terminal.
struct Palette {
    enabled: bool,
}

impl Palette {
    fn detect() -> Self {
        Self {
            enabled: std::io::stdout().is_terminal(),
        }
    }

    fn code(&self, code: &'static str) -> &'static str {
        if self.enabled { code } else { "" }
    }

    fn reset(&self) -> &'static str {
        self.code("\x1b[0m")
    }

    fn band(&self, band: RiskBand) -> &'static str {
        match band {
            RiskBand::Safe => self.code("\x1b[32m"),
            RiskBand::Caution => self.code("\x1b[33m"),
            RiskBand::Danger => self.code("\x1b[31m"),
        }
    }

    fn tone(&self, tone: Tone) -> &'static str {
        match tone {
            Tone::Red => self.code("\x1b[31m"),
            Tone::Orange => self.code("\x1b[38;5;208m"),
            Tone::Yellow => self.code("\x1b[33m"),
            Tone::Blue => self.code("\x1b[34m"),
        }
    }

    fn severity(&self, level: RiskLevel) -> &'static str {
        self.tone(Tone::for_severity(level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_fills_proportionally() {
        assert_eq!(gauge(0), format!("[{}]", "░".repeat(20)));
        assert_eq!(gauge(100), format!("[{}]", "█".repeat(20)));
        assert_eq!(gauge(85).matches('█').count(), 17);
        assert_eq!(gauge(250), gauge(100));
        assert_eq!(gauge(-5), gauge(0));
    }

    #[test]
    fn shorten_respects_char_boundaries() {
        assert_eq!(shorten("short", 10), "short");
        assert_eq!(shorten(&"é".repeat(12), 10), format!("{}...", "é".repeat(7)));
    }
}
