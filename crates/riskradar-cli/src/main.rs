mod display;
mod interactive;

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{ArgAction, Args, Parser, Subcommand};
use riskradar_ai::{GeminiAnalyzer, GeminiConfig, gemini};
use riskradar_core::region;
use riskradar_export::{ExportOutcome, ReportClient, http::DEFAULT_REPORT_URL};
use riskradar_session::{Event, SessionController, SessionState, read_contract_file};
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "riskradar", version, about = "AI contract risk analysis against local law")]
struct Cli {
    #[command(flatten)]
    config: ProviderArgs,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Clone)]
struct ProviderArgs {
    /// Gemini API key. Overrides `GEMINI_API_KEY` and `API_KEY`.
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[arg(long, env = "RISKRADAR_MODEL", default_value = gemini::DEFAULT_MODEL, global = true)]
    model: String,

    #[arg(long, env = "RISKRADAR_API_BASE", default_value = gemini::DEFAULT_BASE_URL, global = true)]
    api_base: String,

    /// Report-generation endpoint used by `--export`.
    #[arg(long, env = "RISKRADAR_REPORT_URL", default_value = DEFAULT_REPORT_URL, global = true)]
    report_url: String,

    /// Directory downloaded reports are written to.
    #[arg(long, default_value = ".", global = true)]
    out_dir: PathBuf,
}

impl ProviderArgs {
    /// Environment settings with command-line flags on top.
    fn gemini_config(&self) -> GeminiConfig {
        let config = GeminiConfig::from_env()
            .with_model(&self.model)
            .with_base_url(&self.api_base);
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => config.with_api_key(key),
            _ => config,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List supported jurisdictions with their laws and source authorities.
    Regions,
    /// Show the legal database status banner.
    Status,
    /// Analyze one contract and print the assessment.
    Analyze(AnalyzeArgs),
    /// Interactive session: pick a region, submit text, browse findings.
    Session,
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Jurisdiction code: IN, SG, MY, AE, or HK.
    #[arg(short, long)]
    region: String,

    /// Plain-text (.txt / .md) contract file. Reads stdin when neither --file nor --text is given.
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Contract text passed inline.
    #[arg(short, long)]
    text: Option<String>,

    /// Expand every finding.
    #[arg(long)]
    expand_all: bool,

    /// Print the raw analysis result as JSON instead of the report view.
    #[arg(long)]
    json: bool,

    /// Request a PDF from the report endpoint (falls back to printing the report).
    #[arg(long)]
    export: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!("riskradar v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Regions => display::print_catalog(),
        Command::Status => {
            let view = riskradar_session::render(&SessionState::NoRegion);
            display::print_status_table(&view.banner);
        }
        Command::Analyze(args) => analyze(&cli.config, args).await?,
        Command::Session => interactive::run(&cli.config).await?,
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn analyze(config: &ProviderArgs, args: AnalyzeArgs) -> anyhow::Result<()> {
    let region = region::lookup(&args.region)?;
    let mut session = SessionController::new(GeminiAnalyzer::new(config.gemini_config()));
    session.select_region(region.code)?;

    match (&args.file, args.text) {
        (Some(path), _) => {
            let (name, content) = read_contract_file(path)?;
            session.dispatch(Event::LoadFile { name, content })?;
        }
        (None, Some(text)) => session.edit_text(text)?,
        (None, None) => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("reading contract text from stdin")?;
            session.edit_text(text)?;
        }
    }

    eprintln!("Analyzing contract against {} law...", region.name);
    session.submit().await?;

    let SessionState::ResultShown { result, .. } = session.state() else {
        let notice = session.state().notice().unwrap_or("analysis failed");
        bail!("{notice}");
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        if args.expand_all {
            for index in 0..result.red_flags.len() {
                session.toggle_finding(index)?;
            }
        }
        display::print_view(&session.view());
    }

    if args.export {
        if let Some(result) = session.state().result() {
            export_report(config, region.code, result).await;
        }
    }
    Ok(())
}

/// Download the report, or print it when the endpoint is unavailable.
pub(crate) async fn export_report(
    config: &ProviderArgs,
    region: riskradar_core::RegionCode,
    result: &riskradar_core::AnalysisResult,
) {
    let client = ReportClient::new(&config.report_url);
    match client.export(result, &config.out_dir).await {
        ExportOutcome::Downloaded(path) => println!("Report saved to {}", path.display()),
        ExportOutcome::PrintFallback => {
            println!();
            display::print_report(region, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("riskradar").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_override_provider_settings() {
        let cli = parse(&[
            "--api-key",
            "flag-key",
            "--model",
            "gemini-2.5-pro",
            "--api-base",
            "http://localhost:8080/v1/",
            "regions",
        ]);
        let config = cli.config.gemini_config();
        assert_eq!(config.api_key.as_deref(), Some("flag-key"));
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn blank_flag_key_does_not_override() {
        let cli = parse(&["--api-key", "  ", "status"]);
        let config = cli.config.gemini_config();
        assert_eq!(config.api_key, GeminiConfig::from_env().api_key);
    }

    #[test]
    fn analyze_rejects_file_and_text_together() {
        let args = ["riskradar", "analyze", "-r", "SG", "--file", "a.txt", "--text", "b"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
