use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Args, Parser, Subcommand};
use serde::Serialize;
use tokio::io::AsyncReadExt;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use eligibility::chat::ChatService;
use eligibility::config::Config;
use eligibility::eligibility::status::{status_info, StatusInfo};
use eligibility::errors::AppError;
use eligibility::eligibility::{
    parse_analysis, CompanyReport, EligibilityAnalysis, EligibilityChecker, EligibilityService,
    ProgramCheck,
};
use eligibility::llm_client::{self, LlmClient, TextGenerator};
use eligibility::models::company::CompanySnapshot;
use eligibility::programs::extract_rules;
use eligibility::registry::{CompanyRegistry, MockRegistry, StaticRegistry};
use eligibility::store::{seeds, InMemoryStore, ProgramRepository};

#[derive(Parser, Debug)]
#[command(
    name = "eligibility",
    about = "Check Romanian companies against EU funding program eligibility rules",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a saved eligibility assessment and print the findings as JSON
    Parse(InputArgs),
    /// Check a company against every seeded program
    Check(CheckArgs),
    /// Ask the funding consultant a question about one program
    Chat(ChatArgs),
    /// Split a program guide into company and project rules
    ExtractRules(InputArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input file; reads stdin when omitted
    file: Option<PathBuf>,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["cui", "company"])))]
struct CheckArgs {
    /// Company CUI, with or without the RO prefix (demo registry data)
    #[arg(long)]
    cui: Option<String>,
    /// JSON file holding a registry snapshot
    #[arg(long)]
    company: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ChatArgs {
    #[arg(long)]
    cui: String,
    /// Program title, e.g. "SME Innovation Support"
    #[arg(long)]
    program: String,
    #[arg(long)]
    message: String,
}

#[derive(Serialize)]
struct AnalysisView {
    summary: String,
    status: StatusInfo,
    #[serde(flatten)]
    analysis: EligibilityAnalysis,
}

impl From<EligibilityAnalysis> for AnalysisView {
    fn from(analysis: EligibilityAnalysis) -> Self {
        Self {
            summary: analysis.summary(),
            status: status_info(analysis.verdict),
            analysis,
        }
    }
}

#[derive(Serialize)]
struct ProgramView {
    program: String,
    eligible: bool,
    analysis: AnalysisView,
}

#[derive(Serialize)]
struct ReportView {
    company: String,
    cui: String,
    data_source: &'static str,
    eligible: Vec<ProgramView>,
    ineligible: Vec<ProgramView>,
}

impl From<CompanyReport> for ReportView {
    fn from(report: CompanyReport) -> Self {
        let views = |entries: Vec<ProgramCheck>| -> Vec<ProgramView> {
            entries
                .into_iter()
                .map(|entry| ProgramView {
                    eligible: entry.check.eligible,
                    analysis: entry.analysis().into(),
                    program: entry.program.title,
                })
                .collect()
        };

        Self {
            company: report.company.snapshot.company_name().to_string(),
            data_source: report.company.snapshot.data_source_info(),
            cui: report.company.cui,
            eligible: views(report.eligible),
            ineligible: views(report.ineligible),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries the JSON output.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        "eligibility v{} (mock responses: {})",
        env!("CARGO_PKG_VERSION"),
        config.use_mock_responses
    );

    match cli.command {
        Command::Parse(args) => {
            let text = read_input(args.file).await?;
            print_json(&AnalysisView::from(parse_analysis(&text)))
        }
        Command::Check(args) => run_check(&config, args).await,
        Command::Chat(args) => run_chat(&config, args).await,
        Command::ExtractRules(args) => {
            if config.use_mock_responses {
                bail!("extract-rules needs the live model; set ANTHROPIC_API_KEY and USE_MOCK_RESPONSES=false");
            }
            let content = read_input(args.file).await?;
            let generator = build_generator(&config)?;
            let rules = extract_rules(generator.as_ref(), &content)
                .await
                .map_err(log_failure)?;
            print_json(&rules)
        }
    }
}

async fn run_check(config: &Config, args: CheckArgs) -> Result<()> {
    let (registry, cui): (Arc<dyn CompanyRegistry>, String) = match (args.company, args.cui) {
        (Some(path), _) => {
            let raw = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("reading {}", path.display()))?;
            let snapshot: CompanySnapshot =
                serde_json::from_str(&raw).context("company file is not a registry snapshot")?;
            let cui = snapshot.tax_code.clone();
            let registry: Arc<dyn CompanyRegistry> = Arc::new(StaticRegistry::new([snapshot]));
            (registry, cui)
        }
        (None, Some(cui)) => {
            let registry: Arc<dyn CompanyRegistry> = Arc::new(MockRegistry);
            (registry, cui)
        }
        (None, None) => bail!("either --cui or --company is required"),
    };

    let store = Arc::new(InMemoryStore::with_programs(seeds::default_programs()).await?);
    let checker = EligibilityChecker::new(build_generator(config)?, config.checker_config());
    let service = EligibilityService::new(store, registry, checker);

    let report = service.check_company(&cui).await.map_err(log_failure)?;
    info!(
        "{}: {} eligible, {} ineligible",
        report.company.cui,
        report.eligible.len(),
        report.ineligible.len()
    );
    print_json(&ReportView::from(report))
}

async fn run_chat(config: &Config, args: ChatArgs) -> Result<()> {
    let store = InMemoryStore::with_programs(seeds::default_programs()).await?;
    let program = store
        .list_programs()
        .await?
        .into_iter()
        .find(|p| p.title.eq_ignore_ascii_case(args.program.trim()))
        .with_context(|| format!("no program titled '{}'", args.program))?;
    let company = MockRegistry.fetch_company(&args.cui).await?;

    let chat = ChatService::new(build_generator(config)?, config.checker_config());
    let reply = chat
        .ask(&program, &company, &args.message)
        .await
        .map_err(log_failure)?;
    print_json(&reply)
}

/// Logs a service error with its stable code before handing it to `anyhow`.
fn log_failure(e: AppError) -> anyhow::Error {
    error!(code = e.code(), "{e}");
    e.into()
}

fn build_generator(config: &Config) -> Result<Arc<dyn TextGenerator>> {
    let client = LlmClient::new(config.anthropic_api_key.clone())
        .context("failed to build HTTP client")?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    Ok(Arc::new(client))
}

async fn read_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
