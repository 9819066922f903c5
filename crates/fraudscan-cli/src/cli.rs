use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;

use fraudscan_core::config::defaults::DEFAULT_CONFIG_FILENAME;
use fraudscan_core::{Category, FraudCase, FraudScanConfig, FraudScanError};
use fraudscan_detection::{CaseRepository, DetectionEngine, DetectionReport, KeywordCatalog};
use fraudscan_observability::tracing_setup::events;

#[derive(Parser, Debug)]
#[command(name = "fraudscan", version, about = "Flag fraud-pattern keyword signals in messages")]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./fraudscan.toml if present)
    #[arg(long, global = true, env = "FRAUDSCAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a message for fraud signals (reads stdin when TEXT is omitted)
    Scan {
        text: Option<String>,
        /// Print the detection result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List catalog phrases
    Keywords {
        /// Only this category (investment, onlineShopping, impersonation, lottery, loan)
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// List reference cases
    Cases {
        /// Only cases of this category
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        json: bool,
    },
}

/// Result of a successful run, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Suspicious,
}

pub fn run(cli: Cli, stdin: &mut impl Read, out: &mut impl Write) -> Result<Outcome> {
    let root = std::env::current_dir().context("failed to resolve working directory")?;
    let config = FraudScanConfig::load(&root, cli.config.as_deref())?;
    fraudscan_observability::init_tracing_with(&config.observability);
    events::config_loaded(
        &config_source(&cli, &root),
        config.detection.ascii_case_fold,
        config.detection.categories()?.len(),
    );

    match cli.command {
        Command::Scan { text, json } => scan(&config, text, json, stdin, out),
        Command::Keywords { category, json } => {
            keywords(category.as_deref(), json, out)?;
            Ok(Outcome::Clean)
        }
        Command::Cases { category, json } => {
            cases(category.as_deref(), json, out)?;
            Ok(Outcome::Clean)
        }
    }
}

/// Which layer the file config came from, for logging.
fn config_source(cli: &Cli, root: &Path) -> String {
    match &cli.config {
        Some(path) => path.display().to_string(),
        None if root.join(DEFAULT_CONFIG_FILENAME).exists() => DEFAULT_CONFIG_FILENAME.to_string(),
        None => "defaults".to_string(),
    }
}

fn scan(
    config: &FraudScanConfig,
    text: Option<String>,
    as_json: bool,
    stdin: &mut impl Read,
    out: &mut impl Write,
) -> Result<Outcome> {
    let engine = DetectionEngine::with_config(&config.detection)?;

    let (input_bytes, result) = match text {
        Some(text) => (text.len(), engine.detect(&text)),
        None => {
            let mut bytes = Vec::new();
            stdin
                .read_to_end(&mut bytes)
                .context("failed to read stdin")?;
            let result = engine.detect_bytes(&bytes).inspect_err(|e| {
                if let FraudScanError::MalformedInput { reason } = e {
                    events::input_rejected(reason);
                }
            })?;
            (bytes.len(), result)
        }
    };

    events::scan_reported(
        input_bytes,
        result.matched_keywords.len(),
        result.matched_categories.len(),
        result.matched_cases.len(),
    );

    if as_json {
        serde_json::to_writer_pretty(&mut *out, &result)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", DetectionReport::from(&result))?;
    }

    Ok(if result.is_suspicious() {
        Outcome::Suspicious
    } else {
        Outcome::Clean
    })
}

fn parse_category(name: &str) -> Result<Category> {
    Ok(name
        .parse::<Category>()
        .inspect_err(|_| events::category_rejected(name))?)
}

fn keywords(category: Option<&str>, as_json: bool, out: &mut impl Write) -> Result<()> {
    let categories = match category {
        Some(name) => vec![parse_category(name)?],
        None => Category::ALL.to_vec(),
    };
    let catalog = KeywordCatalog::new();

    if as_json {
        let map: serde_json::Map<String, serde_json::Value> = categories
            .iter()
            .map(|c| (c.as_str().to_string(), json!(catalog.keywords_for(*c))))
            .collect();
        serde_json::to_writer_pretty(&mut *out, &map)?;
        writeln!(out)?;
        return Ok(());
    }

    for category in categories {
        writeln!(out, "{} ({})", category.label(), category)?;
        writeln!(out, "  {}", catalog.keywords_for(category).join("、"))?;
    }
    Ok(())
}

fn cases(category: Option<&str>, as_json: bool, out: &mut impl Write) -> Result<()> {
    let repository = CaseRepository::builtin();
    let selected: Vec<&FraudCase> = match category {
        Some(name) => repository.by_category(parse_category(name)?).collect(),
        None => repository.iter().collect(),
    };
    if as_json {
        serde_json::to_writer_pretty(&mut *out, &selected)?;
        writeln!(out)?;
        return Ok(());
    }
    for case in selected {
        writeln!(
            out,
            "[{}] {} ({})\n  {}",
            case.category.label(),
            case.description,
            case.reference_link,
            case.associated_keywords.join("、")
        )?;
    }
    Ok(())
}
