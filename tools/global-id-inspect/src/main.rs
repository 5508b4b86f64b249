//! global-id-inspect
//!
//! Wraps identifiers given on the command line (or one per line on stdin),
//! optionally validates them against their scheme, and prints a report.
//!
//! Inputs in `CODE:value` notation keep their scheme; bare values take the
//! `--scheme` code, or the unknown scheme `0000` when none is given.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use global_id::SchemeId;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod input;
mod output;
mod report;

use config::Config;
use output::OutputFormat;
use report::Report;

/// Inspect ISO 6523 identifiers.
#[derive(Debug, Parser)]
#[command(name = "global-id-inspect")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Identifiers to inspect. Read from stdin, one per line, when omitted.
    identifiers: Vec<String>,

    /// Scheme code for identifiers given without a `CODE:` prefix.
    #[arg(long, env = "GLOBAL_ID_SCHEME")]
    scheme: Option<String>,

    /// Check each identifier against the rules of its scheme.
    #[arg(long)]
    validate: bool,

    /// Validate and exit with an error if any identifier is invalid.
    #[arg(long)]
    strict: bool,

    /// Output format (table or json).
    #[arg(long, env = "GLOBAL_ID_FORMAT", default_value = "table")]
    format: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()?;
    init_tracing(&config);

    if let Err(e) = run(cli) {
        output::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    // Prefer RUST_LOG, fall back to GLOBAL_ID_LOG_LEVEL
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into());
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(cli: Cli) -> Result<()> {
    let format = OutputFormat::from_name(&cli.format);
    let validate = cli.validate || cli.strict;

    let default_scheme = cli
        .scheme
        .as_deref()
        .map(SchemeId::parse)
        .transpose()
        .context("invalid --scheme")?;

    let inputs = if cli.identifiers.is_empty() {
        debug!("reading identifiers from stdin");
        input::read_lines(std::io::stdin().lock())?
    } else {
        cli.identifiers
    };

    info!(
        count = inputs.len(),
        default_scheme = default_scheme.as_ref().map(SchemeId::code),
        validate,
        "inspecting identifiers"
    );

    let reports: Vec<Report> = inputs
        .iter()
        .map(|raw| {
            let id = input::resolve(raw, default_scheme.as_ref());
            let report = Report::build(raw, &id, validate);
            debug!(
                input = %raw,
                scheme = %report.scheme_code,
                valid = ?report.valid,
                "inspected identifier"
            );
            report
        })
        .collect();

    output::print_output(&reports, format);

    if validate {
        let invalid = reports.iter().filter(|r| r.is_invalid()).count();
        output::print_summary(reports.len(), invalid);

        if cli.strict && invalid > 0 {
            return Err(anyhow!(
                "{} of {} identifiers failed validation",
                invalid,
                reports.len()
            ));
        }
    }

    Ok(())
}
