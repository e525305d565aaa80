//! CLI entry point for orgguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `orgguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use orgguard_app::{
    CheckInput, ExplainOutput, format_explanation, parse_report_json, render_markdown,
    render_text, run_check, run_explain, runtime_error_report, serialize_report, to_renderable,
    verdict_exit_code,
};
use orgguard_settings::Overrides;
use orgguard_types::OrgguardReport;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "orgguard",
    version,
    about = "Salary band and reporting line policy checks for employee rosters"
)]
struct Cli {
    /// Path to orgguard config TOML (missing file means defaults).
    #[arg(long, default_value = "orgguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|advisory).
    #[arg(long)]
    profile: Option<String>,

    /// Override maximum findings to emit.
    #[arg(long)]
    max_findings: Option<u32>,

    /// Override the most managers allowed between an employee and the CEO.
    #[arg(long)]
    max_depth: Option<u32>,

    /// Override the lower salary band multiplier.
    #[arg(long)]
    min_multiplier: Option<f64>,

    /// Override the upper salary band multiplier.
    #[arg(long)]
    max_multiplier: Option<f64>,

    /// Log filter (e.g. `debug`, `orgguard_domain=trace`); defaults to RUST_LOG, then `warn`.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a roster and print the report.
    Check {
        /// Roster CSV (`Id,firstName,lastName,salary,managerId`).
        #[arg(long)]
        roster: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// What to print on stdout.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/orgguard/report.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/orgguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "org.salary_band") or code (e.g., "manager_underpaid") to explain.
        identifier: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Markdown,
    None,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match cli.cmd {
        Commands::Check {
            ref roster,
            ref report_out,
            format,
            write_markdown,
            ref markdown_out,
        } => cmd_check(
            &cli,
            roster,
            report_out.as_deref(),
            format,
            write_markdown.then_some(markdown_out.as_path()),
        ),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    // A second init (only possible in tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn cmd_check(
    cli: &Cli,
    roster: &Utf8Path,
    report_out: Option<&Utf8Path>,
    format: OutputFormat,
    markdown_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = read_config(&cli.config)?;

        let overrides = Overrides {
            profile: cli.profile.clone(),
            max_findings: cli.max_findings,
            max_depth: cli.max_depth,
            min_multiplier: cli.min_multiplier,
            max_multiplier: cli.max_multiplier,
        };

        let output = run_check(CheckInput {
            roster_path: roster,
            config_text: &cfg_text,
            overrides,
        })?;

        if let Some(path) = report_out {
            write_report_file(path, &output.report).context("write report json")?;
        }

        let renderable = to_renderable(&output.report);
        if let Some(path) = markdown_out {
            write_text_file(path, &render_markdown(&renderable)).context("write markdown")?;
        }
        match format {
            OutputFormat::Text => print!("{}", render_text(&renderable)),
            OutputFormat::Markdown => print!("{}", render_markdown(&renderable)),
            OutputFormat::None => {}
        }

        Ok(verdict_exit_code(&output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            if let Some(path) = report_out {
                let report = runtime_error_report(&format!("{err:#}"));
                let _ = write_report_file(path, &report);
            }
            eprintln!("orgguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Config file contents; a missing file means defaults.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    if !path.exists() {
        debug!(path = %path, "no config file; using defaults");
        return Ok(String::new());
    }
    std::fs::read_to_string(path).with_context(|| format!("read config: {}", path))
}

fn write_report_file(path: &Utf8Path, report: &OrgguardReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                orgguard_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
