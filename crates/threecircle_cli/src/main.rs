//! Command-line renderer for three-circle diagrams.
//!
//! # Responsibility
//! - Load a participant JSON file and an optional layout config.
//! - Write the diagram as SVG or as the JSON scene graph.

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use threecircle_core::{
    core_version, default_log_level, export_file_name, init_logging, ExportKind, LayoutConfig,
    Locale, RosterService, UuidIdGenerator,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Standalone SVG document.
    Svg,
    /// Diagram scene graph as JSON.
    Scene,
}

#[derive(Debug, Parser)]
#[command(name = "threecircle", version, about = "Render a Family/Ownership/Management diagram")]
struct Cli {
    /// Participant JSON file (array of {id, name, family, owner, mgmt}).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Render the built-in sample roster instead of an input file.
    #[arg(long, conflicts_with = "input")]
    sample: bool,

    /// Diagram title; defaults to the locale's title.
    #[arg(short, long)]
    title: Option<String>,

    /// Caption language (`ja` or `en`); overrides the layout file's locale.
    #[arg(long)]
    locale: Option<String>,

    /// Layout config JSON overriding geometry or style.
    #[arg(long)]
    layout: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// Output file, or a directory to receive a dated file name. Stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print advisory lines to stderr.
    #[arg(long)]
    advisories: bool,

    /// Absolute directory for rolling log files; logging is off when omitted.
    #[arg(long)]
    log_dir: Option<String>,

    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }
    log::info!("event=cli_start module=cli status=ok version={}", core_version());

    let layout_text = match &cli.layout {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read layout config {}", path.display()))?,
        ),
        None => None,
    };
    let config = resolve_config(layout_text.as_deref(), cli.locale.as_deref())?;

    let mut service = RosterService::new(UuidIdGenerator, config);
    if let Some(title) = &cli.title {
        service.set_title(title.clone());
    }

    match (&cli.input, cli.sample) {
        (Some(path), _) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read participants {}", path.display()))?;
            let summary = service
                .import_json(&text)
                .with_context(|| format!("failed to import {}", path.display()))?;
            if !summary.coercions.is_empty() {
                eprintln!(
                    "warning: {} field(s) defaulted while importing {} participant(s)",
                    summary.coercions.len(),
                    summary.imported
                );
            }
        }
        (None, true) => service.load_sample(),
        (None, false) => bail!("either --input or --sample is required"),
    }

    let view = service.view();
    if cli.advisories {
        for advisory in &view.advisories {
            eprintln!("{}", advisory.text);
        }
        if let Some(footer) = view.footer {
            eprintln!("{footer}");
        }
    }

    let (rendered, kind) = match cli.format {
        OutputFormat::Svg => (service.svg(), ExportKind::Svg),
        OutputFormat::Scene => (
            view.diagram
                .to_json_pretty()
                .context("failed to serialize diagram")?,
            ExportKind::Scene,
        ),
    };

    match cli.output {
        Some(path) => {
            let target = if path.is_dir() {
                path.join(export_file_name(kind, Local::now().date_naive()))
            } else {
                path
            };
            std::fs::write(&target, rendered)
                .with_context(|| format!("failed to write {}", target.display()))?;
            log::info!(
                "event=cli_write module=cli status=ok format={:?} mime={}",
                cli.format,
                kind.mime_type()
            );
            eprintln!("wrote {}", target.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Layout config from an optional file body; an explicit `--locale` wins over
/// the file's own locale.
fn resolve_config(layout_text: Option<&str>, locale: Option<&str>) -> Result<LayoutConfig> {
    let mut config = match layout_text {
        Some(text) => LayoutConfig::from_json_str(text).context("invalid layout config")?,
        None => LayoutConfig::default(),
    };
    if let Some(raw) = locale {
        let Some(locale) = Locale::parse(raw) else {
            bail!("unsupported locale `{raw}`; expected ja|en");
        };
        config.locale = locale;
    }
    Ok(config)
}
