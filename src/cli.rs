//! Minimal CLI: schema directory → (markdown pages | single preview)
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use crate::batch::{BatchConfig, BatchReport};
use crate::front_matter::FrontMatterSettings;
use crate::render::{MarkdownWriter, RenderOptions, Renderer};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// render schema documents into nested, collapsible markdown documentation pages
#[derive(Parser, Debug)]
#[command(name = "schema-docs", version)]
pub struct CommandLineInterface {
    /// more logging; repeat for more (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// defaults to `build` with default locations
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// render every schema in a directory into one page each
    Build(BuildOut),
    /// render one schema and print its page body
    Preview(PreviewOut),
}

#[derive(Args, Debug, Clone)]
struct RenderSettings {
    /// render `items` once even when an `itemsOrder` annotation is present
    #[arg(long, default_value_t = false)]
    single_items: bool,

    /// prefix of the element-type links
    #[arg(long, default_value = crate::render::markdown::DEFAULT_LINK_BASE)]
    link_base: String,
}

#[derive(clap::Parser, Debug)]
struct BuildOut {
    /// directory of schema documents
    #[arg(long, short, default_value = "../schema")]
    input: PathBuf,

    /// directory receiving the pages (created if missing)
    #[arg(long, short, default_value = "content/en/docs/JSON-schema-validator/project-schemas")]
    output: PathBuf,

    /// only file names matching this glob
    #[arg(long, default_value = "*")]
    include: String,

    /// process files sorted by name rather than in directory-listing order
    #[arg(long, default_value_t = false)]
    sort: bool,

    #[command(flatten)]
    render_settings: RenderSettings,

    /// `date`/`lastmod` written to every page (RFC 3339)
    #[arg(long, value_parser = crate::front_matter::parse_timestamp)]
    date: Option<DateTime<FixedOffset>>,

    /// menu section the pages are placed under
    #[arg(long, default_value = crate::front_matter::DEFAULT_MENU_SECTION)]
    menu_section: String,

    /// parent entry inside the menu section
    #[arg(long, default_value = crate::front_matter::DEFAULT_MENU_PARENT)]
    menu_parent: String,

    /// also write the batch report as JSON
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
struct PreviewOut {
    /// schema document to render
    file: PathBuf,

    #[command(flatten)]
    render_settings: RenderSettings,

    /// output .md file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl RenderSettings {
    fn options(&self) -> RenderOptions {
        RenderOptions { duplicate_ordered_items: !self.single_items }
    }
}

impl BuildOut {
    fn defaults() -> Self {
        Self::parse_from(["build"])
    }

    fn to_config(&self) -> BatchConfig {
        let mut front_matter = FrontMatterSettings {
            menu_section: self.menu_section.clone(),
            menu_parent: self.menu_parent.clone(),
            ..FrontMatterSettings::default()
        };
        if let Some(date) = self.date {
            front_matter.timestamp = date;
        }
        BatchConfig {
            input_dir: self.input.clone(),
            output_dir: self.output.clone(),
            include: self.include.clone(),
            sort: self.sort,
            render: self.render_settings.options(),
            link_base: self.render_settings.link_base.clone(),
            front_matter,
        }
    }

    fn run(&self) -> Result<ExitCode> {
        let config = self.to_config();
        tracing::debug!(input = %config.input_dir.display(), output = %config.output_dir.display(), "starting batch");
        let report = crate::batch::run_batch(&config)?;

        if let Some(path) = self.report.as_ref() {
            write_file(path, &serde_json::to_string_pretty(&report)?)?;
        }

        print_summary(&report, &config);
        Ok(if report.is_clean() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
    }
}

impl PreviewOut {
    fn run(&self) -> Result<ExitCode> {
        let source = std::fs::read_to_string(&self.file)
            .with_context(|| format!("failed to read schema file ({})", self.file.display()))?;
        let schema = crate::parse::parse_document(&source)
            .with_context(|| format!("failed to parse schema file ({})", self.file.display()))?;

        let renderer = Renderer::new(self.render_settings.options());
        let writer = MarkdownWriter::new(self.render_settings.link_base.as_str());
        let page = writer.document_body(&renderer.render(&schema, 0));

        if let Some(out) = self.out.as_ref() {
            write_file(out, &page)?;
        } else {
            print!("{page}");
        }
        Ok(ExitCode::SUCCESS)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
    pub fn run(&self) -> Result<ExitCode> {
        match &self.cmd {
            Some(Command::Build(target)) => target.run(),
            Some(Command::Preview(target)) => target.run(),
            None => BuildOut::defaults().run(),
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_file(path: &std::path::Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory ({})", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("failed to write ({})", path.display()))
}

fn print_summary(report: &BatchReport, config: &BatchConfig) {
    let written = format!("✅ rendered {} page(s)", report.written.len());
    eprintln!("{} into {}", written.green(), config.output_dir.display());
    for failure in &report.failures {
        let file = failure.file.display().to_string();
        eprintln!("{} {}: {}", "❌".red(), file.bold(), failure.reason);
    }
}
