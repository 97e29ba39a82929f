//! Report command - run a named report

use std::path::PathBuf;
use std::process::ExitCode;

use taskreport::adapters::{TextTableRenderer, TomlConfig, TomlTaskStore};
use taskreport::config::Settings;
use taskreport::core::services::{ReportAssembler, parse_words};
use taskreport::output::{OutputMode, ReportResult};

/// Everything the report command needs
#[derive(Debug)]
pub struct ReportArgs {
    /// Report name
    pub name: String,
    /// Command-line filter words
    pub filter: Vec<String>,
    /// `--color` / `--no-color` override
    pub color: Option<bool>,
    /// Config file
    pub config: PathBuf,
    /// Task file
    pub data: PathBuf,
}

/// Run a report and print it; exits 1 when nothing matched
pub fn report(args: &ReportArgs, output_mode: OutputMode) -> anyhow::Result<ExitCode> {
    let mut settings = Settings::from_source(&TomlConfig::load(&args.config)?);
    if let Some(color) = args.color {
        settings.color = color;
    }
    let color = settings.color && output_mode == OutputMode::Human;
    settings.color = color;
    colored::control::set_override(color);

    let context = parse_words(&args.filter)?;
    let renderer = TextTableRenderer::for_terminal(settings.default_width);
    let mut store = TomlTaskStore::new(args.data.clone());

    let output = ReportAssembler::new(&settings, &renderer).handle(&args.name, context, &mut store)?;
    ReportResult::from_output(&args.name, &output).render(output_mode);
    Ok(ExitCode::from(output.exit_code()))
}
