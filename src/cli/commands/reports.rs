//! Reports command - list configured reports

use std::path::Path;

use taskreport::adapters::TomlConfig;
use taskreport::config::Settings;
use taskreport::output::{OutputMode, ReportInfo, ReportListResult};

/// Print every report defined by the defaults and the config file
pub fn reports(config: &Path, output_mode: OutputMode) -> anyhow::Result<()> {
    let settings = Settings::from_source(&TomlConfig::load(config)?);
    let result = ReportListResult {
        reports: settings.reports().map(ReportInfo::from).collect(),
    };
    result.render(output_mode);
    Ok(())
}
