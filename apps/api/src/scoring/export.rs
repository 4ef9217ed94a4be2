use anyhow::{Context, Result};
use indexmap::IndexMap;

pub const EXPORT_FILE_NAME: &str = "readiness_results.csv";

/// Renders category progress as a two-column `skill,progress` CSV.
pub fn progress_csv(progress: &IndexMap<String, f64>) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["skill", "progress"])
        .context("failed to write CSV header")?;
    for (skill, value) in progress {
        let value = format!("{value:.1}");
        writer
            .write_record([skill.as_str(), value.as_str()])
            .with_context(|| format!("failed to write CSV row for '{skill}'"))?;
    }
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush CSV buffer: {}", e.error()))
}
