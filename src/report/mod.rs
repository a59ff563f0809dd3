pub mod json;
pub mod md;

use crate::error::PlannerError;
use crate::types::report::PlanReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &PlanReport, format: OutputFormat) -> Result<String, PlannerError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(PlannerError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
