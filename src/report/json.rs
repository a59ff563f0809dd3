use crate::types::report::PlanReport;

pub fn to_json(report: &PlanReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
