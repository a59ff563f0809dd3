use crate::types::snapshot::{InputSnapshot, OutputSnapshot};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub input: InputSnapshot,
    pub output: OutputSnapshot,
    pub over_budget: bool,
}

impl PlanReport {
    pub fn new(input: InputSnapshot, output: OutputSnapshot) -> Self {
        let over_budget = output.total_cost > input.budget;
        Self {
            input,
            output,
            over_budget,
        }
    }
}
