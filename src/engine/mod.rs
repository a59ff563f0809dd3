pub mod cost;
pub mod experience;
pub mod overall;
pub mod practice;
pub mod suggestions;

use crate::types::snapshot::{InputSnapshot, OutputSnapshot};

/// Scores one plan. Pure: the same snapshot always yields the same output.
///
/// Assumes `input` already passed [`InputSnapshot::validate`]; out-of-domain
/// values are not rejected here.
pub fn evaluate(input: &InputSnapshot) -> OutputSnapshot {
    let total_cost = cost::total_cost(input);
    let practice_score = practice::practice_score(input.practice_location, &input.focus);
    let experience_score = experience::experience_score(input.course9, input.course18);
    let overall_score = overall::overall_score(
        &input.weights,
        total_cost,
        input.budget,
        practice_score,
        experience_score,
    );
    let suggestions = suggestions::suggestions(input);

    tracing::debug!(
        total_cost,
        practice_score,
        experience_score,
        overall_score,
        suggestions = suggestions.len(),
        "plan evaluated"
    );

    OutputSnapshot {
        total_cost,
        practice_score,
        experience_score,
        overall_score,
        suggestions,
    }
}
