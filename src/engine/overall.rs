use crate::types::snapshot::PriorityWeights;

/// Weighted blend of the three component scores, scaled to 0-100.
///
/// Cost enters as a savings proxy: `100 - min(total_cost, budget)`. Spending
/// past the budget is not penalized further, and a budget above 100 can push
/// the cost component negative.
pub fn overall_score(
    weights: &PriorityWeights,
    total_cost: f64,
    budget: f64,
    practice_score: f64,
    experience_score: f64,
) -> f64 {
    let weights_sum = weights.sum();
    if weights_sum == 0.0 {
        return 0.0;
    }

    let cost = weights.cost * (100.0 - total_cost.min(budget)) / 100.0;
    let practice = weights.practice * practice_score / 100.0;
    let experience = weights.experience * experience_score / 100.0;
    (cost + practice + experience) / weights_sum * 100.0
}
