use crate::types::snapshot::{InputSnapshot, PracticeLocation, PracticePlan, Suggestion};

const HIGH_BALL_VOLUME: f64 = 80.0;
const STRONG_FOCUS: f64 = 70.0;

/// Rule-based practice suggestions, in firing order. Never empty.
pub fn suggestions(input: &InputSnapshot) -> Vec<Suggestion> {
    let focus = &input.focus;
    let max_focus = focus.max();
    let mut out = Vec::new();

    // A tied maximum can fire both focus rules.
    if max_focus == focus.full_swing || max_focus == focus.ball_shape {
        out.push(Suggestion::FullSwingAtBgc);
    }
    if max_focus == focus.short_game || max_focus == focus.putting {
        out.push(Suggestion::ShortGameAtBgc);
    }

    match (input.practice_location, input.practice_plan) {
        (PracticeLocation::Bgc, plan) if focus.ball_volume >= HIGH_BALL_VOLUME => {
            if plan == PracticePlan::PerSession {
                out.push(Suggestion::UpgradeToUnlimited);
            }
        }
        (PracticeLocation::Bgc, _) => {}
        (PracticeLocation::TinCup, _) => {
            if max_focus >= STRONG_FOCUS {
                out.push(Suggestion::TinCupLacksShortGame);
            } else {
                out.push(Suggestion::TinCupBudgetFullSwing);
            }
        }
    }

    if out.is_empty() {
        out.push(Suggestion::SetupMatches);
    }
    for suggestion in &out {
        tracing::debug!(id = suggestion.id(), "suggestion fired");
    }
    out
}
