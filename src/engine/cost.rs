use crate::types::snapshot::{
    Course, InputSnapshot, Membership, PracticeLocation, PracticePlan,
};

/// Per-round green fees for one `(course, membership)` pairing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundFees {
    pub nine: f64,
    pub eighteen: f64,
}

const HORNUNG: RoundFees = RoundFees {
    nine: 5.0,
    eighteen: 10.0,
};
const BCC_NON_MEMBER: RoundFees = RoundFees {
    nine: 8.0,
    eighteen: 15.0,
};
const BCC_MEMBER: RoundFees = RoundFees {
    nine: 4.0,
    eighteen: 8.0,
};
// Prepaid covers every BCC round.
const BCC_PREPAID: RoundFees = RoundFees {
    nine: 0.0,
    eighteen: 0.0,
};

pub const BGC_SESSION_FEE: f64 = 5.0;
pub const BGC_UNLIMITED_FEE: f64 = 40.0;
pub const TINCUP_SESSION_FEE: f64 = 1.0;

pub fn round_fees(course: Course, membership: Membership) -> RoundFees {
    match (course, membership) {
        (Course::Hornung, _) => HORNUNG,
        (Course::Bcc, Membership::None) => BCC_NON_MEMBER,
        (Course::Bcc, Membership::Member) => BCC_MEMBER,
        (Course::Bcc, Membership::Prepaid) => BCC_PREPAID,
    }
}

/// Every row of the green-fee table, in display order.
pub fn fee_schedule() -> Vec<(Course, Membership, RoundFees)> {
    let mut rows = Vec::new();
    for course in [Course::Hornung, Course::Bcc] {
        for membership in [Membership::None, Membership::Member, Membership::Prepaid] {
            rows.push((course, membership, round_fees(course, membership)));
        }
    }
    rows
}

/// Fixed monthly membership fee, charged once.
pub fn membership_fee(membership: Membership) -> f64 {
    match membership {
        Membership::None => 0.0,
        Membership::Member => 35.0,
        Membership::Prepaid => 75.0,
    }
}

pub fn practice_cost(location: PracticeLocation, plan: PracticePlan, sessions: u32) -> f64 {
    match (location, plan) {
        (PracticeLocation::TinCup, _) => f64::from(sessions) * TINCUP_SESSION_FEE,
        (PracticeLocation::Bgc, PracticePlan::PerSession) => f64::from(sessions) * BGC_SESSION_FEE,
        (PracticeLocation::Bgc, PracticePlan::Unlimited) => BGC_UNLIMITED_FEE,
    }
}

pub fn total_cost(input: &InputSnapshot) -> f64 {
    let nine = f64::from(input.rounds9) * round_fees(input.course9, input.membership).nine;
    let eighteen =
        f64::from(input.rounds18) * round_fees(input.course18, input.membership).eighteen;
    let membership = membership_fee(input.membership);
    let practice = practice_cost(
        input.practice_location,
        input.practice_plan,
        input.practice_sessions,
    );

    tracing::debug!(nine, eighteen, membership, practice, "cost breakdown");
    nine + eighteen + membership + practice
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_table_matches_published_rates() {
        let expected = [
            (Course::Hornung, Membership::None, 5.0, 10.0),
            (Course::Hornung, Membership::Member, 5.0, 10.0),
            (Course::Hornung, Membership::Prepaid, 5.0, 10.0),
            (Course::Bcc, Membership::None, 8.0, 15.0),
            (Course::Bcc, Membership::Member, 4.0, 8.0),
            (Course::Bcc, Membership::Prepaid, 0.0, 0.0),
        ];
        let schedule = fee_schedule();
        assert_eq!(schedule.len(), expected.len());
        for ((course, membership, fees), (c, m, nine, eighteen)) in schedule.iter().zip(expected)
        {
            assert_eq!((*course, *membership), (c, m));
            assert_eq!(fees.nine, nine);
            assert_eq!(fees.eighteen, eighteen);
        }
    }

    #[test]
    fn hornung_only_plan_costs_rounds_plus_practice() {
        let input = InputSnapshot::default();
        assert_eq!(total_cost(&input), 26.0);
    }

    #[test]
    fn member_fee_applies_once_across_both_legs() {
        let input = InputSnapshot {
            rounds9: 2,
            rounds18: 3,
            course9: Course::Bcc,
            course18: Course::Bcc,
            membership: Membership::Member,
            practice_sessions: 0,
            ..InputSnapshot::default()
        };
        assert_eq!(total_cost(&input), 2.0 * 4.0 + 3.0 * 8.0 + 35.0);
    }

    #[test]
    fn membership_fee_charged_even_without_bcc_rounds() {
        let input = InputSnapshot {
            membership: Membership::Prepaid,
            ..InputSnapshot::default()
        };
        assert_eq!(total_cost(&input), 26.0 + 75.0);
    }

    #[test]
    fn bgc_unlimited_is_flat_with_zero_sessions() {
        assert_eq!(
            practice_cost(PracticeLocation::Bgc, PracticePlan::Unlimited, 0),
            40.0
        );
        assert_eq!(
            practice_cost(PracticeLocation::Bgc, PracticePlan::Unlimited, 25),
            40.0
        );
    }

    #[test]
    fn tincup_ignores_plan() {
        assert_eq!(
            practice_cost(PracticeLocation::TinCup, PracticePlan::Unlimited, 7),
            7.0
        );
    }

    #[test]
    fn more_nine_hole_rounds_never_lower_cost() {
        for course in [Course::Hornung, Course::Bcc] {
            for membership in [Membership::None, Membership::Member, Membership::Prepaid] {
                let mut previous = 0.0;
                for rounds9 in 0..=30 {
                    let input = InputSnapshot {
                        rounds9,
                        course9: course,
                        membership,
                        ..InputSnapshot::default()
                    };
                    let cost = total_cost(&input);
                    assert!(cost >= previous);
                    assert!(cost >= 0.0);
                    previous = cost;
                }
            }
        }
    }
}
