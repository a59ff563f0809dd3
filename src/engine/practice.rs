use crate::types::snapshot::{FocusPriorities, PracticeLocation};

/// Shared normalization divisor for both facilities.
const NORMALIZATION: f64 = 500.0;

pub fn practice_score(location: PracticeLocation, focus: &FocusPriorities) -> f64 {
    let raw = match location {
        PracticeLocation::TinCup => 0.4 * focus.full_swing + 0.5 * focus.ball_volume,
        PracticeLocation::Bgc => {
            0.9 * focus.full_swing
                + 0.8 * focus.short_game
                + 0.8 * focus.putting
                + 0.8 * focus.ball_volume
                + 0.7 * focus.ball_shape
        }
    };
    (raw / NORMALIZATION * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maxed() -> FocusPriorities {
        FocusPriorities {
            full_swing: 100.0,
            ball_shape: 100.0,
            short_game: 100.0,
            putting: 100.0,
            ball_volume: 100.0,
        }
    }

    #[test]
    fn tincup_weights_full_swing_and_volume_only() {
        let score = practice_score(PracticeLocation::TinCup, &FocusPriorities::default());
        assert!((score - 13.4).abs() < 1e-9);
    }

    #[test]
    fn ceilings_differ_between_facilities() {
        let tincup = practice_score(PracticeLocation::TinCup, &maxed());
        let bgc = practice_score(PracticeLocation::Bgc, &maxed());
        assert!((tincup - 18.0).abs() < 1e-9);
        assert!((bgc - 76.0).abs() < 1e-9);
    }

    #[test]
    fn zero_priorities_score_zero() {
        let focus = FocusPriorities {
            full_swing: 0.0,
            ball_shape: 0.0,
            short_game: 0.0,
            putting: 0.0,
            ball_volume: 0.0,
        };
        assert_eq!(practice_score(PracticeLocation::Bgc, &focus), 0.0);
    }
}
