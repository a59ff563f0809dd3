use crate::types::snapshot::Course;

pub const FULL_COURSE: f64 = 100.0;
pub const PAR_THREE_ONLY: f64 = 40.0;

/// Full marks when either round length is played at BCC.
pub fn experience_score(course9: Course, course18: Course) -> f64 {
    match (course9, course18) {
        (Course::Bcc, _) | (_, Course::Bcc) => FULL_COURSE,
        (Course::Hornung, Course::Hornung) => PAR_THREE_ONLY,
    }
}
