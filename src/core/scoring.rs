/// Weight of a single activity
pub const ACTIVITY_WEIGHT: u32 = 1;
/// Weight of a leadership position
pub const LEADERSHIP_WEIGHT: u32 = 2;
/// Weight of an award or honor
pub const AWARD_WEIGHT: u32 = 3;

/// Summarize extracurricular involvement as a single score
///
/// `activities + 2 * leadership_positions + 3 * awards`, saturating at
/// `u32::MAX` rather than wrapping.
#[inline]
pub fn extracurricular_score(activities: u32, leadership_positions: u32, awards: u32) -> u32 {
    activities
        .saturating_mul(ACTIVITY_WEIGHT)
        .saturating_add(leadership_positions.saturating_mul(LEADERSHIP_WEIGHT))
        .saturating_add(awards.saturating_mul(AWARD_WEIGHT))
}
