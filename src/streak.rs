use crate::dates::date_key;
use crate::models::{Habit, HabitKind, LogValue};
use chrono::NaiveDate;

/// Roughly ten years; the walk never looks further back than this.
pub const MAX_STREAK_DAYS: u32 = 3650;

/// Consecutive successful days ending at `anchor` (inclusive), walking backward
/// one calendar day at a time.
pub fn compute_streak(habit: &Habit, anchor: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut day = anchor;

    for _ in 0..MAX_STREAK_DAYS {
        if !is_success(habit, habit.log(&date_key(day))) {
            break;
        }
        streak += 1;
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }

    streak
}

/// Tick days succeed only when done. Numeric days succeed when they reach the
/// target, or are positive when the habit has no target.
pub fn is_success(habit: &Habit, value: Option<LogValue>) -> bool {
    match habit.kind {
        HabitKind::Tick => value == Some(LogValue::Done),
        HabitKind::Numeric => match (value.and_then(LogValue::number), habit.target()) {
            (Some(value), Some(target)) => value >= target,
            (Some(value), None) => value > 0.0,
            (None, _) => false,
        },
    }
}
