use crate::dates::date_key;
use crate::errors::HabitError;
use crate::models::{HabitKind, LogValue, LogValueInput};
use crate::repository::Tracker;
use chrono::NaiveDate;

impl Tracker {
    /// Writes or clears one day of a habit's log.
    ///
    /// `None` removes the entry. Unknown habits are ignored and reported as
    /// `Ok(false)`. The value must match the habit's kind.
    pub fn set_log(
        &mut self,
        habit_id: &str,
        date: NaiveDate,
        value: Option<LogValue>,
    ) -> Result<bool, HabitError> {
        let Some(habit) = self.get_habit_mut(habit_id) else {
            return Ok(false);
        };

        let key = date_key(date);
        match value {
            None => {
                habit.logs.remove(&key);
            }
            Some(value) => {
                if value.kind() != habit.kind {
                    return Err(HabitError::TypeMismatch {
                        kind: habit.kind,
                        value,
                    });
                }
                if let LogValue::Value(number) = value {
                    if !number.is_finite() {
                        return Err(HabitError::InvalidNumber(number.to_string()));
                    }
                }
                habit.logs.insert(key, value);
            }
        }
        Ok(true)
    }
}

/// Turns a raw request value into a log value for a habit of `kind`.
///
/// Blank text clears the day, as does `false` on a tick habit.
pub fn resolve_input(
    kind: HabitKind,
    input: Option<LogValueInput>,
) -> Result<Option<LogValue>, HabitError> {
    let Some(input) = input else {
        return Ok(None);
    };

    match (kind, input) {
        (_, LogValueInput::Flag(true)) => Ok(Some(LogValue::Done)),
        (HabitKind::Tick, LogValueInput::Flag(false)) => Ok(None),
        (HabitKind::Numeric, LogValueInput::Flag(false)) => {
            Err(HabitError::InvalidNumber("false".to_string()))
        }
        (_, LogValueInput::Number(number)) => Ok(Some(LogValue::Value(number))),
        (_, LogValueInput::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            match text.parse::<f64>() {
                Ok(number) if number.is_finite() => Ok(Some(LogValue::Value(number))),
                _ => Err(HabitError::InvalidNumber(text.to_string())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewHabit;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn tracker_with(kind: HabitKind) -> (Tracker, String) {
        let mut tracker = Tracker::default();
        let id = tracker
            .add_habit(NewHabit {
                name: "Habit".into(),
                kind,
                unit: None,
                target: None,
                rank: None,
            })
            .unwrap()
            .id
            .clone();
        (tracker, id)
    }

    #[test]
    fn set_then_read_then_clear() {
        let (mut tracker, id) = tracker_with(HabitKind::Numeric);
        assert_eq!(tracker.set_log(&id, date(), Some(LogValue::Value(7.0))), Ok(true));
        assert_eq!(
            tracker.get_habit(&id).unwrap().log("2024-03-10"),
            Some(LogValue::Value(7.0))
        );

        assert_eq!(tracker.set_log(&id, date(), Some(LogValue::Value(0.0))), Ok(true));
        assert_eq!(
            tracker.get_habit(&id).unwrap().log("2024-03-10"),
            Some(LogValue::Value(0.0))
        );

        assert_eq!(tracker.set_log(&id, date(), None), Ok(true));
        assert_eq!(tracker.get_habit(&id).unwrap().log("2024-03-10"), None);
    }

    #[test]
    fn unknown_habit_is_a_no_op() {
        let (mut tracker, _) = tracker_with(HabitKind::Tick);
        assert_eq!(tracker.set_log("missing", date(), Some(LogValue::Done)), Ok(false));
    }

    #[test]
    fn mismatched_values_are_rejected() {
        let (mut tracker, id) = tracker_with(HabitKind::Tick);
        assert_eq!(
            tracker.set_log(&id, date(), Some(LogValue::Value(1.0))),
            Err(HabitError::TypeMismatch {
                kind: HabitKind::Tick,
                value: LogValue::Value(1.0)
            })
        );
        assert!(tracker.get_habit(&id).unwrap().logs.is_empty());

        let (mut tracker, id) = tracker_with(HabitKind::Numeric);
        assert!(matches!(
            tracker.set_log(&id, date(), Some(LogValue::Done)),
            Err(HabitError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let (mut tracker, id) = tracker_with(HabitKind::Numeric);
        assert!(matches!(
            tracker.set_log(&id, date(), Some(LogValue::Value(f64::INFINITY))),
            Err(HabitError::InvalidNumber(_))
        ));
    }

    #[test]
    fn resolve_input_per_kind() {
        assert_eq!(
            resolve_input(HabitKind::Tick, Some(LogValueInput::Flag(true))),
            Ok(Some(LogValue::Done))
        );
        assert_eq!(
            resolve_input(HabitKind::Tick, Some(LogValueInput::Flag(false))),
            Ok(None)
        );
        assert_eq!(resolve_input(HabitKind::Numeric, None), Ok(None));
        assert_eq!(
            resolve_input(HabitKind::Numeric, Some(LogValueInput::Text("".into()))),
            Ok(None)
        );
        assert_eq!(
            resolve_input(HabitKind::Numeric, Some(LogValueInput::Text(" 4.5".into()))),
            Ok(Some(LogValue::Value(4.5)))
        );
        assert_eq!(
            resolve_input(HabitKind::Numeric, Some(LogValueInput::Text("abc".into()))),
            Err(HabitError::InvalidNumber("abc".into()))
        );
        assert_eq!(
            resolve_input(HabitKind::Numeric, Some(LogValueInput::Flag(false))),
            Err(HabitError::InvalidNumber("false".into()))
        );
    }
}
