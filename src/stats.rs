use crate::dates::date_key;
use crate::models::{Habit, LogValue};
use chrono::NaiveDate;

pub const RECENT_DAYS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickTotals {
    pub done: usize,
    pub missed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericTotals {
    pub total: f64,
    pub count: usize,
    pub average: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggedSplit {
    pub logged: usize,
    pub not_logged: usize,
}

/// `n` consecutive days ending at `anchor`, oldest first.
pub fn last_n_days(n: usize, anchor: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::with_capacity(n);
    let mut day = anchor;
    for _ in 0..n {
        days.push(day);
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }
    days.reverse();
    days
}

/// Classifies every logged day; days without an entry are not counted.
pub fn tick_totals(habit: &Habit) -> TickTotals {
    let done = habit
        .logs
        .values()
        .filter(|value| **value == LogValue::Done)
        .count();
    TickTotals {
        done,
        missed: habit.logs.len() - done,
    }
}

/// 1 for a done day, 0 otherwise (unlogged days included).
pub fn tick_series(habit: &Habit, days: &[NaiveDate]) -> Vec<f64> {
    days.iter()
        .map(|day| match habit.log(&date_key(*day)) {
            Some(LogValue::Done) => 1.0,
            _ => 0.0,
        })
        .collect()
}

pub fn numeric_series(habit: &Habit, days: &[NaiveDate]) -> Vec<f64> {
    days.iter()
        .map(|day| {
            habit
                .log(&date_key(*day))
                .and_then(LogValue::number)
                .unwrap_or(0.0)
        })
        .collect()
}

/// Sum, count and mean over the whole history, not just the recent window.
pub fn numeric_totals(habit: &Habit) -> NumericTotals {
    let (total, count) = habit
        .logs
        .values()
        .filter_map(|value| value.number())
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    let average = if count > 0 { total / count as f64 } else { 0.0 };
    NumericTotals {
        total,
        count,
        average,
    }
}

/// Presence, not magnitude: a logged zero still counts as logged.
pub fn logged_split(habit: &Habit, days: &[NaiveDate]) -> LoggedSplit {
    let logged = days
        .iter()
        .filter(|day| {
            habit
                .log(&date_key(**day))
                .and_then(LogValue::number)
                .is_some()
        })
        .count();
    LoggedSplit {
        logged,
        not_logged: days.len() - logged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HabitKind;
    use std::collections::BTreeMap;

    fn habit(kind: HabitKind, entries: &[(&str, LogValue)]) -> Habit {
        Habit {
            id: "h".into(),
            name: "Habit".into(),
            kind,
            unit: String::new(),
            target: None,
            rank: String::new(),
            created_at: 0,
            logs: entries
                .iter()
                .map(|(date, value)| (date.to_string(), *value))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    fn date(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn last_n_days_is_chronological() {
        let days: Vec<String> = last_n_days(7, date("2024-03-10"))
            .into_iter()
            .map(date_key)
            .collect();
        assert_eq!(
            days,
            vec![
                "2024-03-04",
                "2024-03-05",
                "2024-03-06",
                "2024-03-07",
                "2024-03-08",
                "2024-03-09",
                "2024-03-10",
            ]
        );
    }

    #[test]
    fn last_n_days_crosses_year_boundary() {
        let days = last_n_days(3, date("2024-01-01"));
        assert_eq!(days[0], date("2023-12-30"));
        assert_eq!(days[2], date("2024-01-01"));
        assert!(last_n_days(0, date("2024-01-01")).is_empty());
    }

    #[test]
    fn tick_totals_only_count_logged_days() {
        let h = habit(
            HabitKind::Tick,
            &[
                ("2024-03-01", LogValue::Done),
                ("2024-03-02", LogValue::Done),
                ("2024-03-05", LogValue::Value(1.0)),
            ],
        );
        assert_eq!(tick_totals(&h), TickTotals { done: 2, missed: 1 });
    }

    #[test]
    fn tick_series_marks_done_days() {
        let h = habit(
            HabitKind::Tick,
            &[("2024-03-10", LogValue::Done), ("2024-03-08", LogValue::Done)],
        );
        let days = last_n_days(RECENT_DAYS, date("2024-03-10"));
        assert_eq!(
            tick_series(&h, &days),
            vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0]
        );
    }

    #[test]
    fn numeric_average_over_all_entries() {
        let mut h = habit(
            HabitKind::Numeric,
            &[
                ("2023-01-01", LogValue::Value(10.0)),
                ("2024-03-10", LogValue::Value(20.0)),
            ],
        );
        let totals = numeric_totals(&h);
        assert_eq!(totals.total, 30.0);
        assert_eq!(totals.count, 2);
        assert_eq!(totals.average, 15.0);

        h.logs.insert("2024-03-09".into(), LogValue::Value(0.0));
        let totals = numeric_totals(&h);
        assert_eq!(totals.count, 3);
        assert_eq!(totals.average, 10.0);
    }

    #[test]
    fn numeric_average_without_entries_is_zero() {
        let h = habit(HabitKind::Numeric, &[]);
        assert_eq!(
            numeric_totals(&h),
            NumericTotals {
                total: 0.0,
                count: 0,
                average: 0.0
            }
        );
    }

    #[test]
    fn numeric_window_counts_zero_as_logged() {
        let h = habit(
            HabitKind::Numeric,
            &[
                ("2024-03-10", LogValue::Value(0.0)),
                ("2024-03-07", LogValue::Value(4.5)),
                ("2024-02-01", LogValue::Value(9.0)),
            ],
        );
        let days = last_n_days(RECENT_DAYS, date("2024-03-10"));
        assert_eq!(
            numeric_series(&h, &days),
            vec![0.0, 0.0, 0.0, 4.5, 0.0, 0.0, 0.0]
        );
        assert_eq!(
            logged_split(&h, &days),
            LoggedSplit {
                logged: 2,
                not_logged: 5
            }
        );
    }
}
