//! Derived views for the page: everything the front end draws is computed
//! here from the document, the selection and the anchor date.

use crate::dates::{date_key, pretty_date, short_label};
use crate::models::{format_number, Habit, HabitKind, LogValue};
use crate::repository::Tracker;
use crate::stats::{
    last_n_days, logged_split, numeric_series, numeric_totals, tick_series, tick_totals,
    RECENT_DAYS,
};
use crate::streak::compute_streak;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: String,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub caption: Option<String>,
}

impl Chart {
    fn single(kind: ChartKind, labels: Vec<String>, label: String, data: Vec<f64>) -> Self {
        Self {
            kind,
            labels,
            series: vec![ChartSeries { label, data }],
            caption: None,
        }
    }

    fn with_caption(mut self, caption: String) -> Self {
        self.caption = Some(caption);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitListItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: HabitKind,
    pub unit: String,
    pub target: Option<f64>,
    pub rank: String,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
    pub selected: bool,
}

impl HabitListItem {
    fn new(habit: &Habit, selected: bool) -> Self {
        Self {
            id: habit.id.clone(),
            name: habit.name.clone(),
            kind: habit.kind,
            unit: habit.unit.clone(),
            target: habit.target,
            rank: habit.rank.clone(),
            created_at: habit.created_at,
            selected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HabitSummary {
    Tick {
        done: usize,
        missed: usize,
    },
    Numeric {
        total: f64,
        count: usize,
        average: f64,
        logged: usize,
        not_logged: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitView {
    pub habit: HabitListItem,
    pub entry: Option<LogValue>,
    pub streak: u32,
    pub streak_text: String,
    pub summary: HabitSummary,
    pub main: Chart,
    pub secondary: Chart,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub anchor: String,
    pub anchor_label: String,
    pub habits: Vec<HabitListItem>,
    pub selected: Option<HabitView>,
}

pub fn build_dashboard(tracker: &Tracker, anchor: NaiveDate) -> Dashboard {
    let selected_id = tracker.selected();
    let habits = tracker
        .habits()
        .iter()
        .map(|habit| HabitListItem::new(habit, selected_id == Some(habit.id.as_str())))
        .collect();

    Dashboard {
        anchor: date_key(anchor),
        anchor_label: pretty_date(anchor),
        habits,
        selected: tracker
            .selected_habit()
            .map(|habit| build_habit_view(habit, anchor)),
    }
}

pub fn build_habit_view(habit: &Habit, anchor: NaiveDate) -> HabitView {
    let streak = compute_streak(habit, anchor);
    let days = last_n_days(RECENT_DAYS, anchor);
    let labels: Vec<String> = days.iter().copied().map(short_label).collect();

    let (summary, main, secondary) = match habit.kind {
        HabitKind::Tick => {
            let totals = tick_totals(habit);
            let main = Chart::single(
                ChartKind::Pie,
                vec!["Done".into(), "Missed".into()],
                "Days".into(),
                vec![totals.done as f64, totals.missed as f64],
            );
            let secondary = Chart::single(
                ChartKind::Bar,
                labels,
                "Done".into(),
                tick_series(habit, &days),
            )
            .with_caption(format!(
                "Last {RECENT_DAYS} days ending {} (1=Done, 0=Not done)",
                pretty_date(anchor)
            ));
            let summary = HabitSummary::Tick {
                done: totals.done,
                missed: totals.missed,
            };
            (summary, main, secondary)
        }
        HabitKind::Numeric => {
            let unit = if habit.unit.is_empty() {
                String::new()
            } else {
                format!(" {}", habit.unit)
            };
            let totals = numeric_totals(habit);
            let split = logged_split(habit, &days);
            let target = habit
                .target()
                .map(format_number)
                .unwrap_or_else(|| "—".to_string());

            let main = Chart::single(
                ChartKind::Bar,
                labels,
                format!("Value{unit}"),
                numeric_series(habit, &days),
            );
            let secondary = Chart::single(
                ChartKind::Pie,
                vec!["Logged".into(), "Not Logged (0)".into()],
                "Days".into(),
                vec![split.logged as f64, split.not_logged as f64],
            )
            .with_caption(format!(
                "Total: {}{unit} • Avg (logged days): {:.2}{unit} • Target: {target}",
                format_number(totals.total),
                totals.average
            ));
            let summary = HabitSummary::Numeric {
                total: totals.total,
                count: totals.count,
                average: totals.average,
                logged: split.logged,
                not_logged: split.not_logged,
            };
            (summary, main, secondary)
        }
    };

    HabitView {
        habit: HabitListItem::new(habit, true),
        entry: habit.log(&date_key(anchor)),
        streak,
        streak_text: format!("Current streak: {streak} day(s) • Habit: {}", habit.name),
        summary,
        main,
        secondary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppData, NewHabit};

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn add(
        tracker: &mut Tracker,
        name: &str,
        kind: HabitKind,
        unit: &str,
        target: Option<f64>,
    ) -> String {
        tracker
            .add_habit(NewHabit {
                name: name.into(),
                kind,
                unit: Some(unit.into()),
                target,
                rank: Some("B".into()),
            })
            .unwrap()
            .id
            .clone()
    }

    #[test]
    fn empty_dashboard_has_no_selection() {
        let tracker = Tracker::new(AppData::default());
        let dashboard = build_dashboard(&tracker, anchor());
        assert_eq!(dashboard.anchor, "2024-03-10");
        assert_eq!(dashboard.anchor_label, "Sun, Mar 10, 2024");
        assert!(dashboard.habits.is_empty());
        assert!(dashboard.selected.is_none());
    }

    #[test]
    fn tick_view_builds_pie_and_recent_bars() {
        let mut tracker = Tracker::default();
        let id = add(&mut tracker, "Stretch", HabitKind::Tick, "", None);
        tracker.set_log(&id, anchor(), Some(LogValue::Done)).unwrap();
        tracker
            .set_log(&id, anchor().pred_opt().unwrap(), Some(LogValue::Done))
            .unwrap();
        tracker.select(Some(id.as_str()));

        let dashboard = build_dashboard(&tracker, anchor());
        assert!(dashboard.habits[0].selected);
        let view = dashboard.selected.unwrap();
        assert_eq!(view.streak, 2);
        assert_eq!(view.streak_text, "Current streak: 2 day(s) • Habit: Stretch");
        assert_eq!(view.entry, Some(LogValue::Done));
        assert_eq!(view.summary, HabitSummary::Tick { done: 2, missed: 0 });

        assert_eq!(view.main.kind, ChartKind::Pie);
        assert_eq!(view.main.labels, vec!["Done", "Missed"]);
        assert_eq!(view.main.series[0].data, vec![2.0, 0.0]);

        assert_eq!(view.secondary.kind, ChartKind::Bar);
        assert_eq!(view.secondary.labels.first().unwrap(), "03-04");
        assert_eq!(view.secondary.labels.last().unwrap(), "03-10");
        assert_eq!(
            view.secondary.series[0].data,
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0]
        );
        assert_eq!(
            view.secondary.caption.as_deref(),
            Some("Last 7 days ending Sun, Mar 10, 2024 (1=Done, 0=Not done)")
        );
    }

    #[test]
    fn numeric_view_reports_totals_and_split() {
        let mut tracker = Tracker::default();
        let id = add(&mut tracker, "Run", HabitKind::Numeric, "km", Some(10.0));
        tracker.set_log(&id, anchor(), Some(LogValue::Value(15.0))).unwrap();
        tracker
            .set_log(&id, anchor().pred_opt().unwrap(), Some(LogValue::Value(10.0)))
            .unwrap();
        let view = build_habit_view(tracker.get_habit(&id).unwrap(), anchor());

        assert_eq!(view.streak, 2);
        assert_eq!(view.main.kind, ChartKind::Bar);
        assert_eq!(view.main.series[0].label, "Value km");
        assert_eq!(view.main.series[0].data[5..], [10.0, 15.0]);
        assert_eq!(view.secondary.kind, ChartKind::Pie);
        assert_eq!(view.secondary.series[0].data, vec![2.0, 5.0]);
        assert_eq!(
            view.secondary.caption.as_deref(),
            Some("Total: 25 km • Avg (logged days): 12.50 km • Target: 10")
        );
    }

    #[test]
    fn numeric_caption_without_target() {
        let mut tracker = Tracker::default();
        let id = add(&mut tracker, "Water", HabitKind::Numeric, "", None);
        let view = build_habit_view(tracker.get_habit(&id).unwrap(), anchor());
        assert_eq!(
            view.secondary.caption.as_deref(),
            Some("Total: 0 • Avg (logged days): 0.00 • Target: —")
        );
        assert_eq!(view.entry, None);
        assert_eq!(view.streak, 0);
    }
}
