use crate::errors::HabitError;
use crate::models::{AppData, Habit, HabitKind, NewHabit};
use chrono::Utc;
use std::collections::HashSet;
use tracing::warn;
use uuid::Uuid;

/// In-memory application state: the habit document plus the transient
/// selection. Persistence is the caller's job after every mutation.
#[derive(Debug, Default)]
pub struct Tracker {
    pub(crate) data: AppData,
    selected: Option<String>,
}

impl Tracker {
    /// Builds the tracker from a loaded document, selecting the newest habit.
    pub fn new(mut data: AppData) -> Self {
        let mut seen = HashSet::new();
        data.habits.retain(|habit| {
            let fresh = seen.insert(habit.id.clone());
            if !fresh {
                warn!(habit_id = %habit.id, "dropping habit with duplicate id");
            }
            fresh
        });
        let selected = data.habits.first().map(|habit| habit.id.clone());
        Self { data, selected }
    }

    pub fn data(&self) -> &AppData {
        &self.data
    }

    pub fn habits(&self) -> &[Habit] {
        &self.data.habits
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_habit(&self) -> Option<&Habit> {
        self.selected.as_deref().and_then(|id| self.get_habit(id))
    }

    pub fn add_habit(&mut self, new: NewHabit) -> Result<&Habit, HabitError> {
        let name = new.name.trim();
        if name.is_empty() {
            return Err(HabitError::EmptyName);
        }

        let (unit, target) = match new.kind {
            HabitKind::Tick => (String::new(), None),
            HabitKind::Numeric => (
                new.unit.as_deref().map(str::trim).unwrap_or_default().to_string(),
                new.target.filter(|target| target.is_finite()),
            ),
        };

        let habit = Habit {
            id: Uuid::new_v4().simple().to_string(),
            name: name.to_string(),
            kind: new.kind,
            unit,
            target,
            rank: new.rank.as_deref().map(str::trim).unwrap_or_default().to_string(),
            created_at: Utc::now().timestamp_millis(),
            logs: Default::default(),
        };
        self.data.habits.insert(0, habit);
        Ok(&self.data.habits[0])
    }

    pub fn delete_habit(&mut self, id: &str) -> bool {
        let before = self.data.habits.len();
        self.data.habits.retain(|habit| habit.id != id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.data.habits.len() != before
    }

    pub fn get_habit(&self, id: &str) -> Option<&Habit> {
        self.data.habits.iter().find(|habit| habit.id == id)
    }

    pub(crate) fn get_habit_mut(&mut self, id: &str) -> Option<&mut Habit> {
        self.data.habits.iter_mut().find(|habit| habit.id == id)
    }

    /// Selects a habit by id. Unknown ids and `None` clear the selection.
    pub fn select(&mut self, id: Option<&str>) -> Option<&Habit> {
        self.selected = id
            .filter(|id| self.get_habit(id).is_some())
            .map(str::to_string);
        self.selected_habit()
    }

    pub fn reset(&mut self) {
        self.data = AppData::default();
        self.selected = None;
    }
}
