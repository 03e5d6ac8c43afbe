use crate::errors::{AppError, HabitError};
use crate::models::AppData;
use crate::repository::Tracker;
use crate::storage::{clear_data, persist_data};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub tracker: Arc<Mutex<Tracker>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData) -> Self {
        Self {
            data_path,
            tracker: Arc::new(Mutex::new(Tracker::new(data))),
        }
    }

    /// Runs a mutation and saves the whole document before releasing the lock.
    pub async fn mutate<T>(
        &self,
        f: impl FnOnce(&mut Tracker) -> Result<T, HabitError>,
    ) -> Result<T, AppError> {
        let mut tracker = self.tracker.lock().await;
        let output = f(&mut tracker)?;
        persist_data(&self.data_path, tracker.data()).await?;
        Ok(output)
    }

    /// Drops every habit and the selection, and removes the data file.
    pub async fn reset(&self) -> Result<(), AppError> {
        let mut tracker = self.tracker.lock().await;
        clear_data(&self.data_path).await?;
        tracker.reset();
        Ok(())
    }
}
