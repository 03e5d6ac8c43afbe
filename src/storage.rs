use crate::errors::AppError;
use crate::models::{AppData, Habit};
use serde::Deserialize;
use serde_json::Value;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, warn};

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/habits.json"))
}

/// Reads the document. A missing or unreadable file, or one without a
/// `habits` array, yields an empty document; malformed habits are skipped.
pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => parse_document(&bytes),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

fn parse_document(bytes: &[u8]) -> AppData {
    let document: Value = match serde_json::from_slice(bytes) {
        Ok(document) => document,
        Err(err) => {
            error!("failed to parse data file: {err}");
            return AppData::default();
        }
    };

    let Some(entries) = document
        .as_object()
        .and_then(|object| object.get("habits"))
        .and_then(Value::as_array)
    else {
        error!("data file has no habits array");
        return AppData::default();
    };

    let habits = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match Habit::deserialize(entry) {
            Ok(habit) => Some(habit),
            Err(err) => {
                warn!(index, "skipping malformed habit: {err}");
                None
            }
        })
        .collect();
    AppData { habits }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

pub async fn clear_data(path: &Path) -> Result<(), AppError> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(AppError::internal(err)),
    }
}
