use crate::dates::{anchor_or_today, date_key, parse_date, today};
use crate::errors::AppError;
use crate::logs::resolve_input;
use crate::models::{
    CreateHabitRequest, DateQuery, Habit, ResetRequest, SelectRequest, SetLogRequest,
};
use crate::state::AppState;
use crate::ui::render_index;
use crate::view::{build_dashboard, Dashboard};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::info;

pub async fn index() -> Html<String> {
    Html(render_index(&date_key(today())))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Dashboard>, AppError> {
    let anchor = anchor_or_today(query.date.as_deref())?;
    let tracker = state.tracker.lock().await;
    Ok(Json(build_dashboard(&tracker, anchor)))
}

pub async fn list_habits(State(state): State<AppState>) -> Json<Vec<Habit>> {
    let tracker = state.tracker.lock().await;
    Json(tracker.habits().to_vec())
}

pub async fn get_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Habit>, AppError> {
    let tracker = state.tracker.lock().await;
    tracker
        .get_habit(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("habit '{id}' not found")))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<CreateHabitRequest>,
) -> Result<(StatusCode, Json<Habit>), AppError> {
    let new = payload.into_new_habit();
    let habit = state
        .mutate(|tracker| tracker.add_habit(new).cloned())
        .await?;

    info!(habit_id = %habit.id, kind = %habit.kind, "habit created");
    Ok((StatusCode::CREATED, Json(habit)))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let removed = state
        .mutate(|tracker| Ok(tracker.delete_habit(&id)))
        .await?;

    if removed {
        info!(habit_id = %id, "habit deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn select_habit(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
    Json(payload): Json<SelectRequest>,
) -> Result<Json<Dashboard>, AppError> {
    let anchor = anchor_or_today(query.date.as_deref())?;
    let mut tracker = state.tracker.lock().await;
    tracker.select(payload.id.as_deref());
    Ok(Json(build_dashboard(&tracker, anchor)))
}

pub async fn set_log(
    State(state): State<AppState>,
    Path((id, date)): Path<(String, String)>,
    Json(payload): Json<SetLogRequest>,
) -> Result<StatusCode, AppError> {
    let date = parse_date(&date)?;
    let written = state
        .mutate(|tracker| {
            let Some(kind) = tracker.get_habit(&id).map(|habit| habit.kind) else {
                return Ok(None);
            };
            let value = resolve_input(kind, payload.value)?;
            tracker.set_log(&id, date, value)?;
            Ok(Some(value))
        })
        .await?;

    match written {
        Some(Some(value)) => info!(habit_id = %id, %date, %value, "log set"),
        Some(None) => info!(habit_id = %id, %date, "log cleared"),
        None => {}
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn clear_log(
    State(state): State<AppState>,
    Path((id, date)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let date = parse_date(&date)?;
    let cleared = state
        .mutate(|tracker| tracker.set_log(&id, date, None))
        .await?;

    if cleared {
        info!(habit_id = %id, %date, "log cleared");
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn reset(
    State(state): State<AppState>,
    Json(payload): Json<ResetRequest>,
) -> Result<StatusCode, AppError> {
    if !payload.confirm {
        return Err(AppError::bad_request("reset requires confirm: true"));
    }

    state.reset().await?;
    info!("all habits and logs reset");
    Ok(StatusCode::NO_CONTENT)
}
