use crate::calendar;
use crate::errors::AppError;
use crate::habits;
use crate::models::{
    CreateHabitRequest, Habit, HabitSummary, HeatmapResponse, ListParams,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use tracing::info;

pub async fn index() -> Html<String> {
    Html(render_index(&calendar::date_key(today())))
}

pub async fn list_habits(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Habit>>, AppError> {
    let today = today();
    let mut data = state.data.lock().await;
    for habit in &mut data.habits {
        habits::normalize(habit, today);
    }
    let mut list = data.habits.clone();
    drop(data);

    if let Some(key) = params.sort {
        habits::sort_habits(&mut list, key);
    }
    let list = habits::filter_habits(list, params.view.unwrap_or_default());
    Ok(Json(list))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<CreateHabitRequest>,
) -> Result<(StatusCode, Json<Habit>), AppError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("habit name must not be empty"));
    }

    let mut data = state.data.lock().await;
    data.next_id += 1;
    let habit = Habit {
        id: data.next_id,
        name: name.to_string(),
        completed: false,
        streak: 0,
        history: Vec::new(),
    };
    data.habits.push(habit.clone());
    persist_data(&state.data_path, &data).await?;
    info!("created habit {} ({})", habit.id, habit.name);

    Ok((StatusCode::CREATED, Json(habit)))
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Habit>, AppError> {
    let today = today();
    let mut data = state.data.lock().await;
    let habit = data
        .habits
        .iter_mut()
        .find(|habit| habit.id == id)
        .ok_or_else(|| AppError::not_found(format!("no habit with id {id}")))?;
    habits::toggle_today(habit, today);
    let updated = habit.clone();
    persist_data(&state.data_path, &data).await?;

    Ok(Json(updated))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    let position = data
        .habits
        .iter()
        .position(|habit| habit.id == id)
        .ok_or_else(|| AppError::not_found(format!("no habit with id {id}")))?;
    let removed = data.habits.remove(position);
    persist_data(&state.data_path, &data).await?;
    info!("deleted habit {} ({})", removed.id, removed.name);

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_heatmap(
    State(state): State<AppState>,
) -> Result<Json<HeatmapResponse>, AppError> {
    let today = today();
    let mut data = state.data.lock().await;
    for habit in &mut data.habits {
        habits::normalize(habit, today);
    }

    let heatmap =
        calendar::build_heatmap(today, data.habits.iter().map(|habit| habit.history.as_slice()));

    let total = data.habits.len();
    let completed_today = data.habits.iter().filter(|habit| habit.completed).count();
    let completion_rate = if total > 0 {
        (completed_today as f64 / total as f64 * 100.0).round() as u32
    } else {
        0
    };

    Ok(Json(HeatmapResponse {
        today: calendar::date_key(today),
        days: heatmap.days,
        months: heatmap.months,
        stats: heatmap.stats,
        summary: HabitSummary {
            total,
            completed_today,
            active: total - completed_today,
            completion_rate,
        },
    }))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
