use crate::charts::build_analytics;
use crate::errors::AppError;
use crate::models::{
    AnalyticsResponse, AppData, DashboardResponse, MoodEntry, NewEntryRequest, NewEntryResponse,
    Preferences, ProfileUpdate, UserData,
};
use crate::mood::Mood;
use crate::sentiment::pick_insight;
use crate::state::AppState;
use crate::stats::build_dashboard;
use crate::storage::persist_data;
use crate::store::new_entry;
use crate::ui::render_index;
use axum::{
    Form, Json,
    extract::State,
    response::{Html, Redirect},
};
use chrono::Utc;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    let dashboard = build_dashboard(&data);
    Html(render_index(&dashboard, &data.user))
}

pub async fn submit_form(
    State(state): State<AppState>,
    Form(payload): Form<NewEntryRequest>,
) -> Result<Redirect, AppError> {
    submit_entry(&state, &payload).await?;
    Ok(Redirect::to("/"))
}

pub async fn list_entries(State(state): State<AppState>) -> Json<Vec<MoodEntry>> {
    let data = state.data.lock().await;
    Json(data.entries.entries().to_vec())
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<NewEntryRequest>,
) -> Result<Json<NewEntryResponse>, AppError> {
    let response = submit_entry(&state, &payload).await?;
    Ok(Json(response))
}

pub async fn get_today(State(state): State<AppState>) -> Json<Option<MoodEntry>> {
    let data = state.data.lock().await;
    Json(data.entries.todays_entry(Utc::now()).cloned())
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let data = state.data.lock().await;
    Json(build_dashboard(&data))
}

pub async fn get_analytics(State(state): State<AppState>) -> Json<AnalyticsResponse> {
    let data = state.data.lock().await;
    Json(build_analytics(&data))
}

pub async fn get_profile(State(state): State<AppState>) -> Json<UserData> {
    let data = state.data.lock().await;
    Json(data.user.clone())
}

pub async fn update_profile(
    State(state): State<AppState>,
    Json(payload): Json<ProfileUpdate>,
) -> Result<Json<UserData>, AppError> {
    if let Some(name) = &payload.name {
        if name.trim().is_empty() {
            return Err(AppError::bad_request("name must not be empty"));
        }
    }

    let user = commit(&state, |data| {
        if let Some(name) = payload.name {
            data.user.name = name.trim().to_string();
        }
        if let Some(email) = payload.email {
            data.user.email = email.trim().to_string();
        }
        if let Some(avatar) = payload.avatar {
            data.user.avatar = avatar;
        }
        data.user.clone()
    })
    .await?;

    info!(name = %user.name, "profile updated");
    Ok(Json(user))
}

pub async fn upgrade_premium(State(state): State<AppState>) -> Result<Json<UserData>, AppError> {
    let user = commit(&state, |data| {
        data.user.is_premium = true;
        data.user.clone()
    })
    .await?;

    info!("premium enabled");
    Ok(Json(user))
}

pub async fn get_preferences(State(state): State<AppState>) -> Json<Preferences> {
    let data = state.data.lock().await;
    Json(data.preferences)
}

pub async fn update_preferences(
    State(state): State<AppState>,
    Json(payload): Json<Preferences>,
) -> Result<Json<Preferences>, AppError> {
    commit(&state, |data| data.preferences = payload).await?;

    info!(?payload, "preferences saved");
    Ok(Json(payload))
}

pub async fn add_sample_data(
    State(state): State<AppState>,
) -> Result<Json<Vec<MoodEntry>>, AppError> {
    let entries = commit(&state, |data| {
        data.entries.add_sample_data(Utc::now());
        data.entries.entries().to_vec()
    })
    .await?;

    info!(entries = entries.len(), "sample data added");
    Ok(Json(entries))
}

/// Applies `change` to a copy of the data and writes the copy out. The shared
/// state is only replaced once the write succeeded.
async fn commit<T>(
    state: &AppState,
    change: impl FnOnce(&mut AppData) -> T,
) -> Result<T, AppError> {
    let mut data = state.data.lock().await;
    let mut updated = data.clone();
    let result = change(&mut updated);
    persist_data(&state.data_path, &updated).await?;
    *data = updated;
    Ok(result)
}

/// Validates, analyzes and stores one submission. The store lock is taken only
/// after analysis finishes.
async fn submit_entry(
    state: &AppState,
    payload: &NewEntryRequest,
) -> Result<NewEntryResponse, AppError> {
    let mood: Mood = payload.mood.trim().parse()?;
    let text = payload.text.trim();
    if text.is_empty() {
        return Err(AppError::bad_request("text must not be empty"));
    }

    let sentiment = state.analyzer.analyze(text).await;
    let insight = pick_insight(sentiment.label, &mut rand::thread_rng()).to_string();
    let entry = new_entry(Utc::now(), mood, text, sentiment);

    commit(state, |data| data.entries.prepend(entry.clone())).await?;

    info!(id = %entry.id, mood = %entry.mood, label = ?entry.sentiment.label, "entry logged");
    Ok(NewEntryResponse { entry, insight })
}
