use crate::errors::AppResult;
use crate::extract::{ApiForm, ApiJson};
use crate::models::{
    GoalForm, JournalEntry, JournalRequest, Mood, MoodEntry, MoodForm, RecordMoodRequest,
    ScreenForm,
};
use crate::session::{Goal, InsightsView, Screen, Snapshot, TrendView};
use crate::state::AppState;
use crate::suggestions::Suggestion;
use crate::ui::render_index;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Serialize)]
pub struct JournalView {
    pub prompt: &'static str,
    pub entries: Vec<JournalEntry>,
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_index(&session, &state.config))
}

pub async fn switch_screen(
    State(state): State<AppState>,
    ApiForm(form): ApiForm<ScreenForm>,
) -> AppResult<Redirect> {
    let screen: Screen = form.screen.parse()?;
    state.session.lock().await.switch_screen(screen);
    info!(screen = screen.key(), "switched screen");
    Ok(Redirect::to("/"))
}

pub async fn toggle_goal(
    State(state): State<AppState>,
    ApiForm(form): ApiForm<GoalForm>,
) -> AppResult<Redirect> {
    let goal: Goal = form.goal.parse()?;
    let selected = state.session.lock().await.toggle_goal(goal);
    info!(goal = goal.key(), selected, "toggled goal");
    Ok(Redirect::to("/"))
}

pub async fn save_mood(
    State(state): State<AppState>,
    ApiForm(form): ApiForm<MoodForm>,
) -> AppResult<Redirect> {
    let mood = parse_optional_mood(form.mood.as_deref())?;
    let mut session = state.session.lock().await;
    session.select_mood(mood);
    session.set_note(form.note);
    match session.save_mood() {
        Some(entry) => info!(id = %entry.id, mood = %entry.mood, "recorded mood"),
        None => debug!("no mood selected, nothing recorded"),
    }
    Ok(Redirect::to("/"))
}

pub async fn save_journal(
    State(state): State<AppState>,
    ApiForm(form): ApiForm<JournalRequest>,
) -> Redirect {
    let mut session = state.session.lock().await;
    session.set_journal_draft(form.body);
    match session.save_journal() {
        Some(entry) => info!(id = %entry.id, "saved journal entry"),
        None => debug!("blank journal entry ignored"),
    }
    Redirect::to("/")
}

pub async fn clear_journal(State(state): State<AppState>) -> Redirect {
    state.session.lock().await.clear_journal_draft();
    Redirect::to("/")
}

pub async fn get_state(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.session.lock().await.snapshot())
}

pub async fn list_moods(State(state): State<AppState>) -> Json<Vec<MoodEntry>> {
    let session = state.session.lock().await;
    Json(session.moods().entries().cloned().collect())
}

pub async fn record_mood(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RecordMoodRequest>,
) -> AppResult<Response> {
    let mood = parse_optional_mood(payload.mood.as_deref())?;
    let recorded = state
        .session
        .lock()
        .await
        .record_mood(mood, payload.note.as_deref());

    Ok(match recorded {
        Some(entry) => {
            info!(id = %entry.id, mood = %entry.mood, "recorded mood");
            (StatusCode::CREATED, Json(entry)).into_response()
        }
        None => {
            debug!("no mood given, nothing recorded");
            StatusCode::NO_CONTENT.into_response()
        }
    })
}

pub async fn get_trend(State(state): State<AppState>) -> Json<TrendView> {
    Json(state.session.lock().await.trend())
}

pub async fn get_suggestion(State(state): State<AppState>) -> Json<Suggestion> {
    Json(state.session.lock().await.suggestion())
}

pub async fn get_journal(State(state): State<AppState>) -> Json<JournalView> {
    let session = state.session.lock().await;
    Json(JournalView {
        prompt: session.journal().prompt(),
        entries: session.journal().entries().cloned().collect(),
    })
}

pub async fn write_journal(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<JournalRequest>,
) -> Response {
    match state.session.lock().await.write_journal(&payload.body) {
        Some(entry) => {
            info!(id = %entry.id, "saved journal entry");
            (StatusCode::CREATED, Json(entry)).into_response()
        }
        None => {
            debug!("blank journal entry ignored");
            StatusCode::NO_CONTENT.into_response()
        }
    }
}

pub async fn get_insights(State(state): State<AppState>) -> Json<InsightsView> {
    Json(state.session.lock().await.insights())
}

/// Absent or blank keys mean "no mood selected"; unknown keys are rejected.
fn parse_optional_mood(key: Option<&str>) -> AppResult<Option<Mood>> {
    key.map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::parse::<Mood>)
        .transpose()
        .map_err(Into::into)
}
