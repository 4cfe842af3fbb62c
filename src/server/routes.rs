use crate::domain::model::{
    ContactAck, ContactInfo, ContactSubmission, Experience, PortfolioPayload, ProbeResult,
    Profile, Project, Skill, Volunteer,
};
use crate::server::state::AppState;
use crate::utils::error::{PortfolioError, Result};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{
        header::{ORIGIN, REFERER},
        HeaderMap,
    },
    Json,
};
use serde_json::Value;

async fn section<T>(state: &AppState, pick: impl FnOnce(&PortfolioPayload) -> T) -> Result<Json<T>> {
    let payload = state.portfolio.get().await?;
    Ok(Json(pick(payload.as_ref())))
}

pub async fn portfolio_handler(State(state): State<AppState>) -> Result<Json<PortfolioPayload>> {
    section(&state, PortfolioPayload::clone).await
}

pub async fn profile_handler(State(state): State<AppState>) -> Result<Json<Profile>> {
    section(&state, PortfolioPayload::profile).await
}

pub async fn contact_info_handler(
    State(state): State<AppState>,
) -> Result<Json<Option<ContactInfo>>> {
    section(&state, |p| p.contact.clone()).await
}

pub async fn skills_handler(State(state): State<AppState>) -> Result<Json<Option<Vec<Skill>>>> {
    section(&state, |p| p.skills.clone()).await
}

pub async fn experience_handler(
    State(state): State<AppState>,
) -> Result<Json<Option<Vec<Experience>>>> {
    section(&state, |p| p.experience.clone()).await
}

pub async fn volunteer_handler(
    State(state): State<AppState>,
) -> Result<Json<Option<Vec<Volunteer>>>> {
    section(&state, |p| p.volunteer.clone()).await
}

pub async fn projects_handler(
    State(state): State<AppState>,
) -> Result<Json<Option<Vec<Project>>>> {
    section(&state, |p| p.projects.clone()).await
}

pub async fn site_handler(State(state): State<AppState>) -> Result<Json<Option<Value>>> {
    section(&state, |p| p.site.clone()).await
}

pub async fn legal_handler(State(state): State<AppState>) -> Result<Json<Option<Value>>> {
    section(&state, |p| p.legal.clone()).await
}

pub async fn homelab_handler(State(state): State<AppState>) -> Result<Json<Option<Value>>> {
    section(&state, |p| p.homelab.clone()).await
}

pub async fn status_monitors_handler(State(state): State<AppState>) -> Result<Json<ProbeResult>> {
    let prober = state
        .prober
        .as_ref()
        .ok_or(PortfolioError::StatusNotConfigured)?;
    Ok(Json(prober.probe().await?))
}

/// 先檢查來源，再看內容；無法解析的 body 一律當作欄位缺漏
pub async fn contact_submit_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: std::result::Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<ContactAck>> {
    let origin = headers.get(ORIGIN).and_then(|v| v.to_str().ok());
    let referer = headers.get(REFERER).and_then(|v| v.to_str().ok());

    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            tracing::debug!("Unreadable contact body: {}", rejection);
            ContactSubmission::default()
        }
    };

    let ack = state.relay.submit(submission, origin, referer).await?;
    Ok(Json(ack))
}
