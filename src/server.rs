//! Web server exposing the calculator as a small JSON API.
//!
//! Both endpoints take plain query parameters, validate them through
//! [`crate::engine`], and answer with raw values plus display strings.

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::domain::{Division, Equipment, MeetCategory, ScoreSystem, Sex, TargetSystem};
use crate::engine::{
    Field, ScoreResults, calculate_all_scores, calculate_target_weight, format_score,
    format_weight, parse_positive,
};
use crate::error::InputError;
use crate::units::MassUnit;

/// Shared application state.
pub struct AppState {
    /// Unit assumed when a request does not name one.
    pub default_unit: MassUnit,
}

// === Request Types ===

/// Query for `GET /api/score`. Everything arrives as text.
#[derive(Debug, Default, Deserialize)]
pub struct ScoreQuery {
    pub bodyweight: Option<String>,
    pub lifted: Option<String>,
    pub sex: Option<String>,
    pub equipment: Option<String>,
    pub category: Option<String>,
    pub unit: Option<String>,
}

/// Query for `GET /api/target`.
#[derive(Debug, Default, Deserialize)]
pub struct TargetQuery {
    pub bodyweight: Option<String>,
    pub score: Option<String>,
    pub system: Option<String>,
    pub sex: Option<String>,
    pub equipment: Option<String>,
    pub category: Option<String>,
    pub unit: Option<String>,
}

// === JSON Response Types ===

#[derive(Serialize)]
pub struct ScoreResponse {
    pub unit: MassUnit,
    pub division: &'static str,
    pub scores: ScoreResults,
    pub display: Vec<ScoreLine>,
}

#[derive(Serialize)]
pub struct ScoreLine {
    pub system: ScoreSystem,
    pub label: &'static str,
    pub value: String,
}

#[derive(Serialize)]
pub struct TargetResponse {
    pub system: TargetSystem,
    pub unit: MassUnit,
    pub weight: f64,
    pub display: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for InputError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

// === Router Setup ===

/// Creates the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/score", get(get_score))
        .route("/api/target", get(get_target))
        .route("/api/health", get(health))
        .with_state(state)
}

/// Runs the web server.
pub async fn run_server(state: Arc<AppState>, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Server running at http://localhost:{}", port);
    axum::serve(listener, app).await?;

    Ok(())
}

// === API Handlers ===

async fn health() -> &'static str {
    "ok"
}

/// GET /api/score - All five scores for a lift.
async fn get_score(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ScoreQuery>,
) -> Result<Json<ScoreResponse>, InputError> {
    let response = score_response(&state, &query).inspect_err(|e| {
        log::warn!("Rejected score request: {}", e);
    })?;
    Ok(Json(response))
}

/// GET /api/target - Weight needed to reach a score.
async fn get_target(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TargetQuery>,
) -> Result<Json<TargetResponse>, InputError> {
    let response = target_response(&state, &query).inspect_err(|e| {
        log::warn!("Rejected target request: {}", e);
    })?;
    Ok(Json(response))
}

fn score_response(state: &AppState, query: &ScoreQuery) -> Result<ScoreResponse, InputError> {
    let bodyweight = parse_positive(text(&query.bodyweight), Field::Bodyweight)?;
    let lifted = parse_positive(text(&query.lifted), Field::WeightLifted)?;
    let sex = parse_or_default::<Sex>(&query.sex)?;
    let division = parse_division(&query.equipment, &query.category)?;
    let unit = parse_or(&query.unit, state.default_unit)?;

    let scores = calculate_all_scores(bodyweight, lifted, sex, division, unit);
    log::debug!(
        "Scored {} {} / {} {} ({}, {})",
        bodyweight,
        unit,
        lifted,
        unit,
        sex,
        division.code()
    );

    let display = scores
        .entries()
        .map(|(system, value)| ScoreLine {
            system,
            label: system.display_name(),
            value: format_score(value),
        })
        .collect();

    Ok(ScoreResponse {
        unit,
        division: division.code(),
        scores,
        display,
    })
}

fn target_response(state: &AppState, query: &TargetQuery) -> Result<TargetResponse, InputError> {
    let bodyweight = parse_positive(text(&query.bodyweight), Field::Bodyweight)?;
    let target = parse_positive(text(&query.score), Field::TargetScore)?;
    let system = parse_or_default::<TargetSystem>(&query.system)?;
    let sex = parse_or_default::<Sex>(&query.sex)?;
    let division = parse_division(&query.equipment, &query.category)?;
    let unit = parse_or(&query.unit, state.default_unit)?;

    let weight = calculate_target_weight(bodyweight, target, system, sex, division, unit);
    log::debug!("{} {} at {} {} needs {} {}", system, target, bodyweight, unit, weight, unit);

    Ok(TargetResponse {
        system,
        unit,
        weight,
        display: format_weight(weight, unit),
    })
}

// === Helper Functions ===

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn parse_or<T: FromStr<Err = InputError>>(value: &Option<String>, default: T) -> Result<T, InputError> {
    match value.as_deref() {
        Some(s) if !s.trim().is_empty() => s.parse(),
        _ => Ok(default),
    }
}

fn parse_or_default<T>(value: &Option<String>) -> Result<T, InputError>
where
    T: FromStr<Err = InputError> + Default,
{
    parse_or(value, T::default())
}

fn parse_division(
    equipment: &Option<String>,
    category: &Option<String>,
) -> Result<Division, InputError> {
    Ok(Division::new(
        parse_or_default::<Equipment>(equipment)?,
        parse_or_default::<MeetCategory>(category)?,
    ))
}
