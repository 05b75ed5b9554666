use crate::infra::{current_month, resolve_weather, AppState};
use ayurdosha::assessment::{
    self, AnswerSet, ClimateRiskReport, ConstitutionLabel, DiseaseRiskReport, Dosha,
    DoshaProfile, ProfileContext, WeatherSnapshot,
};
use ayurdosha::weather::ForecastDay;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

/// Month used by the disease listing when the caller names none.
const DEFAULT_DISEASE_MONTH: &str = "January";

#[derive(Debug, Deserialize)]
pub(crate) struct QuizRequest {
    #[serde(default)]
    pub(crate) answers: AnswerSet,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuizResponse {
    pub(crate) status: &'static str,
    pub(crate) prakruti: ConstitutionLabel,
    pub(crate) scores: DoshaProfile,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DiseaseQuery {
    pub(crate) dosha: Option<String>,
    pub(crate) month: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ClimateRiskRequest {
    #[serde(default)]
    pub(crate) dosha: Option<ConstitutionLabel>,
    #[serde(default)]
    pub(crate) city: Option<String>,
    #[serde(default)]
    pub(crate) month: Option<String>,
    #[serde(default)]
    pub(crate) weather: Option<WeatherSnapshot>,
    /// Raw forecast response as returned by the upstream weather service.
    #[serde(default)]
    pub(crate) forecast: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ClimateRiskResponse {
    pub(crate) city: String,
    #[serde(flatten)]
    pub(crate) report: ClimateRiskReport,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) outlook: Vec<ForecastDay>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ChatContextRequest {
    #[serde(default)]
    pub(crate) profile: Option<ProfileContext>,
    #[serde(default)]
    pub(crate) city: Option<String>,
    #[serde(default)]
    pub(crate) weather: Option<WeatherSnapshot>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatContextResponse {
    pub(crate) context: String,
}

pub(crate) fn assessment_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/quiz", post(quiz_endpoint))
        .route("/api/v1/diseases", get(diseases_endpoint))
        .route("/api/v1/climate-risk", post(climate_risk_endpoint))
        .route("/api/v1/chat/context", post(chat_context_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn quiz_endpoint(Json(payload): Json<QuizRequest>) -> Json<QuizResponse> {
    let outcome = assessment::submit_quiz(&payload.answers);

    Json(QuizResponse {
        status: "success",
        prakruti: outcome.prakruti,
        scores: outcome.scores,
    })
}

pub(crate) async fn diseases_endpoint(Query(query): Query<DiseaseQuery>) -> Json<DiseaseRiskReport> {
    let dosha = query
        .dosha
        .map(|raw| ConstitutionLabel::parse(&raw))
        .unwrap_or(ConstitutionLabel::Single(Dosha::Vata));
    let month = query
        .month
        .unwrap_or_else(|| DEFAULT_DISEASE_MONTH.to_string());

    Json(assessment::seasonal_risk(&dosha, &month))
}

pub(crate) async fn climate_risk_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ClimateRiskRequest>,
) -> Json<ClimateRiskResponse> {
    let ClimateRiskRequest {
        dosha,
        city,
        month,
        weather,
        forecast,
    } = payload;

    let dosha = dosha.unwrap_or_else(|| state.defaults.dosha.clone());
    let city = city
        .filter(|city| !city.trim().is_empty())
        .unwrap_or_else(|| state.defaults.city.clone());
    let month = month.unwrap_or_else(current_month);
    let resolved = resolve_weather(weather, forecast);

    let report = assessment::climate_risk(&dosha, &month, resolved.snapshot.as_ref());
    debug!(%city, risk = %report.imbalance.risk_level, "climate risk served");

    Json(ClimateRiskResponse {
        city,
        report,
        outlook: resolved.outlook,
    })
}

pub(crate) async fn chat_context_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ChatContextRequest>,
) -> Json<ChatContextResponse> {
    let city = payload
        .city
        .filter(|city| !city.trim().is_empty())
        .unwrap_or_else(|| state.defaults.city.clone());

    let context = assessment::assistant_context(
        payload.profile.as_ref(),
        &city,
        payload.weather.as_ref(),
    );

    Json(ChatContextResponse { context })
}
