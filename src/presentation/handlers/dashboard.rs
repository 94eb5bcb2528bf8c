use crate::application::dashboard::stats::GetDashboardStatsUseCase;
use crate::domain::dashboard::DashboardStats;
use crate::infrastructure::state::AppState;
use crate::shared::error::AppError;
use crate::shared::response::{JsonApiResource, JsonApiResponse};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResource {
    pub total_teachers: u32,
    pub active_students: u32,
    pub total_classes: u32,
    #[schema(value_type = String, example = "12450.00")]
    pub revenue: Decimal,
}

impl From<DashboardStats> for DashboardResource {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_teachers: stats.total_teachers,
            active_students: stats.active_students,
            total_classes: stats.total_classes,
            revenue: stats.revenue,
        }
    }
}

/// Headline figures for the dashboard cards
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    responses(
        (status = 200, description = "Dashboard statistics", body = JsonApiResponse<JsonApiResource<DashboardResource>>)
    ),
    tag = "dashboard"
)]
pub async fn get_dashboard(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let use_case = GetDashboardStatsUseCase::new(state.dashboard);
    let stats = use_case.execute().await?;

    Ok((
        StatusCode::OK,
        Json(JsonApiResponse::new(JsonApiResource::new(
            "dashboard-stats",
            "current",
            DashboardResource::from(stats),
        ))),
    ))
}
