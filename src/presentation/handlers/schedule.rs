use crate::application::schedule::grid::GetScheduleGridUseCase;
use crate::application::schedule::layout::ScheduleGrid;
use crate::application::schedule::list::ListScheduleUseCase;
use crate::domain::schedule::{DayOfWeek, ScheduleSlot};
use crate::infrastructure::state::AppState;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::response::{JsonApiMeta, JsonApiResource, JsonApiResponse};
use crate::shared::query::Qs;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlotResource {
    pub day: DayOfWeek,
    #[schema(example = "14:00")]
    pub start_time: String,
    #[schema(example = "15:30")]
    pub end_time: String,
    pub subject: String,
    #[serde(rename = "type")]
    #[schema(example = "private")]
    pub session_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_count: Option<u32>,
    pub color: String,
}

impl From<ScheduleSlot> for ScheduleSlotResource {
    fn from(slot: ScheduleSlot) -> Self {
        Self {
            day: slot.day,
            start_time: slot.start_time.to_string(),
            end_time: slot.end_time.to_string(),
            subject: slot.subject,
            session_type: slot.session.as_str().to_string(),
            student_count: slot.session.student_count(),
            color: slot.color,
        }
    }
}

#[derive(Deserialize, IntoParams)]
pub struct ScheduleQuery {
    /// Case-insensitive day name
    #[param(value_type = Option<String>, example = "tuesday")]
    pub day: Option<DayOfWeek>,
}

/// List the weekly timetable
#[utoipa::path(
    get,
    path = "/api/v1/schedule",
    params(ScheduleQuery),
    responses(
        (status = 200, description = "Schedule slots", body = JsonApiResponse<Vec<JsonApiResource<ScheduleSlotResource>>>),
        (status = 422, description = "Unknown day", body = ErrorResponse)
    ),
    tag = "schedule"
)]
pub async fn list_schedule(
    State(state): State<AppState>,
    Qs(query): Qs<ScheduleQuery>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = ListScheduleUseCase::new(state.schedule);
    let slots = use_case.execute(query.day).await?;

    let total = slots.len();
    let resources: Vec<_> = slots
        .into_iter()
        .map(|slot| JsonApiResource::new("schedule-slots", slot.id.clone(), ScheduleSlotResource::from(slot)))
        .collect();

    Ok((
        StatusCode::OK,
        Json(JsonApiResponse::new(resources).with_meta(JsonApiMeta::new().with_total(total))),
    ))
}

/// Weekly grid layout of the timetable
#[utoipa::path(
    get,
    path = "/api/v1/schedule/grid",
    responses(
        (status = 200, description = "Rows of hourly buckets with per-day placements", body = JsonApiResponse<JsonApiResource<ScheduleGrid>>)
    ),
    tag = "schedule"
)]
pub async fn get_schedule_grid(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let use_case = GetScheduleGridUseCase::new(state.schedule, state.grid);
    let grid = use_case.execute().await?;

    Ok((
        StatusCode::OK,
        Json(JsonApiResponse::new(JsonApiResource::new("schedule-grids", "week", grid))),
    ))
}
