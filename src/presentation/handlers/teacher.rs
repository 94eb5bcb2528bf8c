use crate::application::teacher::get::GetTeacherUseCase;
use crate::application::teacher::update::{UpdateTeacherRequest, UpdateTeacherUseCase};
use crate::domain::teacher::{Address, MemberStatus, Teacher};
use crate::infrastructure::state::AppState;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::response::{JsonApiResource, JsonApiResponse};
use crate::shared::validation::ValidatedJson;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherResource {
    pub name: String,
    pub initials: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    pub avatar: Option<String>,
    pub status: MemberStatus,
    #[schema(example = "2023-01-15")]
    pub join_date: String,
    pub specializations: Vec<String>,
    pub experience: u32,
    pub rating: f32,
    pub total_students: u32,
}

impl From<Teacher> for TeacherResource {
    fn from(teacher: Teacher) -> Self {
        Self {
            initials: teacher.initials(),
            name: teacher.name,
            email: teacher.email,
            phone: teacher.phone,
            address: teacher.address,
            avatar: teacher.avatar,
            status: teacher.status,
            join_date: teacher.join_date.to_string(),
            specializations: teacher.specializations,
            experience: teacher.experience_years,
            rating: teacher.rating,
            total_students: teacher.total_students,
        }
    }
}

fn resource(teacher: Teacher) -> JsonApiResource<TeacherResource> {
    JsonApiResource::new("teachers", teacher.id.clone(), TeacherResource::from(teacher))
}

/// Get the teacher profile
#[utoipa::path(
    get,
    path = "/api/v1/teacher",
    responses(
        (status = 200, description = "Teacher profile", body = JsonApiResponse<JsonApiResource<TeacherResource>>)
    ),
    tag = "teacher"
)]
pub async fn get_teacher(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let use_case = GetTeacherUseCase::new(state.teacher);
    let teacher = use_case.execute().await?;

    Ok((StatusCode::OK, Json(JsonApiResponse::new(resource(teacher)))))
}

/// Edit the teacher's contact details
#[utoipa::path(
    put,
    path = "/api/v1/teacher",
    request_body = UpdateTeacherRequest,
    responses(
        (status = 200, description = "Teacher profile updated", body = JsonApiResponse<JsonApiResource<TeacherResource>>),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "teacher"
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<UpdateTeacherRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = UpdateTeacherUseCase::new(
        state.teacher,
        state.notifier,
        state.scheduler,
        state.delays.mutation,
    );
    let teacher = use_case.execute(req).await?;

    Ok((StatusCode::OK, Json(JsonApiResponse::new(resource(teacher)))))
}
