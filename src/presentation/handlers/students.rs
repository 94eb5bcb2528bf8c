use crate::application::students::list::{ListStudentsUseCase, StudentFilter};
use crate::domain::students::Student;
use crate::domain::teacher::MemberStatus;
use crate::infrastructure::state::AppState;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::query::Qs;
use crate::shared::response::{JsonApiMeta, JsonApiResource, JsonApiResponse};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentResource {
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub status: MemberStatus,
    pub enrolled_courses: u32,
    #[schema(example = "2024-01-15")]
    pub join_date: String,
}

impl From<Student> for StudentResource {
    fn from(student: Student) -> Self {
        Self {
            name: student.name,
            email: student.email,
            avatar: student.avatar,
            status: student.status,
            enrolled_courses: student.enrolled_courses,
            join_date: student.join_date.to_string(),
        }
    }
}

#[derive(Deserialize, Default)]
pub struct ListStudentsQuery {
    #[serde(default)]
    pub filter: StudentFilter,
}

/// List students
#[utoipa::path(
    get,
    path = "/api/v1/students",
    params(
        ("filter[search]" = Option<String>, Query, description = "Matches name or email, case-insensitive"),
        ("filter[status]" = Option<String>, Query, description = "active, inactive, pending or all")
    ),
    responses(
        (status = 200, description = "Matching students", body = JsonApiResponse<Vec<JsonApiResource<StudentResource>>>),
        (status = 422, description = "Invalid filter", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn list_students(
    State(state): State<AppState>,
    Qs(query): Qs<ListStudentsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = ListStudentsUseCase::new(state.students);
    let students = use_case.execute(query.filter).await?;

    let total = students.len();
    let resources: Vec<_> = students
        .into_iter()
        .map(|s| JsonApiResource::new("students", s.id.clone(), StudentResource::from(s)))
        .collect();

    Ok((
        StatusCode::OK,
        Json(JsonApiResponse::new(resources).with_meta(JsonApiMeta::new().with_total(total))),
    ))
}
