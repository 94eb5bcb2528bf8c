use crate::application::courses::list::{CourseFilter, ListCoursesUseCase};
use crate::domain::courses::{Course, CourseStatus};
use crate::infrastructure::state::AppState;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::query::Qs;
use crate::shared::response::{JsonApiMeta, JsonApiResource, JsonApiResponse};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseResource {
    pub title: String,
    pub instructor: String,
    pub students: u32,
    #[schema(example = "12 weeks")]
    pub duration: String,
    pub status: CourseStatus,
    #[schema(value_type = String, example = "299.00")]
    pub price: Decimal,
}

impl From<Course> for CourseResource {
    fn from(course: Course) -> Self {
        Self {
            title: course.title,
            instructor: course.instructor,
            students: course.students,
            duration: course.duration,
            status: course.status,
            price: course.price,
        }
    }
}

#[derive(Deserialize, Default)]
pub struct ListCoursesQuery {
    #[serde(default)]
    pub filter: CourseFilter,
}

/// List courses
#[utoipa::path(
    get,
    path = "/api/v1/courses",
    params(
        ("filter[search]" = Option<String>, Query, description = "Matches title or instructor, case-insensitive"),
        ("filter[status]" = Option<String>, Query, description = "active, draft, completed or all")
    ),
    responses(
        (status = 200, description = "Matching courses", body = JsonApiResponse<Vec<JsonApiResource<CourseResource>>>),
        (status = 422, description = "Invalid filter", body = ErrorResponse)
    ),
    tag = "courses"
)]
pub async fn list_courses(
    State(state): State<AppState>,
    Qs(query): Qs<ListCoursesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = ListCoursesUseCase::new(state.courses);
    let courses = use_case.execute(query.filter).await?;

    let total = courses.len();
    let resources: Vec<_> = courses
        .into_iter()
        .map(|c| JsonApiResource::new("courses", c.id.clone(), CourseResource::from(c)))
        .collect();

    Ok((
        StatusCode::OK,
        Json(JsonApiResponse::new(resources).with_meta(JsonApiMeta::new().with_total(total))),
    ))
}
