use crate::application::qualifications::create::CreateQualificationUseCase;
use crate::application::qualifications::delete::DeleteQualificationUseCase;
use crate::application::qualifications::form::QualificationRequest;
use crate::application::qualifications::get::GetQualificationUseCase;
use crate::application::qualifications::list::ListQualificationsUseCase;
use crate::application::qualifications::update::UpdateQualificationUseCase;
use crate::domain::qualifications::{Level, Qualification, QualificationKind};
use crate::infrastructure::state::AppState;
use crate::presentation::extractors::{KindPath, QualificationPath};
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::response::{JsonApiMeta, JsonApiResource, JsonApiResponse};
use crate::shared::validation::JsonBody;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QualificationResource {
    pub kind: QualificationKind,
    pub name: String,
    #[schema(value_type = String, example = "45.00")]
    pub rate: Decimal,
    pub currency: String,
    /// Rate with its currency, e.g. "$45.00/hr"
    pub rate_display: String,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_students: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_students: Option<u32>,
}

impl From<Qualification> for QualificationResource {
    fn from(qualification: Qualification) -> Self {
        let kind = qualification.kind();
        let (level, bounds) = match &qualification {
            Qualification::Private(q) => (Some(q.level), None),
            Qualification::Group(q) => (None, Some(q.student_bounds())),
        };
        let base = match qualification {
            Qualification::Private(q) => q.base,
            Qualification::Group(q) => q.base,
        };

        Self {
            kind,
            rate_display: format!("{}{:.2}/hr", base.currency, base.rate),
            name: base.name,
            rate: base.rate,
            currency: base.currency,
            description: base.description,
            level,
            min_students: bounds.map(|(min, _)| min),
            max_students: bounds.map(|(_, max)| max),
        }
    }
}

fn resource(qualification: Qualification) -> JsonApiResource<QualificationResource> {
    JsonApiResource::new(
        "qualifications",
        qualification.id().to_string(),
        QualificationResource::from(qualification),
    )
}

/// List one of the qualification lists
#[utoipa::path(
    get,
    path = "/api/v1/qualifications/{kind}",
    params(
        ("kind" = QualificationKind, Path, description = "private or group")
    ),
    responses(
        (status = 200, description = "Qualifications in stored order", body = JsonApiResponse<Vec<JsonApiResource<QualificationResource>>>),
        (status = 404, description = "Unknown list", body = ErrorResponse)
    ),
    tag = "qualifications"
)]
pub async fn list_qualifications(
    State(state): State<AppState>,
    KindPath(kind): KindPath,
) -> Result<impl IntoResponse, AppError> {
    let use_case = ListQualificationsUseCase::new(state.qualifications);
    let qualifications = use_case.execute(kind).await?;

    let total = qualifications.len();
    let resources: Vec<_> = qualifications.into_iter().map(resource).collect();

    Ok((
        StatusCode::OK,
        Json(JsonApiResponse::new(resources).with_meta(JsonApiMeta::new().with_total(total))),
    ))
}

/// Get a qualification
#[utoipa::path(
    get,
    path = "/api/v1/qualifications/{kind}/{id}",
    params(
        ("kind" = QualificationKind, Path, description = "private or group"),
        ("id" = String, Path, description = "Qualification ID")
    ),
    responses(
        (status = 200, description = "Qualification found", body = JsonApiResponse<JsonApiResource<QualificationResource>>),
        (status = 404, description = "Qualification not found", body = ErrorResponse)
    ),
    tag = "qualifications"
)]
pub async fn get_qualification(
    State(state): State<AppState>,
    path: QualificationPath,
) -> Result<impl IntoResponse, AppError> {
    let use_case = GetQualificationUseCase::new(state.qualifications);
    let qualification = use_case.execute(path.kind, &path.id).await?;

    Ok((StatusCode::OK, Json(JsonApiResponse::new(resource(qualification)))))
}

/// Add a qualification
#[utoipa::path(
    post,
    path = "/api/v1/qualifications/{kind}",
    params(
        ("kind" = QualificationKind, Path, description = "private or group")
    ),
    request_body = QualificationRequest,
    responses(
        (status = 201, description = "Qualification added", body = JsonApiResponse<JsonApiResource<QualificationResource>>),
        (status = 404, description = "Unknown list", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "qualifications"
)]
pub async fn create_qualification(
    State(state): State<AppState>,
    KindPath(kind): KindPath,
    JsonBody(req): JsonBody<QualificationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = CreateQualificationUseCase::new(
        state.qualifications,
        state.notifier,
        state.scheduler,
        state.delays.mutation,
    );
    let qualification = use_case.execute(kind, req).await?;

    Ok((StatusCode::CREATED, Json(JsonApiResponse::new(resource(qualification)))))
}

/// Edit a qualification
#[utoipa::path(
    put,
    path = "/api/v1/qualifications/{kind}/{id}",
    params(
        ("kind" = QualificationKind, Path, description = "private or group"),
        ("id" = String, Path, description = "Qualification ID")
    ),
    request_body = QualificationRequest,
    responses(
        (status = 200, description = "Qualification updated", body = JsonApiResponse<JsonApiResource<QualificationResource>>),
        (status = 404, description = "Qualification not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "qualifications"
)]
pub async fn update_qualification(
    State(state): State<AppState>,
    path: QualificationPath,
    JsonBody(req): JsonBody<QualificationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = UpdateQualificationUseCase::new(
        state.qualifications,
        state.notifier,
        state.scheduler,
        state.delays.mutation,
    );
    let qualification = use_case.execute(path.kind, &path.id, req).await?;

    Ok((StatusCode::OK, Json(JsonApiResponse::new(resource(qualification)))))
}

/// Delete a qualification
#[utoipa::path(
    delete,
    path = "/api/v1/qualifications/{kind}/{id}",
    params(
        ("kind" = QualificationKind, Path, description = "private or group"),
        ("id" = String, Path, description = "Qualification ID")
    ),
    responses(
        (status = 200, description = "Qualification deleted", body = JsonApiResponse<serde_json::Value>),
        (status = 404, description = "Qualification not found", body = ErrorResponse)
    ),
    tag = "qualifications"
)]
pub async fn delete_qualification(
    State(state): State<AppState>,
    path: QualificationPath,
) -> Result<impl IntoResponse, AppError> {
    let use_case = DeleteQualificationUseCase::new(state.qualifications, state.notifier);
    use_case.execute(path.kind, &path.id).await?;

    Ok((
        StatusCode::OK,
        Json(JsonApiResponse::new(json!(null)).with_meta(JsonApiMeta::new().with_deleted())),
    ))
}
