use crate::application::notifications::list::ListNotificationsUseCase;
use crate::domain::notifications::{Notification, NotificationLevel};
use crate::infrastructure::state::AppState;
use crate::shared::error::AppError;
use crate::shared::response::{JsonApiMeta, JsonApiResource, JsonApiResponse};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResource {
    pub level: NotificationLevel,
    pub message: String,
    #[serde(with = "time::serde::iso8601")]
    #[schema(value_type = String)]
    pub created_at: time::OffsetDateTime,
}

impl From<Notification> for NotificationResource {
    fn from(notification: Notification) -> Self {
        Self {
            level: notification.level,
            message: notification.message,
            created_at: notification.created_at,
        }
    }
}

#[derive(Deserialize, IntoParams)]
pub struct ListNotificationsQuery {
    #[param(example = 20, minimum = 1)]
    pub limit: Option<usize>,
}

/// Recent operator notifications, newest first
#[utoipa::path(
    get,
    path = "/api/v1/notifications",
    params(ListNotificationsQuery),
    responses(
        (status = 200, description = "Notifications", body = JsonApiResponse<Vec<JsonApiResource<NotificationResource>>>)
    ),
    tag = "notifications"
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(query): Query<ListNotificationsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = ListNotificationsUseCase::new(state.notifier);
    let notifications = use_case.execute(query.limit).await?;

    let total = notifications.len();
    let resources: Vec<_> = notifications
        .into_iter()
        .map(|n| JsonApiResource::new("notifications", n.id.to_string(), NotificationResource::from(n)))
        .collect();

    Ok((
        StatusCode::OK,
        Json(JsonApiResponse::new(resources).with_meta(JsonApiMeta::new().with_total(total))),
    ))
}
