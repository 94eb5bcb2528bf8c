use crate::domain::qualifications::QualificationKind;
use crate::shared::error::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::collections::HashMap;

async fn path_params<S: Send + Sync>(
    parts: &mut Parts,
    state: &S,
) -> Result<HashMap<String, String>, AppError> {
    Path::<HashMap<String, String>>::from_request_parts(parts, state)
        .await
        .map(|Path(params)| params)
        .map_err(|e| AppError::ValidationError(e.body_text()))
}

fn parse_kind(params: &HashMap<String, String>) -> Result<QualificationKind, AppError> {
    let raw = params
        .get("kind")
        .ok_or_else(|| AppError::NotFound("Qualification list not found".to_string()))?;
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("Unknown qualification list '{}'", raw)))
}

/// `{kind}` segment of the qualification routes; unknown lists are 404
pub struct KindPath(pub QualificationKind);

impl<S: Send + Sync> FromRequestParts<S> for KindPath {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = path_params(parts, state).await?;
        Ok(KindPath(parse_kind(&params)?))
    }
}

/// `{kind}/{id}` segments of the qualification routes
pub struct QualificationPath {
    pub kind: QualificationKind,
    pub id: String,
}

impl<S: Send + Sync> FromRequestParts<S> for QualificationPath {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let mut params = path_params(parts, state).await?;
        let kind = parse_kind(&params)?;
        let id = params
            .remove("id")
            .ok_or_else(|| AppError::NotFound("Qualification not found".to_string()))?;
        Ok(QualificationPath { kind, id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route(
                "/{kind}",
                get(|KindPath(kind): KindPath| async move { kind.to_string() }),
            )
            .route(
                "/{kind}/{id}",
                get(|path: QualificationPath| async move { format!("{}:{}", path.kind, path.id) }),
            )
    }

    async fn call(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_kind_path_parses_case_insensitively() {
        assert_eq!(call("/Group").await, (StatusCode::OK, "group".to_string()));
        assert_eq!(call("/private/3").await, (StatusCode::OK, "private:3".to_string()));
    }

    #[tokio::test]
    async fn test_unknown_kind_is_not_found() {
        let (status, body) = call("/workshop").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Unknown qualification list 'workshop'"));
    }
}
