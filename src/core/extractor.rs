use axum::{
    body::{Body, Bytes},
    extract::{
        rejection::BytesRejection, FromRequest, FromRequestParts, OptionalFromRequest, Path,
        Request,
    },
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// Custom JSON extractor that provides consistent error responses.
///
/// Used as `Option<AppJson<T>>`: an empty body or a literal `null` yields
/// `None` so the handler decides how to report a missing payload.
pub struct AppJson<T>(pub T);

impl<T, S> OptionalFromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Option<Self>, Self::Rejection> {
        let bytes = <Bytes as FromRequest<S>>::from_request(req, state)
            .await
            .map_err(AppJsonRejection::Body)?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let value = serde_json::from_slice::<Option<T>>(&bytes).map_err(AppJsonRejection::Json)?;
        Ok(value.map(Self))
    }
}

pub enum AppJsonRejection {
    Body(BytesRejection),
    Json(serde_json::Error),
}

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        match self {
            // Keeps the 413 produced by the body limit layer
            AppJsonRejection::Body(rejection) => rejection.into_response(),
            AppJsonRejection::Json(err) if err.is_syntax() || err.is_eof() => {
                AppError::BadRequest(format!("Invalid JSON syntax: {}", err)).into_response()
            }
            AppJsonRejection::Json(err) => {
                AppError::BadRequest(format!("Invalid JSON data: {}", err)).into_response()
            }
        }
    }
}

/// Path extractor whose rejections use the `ApiResponse` envelope
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}
