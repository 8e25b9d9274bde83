use axum::{
    body::Body,
    extract::{
        rejection::{FormRejection, JsonRejection},
        Form, FromRequest, Multipart, Request,
    },
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// Extractor accepting either a JSON or a urlencoded form body, matching the
/// content type the client sent. JSON is the default when no form content
/// type is present.
pub struct FormOrJson<T>(pub T);

impl<T, S> FromRequest<S> for FormOrJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = FormOrJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/x-www-form-urlencoded") {
            match Form::<T>::from_request(req, state).await {
                Ok(Form(value)) => Ok(Self(value)),
                Err(rejection) => Err(FormOrJsonRejection::Form(rejection)),
            }
        } else {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(Self(value)),
                Err(rejection) => Err(FormOrJsonRejection::Json(rejection)),
            }
        }
    }
}

/// Multipart extractor whose rejection emits the shared `{"error": …}` body
/// instead of axum's plain-text default.
pub struct AppMultipart(pub Multipart);

impl<S> FromRequest<S> for AppMultipart
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        Multipart::from_request(req, state)
            .await
            .map(Self)
            .map_err(|e| AppError::BadRequest(format!("Invalid multipart request: {}", e)))
    }
}

pub enum FormOrJsonRejection {
    Form(FormRejection),
    Json(JsonRejection),
}

impl IntoResponse for FormOrJsonRejection {
    fn into_response(self) -> Response {
        let message = match self {
            FormOrJsonRejection::Form(err) => format!("Invalid form body: {}", err),
            FormOrJsonRejection::Json(err) => match err {
                JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
                JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
                JsonRejection::MissingJsonContentType(err) => {
                    format!("Missing JSON content type: {}", err)
                }
                _ => "Failed to parse request body".to_string(),
            },
        };

        AppError::BadRequest(message).into_response()
    }
}
