//! JSON body extractor that answers with the application error shape

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Like [`axum::Json`], but a body that cannot be read or parsed becomes an
/// [`AppError::BadRequest`] with the usual `{"error","status"}` body.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    let message = match &rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "Expected request with `Content-Type: application/json`".to_string()
        }
        JsonRejection::JsonSyntaxError(_) => {
            let detail = rejection.body_text();
            if detail.contains("EOF while parsing") {
                "Empty or incomplete JSON request".to_string()
            } else {
                "Invalid JSON format".to_string()
            }
        }
        JsonRejection::JsonDataError(_) => format!("Invalid request body: {}", rejection.body_text()),
        _ => "Failed to read request body".to_string(),
    };

    tracing::debug!(error = %rejection.body_text(), "rejected request body");
    AppError::BadRequest(message)
}
