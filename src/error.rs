use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::RETRY_AFTER},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::{MessageResponse, SmashRejectedResponse};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Too fast 💨 Wait a bit before smashing again.")]
    RateLimited { smashes: u64, retry_after_ms: u64 },

    #[error("Nope 😄 Try code=411L")]
    SecretRejected,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        match self {
            ApiError::RateLimited {
                smashes,
                retry_after_ms,
            } => {
                let mut response = (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(SmashRejectedResponse {
                        smashes,
                        message,
                        retry_after_ms,
                    }),
                )
                    .into_response();

                // Retry-After only carries whole seconds
                let seconds = retry_after_ms.div_ceil(1000).max(1);
                response
                    .headers_mut()
                    .insert(RETRY_AFTER, HeaderValue::from(seconds));
                response
            }
            ApiError::SecretRejected => {
                (StatusCode::FORBIDDEN, Json(MessageResponse { message })).into_response()
            }
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse { message }),
            )
                .into_response(),
        }
    }
}
