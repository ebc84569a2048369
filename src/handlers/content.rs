use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
};

use crate::content::{FORTUNES, JOKES, check_secret, lookup_vibe, pick_random};
use crate::error::ApiError;
use crate::metrics::REQUEST_TOTAL;
use crate::models::{
    FortuneResponse, JokeResponse, MessageResponse, SecretQuery, VibeQuery, VibeResponse,
};

const SECRET_MESSAGE: &str = "🎉 Secret unlocked: +10 luck on your next merge!";

pub async fn fortune_handler() -> Json<FortuneResponse> {
    REQUEST_TOTAL.inc();

    Json(FortuneResponse {
        fortune: pick_random(FORTUNES).to_string(),
    })
}

pub async fn joke_handler() -> Json<JokeResponse> {
    REQUEST_TOTAL.inc();

    Json(JokeResponse {
        joke: pick_random(JOKES).to_string(),
    })
}

// A query that fails to parse is treated as if no mood was given
pub async fn vibe_handler(query: Result<Query<VibeQuery>, QueryRejection>) -> Json<VibeResponse> {
    REQUEST_TOTAL.inc();

    let query = query.map(|Query(q)| q).unwrap_or_default();
    let vibe = lookup_vibe(query.mood.as_deref());

    Json(VibeResponse {
        mood: vibe.mood,
        emoji: vibe.emoji.to_string(),
        message: vibe.message.to_string(),
    })
}

pub async fn secret_handler(
    query: Result<Query<SecretQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    REQUEST_TOTAL.inc();

    let query = query.map(|Query(q)| q).unwrap_or_default();
    if !check_secret(query.code.as_deref()) {
        return Err(ApiError::SecretRejected);
    }

    Ok(Json(MessageResponse {
        message: SECRET_MESSAGE.to_string(),
    }))
}
