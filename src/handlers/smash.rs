use axum::{Json, extract::State, http::HeaderMap};
use std::sync::Arc;
use tracing::{debug, info};

use crate::client::{PeerAddr, client_id};
use crate::error::ApiError;
use crate::metrics::{
    REQUEST_TOTAL, SMASH_COUNT, SMASHES_ACCEPTED, SMASHES_REJECTED, TRACKED_CLIENTS,
};
use crate::models::{SmashResponse, SmashesResponse};
use crate::rate_limit::SmashOutcome;
use crate::state::AppState;

const SMASH_MESSAGE: &str = "SMASH registered 💥";
const RESET_MESSAGE: &str = "Smash counter reset ✅";

pub async fn smash_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    PeerAddr(peer): PeerAddr,
) -> Result<Json<SmashResponse>, ApiError> {
    REQUEST_TOTAL.inc();

    let client = client_id(&headers, peer, state.trust_forwarded_for);

    match state.smash_counter.try_smash(&client) {
        SmashOutcome::Accepted {
            smashes,
            last_smash_at,
        } => {
            SMASHES_ACCEPTED.inc();
            SMASH_COUNT.set(smashes as f64);
            TRACKED_CLIENTS.set(state.smash_counter.tracked_clients() as f64);
            debug!(client = %client, smashes, "smash accepted");

            Ok(Json(SmashResponse {
                smashes,
                message: SMASH_MESSAGE,
                last_smash_at: Some(last_smash_at),
            }))
        }
        SmashOutcome::Rejected {
            smashes,
            retry_after_ms,
        } => {
            SMASHES_REJECTED.inc();
            debug!(client = %client, retry_after_ms, "smash rejected, cooling down");

            Err(ApiError::RateLimited {
                smashes,
                retry_after_ms,
            })
        }
    }
}

pub async fn smashes_handler(State(state): State<Arc<AppState>>) -> Json<SmashesResponse> {
    REQUEST_TOTAL.inc();

    let snapshot = state.smash_counter.snapshot();
    Json(SmashesResponse {
        smashes: snapshot.smashes,
        last_smash_at: snapshot.last_smash_at,
    })
}

// No guard: any caller can zero the counter for everyone
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Json<SmashResponse> {
    REQUEST_TOTAL.inc();

    let snapshot = state.smash_counter.reset();
    SMASH_COUNT.set(0.0);
    TRACKED_CLIENTS.set(0.0);
    info!("smash counter reset");

    Json(SmashResponse {
        smashes: snapshot.smashes,
        message: RESET_MESSAGE,
        last_smash_at: snapshot.last_smash_at,
    })
}
