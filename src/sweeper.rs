use chrono::Utc;
use std::sync::Arc;
use tokio::time::{Duration, interval};
use tracing::info;

use crate::metrics::TRACKED_CLIENTS;
use crate::state::AppState;

// Cooldown table sweeper - drops clients whose cooldown has fully expired
pub async fn cooldown_sweeper(state: Arc<AppState>, sweep_interval: Duration) {
    let mut interval = interval(sweep_interval);

    info!(interval = ?sweep_interval, "cooldown sweeper started");

    loop {
        interval.tick().await;

        let removed = state.smash_counter.sweep_idle_at(Utc::now());
        let remaining = state.smash_counter.tracked_clients();
        TRACKED_CLIENTS.set(remaining as f64);

        if removed > 0 {
            info!(removed, remaining, "swept idle clients from cooldown table");
        }
    }
}
