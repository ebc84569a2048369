use std::sync::Arc;

use crate::config::Args;
use crate::rate_limit::SmashCounter;

// app's shared state
pub struct AppState {
    pub smash_counter: SmashCounter,
    pub trust_forwarded_for: bool, // key clients by X-Forwarded-For when present
}

impl AppState {
    pub fn new(cooldown_ms: u64, trust_forwarded_for: bool) -> Arc<Self> {
        Arc::new(Self {
            smash_counter: SmashCounter::new(cooldown_ms),
            trust_forwarded_for,
        })
    }

    pub fn from_args(args: &Args) -> Arc<Self> {
        Self::new(args.cooldown_ms, args.trust_forwarded_for)
    }
}
