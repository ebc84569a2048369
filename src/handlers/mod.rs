mod content;
mod health;
mod metrics;
mod smash;

pub use content::{fortune_handler, joke_handler, secret_handler, vibe_handler};
pub use health::health_handler;
pub use metrics::metrics_handler;
pub use smash::{reset_handler, smash_handler, smashes_handler};
