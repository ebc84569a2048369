use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, register_counter, register_gauge};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("vibecheck_requests_total", "Total number of API requests").unwrap();
    pub static ref SMASHES_ACCEPTED: Counter =
        register_counter!("vibecheck_smashes_accepted_total", "Total accepted smashes").unwrap();
    pub static ref SMASHES_REJECTED: Counter = register_counter!(
        "vibecheck_smashes_rejected_total",
        "Total smashes rejected by the cooldown"
    )
    .unwrap();
    pub static ref SMASH_COUNT: Gauge =
        register_gauge!("vibecheck_smash_count", "Current value of the smash counter").unwrap();
    pub static ref TRACKED_CLIENTS: Gauge = register_gauge!(
        "vibecheck_tracked_clients",
        "Clients currently held in the cooldown table"
    )
    .unwrap();
}
