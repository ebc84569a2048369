use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

// Outcome of a smash attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmashOutcome {
    Accepted {
        smashes: u64,
        last_smash_at: DateTime<Utc>,
    },
    // client is still cooling down, nothing was recorded
    Rejected { smashes: u64, retry_after_ms: u64 },
}

// Read-only view of the global counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmashSnapshot {
    pub smashes: u64,
    pub last_smash_at: Option<DateTime<Utc>>,
}

#[derive(Default)]
struct CounterInner {
    smashes: u64,
    last_smash_at: Option<DateTime<Utc>>,
    last_smash_by_client: HashMap<String, DateTime<Utc>>, // client id -> last accepted smash
}

/// Global smash counter with a per-client cooldown.
///
/// The count, the last smash time and the cooldown table sit behind one
/// mutex so the check-then-record step of [`SmashCounter::try_smash_at`]
/// cannot interleave with another smash or a reset.
pub struct SmashCounter {
    cooldown: TimeDelta,
    inner: Mutex<CounterInner>,
}

impl SmashCounter {
    pub fn new(cooldown_ms: u64) -> Self {
        let cooldown = i64::try_from(cooldown_ms)
            .ok()
            .and_then(TimeDelta::try_milliseconds)
            .unwrap_or(TimeDelta::MAX);

        Self {
            cooldown,
            inner: Mutex::new(CounterInner::default()),
        }
    }

    // counter state is valid after every statement, so a poisoned lock is still usable
    fn lock(&self) -> MutexGuard<'_, CounterInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // Smash using the current wall clock, truncated to milliseconds
    pub fn try_smash(&self, client_id: &str) -> SmashOutcome {
        self.try_smash_at(client_id, Utc::now().trunc_subsecs(3))
    }

    pub fn try_smash_at(&self, client_id: &str, now: DateTime<Utc>) -> SmashOutcome {
        let mut inner = self.lock();

        if let Some(last) = inner.last_smash_by_client.get(client_id) {
            // a clock that went backwards counts as "just smashed"
            let elapsed = now.signed_duration_since(*last).max(TimeDelta::zero());

            if elapsed < self.cooldown {
                let wait = self.cooldown - elapsed;
                return SmashOutcome::Rejected {
                    smashes: inner.smashes,
                    retry_after_ms: u64::try_from(wait.num_milliseconds()).unwrap_or(0),
                };
            }
        }

        inner.last_smash_by_client.insert(client_id.to_string(), now);
        inner.smashes += 1;
        inner.last_smash_at = Some(now);

        SmashOutcome::Accepted {
            smashes: inner.smashes,
            last_smash_at: now,
        }
    }

    pub fn snapshot(&self) -> SmashSnapshot {
        let inner = self.lock();
        SmashSnapshot {
            smashes: inner.smashes,
            last_smash_at: inner.last_smash_at,
        }
    }

    // Zero the counter and forget every client's cooldown
    pub fn reset(&self) -> SmashSnapshot {
        let mut inner = self.lock();
        inner.smashes = 0;
        inner.last_smash_at = None;
        inner.last_smash_by_client.clear();

        SmashSnapshot {
            smashes: 0,
            last_smash_at: None,
        }
    }

    /// Drops cooldown entries that are at least one cooldown old.
    ///
    /// Such a client would be accepted on its next smash whether or not
    /// the entry exists, so sweeping never changes an outcome. Returns
    /// the number of entries removed.
    pub fn sweep_idle_at(&self, now: DateTime<Utc>) -> usize {
        let mut inner = self.lock();
        let before = inner.last_smash_by_client.len();
        let cooldown = self.cooldown;

        inner
            .last_smash_by_client
            .retain(|_, last| now.signed_duration_since(*last) < cooldown);

        before - inner.last_smash_by_client.len()
    }

    pub fn tracked_clients(&self) -> usize {
        self.lock().last_smash_by_client.len()
    }
}
