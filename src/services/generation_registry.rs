use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex, MutexGuard,
    },
};

use tokio_util::sync::CancellationToken;

use crate::errors::{AppError, AppResult};

struct Registration {
    seq: u64,
    token: CancellationToken,
}

/// In-flight generations keyed by a client-chosen id.
///
/// Every token is a child of the server shutdown token, so shutting down
/// cancels all pending generations as well.
pub struct GenerationRegistry {
    shutdown: CancellationToken,
    next_seq: AtomicU64,
    active: Mutex<HashMap<String, Registration>>,
}

impl GenerationRegistry {
    pub fn new(shutdown: CancellationToken) -> Self {
        Self {
            shutdown,
            next_seq: AtomicU64::new(0),
            active: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Registration>> {
        self.active.lock().unwrap_or_else(|poisoned| {
            log::error!("Generation registry mutex poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn register(&self, generation_id: &str) -> AppResult<(u64, CancellationToken)> {
        let mut active = self.lock();
        if active.contains_key(generation_id) {
            log::warn!("Generation '{}' is already in flight", generation_id);
            return Err(AppError::ValidationError(format!(
                "generation '{}' is already in progress",
                generation_id
            )));
        }

        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let token = self.shutdown.child_token();
        active.insert(
            generation_id.to_string(),
            Registration {
                seq,
                token: token.clone(),
            },
        );
        Ok((seq, token))
    }

    /// Registers `generation_id` when present; anonymous generations only
    /// follow the shutdown token. Dropping the guard unregisters the id.
    /// An id that is still in flight is rejected.
    pub fn start(&self, generation_id: Option<&str>) -> AppResult<GenerationGuard<'_>> {
        let guard = match generation_id {
            Some(id) => {
                let (seq, token) = self.register(id)?;
                GenerationGuard {
                    registry: self,
                    entry: Some((id.to_string(), seq)),
                    token,
                }
            }
            None => GenerationGuard {
                registry: self,
                entry: None,
                token: self.shutdown.child_token(),
            },
        };
        Ok(guard)
    }

    /// Returns `false` when no generation with that id is in flight.
    pub fn cancel(&self, generation_id: &str) -> bool {
        match self.lock().remove(generation_id) {
            Some(registration) => {
                log::info!("Cancelling generation '{}'", generation_id);
                registration.token.cancel();
                true
            }
            None => false,
        }
    }

    /// Removes the entry only if it still belongs to registration `seq`.
    fn release(&self, generation_id: &str, seq: u64) {
        let mut active = self.lock();
        if active.get(generation_id).is_some_and(|r| r.seq == seq) {
            active.remove(generation_id);
        }
    }

    pub fn active_count(&self) -> usize {
        self.lock().len()
    }
}

pub struct GenerationGuard<'a> {
    registry: &'a GenerationRegistry,
    entry: Option<(String, u64)>,
    token: CancellationToken,
}

impl GenerationGuard<'_> {
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

impl Drop for GenerationGuard<'_> {
    fn drop(&mut self) {
        if let Some((id, seq)) = &self.entry {
            self.registry.release(id, *seq);
        }
    }
}
