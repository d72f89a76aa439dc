use crate::recognition::RecognitionResult;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;

struct Slot {
    value: Option<(RecognitionResult, Instant)>,
    generation: u64,
}

/// Single-slot, TTL-evicted holder for the most recent recognition result.
///
/// Each write bumps a generation counter and arms a clearing task that only
/// fires if its generation is still current, so overwriting a result never
/// leaves an older timer around to clear the newer value early. Reads also
/// check the deadline, so a slow timer can never serve a stale entry.
#[derive(Clone)]
pub struct ResultCache {
    slot: Arc<Mutex<Slot>>,
    ttl: Duration,
}

impl ResultCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot {
                value: None,
                generation: 0,
            })),
            ttl,
        }
    }

    /// Overwrites the slot and re-arms the expiry timer.
    pub async fn store(&self, result: RecognitionResult) {
        let generation = {
            let mut slot = self.slot.lock().await;
            slot.generation += 1;
            slot.value = Some((result, Instant::now() + self.ttl));
            slot.generation
        };

        let slot = Arc::clone(&self.slot);
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut slot = slot.lock().await;
            if slot.generation == generation {
                debug!("Cached result expired after {:?}", ttl);
                slot.value = None;
            }
        });
    }

    /// Returns the cached result if it is still within its window.
    pub async fn get(&self) -> Option<RecognitionResult> {
        let slot = self.slot.lock().await;
        match &slot.value {
            Some((result, deadline)) if Instant::now() < *deadline => Some(result.clone()),
            _ => None,
        }
    }
}
