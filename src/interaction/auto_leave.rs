use crate::error::{KanbanError, Result};
use std::{collections::HashMap, hash::Hash, time::Duration};
use tokio::{runtime::Handle, sync::mpsc, task::JoinHandle};

/// A timer that ran out without being re-armed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expired<K> {
    pub key: K,
    pub generation: u64,
}

/// Re-armable delayed callbacks, at most one pending per key.
///
/// Arming a key aborts its pending timer and schedules a new one. Expired
/// timers are delivered as messages so the owner applies them on its own
/// task; the timer tasks never touch shared state.
pub struct AutoLeave<K> {
    window: Duration,
    handle: Handle,
    pending: HashMap<K, (u64, JoinHandle<()>)>,
    tx: mpsc::UnboundedSender<Expired<K>>,
    rx: mpsc::UnboundedReceiver<Expired<K>>,
}

impl<K> AutoLeave<K>
where
    K: Clone + Eq + Hash + Send + 'static,
{
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(100);

    /// Creates a scheduler on the current tokio runtime
    pub fn new(window: Duration) -> Result<Self> {
        let handle =
            Handle::try_current().map_err(|e| KanbanError::RuntimeUnavailable(e.to_string()))?;
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            window,
            handle,
            pending: HashMap::new(),
            tx,
            rx,
        })
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Number of keys with a timer in flight
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn arm(&mut self, key: K, generation: u64) {
        self.cancel(&key);

        let tx = self.tx.clone();
        let window = self.window;
        let fired = key.clone();
        let task = self.handle.spawn(async move {
            tokio::time::sleep(window).await;
            // The receiver lives as long as the scheduler
            let _ = tx.send(Expired {
                key: fired,
                generation,
            });
        });

        self.pending.insert(key, (generation, task));
    }

    pub fn cancel(&mut self, key: &K) {
        if let Some((_, task)) = self.pending.remove(key) {
            task.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, (_, task)) in self.pending.drain() {
            task.abort();
        }
    }

    /// Waits for the next timer to expire
    pub async fn next(&mut self) -> Option<Expired<K>> {
        let expired = self.rx.recv().await?;
        self.forget(&expired);
        Some(expired)
    }

    /// Returns an already expired timer without waiting
    pub fn try_next(&mut self) -> Option<Expired<K>> {
        let expired = self.rx.try_recv().ok()?;
        self.forget(&expired);
        Some(expired)
    }

    fn forget(&mut self, expired: &Expired<K>) {
        let current = self
            .pending
            .get(&expired.key)
            .is_some_and(|(generation, _)| *generation == expired.generation);
        if current {
            self.pending.remove(&expired.key);
        }
    }
}

impl<K> Drop for AutoLeave<K> {
    fn drop(&mut self) {
        for (_, (_, task)) in self.pending.drain() {
            task.abort();
        }
    }
}
