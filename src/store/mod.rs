// ============================================================================
// Element store - canonical record sequence with atomic snapshot replacement
// ============================================================================

use crate::core::{ElementRecord, Result, TableError, seed_elements};
use log::{debug, info};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

/// An immutable view of the store's contents at one instant.
///
/// The store never mutates a published snapshot; every change swaps in a
/// freshly built vector, so a held snapshot stays valid and internally
/// consistent for as long as the caller keeps it.
pub type Snapshot = Arc<Vec<ElementRecord>>;

/// Callback invoked with each newly published snapshot.
pub type Subscriber = Arc<dyn Fn(&Snapshot) + Send + Sync>;

/// Handle returned by [`ElementStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct StoreState {
    snapshot: Snapshot,
    initialized: bool,
}

/// Owns the canonical sequence of element records and notifies subscribers
/// whenever a new snapshot is published.
///
/// The only mutation primitive is replacing the snapshot reference in one
/// step, so no reader ever observes a torn sequence. Records are never
/// deleted or inserted; [`ElementStore::replace_at`] is the sole write.
pub struct ElementStore {
    state: RwLock<StoreState>,
    subscribers: Mutex<HashMap<u64, Subscriber>>,
    next_subscriber_id: AtomicU64,
}

impl ElementStore {
    /// Creates an empty, uninitialized store. No snapshot is published until
    /// [`ElementStore::initialize`] runs.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                snapshot: Arc::new(Vec::new()),
                initialized: false,
            }),
            subscribers: Mutex::new(HashMap::new()),
            next_subscriber_id: AtomicU64::new(0),
        }
    }

    /// Loads the fixed seed dataset and publishes it as the first snapshot.
    ///
    /// Idempotent: repeat calls are no-ops and publish nothing.
    pub fn initialize(&self) -> Result<()> {
        {
            let mut state = self.state.write()?;
            if state.initialized {
                debug!("store already initialized, skipping seed load");
                return Ok(());
            }
            state.snapshot = Arc::new(seed_elements());
            state.initialized = true;
            info!("store initialized with {} seed records", state.snapshot.len());
        }
        self.notify()?;
        Ok(())
    }

    /// Current snapshot, in insertion/position order. Cheap to clone and
    /// safe to hold across later writes.
    pub fn get_all(&self) -> Result<Snapshot> {
        Ok(Arc::clone(&self.state.read()?.snapshot))
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.state.read()?.snapshot.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.state.read()?.snapshot.is_empty())
    }

    /// Publishes a new snapshot equal to the current one except that the
    /// record at `index` is `record`.
    ///
    /// Fails with [`TableError::IndexOutOfRange`] and leaves the store
    /// untouched when `index` is not a valid position. An uninitialized
    /// store has length zero, so every index is out of range until
    /// [`ElementStore::initialize`] has run.
    pub fn replace_at(&self, index: usize, record: ElementRecord) -> Result<()> {
        {
            let mut state = self.state.write()?;
            let len = state.snapshot.len();
            if index >= len {
                return Err(TableError::IndexOutOfRange(format!(
                    "index {index} out of range for {len} records"
                )));
            }
            let mut records = state.snapshot.as_ref().clone();
            records[index] = record;
            state.snapshot = Arc::new(records);
            debug!("replaced record at index {index}");
        }
        self.notify()?;
        Ok(())
    }

    /// Locates a record's current index by identity (full-value equality).
    ///
    /// Returns `None` when the record is no longer present, e.g. because it
    /// was replaced between an edit proposal and its commit.
    pub fn index_of(&self, record: &ElementRecord) -> Result<Option<usize>> {
        Ok(self.state.read()?.snapshot.iter().position(|r| r == record))
    }

    /// Registers a callback invoked with every snapshot published after this
    /// call. The callback does not fire with the current snapshot.
    pub fn subscribe<F>(&self, callback: F) -> Result<SubscriptionId>
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        let id = self.next_subscriber_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers.lock()?.insert(id, Arc::new(callback));
        Ok(SubscriptionId(id))
    }

    /// Removes a subscriber. Returns whether it was still registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<bool> {
        Ok(self.subscribers.lock()?.remove(&id.0).is_some())
    }

    // Snapshot is read and callbacks are cloned out before any of them run,
    // so a subscriber may call back into the store without deadlocking.
    fn notify(&self) -> Result<()> {
        let snapshot = self.get_all()?;
        let subscribers: Vec<Subscriber> = self.subscribers.lock()?.values().cloned().collect();
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
        Ok(())
    }
}

impl Default for ElementStore {
    fn default() -> Self {
        Self::new()
    }
}
