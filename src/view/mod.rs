// ============================================================================
// Element table view - store snapshot x debounced filter x sort -> rows
// ============================================================================

use crate::core::{ElementRecord, Field, Result};
use crate::editor;
use crate::projection::{DebounceAfterFirst, SortState, project};
use crate::store::{ElementStore, Snapshot, SubscriptionId};
use log::{debug, error};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Default quiescence window for filter-text changes.
pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(2000);

/// Handle returned by [`ElementTable::on_update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type UpdateListener = Arc<dyn Fn(&[ElementRecord]) + Send + Sync>;

struct ViewState {
    snapshot: Snapshot,
    filter: String,
    sort: Option<SortState>,
    rows: Vec<ElementRecord>,
    listeners: HashMap<u64, UpdateListener>,
    next_listener_id: u64,
}

/// The displayed table: subscribes to the store, debounces filter input,
/// applies sort changes immediately, and recomputes its rows whenever any
/// of the three inputs settles.
///
/// Recomputation triggers:
/// - a new store snapshot (edit committed, or initial seed load)
/// - a settled filter change (first change immediate, later changes after
///   the quiescence window, superseded values never applied)
/// - a sort change (always immediate)
///
/// Dropping the table unsubscribes from the store and cancels any pending
/// filter timer.
pub struct ElementTable {
    store: Arc<ElementStore>,
    state: Arc<Mutex<ViewState>>,
    filter_input: DebounceAfterFirst<String>,
    subscription: SubscriptionId,
}

impl ElementTable {
    /// Wires a view onto `store` with the given quiescence window.
    ///
    /// Debounced filter changes run on a tokio timer, so filter input after
    /// the first change requires a tokio runtime.
    pub fn new(store: Arc<ElementStore>, quiescence: Duration) -> Result<Self> {
        let snapshot = store.get_all()?;
        let state = Arc::new(Mutex::new(ViewState {
            rows: snapshot.as_ref().clone(),
            snapshot,
            filter: String::new(),
            sort: None,
            listeners: HashMap::new(),
            next_listener_id: 0,
        }));

        let store_state = Arc::clone(&state);
        let subscription = store.subscribe(move |snapshot| {
            match store_state.lock() {
                Ok(mut view) => view.snapshot = Arc::clone(snapshot),
                Err(err) => {
                    error!("view state poisoned, dropping store update: {err}");
                    return;
                }
            }
            recompute_and_notify(&store_state);
        })?;

        let filter_state = Arc::clone(&state);
        let filter_input = DebounceAfterFirst::new(quiescence, move |text: String| {
            match filter_state.lock() {
                Ok(mut view) => view.filter = text,
                Err(err) => {
                    error!("view state poisoned, dropping filter update: {err}");
                    return;
                }
            }
            recompute_and_notify(&filter_state);
        });

        Ok(Self {
            store,
            state,
            filter_input,
            subscription,
        })
    }

    /// Wires a view with the default 2000 ms quiescence window.
    pub fn with_default_window(store: Arc<ElementStore>) -> Result<Self> {
        Self::new(store, DEFAULT_QUIESCENCE)
    }

    pub fn store(&self) -> &Arc<ElementStore> {
        &self.store
    }

    /// Rows as currently displayed: filtered, sorted, in order.
    pub fn rows(&self) -> Result<Vec<ElementRecord>> {
        Ok(self.state.lock()?.rows.clone())
    }

    /// Submits new filter text. The first change ever applies immediately;
    /// later changes apply once the input has been quiet for the quiescence
    /// window, and only the most recent value is applied.
    ///
    /// Safe to call from an update listener: no table lock is held while
    /// the delivery (and its listener notifications) runs.
    pub fn set_filter(&self, text: impl Into<String>) -> Result<()> {
        self.filter_input.push(text.into())
    }

    /// Sets or clears the sort. Applies immediately, no debounce.
    pub fn set_sort(&self, sort: Option<SortState>) -> Result<()> {
        {
            let mut view = self.state.lock()?;
            view.sort = sort;
        }
        recompute_and_notify(&self.state);
        Ok(())
    }

    /// Registers a listener invoked with the rows after every recomputation.
    pub fn on_update<F>(&self, listener: F) -> Result<ListenerId>
    where
        F: Fn(&[ElementRecord]) + Send + Sync + 'static,
    {
        let mut view = self.state.lock()?;
        let id = view.next_listener_id;
        view.next_listener_id += 1;
        view.listeners.insert(id, Arc::new(listener));
        Ok(ListenerId(id))
    }

    /// Removes a listener. Returns whether it was still registered.
    pub fn remove_listener(&self, id: ListenerId) -> Result<bool> {
        Ok(self.state.lock()?.listeners.remove(&id.0).is_some())
    }

    /// Runs one edit interaction on a displayed cell.
    ///
    /// `prompt` models the modal dialog: it receives the record, the field,
    /// and the current rendered value, and returns the raw replacement text
    /// or `None` to cancel. A cancelled or no-op edit returns `Ok(None)`
    /// without writing to the store; validation failures and a vanished
    /// record surface as errors for the caller to display.
    pub fn edit_cell<P>(
        &self,
        record: &ElementRecord,
        field: Field,
        prompt: P,
    ) -> Result<Option<ElementRecord>>
    where
        P: FnOnce(&ElementRecord, Field, &str) -> Option<String>,
    {
        let current = record.render(field);
        let Some(raw) = prompt(record, field, &current) else {
            debug!("edit of {field} cancelled");
            return Ok(None);
        };

        let coerced = editor::propose(record, field, &raw)?;
        if editor::is_unchanged(record, field, &coerced) {
            debug!("edit of {field} is a no-op, skipping store write");
            return Ok(None);
        }

        let edited = editor::commit_to_store(&self.store, record, field, &raw)?;
        Ok(Some(edited))
    }
}

impl Drop for ElementTable {
    fn drop(&mut self) {
        let _ = self.store.unsubscribe(self.subscription);
        let _ = self.filter_input.cancel();
    }
}

// Projection runs and listeners are collected under the lock; listeners are
// invoked after it is released, so a listener may call back into the table.
fn recompute_and_notify(state: &Arc<Mutex<ViewState>>) {
    let (rows, listeners) = {
        let mut view = match state.lock() {
            Ok(view) => view,
            Err(err) => {
                error!("view state poisoned, skipping recomputation: {err}");
                return;
            }
        };
        view.rows = project(&view.snapshot, &view.filter, view.sort);
        let listeners: Vec<UpdateListener> = view.listeners.values().cloned().collect();
        (view.rows.clone(), listeners)
    };
    for listener in listeners {
        listener(&rows);
    }
}
