// ============================================================================
// elementdb - editable, filterable, sortable in-memory element table
// ============================================================================

//! An in-memory element table with three cooperating pieces:
//!
//! - [`ElementStore`] owns the canonical record sequence and publishes each
//!   new snapshot to subscribers; replacing one record is the only write.
//! - the projection ([`projection::project`]) derives the displayed rows
//!   from a snapshot, a filter string, and an optional sort; filter input is
//!   debounced with immediate-first semantics.
//! - the editor ([`editor`]) validates a proposed cell value, coerces it,
//!   and splices the edited record back into the store at its current index.
//!
//! [`ElementTable`] wires the three together for a rendering shell.
//!
//! # Examples
//!
//! ```
//! use elementdb::{ElementStore, Field, editor};
//!
//! let store = ElementStore::new();
//! store.initialize()?;
//!
//! let helium = store.get_all()?[1].clone();
//! let edited = editor::commit_to_store(&store, &helium, Field::Weight, "4.5")?;
//! assert_eq!(edited.weight, 4.5);
//! assert_eq!(store.get_all()?[1].weight, 4.5);
//! # Ok::<(), elementdb::TableError>(())
//! ```

pub mod core;
pub mod editor;
pub mod projection;
pub mod store;
pub mod view;

// Re-export main types for convenience
pub use crate::core::{CellValue, ElementRecord, Field, FieldKind, Result, TableError, seed_elements};
pub use crate::projection::{DebounceAfterFirst, SortDirection, SortState, project};
pub use crate::store::{ElementStore, Snapshot, SubscriptionId};
pub use crate::view::{DEFAULT_QUIESCENCE, ElementTable, ListenerId};
