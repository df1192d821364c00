pub mod element;
pub mod error;
pub mod field;

pub use element::{CellValue, ElementRecord, seed_elements};
pub use error::{Result, TableError};
pub use field::{Field, FieldKind};
