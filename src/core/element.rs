use super::{Field, FieldKind};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the element table.
///
/// Records are value types: an edit never mutates a record in place, it
/// produces a new record via [`ElementRecord::with_value`] which then
/// replaces the old one in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub position: u32,
    pub name: String,
    pub symbol: String,
    pub weight: f64,
}

impl ElementRecord {
    pub fn new(position: u32, name: impl Into<String>, weight: f64, symbol: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
            symbol: symbol.into(),
            weight,
        }
    }

    /// Current value of one column, as a typed cell.
    pub fn value_of(&self, field: Field) -> CellValue {
        match field {
            Field::Position => CellValue::Number(self.position as f64),
            Field::Name => CellValue::Text(self.name.clone()),
            Field::Symbol => CellValue::Text(self.symbol.clone()),
            Field::Weight => CellValue::Number(self.weight),
        }
    }

    /// A copy of this record with exactly one column replaced.
    ///
    /// Mismatched kinds cannot happen through the editor, which coerces the
    /// raw input according to `field.kind()` before calling this; a mismatch
    /// here leaves the column unchanged rather than inventing a conversion.
    pub fn with_value(&self, field: Field, value: CellValue) -> ElementRecord {
        let mut record = self.clone();
        match (field, value) {
            (Field::Position, CellValue::Number(n)) => record.position = n as u32,
            (Field::Weight, CellValue::Number(n)) => record.weight = n,
            (Field::Name, CellValue::Text(s)) => record.name = s,
            (Field::Symbol, CellValue::Text(s)) => record.symbol = s,
            _ => {}
        }
        record
    }

    /// Column value rendered as display text.
    ///
    /// Numbers use the standard `f64` formatting, which is the shortest
    /// representation that round-trips, so `1.0079` renders as "1.0079" and
    /// `1.0` as "1". Filtering matches against exactly this text.
    pub fn render(&self, field: Field) -> String {
        self.value_of(field).to_string()
    }
}

/// The typed value of one cell, either the number or the text behind it.
///
/// Produced by validation/coercion and consumed by
/// [`ElementRecord::with_value`].
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            CellValue::Number(_) => FieldKind::Numeric,
            CellValue::Text(_) => FieldKind::Alphabetic,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => write!(f, "{s}"),
        }
    }
}

lazy_static! {
    static ref ELEMENT_DATA: Vec<ElementRecord> = vec![
        ElementRecord::new(1, "Hydrogen", 1.0079, "H"),
        ElementRecord::new(2, "Helium", 4.0026, "He"),
        ElementRecord::new(3, "Lithium", 6.941, "Li"),
        ElementRecord::new(4, "Beryllium", 9.0122, "Be"),
        ElementRecord::new(5, "Boron", 10.811, "B"),
        ElementRecord::new(6, "Carbon", 12.0107, "C"),
        ElementRecord::new(7, "Nitrogen", 14.0067, "N"),
        ElementRecord::new(8, "Oxygen", 15.9994, "O"),
        ElementRecord::new(9, "Fluorine", 18.9984, "F"),
        ElementRecord::new(10, "Neon", 20.1797, "Ne"),
    ];
}

/// The fixed seed dataset, in position order.
pub fn seed_elements() -> Vec<ElementRecord> {
    ELEMENT_DATA.clone()
}
