use std::fmt;

/// Semantic type of a column, deciding which validation rules apply to a
/// proposed edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Parsed as a non-negative number.
    Numeric,
    /// Letters only; `Symbol` additionally restricts the length.
    Alphabetic,
}

/// Identifies one column of an [`ElementRecord`](crate::core::ElementRecord).
///
/// Field access is always through this enum rather than a field-name string,
/// so an unknown column is unrepresentable and each field carries its
/// semantic kind with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Position,
    Name,
    Symbol,
    Weight,
}

impl Field {
    /// Every column, in display order.
    pub const ALL: [Field; 4] = [Field::Position, Field::Name, Field::Symbol, Field::Weight];

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Position | Field::Weight => FieldKind::Numeric,
            Field::Name | Field::Symbol => FieldKind::Alphabetic,
        }
    }

    /// Column label as rendered in a table header.
    pub fn label(self) -> &'static str {
        match self {
            Field::Position => "No.",
            Field::Name => "Name",
            Field::Symbol => "Symbol",
            Field::Weight => "Weight",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Position => "position",
            Field::Name => "name",
            Field::Symbol => "symbol",
            Field::Weight => "weight",
        };
        write!(f, "{name}")
    }
}
