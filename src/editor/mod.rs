// ============================================================================
// Cell editor - validate-then-commit protocol for single-field edits
// ============================================================================

use crate::core::{CellValue, ElementRecord, Field, FieldKind, Result, TableError};
use crate::store::ElementStore;
use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

lazy_static! {
    static ref ALPHABETIC: Regex = Regex::new(r"^[A-Za-z]+$").expect("alphabetic pattern is valid");
}

/// A user's proposed replacement for one field of one record.
///
/// Transient: borrows the target record and the raw input for the duration
/// of the edit interaction and is discarded after commit or cancel.
#[derive(Debug, Clone, Copy)]
pub struct EditProposal<'a> {
    pub record: &'a ElementRecord,
    pub field: Field,
    pub raw: &'a str,
}

impl<'a> EditProposal<'a> {
    pub fn new(record: &'a ElementRecord, field: Field, raw: &'a str) -> Self {
        Self { record, field, raw }
    }

    /// Validates the raw input against the field's semantic kind and, when
    /// valid, returns the coerced cell value: the parsed number for numeric
    /// fields, the title-cased string for `name` and `symbol`.
    ///
    /// Rules, first match wins:
    /// 1. empty input fails with `EmptyValue`
    /// 2. numeric fields: a non-parsing (or non-finite) input fails with
    ///    `NotANumber`, a negative value with `NegativeNumber`
    /// 3. string fields: anything but letters fails with `NonAlphabetic`;
    ///    `symbol` additionally requires length 1 or 2
    ///    (`InvalidSymbolLength`)
    pub fn validate(&self) -> Result<CellValue> {
        if self.raw.is_empty() {
            return Err(TableError::EmptyValue);
        }

        match self.field.kind() {
            FieldKind::Numeric => {
                let parsed: f64 = self
                    .raw
                    .parse()
                    .map_err(|_| TableError::NotANumber(self.raw.to_string()))?;
                if !parsed.is_finite() {
                    return Err(TableError::NotANumber(self.raw.to_string()));
                }
                if parsed < 0.0 {
                    return Err(TableError::NegativeNumber(self.raw.to_string()));
                }
                Ok(CellValue::Number(parsed))
            }
            FieldKind::Alphabetic => {
                if !ALPHABETIC.is_match(self.raw) {
                    return Err(TableError::NonAlphabetic(self.raw.to_string()));
                }
                if self.field == Field::Symbol && !(1..=2).contains(&self.raw.len()) {
                    return Err(TableError::InvalidSymbolLength(self.raw.to_string()));
                }
                Ok(CellValue::Text(title_case(self.raw)))
            }
        }
    }

    /// Re-validates and, on success, returns a new record identical to the
    /// target except for the edited field. Never touches the store.
    pub fn commit(&self) -> Result<ElementRecord> {
        let value = self.validate()?;
        Ok(self.record.with_value(self.field, value))
    }

    /// Whether committing the coerced value would be a no-op.
    pub fn is_unchanged(&self, coerced: &CellValue) -> bool {
        is_unchanged(self.record, self.field, coerced)
    }
}

/// Validates `raw` as a replacement for `field` on `record`; returns the
/// coerced value when valid. See [`EditProposal::validate`].
pub fn propose(record: &ElementRecord, field: Field, raw: &str) -> Result<CellValue> {
    EditProposal::new(record, field, raw).validate()
}

/// Re-validates and returns the edited record without writing to any store.
pub fn commit(record: &ElementRecord, field: Field, raw: &str) -> Result<ElementRecord> {
    EditProposal::new(record, field, raw).commit()
}

/// Whether committing `coerced` to `field` would be a no-op: numeric
/// equality for numeric fields, exact string equality for string fields.
pub fn is_unchanged(record: &ElementRecord, field: Field, coerced: &CellValue) -> bool {
    match (record.value_of(field), coerced) {
        (CellValue::Number(current), CellValue::Number(proposed)) => current == *proposed,
        (CellValue::Text(current), CellValue::Text(proposed)) => current == *proposed,
        _ => false,
    }
}

/// Commits an edit and writes it back to the store at the record's current
/// index, located by identity.
///
/// A record that is no longer present at commit time (including any edit
/// attempted before the store is initialized) reports
/// [`TableError::IndexOutOfRange`]; the store is left untouched.
pub fn commit_to_store(
    store: &ElementStore,
    record: &ElementRecord,
    field: Field,
    raw: &str,
) -> Result<ElementRecord> {
    let edited = commit(record, field, raw)?;
    let index = store.index_of(record)?.ok_or_else(|| {
        warn!(
            "edit commit failed: record '{}' (position {}) is no longer in the store",
            record.name, record.position
        );
        TableError::IndexOutOfRange(format!(
            "record '{}' is no longer present in the store",
            record.name
        ))
    })?;
    store.replace_at(index, edited.clone())?;
    Ok(edited)
}

/// Title case as the table stores it: first character upper-cased, every
/// remaining character lower-cased.
fn title_case(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
