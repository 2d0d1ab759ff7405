//! Canonical field resolution over prioritized alias tables
//!
//! This module binds each canonical field of the detected dataset kind to an
//! actual header found in the input. Alias order is priority order and is
//! declared statically in [`crate::constants`]; resolution is deterministic
//! for a given header set.

use std::collections::HashMap;

use crate::app::models::{DatasetKind, RawRow};
use crate::constants::{
    AliasTable, CALL_OPTIONAL_FIELDS, CALL_REQUIRED_FIELDS, TICKET_OPTIONAL_FIELDS,
    TICKET_REQUIRED_FIELDS,
};
use crate::{Error, Result};

/// A canonical field bound to a concrete input column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    /// The header name actually present in the input
    pub header: String,

    /// Column position of that header
    pub index: usize,
}

/// Mapping from canonical field names to resolved input columns
#[derive(Debug, Clone)]
pub struct ColumnMap {
    kind: DatasetKind,
    columns: HashMap<String, ResolvedColumn>,
}

impl ColumnMap {
    /// Resolve every canonical field of `kind` against the header set.
    ///
    /// Required fields that resolve to no alias are collected, and after all
    /// of them have been checked a single [`Error::MissingColumns`] is
    /// returned enumerating every missing canonical name plus every header
    /// present in the input. Optional fields never fail; absent ones simply
    /// stay unresolved and the record builder substitutes defaults.
    pub fn resolve(kind: DatasetKind, headers: &[String]) -> Result<Self> {
        let (required, optional): (AliasTable, AliasTable) = match kind {
            DatasetKind::CallCenter => (CALL_REQUIRED_FIELDS, CALL_OPTIONAL_FIELDS),
            DatasetKind::Ticket => (TICKET_REQUIRED_FIELDS, TICKET_OPTIONAL_FIELDS),
        };

        let mut columns = HashMap::new();
        let mut missing = Vec::new();

        for (canonical, aliases) in required {
            match find_alias(headers, aliases) {
                Some(resolved) => {
                    columns.insert(canonical.to_string(), resolved);
                }
                None => missing.push(canonical.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(Error::missing_columns(
                kind.label(),
                missing,
                headers.to_vec(),
            ));
        }

        for (canonical, aliases) in optional {
            if let Some(resolved) = find_alias(headers, aliases) {
                columns.insert(canonical.to_string(), resolved);
            }
        }

        Ok(ColumnMap { kind, columns })
    }

    /// The dataset kind this map was resolved for
    pub fn kind(&self) -> DatasetKind {
        self.kind
    }

    /// The resolved input header for a canonical field, if any
    pub fn header_for(&self, canonical: &str) -> Option<&str> {
        self.columns.get(canonical).map(|c| c.header.as_str())
    }

    /// Whether a canonical field resolved to an input column
    pub fn is_resolved(&self, canonical: &str) -> bool {
        self.columns.contains_key(canonical)
    }

    /// Canonical fields with their resolved columns, sorted by column position
    pub fn resolved_fields(&self) -> Vec<(&str, &ResolvedColumn)> {
        let mut fields: Vec<(&str, &ResolvedColumn)> = self
            .columns
            .iter()
            .map(|(canonical, column)| (canonical.as_str(), column))
            .collect();
        fields.sort_by_key(|(_, column)| column.index);
        fields
    }

    /// Extract a canonical field's cell from a row.
    ///
    /// `Ok(None)` when the field is unresolved or the cell is blank.
    /// `Err` only when a resolved index falls outside the row, which cannot
    /// happen for rows accepted by the tabular parser.
    pub fn cell<'a>(&self, row: &'a RawRow, canonical: &str) -> Result<Option<&'a str>> {
        let Some(column) = self.columns.get(canonical) else {
            return Ok(None);
        };

        let value = row.value_at(column.index).ok_or_else(|| {
            Error::data_validation(format!(
                "Row has no column {} for field '{}'",
                column.index, canonical
            ))
        })?;

        let trimmed = value.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(trimmed))
        }
    }
}

/// First-match-wins alias search; alias order is significant
fn find_alias(headers: &[String], aliases: &[&str]) -> Option<ResolvedColumn> {
    for alias in aliases {
        if let Some(index) = headers.iter().position(|header| header == alias) {
            return Some(ResolvedColumn {
                header: headers[index].clone(),
                index,
            });
        }
    }
    None
}
