//! The result table: base records plus one column of cells per iteration.
//!
//! Columns are kept in an ordered `Vec` and each column holds one cell per
//! record position, so `columns[k].cells[i]` is the output for record `i`
//! at iteration `k`.

use std::fmt;

use dioptra_integers::{Integer, Rational};
use dioptra_solve::SolutionRecord;

use crate::recurrence::PellState;

/// One output triple `(X, Y, Z)`.
///
/// Components are exact rationals. Under the strict halving policy they are
/// always integers; under the exact policy they may be half-integers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Triple {
    /// `X = (term1 + term2) / 2`.
    pub x: Rational,
    /// `Y = (term1 − term2) / 2`.
    pub y: Rational,
    /// `Z = (2y_k + 1)(a·u_k + 2b·v_k) / 2`.
    pub z: Rational,
}

impl Triple {
    /// Creates a triple from its components.
    #[must_use]
    pub fn new(x: Rational, y: Rational, z: Rational) -> Self {
        Self { x, y, z }
    }

    /// Creates an integral triple from machine integers.
    #[must_use]
    pub fn from_i64(x: i64, y: i64, z: i64) -> Self {
        Self::new(x.into(), y.into(), z.into())
    }

    /// Returns true if all three components are integers.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        self.x.is_integer() && self.y.is_integer() && self.z.is_integer()
    }

    /// Returns the components as integers when all are integral.
    #[must_use]
    pub fn to_integers(&self) -> Option<(Integer, Integer, Integer)> {
        Some((
            self.x.to_integer()?,
            self.y.to_integer()?,
            self.z.to_integer()?,
        ))
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A table cell: a triple, or the explicit marker for a record whose
/// scaled coordinates are not integral.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// The triple produced for this record and iteration.
    Triple(Triple),
    /// No triple exists for this record.
    Absent,
}

impl Cell {
    /// Returns the triple, if present.
    #[must_use]
    pub fn triple(&self) -> Option<&Triple> {
        match self {
            Cell::Triple(t) => Some(t),
            Cell::Absent => None,
        }
    }

    /// Returns true for the absence marker.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Cell::Absent)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Triple(t) => write!(f, "{t}"),
            Cell::Absent => f.write_str("-"),
        }
    }
}

/// The cells produced at one recurrence iteration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecurrenceColumn {
    /// The state `(u_k, v_k)` active at this iteration.
    pub label: PellState,
    /// One cell per record, in record order.
    pub cells: Vec<Cell>,
}

/// Records augmented with their recurrence columns. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultTable {
    records: Vec<SolutionRecord>,
    columns: Vec<RecurrenceColumn>,
}

impl ResultTable {
    /// Assembles a table.
    ///
    /// # Panics
    ///
    /// Panics if a column does not have exactly one cell per record.
    #[must_use]
    pub fn new(records: Vec<SolutionRecord>, columns: Vec<RecurrenceColumn>) -> Self {
        for column in &columns {
            assert_eq!(
                column.cells.len(),
                records.len(),
                "column {} is not parallel to the records",
                column.label
            );
        }
        Self { records, columns }
    }

    /// A table with no records and no columns.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// Returns the base records.
    #[must_use]
    pub fn records(&self) -> &[SolutionRecord] {
        &self.records
    }

    /// Returns the iteration columns.
    #[must_use]
    pub fn columns(&self) -> &[RecurrenceColumn] {
        &self.columns
    }

    /// Returns the column labels in iteration order.
    pub fn labels(&self) -> impl Iterator<Item = &PellState> {
        self.columns.iter().map(|c| &c.label)
    }

    /// Returns the cell for `record` at `iteration`.
    #[must_use]
    pub fn cell(&self, record: usize, iteration: usize) -> Option<&Cell> {
        self.columns.get(iteration)?.cells.get(record)
    }

    /// Iterates rows: each record with its cells across all iterations.
    pub fn rows(&self) -> impl Iterator<Item = (&SolutionRecord, Vec<&Cell>)> {
        self.records.iter().enumerate().map(move |(i, record)| {
            let cells = self.columns.iter().map(|c| &c.cells[i]).collect();
            (record, cells)
        })
    }

    /// Returns true if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> ResultTable {
        let records = vec![
            SolutionRecord::from_i64(0, 48, 3),
            SolutionRecord::from_i64(1, 48, 3),
        ];
        let columns = vec![RecurrenceColumn {
            label: PellState::from_i64(0, 1),
            cells: vec![Cell::Triple(Triple::from_i64(1, 2, 3)), Cell::Absent],
        }];
        ResultTable::new(records, columns)
    }

    #[test]
    fn test_cell_lookup() {
        let table = sample_table();
        assert_eq!(
            table.cell(0, 0).and_then(Cell::triple),
            Some(&Triple::from_i64(1, 2, 3))
        );
        assert!(table.cell(1, 0).unwrap().is_absent());
        assert!(table.cell(2, 0).is_none());
        assert!(table.cell(0, 1).is_none());
    }

    #[test]
    fn test_rows_are_parallel_to_records() {
        let table = sample_table();
        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].0.x, Integer::new(1));
        assert_eq!(rows[1].1, vec![&Cell::Absent]);
    }

    #[test]
    #[should_panic(expected = "not parallel")]
    fn test_ragged_column_is_rejected() {
        let _ = ResultTable::new(
            vec![SolutionRecord::from_i64(0, 48, 3)],
            vec![RecurrenceColumn {
                label: PellState::from_i64(0, 1),
                cells: Vec::new(),
            }],
        );
    }

    #[test]
    fn test_display() {
        let half = Triple::new(
            Rational::from_i64(3, 2),
            Rational::from_i64(3, 2),
            Rational::from_i64(1, 1),
        );
        assert_eq!(Cell::Triple(half.clone()).to_string(), "(3/2, 3/2, 1)");
        assert_eq!(Cell::Absent.to_string(), "-");
        assert!(!half.is_integral());
        assert_eq!(half.to_integers(), None);
    }
}
