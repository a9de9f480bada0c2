//! Table Formatter Utility
//! This module provides generic TSV and box-grid formatters for printing records.

use std::io::{self, Write};
use std::sync::Arc;

/// Runtime value with embedded formatting information.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Uint(u64),
    Str(String),
}

impl Value {
    fn is_numeric(&self) -> bool {
        !matches!(self, Value::Str(_))
    }

    fn render(&self) -> String {
        match self {
            Value::Uint(v) => v.to_string(),
            Value::Str(s) => s.clone(),
        }
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Uint(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

/// A column definition that combines metadata and extraction logic.
pub struct Column<R> {
    /// Header shown for this column (e.g. "Atom Number").
    pub key: &'static str,
    /// Function to extract the value from a record.
    pub extractor: Arc<dyn Fn(&R) -> Value + Send + Sync>,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Column {
            key: self.key,
            extractor: Arc::clone(&self.extractor),
        }
    }
}

impl<R> Column<R> {
    pub fn new<F>(key: &'static str, extractor: F) -> Self
    where
        F: Fn(&R) -> Value + Send + Sync + 'static,
    {
        Column {
            key,
            extractor: Arc::new(extractor),
        }
    }
}

// Box drawing pieces: left, fill, junction, right
const GRID_TOP: (&str, &str, &str, &str) = ("┍", "━", "┯", "┑");
const GRID_HEADER: (&str, &str, &str, &str) = ("┝", "━", "┿", "┥");
const GRID_ROW: (&str, &str, &str, &str) = ("├", "─", "┼", "┤");
const GRID_BOTTOM: (&str, &str, &str, &str) = ("┕", "━", "┷", "┙");

/// Generic formatter that can be instantiated for any record type `R`.
pub struct TableFormatter<R> {
    pub columns: Vec<Column<R>>,
}

impl<R> TableFormatter<R> {
    pub fn new(columns: Vec<Column<R>>) -> Self {
        TableFormatter { columns }
    }

    /// Write header line (column keys) to the writer.
    pub fn write_header<W: Write>(&self, mut w: W) -> io::Result<()> {
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(w, "\t")?;
            }
            write!(w, "{}", col.key)?;
        }
        writeln!(w)
    }

    /// Write a single record as TSV.
    pub fn write_record<W: Write>(&self, mut w: W, record: &R) -> io::Result<()> {
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(w, "\t")?;
            }
            let value = (col.extractor)(record);
            write!(w, "{}", escape_tsv(&value.render()))?;
        }
        writeln!(w)
    }

    /// Write all records as a box-drawn grid.
    /// Columns holding only numbers are right-aligned, others left-aligned.
    pub fn write_grid<W: Write>(&self, mut w: W, records: &[R]) -> io::Result<()> {
        let values: Vec<Vec<Value>> = records
            .iter()
            .map(|r| self.columns.iter().map(|col| (col.extractor)(r)).collect())
            .collect();
        let cells: Vec<Vec<String>> = values
            .iter()
            .map(|row| row.iter().map(Value::render).collect())
            .collect();
        let right_aligned: Vec<bool> = (0..self.columns.len())
            .map(|i| !values.is_empty() && values.iter().all(|row| row[i].is_numeric()))
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                cells
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(col.key.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let header: Vec<String> = self.columns.iter().map(|col| col.key.to_string()).collect();

        write_rule(&mut w, &widths, GRID_TOP)?;
        write_cells(&mut w, &header, &widths, &right_aligned)?;
        write_rule(&mut w, &widths, GRID_HEADER)?;
        for (i, row) in cells.iter().enumerate() {
            if i > 0 {
                write_rule(&mut w, &widths, GRID_ROW)?;
            }
            write_cells(&mut w, row, &widths, &right_aligned)?;
        }
        write_rule(&mut w, &widths, GRID_BOTTOM)
    }
}

fn write_rule<W: Write>(
    w: &mut W, widths: &[usize], pieces: (&str, &str, &str, &str)
) -> io::Result<()> {
    let (left, fill, junction, right) = pieces;
    let segments: Vec<String> = widths.iter().map(|width| fill.repeat(width + 2)).collect();
    writeln!(w, "{}{}{}", left, segments.join(junction), right)
}

fn write_cells<W: Write>(
    w: &mut W, cells: &[String], widths: &[usize], right_aligned: &[bool]
) -> io::Result<()> {
    write!(w, "│")?;
    for ((cell, width), right) in cells.iter().zip(widths).zip(right_aligned) {
        if *right {
            write!(w, " {:>1$} │", cell, width)?;
        } else {
            write!(w, " {:<1$} │", cell, width)?;
        }
    }
    writeln!(w)
}

/// Minimal TSV escaping (tabs and newlines).
fn escape_tsv(s: &str) -> String {
    s.replace('\t', " ").replace('\n', " ")
}
