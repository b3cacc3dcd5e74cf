//! In-memory columnar catalogue tables.
//!
//! A [`Catalog`] is an ordered set of uniquely named columns that all hold the
//! same number of rows. Column data lives in `ndarray` arrays so downstream
//! code can apply whole-column arithmetic without per-row dispatch.

use std::collections::HashMap;

use ndarray::Array1;

use crate::CatalogError;

/// Typed storage of a single column
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// 64-bit floating point data (double precision)
    Float64(Array1<f64>),
    /// 32-bit floating point data
    Float32(Array1<f32>),
}

impl ColumnData {
    /// Number of rows held by the column
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Float64(arr) => arr.len(),
            ColumnData::Float32(arr) => arr.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the storage type as written to self-describing formats
    pub fn dtype(&self) -> &'static str {
        match self {
            ColumnData::Float64(_) => "float64",
            ColumnData::Float32(_) => "float32",
        }
    }

    /// Widen the column to double precision
    pub fn to_f64(&self) -> Array1<f64> {
        match self {
            ColumnData::Float64(arr) => arr.clone(),
            ColumnData::Float32(arr) => arr.mapv(f64::from),
        }
    }

    /// Value at `row` widened to double precision
    pub fn get_f64(&self, row: usize) -> Option<f64> {
        match self {
            ColumnData::Float64(arr) => arr.get(row).copied(),
            ColumnData::Float32(arr) => arr.get(row).map(|&v| f64::from(v)),
        }
    }
}

/// A catalogue column with optional physical unit and description
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub data: ColumnData,
    pub unit: Option<String>,
    pub description: Option<String>,
}

impl Column {
    pub fn new(data: ColumnData) -> Self {
        Self {
            data,
            unit: None,
            description: None,
        }
    }

    /// Double precision column without metadata
    pub fn from_f64(values: Array1<f64>) -> Self {
        Self::new(ColumnData::Float64(values))
    }

    /// Single precision column without metadata
    pub fn from_f32(values: Array1<f32>) -> Self {
        Self::new(ColumnData::Float32(values))
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Ordered collection of equal-length named columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    names: Vec<String>,
    columns: Vec<Column>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows, zero for a table without columns
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Iterate over `(name, column)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.names.iter().map(String::as_str).zip(self.columns.iter())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Result<&Column, CatalogError> {
        self.index
            .get(name)
            .map(|&idx| &self.columns[idx])
            .ok_or_else(|| CatalogError::MissingColumn(name.to_string()))
    }

    /// Copy of a column's values in double precision
    pub fn values_f64(&self, name: &str) -> Result<Array1<f64>, CatalogError> {
        Ok(self.column(name)?.data.to_f64())
    }

    /// Append a column.
    ///
    /// The first column fixes the row count of the table; every later column
    /// must match it. Names must be unique.
    pub fn insert(&mut self, name: impl Into<String>, column: Column) -> Result<(), CatalogError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(CatalogError::DuplicateColumn(name));
        }
        if !self.columns.is_empty() && column.len() != self.len() {
            return Err(CatalogError::LengthMismatch {
                column: name,
                expected: self.len(),
                found: column.len(),
            });
        }

        self.index.insert(name.clone(), self.columns.len());
        self.names.push(name);
        self.columns.push(column);
        Ok(())
    }

    /// Check that every name in `required` is present.
    ///
    /// Reports the first absent column in the order given.
    pub fn require<S: AsRef<str>>(&self, required: &[S]) -> Result<(), CatalogError> {
        match required.iter().find(|name| !self.contains(name.as_ref())) {
            Some(missing) => Err(CatalogError::MissingColumn(missing.as_ref().to_string())),
            None => Ok(()),
        }
    }
}
