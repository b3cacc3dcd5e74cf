//! Columnar catalogue tables for mock survey data.
//!
//! Provides the in-memory table model shared by the mock catalogue tools and
//! the readers and writers that move tables to and from disk:
//!
//! - [`Catalog`]: ordered, uniquely named, equal-length columns
//! - [`Column`] / [`ColumnData`]: typed column arrays with unit and description
//! - [`load_catalog`] / [`write_catalog`]: file storage in any [`TableFormat`]
//!   (CSV, JSON or FITS)
//!
//! Required columns are validated when a table is loaded, so callers fail
//! before any computation when an input is incomplete.

pub mod error;
pub mod io;
pub mod table;

pub use error::CatalogError;
pub use io::{
    load_catalog, read_catalog, write_catalog, write_catalog_to, TableFormat, UnknownFormat,
};
pub use table::{Catalog, Column, ColumnData};
