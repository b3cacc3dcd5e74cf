//! Catalogue table storage.
//!
//! Tables are read whole into memory and written whole, overwriting any file
//! already present at the destination. CSV and JSON also work on arbitrary
//! readers and writers; FITS needs a file on disk.

mod csv_table;
mod fits_table;
mod json_table;

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::{Catalog, CatalogError};

/// On-disk table formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    /// Comma separated values with a header row of column names
    #[default]
    Csv,
    /// Self-describing JSON keeping column dtype, unit and description
    Json,
    /// FITS file with one named image extension per column
    Fits,
}

/// A format name that is not one of the [`TableFormat`]s
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown table format '{0}' (expected one of: csv, json, fits)")]
pub struct UnknownFormat(pub String);

impl FromStr for TableFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(TableFormat::Csv),
            "json" => Ok(TableFormat::Json),
            "fits" | "fit" => Ok(TableFormat::Fits),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableFormat::Csv => write!(f, "csv"),
            TableFormat::Json => write!(f, "json"),
            TableFormat::Fits => write!(f, "fits"),
        }
    }
}

/// Parse a table from any reader.
///
/// Fails with `CatalogError::RequiresFile` for [`TableFormat::Fits`].
pub fn read_catalog<R: Read>(reader: R, format: TableFormat) -> Result<Catalog, CatalogError> {
    match format {
        TableFormat::Csv => csv_table::read(reader),
        TableFormat::Json => json_table::read(reader),
        TableFormat::Fits => Err(CatalogError::RequiresFile(format.to_string())),
    }
}

/// Serialise a table to any writer.
///
/// Fails with `CatalogError::RequiresFile` for [`TableFormat::Fits`].
pub fn write_catalog_to<W: Write>(
    catalog: &Catalog,
    writer: W,
    format: TableFormat,
) -> Result<(), CatalogError> {
    match format {
        TableFormat::Csv => csv_table::write(catalog, writer),
        TableFormat::Json => json_table::write(catalog, writer),
        TableFormat::Fits => Err(CatalogError::RequiresFile(format.to_string())),
    }
}

/// Load a table from disk and check that all `required` columns exist.
///
/// # Errors
/// * `CatalogError::Io` - the file cannot be opened
/// * `CatalogError::MissingColumn` - the first required column not present
/// * format specific parse errors
pub fn load_catalog<P: AsRef<Path>, S: AsRef<str>>(
    path: P,
    format: TableFormat,
    required: &[S],
) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let catalog = match format {
        TableFormat::Fits => {
            std::fs::metadata(path).map_err(|e| CatalogError::io(path, e))?;
            fits_table::read(path)?
        }
        _ => {
            let file = File::open(path).map_err(|e| CatalogError::io(path, e))?;
            read_catalog(BufReader::new(file), format)?
        }
    };
    catalog.require(required)?;

    debug!(
        "loaded {} rows x {} columns from {}",
        catalog.len(),
        catalog.num_columns(),
        path.display()
    );
    Ok(catalog)
}

/// Write a table to disk, replacing any existing file at `path`
pub fn write_catalog<P: AsRef<Path>>(
    catalog: &Catalog,
    path: P,
    format: TableFormat,
) -> Result<(), CatalogError> {
    let path = path.as_ref();
    if format == TableFormat::Fits {
        return fits_table::write(catalog, path);
    }
    let file = File::create(path).map_err(|e| CatalogError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_catalog_to(catalog, &mut writer, format)?;
    writer.flush().map_err(|e| CatalogError::io(path, e))
}
