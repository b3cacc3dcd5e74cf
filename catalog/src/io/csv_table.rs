//! CSV tables: a header row of column names followed by one row per object.
//!
//! All columns are read back as double precision; units and descriptions are
//! not representable and are dropped on write.

use std::io::{Read, Write};

use ndarray::Array1;

use crate::{Catalog, CatalogError, Column, ColumnData};

pub(super) fn read<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let mut values: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];

    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        for ((field, name), column) in record.iter().zip(&headers).zip(values.iter_mut()) {
            let value = field.parse::<f64>().map_err(|_| CatalogError::Parse {
                column: name.clone(),
                row,
                value: field.to_string(),
            })?;
            column.push(value);
        }
    }

    let mut catalog = Catalog::new();
    for (name, column) in headers.into_iter().zip(values) {
        catalog.insert(name, Column::from_f64(Array1::from(column)))?;
    }
    Ok(catalog)
}

fn format_value(data: &ColumnData, row: usize) -> String {
    match data {
        ColumnData::Float64(arr) => arr[row].to_string(),
        ColumnData::Float32(arr) => arr[row].to_string(),
    }
}

pub(super) fn write<W: Write>(catalog: &Catalog, writer: W) -> Result<(), CatalogError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(catalog.column_names())?;

    for row in 0..catalog.len() {
        wtr.write_record(catalog.iter().map(|(_, column)| format_value(&column.data, row)))?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}
