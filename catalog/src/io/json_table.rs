//! Self-describing JSON tables.
//!
//! Layout: `{"columns": [{"name", "dtype", "unit", "description", "data"}]}`.
//! JSON has no representation for NaN or infinities, so non-finite values are
//! written as `null` and read back as NaN.

use std::io::{Read, Write};

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::{Catalog, CatalogError, Column, ColumnData};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Dtype {
    Float32,
    Float64,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonColumn {
    name: String,
    dtype: Dtype,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    data: Vec<Option<f64>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonTable {
    columns: Vec<JsonColumn>,
}

fn finite_or_none(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

impl From<(&str, &Column)> for JsonColumn {
    fn from((name, column): (&str, &Column)) -> Self {
        let (dtype, data) = match &column.data {
            ColumnData::Float64(arr) => (
                Dtype::Float64,
                arr.iter().map(|&v| finite_or_none(v)).collect(),
            ),
            ColumnData::Float32(arr) => (
                Dtype::Float32,
                arr.iter().map(|&v| finite_or_none(f64::from(v))).collect(),
            ),
        };
        JsonColumn {
            name: name.to_string(),
            dtype,
            unit: column.unit.clone(),
            description: column.description.clone(),
            data,
        }
    }
}

impl From<JsonColumn> for Column {
    fn from(json: JsonColumn) -> Self {
        let values = json.data.into_iter().map(|v| v.unwrap_or(f64::NAN));
        let data = match json.dtype {
            Dtype::Float64 => ColumnData::Float64(values.collect::<Array1<f64>>()),
            Dtype::Float32 => {
                ColumnData::Float32(values.map(|v| v as f32).collect::<Array1<f32>>())
            }
        };
        Column {
            data,
            unit: json.unit,
            description: json.description,
        }
    }
}

pub(super) fn read<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
    let table: JsonTable = serde_json::from_reader(reader)?;

    let mut catalog = Catalog::new();
    for json_column in table.columns {
        let name = json_column.name.clone();
        catalog.insert(name, Column::from(json_column))?;
    }
    Ok(catalog)
}

pub(super) fn write<W: Write>(catalog: &Catalog, writer: W) -> Result<(), CatalogError> {
    let table = JsonTable {
        columns: catalog.iter().map(JsonColumn::from).collect(),
    };
    serde_json::to_writer(writer, &table)?;
    Ok(())
}
