//! FITS tables stored as one 1-D image extension per column.
//!
//! Columns are written in table order, each as an image HDU named by
//! `EXTNAME` with `BITPIX` -32 or -64. The unit goes to `BUNIT` and the
//! description to `COLDESC`. On read every 1-D image becomes a column;
//! `BITPIX` -32 is kept in single precision, anything else is widened to
//! double precision.

use std::path::Path;

use fitsio::compat::fitsfile::FitsFile;
use fitsio::compat::hdu::FitsHdu;
use fitsio::compat::images::{ImageDescription, ImageType, ReadImage, WriteImage};
use ndarray::Array1;

use crate::{Catalog, CatalogError, Column, ColumnData};

const DESCRIPTION_KEY: &str = "COLDESC";

fn image_type(data: &ColumnData) -> ImageType {
    match data {
        ColumnData::Float64(_) => ImageType::Double,
        ColumnData::Float32(_) => ImageType::Float,
    }
}

fn write_data(data: &ColumnData, fptr: &mut FitsFile, hdu: &FitsHdu) -> Result<(), CatalogError> {
    match data {
        ColumnData::Float64(arr) => {
            let flat_data: Vec<f64> = arr.to_vec();
            f64::write_image(fptr, hdu, &flat_data)?;
        }
        ColumnData::Float32(arr) => {
            let flat_data: Vec<f32> = arr.to_vec();
            f32::write_image(fptr, hdu, &flat_data)?;
        }
    }
    Ok(())
}

pub(super) fn write(catalog: &Catalog, path: &Path) -> Result<(), CatalogError> {
    let mut fptr = FitsFile::create(path).overwrite().open()?;

    for (name, column) in catalog.iter() {
        let name = name.to_string();
        let image_description = ImageDescription {
            data_type: image_type(&column.data),
            dimensions: vec![column.len()],
        };

        let hdu = fptr.create_image(&name, &image_description)?;
        write_data(&column.data, &mut fptr, &hdu)?;
        hdu.write_key(&mut fptr, "EXTNAME", &name)?;
        if let Some(unit) = &column.unit {
            hdu.write_key(&mut fptr, "BUNIT", unit)?;
        }
        if let Some(description) = &column.description {
            hdu.write_key(&mut fptr, DESCRIPTION_KEY, description)?;
        }
    }

    Ok(())
}

pub(super) fn read(path: &Path) -> Result<Catalog, CatalogError> {
    let fptr = FitsFile::open(path)?;
    let mut catalog = Catalog::new();

    let mut hdu_idx: usize = 0;
    while let Ok(hdu) = fptr.hdu(hdu_idx) {
        let naxis = hdu.read_key::<i64>(&fptr, "NAXIS").unwrap_or(0);
        if naxis != 1 {
            // primary HDU or images that are not columns
            hdu_idx += 1;
            continue;
        }

        let name = match hdu.read_key::<String>(&fptr, "EXTNAME") {
            Ok(name) => name,
            Err(_) => format!("HDU_{hdu_idx}"),
        };
        let rows = hdu.read_key::<i64>(&fptr, "NAXIS1").unwrap_or(0) as usize;
        let bitpix = hdu.read_key::<i64>(&fptr, "BITPIX").unwrap_or(-64);

        let values = f64::read_image(&fptr, &hdu)?;
        if values.len() != rows {
            return Err(CatalogError::InvalidFits {
                column: name,
                reason: format!("NAXIS1 is {rows} but {} values were read", values.len()),
            });
        }

        let data = if bitpix == -32 {
            ColumnData::Float32(values.into_iter().map(|v| v as f32).collect())
        } else {
            ColumnData::Float64(Array1::from(values))
        };
        let column = Column {
            data,
            unit: hdu.read_key::<String>(&fptr, "BUNIT").ok(),
            description: hdu.read_key::<String>(&fptr, DESCRIPTION_KEY).ok(),
        };
        catalog.insert(name, column)?;

        hdu_idx += 1;
    }

    Ok(catalog)
}
