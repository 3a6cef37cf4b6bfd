//! Schema and CRS pass-through accessors

use std::fs;
use std::path::Path;

use log::warn;

use crate::model::{Crs, Schema};
use crate::{Error, io::dataset_member};

/// Read the attribute schema of a dataset, as reported by its `.dbf`
/// member. The result can be handed to [`crate::write_shapefile`] to
/// reproduce the source layout.
///
/// # Errors
///
/// Fails with [`Error::FileNotFound`] or [`Error::FormatError`] under the
/// same conditions as [`crate::read_shapefile`].
pub fn read_schema(path: impl AsRef<Path>) -> Result<Schema, Error> {
    let dbf = dataset_member(path.as_ref(), "dbf")?;
    let reader =
        dbase::Reader::from_path(&dbf).map_err(|e| Error::FormatError(e.to_string()))?;
    Ok(Schema::from_dbf_fields(reader.fields()))
}

/// Read the coordinate reference system of a dataset from its `.prj`
/// sidecar. Datasets without one fall back to WGS 84.
///
/// # Errors
///
/// Fails with [`Error::FileNotFound`] when the dataset is missing and
/// [`Error::InvalidCrs`] when the sidecar is empty.
pub fn read_crs(path: impl AsRef<Path>) -> Result<Crs, Error> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let prj = path.with_extension("prj");
    if !prj.exists() {
        warn!(
            "{} carries no .prj sidecar, assuming WGS 84",
            path.display()
        );
        return Ok(Crs::wgs84());
    }
    let wkt = fs::read_to_string(&prj)?;
    Crs::from_wkt(wkt.trim())
}
