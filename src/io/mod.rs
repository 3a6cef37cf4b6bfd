//! Reading and writing shapefile datasets.
//!
//! A shapefile is a set of sibling files forming one logical dataset; all
//! entry points take the path of the `.shp` member and resolve the rest.

mod metadata;
mod reader;
mod writer;

pub use metadata::{read_crs, read_schema};
pub use reader::read_shapefile;
pub use writer::write_shapefile;

use std::path::{Path, PathBuf};

use crate::Error;

/// Resolve a sibling member of the dataset, erroring when it is missing.
pub(crate) fn dataset_member(path: &Path, extension: &str) -> Result<PathBuf, Error> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    let member = path.with_extension(extension);
    if !member.exists() {
        return Err(Error::FileNotFound(member));
    }
    Ok(member)
}
