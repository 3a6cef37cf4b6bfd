use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("malformed shapefile: {0}")]
    FormatError(String),
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometry(String),
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),
    #[error("invalid CRS: {0}")]
    InvalidCrs(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
