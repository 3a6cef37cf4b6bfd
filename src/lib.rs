//! Conversion between ESRI shapefiles and graph structures.
//!
//! Point and polyline shapefiles are read into a [`petgraph`] graph in which
//! every node is identified by the canonical rendering of its coordinates.
//! Points become nodes carrying the feature's attribute record; polylines
//! become one node per vertex and one edge per consecutive vertex pair, so
//! line features sharing an endpoint merge into a single graph vertex. The
//! inverse direction serializes a graph back into a shapefile given a field
//! schema and a coordinate reference system.
//!
//! ```no_run
//! use shapegraph::prelude::*;
//!
//! # fn main() -> Result<(), Error> {
//! let (graph, _positions) = read_shapefile("streets.shp")?;
//!
//! let schema = read_schema("streets.shp")?;
//! let crs = read_crs("streets.shp")?;
//! write_shapefile("streets_out.shp", &graph, &schema, &crs)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod io;
pub mod model;
pub mod prelude;

pub use error::Error;
pub use io::{read_crs, read_schema, read_shapefile, write_shapefile};
pub use model::{
    AttrValue, Attributes, Crs, FieldDescriptor, FieldKind, NetworkEdge, NetworkGraph, NetworkNode,
    NodeKey, PositionTable, Schema,
};
