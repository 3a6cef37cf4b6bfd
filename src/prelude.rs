//! Convenience re-exports for the common conversion workflow.

pub use crate::error::Error;
pub use crate::io::{read_crs, read_schema, read_shapefile, write_shapefile};
pub use crate::model::{
    AttrValue, Attributes, Crs, FieldDescriptor, FieldKind, NetworkEdge, NetworkGraph, NetworkNode,
    NodeKey, PositionTable, Schema,
};
