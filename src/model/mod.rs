//! Data model for converted shapefile datasets.

pub mod attributes;
pub mod graph;
pub mod schema;

pub use attributes::{AttrValue, Attributes};
pub use graph::{KEY_PRECISION, NetworkEdge, NetworkGraph, NetworkNode, NodeKey, PositionTable};
pub use schema::{Crs, FieldDescriptor, FieldKind, Schema};
