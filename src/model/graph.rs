//! Graph components - nodes, edges, and the coordinate-key identity

use std::fmt;

use geo::{LineString, Point};
use hashbrown::HashMap;
use petgraph::graph::UnGraph;

use crate::model::Attributes;

/// Fractional digits kept when rendering a coordinate into a [`NodeKey`].
///
/// Nine digits of a decimal degree resolve to well under a millimeter, so
/// vertices that are meant to coincide collapse to the same key while raw
/// float formatting noise does not leak into node identity.
pub const KEY_PRECISION: usize = 9;

/// Canonical coordinate identity of a graph node.
///
/// Two features sharing the same coordinates map to the same key by exact
/// string equality; there is no epsilon tolerance beyond the fixed-precision
/// rendering itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(String);

impl NodeKey {
    pub fn for_point(point: Point<f64>) -> Self {
        Self(format!(
            "{:.*},{:.*}",
            KEY_PRECISION,
            point.x(),
            KEY_PRECISION,
            point.y()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the key back into coordinates, rounded to [`KEY_PRECISION`].
    pub fn to_point(&self) -> Option<Point<f64>> {
        let (x, y) = self.0.split_once(',')?;
        Some(Point::new(x.parse().ok()?, y.parse().ok()?))
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Graph node created from a point feature or a polyline vertex.
#[derive(Debug, Clone)]
pub struct NetworkNode {
    /// Canonical coordinate identity
    pub key: NodeKey,
    /// Node coordinates as read from the source geometry
    pub geometry: Point<f64>,
    /// Attribute record of the source feature; empty for line vertices
    pub attributes: Attributes,
}

/// Graph edge connecting two consecutive polyline vertices.
#[derive(Debug, Clone)]
pub struct NetworkEdge {
    /// The two endpoint coordinates, in feature order
    pub geometry: LineString<f64>,
    /// Attribute record of the source feature
    pub attributes: Attributes,
}

/// Undirected graph of coordinate-keyed nodes and segment edges.
pub type NetworkGraph = UnGraph<NetworkNode, NetworkEdge>;

/// Plotting positions, one entry per node, keyed like the node set.
pub type PositionTable = HashMap<NodeKey, Point<f64>>;
