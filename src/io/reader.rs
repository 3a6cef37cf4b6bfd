//! Shapefile to graph conversion

use std::path::Path;

use dbase::FieldValue;
use geo::{LineString, Point};
use hashbrown::HashMap;
use log::{debug, info, warn};
use petgraph::graph::NodeIndex;
use shapefile::Shape;

use crate::model::{Attributes, NetworkEdge, NetworkGraph, NetworkNode, NodeKey, PositionTable};
use crate::{Error, io::dataset_member};

/// Read a point or polyline shapefile into a graph and a position table.
///
/// Point features become one node each, carrying the feature's attribute
/// record. Polyline features become one node per vertex and one edge per
/// consecutive vertex pair, the feature attributes attached to every
/// segment edge. Node creation is idempotent on the coordinate key, so
/// line features sharing an endpoint merge into a single node.
///
/// # Errors
///
/// Returns an error if a dataset member is missing, the dataset cannot be
/// parsed, or it contains a geometry other than point or polyline. No
/// partial graph is returned on failure.
pub fn read_shapefile(path: impl AsRef<Path>) -> Result<(NetworkGraph, PositionTable), Error> {
    let path = path.as_ref();
    dataset_member(path, "dbf")?;

    let mut reader =
        shapefile::Reader::from_path(path).map_err(|e| Error::FormatError(e.to_string()))?;

    let mut assembler = GraphAssembler::default();
    let mut features = 0usize;

    for pair in reader.iter_shapes_and_records() {
        let (shape, record) = pair.map_err(|e| Error::FormatError(e.to_string()))?;
        let attributes = attributes_from_record(record);

        match shape {
            Shape::Point(point) => {
                assembler.node_for(Point::new(point.x, point.y), attributes);
            }
            Shape::Polyline(line) => {
                for part in line.parts() {
                    assembler.add_segments(part, &attributes);
                }
            }
            Shape::NullShape => {
                warn!("Skipping null shape in {}", path.display());
            }
            other => {
                return Err(Error::UnsupportedGeometry(other.shapetype().to_string()));
            }
        }
        features += 1;
    }

    let (graph, positions) = assembler.finish();
    info!(
        "Loaded {features} features from {}: {} nodes, {} edges",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok((graph, positions))
}

/// Incrementally builds the graph while deduplicating nodes by key.
#[derive(Default)]
struct GraphAssembler {
    graph: NetworkGraph,
    positions: PositionTable,
    index: HashMap<NodeKey, NodeIndex>,
}

impl GraphAssembler {
    /// Create or reuse the node for a coordinate. First reference wins:
    /// re-encountering a key keeps the existing attributes.
    fn node_for(&mut self, point: Point<f64>, attributes: Attributes) -> NodeIndex {
        let key = NodeKey::for_point(point);
        if let Some(&index) = self.index.get(&key) {
            debug!("Reusing node {key}");
            return index;
        }
        let index = self.graph.add_node(NetworkNode {
            key: key.clone(),
            geometry: point,
            attributes,
        });
        self.positions.insert(key.clone(), point);
        self.index.insert(key, index);
        index
    }

    /// Add one edge per consecutive vertex pair of a polyline part.
    /// Vertex nodes carry no attributes of their own; the feature's
    /// attributes live on the segment edges.
    fn add_segments(&mut self, part: &[shapefile::Point], attributes: &Attributes) {
        let vertices: Vec<NodeIndex> = part
            .iter()
            .map(|p| self.node_for(Point::new(p.x, p.y), Attributes::new()))
            .collect();

        for pair in vertices.windows(2) {
            let geometry = LineString::from(vec![
                self.graph[pair[0]].geometry.x_y(),
                self.graph[pair[1]].geometry.x_y(),
            ]);
            self.graph.add_edge(
                pair[0],
                pair[1],
                NetworkEdge {
                    geometry,
                    attributes: attributes.clone(),
                },
            );
        }
    }

    fn finish(self) -> (NetworkGraph, PositionTable) {
        (self.graph, self.positions)
    }
}

/// Convert a dbase record into an attribute map. Null fields are dropped;
/// date values are rendered as ISO strings.
fn attributes_from_record(record: dbase::Record) -> Attributes {
    record
        .into_iter()
        .filter_map(|(name, value)| {
            let value = match value {
                FieldValue::Character(Some(s)) | FieldValue::Memo(s) => s.into(),
                FieldValue::Numeric(Some(v))
                | FieldValue::Double(v)
                | FieldValue::Currency(v) => v.into(),
                FieldValue::Float(Some(v)) => f64::from(v).into(),
                FieldValue::Integer(v) => i64::from(v).into(),
                FieldValue::Logical(Some(v)) => v.into(),
                FieldValue::Date(Some(d)) => {
                    format!("{:04}-{:02}-{:02}", d.year(), d.month(), d.day()).into()
                }
                FieldValue::DateTime(dt) => {
                    let d = dt.date();
                    format!("{:04}-{:02}-{:02}", d.year(), d.month(), d.day()).into()
                }
                // nulls
                FieldValue::Character(None)
                | FieldValue::Numeric(None)
                | FieldValue::Float(None)
                | FieldValue::Logical(None)
                | FieldValue::Date(None) => return None,
            };
            Some((name, value))
        })
        .collect()
}
