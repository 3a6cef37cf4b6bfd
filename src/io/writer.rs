//! Graph to shapefile serialization

use std::fs;
use std::path::Path;

use dbase::FieldValue;
use log::{info, warn};

use crate::model::{AttrValue, Attributes, Crs, FieldDescriptor, FieldKind, NetworkGraph, Schema};
use crate::Error;

/// Serialize a graph as shapefile records at `path`, together with a
/// `.prj` sidecar holding the CRS text.
///
/// A shapefile layer holds a single geometry type, so the layer kind is
/// decided by edge presence: a graph with edges is written as one polyline
/// record per edge, and isolated nodes are skipped with a warning; an
/// edgeless graph is written as one point record per node.
///
/// # Errors
///
/// Returns [`Error::SchemaMismatch`] when an attribute does not fit its
/// field, [`Error::InvalidCrs`] for an empty CRS, and [`Error::IoError`]
/// for write failures. The output is best effort on failure.
pub fn write_shapefile(
    path: impl AsRef<Path>,
    graph: &NetworkGraph,
    schema: &Schema,
    crs: &Crs,
) -> Result<(), Error> {
    let path = path.as_ref();
    if crs.wkt().trim().is_empty() {
        return Err(Error::InvalidCrs("projection text is empty".to_string()));
    }

    let builder = schema.writer_builder()?;
    let mut writer = shapefile::Writer::from_path(path, builder)
        .map_err(|e| Error::IoError(std::io::Error::other(e.to_string())))?;

    if graph.edge_count() > 0 {
        let isolated = graph
            .node_indices()
            .filter(|&n| graph.edges(n).next().is_none())
            .count();
        if isolated > 0 {
            warn!(
                "{isolated} isolated nodes have no edges and are not part of the line layer {}",
                path.display()
            );
        }

        for edge in graph.edge_references() {
            let points = edge
                .weight()
                .geometry
                .points()
                .map(|p| shapefile::Point::new(p.x(), p.y()))
                .collect();
            let record = record_for(schema, &edge.weight().attributes)?;
            writer
                .write_shape_and_record(&shapefile::Polyline::new(points), &record)
                .map_err(|e| Error::IoError(std::io::Error::other(e.to_string())))?;
        }
        info!(
            "Wrote {} line records to {}",
            graph.edge_count(),
            path.display()
        );
    } else {
        for node in graph.node_weights() {
            let shape = shapefile::Point::new(node.geometry.x(), node.geometry.y());
            let record = record_for(schema, &node.attributes)?;
            writer
                .write_shape_and_record(&shape, &record)
                .map_err(|e| Error::IoError(std::io::Error::other(e.to_string())))?;
        }
        info!(
            "Wrote {} point records to {}",
            graph.node_count(),
            path.display()
        );
    }

    drop(writer);
    fs::write(path.with_extension("prj"), crs.wkt())?;
    Ok(())
}

/// Build a dbase record for one feature. Schema fields missing from the
/// attribute map are written as nulls; attributes the schema does not
/// name are ignored.
fn record_for(schema: &Schema, attributes: &Attributes) -> Result<dbase::Record, Error> {
    let mut record = dbase::Record::default();
    for field in schema.fields() {
        let value = field_value(field, attributes.get(&field.name))?;
        record.insert(field.name.clone(), value);
    }
    Ok(record)
}

fn field_value(field: &FieldDescriptor, attr: Option<&AttrValue>) -> Result<FieldValue, Error> {
    let value = match (field.kind, attr) {
        (FieldKind::Character, Some(AttrValue::Str(s))) => FieldValue::Character(Some(s.clone())),
        (FieldKind::Character, None) => FieldValue::Character(None),
        (FieldKind::Numeric, Some(AttrValue::Float(v))) => FieldValue::Numeric(Some(*v)),
        (FieldKind::Numeric, Some(AttrValue::Int(v))) => FieldValue::Numeric(Some(*v as f64)),
        (FieldKind::Numeric, None) => FieldValue::Numeric(None),
        (FieldKind::Float, Some(AttrValue::Float(v))) => FieldValue::Float(Some(*v as f32)),
        (FieldKind::Float, Some(AttrValue::Int(v))) => FieldValue::Float(Some(*v as f32)),
        (FieldKind::Float, None) => FieldValue::Float(None),
        (FieldKind::Integer, Some(AttrValue::Int(v))) => {
            FieldValue::Integer(i32::try_from(*v).map_err(|_| {
                Error::SchemaMismatch(format!(
                    "value {v} does not fit integer field '{}'",
                    field.name
                ))
            })?)
        }
        // dbf integer fields have no null encoding
        (FieldKind::Integer, None) => FieldValue::Integer(0),
        (FieldKind::Logical, Some(AttrValue::Bool(v))) => FieldValue::Logical(Some(*v)),
        (FieldKind::Logical, None) => FieldValue::Logical(None),
        (kind, Some(value)) => {
            return Err(Error::SchemaMismatch(format!(
                "attribute '{}' holds {value:?}, which does not fit a {kind:?} field",
                field.name
            )));
        }
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(kind: FieldKind) -> FieldDescriptor {
        FieldDescriptor {
            name: "field".to_string(),
            kind,
        }
    }

    #[test]
    fn integers_widen_into_numeric_fields() {
        let value = field_value(&field(FieldKind::Numeric), Some(&AttrValue::Int(7))).unwrap();
        assert!(matches!(value, FieldValue::Numeric(Some(v)) if v == 7.0));
    }

    #[test]
    fn mismatched_scalar_kind_is_rejected() {
        let result = field_value(&field(FieldKind::Logical), Some(&AttrValue::Int(1)));
        assert!(matches!(result, Err(Error::SchemaMismatch(_))));
    }

    #[test]
    fn oversized_integer_is_rejected() {
        let result = field_value(&field(FieldKind::Integer), Some(&AttrValue::Int(i64::MAX)));
        assert!(matches!(result, Err(Error::SchemaMismatch(_))));
    }

    #[test]
    fn missing_attribute_becomes_null() {
        let value = field_value(&field(FieldKind::Character), None).unwrap();
        assert!(matches!(value, FieldValue::Character(None)));
    }
}
