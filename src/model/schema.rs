//! Field schema and coordinate reference system descriptors

use std::fmt;

use dbase::{FieldInfo, FieldName, FieldType, TableWriterBuilder};

use crate::Error;

/// Well-known text for WGS 84 (EPSG:4326), the fallback when a dataset
/// carries no `.prj` sidecar.
pub const WGS84_WKT: &str = "GEOGCS[\"WGS 84\",DATUM[\"WGS_1984\",\
SPHEROID[\"WGS 84\",6378137,298.257223563]],PRIMEM[\"Greenwich\",0],\
UNIT[\"degree\",0.0174532925199433]]";

/// Kind of a dbase attribute field.
///
/// Date, datetime and memo fields of a source table are folded into
/// `Character` since attribute values are restricted to scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Character,
    Numeric,
    Float,
    Integer,
    Logical,
}

/// A single named field of an attribute table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: FieldKind,
}

/// Ordered description of the attribute table backing a shapefile layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, builder style.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            kind,
        });
        self
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub(crate) fn from_dbf_fields(fields: &[FieldInfo]) -> Self {
        let fields = fields
            .iter()
            .map(|field| {
                let kind = match field.field_type() {
                    FieldType::Numeric | FieldType::Double | FieldType::Currency => {
                        FieldKind::Numeric
                    }
                    FieldType::Float => FieldKind::Float,
                    FieldType::Integer => FieldKind::Integer,
                    FieldType::Logical => FieldKind::Logical,
                    _ => FieldKind::Character,
                };
                FieldDescriptor {
                    name: field.name().to_string(),
                    kind,
                }
            })
            .collect();
        Self { fields }
    }

    /// Translate into the builder the vector-I/O layer writes records with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaMismatch`] for field names the dbf format
    /// cannot represent.
    pub(crate) fn writer_builder(&self) -> Result<TableWriterBuilder, Error> {
        let mut builder = TableWriterBuilder::new();
        for field in &self.fields {
            let name = FieldName::try_from(field.name.as_str()).map_err(|_| {
                Error::SchemaMismatch(format!("invalid dbf field name '{}'", field.name))
            })?;
            builder = match field.kind {
                FieldKind::Character => builder.add_character_field(name, 254),
                FieldKind::Numeric => builder.add_numeric_field(name, 20, 8),
                FieldKind::Float => builder.add_float_field(name, 20, 8),
                FieldKind::Integer => builder.add_integer_field(name),
                FieldKind::Logical => builder.add_logical_field(name),
            };
        }
        Ok(builder)
    }
}

/// Coordinate reference system, carried as the well-known text of the
/// `.prj` sidecar. The text is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crs {
    wkt: String,
}

impl Crs {
    /// # Errors
    ///
    /// Returns [`Error::InvalidCrs`] when the text is empty.
    pub fn from_wkt(wkt: impl Into<String>) -> Result<Self, Error> {
        let wkt = wkt.into();
        if wkt.trim().is_empty() {
            return Err(Error::InvalidCrs(
                "projection text is empty".to_string(),
            ));
        }
        Ok(Self { wkt })
    }

    pub fn wgs84() -> Self {
        Self {
            wkt: WGS84_WKT.to_string(),
        }
    }

    pub fn wkt(&self) -> &str {
        &self.wkt
    }
}

impl Default for Crs {
    fn default() -> Self {
        Self::wgs84()
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wkt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_projection_text_is_rejected() {
        assert!(matches!(Crs::from_wkt("   "), Err(Error::InvalidCrs(_))));
        assert!(Crs::from_wkt("EPSG:32651").is_ok());
    }

    #[test]
    fn schema_builder_keeps_field_order() {
        let schema = Schema::new()
            .with_field("name", FieldKind::Character)
            .with_field("id", FieldKind::Numeric);
        let names: Vec<_> = schema.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["name", "id"]);
    }

    #[test]
    fn overlong_field_name_is_a_schema_mismatch() {
        let schema = Schema::new().with_field("a_name_longer_than_dbf_allows", FieldKind::Numeric);
        assert!(matches!(
            schema.writer_builder(),
            Err(Error::SchemaMismatch(_))
        ));
    }
}
