use std::path::Path;

use anyhow::{bail, ensure, Context, Result};
use log::info;
use polars::prelude::*;
use shapefile::dbase::{FieldValue, Record};
use shapefile::Shape;

use crate::table::CODE_COLUMN;
use crate::types::RegionCode;

use super::geom::shp_to_geo;
use super::layer::RegionLayer;

/// Attribute field carrying the powiat TERYT code in the boundary shapefile.
const CODE_FIELD: &str = "JPT_KOD_JE";
/// Attribute field carrying the powiat name, when present.
const NAME_FIELD: &str = "JPT_NAZWA_";

impl RegionLayer {
    /// Load powiat boundaries from a `.shp` file, keyed by the normalized
    /// `JPT_KOD_JE` code.
    pub fn from_shapefile(path: &Path) -> Result<Self> {
        let mut reader = shapefile::Reader::from_path(path)
            .with_context(|| format!("failed to open shapefile: {}", path.display()))?;

        let mut codes: Vec<RegionCode> = Vec::new();
        let mut names: Vec<Option<String>> = Vec::new();
        let mut geoms = Vec::with_capacity(reader.shape_count()?);

        for result in reader.iter_shapes_and_records() {
            let (shape, record) = result.context("error reading shape+record")?;
            let polygon = match shape {
                Shape::Polygon(p) => p,
                other => bail!(
                    "unexpected geometry in {}: {} (expected polygons)",
                    path.display(),
                    other.shapetype()
                ),
            };
            codes.push(code_field(&record, path)?);
            names.push(name_field(&record));
            geoms.push(shp_to_geo(&polygon));
        }
        ensure!(!geoms.is_empty(), "shapefile {} contains no shapes", path.display());
        info!("loaded {} powiat boundaries from {}", geoms.len(), path.display());

        let data = DataFrame::new(vec![
            Column::new(
                CODE_COLUMN.into(),
                codes.iter().map(RegionCode::as_str).collect::<Vec<_>>(),
            ),
            Column::new("name".into(), names),
        ])?
        .with_row_index("idx".into(), None)?;

        Ok(Self { data, geoms })
    }
}

/// Extract and normalize the region code from a dbf record. The field is
/// nominally text, but tools that round-trip the dbf sometimes retype it as
/// numeric, dropping the leading zeros either way.
fn code_field(record: &Record, path: &Path) -> Result<RegionCode> {
    match record.get(CODE_FIELD) {
        Some(FieldValue::Character(Some(s))) => Ok(RegionCode::new(s)),
        Some(FieldValue::Numeric(Some(n))) => Ok(RegionCode::new(&format!("{}", *n as i64))),
        _ => bail!(
            "missing or invalid {} field in {}",
            CODE_FIELD,
            path.display()
        ),
    }
}

fn name_field(record: &Record) -> Option<String> {
    match record.get(NAME_FIELD) {
        Some(FieldValue::Character(Some(s))) => Some(s.trim().to_string()),
        _ => None,
    }
}
