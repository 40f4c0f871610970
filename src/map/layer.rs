use anyhow::{ensure, Context, Result};
use geo::MultiPolygon;
use polars::prelude::*;

use crate::table::CODE_COLUMN;

/// Powiat boundary geometry plus its attribute table.
///
/// `data` always carries an `idx` row index, the normalized `region_code`
/// join key, and the powiat name when the shapefile provides one. Geometry
/// row i corresponds to attribute row `idx == i`; every statistic join goes
/// through [`RegionLayer::join_column`], which restores that order.
#[derive(Debug, Clone)]
pub struct RegionLayer {
    pub(crate) data: DataFrame,
    pub(crate) geoms: Vec<MultiPolygon<f64>>,
}

impl RegionLayer {
    #[inline] pub fn len(&self) -> usize { self.geoms.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.geoms.is_empty() }

    /// Left-join `table` onto this layer's codes and return `column` aligned
    /// with the geometry order. Regions absent from `table` come back null;
    /// they still render, as "no data".
    pub(crate) fn join_column(&self, table: &DataFrame, column: &str) -> Result<Column> {
        let joined = self
            .data
            .left_join(table, [CODE_COLUMN], [CODE_COLUMN])
            .with_context(|| format!("failed to join column {:?} onto the region layer", column))?
            .sort(["idx"], SortMultipleOptions::default())?;
        ensure!(
            joined.height() == self.len(),
            "join produced {} rows for {} regions; duplicate region codes in {:?} table",
            joined.height(),
            self.len(),
            column
        );
        Ok(joined
            .column(column)
            .with_context(|| format!("joined table has no column {:?}", column))?
            .clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(offset: f64) -> MultiPolygon<f64> {
        geo::MultiPolygon(vec![geo::Polygon::new(
            geo::LineString::from(vec![
                (offset, 0.0),
                (offset + 1.0, 0.0),
                (offset + 1.0, 1.0),
                (offset, 1.0),
                (offset, 0.0),
            ]),
            vec![],
        )])
    }

    fn layer() -> RegionLayer {
        let data = DataFrame::new(vec![Column::new(
            CODE_COLUMN.into(),
            vec!["0201", "0202", "1465"],
        )])
        .unwrap()
        .with_row_index("idx".into(), None)
        .unwrap();
        RegionLayer {
            data,
            geoms: vec![square(0.0), square(2.0), square(4.0)],
        }
    }

    #[test]
    fn join_preserves_geometry_order_and_fills_gaps() {
        let layer = layer();
        // Table deliberately out of order and missing one region.
        let table = DataFrame::new(vec![
            Column::new(CODE_COLUMN.into(), vec!["1465", "0201"]),
            Column::new("rate".into(), vec![Some(1.5), Some(-2.0)]),
        ])
        .unwrap();

        let col = layer.join_column(&table, "rate").unwrap();
        let values: Vec<Option<f64>> = col.f64().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(-2.0), None, Some(1.5)]);
    }

    #[test]
    fn duplicate_codes_in_table_are_rejected() {
        let layer = layer();
        let table = DataFrame::new(vec![
            Column::new(CODE_COLUMN.into(), vec!["0201", "0201"]),
            Column::new("rate".into(), vec![1.0, 2.0]),
        ])
        .unwrap();
        assert!(layer.join_column(&table, "rate").is_err());
    }
}
