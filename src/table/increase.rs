use std::path::Path;

use anyhow::{ensure, Context, Result};
use log::info;
use polars::prelude::*;

use crate::types::RegionCode;

use super::{coerce_numeric, code_cell, read_first_sheet, CODE_COLUMN};

/// Column holding the natural-increase rate per 1000 residents.
pub(crate) const INCREASE_COLUMN: &str = "natural_increase";

/// Sheet column of the powiat code in the GUS demographic table.
const CODE_OFFSET: usize = 1;
/// Sheet column of the natural-increase rate.
const RATE_OFFSET: usize = 18;
/// Header row plus nine preamble rows precede the first powiat row.
const SKIP_ROWS: usize = 10;

/// Load the GUS demographic spreadsheet into a two-column DataFrame:
/// normalized `region_code` and f64 `natural_increase` (null when the cell
/// is empty or unparsable).
pub(crate) fn read_increase_table(path: &Path) -> Result<DataFrame> {
    let range = read_first_sheet(path)?;
    ensure!(
        range.width() > RATE_OFFSET,
        "demographic spreadsheet {} has {} columns, expected at least {}",
        path.display(),
        range.width(),
        RATE_OFFSET + 1
    );

    let mut codes: Vec<RegionCode> = Vec::new();
    let mut rates: Vec<Option<f64>> = Vec::new();

    for row in range.rows().skip(SKIP_ROWS) {
        let Some(code) = row.get(CODE_OFFSET).and_then(code_cell) else { continue };
        codes.push(RegionCode::new(&code));
        rates.push(row.get(RATE_OFFSET).and_then(coerce_numeric));
    }
    ensure!(
        !codes.is_empty(),
        "demographic spreadsheet {} contains no data rows",
        path.display()
    );
    info!("loaded {} natural-increase rows from {}", codes.len(), path.display());

    DataFrame::new(vec![
        Column::new(
            CODE_COLUMN.into(),
            codes.iter().map(RegionCode::as_str).collect::<Vec<_>>(),
        ),
        Column::new(INCREASE_COLUMN.into(), rates),
    ])
    .with_context(|| format!("failed to assemble increase table from {}", path.display()))
}
