use std::path::Path;

use anyhow::{ensure, Context, Result};
use log::info;
use polars::prelude::*;

use crate::types::{Party, RegionCode};

use super::{coerce_numeric, code_cell, read_first_sheet, CODE_COLUMN};

/// Load the per-powiat vote-share spreadsheet into a DataFrame with a
/// normalized `region_code` column and one f64 column per party.
///
/// Column 0 holds the powiat code; the party shares sit at the fixed offsets
/// declared on `Party`. The first row is the header. Rows without a code
/// (summary and footer rows) are skipped; unparsable share cells load as
/// null and classify downstream as "no data".
pub(crate) fn read_support_table(path: &Path) -> Result<DataFrame> {
    let range = read_first_sheet(path)?;

    let width = range.width();
    let required = Party::ALL.iter().map(|p| p.sheet_column()).max().unwrap_or(0) + 1;
    ensure!(
        width >= required,
        "support spreadsheet {} has {} columns, expected at least {}",
        path.display(),
        width,
        required
    );

    let mut codes: Vec<RegionCode> = Vec::new();
    let mut shares: Vec<Vec<Option<f64>>> = vec![Vec::new(); Party::ALL.len()];

    for row in range.rows().skip(1) {
        let Some(code) = row.first().and_then(code_cell) else { continue };
        codes.push(RegionCode::new(&code));
        for (party, column) in Party::ALL.iter().zip(shares.iter_mut()) {
            column.push(row.get(party.sheet_column()).and_then(coerce_numeric));
        }
    }
    ensure!(
        !codes.is_empty(),
        "support spreadsheet {} contains no data rows",
        path.display()
    );
    info!("loaded {} powiat vote-share rows from {}", codes.len(), path.display());

    let mut columns = vec![Column::new(
        CODE_COLUMN.into(),
        codes.iter().map(RegionCode::as_str).collect::<Vec<_>>(),
    )];
    for (party, column) in Party::ALL.iter().zip(shares) {
        columns.push(Column::new(party.column().into(), column));
    }
    DataFrame::new(columns)
        .with_context(|| format!("failed to assemble support table from {}", path.display()))
}
