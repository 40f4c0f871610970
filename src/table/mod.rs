mod increase;
mod spreadsheet;
mod support;

pub(crate) use increase::{read_increase_table, INCREASE_COLUMN};
pub(crate) use spreadsheet::{coerce_numeric, code_cell, read_first_sheet};
pub(crate) use support::read_support_table;

/// Join-key column shared by every table in the pipeline.
pub(crate) const CODE_COLUMN: &str = "region_code";
