use std::path::Path;

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use log::debug;

/// Open a workbook (.xls or .xlsx, auto-detected) and return its first sheet.
pub(crate) fn read_first_sheet(path: &Path) -> Result<Range<Data>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("failed to open spreadsheet: {}", path.display()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow!("spreadsheet has no sheets: {}", path.display()))?
        .with_context(|| format!("failed to read first sheet of {}", path.display()))?;
    debug!(
        "read {}x{} cells from {}",
        range.height(),
        range.width(),
        path.display()
    );
    Ok(range)
}

/// Convert a cell that may use a comma decimal separator to a float.
/// Unparsable or empty cells become `None`, never an error.
pub(crate) fn coerce_numeric(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().replace(',', ".").parse().ok(),
        _ => None,
    }
}

/// Extract a raw region-code string from a cell. GUS exports sometimes store
/// codes as numbers, which strips the leading zeros; normalization happens
/// at the caller. Returns `None` for empty or non-code cells (header and
/// summary rows).
pub(crate) fn code_cell(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => {
            let s = s.trim();
            (!s.is_empty() && s.chars().all(|c| c.is_ascii_digit())).then(|| s.to_string())
        }
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) if f.fract() == 0.0 => Some(format!("{}", *f as i64)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_decimal_separator_parses() {
        assert_eq!(coerce_numeric(&Data::String("12,75".into())), Some(12.75));
        assert_eq!(coerce_numeric(&Data::String("12.75".into())), Some(12.75));
        assert_eq!(coerce_numeric(&Data::String(" -0,5 ".into())), Some(-0.5));
    }

    #[test]
    fn unparsable_cells_are_missing_not_fatal() {
        assert_eq!(coerce_numeric(&Data::String("b.d.".into())), None);
        assert_eq!(coerce_numeric(&Data::String("".into())), None);
        assert_eq!(coerce_numeric(&Data::Empty), None);
    }

    #[test]
    fn numeric_cells_pass_through() {
        assert_eq!(coerce_numeric(&Data::Float(31.2)), Some(31.2));
        assert_eq!(coerce_numeric(&Data::Int(17)), Some(17.0));
    }

    #[test]
    fn code_cells_survive_numeric_storage() {
        assert_eq!(code_cell(&Data::Int(201)), Some("201".to_string()));
        assert_eq!(code_cell(&Data::Float(201.0)), Some("201".to_string()));
        assert_eq!(code_cell(&Data::String("0201".into())), Some("0201".to_string()));
        assert_eq!(code_cell(&Data::String("Powiat bolesławiecki".into())), None);
        assert_eq!(code_cell(&Data::Empty), None);
    }
}
