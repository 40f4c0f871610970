use std::fmt;
use std::sync::Arc;

/// Width of a TERYT powiat code. Spreadsheets routinely drop the leading
/// zeros, so every join key is padded back to this width before any merge.
pub const CODE_WIDTH: usize = 4;

/// Stable join key for one powiat.
/// Keeps the normalized code text (with leading zeros) behind a cheap handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionCode(Arc<str>);

impl RegionCode {
    /// Build a code from raw spreadsheet or shapefile text, normalizing it.
    pub fn new(raw: &str) -> Self {
        Self(Arc::from(Self::normalize(raw).as_str()))
    }

    /// Zero-pad a raw code to `CODE_WIDTH` characters. Codes already at or
    /// above the target width pass through unchanged, so the operation is
    /// idempotent: `normalize(normalize(x)) == normalize(x)`.
    pub fn normalize(raw: &str) -> String {
        let raw = raw.trim();
        if raw.len() >= CODE_WIDTH {
            raw.to_string()
        } else {
            format!("{:0>width$}", raw, width = CODE_WIDTH)
        }
    }

    #[inline] pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_fixed_width() {
        assert_eq!(RegionCode::normalize("12"), "0012");
        assert_eq!(RegionCode::normalize("345"), "0345");
        assert_eq!(RegionCode::normalize("6789"), "6789");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["1", "12", "345", "6789", "12345"] {
            let once = RegionCode::normalize(raw);
            assert_eq!(RegionCode::normalize(&once), once);
            assert!(once.len() >= CODE_WIDTH);
        }
    }

    #[test]
    fn trims_whitespace_before_padding() {
        assert_eq!(RegionCode::normalize(" 12 "), "0012");
    }

    #[test]
    fn codes_compare_after_normalization() {
        assert_eq!(RegionCode::new("12"), RegionCode::new("0012"));
    }
}
