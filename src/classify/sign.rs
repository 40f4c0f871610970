use serde::Serialize;

/// Sign classification of a natural-increase rate. Missing takes precedence
/// over everything: an absent value is never "zero".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IncreaseSign {
    Positive,
    Negative,
    Zero,
    Missing,
}

impl IncreaseSign {
    pub fn classify(value: Option<f64>) -> Self {
        match value {
            None => IncreaseSign::Missing,
            Some(v) if v.is_nan() => IncreaseSign::Missing,
            Some(v) if v > 0.0 => IncreaseSign::Positive,
            Some(v) if v < 0.0 => IncreaseSign::Negative,
            Some(_) => IncreaseSign::Zero,
        }
    }

    /// Legend label (Polish, matching the published maps).
    pub fn label(&self) -> &'static str {
        match self {
            IncreaseSign::Positive => "dodatni",
            IncreaseSign::Negative => "ujemny",
            IncreaseSign::Zero => "zerowy",
            IncreaseSign::Missing => "brak danych",
        }
    }

    pub const ALL: [IncreaseSign; 4] = [
        IncreaseSign::Positive,
        IncreaseSign::Negative,
        IncreaseSign::Zero,
        IncreaseSign::Missing,
    ];
}
