use std::fmt;

use anyhow::bail;
use serde::Serialize;

/// A rank-order position in the five-party field of one powiat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    First,
    Second,
    Third,
}

impl Placement {
    /// Zero-based index into a descending ranking.
    #[inline] pub(crate) fn index(&self) -> usize { *self as usize }

    /// 1-based rank, as exposed on the CLI and in reports.
    pub fn rank(&self) -> u8 {
        match self {
            Placement::First => 1,
            Placement::Second => 2,
            Placement::Third => 3,
        }
    }

    /// Standings column this placement is stored in.
    pub(crate) fn column(&self) -> &'static str {
        match self {
            Placement::First => "winner",
            Placement::Second => "second",
            Placement::Third => "third",
        }
    }

    /// The analysis that must have run before this placement can be queried.
    pub(crate) fn prerequisite(&self) -> &'static str {
        match self {
            Placement::First => "winner computation (winner-map)",
            Placement::Second => "second-place computation (second-map)",
            Placement::Third => "third-place computation (third-map)",
        }
    }

    pub fn from_rank(rank: u8) -> anyhow::Result<Self> {
        match rank {
            1 => Ok(Placement::First),
            2 => Ok(Placement::Second),
            3 => Ok(Placement::Third),
            other => bail!("invalid placement rank: {}. Valid ranks: 1, 2, 3", other),
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_round_trips() {
        for rank in 1..=3 {
            assert_eq!(Placement::from_rank(rank).unwrap().rank(), rank);
        }
    }

    #[test]
    fn rejects_out_of_range_ranks() {
        for rank in [0, 4, 7] {
            let err = Placement::from_rank(rank).unwrap_err().to_string();
            assert!(err.contains("invalid placement rank"), "{err}");
        }
    }
}
