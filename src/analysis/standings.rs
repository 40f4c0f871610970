use anyhow::{anyhow, bail, Result};
use polars::prelude::*;

use crate::rank;
use crate::table::CODE_COLUMN;
use crate::types::Placement;

/// Accumulated placement results, keyed by region code.
///
/// Created by the winner computation and extended by the second/third-place
/// computations within one session. Placement-dependent analyses declare
/// their required column through [`Standings::placement_table`], which fails
/// naming the missing prior step instead of silently proceeding. A failed
/// computation never touches columns already present.
#[derive(Debug, Clone)]
pub struct Standings {
    data: DataFrame,
}

impl Standings {
    /// Unwrap the session standings, or fail naming the step that creates
    /// them. Every placement-dependent analysis goes through this check.
    pub fn require<S>(standings: Option<S>) -> Result<S> {
        standings.ok_or_else(|| {
            anyhow!("no standings computed yet; run the winner computation (winner-map) first")
        })
    }

    /// Compute the winning party per region from the support table.
    pub fn from_support(support: &DataFrame) -> Result<Self> {
        let winners = rank::placement_column(support, Placement::First)?;
        let data = DataFrame::new(vec![support.column(CODE_COLUMN)?.clone(), winners])?;
        Ok(Self { data })
    }

    /// Compute and append one placement column; a column already present is
    /// left untouched.
    pub fn compute(&mut self, support: &DataFrame, place: Placement) -> Result<()> {
        if self.has(place) {
            return Ok(());
        }
        let column = rank::placement_column(support, place)?;
        self.data.with_column(column)?;
        Ok(())
    }

    #[inline]
    pub fn has(&self, place: Placement) -> bool {
        self.data.column(place.column()).is_ok()
    }

    /// Two-column table (`region_code`, placement) for joining onto the
    /// region layer. Errors name the analysis that must run first.
    pub fn placement_table(&self, place: Placement) -> Result<DataFrame> {
        if !self.has(place) {
            bail!(
                "standings have no {:?} column yet; run the {} first",
                place.column(),
                place.prerequisite()
            );
        }
        Ok(self.data.select([CODE_COLUMN, place.column()])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn support() -> DataFrame {
        DataFrame::new(vec![
            Column::new(CODE_COLUMN.into(), vec!["0001", "0002"]),
            Column::new("trzecia_droga".into(), vec![Some(14.5), Some(9.0)]),
            Column::new("nowa_lewica".into(), vec![Some(20.0), None]),
            Column::new("pis".into(), vec![Some(25.0), Some(40.0)]),
            Column::new("konfederacja".into(), vec![Some(10.0), None]),
            Column::new("ko".into(), vec![Some(30.5), Some(35.0)]),
        ])
        .unwrap()
    }

    #[test]
    fn winner_is_computed_on_creation() {
        let standings = Standings::from_support(&support()).unwrap();
        let table = standings.placement_table(Placement::First).unwrap();
        let winners: Vec<Option<&str>> =
            table.column("winner").unwrap().str().unwrap().into_iter().collect();
        assert_eq!(winners, vec![Some("ko"), Some("pis")]);
    }

    #[test]
    fn placement_before_its_computation_names_the_prerequisite() {
        let standings = Standings::from_support(&support()).unwrap();
        let err = standings.placement_table(Placement::Third).unwrap_err().to_string();
        assert!(err.contains("third-place computation"), "{err}");
    }

    #[test]
    fn later_computations_extend_the_same_standings() {
        let support = support();
        let mut standings = Standings::from_support(&support).unwrap();
        standings.compute(&support, Placement::Second).unwrap();
        standings.compute(&support, Placement::Third).unwrap();

        let seconds = standings.placement_table(Placement::Second).unwrap();
        let seconds: Vec<Option<&str>> =
            seconds.column("second").unwrap().str().unwrap().into_iter().collect();
        assert_eq!(seconds, vec![Some("pis"), Some("ko")]);

        let thirds = standings.placement_table(Placement::Third).unwrap();
        let thirds: Vec<Option<&str>> =
            thirds.column("third").unwrap().str().unwrap().into_iter().collect();
        // Region 0002 has only three non-missing shares; trzecia droga is third.
        assert_eq!(thirds, vec![Some("nowa lewica"), Some("trzecia droga")]);
    }

    #[test]
    fn absent_standings_error_names_the_winner_computation() {
        let err = Standings::require(None::<&Standings>).unwrap_err().to_string();
        assert!(err.contains("winner computation"), "{err}");
    }

    #[test]
    fn recompute_is_a_no_op() {
        let support = support();
        let mut standings = Standings::from_support(&support).unwrap();
        standings.compute(&support, Placement::First).unwrap();
        assert!(standings.has(Placement::First));
    }
}
