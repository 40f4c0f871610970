use serde::Serialize;

use crate::classify::IncreaseSign;
use crate::types::{Party, Placement};

/// Natural-increase statistics over the regions where one party holds one
/// placement. Returned to the caller alongside the rendered map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementReport {
    pub party: Party,
    pub placement: Placement,
    /// Regions considered: holding the placement, with increase data.
    pub regions: usize,
    /// Of those, regions with a strictly positive increase.
    pub positive: usize,
    /// `positive` as a percentage of `regions`; exactly 0.0 when no region
    /// was considered, never NaN.
    pub percent: f64,
}

impl PlacementReport {
    /// Tally sign classifications for the regions the party holds at the
    /// placement. "No data" regions are excluded from the denominator.
    pub(crate) fn tally(
        party: Party,
        placement: Placement,
        signs: impl IntoIterator<Item = IncreaseSign>,
    ) -> Self {
        let mut regions = 0usize;
        let mut positive = 0usize;
        for sign in signs {
            match sign {
                IncreaseSign::Missing => {}
                IncreaseSign::Positive => {
                    regions += 1;
                    positive += 1;
                }
                IncreaseSign::Negative | IncreaseSign::Zero => regions += 1,
            }
        }
        let percent = if regions > 0 {
            positive as f64 / regions as f64 * 100.0
        } else {
            0.0
        };
        Self { party, placement, regions, positive, percent }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_zero_for_empty_selection_not_nan() {
        let report = PlacementReport::tally(Party::Ko, Placement::Second, []);
        assert_eq!(report.regions, 0);
        assert_eq!(report.positive, 0);
        assert_eq!(report.percent, 0.0);
    }

    #[test]
    fn missing_regions_are_excluded_from_the_denominator() {
        let report = PlacementReport::tally(
            Party::Pis,
            Placement::First,
            [
                IncreaseSign::Positive,
                IncreaseSign::Negative,
                IncreaseSign::Missing,
                IncreaseSign::Zero,
                IncreaseSign::Positive,
            ],
        );
        assert_eq!(report.regions, 4);
        assert_eq!(report.positive, 2);
        assert_eq!(report.percent, 50.0);
    }

    #[test]
    fn percent_stays_within_bounds() {
        let all_positive = PlacementReport::tally(
            Party::Ko,
            Placement::Third,
            [IncreaseSign::Positive; 7],
        );
        assert_eq!(all_positive.percent, 100.0);

        let none_positive = PlacementReport::tally(
            Party::Ko,
            Placement::Third,
            [IncreaseSign::Negative; 3],
        );
        assert_eq!(none_positive.percent, 0.0);
    }
}
