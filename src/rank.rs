//! Ranked selection over the five party vote-share columns.

use anyhow::Result;
use polars::prelude::*;

use crate::types::{Party, Placement};

/// Pick the party holding `place` in one powiat's row of shares.
///
/// Missing shares never place. Ties keep `Party` declaration order (the sort
/// is stable), so on equal shares the earlier-declared party takes the higher
/// placement. Fewer non-missing shares than the requested rank yields `None`
/// ("no 2nd/3rd place") rather than an error.
pub fn select_placement(shares: &[(Party, Option<f64>)], place: Placement) -> Option<Party> {
    let mut present: Vec<(Party, f64)> = shares
        .iter()
        .filter_map(|(party, share)| share.filter(|v| !v.is_nan()).map(|v| (*party, v)))
        .collect();
    present.sort_by(|a, b| b.1.total_cmp(&a.1));
    present.get(place.index()).map(|(party, _)| *party)
}

/// Compute one placement label per row of the support table, as a String
/// column named after the placement.
pub(crate) fn placement_column(support: &DataFrame, place: Placement) -> Result<Column> {
    let mut shares = Vec::with_capacity(Party::ALL.len());
    for party in Party::ALL {
        shares.push(support.column(party.column())?.f64()?);
    }

    let labels = (0..support.height())
        .map(|row| {
            let row_shares: Vec<(Party, Option<f64>)> = Party::ALL
                .iter()
                .zip(shares.iter())
                .map(|(party, column)| (*party, column.get(row)))
                .collect();
            select_placement(&row_shares, place).map(|party| party.name())
        })
        .collect::<StringChunked>();

    Ok(Column::from(labels.into_series().with_name(place.column().into())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: [Option<f64>; 5]) -> Vec<(Party, Option<f64>)> {
        Party::ALL.iter().copied().zip(values).collect()
    }

    // Party::ALL order: trzecia droga, nowa lewica, pis, konfederacja, ko.
    #[test]
    fn top_three_are_the_three_largest() {
        let shares = row([Some(14.5), Some(20.0), Some(25.0), Some(10.0), Some(30.5)]);
        assert_eq!(select_placement(&shares, Placement::First), Some(Party::Ko));
        assert_eq!(select_placement(&shares, Placement::Second), Some(Party::Pis));
        assert_eq!(select_placement(&shares, Placement::Third), Some(Party::NowaLewica));
    }

    #[test]
    fn placements_are_pairwise_distinct_for_distinct_values() {
        let shares = row([Some(5.0), Some(4.0), Some(3.0), Some(2.0), Some(1.0)]);
        let picks = [
            select_placement(&shares, Placement::First).unwrap(),
            select_placement(&shares, Placement::Second).unwrap(),
            select_placement(&shares, Placement::Third).unwrap(),
        ];
        assert_eq!(picks[0], Party::TrzeciaDroga);
        assert_ne!(picks[0], picks[1]);
        assert_ne!(picks[1], picks[2]);
        assert_ne!(picks[0], picks[2]);
    }

    #[test]
    fn ties_resolve_by_declaration_order() {
        let shares = row([Some(20.0), Some(20.0), Some(20.0), Some(1.0), Some(2.0)]);
        assert_eq!(select_placement(&shares, Placement::First), Some(Party::TrzeciaDroga));
        assert_eq!(select_placement(&shares, Placement::Second), Some(Party::NowaLewica));
        assert_eq!(select_placement(&shares, Placement::Third), Some(Party::Pis));
    }

    #[test]
    fn insufficient_data_yields_no_placement() {
        let one = row([None, Some(12.0), None, None, None]);
        assert_eq!(select_placement(&one, Placement::First), Some(Party::NowaLewica));
        assert_eq!(select_placement(&one, Placement::Second), None);
        assert_eq!(select_placement(&one, Placement::Third), None);

        let two = row([Some(8.0), Some(12.0), None, None, None]);
        assert_eq!(select_placement(&two, Placement::Second), Some(Party::TrzeciaDroga));
        assert_eq!(select_placement(&two, Placement::Third), None);

        let none = row([None, None, None, None, None]);
        assert_eq!(select_placement(&none, Placement::First), None);
    }

    #[test]
    fn nan_shares_count_as_missing() {
        let shares = row([Some(f64::NAN), Some(3.0), Some(2.0), None, None]);
        assert_eq!(select_placement(&shares, Placement::First), Some(Party::NowaLewica));
        assert_eq!(select_placement(&shares, Placement::Third), None);
    }

    #[test]
    fn placement_column_labels_rows() {
        let support = DataFrame::new(vec![
            Column::new("trzecia_droga".into(), vec![Some(14.5), None]),
            Column::new("nowa_lewica".into(), vec![Some(20.0), None]),
            Column::new("pis".into(), vec![Some(25.0), Some(40.0)]),
            Column::new("konfederacja".into(), vec![Some(10.0), None]),
            Column::new("ko".into(), vec![Some(30.5), None]),
        ])
        .unwrap();

        let winners = placement_column(&support, Placement::First).unwrap();
        let winners: Vec<Option<&str>> = winners.str().unwrap().into_iter().collect();
        assert_eq!(winners, vec![Some("ko"), Some("pis")]);

        let seconds = placement_column(&support, Placement::Second).unwrap();
        let seconds: Vec<Option<&str>> = seconds.str().unwrap().into_iter().collect();
        assert_eq!(seconds, vec![Some("pis"), None]);
    }
}
