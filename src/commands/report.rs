use anyhow::Result;

use crate::cli::ReportArgs;
use crate::types::{Party, Placement};

pub fn run(args: &ReportArgs) -> Result<()> {
    let party: Party = args.party.parse()?;
    let placement = Placement::from_rank(args.place)?;

    let mut atlas = super::open_atlas(&args.inputs)?;
    // The report depends on standings columns; compute them up front so a
    // single CLI invocation is self-contained.
    atlas.winner_map()?;
    match placement {
        Placement::First => {}
        Placement::Second => { atlas.second_map()?; }
        Placement::Third => { atlas.third_map()?; }
    }

    let report = atlas.placement_report(party, placement)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
