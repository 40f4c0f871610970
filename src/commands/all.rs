use anyhow::Result;

use crate::cli::InputArgs;
use crate::types::{Party, Placement};

/// Full run: every support map, the increase map, all three standings maps,
/// and a placement report per party per rank.
pub fn run(args: &InputArgs) -> Result<()> {
    let mut atlas = super::open_atlas(args)?;

    for party in Party::ALL {
        println!("Wrote {}", atlas.support_map(party)?.display());
    }
    println!("Wrote {}", atlas.increase_map()?.display());
    println!("Wrote {}", atlas.winner_map()?.display());
    println!("Wrote {}", atlas.second_map()?.display());
    println!("Wrote {}", atlas.third_map()?.display());

    for placement in [Placement::First, Placement::Second, Placement::Third] {
        for party in Party::ALL {
            let report = atlas.placement_report(party, placement)?;
            println!(
                "{} at place {}: {}/{} powiats with positive increase ({:.1}%)",
                party, placement, report.positive, report.regions, report.percent
            );
        }
    }
    Ok(())
}
