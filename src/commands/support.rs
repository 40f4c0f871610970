use anyhow::Result;

use crate::cli::SupportArgs;
use crate::types::Party;

pub fn run(args: &SupportArgs) -> Result<()> {
    let party: Party = args.party.parse()?;
    let atlas = super::open_atlas(&args.inputs)?;
    let path = atlas.support_map(party)?;
    println!("Wrote support map -> {}", path.display());
    Ok(())
}
