use anyhow::Result;

use crate::cli::InputArgs;

pub fn run(args: &InputArgs) -> Result<()> {
    let mut atlas = super::open_atlas(args)?;
    for path in [atlas.winner_map()?, atlas.second_map()?, atlas.third_map()?] {
        println!("Wrote standings map -> {}", path.display());
    }
    Ok(())
}
