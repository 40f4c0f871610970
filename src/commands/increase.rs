use anyhow::Result;

use crate::cli::InputArgs;

pub fn run(args: &InputArgs) -> Result<()> {
    let atlas = super::open_atlas(args)?;
    let path = atlas.increase_map()?;
    println!("Wrote increase map -> {}", path.display());
    Ok(())
}
