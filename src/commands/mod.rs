pub mod all;
pub mod increase;
pub mod report;
pub mod standings;
pub mod support;

use anyhow::Result;

use crate::cli::InputArgs;
use crate::Atlas;

fn open_atlas(inputs: &InputArgs) -> Result<Atlas> {
    Atlas::open(&inputs.shapes, &inputs.support, &inputs.increase, &inputs.out)
}
