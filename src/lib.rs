#![doc = "Powiat choropleth atlas public API"]
mod analysis;
mod classify;
mod fs;
mod map;
mod rank;
mod render;
mod table;
mod types;

pub mod cli;
pub mod commands;

#[doc(inline)]
pub use analysis::{Atlas, PlacementReport, Standings};

#[doc(inline)]
pub use classify::{BucketScale, IncreaseSign};

#[doc(inline)]
pub use map::RegionLayer;

#[doc(inline)]
pub use rank::select_placement;

#[doc(inline)]
pub use types::{Party, Placement, RegionCode};
