mod party;
mod placement;
mod region_code;

pub use party::Party;
pub use placement::Placement;
pub use region_code::RegionCode;
