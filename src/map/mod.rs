mod geom;
mod layer;
mod read;

pub use layer::RegionLayer;
