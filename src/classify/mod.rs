mod bins;
mod sign;

pub use bins::BucketScale;
pub use sign::IncreaseSign;
