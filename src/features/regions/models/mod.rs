mod region;

pub use region::{NewRegion, Region};
