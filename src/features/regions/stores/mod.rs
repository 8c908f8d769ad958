pub mod region_store;

pub use region_store::{PgRegionStore, RegionStore};
