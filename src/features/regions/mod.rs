//! Regions feature.
//!
//! CRUD over the `regions` table. Rows are read and written through a
//! [`stores::RegionStore`]; the service maps rows to [`dtos::RegionResponseDto`]
//! so the table can change without changing the API.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/regions` | List all regions |
//! | GET | `/api/regions/{id}` | Get region by id |
//! | POST | `/api/regions` | Create a region |
//! | DELETE | `/api/regions/{id}` | Delete a region |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;

pub use services::RegionService;
pub use stores::PgRegionStore;
