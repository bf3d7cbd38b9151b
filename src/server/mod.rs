//! HTTP surface for the matching flow and static catalogs.

pub mod routes;

pub use routes::{app_router, AppState};
