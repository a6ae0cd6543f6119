pub mod routes;
pub mod startup;
pub mod errors;
pub mod extract;
pub mod metrics;
pub mod openapi;

pub use startup::{run, run_with_config};
