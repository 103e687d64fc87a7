pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::SimulationConfig;
pub use error::{DaissError, Result};
