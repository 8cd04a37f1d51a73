pub mod config;
pub mod error;
pub mod policy;
pub mod telemetry;

pub use config::{Environment, Settings};
pub use error::AppError;
pub use policy::RequestPolicy;
