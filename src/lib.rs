pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::RosterConfig;
pub use crate::core::report::{render, DogReport, ReportFormat};
pub use crate::domain::model::Dog;
pub use crate::utils::error::{KennelError, Result};
