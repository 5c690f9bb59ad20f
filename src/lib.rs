pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::ProfileEngine, pipeline::ProfilePipeline};
pub use utils::error::{ProfileError, Result};
