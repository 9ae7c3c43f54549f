pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, SplitConfig};
pub use crate::core::{
    converter::{convert, Converter},
    naming::{resolve_name, sanitize_filename},
    splitter::SplitPipeline,
};
pub use domain::model::ConversionReport;
pub use utils::error::{Result, SplitError};
