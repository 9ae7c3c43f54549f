pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_FILE: &str = "ui.json";
pub const DEFAULT_OUTPUT_DIR: &str = "split_ui";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "ui-splitter")]
#[command(about = "Split a UI layout JSON into one file per top-level child")]
pub struct CliConfig {
    /// Layout JSON to split [default: ui.json next to the executable]
    pub input_file: Option<PathBuf>,

    /// Directory for the per-child files [default: split_ui next to the executable]
    pub output_dir: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 未指定的路徑以執行檔所在目錄為基準
    pub fn resolve(&self) -> Result<SplitConfig> {
        let base_dir = if self.input_file.is_some() && self.output_dir.is_some() {
            PathBuf::new()
        } else {
            executable_dir()?
        };

        Ok(SplitConfig {
            input_path: self
                .input_file
                .clone()
                .unwrap_or_else(|| base_dir.join(DEFAULT_INPUT_FILE)),
            output_dir: self
                .output_dir
                .clone()
                .unwrap_or_else(|| base_dir.join(DEFAULT_OUTPUT_DIR)),
        })
    }
}

#[cfg(feature = "cli")]
fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe.parent().map(Path::to_path_buf).unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
}

impl SplitConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
        }
    }
}

impl ConfigProvider for SplitConfig {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl Validate for SplitConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_file", &self.input_path)?;
        validate_path("output_dir", &self.output_dir)?;
        validate_distinct_paths(&self.input_path, &self.output_dir)?;
        Ok(())
    }
}
