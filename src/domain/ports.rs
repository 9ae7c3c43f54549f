use crate::domain::model::{ConversionReport, NamedChild};
use crate::utils::error::Result;
use serde_json::Value;
use std::path::Path;

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    /// Creates the output root if it does not exist yet.
    fn ensure_root(&self) -> Result<()>;
    fn write_file(&self, name: &str, data: &[u8]) -> Result<()>;
    fn root(&self) -> &Path;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn output_dir(&self) -> &Path;
}

pub trait Pipeline {
    /// Reads, parses and validates the document; returns its top-level children.
    fn extract(&self) -> Result<Vec<Value>>;
    fn transform(&self, children: Vec<Value>) -> Vec<NamedChild>;
    fn load(&self, named: Vec<NamedChild>) -> ConversionReport;
}
