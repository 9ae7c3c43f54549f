use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// 輸入文件的外層結構：`{ "layout": { "children": [...] } }`
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutDocument {
    pub layout: Layout,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Layout {
    pub children: Vec<Value>,
}

/// A child together with the name it was resolved to (before sanitizing).
#[derive(Debug, Clone, PartialEq)]
pub struct NamedChild {
    pub index: usize,
    pub name: String,
    pub child: Value,
}

/// One output file: the layout envelope wrapping a single child.
#[derive(Debug, Serialize)]
pub struct OutputRecord<'a> {
    pub layout: OutputLayout<'a>,
}

#[derive(Debug, Serialize)]
pub struct OutputLayout<'a> {
    pub children: [&'a Value; 1],
}

impl<'a> OutputRecord<'a> {
    pub fn new(child: &'a Value) -> Self {
        Self {
            layout: OutputLayout { children: [child] },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    pub found: usize,
    pub created: Vec<String>,
    /// (file name, error message)
    pub failed: Vec<(String, String)>,
    pub output_dir: PathBuf,
}

impl ConversionReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
