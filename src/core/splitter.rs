use crate::config::cli::LocalStorage;
use crate::core::naming::{name_child, sanitize_filename};
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{ConversionReport, LayoutDocument, NamedChild, OutputRecord};
use crate::utils::error::{Result, SplitError};
use serde_json::Value;

pub struct SplitPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SplitPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn write_child(&self, named: &NamedChild) -> Result<String> {
        let filename = format!("{}.json", sanitize_filename(&named.name));
        let record = OutputRecord::new(&named.child);
        let json_data = serde_json::to_string_pretty(&record)?;
        self.storage.write_file(&filename, json_data.as_bytes())?;
        Ok(filename)
    }
}

impl<C: ConfigProvider> SplitPipeline<LocalStorage, C> {
    /// 輸出目錄只取自設定，避免 storage 與 config 指向不同位置
    pub fn local(config: C) -> Self {
        let storage = LocalStorage::new(config.output_dir());
        Self::new(storage, config)
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for SplitPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Value>> {
        let input_path = self.config.input_path();
        tracing::debug!("Reading layout from: {}", input_path.display());

        let raw = self.storage.read_file(input_path)?;
        let data: Value = serde_json::from_slice(&raw).map_err(|source| SplitError::Parse {
            path: input_path.to_path_buf(),
            source,
        })?;

        // 輸出目錄在結構檢查之前建立
        self.storage.ensure_root()?;

        let document: LayoutDocument =
            serde_json::from_value(data).map_err(|e| {
                tracing::debug!("Layout structure mismatch: {}", e);
                SplitError::schema_missing_children()
            })?;

        tracing::debug!("Extracted {} children", document.layout.children.len());
        Ok(document.layout.children)
    }

    fn transform(&self, children: Vec<Value>) -> Vec<NamedChild> {
        children
            .into_iter()
            .enumerate()
            .map(|(index, child)| name_child(index, child))
            .collect()
    }

    fn load(&self, named: Vec<NamedChild>) -> ConversionReport {
        let mut report = ConversionReport {
            found: named.len(),
            output_dir: self.storage.root().to_path_buf(),
            ..Default::default()
        };

        for item in &named {
            match self.write_child(item) {
                Ok(filename) => {
                    tracing::debug!("Child {} ('{}') written to {}", item.index, item.name, filename);
                    println!("  ✓ Created: {}", filename);
                    report.created.push(filename);
                }
                Err(e) => {
                    let filename = format!("{}.json", sanitize_filename(&item.name));
                    tracing::warn!("Failed to write child {}: {}", item.index, e);
                    println!("  ✗ Failed to create {}: {}", filename, e);
                    report.failed.push((filename, e.to_string()));
                }
            }
        }

        report
    }
}
