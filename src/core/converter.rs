use crate::config::SplitConfig;
use crate::core::splitter::SplitPipeline;
use crate::core::{ConversionReport, Pipeline};
use crate::utils::error::Result;
use std::path::Path;

pub struct Converter<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> Converter<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<ConversionReport> {
        // Extract
        let children = self.pipeline.extract()?;

        // Transform
        let named = self.pipeline.transform(children);
        println!("Found {} children to convert:", named.len());

        // Load
        let report = self.pipeline.load(named);
        println!(
            "\nConversion completed! Files saved to: {}",
            report.output_dir.display()
        );

        tracing::debug!(
            "{} created, {} failed",
            report.created.len(),
            report.failed.len()
        );
        Ok(report)
    }
}

/// Splits `input_path` into per-child files under `output_dir`.
///
/// Returns `false` only when the document itself could not be read,
/// parsed or validated. Failed file writes are reported but still count
/// as success.
pub fn convert(input_path: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> bool {
    let config = SplitConfig::new(input_path.as_ref(), output_dir.as_ref());
    let converter = Converter::new(SplitPipeline::local(config));

    match converter.run() {
        Ok(_) => true,
        Err(e) => {
            tracing::error!("Conversion failed ({:?}): {}", e.category(), e);
            tracing::debug!("Suggestion: {}", e.recovery_suggestion());
            println!("Error: {}", e);
            false
        }
    }
}
