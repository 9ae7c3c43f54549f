use crate::utils::error::{Result, SplitError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.to_string_lossy();

    if path.as_os_str().is_empty() {
        return Err(SplitError::InvalidConfigValue {
            field: field_name.to_string(),
            value: display.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if display.contains('\0') {
        return Err(SplitError::InvalidConfigValue {
            field: field_name.to_string(),
            value: display.replace('\0', "\\0"),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 輸入與輸出不可指向同一個路徑
pub fn validate_distinct_paths(input: &Path, output_dir: &Path) -> Result<()> {
    if input == output_dir {
        return Err(SplitError::InvalidConfigValue {
            field: "output_dir".to_string(),
            value: output_dir.to_string_lossy().to_string(),
            reason: "Output directory must differ from the input file".to_string(),
        });
    }
    Ok(())
}
