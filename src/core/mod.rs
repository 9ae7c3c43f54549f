pub mod converter;
pub mod naming;
pub mod splitter;

pub use crate::domain::model::{ConversionReport, NamedChild};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
