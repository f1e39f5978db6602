pub mod error;
pub mod excel;
pub mod json_export;
pub mod report;

pub use error::{ReportError, Result};
