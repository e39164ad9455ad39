//! Result documents and their on-disk store.

mod document;
mod store;

pub use document::{AnalysisReport, ReportStatus};
pub use store::{ResultStore, UploadRole};
