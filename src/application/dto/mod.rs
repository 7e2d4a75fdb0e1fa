//! Data Transfer Objects

mod classification_report;
mod classify_options;

pub use classification_report::{ClassificationReport, ClassifiedFile};
pub use classify_options::ClassifyOptions;
