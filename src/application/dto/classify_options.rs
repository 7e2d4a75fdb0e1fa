//! Classify options DTO

use crate::domain::entities::FileType;

/// Options for classifying a batch of files
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    /// File types to test for, in order (empty = every known type)
    pub file_types: Vec<FileType>,
    /// Whether to classify files in parallel
    pub parallel: bool,
    /// Whether to record each file's size in the report
    pub include_size: bool,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            file_types: Vec::new(), // All types
            parallel: true,
            include_size: false,
        }
    }
}

impl ClassifyOptions {
    /// Sets the file types to test for
    pub fn with_types(mut self, types: Vec<FileType>) -> Self {
        self.file_types = types;
        self
    }

    pub fn with_size(mut self, include_size: bool) -> Self {
        self.include_size = include_size;
        self
    }

    /// Disables parallel classification
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}
